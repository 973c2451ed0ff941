//! JSON Lines (JSONL) output writer.
//!
//! One payload per line, which is what batch upload endpoints and
//! line-oriented tooling expect.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::models::{OutputConfig, output_records};
use crate::error::KakaopackError;
use crate::event::Event;

/// Writes events to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"sender":"SYSTEM","text":"2024년 3월 1일 금요일","timeLabel":""}
/// {"sender":"OTHER","text":"안녕!","timeLabel":"2024-03-01 09:15"}
/// ```
pub fn write_jsonl(
    events: &[Event],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), KakaopackError> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, events, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts events to a JSONL string.
pub fn to_jsonl(events: &[Event], config: &OutputConfig) -> Result<String, KakaopackError> {
    let mut buf = Vec::new();
    write_lines(&mut buf, events, config)?;
    Ok(String::from_utf8(buf)?)
}

fn write_lines<W: Write>(
    writer: &mut W,
    events: &[Event],
    config: &OutputConfig,
) -> Result<(), KakaopackError> {
    for record in output_records(events, config) {
        let line = serde_json::to_string(&record)?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
