//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, output_records};
use crate::error::KakaopackError;
use crate::event::Event;

/// Writes events to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Sender`, `Time`, `Text`, plus `Name` when names are enabled
/// - Encoding: UTF-8
pub fn write_csv(
    events: &[Event],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), KakaopackError> {
    let file = File::create(output_path)?;
    write_records(file, events, config)
}

/// Converts events to a CSV string.
pub fn to_csv(events: &[Event], config: &OutputConfig) -> Result<String, KakaopackError> {
    let mut buf = Vec::new();
    write_records(&mut buf, events, config)?;
    Ok(String::from_utf8(buf)?)
}

fn write_records<W: Write>(
    sink: W,
    events: &[Event],
    config: &OutputConfig,
) -> Result<(), KakaopackError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;

    for record in output_records(events, config) {
        let mut row = vec![
            record.payload.sender.as_str().to_string(),
            record.payload.time_label,
            record.payload.text,
        ];
        if config.include_names {
            row.push(record.sender_name.unwrap_or_default());
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["Sender", "Time", "Text"];
    if config.include_names {
        header.push("Name");
    }
    header
}
