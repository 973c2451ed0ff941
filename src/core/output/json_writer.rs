//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, output_records};
use crate::error::KakaopackError;
use crate::event::Event;

/// Writes events to a JSON file as an array of payloads.
///
/// # Format
/// ```json
/// [
///   {"sender": "SYSTEM", "text": "2024년 3월 1일 금요일", "timeLabel": ""},
///   {"sender": "OTHER", "text": "안녕!", "timeLabel": "2024-03-01 09:15"}
/// ]
/// ```
pub fn write_json(
    events: &[Event],
    output_path: &str,
    config: &OutputConfig,
) -> Result<(), KakaopackError> {
    let json = to_json(events, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts events to a pretty-printed JSON array.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(events: &[Event], config: &OutputConfig) -> Result<String, KakaopackError> {
    let records = output_records(events, config);
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Sender;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<Event> {
        vec![
            Event::system("2024년 3월 1일 금요일"),
            Event::message(Sender::Other, "지수", "안녕!", "2024-03-01 09:15"),
            Event::message(Sender::Me, "나", "응 \"안녕\"", "2024-03-01 09:16"),
        ]
    }

    #[test]
    fn test_to_json_basic() {
        let json = to_json(&sample(), &OutputConfig::new()).unwrap();

        assert!(json.contains(r#""sender": "SYSTEM""#));
        assert!(json.contains(r#""sender": "OTHER""#));
        assert!(json.contains(r#""sender": "USER""#));
        assert!(json.contains(r#""timeLabel": "2024-03-01 09:15""#));
        assert!(!json.contains("senderName"));
    }

    #[test]
    fn test_to_json_with_names() {
        let json = to_json(&sample(), &OutputConfig::new().with_names()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed[0].get("senderName").is_none());
        assert_eq!(parsed[1]["senderName"], "지수");
        assert_eq!(parsed[2]["text"], "응 \"안녕\"");
    }

    #[test]
    fn test_write_json_without_system() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_json(&sample(), path, &OutputConfig::new().without_system()).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 2);
        assert!(!content.contains("SYSTEM"));
    }
}
