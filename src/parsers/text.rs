//! KakaoTalk plain-text export parser.
//!
//! The text export looks like:
//!
//! ```text
//! 지수 님과 카카오톡 대화
//! 저장한 날짜 : 2024-03-02 10:00:00
//!
//! --------------- 2024년 3월 1일 금요일 ---------------
//! [지수] [오전 9:15] 안녕!
//! [나] [오후 1:05] 점심 먹었어?
//! 두 번째 줄
//! ```
//!
//! Lines that are neither a banner nor a message are treated as a
//! continuation of the previous message. A line the message pattern
//! doesn't recognize is indistinguishable from a wrapped line, so this is
//! best-effort.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::config::ParseConfig;
use crate::error::KakaopackError;
use crate::event::Conversation;
use crate::parser::{ExportFormat, Parser};
use crate::parsing::{ParseContext, banner_date_key, normalize_time, parse_banner_date};

const HEADER_MARKER: &str = "님과 카카오톡 대화";

static HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(.*) 님과 카카오톡 대화").unwrap());

// --------------- 2024년 3월 1일 금요일 ---------------
static BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+ (\d{4}년 \d{1,2}월 \d{1,2}일.*?) -+$").unwrap());

// [name] [오후 1:05] content
static MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(.*?)\] \[(오전|오후) (\d{1,2}:\d{2})\] ?(.*)$").unwrap()
});

/// Parser for KakaoTalk plain-text exports.
///
/// # Example
///
/// ```rust
/// use kakaopack::parser::Parser;
/// use kakaopack::parsers::KakaoTextParser;
/// use kakaopack::Sender;
///
/// let export = "지수 님과 카카오톡 대화\n\
///               --------------- 2024년 3월 1일 금요일 ---------------\n\
///               [지수] [오후 1:05] 안녕!\n";
///
/// let events = KakaoTextParser::new().parse_str(export, None)?;
/// assert_eq!(events[0].text(), "2024년 3월 1일 금요일");
/// assert_eq!(events[1].sender(), Some(Sender::Other));
/// assert_eq!(events[1].time_label(), "2024-03-01 13:05");
/// # Ok::<(), kakaopack::KakaopackError>(())
/// ```
pub struct KakaoTextParser {
    config: ParseConfig,
}

impl KakaoTextParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParseConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Other-party name from the `<name> 님과 카카오톡 대화` header line.
    fn other_party(&self, content: &str) -> String {
        content
            .lines()
            .find(|line| line.contains(HEADER_MARKER))
            .and_then(|line| HEADER.captures(line))
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_else(|| self.config.default_other_party.clone())
    }
}

impl Default for KakaoTextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for KakaoTextParser {
    fn name(&self) -> &'static str {
        "KakaoTalk Text"
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Text
    }

    fn parse_conversation(
        &self,
        content: &str,
        _filename: Option<&str>,
    ) -> Result<Conversation, KakaopackError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut ctx = ParseContext::new(self.other_party(content));
        let mut current_date: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = BANNER.captures(line) {
                let banner = &caps[1];
                if parse_banner_date(banner).is_none() {
                    warn!(banner, "banner date is not a calendar date");
                }
                current_date = banner_date_key(banner);
                ctx.push_system(banner);
                continue;
            }

            if let Some(caps) = MESSAGE.captures(line) {
                if let Some(time) = normalize_time(&caps[2], &caps[3]) {
                    let time_label = match &current_date {
                        Some(date) => format!("{date} {time}"),
                        None => time,
                    };
                    ctx.push_message(&caps[1], &caps[4], time_label);
                    continue;
                }
            }

            ctx.continue_message(line);
        }

        ctx.finish(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RosterPolicy;
    use crate::event::{Event, Sender};

    const SAMPLE: &str = "\
지수 님과 카카오톡 대화
저장한 날짜 : 2024-03-02 10:00:00

--------------- 2024년 3월 1일 금요일 ---------------
[지수] [오전 9:15] 안녕!
[나] [오후 1:05] 점심 먹었어?
두 번째 줄
[지수] [오후 12:00] 응
";

    fn parse(content: &str) -> Vec<Event> {
        KakaoTextParser::new().parse_str(content, None).unwrap()
    }

    #[test]
    fn test_parse_sample() {
        let events = parse(SAMPLE);
        assert_eq!(events.len(), 4);

        assert_eq!(events[0], Event::system("2024년 3월 1일 금요일"));
        assert_eq!(
            events[1],
            Event::message(Sender::Other, "지수", "안녕!", "2024-03-01 09:15")
        );
        assert_eq!(
            events[2],
            Event::message(Sender::Me, "나", "점심 먹었어?\n두 번째 줄", "2024-03-01 13:05")
        );
        assert_eq!(events[3].time_label(), "2024-03-01 12:00");
    }

    #[test]
    fn test_header_name_resolution() {
        let conv = KakaoTextParser::new()
            .parse_conversation("  김 수민   님과 카카오톡 대화\n", None)
            .unwrap();
        assert_eq!(conv.other_party, "김 수민");
    }

    #[test]
    fn test_missing_header_uses_default() {
        let events = parse("[상대방] [오전 1:00] hi\n[민호] [오전 1:01] yo");
        assert_eq!(events[0].sender(), Some(Sender::Other));
        assert_eq!(events[1].sender(), Some(Sender::Me));
    }

    #[test]
    fn test_configured_default_name() {
        let parser =
            KakaoTextParser::with_config(ParseConfig::new().with_default_other_party("민호"));
        let events = parser.parse_str("[민호] [오전 1:00] hi", None).unwrap();
        assert_eq!(events[0].sender(), Some(Sender::Other));
    }

    #[test]
    fn test_message_before_banner_has_bare_time() {
        let events = parse("[지수] [오후 11:30] 늦었다");
        assert_eq!(events[0].time_label(), "23:30");
    }

    #[test]
    fn test_repeated_banner_emits_each_time() {
        let content = "\
--------------- 2024년 3월 1일 금요일 ---------------
--------------- 2024년 3월 1일 금요일 ---------------
";
        let events = parse(content);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(Event::is_system));
    }

    #[test]
    fn test_invalid_banner_date_keeps_its_key() {
        let content = "\
--------------- 2024년 3월 1일 금요일 ---------------
[지수] [오전 9:00] a
--------------- 2024년 2월 30일 금요일 ---------------
[지수] [오전 9:01] b
";
        let events = parse(content);
        assert_eq!(events[2].text(), "2024년 2월 30일 금요일");
        assert_eq!(events[3].time_label(), "2024-02-30 09:01");
    }

    #[test]
    fn test_leading_bom_is_ignored() {
        let conv = KakaoTextParser::new()
            .parse_conversation("\u{feff}지수 님과 카카오톡 대화\n[지수] [오전 9:00] 안녕", None)
            .unwrap();
        assert_eq!(conv.other_party, "지수");
        assert_eq!(conv.events[0].sender(), Some(Sender::Other));
    }

    #[test]
    fn test_continuation_without_message_is_dropped() {
        let events = parse("orphan line\n--------------- 2024년 3월 1일 금요일 ---------------\nstill orphan");
        assert_eq!(events, vec![Event::system("2024년 3월 1일 금요일")]);
    }

    #[test]
    fn test_empty_content_message() {
        let events = parse("[지수] [오전 9:00]");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].text(), "");
    }

    #[test]
    fn test_out_of_range_time_is_continuation() {
        let events = parse("[지수] [오전 9:00] a\n[지수] [오후 13:00] b");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].text(), "a\n[지수] [오후 13:00] b");
    }

    #[test]
    fn test_lines_are_trimmed() {
        let events = parse("   [지수] [오전 9:00] a   \r\n\t  이어서  ");
        assert_eq!(events[0].text(), "a\n이어서");
    }

    #[test]
    fn test_nfd_header_matches_nfc_author() {
        let nfd = "\u{110C}\u{1175}\u{1109}\u{116E}";
        let content = format!("{nfd} 님과 카카오톡 대화\n[지수] [오전 9:00] a");
        let events = parse(&content);
        assert_eq!(events[0].sender(), Some(Sender::Other));
    }

    #[test]
    fn test_cap_keeps_latest() {
        let mut content = String::new();
        for i in 0..1500 {
            content.push_str(&format!("[지수] [오전 9:00] {i}\n"));
        }
        let events = parse(&content);
        assert_eq!(events.len(), 1000);
        assert_eq!(events[0].text(), "500");
        assert_eq!(events[999].text(), "1499");
    }

    #[test]
    fn test_reject_roster_policy() {
        let parser =
            KakaoTextParser::with_config(ParseConfig::new().with_roster_policy(RosterPolicy::Reject));
        let result = parser.parse_str(
            "[지수] [오전 9:00] a\n[민호] [오전 9:01] b\n[서연] [오전 9:02] c",
            None,
        );
        assert!(result.unwrap_err().is_roster());
    }
}
