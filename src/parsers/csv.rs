//! KakaoTalk CSV export parser.
//!
//! The CSV export looks like:
//!
//! ```text
//! Date,User,Message
//! 2024-03-01 09:15:00,"지수","안녕!"
//! 2024-03-01 09:16:10,"나","He said ""hi""
//! Bye"
//! ```
//!
//! The date column is unquoted, user and message are quoted with `""`
//! escaping, and messages may contain raw line breaks. Exports are
//! frequently hand-edited or truncated, so records are read by a lenient
//! scanner ([`RecordScanner`]) that drops malformed spans and resumes at
//! the next record start instead of failing.
//!
//! The other party isn't named inside the file; it comes from the export
//! filename (`KakaoTalk_Chat_<name>_<timestamp>.csv`).

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::config::ParseConfig;
use crate::error::KakaopackError;
use crate::event::Conversation;
use crate::parser::{ExportFormat, Parser};
use crate::parsing::{ParseContext, date_key, korean_date_label, other_party_from_filename};

const HEADER: &str = "Date,User,Message";
const TIMESTAMP_LEN: usize = 19;
const TIMESTAMP_SHAPE: &[u8; TIMESTAMP_LEN] = b"0000-00-00 00:00:00";

/// Parser for KakaoTalk CSV exports.
///
/// # Example
///
/// ```rust
/// use kakaopack::parser::Parser;
/// use kakaopack::parsers::KakaoCsvParser;
/// use kakaopack::Sender;
///
/// let export = "Date,User,Message\n2024-03-01 09:15:00,\"지수\",\"안녕!\"\n";
/// let filename = "KakaoTalk_Chat_지수_2024-03-02-10-00-00.csv";
///
/// let events = KakaoCsvParser::new().parse_str(export, Some(filename))?;
/// assert_eq!(events[0].text(), "2024년 3월 1일 금요일");
/// assert_eq!(events[1].sender(), Some(Sender::Other));
/// assert_eq!(events[1].time_label(), "2024-03-01 09:15");
/// # Ok::<(), kakaopack::KakaopackError>(())
/// ```
pub struct KakaoCsvParser {
    config: ParseConfig,
}

impl KakaoCsvParser {
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
}

impl Default for KakaoCsvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for KakaoCsvParser {
    fn name(&self) -> &'static str {
        "KakaoTalk CSV"
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn parse_conversation(
        &self,
        content: &str,
        filename: Option<&str>,
    ) -> Result<Conversation, KakaopackError> {
        let other_party = filename
            .and_then(other_party_from_filename)
            .unwrap_or_else(|| self.config.default_other_party.clone());
        let mut ctx = ParseContext::new(other_party);

        let mut records = 0usize;
        for record in RecordScanner::new(content) {
            let date = record.timestamp.date();
            ctx.mark_date(&date_key(date), || korean_date_label(date));

            let time_label = record.timestamp.format("%Y-%m-%d %H:%M").to_string();
            ctx.push_message(&record.user, record.message, time_label);
            records += 1;
        }
        debug!(records, "scanned csv export");

        ctx.finish(&self.config)
    }
}

/// One `Date,"User","Message"` row with quotes already unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub timestamp: NaiveDateTime,
    pub user: String,
    pub message: String,
}

/// Scanner states. Every transition either consumes a byte or moves to a
/// state that will.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for a valid `YYYY-MM-DD HH:MM:SS` at the cursor.
    SeekRecordStart,
    ExpectUserComma,
    ExpectUserQuote,
    ReadUser,
    /// Saw `"` inside the user field: either `""` or the closing quote.
    ReadUserEscapedQuote,
    ExpectMessageComma,
    ExpectMessageQuote,
    ReadMessage,
    /// Saw `"` inside the message field: either `""` or the closing quote.
    ReadMessageEscapedQuote,
}

/// Lenient record scanner over the body of a CSV export.
///
/// Any structural mismatch advances the cursor one byte past the offending
/// position and returns to [`ScanState::SeekRecordStart`], so each failed
/// attempt makes progress and the scan is linear in the input length.
///
/// A message whose closing quote is missing would otherwise swallow every
/// following row. When a line break inside a message is directly followed
/// by a complete record start (`<timestamp>,` and an odd run of `"`), the
/// open record is dropped and scanning resumes there. A record still open
/// at end of input is dropped too.
///
/// The cursor is a byte offset. All delimiters are ASCII, so every slice
/// taken between them falls on a char boundary.
pub struct RecordScanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> RecordScanner<'a> {
    /// Skips a leading BOM and the `Date,User,Message` header line.
    pub fn new(text: &'a str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let pos = if text.starts_with(HEADER) {
            text.find('\n').map_or(text.len(), |i| i + 1)
        } else {
            0
        };
        Self { text, pos }
    }

    fn byte(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn resync(&mut self, state: ScanState) -> ScanState {
        trace!(offset = self.pos, ?state, "malformed record, resynchronizing");
        self.pos += 1;
        ScanState::SeekRecordStart
    }

    fn skip_whitespace(&mut self) {
        while self.byte().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }
}

impl Iterator for RecordScanner<'_> {
    type Item = RawRecord;

    fn next(&mut self) -> Option<RawRecord> {
        let mut state = ScanState::SeekRecordStart;
        let mut timestamp = NaiveDateTime::MIN;
        let mut user = String::new();
        let mut message = String::new();
        // Start of the current run of unescaped field bytes.
        let mut segment = self.pos;

        loop {
            let byte = self.byte();
            state = match state {
                ScanState::SeekRecordStart => {
                    byte?;
                    match timestamp_at(self.text, self.pos) {
                        Some(ts) => {
                            timestamp = ts;
                            user.clear();
                            message.clear();
                            self.pos += TIMESTAMP_LEN;
                            ScanState::ExpectUserComma
                        }
                        None => {
                            self.pos += 1;
                            ScanState::SeekRecordStart
                        }
                    }
                }
                ScanState::ExpectUserComma => match byte {
                    Some(b',') => {
                        self.pos += 1;
                        ScanState::ExpectUserQuote
                    }
                    _ => self.resync(state),
                },
                ScanState::ExpectUserQuote => match byte {
                    Some(b'"') => {
                        self.pos += 1;
                        segment = self.pos;
                        ScanState::ReadUser
                    }
                    _ => self.resync(state),
                },
                ScanState::ReadUser => match byte {
                    Some(b'"') => {
                        user.push_str(&self.text[segment..self.pos]);
                        self.pos += 1;
                        ScanState::ReadUserEscapedQuote
                    }
                    // Display names never span lines.
                    Some(b'\n') | None => self.resync(state),
                    Some(_) => {
                        self.pos += 1;
                        ScanState::ReadUser
                    }
                },
                ScanState::ReadUserEscapedQuote => match byte {
                    Some(b'"') => {
                        user.push('"');
                        self.pos += 1;
                        segment = self.pos;
                        ScanState::ReadUser
                    }
                    _ => ScanState::ExpectMessageComma,
                },
                ScanState::ExpectMessageComma => match byte {
                    Some(b',') => {
                        self.pos += 1;
                        ScanState::ExpectMessageQuote
                    }
                    _ => self.resync(state),
                },
                ScanState::ExpectMessageQuote => match byte {
                    Some(b'"') => {
                        self.pos += 1;
                        segment = self.pos;
                        ScanState::ReadMessage
                    }
                    _ => self.resync(state),
                },
                ScanState::ReadMessage => match byte {
                    Some(b'"') => {
                        message.push_str(&self.text[segment..self.pos]);
                        self.pos += 1;
                        ScanState::ReadMessageEscapedQuote
                    }
                    Some(b'\n') if is_record_start(self.text, self.pos + 1) => {
                        trace!(offset = self.pos, "unterminated message, resuming at next record");
                        self.pos += 1;
                        ScanState::SeekRecordStart
                    }
                    Some(_) => {
                        self.pos += 1;
                        ScanState::ReadMessage
                    }
                    None => {
                        trace!("unterminated message at end of input");
                        return None;
                    }
                },
                ScanState::ReadMessageEscapedQuote => match byte {
                    Some(b'"') => {
                        message.push('"');
                        self.pos += 1;
                        segment = self.pos;
                        ScanState::ReadMessage
                    }
                    _ => {
                        self.skip_whitespace();
                        return Some(RawRecord {
                            timestamp,
                            user,
                            message,
                        });
                    }
                },
            };
        }
    }
}

/// Parses a `YYYY-MM-DD HH:MM:SS` timestamp starting at byte `pos`.
///
/// Returns `None` for a wrong shape, a non-existent date or time, or a
/// `pos` that isn't on a char boundary.
fn timestamp_at(text: &str, pos: usize) -> Option<NaiveDateTime> {
    let candidate = text.get(pos..pos + TIMESTAMP_LEN)?;
    let shape_ok = candidate
        .bytes()
        .zip(TIMESTAMP_SHAPE)
        .all(|(b, &t)| if t == b'0' { b.is_ascii_digit() } else { b == t });
    if !shape_ok {
        return None;
    }
    NaiveDateTime::parse_from_str(candidate, "%Y-%m-%d %H:%M:%S").ok()
}

/// `true` if a full `<timestamp>,"` record prefix starts at `pos`.
///
/// Escaped field text always carries an even run of `"`, so only an odd
/// run after the comma opens a user field.
fn is_record_start(text: &str, pos: usize) -> bool {
    if timestamp_at(text, pos).is_none() {
        return false;
    }
    let rest = text.as_bytes().get(pos + TIMESTAMP_LEN..).unwrap_or_default();
    match rest.strip_prefix(b",") {
        Some(field) => field.iter().take_while(|&&b| b == b'"').count() % 2 == 1,
        None => false,
    }
}
