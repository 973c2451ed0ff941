//! Example: Using kakaopack as a library
//!
//! This example demonstrates how to use kakaopack in your own projects.
//!
//! Run with: cargo run --example library_usage

use kakaopack::prelude::*;

const TEXT_EXPORT: &str = "\
지수 님과 카카오톡 대화
저장한 날짜 : 2024-03-02 10:00:00

--------------- 2024년 3월 1일 금요일 ---------------
[지수] [오전 9:15] 안녕!
[나] [오후 1:05] 점심 먹었어?
아직이면 같이 먹자
[지수] [오후 1:07] 좋아
";

const CSV_EXPORT: &str = "\
Date,User,Message
2024-03-01 09:15:00,\"지수\",\"안녕!\"
2024-03-01 13:05:00,\"나\",\"He said \"\"hi\"\"
Bye\"
2024-03-02 08:00:00,\"지수\",\"broken row
2024-03-02 08:01:00,\"지수\",\"좋은 아침\"
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== kakaopack Library Usage Examples ===\n");

    // Example 1: Parse a plain-text export
    println!("1. Plain-text export:");
    let conversation = KakaoTextParser::new().parse_conversation(TEXT_EXPORT, None)?;
    println!("   Other party: {}", conversation.other_party);
    for event in &conversation.events {
        print_event(event);
    }

    // Example 2: Parse a CSV export; the filename names the other party
    println!("\n2. CSV export (one row is missing its closing quote):");
    let filename = "KakaoTalk_Chat_지수_2024-03-02-10-00-00.csv";
    let events = KakaoCsvParser::new().parse_str(CSV_EXPORT, Some(filename))?;
    for event in &events {
        print_event(event);
    }

    // Example 3: Custom configuration
    println!("\n3. Keeping only the 2 most recent events:");
    let parser = create_parser_with_config(
        ExportFormat::Text,
        ParseConfig::new().with_max_events(Some(2)),
    );
    for event in parser.parse_str(TEXT_EXPORT, None)? {
        print_event(&event);
    }

    // Example 4: Rejecting group chats
    println!("\n4. Strict roster:");
    let group = "[지수] [오전 9:00] a\n[민호] [오전 9:01] b\n[서연] [오전 9:02] c";
    let strict = KakaoTextParser::with_config(
        ParseConfig::new().with_roster_policy(RosterPolicy::Reject),
    );
    match strict.parse_str(group, None) {
        Ok(_) => println!("   accepted"),
        Err(e) => println!("   rejected: {e}"),
    }

    // Example 5: Statistics
    println!("\n5. Statistics:");
    let stats = ConversationStats::from_events(&conversation.events);
    println!("   Day markers: {}", stats.system_events);
    println!("   Mine:        {}", stats.my_messages);
    println!("   Theirs:      {}", stats.other_messages);

    // Example 6: Network payloads as JSON
    println!("\n6. JSON payloads:");
    let json = to_json(&events, &OutputConfig::new())?;
    for line in json.lines().take(12) {
        println!("   {line}");
    }

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn print_event(event: &Event) {
    match event {
        Event::System { text } => println!("   ── {text} ──"),
        Event::Message(msg) => println!(
            "   [{}] {} ({}): {}",
            msg.time_label,
            msg.sender_name,
            msg.sender,
            msg.text.replace('\n', " | ")
        ),
    }
}
