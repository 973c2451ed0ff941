//! # kakaopack CLI
//!
//! Command-line interface for the kakaopack library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kakaopack::KakaopackError;
use kakaopack::cli::Args;
use kakaopack::core::ConversationStats;
use kakaopack::format::write_to_format;
use kakaopack::parser::parse_file_with_config;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "kakaopack=debug"
    } else {
        "kakaopack=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<(), KakaopackError> {
    let total_start = Instant::now();
    let output_path = args.output_path();

    println!("📦 kakaopack v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📖 Source:  {}", args.source);
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {output_path}");
    println!("📄 Format:  {}", args.format);
    println!();

    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let conversation = parse_file_with_config(&args.input, args.source.into(), args.parse_config())?;
    let stats = ConversationStats::from_events(&conversation.events);
    println!(
        "   Found {} events ({:.2}s)",
        stats.total(),
        parse_start.elapsed().as_secs_f64()
    );

    println!("💾 Writing {}...", args.format);
    write_to_format(
        &conversation.events,
        &output_path,
        args.format,
        &args.output_config(),
    )?;

    println!();
    println!("✅ Done! Output saved to {output_path}");

    println!();
    println!("📊 Summary:");
    println!("   Other party:  {}", conversation.other_party);
    println!("   Day markers:  {}", stats.system_events);
    println!("   Mine:         {}", stats.my_messages);
    println!(
        "   Theirs:       {} ({:.1}%)",
        stats.other_messages,
        stats.other_share()
    );
    println!("   Authors:      {}", conversation.roster.len());
    for participant in conversation.roster.participants() {
        println!(
            "     - {} ({} messages)",
            participant.name, participant.message_count
        );
    }

    println!();
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
