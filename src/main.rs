use std::env;
use std::path::Path;

use dotenvy::dotenv;
use flowscreen::config::AppConfig;
use flowscreen::ingest::parse_csv_file;
use flowscreen::logging::{self, LogTarget};
use flowscreen::models::{SignalResult, StreakResult};
use flowscreen::signals::run_screener_with_config;
use flowscreen::store::{MemoryStore, RecordStore};
use flowscreen::streaks::detect_streaks_with_config;
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let config = AppConfig::from_env();
    logging::init_logging(&config.environment, LogTarget::Stderr);

    let files: Vec<String> = env::args().skip(1).collect();
    if files.is_empty() {
        eprintln!("usage: flowscreen <daily-export.csv>...");
        std::process::exit(2);
    }

    let today = chrono::Local::now().date_naive();
    let mut store = MemoryStore::new();

    for file in &files {
        match parse_csv_file(Path::new(file), today) {
            Ok(records) => {
                let count = store.upsert(records)?;
                info!(file = %file, count, "loaded export");
            }
            Err(e) => error!(file = %file, error = %e, "failed to load export"),
        }
    }

    let records = store.recent(config.fetch_limit)?;
    let streaks = detect_streaks_with_config(&records, &config.streaks);
    let signals = run_screener_with_config(&records, &config.screener);

    println!("Foreign accumulation (>= {} days):", config.streaks.accumulation.min_days);
    print_streaks(&streaks.accumulation);
    println!();
    println!("Foreign distribution (>= {} days):", config.streaks.distribution.min_days);
    print_streaks(&streaks.distribution);
    println!();
    println!("Screener:");
    print_signals(&signals);

    Ok(())
}

fn print_streaks(streaks: &[StreakResult]) {
    if streaks.is_empty() {
        println!("  (none)");
    }
    for s in streaks {
        println!(
            "  {:<6} {:<30} {:>2} days since {}  net {:>16.0}  close {:>10.2}  as of {}",
            s.ticker_code,
            s.company_name,
            s.duration_days,
            s.streak_start_date,
            s.cumulative_net,
            s.latest_close,
            s.latest_date
        );
    }
}

fn print_signals(signals: &[SignalResult]) {
    if signals.is_empty() {
        println!("  (none)");
    }
    for s in signals {
        println!(
            "  {:<6} {:<5} score {} close {:>10.2} RSI {:>3.0} MACD {:>8.2} hist {:>8.2} EMA20 {:>10.2}  {}",
            s.ticker_code,
            s.signal,
            s.score,
            s.latest_close,
            s.rsi,
            s.macd,
            s.macd_histogram,
            s.ema20,
            s.reason_text()
        );
    }
}
