//! `slots` CLI -- inspect and update the shared two-party availability
//! document from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a slot text and print its canonical form
//! slots parse "18:30 - 22:00"
//!
//! # Replace a party's slots for one date (identity resolved via --admin-id
//! # or the ADMIN_ID environment variable)
//! slots set --from 42 --date 2025-12-24 "18:00-23:00" "после 20:00"
//!
//! # Print a party's stored slots for one date
//! slots get --from 42 --date 2025-12-24
//!
//! # Dates and times both parties are free, optionally windowed
//! slots overlaps
//! slots overlaps --days 7
//! ```

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use clap::{Parser, Subcommand};

use overlap_engine::{compute_overlaps, DateSlots, Party, SlotStore};
use slot_core::{parse_interval, Interval};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Two-party mutual availability over a shared slot document"
)]
struct Cli {
    /// Path to the availability document
    #[arg(long, global = true, default_value = "availability.json")]
    store: String,

    /// Numeric identity of the admin party
    #[arg(long, global = true, env = "ADMIN_ID", default_value_t = 0)]
    admin_id: i64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a slot text and print its canonical form
    Parse {
        /// Free-text slot ("18:30-22:00", "после 16:00")
        text: String,
    },
    /// Replace a party's slot list for one date
    Set {
        /// Caller identity, resolved against the admin id
        #[arg(long)]
        from: i64,
        /// ISO calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// One or more slot texts; together they replace the stored list
        #[arg(required = true)]
        slots: Vec<String>,
    },
    /// Print a party's stored slots for one date
    Get {
        /// Caller identity, resolved against the admin id
        #[arg(long)]
        from: i64,
        /// ISO calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Print the dates and times both parties are free
    Overlaps {
        /// Keep only dates within the next N days
        #[arg(long)]
        days: Option<u32>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let store = SlotStore::new(&cli.store);

    match cli.command {
        Commands::Parse { text } => {
            let slot = parse_slot(&text)?;
            println!("{}", slot);
        }
        Commands::Set { from, date, slots } => {
            let party = Party::resolve(from, cli.admin_id);
            let intervals = slots
                .iter()
                .map(|text| parse_slot(text))
                .collect::<Result<Vec<_>>>()?;
            store
                .set_day(party, &date, intervals.clone())
                .context("failed to update the availability document")?;
            println!("{} {}: {}", party, date, join_slots(&intervals));
        }
        Commands::Get { from, date } => {
            let party = Party::resolve(from, cli.admin_id);
            for slot in store.get_day(party, &date) {
                println!("{}", slot);
            }
        }
        Commands::Overlaps { days } => {
            let doc = store.load();
            let mut overlaps = compute_overlaps(&doc.admin, &doc.user);
            if let Some(days) = days {
                let today = Local::now().date_naive();
                overlaps = window_filter(overlaps, today, days);
            }
            print_overlaps(&overlaps);
        }
    }

    Ok(())
}

fn parse_slot(text: &str) -> Result<Interval> {
    parse_interval(text).with_context(|| format!("invalid slot text {:?}", text))
}

/// Keep only dates in `[today, today + days)`. Display-time filter over the
/// computed result -- the engine itself is unbounded in date range.
fn window_filter(overlaps: DateSlots, today: NaiveDate, days: u32) -> DateSlots {
    let end = today + Duration::days(i64::from(days));
    overlaps
        .into_iter()
        .filter(|(date, _)| match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
            Ok(d) => d >= today && d < end,
            Err(_) => false,
        })
        .collect()
}

fn print_overlaps(overlaps: &DateSlots) {
    if overlaps.is_empty() {
        println!("no mutual availability");
        return;
    }
    for (date, slots) in overlaps {
        println!("{}  {}", date_label(date), join_slots(slots));
    }
}

/// `2025-12-24 (Wed)` -- the stored key plus a weekday hint for humans.
fn date_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{} ({})", date, d.format("%a")),
        // Hand-edited documents may hold keys the store would have rejected.
        Err(_) => date.to_string(),
    }
}

fn join_slots(slots: &[Interval]) -> String {
    slots
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
