//! Durable per-party availability storage.
//!
//! The whole state is one JSON document with two top-level keys, `admin` and
//! `user`, each mapping ISO dates to arrays of canonical interval strings:
//!
//! ```json
//! {
//!   "admin": { "2025-12-24": ["18:00-23:00"] },
//!   "user":  { "2025-12-24": ["20:00-23:59"] }
//! }
//! ```
//!
//! Reads fail open: a missing or corrupt document loads as an empty snapshot
//! and is never surfaced as an error. Writes replace the file atomically via
//! a temp-sibling rename. There is no locking; concurrent `load`-mutate-`save`
//! cycles are last-write-wins at document granularity.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use slot_core::Interval;

use crate::error::{Result, StoreError};
use crate::party::Party;

/// One party's declared free intervals, keyed by ISO `YYYY-MM-DD` date.
///
/// BTreeMap keeps dates in ascending order, which is also the iteration order
/// the intersection engine relies on.
pub type DateSlots = BTreeMap<String, Vec<Interval>>;

/// Snapshot of both parties' declared availability -- the persisted document.
///
/// `Default` is the valid initial state: both party keys present, both empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyAvailability {
    pub admin: DateSlots,
    pub user: DateSlots,
}

impl PartyAvailability {
    /// The given party's date → intervals mapping.
    pub fn slots(&self, party: Party) -> &DateSlots {
        match party {
            Party::Admin => &self.admin,
            Party::User => &self.user,
        }
    }

    /// Mutable access to the given party's mapping.
    pub fn slots_mut(&mut self, party: Party) -> &mut DateSlots {
        match party {
            Party::Admin => &mut self.admin,
            Party::User => &mut self.user,
        }
    }
}

/// File-backed availability store.
///
/// An explicit, injectable instance -- tests point it at a temp file, the CLI
/// at the configured store path. All mutation goes through a full
/// `load` → modify → `save` cycle.
#[derive(Debug, Clone)]
pub struct SlotStore {
    path: PathBuf,
}

impl SlotStore {
    /// Create a store over the given document path. The file does not need to
    /// exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SlotStore { path: path.into() }
    }

    /// Read the full persisted document.
    ///
    /// Missing or corrupt documents are recovered to the empty snapshot;
    /// read errors never reach the caller. Two loads without an intervening
    /// save return equal snapshots.
    pub fn load(&self) -> PartyAvailability {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(
                    "no availability document at {}: {}",
                    self.path.display(),
                    err
                );
                return PartyAvailability::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(err) => {
                warn!(
                    "corrupt availability document at {}, starting empty: {}",
                    self.path.display(),
                    err
                );
                PartyAvailability::default()
            }
        }
    }

    /// Serialize and atomically replace the entire persisted document.
    ///
    /// # Errors
    /// Write failures surface as [`StoreError`]; the previous document is
    /// left intact when the write does not complete.
    pub fn save(&self, doc: &PartyAvailability) -> Result<()> {
        let json = serde_json::to_string_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Replace -- not merge -- one party's interval list for a date.
    ///
    /// Runs a full load → mutate → save cycle. The date must be a real ISO
    /// calendar date so the persisted document stays loadable.
    pub fn set_day(&self, party: Party, date: &str, intervals: Vec<Interval>) -> Result<()> {
        validate_date(date)?;
        let mut doc = self.load();
        doc.slots_mut(party).insert(date.to_string(), intervals);
        self.save(&doc)
    }

    /// The stored interval list for `(party, date)`, empty if absent.
    pub fn get_day(&self, party: Party, date: &str) -> Vec<Interval> {
        self.load()
            .slots(party)
            .get(date)
            .cloned()
            .unwrap_or_default()
    }
}

fn validate_date(date: &str) -> Result<()> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| StoreError::InvalidDate(date.to_string()))?;
    // Require the zero-padded form: lexicographic key order must match
    // chronological order.
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(StoreError::InvalidDate(date.to_string()));
    }
    Ok(())
}
