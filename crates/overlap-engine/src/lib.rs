//! # overlap-engine
//!
//! Durable two-party availability storage and date-aligned interval
//! intersection.
//!
//! Two parties -- a configured admin and a single generic user -- each declare
//! the time slots they are free on given calendar dates. The engine persists
//! those declarations as one JSON document and computes, on demand, the
//! sub-intervals where both parties are free on the same date.
//!
//! ## Modules
//!
//! - [`party`] -- admin/user identity resolution
//! - [`store`] -- the persisted document and its load/save/set/get cycle
//! - [`overlap`] -- pure intersection of two parties' slot sets
//! - [`error`] -- error types

pub mod error;
pub mod overlap;
pub mod party;
pub mod store;

pub use error::StoreError;
pub use overlap::compute_overlaps;
pub use party::Party;
pub use store::{DateSlots, PartyAvailability, SlotStore};
