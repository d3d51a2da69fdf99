//! Party identity resolution.
//!
//! Exactly two parties exist: the admin, matched against a configured numeric
//! identifier, and a single generic user slot for everyone else.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two availability-declaring parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Admin,
    User,
}

impl Party {
    /// Map a caller's numeric identity onto a party slot.
    ///
    /// Equality with the configured admin identifier selects [`Party::Admin`];
    /// every other caller shares the single [`Party::User`] slot.
    pub fn resolve(caller_id: i64, admin_id: i64) -> Party {
        if caller_id == admin_id {
            Party::Admin
        } else {
            Party::User
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Admin => write!(f, "admin"),
            Party::User => write!(f, "user"),
        }
    }
}
