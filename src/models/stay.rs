use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const MIN_ADULTS: u32 = 1;
pub const MAX_ADULTS: u32 = 4;
pub const MAX_CHILDREN: u32 = 4;

/// Date range and party size driving an availability lookup. Lives only for
/// the duration of one booking session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayQuery {
    pub check_in: Option<NaiveDateTime>,
    pub check_out: Option<NaiveDateTime>,
    pub adults: u32,
    pub children: u32,
}

impl Default for StayQuery {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            adults: 2,
            children: 0,
        }
    }
}

impl StayQuery {
    pub fn set_adults(&mut self, adults: u32) {
        self.adults = adults.clamp(MIN_ADULTS, MAX_ADULTS);
    }

    pub fn set_children(&mut self, children: u32) {
        self.children = children.min(MAX_CHILDREN);
    }

    pub fn total_guests(&self) -> u32 {
        self.adults + self.children
    }

    /// Both dates present and check-out strictly after check-in.
    pub fn has_valid_range(&self) -> bool {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => check_out > check_in,
            _ => false,
        }
    }
}
