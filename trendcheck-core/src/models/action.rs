//! Recommended actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three actions a pipeline run can recommend.
///
/// Labels are the upper snake case names (`BUY_MORE_STOCK`, ...) both in
/// `Display` and in serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    BuyMoreStock,
    PanicReorder,
    WaitAndSee,
}

impl Action {
    /// Every action, in priority order
    pub const ALL: [Self; 3] = [Self::BuyMoreStock, Self::PanicReorder, Self::WaitAndSee];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BuyMoreStock => "BUY_MORE_STOCK",
            Self::PanicReorder => "PANIC_REORDER",
            Self::WaitAndSee => "WAIT_AND_SEE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "BUY_MORE_STOCK" => Ok(Self::BuyMoreStock),
            "PANIC_REORDER" => Ok(Self::PanicReorder),
            "WAIT_AND_SEE" => Ok(Self::WaitAndSee),
            _ => Err(format!(
                "Invalid action: '{s}'. Valid options: BUY_MORE_STOCK, PANIC_REORDER, WAIT_AND_SEE"
            )),
        }
    }
}
