//! Time-of-day greeting for chrome and the welcome banner.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Greeting bucket for an hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// Bucket for a local hour in `0..=23`. Hours outside the range clamp
    /// into the evening bucket so the function stays total.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Greeting::Morning,
            12..=17 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    /// Greeting for the current local time.
    pub fn now() -> Self {
        Self::for_hour(Local::now().hour())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Greeting::Morning => "Morning",
            Greeting::Afternoon => "Afternoon",
            Greeting::Evening => "Evening",
        }
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
