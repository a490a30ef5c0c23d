//! Time slots for the fixed operating window.
//!
//! Rooms are bookable from 10:00 through 23:30 in half-hour slots, 28 per day.
//! Slots are labelled on a 12-hour clock with a two-digit hour, e.g.
//! `10:00 AM`, `12:30 PM`, `01:00 PM`.
//!
//! Two types are involved:
//!
//! - [`ClockTime`]: any half hour of the day. End labels need this because the
//!   end of the last slot (`12:00 AM`) lies outside the operating window.
//! - [`TimeSlot`]: one of the 28 bookable slots, ordered chronologically.

use std::{fmt, str::FromStr};

use crate::error::SlotParseError;

/// Number of bookable slots per day.
pub const SLOTS_PER_DAY: usize = 28;

const HALF_HOURS_PER_DAY: u8 = 48;

/// Half hour index of 10:00, the first bookable slot.
const OPENING: u8 = 20;

/// A half-hour-granular time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u8);

impl ClockTime {
    /// 12:00 AM.
    pub const MIDNIGHT: Self = Self(0);

    /// Build from a 24-hour hour and a minute of 0 or 30.
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        if hour >= 24 {
            return None;
        }
        match minute {
            0 => Some(Self(hour * 2)),
            30 => Some(Self(hour * 2 + 1)),
            _ => None,
        }
    }

    /// Hour on a 24-hour clock.
    pub fn hour(self) -> u8 {
        self.0 / 2
    }

    /// Minute within the hour, 0 or 30.
    pub fn minute(self) -> u8 {
        (self.0 % 2) * 30
    }

    /// The time one slot later.
    ///
    /// Wraps at midnight, so the successor of `11:30 PM` is `12:00 AM`.
    pub fn successor(self) -> Self {
        Self((self.0 + 1) % HALF_HOURS_PER_DAY)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = self.hour();
        let twelve = match hour % 12 {
            0 => 12,
            h => h,
        };
        let period = if hour < 12 { "AM" } else { "PM" };
        write!(f, "{twelve:02}:{:02} {period}", self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SlotParseError::Malformed { input: s.to_string() };

        let upper = s.trim().to_ascii_uppercase();
        let (time, pm) = if let Some(time) = upper.strip_suffix("AM") {
            (time.trim_end(), false)
        } else if let Some(time) = upper.strip_suffix("PM") {
            (time.trim_end(), true)
        } else {
            return Err(malformed());
        };

        let (hour, minute) = time.split_once(':').ok_or_else(malformed)?;
        let hour: u8 = hour.parse().map_err(|_| malformed())?;
        let minute: u8 = minute.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&hour) {
            return Err(malformed());
        }

        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        Self::from_hm(hour, minute).ok_or_else(malformed)
    }
}

/// One of the 28 bookable slots of a day.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// 10:00 AM.
    pub const FIRST: Self = Self(0);

    /// 11:30 PM.
    pub const LAST: Self = Self(SLOTS_PER_DAY as u8 - 1);

    /// Slot at a zero-based position in the day.
    pub fn new(index: usize) -> Option<Self> {
        (index < SLOTS_PER_DAY).then(|| Self(index as u8))
    }

    /// Slot starting at the given clock time, if it is bookable.
    pub fn from_clock(time: ClockTime) -> Option<Self> {
        time.0.checked_sub(OPENING).and_then(|index| Self::new(usize::from(index)))
    }

    /// Start time of the slot.
    pub fn start(self) -> ClockTime {
        ClockTime(OPENING + self.0)
    }

    /// Exclusive end time of the slot.
    pub fn end(self) -> ClockTime {
        self.start().successor()
    }

    /// All slots from `first` to `last`, inclusive.
    pub fn span(first: Self, last: Self) -> impl Iterator<Item = Self> {
        (first.0..=last.0).map(Self)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.start(), f)
    }
}

impl FromStr for TimeSlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time: ClockTime = s.parse()?;
        Self::from_clock(time).ok_or_else(|| SlotParseError::OutsideWindow { time: time.to_string() })
    }
}

/// Every bookable slot of a day in chronological order.
pub fn generate_slots() -> Vec<TimeSlot> {
    (0..SLOTS_PER_DAY as u8).map(TimeSlot).collect()
}
