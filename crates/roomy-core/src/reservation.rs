//! Reservation records.

use chrono::NaiveDate;

use crate::slot::{ClockTime, TimeSlot};

/// A committed booking of one contiguous block of slots.
///
/// Created only by a successful submit and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    date: NaiveDate,
    first: TimeSlot,
    last: TimeSlot,
    purpose: String,
}

impl Reservation {
    /// Build a reservation covering `first..=last` on `date`.
    ///
    /// The bounds are swapped if given out of order. The purpose is stored
    /// trimmed.
    pub fn new(date: NaiveDate, first: TimeSlot, last: TimeSlot, purpose: &str) -> Self {
        let (first, last) = if first <= last { (first, last) } else { (last, first) };
        Self { date, first, last, purpose: purpose.trim().to_string() }
    }

    /// Calendar date of the booking.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// First booked slot.
    pub fn start_slot(&self) -> TimeSlot {
        self.first
    }

    /// Start time of the block.
    pub fn start_time(&self) -> ClockTime {
        self.first.start()
    }

    /// Exclusive end time of the block.
    pub fn end_time(&self) -> ClockTime {
        self.last.end()
    }

    /// What the room is booked for.
    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    /// Every slot the block covers.
    pub fn slots(&self) -> impl Iterator<Item = TimeSlot> {
        TimeSlot::span(self.first, self.last)
    }
}
