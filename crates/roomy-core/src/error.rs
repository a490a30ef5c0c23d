//! Error types for booking validation, slot parsing and configuration.

use thiserror::Error;

use crate::slot::TimeSlot;

/// Reasons a booking request is rejected.
///
/// None of these are fatal. They are reported back to the user and the store
/// is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// No room was chosen before submitting.
    #[error("Please select a room.")]
    MissingRoom,

    /// No date was chosen before submitting.
    #[error("Please select a date.")]
    MissingDate,

    /// No time slot was selected before submitting.
    #[error("Please select at least one time slot.")]
    MissingSlots,

    /// The purpose text is empty after trimming.
    #[error("Please enter a purpose.")]
    MissingPurpose,

    /// The collapsed block would cover a slot that is already booked.
    #[error("The selected block overlaps an existing reservation at {slot}.")]
    SlotConflict {
        /// First occupied slot inside the requested block.
        slot: TimeSlot,
    },

    /// The room is not part of the configured room set.
    #[error("Unknown room: {name}")]
    UnknownRoom {
        /// Name as given by the caller.
        name: String,
    },
}

/// Errors produced when parsing a clock time or slot label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotParseError {
    /// Input is not of the form `HH:MM AM` / `HH:MM PM` on a half hour.
    #[error("invalid time '{input}': expected HH:MM AM/PM on a half hour")]
    Malformed {
        /// The original input.
        input: String,
    },

    /// Valid clock time, but not a bookable slot.
    #[error("{time} is outside the bookable window (10:00 AM - 11:30 PM)")]
    OutsideWindow {
        /// Formatted clock time.
        time: String,
    },
}

/// Errors in the startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The room set is empty.
    #[error("at least one room must be configured")]
    NoRooms,

    /// A room name is empty after trimming.
    #[error("room names must not be empty")]
    EmptyRoomName,

    /// The same room name appears twice.
    #[error("duplicate room name: {0}")]
    DuplicateRoom(String),
}
