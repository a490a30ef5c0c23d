//! Input events for the App state machine.

use chrono::NaiveDate;
use roomy_core::TimeSlot;

use crate::state::View;

/// Events fed into [`crate::App::handle`].
///
/// Room references are unresolved text; the app resolves them against the
/// configured room set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Choose a room by name or 1-based position.
    ChooseRoom {
        /// Name or position as typed.
        query: String,
    },

    /// Choose the booking date.
    ChooseDate {
        /// Calendar date.
        date: NaiveDate,
    },

    /// Toggle a slot in the selection.
    ToggleSlot {
        /// Slot to toggle.
        slot: TimeSlot,
    },

    /// Submit the current selection.
    Submit {
        /// Free text purpose.
        purpose: String,
    },

    /// Show every reservation of a room.
    ShowReservations {
        /// Name or position as typed.
        query: String,
    },

    /// Switch to a specific view.
    ShowView(View),

    /// Switch to the other view.
    ToggleView,

    /// Show the command summary.
    Help,

    /// Close the notification popup.
    Dismiss,

    /// Report malformed input from the front end.
    InputError {
        /// Human readable description.
        message: String,
    },

    /// Quit the application.
    Quit,
}
