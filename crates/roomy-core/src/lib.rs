//! Room booking core logic
//!
//! Pure state machine logic for booking shared rooms, decoupled from any
//! terminal or widget toolkit. Everything lives in memory for the lifetime of
//! the process.
//!
//! # Architecture
//!
//! The selection state machine never mutates the store. A transition takes
//! the current [`SelectionState`], an action and a read-only view of the
//! [`ReservationStore`], and returns the next state together with a
//! declarative [`Effect`]. The caller is responsible for applying the effect
//! (appending the reservation) and refreshing the state afterwards.
//!
//! # Components
//!
//! - [`slot`]: Operating-window time slots and 12-hour clock labels
//! - [`reservation`]: Reservation records
//! - [`room`]: Room names and the configured room set
//! - [`store`]: In-memory reservation store
//! - [`selection`]: Selection state machine (room, date, slots, submit)
//! - [`availability`]: Per-room availability summaries and detail listings
//! - [`error`]: Validation and parse error types

pub mod availability;
pub mod error;
pub mod reservation;
pub mod room;
pub mod selection;
pub mod slot;
pub mod store;

pub use availability::{Availability, RoomDetail, RoomSummary, summarize};
pub use error::{BookingError, ConfigError, SlotParseError};
pub use reservation::Reservation;
pub use room::{BookingConfig, DEFAULT_ROOMS, RoomName};
pub use selection::{Effect, Phase, SelectionAction, SelectionState, SlotStatus, Transition};
pub use slot::{ClockTime, SLOTS_PER_DAY, TimeSlot, generate_slots};
pub use store::ReservationStore;
