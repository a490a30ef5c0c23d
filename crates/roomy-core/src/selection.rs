//! Selection state machine.
//!
//! Tracks what the user has picked so far (room, date, slots) and validates a
//! submit into a reservation.
//!
//! # Architecture: Immutable State, Declarative Effects
//!
//! - [`SelectionState`] is a value. [`SelectionState::transition`] never
//!   mutates it and returns the next state instead.
//! - The store is only read. A successful submit returns
//!   [`Effect::Commit`] which the caller applies to the store.
//! - On error the caller keeps the previous state; nothing was changed.
//!
//! # State Machine
//!
//! ```text
//! ┌──────┐ ChooseRoom ┌────────────┐ ChooseDate ┌────────────┐ ToggleSlot ┌───────────────┐
//! │ Idle │───────────>│ RoomChosen │───────────>│ DateChosen │<──────────>│ SlotsSelected │
//! └──────┘            └────────────┘            └────────────┘            └───────────────┘
//!                            ^                         ^                          │
//!                            │ ChooseRoom (any state)  │      Submit (success)    │
//!                            └─────────────────────────┴──────────────────────────┘
//! ```
//!
//! # Validation
//!
//! Submit checks, in order: room chosen, date chosen, at least one slot,
//! non-blank purpose, and that the collapsed block `[min, max]` covers no
//! occupied slot. A selection with gaps collapses into one contiguous block.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    error::BookingError, reservation::Reservation, room::RoomName, slot::TimeSlot,
    store::ReservationStore,
};

/// Coarse position in the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No room chosen.
    Idle,
    /// Room chosen, date not yet.
    RoomChosen,
    /// Room and date chosen, no slot selected.
    DateChosen,
    /// At least one slot selected.
    SlotsSelected,
}

/// How a slot appears for the active room and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// Already booked; cannot be toggled.
    Reserved,
    /// Part of the current selection.
    Selected,
    /// Free to select.
    Open,
    /// No room and date chosen yet.
    Unavailable,
}

/// Input to the selection state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Pick a room. Clears date and selection.
    ChooseRoom(RoomName),
    /// Pick a date for the chosen room.
    ChooseDate(NaiveDate),
    /// Add or remove a slot from the selection.
    ToggleSlot(TimeSlot),
    /// Validate the selection and book it.
    Submit {
        /// Free text purpose.
        purpose: String,
    },
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to apply.
    None,
    /// Append the reservation to the room's list.
    Commit {
        /// Room to book.
        room: RoomName,
        /// The validated reservation.
        reservation: Reservation,
    },
}

/// Result of a successful transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the action.
    pub state: SelectionState,
    /// Effect the caller must apply.
    pub effect: Effect,
}

impl Transition {
    fn stay(state: &SelectionState) -> Self {
        Self { state: state.clone(), effect: Effect::None }
    }
}

/// What the user has picked so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    room: Option<RoomName>,
    date: Option<NaiveDate>,
    /// Occupied slots for (room, date), captured when the date was chosen.
    reserved: BTreeSet<TimeSlot>,
    selected: BTreeSet<TimeSlot>,
}

impl SelectionState {
    /// Empty selection in the `Idle` phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase, derived from what is set.
    pub fn phase(&self) -> Phase {
        match (&self.room, self.date) {
            (None, _) => Phase::Idle,
            (Some(_), None) => Phase::RoomChosen,
            (Some(_), Some(_)) if self.selected.is_empty() => Phase::DateChosen,
            (Some(_), Some(_)) => Phase::SlotsSelected,
        }
    }

    /// Chosen room.
    pub fn room(&self) -> Option<&RoomName> {
        self.room.as_ref()
    }

    /// Chosen date.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Slots booked by earlier reservations for the active room and date.
    pub fn reserved(&self) -> &BTreeSet<TimeSlot> {
        &self.reserved
    }

    /// Currently selected slots, chronologically.
    pub fn selected(&self) -> &BTreeSet<TimeSlot> {
        &self.selected
    }

    /// Display status of `slot`.
    pub fn slot_status(&self, slot: TimeSlot) -> SlotStatus {
        if self.date.is_none() || self.room.is_none() {
            SlotStatus::Unavailable
        } else if self.reserved.contains(&slot) {
            SlotStatus::Reserved
        } else if self.selected.contains(&slot) {
            SlotStatus::Selected
        } else {
            SlotStatus::Open
        }
    }

    /// Whether toggling `slot` would have any effect.
    pub fn is_selectable(&self, slot: TimeSlot) -> bool {
        matches!(self.slot_status(slot), SlotStatus::Selected | SlotStatus::Open)
    }

    /// Apply `action` and return the next state.
    ///
    /// # Errors
    ///
    /// `ChooseRoom` fails with `UnknownRoom` for rooms outside the store.
    /// `Submit` fails with the first validation rule that is violated.
    pub fn transition(
        &self,
        action: SelectionAction,
        store: &ReservationStore,
    ) -> Result<Transition, BookingError> {
        match action {
            SelectionAction::ChooseRoom(room) => self.choose_room(room, store),
            SelectionAction::ChooseDate(date) => Ok(self.choose_date(date, store)),
            SelectionAction::ToggleSlot(slot) => Ok(self.toggle_slot(slot)),
            SelectionAction::Submit { purpose } => self.submit(&purpose, store),
        }
    }

    /// Recompute the reserved set from `store`.
    ///
    /// Selected slots that became reserved are dropped from the selection.
    #[must_use]
    pub fn refresh(&self, store: &ReservationStore) -> Self {
        let (Some(room), Some(date)) = (&self.room, self.date) else {
            return self.clone();
        };
        let reserved = store.occupied_slots(room, date);
        let selected = self.selected.difference(&reserved).copied().collect();
        Self { room: self.room.clone(), date: self.date, reserved, selected }
    }

    fn choose_room(
        &self,
        room: RoomName,
        store: &ReservationStore,
    ) -> Result<Transition, BookingError> {
        if !store.contains(&room) {
            return Err(BookingError::UnknownRoom { name: room.to_string() });
        }
        debug!(room = %room, "room chosen");
        let state = Self { room: Some(room), ..Self::default() };
        Ok(Transition { state, effect: Effect::None })
    }

    fn choose_date(&self, date: NaiveDate, store: &ReservationStore) -> Transition {
        let Some(room) = &self.room else {
            debug!(%date, "date ignored, no room chosen");
            return Transition::stay(self);
        };
        let reserved = store.occupied_slots(room, date);
        debug!(room = %room, %date, reserved = reserved.len(), "date chosen");
        let state =
            Self { room: self.room.clone(), date: Some(date), reserved, selected: BTreeSet::new() };
        Transition { state, effect: Effect::None }
    }

    fn toggle_slot(&self, slot: TimeSlot) -> Transition {
        if !self.is_selectable(slot) {
            debug!(%slot, status = ?self.slot_status(slot), "slot not selectable");
            return Transition::stay(self);
        }

        let mut state = self.clone();
        if !state.selected.remove(&slot) {
            state.selected.insert(slot);
        }
        Transition { state, effect: Effect::None }
    }

    fn submit(&self, purpose: &str, store: &ReservationStore) -> Result<Transition, BookingError> {
        let room = self.room.as_ref().ok_or(BookingError::MissingRoom)?;
        if !store.contains(room) {
            return Err(BookingError::UnknownRoom { name: room.to_string() });
        }
        let date = self.date.ok_or(BookingError::MissingDate)?;
        let (Some(&first), Some(&last)) = (self.selected.first(), self.selected.last()) else {
            return Err(BookingError::MissingSlots);
        };
        let purpose = purpose.trim();
        if purpose.is_empty() {
            return Err(BookingError::MissingPurpose);
        }

        let occupied = store.occupied_slots(room, date);
        if let Some(slot) = TimeSlot::span(first, last).find(|slot| occupied.contains(slot)) {
            return Err(BookingError::SlotConflict { slot });
        }

        let reservation = Reservation::new(date, first, last, purpose);
        let mut reserved = occupied;
        reserved.extend(reservation.slots());

        let state =
            Self { room: Some(room.clone()), date: Some(date), reserved, selected: BTreeSet::new() };
        Ok(Transition { state, effect: Effect::Commit { room: room.clone(), reservation } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::BookingConfig;

    fn store() -> ReservationStore {
        ReservationStore::new(&BookingConfig::default())
    }

    fn room(name: &str) -> RoomName {
        RoomName::new(name).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    fn slot(label: &str) -> TimeSlot {
        label.parse().unwrap()
    }

    fn step(state: &SelectionState, action: SelectionAction, store: &ReservationStore) -> SelectionState {
        state.transition(action, store).unwrap().state
    }

    fn with_slots(store: &ReservationStore, labels: &[&str]) -> SelectionState {
        let mut state = step(
            &SelectionState::new(),
            SelectionAction::ChooseRoom(room("Study Room 1")),
            store,
        );
        state = step(&state, SelectionAction::ChooseDate(day()), store);
        for label in labels {
            state = step(&state, SelectionAction::ToggleSlot(slot(label)), store);
        }
        state
    }

    fn commit(transition: Transition) -> Reservation {
        match transition.effect {
            Effect::Commit { reservation, .. } => reservation,
            Effect::None => panic!("expected a commit"),
        }
    }

    #[test]
    fn phases_follow_the_flow() {
        let store = store();
        let idle = SelectionState::new();
        assert_eq!(idle.phase(), Phase::Idle);

        let room_chosen = step(&idle, SelectionAction::ChooseRoom(room("LRE Room")), &store);
        assert_eq!(room_chosen.phase(), Phase::RoomChosen);

        let date_chosen = step(&room_chosen, SelectionAction::ChooseDate(day()), &store);
        assert_eq!(date_chosen.phase(), Phase::DateChosen);

        let selected = step(&date_chosen, SelectionAction::ToggleSlot(slot("10:00 AM")), &store);
        assert_eq!(selected.phase(), Phase::SlotsSelected);

        let deselected = step(&selected, SelectionAction::ToggleSlot(slot("10:00 AM")), &store);
        assert_eq!(deselected.phase(), Phase::DateChosen);
    }

    #[test]
    fn transitions_do_not_mutate_previous_state() {
        let store = store();
        let before = with_slots(&store, &["10:00 AM"]);
        let snapshot = before.clone();
        let _ = before.transition(SelectionAction::ToggleSlot(slot("10:30 AM")), &store);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn choosing_room_resets_date_and_slots() {
        let store = store();
        let state = with_slots(&store, &["10:00 AM", "10:30 AM"]);
        let next = step(&state, SelectionAction::ChooseRoom(room("Study Room 2")), &store);
        assert_eq!(next.phase(), Phase::RoomChosen);
        assert_eq!(next.date(), None);
        assert!(next.selected().is_empty());
    }

    #[test]
    fn choosing_unknown_room_is_rejected() {
        let result = SelectionState::new()
            .transition(SelectionAction::ChooseRoom(room("Attic")), &store());
        assert_eq!(result, Err(BookingError::UnknownRoom { name: "Attic".into() }));
    }

    #[test]
    fn date_without_room_stays_idle() {
        let next = step(&SelectionState::new(), SelectionAction::ChooseDate(day()), &store());
        assert_eq!(next.phase(), Phase::Idle);
        assert_eq!(next.date(), None);
    }

    #[test]
    fn toggle_before_date_is_ignored() {
        let store = store();
        let state = step(&SelectionState::new(), SelectionAction::ChooseRoom(room("LRE Room")), &store);
        let next = step(&state, SelectionAction::ToggleSlot(slot("10:00 AM")), &store);
        assert_eq!(next, state);
    }

    #[test]
    fn submit_collapses_to_min_and_successor_of_max() {
        let store = store();
        let state = with_slots(&store, &["10:30 AM", "10:00 AM"]);
        let transition = state
            .transition(SelectionAction::Submit { purpose: "Meeting".into() }, &store)
            .unwrap();
        assert_eq!(transition.state.phase(), Phase::DateChosen);

        let reservation = commit(transition);
        assert_eq!(reservation.start_time().to_string(), "10:00 AM");
        assert_eq!(reservation.end_time().to_string(), "11:00 AM");
        assert_eq!(reservation.purpose(), "Meeting");
        assert_eq!(reservation.date(), day());
    }

    #[test]
    fn submit_orders_chronologically_not_lexically() {
        let store = store();
        // "01:00 PM" sorts before "10:00 AM" as text.
        let state = with_slots(&store, &["10:00 AM", "01:00 PM"]);
        let reservation = commit(
            state.transition(SelectionAction::Submit { purpose: "x".into() }, &store).unwrap(),
        );
        assert_eq!(reservation.start_time().to_string(), "10:00 AM");
        assert_eq!(reservation.end_time().to_string(), "01:30 PM");
    }

    #[test]
    fn last_slot_ends_at_midnight() {
        let store = store();
        let state = with_slots(&store, &["11:30 PM"]);
        let reservation = commit(
            state.transition(SelectionAction::Submit { purpose: "Late".into() }, &store).unwrap(),
        );
        assert_eq!(reservation.end_time().to_string(), "12:00 AM");
    }

    #[test]
    fn gapped_selection_collapses_into_one_block() {
        let store = store();
        let state = with_slots(&store, &["10:00 AM", "11:00 AM"]);
        let reservation = commit(
            state.transition(SelectionAction::Submit { purpose: "x".into() }, &store).unwrap(),
        );
        assert_eq!(reservation.slots().count(), 3);
        assert_eq!(reservation.end_time().to_string(), "11:30 AM");
    }

    #[test]
    fn validation_order_is_room_date_slots_purpose() {
        let store = store();
        let submit = || SelectionAction::Submit { purpose: String::new() };

        let idle = SelectionState::new();
        assert_eq!(idle.transition(submit(), &store), Err(BookingError::MissingRoom));

        let room_only = step(&idle, SelectionAction::ChooseRoom(room("LRE Room")), &store);
        assert_eq!(room_only.transition(submit(), &store), Err(BookingError::MissingDate));

        let dated = step(&room_only, SelectionAction::ChooseDate(day()), &store);
        assert_eq!(dated.transition(submit(), &store), Err(BookingError::MissingSlots));

        let picked = step(&dated, SelectionAction::ToggleSlot(slot("02:00 PM")), &store);
        assert_eq!(picked.transition(submit(), &store), Err(BookingError::MissingPurpose));
        assert_eq!(
            picked.transition(SelectionAction::Submit { purpose: "   ".into() }, &store),
            Err(BookingError::MissingPurpose)
        );
    }

    #[test]
    fn reserved_slots_cannot_be_toggled() {
        let mut store = store();
        let lab = room("Study Room 1");
        store
            .append(&lab, Reservation::new(day(), slot("10:00 AM"), slot("10:30 AM"), "taken"))
            .unwrap();

        let state = with_slots(&store, &[]);
        assert_eq!(state.slot_status(slot("10:00 AM")), SlotStatus::Reserved);
        assert_eq!(state.slot_status(slot("10:30 AM")), SlotStatus::Reserved);
        assert!(!state.is_selectable(slot("10:00 AM")));

        let next = step(&state, SelectionAction::ToggleSlot(slot("10:00 AM")), &store);
        assert!(next.selected().is_empty());
    }

    #[test]
    fn gap_over_existing_booking_is_a_conflict() {
        let mut store = store();
        let lab = room("Study Room 1");
        store
            .append(&lab, Reservation::new(day(), slot("10:30 AM"), slot("10:30 AM"), "taken"))
            .unwrap();

        let state = with_slots(&store, &["10:00 AM", "11:00 AM"]);
        assert_eq!(
            state.transition(SelectionAction::Submit { purpose: "x".into() }, &store),
            Err(BookingError::SlotConflict { slot: slot("10:30 AM") })
        );
    }

    #[test]
    fn submit_marks_new_block_reserved() {
        let store = store();
        let state = with_slots(&store, &["03:00 PM", "03:30 PM"]);
        let next = state
            .transition(SelectionAction::Submit { purpose: "Review".into() }, &store)
            .unwrap()
            .state;
        assert!(next.selected().is_empty());
        assert_eq!(next.slot_status(slot("03:00 PM")), SlotStatus::Reserved);
        assert_eq!(next.slot_status(slot("03:30 PM")), SlotStatus::Reserved);
        assert_eq!(next.slot_status(slot("04:00 PM")), SlotStatus::Open);
    }

    #[test]
    fn refresh_drops_selected_slots_that_became_reserved() {
        let mut store = store();
        let state = with_slots(&store, &["05:00 PM", "06:00 PM"]);
        store
            .append(
                &room("Study Room 1"),
                Reservation::new(day(), slot("05:00 PM"), slot("05:00 PM"), "other"),
            )
            .unwrap();

        let refreshed = state.refresh(&store);
        assert_eq!(refreshed.selected(), &BTreeSet::from([slot("06:00 PM")]));
        assert_eq!(refreshed.slot_status(slot("05:00 PM")), SlotStatus::Reserved);
    }
}
