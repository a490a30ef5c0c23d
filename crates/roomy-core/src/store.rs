//! In-memory reservation store.
//!
//! Maps each configured room to its reservations in booking order. The room
//! set is fixed when the store is created. Nothing is persisted.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::info;

use crate::{
    error::BookingError,
    reservation::Reservation,
    room::{BookingConfig, RoomName},
    slot::TimeSlot,
};

#[derive(Debug, Clone)]
struct RoomEntry {
    name: RoomName,
    reservations: Vec<Reservation>,
}

/// Reservations per room, with a fixed ordered room set.
#[derive(Debug, Clone)]
pub struct ReservationStore {
    rooms: Vec<RoomEntry>,
}

impl ReservationStore {
    /// Create an empty store for the configured rooms.
    pub fn new(config: &BookingConfig) -> Self {
        let rooms = config
            .rooms()
            .iter()
            .map(|name| RoomEntry { name: name.clone(), reservations: Vec::new() })
            .collect();
        Self { rooms }
    }

    /// Room names in configured order.
    pub fn rooms(&self) -> impl Iterator<Item = &RoomName> {
        self.rooms.iter().map(|entry| &entry.name)
    }

    /// Whether `room` belongs to the room set.
    pub fn contains(&self, room: &RoomName) -> bool {
        self.entry(room).is_some()
    }

    /// Find a room by exact name, case-insensitive name, or 1-based position.
    pub fn resolve(&self, query: &str) -> Option<&RoomName> {
        let query = query.trim();
        if let Some(entry) = self.rooms.iter().find(|entry| entry.name.as_str() == query) {
            return Some(&entry.name);
        }
        if let Some(entry) =
            self.rooms.iter().find(|entry| entry.name.as_str().eq_ignore_ascii_case(query))
        {
            return Some(&entry.name);
        }
        query
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .and_then(|index| self.rooms.get(index))
            .map(|entry| &entry.name)
    }

    /// All reservations for `room` in booking order.
    ///
    /// Empty for rooms outside the set.
    pub fn reservations(&self, room: &RoomName) -> &[Reservation] {
        self.entry(room).map(|entry| entry.reservations.as_slice()).unwrap_or_default()
    }

    /// Start slots of every reservation for `room` on `date`.
    pub fn reservations_for(&self, room: &RoomName, date: NaiveDate) -> BTreeSet<TimeSlot> {
        self.on_date(room, date).map(Reservation::start_slot).collect()
    }

    /// Every slot covered by a reservation for `room` on `date`.
    ///
    /// A superset of [`Self::reservations_for`]; this is what must be
    /// excluded from selection.
    pub fn occupied_slots(&self, room: &RoomName, date: NaiveDate) -> BTreeSet<TimeSlot> {
        self.on_date(room, date).flat_map(Reservation::slots).collect()
    }

    /// Record a reservation for `room`.
    ///
    /// Performs no overlap check; callers exclude occupied slots beforehand.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoom` if `room` is not in the set. The store is left
    /// unchanged.
    pub fn append(&mut self, room: &RoomName, reservation: Reservation) -> Result<(), BookingError> {
        let entry = self
            .rooms
            .iter_mut()
            .find(|entry| &entry.name == room)
            .ok_or_else(|| BookingError::UnknownRoom { name: room.to_string() })?;

        info!(
            room = %room,
            date = %reservation.date(),
            start = %reservation.start_time(),
            end = %reservation.end_time(),
            "reservation recorded"
        );
        entry.reservations.push(reservation);
        Ok(())
    }

    /// Whether `room` has ever been reserved, on any date.
    pub fn has_any(&self, room: &RoomName) -> bool {
        !self.reservations(room).is_empty()
    }

    /// Total number of reservations across all rooms.
    pub fn len(&self) -> usize {
        self.rooms.iter().map(|entry| entry.reservations.len()).sum()
    }

    /// Whether no room has any reservation.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, room: &RoomName) -> Option<&RoomEntry> {
        self.rooms.iter().find(|entry| &entry.name == room)
    }

    fn on_date(&self, room: &RoomName, date: NaiveDate) -> impl Iterator<Item = &Reservation> {
        self.reservations(room).iter().filter(move |r| r.date() == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ReservationStore {
        ReservationStore::new(&BookingConfig::default())
    }

    fn room(name: &str) -> RoomName {
        RoomName::new(name).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn slot(label: &str) -> TimeSlot {
        label.parse().unwrap()
    }

    #[test]
    fn starts_empty_with_fixed_rooms() {
        let store = store();
        assert_eq!(store.rooms().count(), 7);
        assert!(store.is_empty());
        assert!(store.rooms().all(|r| !store.has_any(r)));
    }

    #[test]
    fn reservations_for_returns_start_slots_on_that_date() {
        let mut store = store();
        let lab = room("Study Room 1");
        store
            .append(&lab, Reservation::new(day(1), slot("10:00 AM"), slot("11:00 AM"), "a"))
            .unwrap();
        store
            .append(&lab, Reservation::new(day(2), slot("01:00 PM"), slot("01:00 PM"), "b"))
            .unwrap();

        assert_eq!(store.reservations_for(&lab, day(1)), BTreeSet::from([slot("10:00 AM")]));
        assert_eq!(store.reservations_for(&lab, day(2)), BTreeSet::from([slot("01:00 PM")]));
        assert!(store.reservations_for(&lab, day(3)).is_empty());
    }

    #[test]
    fn occupied_slots_cover_whole_blocks() {
        let mut store = store();
        let lab = room("Study Room 1");
        store
            .append(&lab, Reservation::new(day(1), slot("10:00 AM"), slot("11:00 AM"), "a"))
            .unwrap();

        let occupied = store.occupied_slots(&lab, day(1));
        assert_eq!(
            occupied,
            BTreeSet::from([slot("10:00 AM"), slot("10:30 AM"), slot("11:00 AM")])
        );
        assert!(store.reservations_for(&lab, day(1)).is_subset(&occupied));
    }

    #[test]
    fn append_keeps_booking_order() {
        let mut store = store();
        let lab = room("LRE Room");
        store.append(&lab, Reservation::new(day(3), slot("03:00 PM"), slot("03:00 PM"), "late")).unwrap();
        store.append(&lab, Reservation::new(day(1), slot("10:00 AM"), slot("10:00 AM"), "early")).unwrap();

        let purposes: Vec<&str> = store.reservations(&lab).iter().map(Reservation::purpose).collect();
        assert_eq!(purposes, ["late", "early"]);
        assert!(store.has_any(&lab));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn append_to_unknown_room_is_rejected() {
        let mut store = store();
        let ghost = room("Ghost Room");
        let result =
            store.append(&ghost, Reservation::new(day(1), slot("10:00 AM"), slot("10:00 AM"), "x"));

        assert_eq!(result, Err(BookingError::UnknownRoom { name: "Ghost Room".into() }));
        assert!(store.is_empty());
    }

    #[test]
    fn resolve_by_name_case_or_position() {
        let store = store();
        assert_eq!(store.resolve("Conference Room"), Some(&room("Conference Room")));
        assert_eq!(store.resolve("conference room"), Some(&room("Conference Room")));
        assert_eq!(store.resolve("1"), Some(&room("Study Room 1")));
        assert_eq!(store.resolve("7"), Some(&room("LRE Room")));
        assert_eq!(store.resolve("0"), None);
        assert_eq!(store.resolve("8"), None);
        assert_eq!(store.resolve("Attic"), None);
    }
}
