//! Per-room availability summaries and reservation detail listings.
//!
//! A room counts as [`Availability::Reserved`] once it has any reservation at
//! all, regardless of date.

use std::fmt;

use crate::{reservation::Reservation, room::RoomName, store::ReservationStore};

/// Overview status of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// The room has at least one reservation.
    Reserved,
    /// The room has never been reserved.
    Available,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Reserved => "Reserved",
            Self::Available => "Available",
        })
    }
}

/// One row of the availability overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSummary {
    /// Room name.
    pub room: RoomName,
    /// Reserved or available.
    pub status: Availability,
    /// Number of reservations ever made for the room.
    pub reservations: usize,
}

/// Summaries for every room in configured order.
pub fn summarize(store: &ReservationStore) -> Vec<RoomSummary> {
    store
        .rooms()
        .map(|room| {
            let reservations = store.reservations(room).len();
            let status =
                if store.has_any(room) { Availability::Reserved } else { Availability::Available };
            RoomSummary { room: room.clone(), status, reservations }
        })
        .collect()
}

/// All reservations of one room, in booking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetail {
    /// Room name.
    pub room: RoomName,
    /// Reservations in booking order.
    pub reservations: Vec<Reservation>,
}

impl RoomDetail {
    /// Collect the detail listing for `room`.
    pub fn of(store: &ReservationStore, room: &RoomName) -> Self {
        Self { room: room.clone(), reservations: store.reservations(room).to_vec() }
    }
}

impl fmt::Display for RoomDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reservations.is_empty() {
            return write!(f, "No reservations for {}", self.room);
        }
        write!(f, "Reservations for {}:", self.room)?;
        for r in &self.reservations {
            write!(
                f,
                "\nDate: {}, Time: {} - {}, Purpose: {}",
                r.date().format("%Y-%m-%d"),
                r.start_time(),
                r.end_time(),
                r.purpose()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{room::BookingConfig, slot::TimeSlot};

    fn slot(label: &str) -> TimeSlot {
        label.parse().unwrap()
    }

    fn booked_store() -> (ReservationStore, RoomName) {
        let mut store = ReservationStore::new(&BookingConfig::default());
        let conference = RoomName::new("Conference Room").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        store
            .append(&conference, Reservation::new(date, slot("10:00 AM"), slot("10:30 AM"), "Meeting"))
            .unwrap();
        store
            .append(&conference, Reservation::new(date, slot("11:30 PM"), slot("11:30 PM"), "Late"))
            .unwrap();
        (store, conference)
    }

    #[test]
    fn booked_room_is_reserved_others_available() {
        let (store, conference) = booked_store();
        let summaries = summarize(&store);
        assert_eq!(summaries.len(), 7);
        for summary in summaries {
            if summary.room == conference {
                assert_eq!(summary.status, Availability::Reserved);
                assert_eq!(summary.reservations, 2);
            } else {
                assert_eq!(summary.status, Availability::Available);
                assert_eq!(summary.reservations, 0);
            }
        }
    }

    #[test]
    fn detail_lists_reservations_in_booking_order() {
        let (store, conference) = booked_store();
        let detail = RoomDetail::of(&store, &conference);
        assert_eq!(
            detail.to_string(),
            "Reservations for Conference Room:\n\
             Date: 2024-05-14, Time: 10:00 AM - 11:00 AM, Purpose: Meeting\n\
             Date: 2024-05-14, Time: 11:30 PM - 12:00 AM, Purpose: Late"
        );
    }

    #[test]
    fn detail_for_unbooked_room() {
        let (store, _) = booked_store();
        let lre = RoomName::new("LRE Room").unwrap();
        assert_eq!(RoomDetail::of(&store, &lre).to_string(), "No reservations for LRE Room");
    }
}
