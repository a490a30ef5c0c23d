//! Room names and the configured room set.

use std::{collections::HashSet, fmt};

use crate::error::ConfigError;

/// Rooms available when no override is configured, in display order.
pub const DEFAULT_ROOMS: [&str; 7] = [
    "Study Room 1",
    "Study Room 2",
    "Study Room 3",
    "Study Room 4",
    "Study Room 5",
    "Conference Room",
    "LRE Room",
];

/// Name of a bookable room.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomName(String);

impl RoomName {
    /// Wrap a name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `EmptyRoomName` if nothing is left after trimming.
    pub fn new(name: &str) -> Result<Self, ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyRoomName);
        }
        Ok(Self(name.to_string()))
    }

    /// The name as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Startup configuration for the booking core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfig {
    rooms: Vec<RoomName>,
}

impl BookingConfig {
    /// Configuration with an explicit room set.
    ///
    /// # Errors
    ///
    /// Rejects an empty set, blank names and duplicates.
    pub fn with_rooms<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut rooms = Vec::new();
        for name in names {
            let room = RoomName::new(name.as_ref())?;
            if !seen.insert(room.clone()) {
                return Err(ConfigError::DuplicateRoom(room.0));
            }
            rooms.push(room);
        }

        if rooms.is_empty() {
            return Err(ConfigError::NoRooms);
        }
        Ok(Self { rooms })
    }

    /// Configured rooms in display order.
    pub fn rooms(&self) -> &[RoomName] {
        &self.rooms
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        let rooms = DEFAULT_ROOMS.iter().map(|name| RoomName(name.to_string())).collect();
        Self { rooms }
    }
}
