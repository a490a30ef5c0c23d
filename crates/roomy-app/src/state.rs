//! View and notification state.

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Room, date, slot and purpose selection.
    #[default]
    Booking,
    /// Per-room reserved/available overview.
    Availability,
}

impl View {
    /// The other view.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Booking => Self::Availability,
            Self::Availability => Self::Booking,
        }
    }

    /// Tab title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Booking => "Reservations",
            Self::Availability => "Room Availability",
        }
    }
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Informational listing.
    Info,
    /// A reservation was recorded.
    Success,
    /// Input was rejected.
    Error,
}

/// Blocking notification shown until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Popup title.
    pub title: String,
    /// Message text, possibly multi-line.
    pub body: String,
}

impl Notice {
    /// Informational notice.
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, title: title.into(), body: body.into() }
    }

    /// Success notice.
    pub fn success(body: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, title: "Success".into(), body: body.into() }
    }

    /// Error notice.
    pub fn error(body: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, title: "Error".into(), body: body.into() }
    }
}
