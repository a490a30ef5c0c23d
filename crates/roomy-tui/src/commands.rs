//! Command parsing for the TUI input line.
//!
//! This module parses command strings into structured [`Command`] values and
//! maps them onto [`AppEvent`]s.

use chrono::NaiveDate;
use roomy_app::{AppEvent, View};
use roomy_core::{TimeSlot, generate_slots};

/// Parsed command from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose a room.
    Room {
        /// Room name or 1-based number.
        query: String,
    },

    /// Choose a specific date.
    Date {
        /// Calendar date.
        date: NaiveDate,
    },

    /// Choose today's date.
    Today,

    /// Toggle a time slot.
    Slot {
        /// Slot to toggle.
        slot: TimeSlot,
    },

    /// Submit the selection.
    Reserve {
        /// Purpose text, possibly empty.
        purpose: String,
    },

    /// Show a room's reservations.
    Show {
        /// Room name or 1-based number.
        query: String,
    },

    /// Switch to the booking view.
    Book,

    /// Switch to the availability view.
    Rooms,

    /// Show the command summary.
    Help,

    /// Quit the application.
    Quit,

    /// Blank input.
    Empty,

    /// Unknown command or plain text.
    Unknown {
        /// The original input.
        input: String,
    },

    /// Command with missing or invalid arguments.
    InvalidArgs {
        /// Command name.
        command: String,
        /// Error message.
        error: String,
    },
}

impl Command {
    /// Translate into an app event. `today` resolves `/date today`.
    ///
    /// Returns `None` for blank input.
    pub fn into_event(self, today: NaiveDate) -> Option<AppEvent> {
        let event = match self {
            Self::Room { query } => AppEvent::ChooseRoom { query },
            Self::Date { date } => AppEvent::ChooseDate { date },
            Self::Today => AppEvent::ChooseDate { date: today },
            Self::Slot { slot } => AppEvent::ToggleSlot { slot },
            Self::Reserve { purpose } => AppEvent::Submit { purpose },
            Self::Show { query } => AppEvent::ShowReservations { query },
            Self::Book => AppEvent::ShowView(View::Booking),
            Self::Rooms => AppEvent::ShowView(View::Availability),
            Self::Help => AppEvent::Help,
            Self::Quit => AppEvent::Quit,
            Self::Empty => return None,
            Self::Unknown { input } => AppEvent::InputError {
                message: format!("Unknown command: {input}. Type /help for commands."),
            },
            Self::InvalidArgs { command, error } => {
                AppEvent::InputError { message: format!("/{command}: {error}") }
            },
        };
        Some(event)
    }
}

/// Parse a user input string into a command.
///
/// Commands start with `/`. Everything after the command word is its
/// argument, so room names and slot labels may contain spaces.
pub fn parse(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Empty;
    }

    let Some(cmd_str) = input.strip_prefix('/') else {
        return Command::Unknown { input: input.to_string() };
    };

    let (command, arg) = match cmd_str.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (cmd_str, ""),
    };

    match command {
        "room" => match arg {
            "" => invalid("room", "Usage: /room <name|number>"),
            query => Command::Room { query: query.to_string() },
        },

        "date" => match arg {
            "" => invalid("date", "Usage: /date <YYYY-MM-DD|today>"),
            today if today.eq_ignore_ascii_case("today") => Command::Today,
            date => match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                Ok(date) => Command::Date { date },
                Err(_) => invalid("date", "Invalid date, expected YYYY-MM-DD"),
            },
        },

        "slot" => match arg {
            "" => invalid("slot", "Usage: /slot <HH:MM AM|PM|number>"),
            arg => parse_slot(arg),
        },

        "reserve" => Command::Reserve { purpose: arg.to_string() },

        "show" => match arg {
            "" => invalid("show", "Usage: /show <name|number>"),
            query => Command::Show { query: query.to_string() },
        },

        "book" => Command::Book,

        "rooms" => Command::Rooms,

        "help" | "h" => Command::Help,

        "quit" | "q" => Command::Quit,

        _ => Command::Unknown { input: input.to_string() },
    }
}

fn parse_slot(arg: &str) -> Command {
    if let Ok(number) = arg.parse::<usize>() {
        let slots = generate_slots();
        return match number.checked_sub(1).and_then(|index| slots.get(index)) {
            Some(&slot) => Command::Slot { slot },
            None => invalid("slot", &format!("Slot number must be 1-{}", slots.len())),
        };
    }

    match arg.parse::<TimeSlot>() {
        Ok(slot) => Command::Slot { slot },
        Err(err) => invalid("slot", &err.to_string()),
    }
}

fn invalid(command: &str, error: &str) -> Command {
    Command::InvalidArgs { command: command.into(), error: error.into() }
}
