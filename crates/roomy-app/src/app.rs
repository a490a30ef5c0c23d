//! Application state machine.
//!
//! Owns the reservation store, the current selection, the active view and the
//! pending notification. [`App::handle`] consumes an [`AppEvent`], updates
//! state, and returns [`AppAction`]s for the runtime. No I/O happens here.

use roomy_core::{
    BookingConfig, BookingError, Effect, ReservationStore, RoomDetail, RoomName, RoomSummary,
    SelectionAction, SelectionState, Transition, availability,
};
use tracing::{debug, warn};

use crate::{
    action::AppAction,
    event::AppEvent,
    state::{Notice, View},
};

const HELP: &str = "\
/room <name|number>      choose a room
/date <YYYY-MM-DD|today> choose a date
/slot <HH:MM AM|number>  toggle a time slot
/reserve <purpose>       book the selected slots
/show <name|number>      list a room's reservations
/book, /rooms            switch view (Tab)
/quit                    exit (Ctrl-C)";

/// Application state.
#[derive(Debug, Clone)]
pub struct App {
    store: ReservationStore,
    selection: SelectionState,
    view: View,
    notice: Option<Notice>,
}

impl App {
    /// Fresh application with an empty store for the configured rooms.
    pub fn new(config: &BookingConfig) -> Self {
        Self {
            store: ReservationStore::new(config),
            selection: SelectionState::new(),
            view: View::default(),
            notice: None,
        }
    }

    /// Reservation store.
    pub fn store(&self) -> &ReservationStore {
        &self.store
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Active view.
    pub fn view(&self) -> View {
        self.view
    }

    /// Pending notification, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Availability overview rows.
    pub fn summaries(&self) -> Vec<RoomSummary> {
        availability::summarize(&self.store)
    }

    /// Process one input event.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        debug!(?event, "handling event");
        match event {
            AppEvent::ChooseRoom { query } => match self.resolve(&query) {
                Ok(room) => self.select(SelectionAction::ChooseRoom(room)),
                Err(error) => self.reject(&error),
            },
            AppEvent::ChooseDate { date } => self.select(SelectionAction::ChooseDate(date)),
            AppEvent::ToggleSlot { slot } => self.select(SelectionAction::ToggleSlot(slot)),
            AppEvent::Submit { purpose } => self.select(SelectionAction::Submit { purpose }),
            AppEvent::ShowReservations { query } => match self.resolve(&query) {
                Ok(room) => {
                    let detail = RoomDetail::of(&self.store, &room);
                    self.notice = Some(Notice::info("Reservations", detail.to_string()));
                },
                Err(error) => self.reject(&error),
            },
            AppEvent::ShowView(view) => self.view = view,
            AppEvent::ToggleView => self.view = self.view.toggled(),
            AppEvent::Help => self.notice = Some(Notice::info("Commands", HELP)),
            AppEvent::Dismiss => self.notice = None,
            AppEvent::InputError { message } => self.notice = Some(Notice::error(message)),
            AppEvent::Quit => return vec![AppAction::Quit],
        }
        vec![AppAction::Render]
    }

    fn resolve(&self, query: &str) -> Result<RoomName, BookingError> {
        self.store
            .resolve(query)
            .cloned()
            .ok_or_else(|| BookingError::UnknownRoom { name: query.trim().to_string() })
    }

    fn select(&mut self, action: SelectionAction) {
        match self.selection.transition(action, &self.store) {
            Ok(transition) => self.apply(transition),
            Err(error) => self.reject(&error),
        }
    }

    fn apply(&mut self, transition: Transition) {
        let Transition { state, effect } = transition;
        match effect {
            Effect::None => self.selection = state,
            Effect::Commit { room, reservation } => {
                let message = format!(
                    "Room '{room}' has been reserved on {} from {} to {}.",
                    reservation.date().format("%Y-%m-%d"),
                    reservation.start_time(),
                    reservation.end_time(),
                );
                if let Err(error) = self.store.append(&room, reservation) {
                    self.reject(&error);
                    return;
                }
                debug!(room = %room, total = self.store.len(), "booking committed");
                self.selection = state.refresh(&self.store);
                self.notice = Some(Notice::success(message));
            },
        }
    }

    fn reject(&mut self, error: &BookingError) {
        warn!(%error, "request rejected");
        self.notice = Some(Notice::error(error.to_string()));
    }
}
