//! Application layer for Roomy
//!
//! Pure application state and a generic runtime, so the same booking flow
//! runs in the terminal front end and in scripted tests.
//!
//! # Components
//!
//! - [`App`]: Application state (store, selection, view, notification)
//! - [`AppEvent`]: Input events fed to the [`App`]
//! - [`AppAction`]: Actions the [`App`] asks the runtime to perform
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic event loop using a [`Driver`]

mod action;
mod app;
mod driver;
mod event;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use runtime::Runtime;
pub use state::{Notice, NoticeLevel, View};
