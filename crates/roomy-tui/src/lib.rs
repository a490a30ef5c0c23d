//! Terminal UI for Roomy
//!
//! A thin shell over [`roomy_app::Driver`] that provides terminal-specific
//! I/O. All booking logic lives in [`roomy_app::App`] and the core crate.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod commands;
pub mod input;
pub mod terminal;
pub mod ui;

pub use commands::Command;
pub use input::{InputState, KeyInput};
pub use roomy_app::{App, AppAction, AppEvent, Driver, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
