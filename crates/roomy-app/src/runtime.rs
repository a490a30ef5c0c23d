//! Generic event loop.
//!
//! Renders, polls the driver for events, feeds them to the [`App`] and
//! executes the resulting [`AppAction`]s until the app asks to quit.
//! Single-threaded and synchronous: every event is handled to completion
//! before the next one is read.

use tracing::{debug, error};

use crate::{App, AppAction, Driver};

/// Runs an [`App`] on top of a [`Driver`].
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime owning `driver` and `app`.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app }
    }

    /// Application state.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Driver, e.g. for inspecting a test driver after a run.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run until the app emits [`AppAction::Quit`].
    ///
    /// The driver is stopped on every exit path.
    ///
    /// # Errors
    ///
    /// Returns the first driver error.
    pub fn run(&mut self) -> Result<(), D::Error> {
        let result = self.event_loop();
        if let Err(err) = &result {
            error!(error = %err, "runtime stopped on driver error");
        }
        self.driver.stop();
        result
    }

    fn event_loop(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        loop {
            let events = self.driver.poll_events(&self.app)?;
            let mut dirty = false;

            for event in events {
                for action in self.app.handle(event) {
                    match action {
                        AppAction::Render => dirty = true,
                        AppAction::Quit => {
                            debug!("quit requested");
                            return Ok(());
                        },
                    }
                }
            }

            if dirty {
                self.driver.render(&self.app)?;
            }
        }
    }
}
