//! Application main loop
//!
//! Roughly every 100 ms:
//!
//! ```text
//! loop {
//!     terminal.draw(|f| view::render(&app, f))   // draw
//!     if app.should_quit { break }
//!     drain backend events                         // prompts, finished sessions
//!     poll input (100 ms) → message → update       // user keys
//! }
//! ```

use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;
use crate::update::{self, Command};
use crate::util::Term;
use crate::view;

/// Run the application main loop
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    loop {
        // 1. Render UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. Check for exit
        if app.should_quit {
            break;
        }

        // 3. Session events never wait for input
        while let Some(backend_event) = backend.try_recv() {
            let command = update::update(app, AppMessage::Backend(backend_event));
            execute(command, app, backend);
        }

        // 4. Poll input (100ms timeout)
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            let command = update::update(app, msg);
            execute(command, app, backend);
        }
    }

    Ok(())
}

/// Carry out side effects requested by `update`.
fn execute(command: Command, app: &mut App, backend: &Backend) {
    match command {
        Command::None => {}
        Command::StartSession => {
            if backend.start_session() {
                app.session_active = true;
                app.clear_status();
            } else {
                app.set_status(t().status.session_running);
            }
        }
    }
}
