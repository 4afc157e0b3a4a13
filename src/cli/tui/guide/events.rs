use ratatui::crossterm::event::KeyEvent;

use crate::wizard::FetchOutcome;

/// All possible events in the application
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Resize(u16, u16),

    // Async task events
    FetchComplete {
        generation: u64,
        outcome: FetchOutcome,
    },

    // UI events
    Tick, // for the loading spinner
}
