use std::io;
use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal, Frame,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info};

use super::events::AppEvent;
use super::options::{self, Cursor};
use super::screens::{self, results, ScreenProps};
use super::theme::Theme;
use crate::cli::commands::GuideContext;
use crate::i18n::Localizer;
use crate::wizard::{FetchOutcome, FetchTicket, ResultFetcher, Step, Transition, WizardState};
use crate::Result;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    /// Wizard state machine
    wizard: WizardState,
    /// Runs fetch tickets against the catalog
    fetcher: ResultFetcher,
    localizer: Localizer,
    cursor: Cursor,
    /// First visible row of the results table
    scroll: usize,
    /// Results table rows that fit the terminal
    viewport: usize,
    theme: Theme,
    /// Animation counter for the loading spinner
    tick: usize,
    /// Whether the app should quit
    should_quit: bool,
    /// Event sender for background tasks
    event_tx: Option<UnboundedSender<AppEvent>>,
}

impl App {
    /// Create a new app instance
    pub fn new(ctx: &GuideContext) -> Self {
        Self {
            wizard: WizardState::new(),
            fetcher: ResultFetcher::new(ctx.catalog.clone()),
            localizer: ctx.localizer.clone(),
            cursor: Cursor::default(),
            scroll: 0,
            viewport: screens::results_viewport(24),
            theme: Theme::default(),
            tick: 0,
            should_quit: false,
            event_tx: None,
        }
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;
        self.viewport = screens::results_viewport(terminal.size()?.height);

        // Create event channel
        let (event_tx, mut event_rx) = unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Spawn input handler; polls so it notices when the app has gone away
        let input_tx = event_tx.clone();
        tokio::task::spawn_blocking(move || forward_input(&input_tx, poll_terminal));

        info!("Connector guide started");
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Closing the channel stops the input thread at its next poll
        self.event_tx = None;
        drop(event_rx);

        // Cleanup
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            match time::timeout(Duration::from_millis(100), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Render the current step
    pub fn render(&self, frame: &mut Frame) {
        screens::render(
            frame,
            &ScreenProps {
                state: &self.wizard,
                localizer: &self.localizer,
                cursor: self.cursor.get(self.wizard.step()),
                theme: &self.theme,
                tick: self.tick,
                scroll: self.scroll,
            },
        );
    }

    /// Handle an event from the channel
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => {
                if let Some(ticket) = self.handle_key(key) {
                    self.spawn_fetch(ticket);
                }
            }
            AppEvent::FetchComplete {
                generation,
                outcome,
            } => {
                self.apply_fetch(generation, outcome);
            }
            AppEvent::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            AppEvent::Resize(_, height) => {
                self.viewport = screens::results_viewport(height);
                self.scroll = self.scroll.min(self.max_scroll());
            }
        }
    }

    /// Apply key input. Returns a ticket when results must be fetched.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FetchTicket> {
        let step = self.wizard.step();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') if step == Step::Results => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') if step == Step::Results => self.scroll_by(1),
            KeyCode::PageUp if step == Step::Results => self.scroll_by(-(self.viewport as isize)),
            KeyCode::PageDown if step == Step::Results => self.scroll_by(self.viewport as isize),
            KeyCode::Home if step == Step::Results => self.scroll = 0,
            KeyCode::End if step == Step::Results => self.scroll = self.max_scroll(),
            KeyCode::Up | KeyCode::Char('k') => self.cursor.up(step),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.down(step),
            // Answers are frozen while the fetch for them is in flight
            KeyCode::Char(' ') if self.wizard.is_loading() => {}
            KeyCode::Char(' ') => {
                if let Some(patch) =
                    options::select(step, self.cursor.get(step), self.wizard.answers())
                {
                    self.wizard.update_answers(patch);
                }
            }
            KeyCode::Enter | KeyCode::Right => match self.wizard.advance() {
                Transition::Fetch(ticket) => return Some(ticket),
                Transition::Moved(to) => debug!(step = to.index(), "Moved forward"),
                Transition::Blocked => debug!(step = step.index(), "Next is disabled"),
            },
            KeyCode::Left | KeyCode::Backspace => {
                self.wizard.retreat();
                self.scroll = 0;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.wizard.reset();
                self.cursor.reset();
                self.scroll = 0;
            }
            _ => {}
        }
        None
    }

    /// Apply a finished fetch. Stale outcomes are ignored.
    pub fn apply_fetch(&mut self, generation: u64, outcome: FetchOutcome) -> bool {
        let applied = self.wizard.complete_fetch(generation, outcome);
        if applied {
            self.scroll = 0;
        }
        applied
    }

    fn max_scroll(&self) -> usize {
        results::row_count(self.wizard.results()).saturating_sub(self.viewport)
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }

    /// Run a fetch ticket in the background and report back through the channel
    fn spawn_fetch(&self, ticket: FetchTicket) {
        let Some(tx) = self.event_tx.clone() else {
            return;
        };
        let fetcher = self.fetcher.clone();
        tokio::spawn(async move {
            let outcome = fetcher.fetch(&ticket.plan).await;
            let _ = tx.send(AppEvent::FetchComplete {
                generation: ticket.generation,
                outcome,
            });
        });
    }
}

/// Wait up to `timeout` for a terminal event
fn poll_terminal(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forward key and resize events until the receiving side closes or input fails
fn forward_input<F>(tx: &UnboundedSender<AppEvent>, mut next_event: F)
where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    while !tx.is_closed() {
        let event = match next_event(INPUT_POLL_INTERVAL) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                debug!(error = %e, "Terminal input closed");
                break;
            }
        };
        let sent = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => tx.send(AppEvent::Key(key)),
            Event::Resize(width, height) => tx.send(AppEvent::Resize(width, height)),
            _ => Ok(()),
        };
        if sent.is_err() {
            break;
        }
    }
}
