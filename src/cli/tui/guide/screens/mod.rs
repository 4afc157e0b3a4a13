//! Screen modules for the connector guide
pub mod question;
pub mod results;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::i18n::Localizer;
use crate::wizard::{Step, WizardState};

/// Everything a screen needs to draw itself
pub struct ScreenProps<'a> {
    pub state: &'a WizardState,
    pub localizer: &'a Localizer,
    /// Highlighted option on the current step
    pub cursor: usize,
    pub theme: &'a Theme,
    pub tick: usize,
    /// First visible row of the results table
    pub scroll: usize,
}

/// Header, progress and help bar rows plus the results table borders
const RESULTS_CHROME_HEIGHT: u16 = 7;

/// Results table rows that fit a terminal of `height` rows
pub fn results_viewport(height: u16) -> usize {
    height.saturating_sub(RESULTS_CHROME_HEIGHT).max(1) as usize
}

/// Draw the header, the current step's body and the help bar
pub fn render(frame: &mut Frame, props: &ScreenProps<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + step
            Constraint::Length(1), // Progress
            Constraint::Min(0),    // Step body
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], props);
    render_progress(frame, chunks[1], props);

    if props.state.is_loading() || props.state.step() == Step::Results {
        results::render(frame, chunks[2], props);
    } else {
        question::render(frame, chunks[2], props);
    }

    render_help_bar(frame, chunks[3], props);
}

fn render_header(frame: &mut Frame, area: Rect, props: &ScreenProps<'_>) {
    let step = props.state.step();
    let title = Line::from(vec![
        Span::raw(" "),
        Span::raw(step.icon()),
        Span::raw(" "),
        Span::styled(props.localizer.t(&step.title_key()).to_string(), props.theme.title),
    ]);

    let block = Block::default()
        .title(format!(" {} ", props.localizer.t("guide.title")))
        .borders(Borders::ALL)
        .border_style(props.theme.muted);

    frame.render_widget(Paragraph::new(title).block(block), area);
}

fn render_progress(frame: &mut Frame, area: Rect, props: &ScreenProps<'_>) {
    let index = props.state.step().index();
    let total = Step::ALL.len();
    let gauge = Gauge::default()
        .gauge_style(props.theme.highlight)
        .ratio(index as f64 / total as f64)
        .label(format!("{index}/{total}"));
    frame.render_widget(gauge, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, props: &ScreenProps<'_>) {
    let l = props.localizer;
    let state = props.state;
    let mut spans = vec![Span::raw(" ")];

    match state.step() {
        Step::Results => {
            spans.push(Span::styled("↑↓", props.theme.highlight));
            spans.push(Span::raw(format!(" {}  ", l.t("guide.actions.scroll"))));
            spans.push(Span::styled("r", props.theme.highlight));
            spans.push(Span::raw(format!(" {}  ", l.t("guide.actions.restart"))));
        }
        step => {
            spans.push(Span::styled("Space", props.theme.highlight));
            let action = if step == Step::Refinements {
                l.t("guide.actions.toggle")
            } else {
                l.t("guide.actions.select")
            };
            spans.push(Span::raw(format!(" {action}  ")));

            spans.push(Span::styled("Enter", props.theme.highlight));
            let next = format!(" {}", l.t("guide.actions.next"));
            if state.can_advance() {
                spans.push(Span::raw(next));
            } else {
                spans.push(Span::styled(next, props.theme.disabled));
            }
            spans.push(Span::raw("  "));
        }
    }

    if state.can_retreat() {
        spans.push(Span::styled("←", props.theme.highlight));
        spans.push(Span::raw(format!(" {}  ", l.t("guide.actions.back"))));
    }
    spans.push(Span::styled("q", props.theme.highlight));
    spans.push(Span::raw(format!(" {}", l.t("guide.actions.quit"))));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(props.theme.help_bar),
        area,
    );
}
