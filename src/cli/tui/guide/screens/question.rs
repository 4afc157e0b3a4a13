//! Option list for the question steps (1-4)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::ScreenProps;
use crate::cli::tui::guide::options::option_items;
use crate::wizard::Step;

pub fn render(frame: &mut Frame, area: Rect, props: &ScreenProps<'_>) {
    let step = props.state.step();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Min(0),    // Options
        ])
        .split(area);

    let prompt_key = format!("guide.steps.{}.prompt", step.index());
    let prompt = Paragraph::new(Line::from(Span::styled(
        format!(" {}", props.localizer.t(&prompt_key)),
        props.theme.highlight,
    )));
    frame.render_widget(prompt, chunks[0]);

    let checkbox = step == Step::Refinements;
    let items: Vec<ListItem> = option_items(step, props.state.answers(), props.localizer)
        .into_iter()
        .map(|item| {
            let marker = match (checkbox, item.chosen) {
                (true, true) => "[x]",
                (true, false) => "[ ]",
                (false, true) => "(•)",
                (false, false) => "( )",
            };
            let style = if item.chosen {
                props.theme.selected
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {marker} ")),
                Span::styled(item.label, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(props.theme.muted))
        .highlight_style(props.theme.cursor)
        .highlight_symbol("▶");

    let mut list_state = ListState::default().with_selected(Some(props.cursor));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}
