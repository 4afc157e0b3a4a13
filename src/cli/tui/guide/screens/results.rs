//! Results step: loading, no results, or grouped connectors

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
        TableState,
    },
    Frame,
};

use super::ScreenProps;
use crate::cli::tui::guide::theme::Theme;
use crate::render::{role_label_key, ResultsView, RoleGroup};
use crate::routes::Route;
use crate::wizard::ResultSet;

pub fn render(frame: &mut Frame, area: Rect, props: &ScreenProps<'_>) {
    match ResultsView::project(props.state.results(), props.state.is_loading()) {
        ResultsView::Loading => render_loading(frame, area, props),
        ResultsView::NoResults => render_no_results(frame, area, props),
        ResultsView::Groups(groups) => render_groups(frame, area, props, &groups),
    }
}

fn render_loading(frame: &mut Frame, area: Rect, props: &ScreenProps<'_>) {
    let text = Line::from(vec![
        Span::styled(
            format!(" {} ", Theme::spinner(props.tick)),
            props.theme.highlight,
        ),
        Span::raw(props.localizer.t("guide.results.loading").to_string()),
    ]);
    frame.render_widget(Paragraph::new(text), area);
}

fn render_no_results(frame: &mut Frame, area: Rect, props: &ScreenProps<'_>) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", props.localizer.t("guide.results.empty.title")),
            props.theme.title,
        )),
        Line::from(format!("  {}", props.localizer.t("guide.results.empty.hint"))),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("[r]", props.theme.highlight),
            Span::raw(format!(" {}", props.localizer.t("guide.actions.restart"))),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(props.theme.muted);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Table rows the results step lays out: a heading per non-empty group,
/// its connectors, and a spacer between groups
pub fn row_count(results: &ResultSet) -> usize {
    match ResultsView::project(results, false) {
        ResultsView::Groups(groups) => {
            groups.iter().map(|g| g.count() + 1).sum::<usize>() + groups.len().saturating_sub(1)
        }
        _ => 0,
    }
}

fn render_groups(frame: &mut Frame, area: Rect, props: &ScreenProps<'_>, groups: &[RoleGroup<'_>]) {
    let mut rows = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            rows.push(Row::new(vec![String::new()]));
        }
        let heading = props.localizer.t_with(
            "guide.results.group",
            &[
                ("role", props.localizer.t(role_label_key(group.role))),
                ("count", &group.count().to_string()),
            ],
        );
        rows.push(
            Row::new(vec![heading]).style(
                Style::default()
                    .fg(props.theme.role_color(group.role))
                    .add_modifier(Modifier::BOLD),
            ),
        );

        for record in group.records {
            rows.push(Row::new(vec![
                format!("  {}", record.model_name),
                record.series.clone().unwrap_or_default(),
                record
                    .orientation
                    .map(|o| o.to_string())
                    .unwrap_or_default(),
                Route::connector(props.localizer.locale(), record.id).to_string(),
            ]));
        }
    }

    let row_total = rows.len();
    let visible = area.height.saturating_sub(2) as usize;
    let offset = props.scroll.min(row_total.saturating_sub(visible));

    let total: usize = groups.iter().map(|g| g.count()).sum();
    let table = Table::new(
        rows,
        [
            Constraint::Min(28),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Min(20),
        ],
    )
    .block(
        Block::default()
            .title(format!(
                " {} ",
                props
                    .localizer
                    .t_with("guide.results.total", &[("count", &total.to_string())])
            ))
            .borders(Borders::ALL)
            .border_style(props.theme.success),
    )
    .column_spacing(2);

    let mut table_state = TableState::default().with_offset(offset);
    frame.render_stateful_widget(table, area, &mut table_state);

    if row_total > visible {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(row_total.saturating_sub(visible)).position(offset);
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}
