//! Plain-text layout for the CLI

use std::fmt::Write;

use super::{role_label_key, ResultsView};
use crate::catalog::ConnectorRecord;
use crate::i18n::Localizer;
use crate::routes::Route;

/// Render the results view as indented text, one connector per line
pub fn render_results(view: &ResultsView<'_>, localizer: &Localizer) -> String {
    let mut out = String::new();

    match view {
        ResultsView::Loading => {
            let _ = writeln!(out, "{}", localizer.t("guide.results.loading"));
        }
        ResultsView::NoResults => {
            let _ = writeln!(out, "{}", localizer.t("guide.results.empty.title"));
            let _ = writeln!(out, "{}", localizer.t("guide.results.empty.hint"));
            let _ = writeln!(out, "-> {}", localizer.t("guide.actions.restart"));
        }
        ResultsView::Groups(groups) => {
            let total: usize = groups.iter().map(|g| g.count()).sum();
            let _ = writeln!(
                out,
                "{}",
                localizer.t_with("guide.results.total", &[("count", &total.to_string())])
            );
            for group in groups {
                let _ = writeln!(out);
                let _ = writeln!(
                    out,
                    "{}",
                    localizer.t_with(
                        "guide.results.group",
                        &[
                            ("role", localizer.t(role_label_key(group.role))),
                            ("count", &group.count().to_string()),
                        ],
                    )
                );
                for record in group.records {
                    let _ = writeln!(
                        out,
                        "  {:<32} {}",
                        record.model_name,
                        Route::connector(localizer.locale(), record.id)
                    );
                }
            }
        }
    }

    out
}

/// Render a connector detail page
pub fn render_detail(record: &ConnectorRecord, localizer: &Localizer) -> String {
    let yes_no = |flag: bool| {
        if flag {
            localizer.t("detail.yes")
        } else {
            localizer.t("detail.no")
        }
    };

    let mut rows: Vec<(&str, String)> = vec![(localizer.t("detail.model"), record.model_name.clone())];
    if let Some(series) = &record.series {
        rows.push((localizer.t("detail.series"), series.clone()));
    }
    rows.push((localizer.t("detail.gender"), record.gender.as_str().to_string()));
    rows.push((localizer.t("detail.poles"), record.pole_count.to_string()));
    if let Some(orientation) = record.orientation {
        rows.push((localizer.t("detail.orientation"), orientation.to_string()));
    }
    rows.push((
        localizer.t("detail.special"),
        yes_no(record.is_special_version).to_string(),
    ));
    if let Some(media_url) = &record.media_url {
        rows.push((localizer.t("detail.media"), media_url.clone()));
    }

    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "{}", Route::connector(localizer.locale(), record.id));
    for (label, value) in rows {
        let _ = writeln!(out, "  {label:<width$}  {value}");
    }
    if let Some(description) = &record.description {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {description}");
    }
    out
}
