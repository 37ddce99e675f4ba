//! Text and JSON views of keyspan results.
//!
//! Every view returns a `String` so the caller decides where it goes
//! (stdout for one-shot commands, the interactive writer for sessions).
//!
//! The text view of a result is the result string itself, verbatim.  The
//! verbose text view adds one line per selection above it.  The JSON view
//! always carries the per-selection detail:
//!
//! ```json
//! {
//!   "selections": [{"from": "1", "to": "5"}, {"from": "a", "to": null}],
//!   "contributions": [
//!     {"index": 0, "status": "resolved", "keys": ["2", "3", "4"]},
//!     {"index": 1, "status": "incomplete", "keys": []}
//!   ],
//!   "result": "234"
//! }
//! ```

use clap::ValueEnum;
use keyspan_core::{Aggregator, ContributionStatus, KeyLabel, Layout, SelectionList};
use serde::{Deserialize, Serialize};

/// Output format for everything the CLI prints on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How a selection fared, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionKind {
    Incomplete,
    Resolved,
    Rejected,
}

/// Display form of one [`keyspan_core::Contribution`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContributionView {
    pub index: usize,
    pub status: ContributionKind,
    pub keys: Vec<KeyLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A selection list together with how each selection resolved.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub selections: &'a SelectionList,
    pub contributions: Vec<ContributionView>,
    pub result: String,
}

impl<'a> Report<'a> {
    /// Resolves `selections` with `aggregator` and collects the views.
    pub fn build(aggregator: &Aggregator, selections: &'a SelectionList) -> Self {
        let contributions: Vec<ContributionView> = aggregator
            .resolve_all(selections)
            .into_iter()
            .map(|c| match c.status {
                ContributionStatus::Incomplete => ContributionView {
                    index: c.index,
                    status: ContributionKind::Incomplete,
                    keys: Vec::new(),
                    error: None,
                },
                ContributionStatus::Resolved(keys) => ContributionView {
                    index: c.index,
                    status: ContributionKind::Resolved,
                    keys,
                    error: None,
                },
                ContributionStatus::Rejected(e) => ContributionView {
                    index: c.index,
                    status: ContributionKind::Rejected,
                    keys: Vec::new(),
                    error: Some(e.to_string()),
                },
            })
            .collect();
        Self {
            selections,
            contributions,
            result: aggregator.recompute(selections),
        }
    }
}

/// Renders a report.
///
/// # Errors
///
/// Only the JSON format can fail, and only if serialization fails.
pub fn render_report(
    report: &Report<'_>,
    format: OutputFormat,
    verbose: bool,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string(report),
        OutputFormat::Text if !verbose => Ok(report.result.clone()),
        OutputFormat::Text => {
            let mut lines: Vec<String> = report
                .selections
                .iter()
                .zip(&report.contributions)
                .map(|(selection, view)| {
                    let from = selection.from.as_deref().unwrap_or("-");
                    let to = selection.to.as_deref().unwrap_or("-");
                    let outcome = match view.status {
                        ContributionKind::Incomplete => "incomplete".to_string(),
                        ContributionKind::Resolved => format!("-> {}", view.keys.join(" ")),
                        ContributionKind::Rejected => {
                            format!("rejected: {}", view.error.as_deref().unwrap_or_default())
                        }
                    };
                    format!("#{} {from}:{to} {}", view.index, outcome.trim_end())
                })
                .collect();
            lines.push(format!("result: {}", report.result));
            Ok(lines.join("\n"))
        }
    }
}

/// Renders a list of keys: space-separated text, or a JSON array.
///
/// # Errors
///
/// Only the JSON format can fail.
pub fn render_keys(keys: &[KeyLabel], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(keys.join(" ")),
        OutputFormat::Json => serde_json::to_string(keys),
    }
}

/// Renders the layout: one line per row, or a JSON array of rows.
///
/// # Errors
///
/// Only the JSON format can fail.
pub fn render_layout(layout: &Layout, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(layout
            .rows()
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string(layout.rows()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use keyspan_core::Selection;

    fn sample() -> SelectionList {
        vec![
            Selection::complete("1", "5"),
            Selection {
                from: Some("a".to_string()),
                to: None,
            },
            Selection::complete("1", "q"),
            Selection::complete("q", "o"),
        ]
        .into()
    }

    #[test]
    fn test_report_result_matches_recompute() {
        let agg = Aggregator::standard();
        let list = sample();
        let report = Report::build(&agg, &list);
        assert_eq!(report.result, agg.recompute(&list));
        assert_eq!(report.result, "234wertyui");
        let from_views: String = report
            .contributions
            .iter()
            .flat_map(|c| c.keys.iter().copied())
            .collect();
        assert_eq!(from_views, report.result);
    }

    #[test]
    fn test_text_report_is_result_verbatim() {
        let list = sample();
        let report = Report::build(&Aggregator::standard(), &list);
        assert_eq!(
            render_report(&report, OutputFormat::Text, false).unwrap(),
            "234wertyui"
        );
    }

    #[test]
    fn test_verbose_text_report_lists_each_selection() {
        // Arrange
        let list = sample();
        let report = Report::build(&Aggregator::standard(), &list);

        // Act
        let text = render_report(&report, OutputFormat::Text, true).unwrap();

        // Assert
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#0 1:5 -> 2 3 4");
        assert_eq!(lines[1], "#1 a:- incomplete");
        assert_eq!(
            lines[2],
            "#2 1:q rejected: keys must be in the same row: from row 0 != to row 1"
        );
        assert_eq!(lines[3], "#3 q:o -> w e r t y u i");
        assert_eq!(lines[4], "result: 234wertyui");
    }

    #[test]
    fn test_verbose_text_shows_empty_resolved_span_without_trailing_space() {
        let list: SelectionList = vec![Selection::complete("q", "w")].into();
        let report = Report::build(&Aggregator::standard(), &list);
        let text = render_report(&report, OutputFormat::Text, true).unwrap();
        assert_eq!(text, "#0 q:w ->\nresult: ");
    }

    #[test]
    fn test_json_report_shape() {
        // Arrange
        let list = sample();
        let report = Report::build(&Aggregator::standard(), &list);

        // Act
        let json = render_report(&report, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        // Assert
        assert_eq!(value["result"], "234wertyui");
        assert_eq!(value["selections"][1]["from"], "a");
        assert!(value["selections"][1]["to"].is_null());
        assert_eq!(value["contributions"][0]["status"], "resolved");
        assert_eq!(value["contributions"][0]["keys"], serde_json::json!(["2", "3", "4"]));
        assert_eq!(value["contributions"][1]["status"], "incomplete");
        assert_eq!(value["contributions"][2]["status"], "rejected");
        assert!(value["contributions"][2]["error"].is_string());
        assert!(value["contributions"][0].get("error").is_none());
    }

    #[test]
    fn test_render_keys_text_and_json() {
        let keys = ["2", "3", "4"];
        assert_eq!(render_keys(&keys, OutputFormat::Text).unwrap(), "2 3 4");
        assert_eq!(render_keys(&keys, OutputFormat::Json).unwrap(), r#"["2","3","4"]"#);
        assert_eq!(render_keys(&[], OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn test_render_layout_text_has_one_line_per_row() {
        let text = render_layout(Layout::standard(), OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "` 1 2 3 4 5 6 7 8 9 0 - =");
        assert_eq!(lines[3], "z x c v b n m , . /");
    }

    #[test]
    fn test_render_layout_json_is_nested_arrays() {
        let json = render_layout(Layout::standard(), OutputFormat::Json).unwrap();
        let rows: Vec<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1][12], "\\");
    }

    #[test]
    fn test_output_format_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let w: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(w.format, OutputFormat::Json);
    }
}
