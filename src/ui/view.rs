//! Comparison rendering
//!
//! Layout: notice bar (top, 1 line) + comparison area + input bar (bottom,
//! 3 lines). The comparison area shows the two retrieval panels side by
//! side when the terminal is wide enough, stacked otherwise; the split is a
//! pure function of terminal width, re-evaluated every frame.
//!
//! Each panel renders its own outcome independently: a pending skeleton
//! with a spinner, a red failure banner, or the successful payload behind a
//! small tab bar with a latency badge in the title.

use ratatui::style::Stylize;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::retrieval::{GraphPayload, Outcome, Session, VectorHit};
use crate::ui::state::{App, GraphTab, Panel, VectorTab};

/// Spinner frames for pending panels, advanced by the render tick
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Number of columns for the comparison area at the given width
///
/// Two columns at or above the threshold, one below. Pure so the breakpoint
/// is testable without a terminal.
pub fn columns_for_width(width: u16, threshold: u16) -> u16 {
    if width >= threshold {
        2
    } else {
        1
    }
}

/// Render the main UI
pub fn render<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> std::io::Result<()> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(f.area());

        render_notice_bar(f, app, chunks[0]);
        render_comparison(f, app, chunks[1]);
        render_input_bar(f, app, chunks[2]);
    })?;
    Ok(())
}

/// Render the comparison area: idle placeholder, or the two panels split
/// horizontally (wide) or vertically (narrow)
fn render_comparison(f: &mut Frame, app: &App, area: Rect) {
    let session = app.session();

    if session.is_idle() {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Type a question and press Enter to compare retrieval strategies.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Type /help for commands",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().title(" Comparison ").borders(Borders::ALL));
        f.render_widget(placeholder, area);
        return;
    }

    let panes = if columns_for_width(area.width, app.narrow_threshold()) == 2 {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    };

    render_vector_panel(f, app, session, panes[0]);
    render_graph_panel(f, app, session, panes[1]);
}

fn render_vector_panel(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let focused = app.focused() == Panel::Vector;
    let title = panel_title("Vector Search", focused, session.vector());
    let border_style = panel_border(focused, session.vector());

    let content = match session.vector() {
        Outcome::Pending => pending_lines(app.tick()),
        Outcome::Failure { message } => failure_lines(message),
        Outcome::Success { payload, .. } => {
            let mut lines = vec![vector_tab_bar(app.vector_tab()), Line::from("")];
            match app.vector_tab() {
                VectorTab::Summary => push_wrapped_text(&mut lines, &payload.summary),
                VectorTab::Hits => push_hits(&mut lines, &payload.vector_results, area),
            }
            lines
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_graph_panel(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let focused = app.focused() == Panel::Graph;
    let title = panel_title("GraphRAG Search", focused, session.graph());
    let border_style = panel_border(focused, session.graph());

    let content = match session.graph() {
        Outcome::Pending => pending_lines(app.tick()),
        Outcome::Failure { message } => failure_lines(message),
        Outcome::Success { payload, .. } => {
            let mut lines = vec![graph_tab_bar(app.graph_tab(), payload), Line::from("")];
            match app.graph_tab() {
                GraphTab::Summary => push_wrapped_text(&mut lines, &payload.summary),
                GraphTab::Query => {
                    lines.push(Line::from(Span::styled(
                        "Generated Cypher:",
                        Style::default().fg(Color::DarkGray),
                    )));
                    for query_line in payload.cypher_query.lines() {
                        lines.push(Line::from(Span::styled(
                            query_line.to_string(),
                            Style::default().fg(Color::Cyan),
                        )));
                    }
                }
                GraphTab::Rows => push_graph_rows(&mut lines, payload, area),
                GraphTab::Hits => push_hits(&mut lines, &payload.vector_results, area),
            }
            lines
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Panel title with focus brackets and latency badge on success
fn panel_title<T>(name: &str, focused: bool, outcome: &Outcome<T>) -> String {
    let base = if focused {
        format!(" [{}] ", name)
    } else {
        format!(" {} ", name)
    };
    match outcome {
        Outcome::Success { elapsed_ms, .. } => format!("{}({}ms) ", base, elapsed_ms),
        _ => base,
    }
}

fn panel_border<T>(focused: bool, outcome: &Outcome<T>) -> Style {
    if matches!(outcome, Outcome::Failure { .. }) {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

/// Skeleton shown while a side is still in flight
fn pending_lines(tick: u64) -> Vec<Line<'static>> {
    let frame = SPINNER[(tick as usize) % SPINNER.len()];
    vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Searching...", frame),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "░░░░░░░░░░░░░░░░░░░░",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "░░░░░░░░░░░░░░",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

/// Red failure banner with the side's error message verbatim
fn failure_lines(message: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            "Request failed".to_string(),
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
    ]
}

fn vector_tab_bar(active: VectorTab) -> Line<'static> {
    tab_bar(&[
        ("Summary", active == VectorTab::Summary),
        ("Hits", active == VectorTab::Hits),
    ])
}

fn graph_tab_bar(active: GraphTab, payload: &GraphPayload) -> Line<'static> {
    // Rows tab shows the server-reported count, even if it disagrees with
    // the actual row list
    let rows_label = format!("Rows ({})", payload.cypher_result_count);
    tab_bar(&[
        ("Summary", active == GraphTab::Summary),
        ("Query", active == GraphTab::Query),
        (&rows_label, active == GraphTab::Rows),
        ("Hits", active == GraphTab::Hits),
    ])
}

fn tab_bar(tabs: &[(&str, bool)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (label, active)) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        if *active {
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(Color::Cyan).bold(),
            ));
        } else {
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    Line::from(spans)
}

fn push_wrapped_text(lines: &mut Vec<Line<'static>>, text: &str) {
    if text.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        )));
        return;
    }
    for text_line in text.lines() {
        lines.push(Line::from(text_line.to_string()));
    }
}

fn push_hits(lines: &mut Vec<Line<'static>>, hits: &[VectorHit], area: Rect) {
    if hits.is_empty() {
        lines.push(Line::from(Span::styled(
            "No hits",
            Style::default().fg(Color::DarkGray),
        )));
        return;
    }

    let max_lines = (area.height as usize).saturating_sub(4);
    for (i, hit) in hits.iter().enumerate() {
        if lines.len() >= max_lines {
            lines.push(Line::from(Span::styled(
                format!("  ... ({} more hits)", hits.len() - i),
                Style::default().fg(Color::DarkGray),
            )));
            break;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("[{}] ", hit.score),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(hit.text.clone()),
        ]));
    }
}

/// Render graph rows as compact key=value lines; rows are schemaless so
/// everything goes through the JSON value's display form
fn push_graph_rows(lines: &mut Vec<Line<'static>>, payload: &GraphPayload, area: Rect) {
    lines.push(Line::from(vec![
        Span::styled("Reported: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", payload.cypher_result_count),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(" | Received: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", payload.cypher_results.len()),
            Style::default().fg(Color::Yellow),
        ),
    ]));

    if payload.cypher_results.is_empty() {
        lines.push(Line::from(Span::styled(
            "No rows",
            Style::default().fg(Color::DarkGray),
        )));
        return;
    }

    let max_lines = (area.height as usize).saturating_sub(4);
    for (i, row) in payload.cypher_results.iter().enumerate() {
        if lines.len() >= max_lines {
            lines.push(Line::from(Span::styled(
                format!("  ... ({} more rows)", payload.cypher_results.len() - i),
                Style::default().fg(Color::DarkGray),
            )));
            break;
        }
        let fields: Vec<String> = row
            .iter()
            .map(|(k, v)| format!("{}={}", k, compact_value(v)))
            .collect();
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(fields.join("  ")),
        ]));
    }
}

/// Scalar values render bare, everything else as JSON
fn compact_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One-line notice bar: latest notice, or the session state
fn render_notice_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(notice) = app.latest_notice() {
        Span::styled(notice.to_string(), Style::default().fg(Color::Yellow))
    } else if app.session().is_loading() {
        Span::styled(
            format!("Comparing: {}", app.session().query()),
            Style::default().fg(Color::Cyan),
        )
    } else {
        Span::styled(
            "ragdiff".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };
    f.render_widget(Paragraph::new(Line::from(text)), area);
}

/// Input bar with a history position indicator while navigating
fn render_input_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.history_position() {
        Some((position, total)) => format!(" Query (history {}/{}) ", position, total),
        None => " Query ".to_string(),
    };

    let paragraph = Paragraph::new(Line::from(app.input_buffer.as_str()))
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_columns_at_or_above_threshold() {
        assert_eq!(columns_for_width(100, 100), 2);
        assert_eq!(columns_for_width(140, 100), 2);
    }

    #[test]
    fn test_one_column_below_threshold() {
        assert_eq!(columns_for_width(99, 100), 1);
        assert_eq!(columns_for_width(40, 100), 1);
    }

    #[test]
    fn test_success_title_carries_latency_badge() {
        let outcome: Outcome<()> = Outcome::Success {
            payload: (),
            elapsed_ms: 123,
        };
        let title = panel_title("Vector Search", false, &outcome);
        assert!(title.contains("123ms"));
    }

    #[test]
    fn test_pending_title_has_no_badge() {
        let outcome: Outcome<()> = Outcome::Pending;
        assert_eq!(panel_title("Vector Search", false, &outcome), " Vector Search ");
        assert_eq!(panel_title("Vector Search", true, &outcome), " [Vector Search] ");
    }

    #[test]
    fn test_failure_lines_show_message_verbatim() {
        let lines = failure_lines("API error: 500");
        let rendered: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(rendered.iter().any(|l| l == "API error: 500"));
    }

    #[test]
    fn test_spinner_advances_with_tick() {
        let a = pending_lines(0);
        let b = pending_lines(1);
        assert_ne!(a[1], b[1]);
        // Wraps around
        assert_eq!(pending_lines(0)[1], pending_lines(SPINNER.len() as u64)[1]);
    }

    #[test]
    fn test_compact_value_renders_strings_bare() {
        assert_eq!(compact_value(&serde_json::json!("Metformin")), "Metformin");
        assert_eq!(compact_value(&serde_json::json!(3)), "3");
        assert_eq!(compact_value(&serde_json::json!({"a": 1})), r#"{"a":1}"#);
    }
}
