//! Tabbed layout over the content store.
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ ▤ How to Be a Good Programmer                    │  header
//! │   By Saed I. S. Ayyad                            │
//! ├─[1 Book Contents]──[2 Programming Languages]─────┤  tab bar
//! │                                                  │
//! │  (scrollable content for the active tab)         │
//! │                                                  │
//! ├──────────────────────────────────────────────────┤
//! │ [Book Contents] [Chapters: 5] Tab:Switch q:Quit  │  status bar
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Line builders ([`overview_lines`], [`language_lines`]) are pure
//! functions from model to styled lines; the draw functions wrap them
//! in widgets and apply the scroll clamp.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};
use ratatui::Frame;

use crate::content::{BOOK_AUTHOR, BOOK_INTRO, BOOK_SUBTITLE, BOOK_TITLE};

use super::app::{ActiveTab, App};

/// Draw the full TUI layout.
pub fn draw(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(1), // tab bar
            Constraint::Min(5),    // content area
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    draw_header(f, outer[0]);
    draw_tab_bar(f, app, outer[1]);

    match app.active_tab {
        ActiveTab::Overview => draw_overview(f, app, outer[2]),
        ActiveTab::Languages => draw_languages(f, app, outer[2]),
    }

    draw_status(f, app, outer[3]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("\u{25a4} ", Style::default().fg(Color::Cyan)),
            Span::styled(
                BOOK_TITLE,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {BOOK_AUTHOR}"),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("  {BOOK_SUBTITLE}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn draw_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let tabs: [(&str, ActiveTab, &str); 2] = [
        ("Book Contents", ActiveTab::Overview, "1"),
        ("Programming Languages", ActiveTab::Languages, "2"),
    ];

    let spans: Vec<Span> = tabs
        .iter()
        .flat_map(|(name, tab, num)| {
            let is_active = *tab == app.active_tab;
            let style = if is_active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            vec![Span::raw(" "), Span::styled(format!("[{num} {name}]"), style)]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Build the styled lines for the Book Contents tab.
pub fn overview_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "\u{25c8} Book Overview",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::raw(BOOK_INTRO)),
    ];

    for chapter in &app.chapters {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", chapter.icon.glyph()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                chapter.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            chapter.body,
            Style::default().fg(Color::Gray),
        )));
        for sub in &chapter.subchapters {
            lines.push(Line::from(vec![
                Span::styled("  \u{25b8} ", Style::default().fg(Color::Cyan)),
                Span::styled(sub.title, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", sub.body),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines
}

/// Build the styled lines for the Programming Languages tab.
///
/// Returns the lines plus, for each language, the index of its header
/// row — used to keep the selected row in view.
pub fn language_lines(app: &App) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines = vec![
        Line::from(Span::styled(
            "\u{25c8} Programming Languages",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    let mut header_rows = Vec::with_capacity(app.languages.len());

    let section_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    for (i, lang) in app.languages.iter().enumerate() {
        let is_selected = i == app.selected_language;
        let is_expanded = app.expanded_language.as_deref() == Some(lang.name);

        header_rows.push(lines.len());

        let prefix = if is_selected { "> " } else { "  " };
        let chevron = if is_expanded {
            "\u{25be} "
        } else {
            "\u{25b8} "
        };
        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(chevron, style),
            Span::styled(lang.name, style),
        ]));

        if is_expanded {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("    {}", lang.description),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("    Key Advantages", section_style)));
            for advantage in &lang.advantages {
                lines.push(Line::from(Span::styled(
                    format!("      \u{2022} {advantage}"),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "    Common Use Cases",
                section_style,
            )));
            for use_case in &lang.use_cases {
                lines.push(Line::from(Span::styled(
                    format!("      \u{2022} {use_case}"),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("    Code Example", section_style)));
            for code_line in lang.code_example.lines() {
                lines.push(Line::from(Span::styled(
                    format!("      {code_line}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(Line::from(""));
        }
    }

    (lines, header_rows)
}

/// Visual rows a logical line occupies at the given wrap width.
fn wrapped_height(line: &Line, width: usize) -> u32 {
    let w: usize = line.spans.iter().map(|s| s.content.len()).sum();
    if w == 0 {
        1
    } else {
        w.div_ceil(width) as u32
    }
}

/// Total visual rows for a run of lines at the given wrap width.
fn wrapped_total(lines: &[Line], width: usize) -> u32 {
    lines.iter().map(|l| wrapped_height(l, width)).sum()
}

fn draw_overview(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Book Contents ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = overview_lines(app);

    // Clamp scroll so we never scroll past content, accounting for
    // line wrapping. Write the clamped value back so keys work
    // immediately on the next event.
    let inner_height = area.height.saturating_sub(2) as u32;
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let total_lines = wrapped_total(&lines, inner_width);
    let max_scroll = total_lines.saturating_sub(inner_height);
    let max_scroll_u16 = max_scroll.min(u16::MAX as u32) as u16;
    let scroll = app.overview_scroll.min(max_scroll_u16);
    app.overview_scroll = scroll;
    app.overview_viewport_height = inner_height.min(u16::MAX as u32) as u16;

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(para, area);

    if total_lines > inner_height {
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll_u16 as usize).position(scroll as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area,
            &mut scrollbar_state,
        );
    }
}

fn draw_languages(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Programming Languages ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let (lines, header_rows) = language_lines(app);

    let inner_height = area.height.saturating_sub(2) as u32;
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let total_lines = wrapped_total(&lines, inner_width);
    let max_scroll_u16 = total_lines
        .saturating_sub(inner_height)
        .min(u16::MAX as u32) as u16;
    let viewport = inner_height.min(u16::MAX as u32) as u16;

    // Selection follow: nudge the scroll so the selected header row is
    // inside the viewport, then fall through to the normal clamp.
    if app.scroll_to_selected {
        if let Some(&row_idx) = header_rows.get(app.selected_language) {
            let row = wrapped_total(&lines[..row_idx], inner_width).min(u16::MAX as u32) as u16;
            if row < app.languages_scroll {
                app.languages_scroll = row;
            } else if viewport > 0 && row >= app.languages_scroll.saturating_add(viewport) {
                app.languages_scroll = row - viewport + 1;
            }
        }
        app.scroll_to_selected = false;
    }

    let scroll = app.languages_scroll.min(max_scroll_u16);
    app.languages_scroll = scroll;
    app.languages_viewport_height = viewport;

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(para, area);

    if total_lines > inner_height {
        let mut scrollbar_state =
            ScrollbarState::new(max_scroll_u16 as usize).position(scroll as usize);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area,
            &mut scrollbar_state,
        );
    }
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let tab_name = match app.active_tab {
        ActiveTab::Overview => "Book Contents",
        ActiveTab::Languages => "Programming Languages",
    };

    let mut spans = vec![
        Span::styled(format!(" [{tab_name}]"), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(
            format!("[Chapters: {}]", app.chapters.len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[Languages: {}]", app.languages.len()),
            Style::default().fg(Color::Cyan),
        ),
    ];

    if app.active_tab == ActiveTab::Languages {
        let expanded = app.expanded_language.as_deref().unwrap_or("none");
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[Expanded: {expanded}]"),
            Style::default().fg(Color::Yellow),
        ));
    }

    let shortcuts = match app.active_tab {
        ActiveTab::Overview => {
            "Tab:Switch  1/2:Tabs  \u{2191}\u{2193}:Scroll  PgUp/PgDn:Page  q:Quit"
        }
        ActiveTab::Languages => {
            "Tab:Switch  1/2:Tabs  \u{2191}\u{2193}:Move  Enter:Expand  Esc:Collapse  q:Quit"
        }
    };
    spans.push(Span::raw("  "));
    spans.push(Span::styled(shortcuts, Style::default().fg(Color::DarkGray)));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> String {
        let mut out = String::new();
        for line in lines {
            for span in &line.spans {
                out.push_str(span.content.as_ref());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn overview_shows_every_chapter_and_subchapter() {
        let app = App::new();
        let text = text_of(&overview_lines(&app));
        for chapter in &app.chapters {
            assert!(text.contains(chapter.title), "missing {}", chapter.title);
            assert!(text.contains(chapter.body));
            for sub in &chapter.subchapters {
                assert!(text.contains(sub.title), "missing {}", sub.title);
                assert!(text.contains(sub.body), "missing body of {}", sub.title);
            }
        }
    }

    #[test]
    fn overview_opens_with_intro() {
        let app = App::new();
        let text = text_of(&overview_lines(&app));
        assert!(text.contains("Book Overview"));
        assert!(text.contains(BOOK_INTRO));
    }

    #[test]
    fn collapsed_rows_show_names_only() {
        let app = App::new();
        let (lines, _) = language_lines(&app);
        let text = text_of(&lines);
        for lang in &app.languages {
            assert!(text.contains(lang.name));
            assert!(!text.contains(lang.description));
        }
        assert!(!text.contains("Key Advantages"));
        assert!(!text.contains("Code Example"));
    }

    #[test]
    fn expanded_python_shows_full_card() {
        let mut app = App::new();
        app.select_tab(ActiveTab::Languages);
        app.toggle_language("Python");

        let (lines, _) = language_lines(&app);
        let text = text_of(&lines);

        let python = app.languages.iter().find(|l| l.name == "Python").unwrap();
        assert!(text.contains(python.description));
        for advantage in &python.advantages {
            assert!(text.contains(advantage), "missing {advantage}");
        }
        for use_case in &python.use_cases {
            assert!(text.contains(use_case), "missing {use_case}");
        }
        assert!(text.contains("Key Advantages"));
        assert!(text.contains("Common Use Cases"));
        assert!(text.contains("Code Example"));
        assert!(text.contains("@dataclasses.dataclass"));

        // The other rows stay collapsed.
        let js = app.languages.iter().find(|l| l.name == "JavaScript").unwrap();
        let java = app.languages.iter().find(|l| l.name == "Java").unwrap();
        assert!(!text.contains(js.description));
        assert!(!text.contains(java.description));
    }

    #[test]
    fn code_sample_rendered_verbatim() {
        let mut app = App::new();
        app.toggle_language("Java");
        let (lines, _) = language_lines(&app);
        let text = text_of(&lines);
        assert!(text.contains("record Person(String name, int age) {}"));
        assert!(text.contains("case \"MONDAY\", \"FRIDAY\" -> \"Working day\";"));
    }

    #[test]
    fn header_rows_point_at_name_rows() {
        let mut app = App::new();
        app.toggle_language("JavaScript"); // expansion shifts later rows
        let (lines, header_rows) = language_lines(&app);
        assert_eq!(header_rows.len(), app.languages.len());
        for (i, &row) in header_rows.iter().enumerate() {
            let text = text_of(&lines[row..row + 1]);
            assert!(
                text.contains(app.languages[i].name),
                "row {row} is not {}",
                app.languages[i].name
            );
        }
    }

    #[test]
    fn selected_row_carries_cursor() {
        let mut app = App::new();
        app.selected_language = 2;
        let (lines, header_rows) = language_lines(&app);
        let row = text_of(&lines[header_rows[2]..header_rows[2] + 1]);
        assert!(row.starts_with("> "));

        let other = text_of(&lines[header_rows[0]..header_rows[0] + 1]);
        assert!(other.starts_with("  "));
    }

    #[test]
    fn expanding_grows_line_count() {
        let mut app = App::new();
        let (collapsed, _) = language_lines(&app);
        app.toggle_language("Python");
        let (expanded, _) = language_lines(&app);
        assert!(expanded.len() > collapsed.len());
    }

    #[test]
    fn wrapped_height_counts_wraps() {
        let line = Line::from("x".repeat(25));
        assert_eq!(wrapped_height(&line, 10), 3);

        let empty = Line::from("");
        assert_eq!(wrapped_height(&empty, 10), 1);
    }

    #[test]
    fn wrapped_total_sums_lines() {
        let lines = vec![Line::from("x".repeat(25)), Line::from(""), Line::from("ab")];
        assert_eq!(wrapped_total(&lines, 10), 5);
    }
}
