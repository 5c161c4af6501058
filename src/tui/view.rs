//! Pure rendering: map App state to ratatui widget trees.
//!
//! Widget-building functions are pure (state in, widgets out); the only
//! effect is Frame::render_widget() which writes to the terminal
//! buffer. The fixed layout is header / slide body / progress / footer,
//! with the TOC sidebar drawn as an overlay when open.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Wrap,
};

use crate::charts;
use crate::quiz::Verdict;
use crate::toc::build_toc;
use crate::types::{Block as ContentBlock, ChartKind, QuizBlock, Slide};

use super::state::App;
use super::theme;

/// Height reserved for each embedded chart.
const CHART_HEIGHT: u16 = 14;

/// Sidebar overlay width, sized for the built-in deck's longest label.
const SIDEBAR_WIDTH: u16 = 42;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the presentation to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // header: deck title + counter
        Constraint::Min(0),    // slide body
        Constraint::Length(1), // progress bar
        Constraint::Length(1), // nav controls + help
    ])
    .split(area);

    render_header(app, frame, chunks[0]);
    render_slide(app, frame, chunks[1]);
    render_progress(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);

    if app.sidebar.open {
        render_sidebar(app, frame, area);
    }
}

// ============================================================================
// HEADER / PROGRESS / FOOTER
// ============================================================================

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let cols = Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).split(area);

    let title = Paragraph::new(Span::styled(format!(" {}", app.deck.title), theme::STYLE_TITLE));
    frame.render_widget(title, cols[0]);

    let counter = Paragraph::new(Span::styled(app.nav.counter(), theme::STYLE_DIM))
        .alignment(Alignment::Right);
    frame.render_widget(counter, cols[1]);
}

/// Full-width completion bar, filled according to the progress fraction.
fn render_progress(app: &App, frame: &mut Frame, area: Rect) {
    let width = area.width as usize;
    let filled = ((app.nav.progress() * width as f64).round() as usize).min(width);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    frame.render_widget(
        Paragraph::new(Span::styled(bar, theme::STYLE_PROGRESS)),
        area,
    );
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let prev_style = if app.nav.at_first() {
        theme::STYLE_DIM
    } else {
        theme::STYLE_INTERACTIVE
    };
    let next_label = if app.nav.at_last() { "🎉 Done" } else { "Next ▶" };

    let mut spans = vec![
        Span::styled(" [←] Prev", prev_style),
        Span::raw("  "),
        Span::styled(format!("[→] {}", next_label), theme::STYLE_INTERACTIVE),
        Span::raw("   "),
        Span::styled(help_text(app), theme::STYLE_HELP),
    ];
    if app.sidebar.open {
        spans = vec![Span::styled(
            " [j/k] move  [Enter] go  [t/Esc] close",
            theme::STYLE_HELP,
        )];
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Context-sensitive help for the active slide.
fn help_text(app: &App) -> String {
    let current = app.nav.current();
    let mut help = String::from("[t] contents");

    if !app.deck.quizzes_on(current).is_empty() {
        help.push_str("  [1-9] answer");
    }
    if app.deck.charts_on(current).contains(&ChartKind::ResponseSpectrum) {
        help.push_str("  [r/s/b] series");
    }
    help.push_str("  [q] quit");
    help
}

// ============================================================================
// SLIDE BODY
// ============================================================================

fn render_slide(app: &App, frame: &mut Frame, area: Rect) {
    let Some(slide) = app.deck.slide(app.nav.current()) else {
        frame.render_widget(
            Paragraph::new(Span::styled("  (empty deck)", theme::STYLE_DIM)),
            area,
        );
        return;
    };

    // Charts get fixed-height bands below the text content.
    let chart_kinds = app.deck.charts_on(app.nav.current());
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(chart_kinds.iter().map(|_| Constraint::Length(CHART_HEIGHT)));
    let parts = Layout::vertical(constraints).split(area);

    let lines = slide_lines(app, slide);
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(body, parts[0]);

    for (i, kind) in chart_kinds.iter().enumerate() {
        render_chart(app, *kind, frame, parts[i + 1]);
    }
}

/// Text lines for a slide's heading and non-chart blocks.
fn slide_lines<'a>(app: &'a App, slide: &'a Slide) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from("")];

    if let Some(title) = &slide.title {
        lines.push(Line::from(Span::styled(
            format!("  {}", title),
            theme::STYLE_TITLE,
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.chars().count().max(8))),
            theme::STYLE_DIM,
        )));
        lines.push(Line::from(""));
    }

    let quiz_count = app.deck.quizzes_on(app.nav.current()).len();
    let mut quiz_index = 0;

    for block in &slide.blocks {
        match block {
            ContentBlock::Text { body } => {
                lines.push(Line::from(format!("  {}", body)));
                lines.push(Line::from(""));
            }
            ContentBlock::Bullets { items } => {
                for item in items {
                    lines.push(Line::from(format!("  • {}", item)));
                }
                lines.push(Line::from(""));
            }
            ContentBlock::Quiz(quiz) => {
                let focused = quiz_count > 1 && quiz_index == app.quiz_focus;
                lines.extend(quiz_lines(app, quiz, focused));
                quiz_index += 1;
            }
            // Charts render as widgets in their own band.
            ContentBlock::Chart { .. } => {}
        }
    }

    lines
}

/// Lines for one quiz: prompt, options with markers, feedback.
fn quiz_lines<'a>(app: &'a App, quiz: &'a QuizBlock, focused: bool) -> Vec<Line<'a>> {
    let mark = app.marks.mark(&quiz.id);
    let mut lines = Vec::new();

    let prompt_prefix = if focused { "  ▸ " } else { "  " };
    lines.push(Line::from(Span::styled(
        format!("{}{}", prompt_prefix, quiz.prompt),
        theme::STYLE_IMPORTANT,
    )));
    lines.push(Line::from(""));

    for (i, option) in quiz.options.iter().enumerate() {
        let (marker, style) = match mark {
            Some(m) if m.option == i && m.verdict == Verdict::Correct => {
                ("✓ ", theme::STYLE_CORRECT)
            }
            Some(m) if m.option == i && m.verdict == Verdict::Incorrect => {
                ("✗ ", theme::STYLE_INCORRECT)
            }
            _ => ("  ", theme::STYLE_DIM),
        };
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(marker, style),
            Span::styled(format!("[{}] ", i + 1), theme::STYLE_INTERACTIVE),
            Span::raw(option.label.as_str()),
        ]));
    }

    if let Some(m) = mark {
        let style = match m.verdict {
            Verdict::Correct => theme::STYLE_CORRECT,
            Verdict::Incorrect => theme::STYLE_INCORRECT,
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("    {}", m.feedback),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines
}

// ============================================================================
// CHARTS
// ============================================================================

fn render_chart(app: &App, kind: ChartKind, frame: &mut Frame, area: Rect) {
    // An uninitialized chart renders as an explicit gap.
    if !app.charts.is_initialized(kind) {
        frame.render_widget(
            Paragraph::new(Span::styled("  (chart not initialized)", theme::STYLE_DIM)),
            area,
        );
        return;
    }

    match kind {
        ChartKind::ResponseSpectrum => render_spectrum(app, frame, area),
        ChartKind::RotdRatio => render_rotd(frame, area),
    }
}

/// Tick labels for an ordered period axis: first, middle, last.
fn period_labels(periods: &[f64]) -> Vec<Line<'static>> {
    let mid = periods.len() / 2;
    [0, mid, periods.len() - 1]
        .iter()
        .map(|&i| Line::from(format!("{}", periods[i])))
        .collect()
}

fn render_spectrum(app: &App, frame: &mut Frame, area: Rect) {
    let rock = charts::series_points(&charts::SPECTRUM_ROCK);
    let soil = charts::series_points(&charts::SPECTRUM_SOIL);
    let mode = app.charts.spectrum_mode();

    // Hidden series are simply not declared this frame.
    let mut datasets = Vec::new();
    if mode.shows_rock() {
        datasets.push(
            Dataset::default()
                .name("Rock Site")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme::STYLE_SERIES_ROCK)
                .data(&rock),
        );
    }
    if mode.shows_soil() {
        datasets.push(
            Dataset::default()
                .name("Soil Site")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(theme::STYLE_SERIES_SOIL)
                .data(&soil),
        );
    }

    let x_max = (charts::SPECTRUM_PERIODS.len() - 1) as f64;
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Response Spectrum  [r] rock  [s] soil  [b] both "),
        )
        // Allow the two-entry legend inside the fixed-height band.
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
        .x_axis(
            Axis::default()
                .title("Period (s)")
                .style(theme::STYLE_DIM)
                .bounds([0.0, x_max])
                .labels(period_labels(&charts::SPECTRUM_PERIODS)),
        )
        .y_axis(
            Axis::default()
                .title("Sa (g)")
                .style(theme::STYLE_DIM)
                .bounds(charts::SPECTRUM_Y_BOUNDS)
                .labels(vec![
                    Line::from("0.0"),
                    Line::from("0.6"),
                    Line::from("1.2"),
                ]),
        );

    frame.render_widget(chart, area);
}

fn render_rotd(frame: &mut Frame, area: Rect) {
    let ratios = charts::series_points(&charts::ROTD_RATIOS);

    let datasets = vec![
        Dataset::default()
            .name("RotD100/RotD50")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(theme::STYLE_SERIES_ROTD)
            .data(&ratios),
    ];

    let x_max = (charts::ROTD_PERIODS.len() - 1) as f64;
    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(" RotD Ratio "))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
        .x_axis(
            Axis::default()
                .title("Period (s)")
                .style(theme::STYLE_DIM)
                .bounds([0.0, x_max])
                .labels(period_labels(&charts::ROTD_PERIODS)),
        )
        .y_axis(
            Axis::default()
                .title("Ratio")
                .style(theme::STYLE_DIM)
                .bounds(charts::ROTD_Y_BOUNDS)
                .labels(vec![
                    Line::from("1.15"),
                    Line::from("1.25"),
                    Line::from("1.35"),
                ]),
        );

    frame.render_widget(chart, area);
}

// ============================================================================
// SIDEBAR
// ============================================================================

fn render_sidebar(app: &App, frame: &mut Frame, area: Rect) {
    let width = SIDEBAR_WIDTH.min(area.width);
    let panel = Rect { width, ..area };

    frame.render_widget(Clear, panel);
    let block = Block::default().borders(Borders::ALL).title(" Contents ");
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut lines: Vec<Line> = Vec::new();
    for entry in build_toc(&app.deck) {
        let is_active = entry.index == app.nav.current();
        let is_cursor = entry.index == app.sidebar.cursor;

        let marker = if is_active { "● " } else { "  " };
        let style = if is_active {
            theme::STYLE_TOC_ACTIVE
        } else {
            theme::STYLE_DIM
        };

        let mut line = Line::from(vec![
            Span::styled(marker.to_string(), style),
            Span::styled(entry.label, style),
        ]);
        if is_cursor {
            line = line.style(theme::STYLE_CURSOR);
        }
        lines.push(line);
    }

    // Keep the cursor visible when the list outgrows the panel.
    let visible_height = inner.height as usize;
    let scroll_offset = if app.sidebar.cursor >= visible_height {
        app.sidebar.cursor - visible_height + 1
    } else {
        0
    };

    let list = Paragraph::new(lines).scroll((scroll_offset as u16, 0));
    frame.render_widget(list, inner);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::SpectrumMode;
    use crate::deck::builtin_deck;
    use crate::tui::state::Action;
    use crate::tui::update::{go_to, update};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(90, 30);
        Terminal::new(backend).unwrap()
    }

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        // Reconstruct on-screen text width-aware: a wide grapheme (e.g. an
        // emoji) occupies one symbol cell followed by reset continuation
        // cells, which must be skipped rather than emitted as spaces.
        let mut out = String::new();
        let mut skip = 0usize;
        for cell in terminal.backend().buffer().content() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = cell.symbol();
            out.push_str(symbol);
            skip = Span::raw(symbol).width().saturating_sub(1);
        }
        out
    }

    #[test]
    fn first_slide_renders_title_and_counter() {
        let mut terminal = make_terminal();
        let app = App::new(builtin_deck());
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Engineering Seismology"));
        assert!(content.contains("1 / 14"));
        assert!(content.contains("Next ▶"));
    }

    #[test]
    fn every_slide_renders_without_panic() {
        let mut terminal = make_terminal();
        let mut app = App::new(builtin_deck());
        for n in 0..app.deck.total_slides() {
            go_to(&mut app, n);
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every slide should render without panic");
        }
    }

    #[test]
    fn last_slide_shows_done_label() {
        let mut terminal = make_terminal();
        let mut app = App::new(builtin_deck());
        let last = app.deck.total_slides() - 1;
        go_to(&mut app, last);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("🎉 Done"));
        assert!(content.contains("14 / 14"));
    }

    #[test]
    fn progress_bar_empty_at_start_full_at_end() {
        let mut terminal = make_terminal();
        let mut app = App::new(builtin_deck());

        terminal.draw(|frame| render(&app, frame)).unwrap();
        let content = buffer_content(&terminal);
        assert!(content.contains('░'));

        let last = app.deck.total_slides() - 1;
        go_to(&mut app, last);
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let content = buffer_content(&terminal);
        assert!(content.contains('█'));
    }

    #[test]
    fn quiz_slide_shows_numbered_options() {
        let mut terminal = make_terminal();
        let mut app = App::new(builtin_deck());
        go_to(&mut app, 2); // "Wave Attenuation" carries q1
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("[1]"));
        assert!(content.contains("[2]"));
        assert!(content.contains("filters out high frequencies"));
    }

    #[test]
    fn correct_answer_renders_checkmark_feedback() {
        let mut terminal = make_terminal();
        let mut app = App::new(builtin_deck());
        go_to(&mut app, 2);
        update(&mut app, Action::Answer(2));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains('✓'));
        assert!(content.contains("low-pass filter"));
    }

    #[test]
    fn wrong_answer_renders_retry_feedback() {
        let mut terminal = make_terminal();
        let mut app = App::new(builtin_deck());
        go_to(&mut app, 2);
        update(&mut app, Action::Answer(1));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("✗ Try again!"));
    }

    #[test]
    fn spectrum_slide_renders_chart_frame() {
        let mut terminal = make_terminal();
        let mut app = App::new(builtin_deck());
        go_to(&mut app, 4); // "Response Spectra"
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Response Spectrum"));
        assert!(content.contains("Rock Site"));
        assert!(!content.contains("Soil Site"), "soil starts hidden");
    }

    #[test]
    fn spectrum_mode_switch_changes_visible_series() {
        let mut terminal = make_terminal();
        let mut app = App::new(builtin_deck());
        go_to(&mut app, 4);
        update(&mut app, Action::SetSpectrumMode(SpectrumMode::Soil));
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Soil Site"));
        assert!(!content.contains("Rock Site"));

        update(&mut app, Action::SetSpectrumMode(SpectrumMode::Both));
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let content = buffer_content(&terminal);
        assert!(content.contains("Rock Site"));
        assert!(content.contains("Soil Site"));
    }

    #[test]
    fn rotd_slide_renders_pinned_axis_labels() {
        let mut terminal = make_terminal();
        let mut app = App::new(builtin_deck());
        go_to(&mut app, 9); // "Orientation-Independent Measures"
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("RotD Ratio"));
        assert!(content.contains("1.15"));
        assert!(content.contains("1.35"));
    }

    #[test]
    fn sidebar_lists_entries_and_marks_active() {
        let mut terminal = make_terminal();
        let mut app = App::new(builtin_deck());
        go_to(&mut app, 3);
        update(&mut app, Action::ToggleSidebar);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Contents"));
        assert!(content.contains("1. Ground Motion Characterization"));
        assert!(content.contains("● 4. Amplitude Parameters"));
    }

    #[test]
    fn untitled_slides_fall_back_in_the_sidebar() {
        use crate::types::{AnswerTable, Deck, Slide};
        let deck = Deck {
            title: "t".into(),
            answers: AnswerTable::default(),
            slides: vec![
                Slide { title: None, blocks: vec![] },
                Slide { title: None, blocks: vec![] },
            ],
        };
        let mut terminal = make_terminal();
        let mut app = App::new(deck);
        update(&mut app, Action::ToggleSidebar);
        terminal.draw(|frame| render(&app, frame)).unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("1. Slide 1"));
        assert!(content.contains("2. Slide 2"));
    }

    #[test]
    fn tiny_terminal_renders_without_panic() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new(builtin_deck());
        update(&mut app, Action::ToggleSidebar);
        terminal
            .draw(|frame| render(&app, frame))
            .expect("small terminal should render without panic");
    }

    #[test]
    fn period_labels_pick_first_middle_last() {
        let labels = period_labels(&[0.01, 0.1, 1.0, 5.0, 10.0]);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].spans[0].content, "0.01");
        assert_eq!(labels[1].spans[0].content, "1");
        assert_eq!(labels[2].spans[0].content, "10");
    }
}
