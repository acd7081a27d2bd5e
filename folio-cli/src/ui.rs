//! Terminal UI rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as Split, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use folio_core::{App, Layout, Mode};

// Catppuccin Mocha colors
const SURFACE0: Color = Color::Rgb(49, 50, 68);
const TEXT: Color = Color::Rgb(205, 214, 244);
const SUBTEXT0: Color = Color::Rgb(166, 173, 200);
const BLUE: Color = Color::Rgb(137, 180, 250);
const MAUVE: Color = Color::Rgb(203, 166, 247);

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Split::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title_bar(frame, app, chunks[0]);
    draw_main_area(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if app.mode == Mode::Help {
        draw_help(frame);
    }
}

fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (lines, words) = app
        .document
        .as_ref()
        .map(|d| (d.line_count(), d.word_count()))
        .unwrap_or((0, 0));

    let title_text = format!(
        " Folio - {} [{} lines, {} words] {}",
        app.title(),
        lines,
        words,
        app.layout.as_str()
    );

    let title_bar = Paragraph::new(title_text).style(Style::default().fg(TEXT).bg(SURFACE0));

    frame.render_widget(title_bar, area);
}

fn draw_main_area(frame: &mut Frame, app: &App, area: Rect) {
    // Leave the content pane at least half the width
    let margin = app.margin.min(area.width / 4);

    let chunks = Split::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(margin),
            Constraint::Min(0),
            Constraint::Length(margin),
        ])
        .split(area);

    draw_filler(frame, "< narrows the margins", chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_filler(frame, "> widens the margins", chunks[2]);
}

fn draw_filler(frame: &mut Frame, hint: &str, area: Rect) {
    if area.width == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SUBTEXT0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Vertically centered hint
    let row = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, inner.height.min(1));
    let paragraph = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .style(Style::default().fg(SUBTEXT0));
    frame.render_widget(paragraph, row);
}

fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE))
        .title(app.layout.as_str());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = app.text();
    match app.layout {
        Layout::Gallery => draw_gallery(frame, app, text, inner),
        Layout::Left => draw_aligned(frame, app, text, Alignment::Left, inner),
        Layout::Center => draw_aligned(frame, app, text, Alignment::Center, inner),
        Layout::Right => draw_aligned(frame, app, text, Alignment::Right, inner),
        Layout::SideBySide => draw_side_by_side(frame, app, text, inner),
    }
}

fn heading(label: &str) -> Line<'_> {
    Line::from(Span::styled(
        label,
        Style::default().fg(MAUVE).add_modifier(Modifier::BOLD),
    ))
}

/// Every alignment in one scrollable paragraph
fn draw_gallery(frame: &mut Frame, app: &App, text: &str, area: Rect) {
    let sections = [
        ("Align left:", Alignment::Left),
        ("Align center:", Alignment::Center),
        ("Align right:", Alignment::Right),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (label, alignment) in sections {
        lines.push(heading(label));
        lines.extend(text.lines().map(|l| Line::from(l).alignment(alignment)));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn draw_aligned(frame: &mut Frame, app: &App, text: &str, alignment: Alignment, area: Rect) {
    let paragraph = Paragraph::new(Text::from(text))
        .alignment(alignment)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn draw_side_by_side(frame: &mut Frame, app: &App, text: &str, area: Rect) {
    let chunks = Split::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_aligned(frame, app, text, Alignment::Left, chunks[0]);

    let separator = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(SUBTEXT0));
    let right = separator.inner(chunks[1]);
    frame.render_widget(separator, chunks[1]);
    draw_aligned(frame, app, text, Alignment::Left, right);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_str = match app.mode {
        Mode::Normal => "NORMAL",
        Mode::Help => "HELP",
    };

    let status = app.status_message.as_deref().unwrap_or("");

    let help_hint = "j/k scroll | Tab layout | </> margins | e export | ? help | q quit";

    let status_text = format!(
        " {} | {}",
        mode_str,
        if status.is_empty() { help_hint } else { status },
    );

    let status_bar = Paragraph::new(status_text).style(Style::default().fg(SUBTEXT0).bg(SURFACE0));

    frame.render_widget(status_bar, area);
}

fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 15, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BLUE))
        .title("Help (press any key to close)");

    let help_text = vec![
        heading("Navigation"),
        Line::from("  j/k      Scroll down/up"),
        Line::from("  g        Go to top"),
        Line::from("  Tab      Next layout"),
        Line::from("  < / >    Narrow/widen margins"),
        Line::from(""),
        heading("File"),
        Line::from("  e        Export document as JSON"),
        Line::from("  q/Esc    Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(SUBTEXT0),
        )),
    ];

    let paragraph = Paragraph::new(help_text).block(block);
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Document, LoadStrategy};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.margin = 10;
        app.load_document(Document::new(
            "t".to_string(),
            "hello\nworld\n".to_string(),
            LoadStrategy::NormalizedLines,
        ));
        app
    }

    #[test]
    fn test_gallery_shows_every_alignment() {
        let screen = render(&loaded_app());
        assert!(screen.contains("Align left:"));
        assert!(screen.contains("Align center:"));
        assert!(screen.contains("Align right:"));
        assert!(screen.contains("hello"));
    }

    #[test]
    fn test_side_by_side_repeats_text() {
        let mut app = loaded_app();
        app.layout = Layout::SideBySide;
        let screen = render(&app);
        assert_eq!(screen.matches("world").count(), 2);
    }

    #[test]
    fn test_help_overlay() {
        let mut app = loaded_app();
        app.toggle_help();
        assert!(render(&app).contains("Press any key to close"));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        let rect = centered_rect(50, 15, area);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));
    }
}
