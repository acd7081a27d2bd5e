use crate::model::Document;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

/// How the loaded text is laid out in the content pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Left, center and right alignment stacked in one pane
    Gallery,
    Left,
    Center,
    Right,
    /// Two left-aligned copies separated by a rule
    SideBySide,
}

impl Layout {
    pub fn all() -> &'static [Layout] {
        &[
            Layout::Gallery,
            Layout::Left,
            Layout::Center,
            Layout::Right,
            Layout::SideBySide,
        ]
    }

    pub fn next(self) -> Layout {
        let all = Self::all();
        let idx = all.iter().position(|l| *l == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Gallery => "Gallery",
            Layout::Left => "Align left",
            Layout::Center => "Align center",
            Layout::Right => "Align right",
            Layout::SideBySide => "Side by side",
        }
    }
}

pub const DEFAULT_MARGIN: u16 = 40;
pub const MAX_MARGIN: u16 = 80;
const MARGIN_STEP: u16 = 2;

/// Platform-agnostic viewer state
pub struct App {
    pub document: Option<Document>,
    pub mode: Mode,
    pub layout: Layout,
    pub running: bool,

    /// Vertical scroll offset of the content pane, in rows
    pub scroll: u16,
    /// Width of each filler pane beside the content
    pub margin: u16,

    pub status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            document: None,
            mode: Mode::Normal,
            layout: Layout::Gallery,
            running: true,
            scroll: 0,
            margin: DEFAULT_MARGIN,
            status_message: None,
        }
    }

    pub fn load_document(&mut self, doc: Document) {
        self.document = Some(doc);
        self.scroll = 0;
    }

    /// Rows the current layout needs before wrapping, used to bound scrolling
    pub fn content_height(&self) -> u16 {
        let lines = self
            .document
            .as_ref()
            .map(|d| d.line_count())
            .unwrap_or(0);
        let rows = match self.layout {
            // Heading and trailing blank row per alignment
            Layout::Gallery => (lines + 2) * 3,
            Layout::Left | Layout::Center | Layout::Right | Layout::SideBySide => lines,
        };
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.content_height() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn cycle_layout(&mut self) {
        self.layout = self.layout.next();
        self.scroll = 0;
        self.set_status(self.layout.as_str());
    }

    pub fn widen_margin(&mut self) {
        self.margin = (self.margin + MARGIN_STEP).min(MAX_MARGIN);
    }

    pub fn narrow_margin(&mut self) {
        self.margin = self.margin.saturating_sub(MARGIN_STEP);
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Help,
            Mode::Help => Mode::Normal,
        };
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Set status message
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some(msg.to_string());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Get title for display
    pub fn title(&self) -> String {
        self.document
            .as_ref()
            .and_then(|d| d.filename.clone())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Loaded text, or an empty string before anything is loaded
    pub fn text(&self) -> &str {
        self.document
            .as_ref()
            .map(|d| d.content.as_str())
            .unwrap_or_default()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
