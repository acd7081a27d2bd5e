//! Folio CLI - load a text file and view it in every paragraph alignment

mod cli;
mod io;
mod ui;

use std::io::{stdout, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use folio_core::{App, LoadStrategy, Mode};

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    io::init_logging();

    // The viewer cannot do anything without its text: missing or empty files
    // end the process here, before the terminal is touched.
    let strategy = LoadStrategy::from(args.strategy);
    let content = folio_core::load_or_exit(&args.path, strategy);

    if args.print {
        let mut out = stdout().lock();
        out.write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        out.flush()?;
        return Ok(());
    }

    let doc = io::document_from(&args.path, content, strategy);
    tracing::info!(path = %args.path.display(), strategy = strategy.as_str(), "starting viewer");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new();
    app.layout = args.align.into();
    app.set_status(&format!("Loaded {}", args.path.display()));
    app.load_document(doc);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = res {
        tracing::error!(error = %e, "viewer loop failed");
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Clear status on any key
            app.clear_status();

            match app.mode {
                Mode::Normal => handle_normal_mode(app, key.code),
                Mode::Help => app.toggle_help(),
            }
        }
    }
    Ok(())
}

fn handle_normal_mode(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),

        // Layout
        KeyCode::Tab => app.cycle_layout(),
        KeyCode::Char('<') => app.narrow_margin(),
        KeyCode::Char('>') => app.widen_margin(),

        // Export
        KeyCode::Char('e') => {
            if let Some(doc) = &app.document {
                match io::export_document(doc) {
                    Ok(path) => app.set_status(&format!("Exported to {}", path.display())),
                    Err(e) => app.set_status(&format!("Export failed: {}", e)),
                }
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Layout;

    #[test]
    fn test_normal_mode_keys() {
        let mut app = App::new();

        handle_normal_mode(&mut app, KeyCode::Tab);
        assert_eq!(app.layout, Layout::Left);

        handle_normal_mode(&mut app, KeyCode::Char('<'));
        assert_eq!(app.margin, folio_core::app::DEFAULT_MARGIN - 2);

        handle_normal_mode(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, Mode::Help);

        app.toggle_help();
        handle_normal_mode(&mut app, KeyCode::Esc);
        assert!(!app.running);
    }
}
