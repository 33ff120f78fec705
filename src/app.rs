//! Editor application state and the main loop.

use anyhow::{Context, Result};
use crossterm::event::KeyEvent;
use ratatui::{backend::Backend, Terminal};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use gapedit_config::Config;
use gapedit_keyboard::{map_key, KeyAction};
use gapedit_view::Document;

use crate::event::{Event, EventHandler};

/// Poll interval of the event loop
const EVENT_POLL_INTERVAL_MS: u64 = 250;

/// Rows taken by the status line
pub const STATUS_LINE_HEIGHT: u16 = 1;

/// Main application
pub struct App {
    document: Document,
    /// File the document is saved to
    path: Option<PathBuf>,
    /// Last save or error message shown in the status line
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create an application with an empty document sized from `config`
    pub fn new(config: &Config) -> Self {
        let mut document = Document::new(config.editor.history_limit);
        if let Some(line_ending) = config.editor.line_ending.forced() {
            document = document.with_line_ending(line_ending);
        }
        document.resize_scroll_view(config.editor.viewport_lines, config.editor.viewport_columns);

        Self {
            document,
            path: None,
            message: None,
            should_quit: false,
        }
    }

    /// Open `path`. A missing file starts an empty document that is
    /// created on first save.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            self.document.load(&content);
            gapedit_logger::info(format!("Opened {}", path.display()));
        } else {
            self.document.load("");
            gapedit_logger::info(format!("New file {}", path.display()));
        }
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the document to its file
    pub fn save(&mut self) -> Result<()> {
        let path = self
            .path
            .clone()
            .context("No file name to save to; start gapedit with a FILE argument")?;
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        self.document
            .write_to(&mut writer)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        gapedit_logger::info(format!("Saved {}", path.display()));
        self.message = Some(format!("Saved {}", path.display()));
        Ok(())
    }

    /// Apply a key press.
    ///
    /// Failures are logged and shown in the status line; the editor keeps running.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let Some(action) = map_key(key) else {
            return;
        };

        let result = match action {
            KeyAction::Edit(command) => {
                self.message = None;
                self.document.execute(&command).map_err(anyhow::Error::from)
            }
            KeyAction::Undo => self.document.undo().map(|_| ()).map_err(anyhow::Error::from),
            KeyAction::Redo => self.document.redo().map(|_| ()).map_err(anyhow::Error::from),
            KeyAction::Save => self.save(),
            KeyAction::Quit => {
                self.should_quit = true;
                Ok(())
            }
        };

        if let Err(e) = result {
            gapedit_logger::error(format!("{:#}", e));
            self.message = Some(format!("Error: {:#}", e));
        }
    }

    /// Fit the scroll view to a terminal of `width` x `height`
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let lines = height.saturating_sub(STATUS_LINE_HEIGHT);
        self.document
            .resize_scroll_view(lines as usize, width as usize);
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let size = terminal.size()?;
        self.handle_resize(size.width, size.height);

        let event_handler = EventHandler::new(Duration::from_millis(EVENT_POLL_INTERVAL_MS));
        let mut needs_redraw = true;

        while !self.should_quit {
            if needs_redraw {
                terminal.draw(|frame| crate::ui::render(frame, self))?;
                needs_redraw = false;
            }

            match event_handler.next()? {
                Event::Key(key) => {
                    self.handle_key_event(key);
                    needs_redraw = true;
                }
                Event::Resize(width, height) => {
                    self.handle_resize(width, height);
                    needs_redraw = true;
                }
                Event::Tick => {}
            }
        }

        Ok(())
    }
}
