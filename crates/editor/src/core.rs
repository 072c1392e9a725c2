//! The editing session: modal dispatch, search, rendering, and the
//! main loop.
//!
//! Each loop iteration polls the terminal size, rebuilds the display
//! map, clamps the viewport and cursor, renders, then blocks on exactly
//! one input event. All mutation happens inside that input-handling
//! step, so the map handed to renderers and edit operations is never
//! stale.

use std::path::Path;

use anyhow::Result;

use ved_buffer::{
    find_backward, find_forward, motion, Cursor, DisplayMap, Pattern, SearchHit, TextBuffer,
    Viewport,
};
use ved_config::Config;
use ved_keyboard::Key;
use ved_terminal::{read_event, InputEvent, Screen};

use crate::command::{self, CommandAction};
use crate::mode::Mode;
use crate::text_editing;

/// What the loop should do after a key has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// One editing session over a single buffer.
pub struct Session {
    buffer: TextBuffer,
    display: DisplayMap,
    cursor: Cursor,
    view: Viewport,
    mode: Mode,
    /// Characters accumulated while in Command or Search modes.
    command_line: String,
    /// Last committed search pattern, kept for `n`/`N`.
    last_search: String,
    /// A `d` was pressed and the next key decides the sequence.
    pending_delete: bool,
    /// Transient message shown on the status line until the next key.
    status_message: Option<String>,
    show_position: bool,
}

impl Session {
    /// Open a session over an existing file.
    pub fn open(path: &Path, config: &Config) -> Result<Self> {
        let buffer = TextBuffer::from_file(path)?;
        ved_logger::info(format!(
            "opened {} ({} lines)",
            path.display(),
            buffer.line_count()
        ));
        Ok(Self::with_buffer(buffer, config.editor.show_position))
    }

    /// Session over in-memory lines, with no backing file.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self::with_buffer(TextBuffer::from_lines(lines), true)
    }

    fn with_buffer(buffer: TextBuffer, show_position: bool) -> Self {
        Self {
            buffer,
            display: DisplayMap::new(),
            cursor: Cursor::new(),
            view: Viewport::default(),
            mode: Mode::default(),
            command_line: String::new(),
            last_search: String::new(),
            pending_delete: false,
            status_message: None,
            show_position,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> Viewport {
        self.view
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// Render-then-block cycle until a quit is signalled.
    ///
    /// Errors (a failed write, a broken terminal) propagate out; the
    /// caller's terminal guard restores cooked mode on the way.
    pub fn run(&mut self, screen: &mut Screen) -> Result<()> {
        loop {
            let (width, height) = screen.size()?;
            self.layout(width, height);
            self.render(screen)?;

            match read_event()? {
                // Next frame picks up the new size from the poll above.
                InputEvent::Resize => continue,
                InputEvent::Key(key) => {
                    if self.handle_key(key)? == LoopControl::Quit {
                        ved_logger::info("session ended");
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Adopt the polled terminal size and re-derive all display state.
    ///
    /// The bottom terminal row is reserved for the status line. Must run
    /// before any render or coordinate translation for this frame.
    pub fn layout(&mut self, width: usize, height: usize) {
        self.view.visible_width = width.max(1);
        self.view.visible_height = height.saturating_sub(1);
        self.display.rebuild(&self.buffer, self.view.visible_width);
        motion::clamp_cursor(&mut self.cursor, &mut self.view, &self.display);
        motion::scroll_into_view(&self.cursor, &mut self.view);
    }

    pub fn render(&self, screen: &mut Screen) -> Result<()> {
        screen.clear()?;
        let width = self.view.visible_width;
        for y in 0..self.view.visible_height {
            let row = self.view.scroll_offset + y;
            screen.draw_row(y, self.display.row_text(row), width)?;
        }

        let (left, right) = self.status_line();
        screen.draw_status(self.view.visible_height, &left, &right, width)?;

        let x = self.cursor.abs_x;
        let y = self.cursor.abs_y.saturating_sub(self.view.scroll_offset) + 1;
        screen.place_cursor(x, y)?;
        screen.flush()
    }

    /// Dispatch one key through the mode machine.
    pub fn handle_key(&mut self, key: Key) -> Result<LoopControl> {
        self.status_message = None;
        match self.mode {
            Mode::Normal => Ok(self.handle_normal(key)),
            Mode::Insert => Ok(self.handle_insert(key)),
            Mode::Command => self.handle_command(key),
            Mode::SearchForward => Ok(self.handle_search_entry(key, false)),
            Mode::SearchBackward => Ok(self.handle_search_entry(key, true)),
        }
    }

    fn handle_normal(&mut self, key: Key) -> LoopControl {
        if self.pending_delete {
            self.pending_delete = false;
            // An aborted `d` sequence swallows the second key.
            if key == Key::Char('d') {
                text_editing::delete_line(&mut self.buffer, &mut self.display, &mut self.cursor);
                motion::clamp_cursor(&mut self.cursor, &mut self.view, &self.display);
            }
            return LoopControl::Continue;
        }

        match key {
            Key::Char('h') | Key::Left => motion::move_left(&mut self.cursor),
            Key::Char('l') | Key::Right => motion::move_right(&mut self.cursor, &self.display),
            Key::Char('k') | Key::Up => {
                motion::move_up(&mut self.cursor, &mut self.view, &self.display)
            }
            Key::Char('j') | Key::Down => self.move_down_gated(),
            Key::Char('0') | Key::Home => motion::move_head(&mut self.cursor),
            Key::Char('$') | Key::End => motion::move_tail(&mut self.cursor, &self.display),
            Key::PageUp => motion::move_page_up(&mut self.cursor, &mut self.view, &self.display),
            Key::PageDown => {
                motion::move_page_down(&mut self.cursor, &mut self.view, &self.display)
            }
            Key::Char('i') => self.mode = Mode::Insert,
            Key::Char(':') => self.enter_prompt(Mode::Command),
            Key::Char('/') => self.enter_prompt(Mode::SearchForward),
            Key::Char('?') => self.enter_prompt(Mode::SearchBackward),
            Key::Char('x') => {
                text_editing::delete_char(&mut self.buffer, &mut self.display, &mut self.cursor)
            }
            Key::Char('d') => self.pending_delete = true,
            Key::Char('n') => self.repeat_search(false),
            Key::Char('N') => self.repeat_search(true),
            Key::Char('q') => return self.request_quit(false),
            Key::Char(_) | Key::Esc | Key::Enter | Key::Backspace => {}
        }
        LoopControl::Continue
    }

    fn handle_insert(&mut self, key: Key) -> LoopControl {
        match key {
            Key::Esc => self.mode = Mode::Normal,
            Key::Enter => {
                text_editing::insert_newline(&mut self.buffer, &mut self.display, &mut self.cursor)
            }
            Key::Backspace => {
                text_editing::delete_char(&mut self.buffer, &mut self.display, &mut self.cursor)
            }
            Key::Char(ch) => {
                text_editing::insert_char(&mut self.buffer, &mut self.display, &mut self.cursor, ch)
            }
            // Movement only, no text mutation.
            Key::Left => motion::move_left(&mut self.cursor),
            Key::Right => motion::move_right(&mut self.cursor, &self.display),
            Key::Up => motion::move_up(&mut self.cursor, &mut self.view, &self.display),
            Key::Down => self.move_down_gated(),
            Key::Home => motion::move_head(&mut self.cursor),
            Key::End => motion::move_tail(&mut self.cursor, &self.display),
            Key::PageUp => motion::move_page_up(&mut self.cursor, &mut self.view, &self.display),
            Key::PageDown => {
                motion::move_page_down(&mut self.cursor, &mut self.view, &self.display)
            }
        }
        LoopControl::Continue
    }

    fn handle_command(&mut self, key: Key) -> Result<LoopControl> {
        match key {
            Key::Esc => {
                self.command_line.clear();
                self.mode = Mode::Normal;
            }
            Key::Enter => return self.evaluate_command(),
            Key::Backspace => {
                self.command_line.pop();
            }
            Key::Char(ch) => self.command_line.push(ch),
            _ => {}
        }
        Ok(LoopControl::Continue)
    }

    fn handle_search_entry(&mut self, key: Key, backward: bool) -> LoopControl {
        match key {
            Key::Esc => {
                self.command_line.clear();
                self.mode = Mode::Normal;
            }
            Key::Enter => self.commit_search(backward),
            Key::Backspace => {
                self.command_line.pop();
            }
            Key::Char(ch) => self.command_line.push(ch),
            _ => {}
        }
        LoopControl::Continue
    }

    fn enter_prompt(&mut self, mode: Mode) {
        self.mode = mode;
        self.command_line.clear();
    }

    fn move_down_gated(&mut self) {
        if motion::at_bottom(&self.cursor, &self.display) {
            return;
        }
        motion::move_down(&mut self.cursor, &mut self.view, &self.display);
    }

    /// Quit unless the buffer is dirty; a refused quit warns on the
    /// status line and forces the session back into Command mode.
    fn request_quit(&mut self, force: bool) -> LoopControl {
        if !force && self.buffer.is_dirty() {
            self.status_message =
                Some("No write since last change (add ! to override)".to_string());
            self.mode = Mode::Command;
            self.command_line.clear();
            LoopControl::Continue
        } else {
            LoopControl::Quit
        }
    }

    fn evaluate_command(&mut self) -> Result<LoopControl> {
        let action = command::parse(&self.command_line);
        self.command_line.clear();
        self.mode = Mode::Normal;

        match action {
            CommandAction::Quit => Ok(self.request_quit(false)),
            CommandAction::QuitForce => Ok(LoopControl::Quit),
            CommandAction::Write => {
                self.save()?;
                Ok(LoopControl::Continue)
            }
            CommandAction::WriteQuit => {
                self.save()?;
                Ok(self.request_quit(false))
            }
            CommandAction::WriteQuitForce => {
                self.save()?;
                Ok(LoopControl::Quit)
            }
            CommandAction::Unknown(cmd) => {
                ved_logger::warn(format!("unknown command: {cmd}"));
                self.status_message = Some(format!("Not an editor command: {cmd}"));
                Ok(LoopControl::Continue)
            }
        }
    }

    /// Write the buffer out. A failure is fatal to the session and
    /// propagates after being logged.
    fn save(&mut self) -> Result<()> {
        if let Err(err) = self.buffer.save() {
            ved_logger::error(format!("save failed: {err:#}"));
            return Err(err);
        }
        ved_logger::info(format!("wrote {} lines", self.buffer.line_count()));
        if let Some(path) = self.buffer.path() {
            self.status_message = Some(format!("\"{}\" written", path.display()));
        }
        Ok(())
    }

    fn commit_search(&mut self, backward: bool) {
        let text = std::mem::take(&mut self.command_line);
        self.mode = Mode::Normal;
        if !text.is_empty() {
            self.last_search = text.clone();
        }
        self.run_search(&text, backward);
    }

    fn repeat_search(&mut self, backward: bool) {
        if self.last_search.is_empty() {
            return;
        }
        let text = self.last_search.clone();
        self.run_search(&text, backward);
    }

    /// Execute a search. An empty or unparsable pattern is a no-op:
    /// cursor, mode, and scroll all stay put.
    fn run_search(&mut self, text: &str, backward: bool) {
        let Some(pattern) = Pattern::compile(text) else {
            return;
        };
        let (line, offset) = self.display.to_logical(&self.buffer, &self.cursor);
        let hit = if backward {
            find_backward(self.buffer.lines(), &pattern, line, offset)
        } else {
            find_forward(self.buffer.lines(), &pattern, line, offset)
        };
        if let Some(hit) = hit {
            self.jump_to(hit);
        }
    }

    /// Move the cursor to a match start and bring it into view with a
    /// minimal (clamped, not recentred) scroll adjustment.
    fn jump_to(&mut self, hit: SearchHit) {
        self.cursor = self.display.from_logical(hit.line, hit.offset);
        motion::scroll_into_view(&self.cursor, &mut self.view);
    }

    /// Status line halves: mode/prompt/message on the left, position
    /// counters on the right.
    fn status_line(&self) -> (String, String) {
        let left = if let Some(message) = &self.status_message {
            message.clone()
        } else if let Some(prompt) = self.mode.prompt() {
            format!("{prompt}{}", self.command_line)
        } else if self.mode == Mode::Insert {
            "--- INSERT ---".to_string()
        } else {
            String::new()
        };

        let right = if self.show_position {
            format!(
                "row: {}/{} col: {}/{} offset: {}",
                self.cursor.abs_y,
                self.buffer.line_count(),
                self.cursor.abs_x,
                self.view.visible_width,
                self.view.scroll_offset
            )
        } else {
            String::new()
        };

        (left, right)
    }
}
