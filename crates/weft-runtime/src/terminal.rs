#![forbid(unsafe_code)]

//! Raw-mode terminal session and the event loop.
//!
//! The terminal guard owns raw mode, the alternate screen, and mouse
//! capture, restoring everything on drop. Input events are decoded into
//! the engine's discrete event types (byte key codes, cell-addressed
//! mouse transitions) and dispatched one at a time on the caller's
//! thread.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, execute, queue};

use weft_core::event::{ButtonState, MouseEvent, key};
use weft_core::geometry::Size;
use weft_view::App;

/// A decoded input for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A key press as a single byte.
    Key(u8),
    /// A mouse button transition.
    Mouse(MouseEvent),
    /// The terminal was resized.
    Resize,
}

/// Decode a crossterm event into an engine input.
///
/// Key releases and unmapped keys decode to `None`. Ctrl-chords fold into
/// control bytes (Ctrl-C becomes `0x03`).
#[must_use]
pub fn translate(event: Event) -> Option<Input> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind == KeyEventKind::Release {
                return None;
            }
            let byte = match key_event.code {
                KeyCode::Char(c) if c.is_ascii() => {
                    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
                        (c as u8) & 0x1f
                    } else {
                        c as u8
                    }
                }
                KeyCode::Enter => key::RETURN,
                KeyCode::Backspace => key::DELETE,
                KeyCode::Tab => key::TAB,
                KeyCode::Esc => key::ESCAPE,
                _ => return None,
            };
            Some(Input::Key(byte))
        }
        Event::Mouse(mouse) => {
            let state = match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => ButtonState::Pressed,
                MouseEventKind::Up(MouseButton::Left) => ButtonState::Released,
                _ => return None,
            };
            Some(Input::Mouse(MouseEvent::new(
                i32::from(mouse.column),
                i32::from(mouse.row),
                state,
            )))
        }
        Event::Resize(..) => Some(Input::Resize),
        _ => None,
    }
}

/// Raw-mode terminal session, restored on drop.
pub struct Terminal {
    out: io::Stdout,
}

impl Terminal {
    /// Enter raw mode, the alternate screen, and mouse capture.
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        Ok(Self { out })
    }

    /// The current screen size.
    pub fn size() -> io::Result<Size> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Size::new(i32::from(width), i32::from(height)))
    }

    /// Render one full frame: clear, home, write the styled buffer, flush.
    pub fn render(&mut self, app: &mut App) -> io::Result<()> {
        let size = Self::size()?;
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        app.render(&mut self.out, size)?;
        self.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
    }
}

/// Drive `app` until Escape or Ctrl-C.
///
/// Renders whenever the app signals, dispatches events one at a time, and
/// maps Tab to focus advancement.
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = Terminal::new()?;
    terminal.render(app)?;
    loop {
        if event::poll(Duration::from_millis(50))? {
            match translate(event::read()?) {
                Some(Input::Key(key::ESCAPE | key::CTRL_C)) => break,
                Some(Input::Key(key::TAB)) => app.advance_focus(),
                Some(Input::Key(code)) => {
                    tracing::trace!(code, "key dispatched");
                    app.key_down(code);
                }
                Some(Input::Mouse(mouse)) => app.mouse_event(mouse),
                Some(Input::Resize) => terminal.render(app)?,
                None => {}
            }
        }
        if app.needs_render() {
            terminal.render(app)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent as CtMouseEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn chars_pass_through_as_bytes() {
        assert_eq!(translate(press(KeyCode::Char('a'))), Some(Input::Key(b'a')));
        assert_eq!(translate(press(KeyCode::Char(' '))), Some(Input::Key(0x20)));
    }

    #[test]
    fn ctrl_chords_fold_to_control_bytes() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(event), Some(Input::Key(key::CTRL_C)));
    }

    #[test]
    fn named_keys_map_to_bytes() {
        assert_eq!(translate(press(KeyCode::Enter)), Some(Input::Key(key::RETURN)));
        assert_eq!(
            translate(press(KeyCode::Backspace)),
            Some(Input::Key(key::DELETE))
        );
        assert_eq!(translate(press(KeyCode::Tab)), Some(Input::Key(key::TAB)));
        assert_eq!(translate(press(KeyCode::Esc)), Some(Input::Key(key::ESCAPE)));
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(translate(press(KeyCode::F(5))), None);
        assert_eq!(translate(press(KeyCode::Home)), None);
    }

    #[test]
    fn left_mouse_transitions_decode() {
        let down = Event::Mouse(CtMouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate(down),
            Some(Input::Mouse(MouseEvent::new(4, 2, ButtonState::Pressed)))
        );

        let drag = Event::Mouse(CtMouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(drag), None);
    }

    #[test]
    fn resize_is_surfaced() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(Input::Resize));
    }
}
