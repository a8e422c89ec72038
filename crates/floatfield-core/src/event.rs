use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::layout::Rect;

/// Terminal events delivered through
/// [`terminal_events`](crate::subscriptions::terminal_events).
///
/// Mouse input is dropped at the source: text fields are driven by the
/// keyboard and by explicit focus changes from their parent screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press. Release and repeat events are filtered out.
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl TerminalEvent {
    /// Convert a raw crossterm event, discarding the kinds no screen consumes.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(k) if k.kind != KeyEventKind::Release => {
                Some(TerminalEvent::Key(k))
            }
            crossterm::event::Event::Resize(w, h) => Some(TerminalEvent::Resize(w, h)),
            crossterm::event::Event::FocusGained => Some(TerminalEvent::FocusGained),
            crossterm::event::Event::FocusLost => Some(TerminalEvent::FocusLost),
            crossterm::event::Event::Paste(s) => Some(TerminalEvent::Paste(s)),
            _ => None,
        }
    }

    /// The new screen bounds for a resize event.
    pub fn resized_area(&self) -> Option<Rect> {
        match self {
            TerminalEvent::Resize(w, h) => Some(Rect::new(0, 0, *w, *h)),
            _ => None,
        }
    }
}
