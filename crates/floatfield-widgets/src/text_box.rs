//! Single-line editable text box: the editing primitive inside a
//! [`FloatingLabelField`](crate::field::FloatingLabelField).
//!
//! The box knows nothing about labels or underlines. It edits a value,
//! filters input through its [`KeyboardType`], and reports `Changed` and
//! `Submit` back to whoever owns it.

use crate::keyboard::KeyboardType;
use floatfield_core::command::Command;
use floatfield_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

/// Style configuration for the text box.
#[derive(Debug, Clone)]
pub struct TextBoxStyle {
    /// Style applied to the entered text.
    pub text: Style,
    /// Style applied to the cursor cell.
    pub cursor: Style,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        Self {
            text: Style::default(),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

/// Messages for the text box.
#[derive(Debug, Clone)]
pub enum Message {
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Paste text at the cursor.
    Paste(String),
    /// Emitted when the value changes.
    Changed(String),
    /// Emitted when Enter is pressed.
    Submit(String),
}

/// A single-line text box.
///
/// ```ignore
/// let mut email = TextBox::new()
///     .with_keyboard_type(KeyboardType::EmailAddress)
///     .with_char_limit(254);
/// email.focus();
/// ```
pub struct TextBox {
    value: Vec<char>,
    cursor: usize,
    focus: bool,
    char_limit: Option<usize>,
    keyboard_type: KeyboardType,
    mask: Option<char>,
    style: TextBoxStyle,
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBox {
    /// Create an empty, unfocused text box.
    pub fn new() -> Self {
        Self {
            value: Vec::new(),
            cursor: 0,
            focus: false,
            char_limit: None,
            keyboard_type: KeyboardType::Default,
            mask: None,
            style: TextBoxStyle::default(),
        }
    }

    /// Set the maximum number of characters allowed.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.char_limit = Some(limit);
        self
    }

    /// Restrict input to what `kind` accepts.
    pub fn with_keyboard_type(mut self, kind: KeyboardType) -> Self {
        self.keyboard_type = kind;
        self
    }

    /// Display every character as `mask` (secure entry).
    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Set custom styles.
    pub fn with_style(mut self, style: TextBoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Change the keyboard type. Existing content is kept as is.
    pub fn set_keyboard_type(&mut self, kind: KeyboardType) {
        self.keyboard_type = kind;
    }

    /// Replace the text style, keeping the cursor style.
    pub fn set_text_style(&mut self, text: Style) {
        self.style.text = text;
    }

    /// The active keyboard type.
    pub fn keyboard_type(&self) -> KeyboardType {
        self.keyboard_type
    }

    /// Give this box keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replace the value and move the cursor to the end. The keyboard filter
    /// is not applied: programmatic values are trusted.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        if let Some(limit) = self.char_limit {
            self.value.truncate(limit);
        }
        self.cursor = self.value.len();
    }

    /// Move the cursor, clamped to `0..=len`.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.value.len());
    }

    /// Clear the value.
    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Cursor position as a character index.
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of characters in the value.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    fn changed(&self) -> Command<Message> {
        Command::message(Message::Changed(self.value()))
    }

    fn has_room(&self) -> bool {
        self.char_limit.is_none_or(|limit| self.value.len() < limit)
    }

    fn insert_char(&mut self, c: char) -> Command<Message> {
        if !self.has_room() || !self.keyboard_type.accepts(c, &self.value) {
            return Command::none();
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        self.changed()
    }

    fn insert_paste(&mut self, text: &str) -> Command<Message> {
        let mut inserted = false;
        for c in text.chars() {
            if !self.has_room() {
                break;
            }
            if self.keyboard_type.accepts(c, &self.value) {
                self.value.insert(self.cursor, c);
                self.cursor += 1;
                inserted = true;
            }
        }
        if inserted {
            self.changed()
        } else {
            Command::none()
        }
    }

    fn delete_char_backward(&mut self) -> Command<Message> {
        if self.cursor == 0 {
            return Command::none();
        }
        self.cursor -= 1;
        self.value.remove(self.cursor);
        self.changed()
    }

    fn delete_char_forward(&mut self) -> Command<Message> {
        if self.cursor >= self.value.len() {
            return Command::none();
        }
        self.value.remove(self.cursor);
        self.changed()
    }

    fn delete_word_backward(&mut self) -> Command<Message> {
        let start = self.word_start_before(self.cursor);
        if start == self.cursor {
            return Command::none();
        }
        self.value.drain(start..self.cursor);
        self.cursor = start;
        self.changed()
    }

    fn delete_to_start(&mut self) -> Command<Message> {
        if self.cursor == 0 {
            return Command::none();
        }
        self.value.drain(..self.cursor);
        self.cursor = 0;
        self.changed()
    }

    fn delete_to_end(&mut self) -> Command<Message> {
        if self.cursor >= self.value.len() {
            return Command::none();
        }
        self.value.truncate(self.cursor);
        self.changed()
    }

    fn word_start_before(&self, from: usize) -> usize {
        let mut pos = from;
        while pos > 0 && !self.value[pos - 1].is_alphanumeric() {
            pos -= 1;
        }
        while pos > 0 && self.value[pos - 1].is_alphanumeric() {
            pos -= 1;
        }
        pos
    }

    fn word_end_after(&self, from: usize) -> usize {
        let len = self.value.len();
        let mut pos = from;
        while pos < len && !self.value[pos].is_alphanumeric() {
            pos += 1;
        }
        while pos < len && self.value[pos].is_alphanumeric() {
            pos += 1;
        }
        pos
    }

    fn display_chars(&self) -> Vec<char> {
        match self.mask {
            Some(mask) => vec![mask; self.value.len()],
            None => self.value.clone(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Command::message(Message::Submit(self.value())),
            (KeyCode::Char('w'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.delete_word_backward()
            }
            (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => self.delete_to_start(),
            (KeyCode::Char('k'), m) if m.contains(KeyModifiers::CONTROL) => self.delete_to_end(),
            (KeyCode::Char('a'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
                Command::none()
            }
            (KeyCode::Char('e'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.cursor = self.value.len();
                Command::none()
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => self.insert_char(c),
            (KeyCode::Backspace, m) if m.contains(KeyModifiers::ALT) => self.delete_word_backward(),
            (KeyCode::Backspace, _) => self.delete_char_backward(),
            (KeyCode::Delete, _) => self.delete_char_forward(),
            (KeyCode::Left, m)
                if m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::ALT) =>
            {
                self.cursor = self.word_start_before(self.cursor);
                Command::none()
            }
            (KeyCode::Right, m)
                if m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::ALT) =>
            {
                self.cursor = self.word_end_after(self.cursor);
                Command::none()
            }
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                Command::none()
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.value.len());
                Command::none()
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                Command::none()
            }
            (KeyCode::End, _) => {
                self.cursor = self.value.len();
                Command::none()
            }
            _ => Command::none(),
        }
    }
}

impl Component for TextBox {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::Paste(text) if self.focus => self.insert_paste(&text),
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let chars = self.display_chars();
        let width = usize::from(area.width);
        let cells = |c: &char| c.width().unwrap_or(0);

        // Scroll in display cells so the cursor cell stays inside the area.
        let mut used = chars.get(self.cursor).map_or(1, |c| cells(c).max(1));
        let mut offset = self.cursor;
        while offset > 0 && used + cells(&chars[offset - 1]) <= width {
            offset -= 1;
            used += cells(&chars[offset]);
        }
        let mut visible_end = offset;
        let mut filled = 0;
        while visible_end < chars.len() && filled + cells(&chars[visible_end]) <= width {
            filled += cells(&chars[visible_end]);
            visible_end += 1;
        }
        let visible = &chars[offset..visible_end.max(offset)];

        let mut spans = Vec::new();
        if self.focus {
            let at = self.cursor - offset;
            let before: String = visible.iter().take(at).collect();
            let under: String = visible.get(at).map_or_else(|| " ".to_string(), char::to_string);
            let after: String = visible.iter().skip(at + 1).collect();
            if !before.is_empty() {
                spans.push(Span::styled(before, self.style.text));
            }
            spans.push(Span::styled(under, self.style.cursor));
            if !after.is_empty() {
                spans.push(Span::styled(after, self.style.text));
            }
        } else if !visible.is_empty() {
            spans.push(Span::styled(visible.iter().collect::<String>(), self.style.text));
        } else {
            return;
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
