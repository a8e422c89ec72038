//! Floating-label text field.
//!
//! A framed single-line input whose placeholder label rests inline while
//! the field is empty and unfocused, and floats up onto the frame once the
//! field has focus (optionally) or content. An underline grows across the
//! bottom edge while the field is focused and takes the validation tint.
//!
//! # Lifecycle
//!
//! The host calls the entry points at the right moments, either directly
//! or by routing [`Message`]s through [`Component::update`]:
//!
//! | Host moment | Method | Message |
//! |-------------|--------|---------|
//! | field becomes active | [`on_focus_gained`](FloatingLabelField::on_focus_gained) | [`Message::FocusGained`] |
//! | field becomes inactive | [`on_focus_lost`](FloatingLabelField::on_focus_lost) | [`Message::FocusLost`] |
//! | every keystroke | [`on_content_changed`](FloatingLabelField::on_content_changed) | [`Message::ContentChanged`] / [`Message::KeyPress`] |
//! | return key | [`on_submit`](FloatingLabelField::on_submit) | [`Message::Submit`] |
//! | validation result | [`set_validation_state`](FloatingLabelField::set_validation_state) | [`Message::SetValidation`] |
//! | bounds change | [`set_bounds`](FloatingLabelField::set_bounds) | [`Message::BoundsChanged`] |
//! | frame tick | [`tick`](FloatingLabelField::tick) | [`Message::Frame`] |
//!
//! No operation fails. Out-of-range configuration is clamped.

mod appearance;
mod geometry;
mod listener;
mod state;

pub use appearance::{tint, Appearance, ResolvedStyle, ValidationState};
pub use geometry::{Geometry, LabelTransform, LIFT_RATIO, RAISED_SCALE};
pub use listener::{FieldEvent, FieldListener};
pub use state::{FieldState, LabelState, Trigger};

use crate::keyboard::KeyboardType;
use crate::text_box::{self, TextBox};
use crate::tween::{Easing, Tween};
use crossterm::event::KeyEvent;
use floatfield_core::command::Command;
use floatfield_core::component::Component;
use floatfield_core::subscription::{subscribe, Subscription};
use floatfield_core::subscriptions::{FrameClock, DEFAULT_FPS};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};
use ratatui::widgets::{Block, BorderType};
use ratatui::Frame;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Default length of the label and underline animations.
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(300);

const UNDERLINE_SYMBOL: &str = "━";

static NEXT_FIELD: AtomicU64 = AtomicU64::new(1);

/// Messages for the floating-label field.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press, forwarded to the embedded text box while focused.
    KeyPress(KeyEvent),
    /// Pasted text, inserted at the cursor while focused.
    Paste(String),
    /// The field became active.
    FocusGained,
    /// The field became inactive.
    FocusLost,
    /// Replace the content.
    ContentChanged(String),
    /// The return key was pressed.
    Submit,
    /// Set the validation tint.
    SetValidation(ValidationState),
    /// The field's bounds changed.
    BoundsChanged(Rect),
    /// Frame clock tick.
    Frame(Instant),
    /// Emitted notification for the parent; ignored when fed back in.
    Notify(FieldEvent),
}

/// A text field with a floating label and an animated underline.
///
/// ```ignore
/// let mut email = FloatingLabelField::new("Email")
///     .with_keyboard_type(KeyboardType::EmailAddress)
///     .with_raise_on_focus(true);
///
/// let cmd = email.on_focus_gained();
/// let cmd = email.on_content_changed("jane@example.com");
/// email.set_validation_state(ValidationState::Valid);
/// ```
pub struct FloatingLabelField {
    key: String,
    text_box: TextBox,
    appearance: Appearance,
    resolved: ResolvedStyle,
    validation: ValidationState,
    #[allow(clippy::type_complexity)]
    validator: Option<Box<dyn Fn(&str) -> ValidationState + Send>>,
    label: LabelState,
    focus: bool,
    geometry: Geometry,
    underline: Tween,
    raise: Tween,
    duration: Duration,
    easing: Easing,
    fps: u32,
    clock: Instant,
    listener: Option<Box<dyn FieldListener>>,
}

impl FloatingLabelField {
    /// Create a resting, unfocused field with the given placeholder.
    pub fn new(placeholder: impl Into<String>) -> Self {
        let id = NEXT_FIELD.fetch_add(1, Ordering::Relaxed);
        let appearance = Appearance::with_placeholder(placeholder);
        let resolved = ResolvedStyle::resolve(&appearance, ValidationState::None);
        let mut field = Self {
            key: format!("field-{id}"),
            text_box: TextBox::new(),
            appearance,
            resolved,
            validation: ValidationState::None,
            validator: None,
            label: LabelState::Resting,
            focus: false,
            geometry: Geometry::default(),
            underline: Tween::settled(0.0),
            raise: Tween::settled(0.0),
            duration: DEFAULT_ANIMATION,
            easing: Easing::default(),
            fps: DEFAULT_FPS,
            clock: Instant::now(),
            listener: None,
        };
        field.restyle();
        field
    }

    /// Override the identity used for this field's frame clock.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Replace the whole appearance.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.set_appearance(appearance);
        self
    }

    /// Set the keyboard type.
    pub fn with_keyboard_type(mut self, kind: KeyboardType) -> Self {
        self.set_keyboard_type(kind);
        self
    }

    /// Raise the label as soon as the field gains focus.
    pub fn with_raise_on_focus(mut self, raise: bool) -> Self {
        self.appearance.raise_on_focus = raise;
        self
    }

    /// Length of the label and underline animations. Zero disables them.
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Easing curve for both animations.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Frame clock rate used while animating.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Maximum number of characters.
    pub fn with_char_limit(mut self, limit: usize) -> Self {
        self.text_box = self.text_box.with_char_limit(limit);
        self
    }

    /// Mask the content (secure entry).
    pub fn with_mask(mut self, mask: char) -> Self {
        self.text_box = self.text_box.with_mask(mask);
        self
    }

    /// Install the listener, replacing any previous one.
    pub fn with_listener(mut self, listener: impl FieldListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Recompute the validation state from the content on every change.
    pub fn with_validator(
        mut self,
        validator: impl Fn(&str) -> ValidationState + Send + 'static,
    ) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    // --- configuration -----------------------------------------------------

    /// Replace the whole appearance. Applied immediately, not animated.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
        self.restyle();
        if self.focus {
            self.transition(Trigger::FocusGained {
                raise_on_focus: self.appearance.raise_on_focus,
            });
        }
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.appearance.placeholder = placeholder.into();
        self.restyle();
    }

    /// Set the label color used while validation is neutral.
    pub fn set_placeholder_color(&mut self, color: Color) {
        self.appearance.placeholder_color = color;
        self.restyle();
    }

    /// Set the color of the entered text.
    pub fn set_text_color(&mut self, color: Color) {
        self.appearance.text_color = color;
        self.restyle();
    }

    /// Set the underline color used while validation is neutral.
    pub fn set_underline_color(&mut self, color: Color) {
        self.appearance.underline_color = color;
        self.restyle();
    }

    /// Set the keyboard type.
    pub fn set_keyboard_type(&mut self, kind: KeyboardType) {
        self.appearance.keyboard_type = kind;
        self.restyle();
    }

    /// Set the keyboard type by numeric code; codes outside `0..=9` select
    /// [`KeyboardType::Default`].
    pub fn set_keyboard_type_code(&mut self, code: i64) {
        self.set_keyboard_type(KeyboardType::from_code(code));
    }

    // --- accessors ---------------------------------------------------------

    /// Identity of this field's frame clock.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current content.
    pub fn value(&self) -> String {
        self.text_box.value()
    }

    /// Whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.text_box.is_empty()
    }

    /// Where the label is (or is heading).
    pub fn label_state(&self) -> LabelState {
        self.label
    }

    /// Derived focus/content state.
    pub fn field_state(&self) -> FieldState {
        FieldState::derive(self.focus, self.is_empty())
    }

    /// Current validation state.
    pub fn validation_state(&self) -> ValidationState {
        self.validation
    }

    /// Current appearance.
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Styles currently applied.
    pub fn resolved_style(&self) -> &ResolvedStyle {
        &self.resolved
    }

    /// Last bounds reported through [`set_bounds`](Self::set_bounds).
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Underline width as a fraction of the field width, at the last tick.
    pub fn underline_fraction(&self) -> f32 {
        self.underline.value_at(self.clock)
    }

    /// Underline width the current animation is heading for.
    pub fn underline_target(&self) -> f32 {
        self.underline.target()
    }

    /// Label transform at the last tick, for the last reported bounds.
    ///
    /// The lift is a fraction of the bounds height, so until the first
    /// [`set_bounds`](Self::set_bounds) only the scale moves.
    pub fn label_transform(&self) -> LabelTransform {
        self.geometry
            .label_transform(self.raise.value_at(self.clock), self.label_width())
    }

    /// Whether an animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.underline.in_flight() || self.raise.in_flight()
    }

    fn label_width(&self) -> u16 {
        u16::try_from(self.appearance.placeholder.width()).unwrap_or(u16::MAX)
    }

    // --- lifecycle ---------------------------------------------------------

    /// The field became active.
    pub fn on_focus_gained(&mut self) -> Command<Message> {
        if self.focus {
            return Command::none();
        }
        self.focus = true;
        self.text_box.focus();
        tracing::debug!(field = %self.key, "focus gained");

        self.animate_underline();
        self.transition(Trigger::FocusGained {
            raise_on_focus: self.appearance.raise_on_focus,
        });
        self.notify(|listener, field| listener.on_begin_editing(field));
        Command::message(Message::Notify(FieldEvent::BeginEditing))
    }

    /// The field became inactive. Always allows the defocus.
    pub fn on_focus_lost(&mut self) -> (bool, Command<Message>) {
        if !self.focus {
            return (true, Command::none());
        }
        self.focus = false;
        self.text_box.blur();
        tracing::debug!(field = %self.key, "focus lost");

        self.animate_underline();
        self.transition(Trigger::FocusLost {
            empty: self.is_empty(),
        });
        self.notify(|listener, field| listener.on_end_editing(field));
        (true, Command::message(Message::Notify(FieldEvent::EndEditing)))
    }

    /// The content changed to `text`.
    pub fn on_content_changed(&mut self, text: impl Into<String>) -> Command<Message> {
        let text = text.into();
        if self.text_box.value() != text {
            self.text_box.set_value(&text);
        }
        let value = self.text_box.value();

        self.transition(Trigger::ContentChanged {
            empty: value.is_empty(),
            focused: self.focus,
        });
        if let Some(ref validator) = self.validator {
            self.validation = validator(&value);
        }
        self.restyle();
        self.notify(|listener, field| listener.on_change(field));
        Command::message(Message::Notify(FieldEvent::Changed(value)))
    }

    /// Programmatic shorthand for [`on_content_changed`](Self::on_content_changed).
    pub fn set_value(&mut self, text: impl Into<String>) -> Command<Message> {
        self.on_content_changed(text)
    }

    /// The return key was pressed: rest the label if empty, give up focus,
    /// and ask the listener. Returns the listener's answer (`true` without
    /// a listener).
    pub fn on_submit(&mut self) -> (bool, Command<Message>) {
        self.transition(Trigger::Submit {
            empty: self.is_empty(),
        });
        let (_, end) = self.on_focus_lost();
        let answer = self
            .notify(|listener, field| listener.on_should_return(field))
            .unwrap_or(true);
        let returned = Command::message(Message::Notify(FieldEvent::ShouldReturn(self.value())));
        (answer, Command::batch([end, returned]))
    }

    /// Set the validation tint. Recolors only; nothing animates.
    pub fn set_validation_state(&mut self, state: ValidationState) {
        if self.validation != state {
            tracing::debug!(field = %self.key, from = ?self.validation, to = ?state, "validation changed");
        }
        self.validation = state;
        self.restyle();
    }

    /// Record new bounds. Animation targets are fractions of the bounds, so
    /// in-flight animations follow the new size.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.geometry.bounds != bounds {
            tracing::trace!(field = %self.key, ?bounds, "bounds changed");
            self.geometry = Geometry::new(bounds);
        }
    }

    /// Advance the animation clock to `now`, retiring finished animations.
    pub fn tick(&mut self, now: Instant) {
        self.clock = self.clock.max(now);
        let underline_done = self.underline.finish(self.clock);
        let raise_done = self.raise.finish(self.clock);
        if (underline_done || raise_done) && !self.is_animating() {
            tracing::trace!(field = %self.key, "animations settled");
        }
    }

    /// Shorthand for [`on_focus_gained`](Self::on_focus_gained).
    pub fn focus(&mut self) -> Command<Message> {
        self.on_focus_gained()
    }

    /// Shorthand for [`on_focus_lost`](Self::on_focus_lost).
    pub fn blur(&mut self) -> Command<Message> {
        self.on_focus_lost().1
    }

    // --- internals ---------------------------------------------------------

    fn now(&mut self) -> Instant {
        self.clock = self.clock.max(Instant::now());
        self.clock
    }

    fn transition(&mut self, trigger: Trigger) {
        let next = self.label.next(trigger);
        if next == self.label {
            return;
        }
        tracing::debug!(field = %self.key, from = ?self.label, to = ?next, "label transition");
        self.label = next;
        let now = self.now();
        self.raise
            .animate_to(next.progress(), now, self.duration, self.easing);
    }

    fn animate_underline(&mut self) {
        let target = if self.focus { 1.0 } else { 0.0 };
        let now = self.now();
        self.underline
            .animate_to(target, now, self.duration, self.easing);
    }

    /// Recompute every derived style. Called by each mutator.
    fn restyle(&mut self) {
        self.resolved = ResolvedStyle::resolve(&self.appearance, self.validation);
        self.text_box.set_text_style(self.resolved.text);
        self.text_box.set_keyboard_type(self.appearance.keyboard_type);
    }

    fn notify<R>(
        &mut self,
        call: impl FnOnce(&mut dyn FieldListener, &FloatingLabelField) -> R,
    ) -> Option<R> {
        let mut listener = self.listener.take()?;
        let result = call(listener.as_mut(), self);
        self.listener = Some(listener);
        Some(result)
    }

    fn absorb(&mut self, cmd: Command<text_box::Message>) -> Command<Message> {
        let cmds: Vec<_> = cmd
            .into_messages()
            .into_iter()
            .map(|msg| match msg {
                text_box::Message::Changed(value) => self.on_content_changed(value),
                text_box::Message::Submit(_) => self.on_submit().1,
                text_box::Message::KeyPress(_) | text_box::Message::Paste(_) => Command::none(),
            })
            .collect();
        Command::batch(cmds)
    }

    fn draw_label(&self, buf: &mut Buffer, x: u16, y: u16, max_width: u16, with_cursor: bool) {
        let label = self.appearance.placeholder.as_str();
        let style = self.resolved.label;
        if !with_cursor {
            buf.set_stringn(x, y, label, usize::from(max_width), style);
            return;
        }
        // The cursor sits on the label's first cell while it rests inline.
        let cursor_style = style.add_modifier(Modifier::REVERSED);
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => {
                let first_width = first.width().unwrap_or(1) as u16;
                buf.set_stringn(x, y, first.to_string(), usize::from(max_width), cursor_style);
                let rest_width = max_width.saturating_sub(first_width);
                buf.set_stringn(x + first_width, y, chars.as_str(), usize::from(rest_width), style);
            }
            None => {
                buf.set_stringn(x, y, " ", usize::from(max_width), cursor_style);
            }
        }
    }

    fn view_compact(&self, frame: &mut Frame, area: Rect) {
        let row = Rect { height: 1, ..area };
        if self.is_empty() && !self.focus {
            self.draw_label(frame.buffer_mut(), row.x, row.y, row.width, false);
        } else {
            self.text_box.view(frame, row);
        }
    }
}

impl Component for FloatingLabelField {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if !self.focus {
                    return Command::none();
                }
                let cmd = self.text_box.update(text_box::Message::KeyPress(key));
                self.absorb(cmd)
            }
            Message::Paste(text) => {
                if !self.focus {
                    return Command::none();
                }
                let cmd = self.text_box.update(text_box::Message::Paste(text));
                self.absorb(cmd)
            }
            Message::FocusGained => self.on_focus_gained(),
            Message::FocusLost => self.on_focus_lost().1,
            Message::ContentChanged(text) => self.on_content_changed(text),
            Message::Submit => self.on_submit().1,
            Message::SetValidation(state) => {
                self.set_validation_state(state);
                Command::none()
            }
            Message::BoundsChanged(bounds) => {
                self.set_bounds(bounds);
                Command::none()
            }
            Message::Frame(now) => {
                self.tick(now);
                Command::none()
            }
            Message::Notify(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.height < 3 || area.width < 3 {
            if area.height > 0 && area.width > 0 {
                self.view_compact(frame, area);
            }
            return;
        }
        let geometry = Geometry::new(area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.resolved.border);
        frame.render_widget(block, area);

        let underline = geometry.underline_cells(self.underline.value_at(self.clock));
        if underline > 0 {
            let symbols = UNDERLINE_SYMBOL.repeat(usize::from(underline));
            frame.buffer_mut().set_stringn(
                area.x,
                area.bottom() - 1,
                symbols,
                usize::from(underline),
                self.resolved.underline,
            );
        }

        let padding = self.appearance.padding.min(area.width.saturating_sub(3) / 2);
        let content_x = area.x + 1 + padding;
        let content_right = area.right() - 1 - padding;
        let content_width = content_right.saturating_sub(content_x);
        let text_row = geometry.text_row();

        let label_width = self.label_width();
        let progress = self.raise.value_at(self.clock);
        let label_row = geometry.label_row(progress, label_width);
        let label_x = (f32::from(content_x)
            + geometry
                .label_transform(progress, label_width)
                .left_edge_shift(label_width)
                .round())
        .max(f32::from(area.x + 1)) as u16;
        let inline = label_row == text_row;
        let label_room = if inline {
            content_right.saturating_sub(label_x)
        } else {
            (area.right() - 1).saturating_sub(label_x)
        };

        let empty = self.is_empty();
        match (inline, empty) {
            // Content wins over a label that has not left the text row yet.
            (true, false) => {}
            (true, true) => {
                self.draw_label(frame.buffer_mut(), label_x, label_row, label_room, self.focus);
            }
            (false, _) => {
                self.draw_label(frame.buffer_mut(), label_x, label_row, label_room, false);
            }
        }

        if !(inline && empty) {
            let text_area = Rect::new(content_x, text_row, content_width, 1);
            self.text_box.view(frame, text_area);
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.is_animating() {
            vec![subscribe(FrameClock::new(self.key.clone()).with_fps(self.fps)).map(Message::Frame)]
        } else {
            vec![]
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl std::fmt::Debug for FloatingLabelField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatingLabelField")
            .field("key", &self.key)
            .field("value", &self.value())
            .field("label", &self.label)
            .field("focus", &self.focus)
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}
