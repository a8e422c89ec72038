//! Configuration surface of a field and the coloring rule derived from it.

use crate::keyboard::KeyboardType;
use ratatui::style::{Color, Style};

/// Validation channel, independent of focus and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationState {
    /// Neutral: the configured underline color applies.
    #[default]
    None,
    /// Content passed validation.
    Valid,
    /// Content failed validation.
    Invalid,
}

/// Everything a host can configure on a field. Any change is applied on
/// the next render without animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    /// Label text shown inline when resting and raised otherwise.
    pub placeholder: String,
    /// Label color while validation is neutral.
    pub placeholder_color: Color,
    /// Color of the entered text.
    pub text_color: Color,
    /// Underline color while validation is neutral.
    pub underline_color: Color,
    /// Frame color.
    pub border_color: Color,
    /// Tint for [`ValidationState::Valid`].
    pub success_color: Color,
    /// Tint for [`ValidationState::Invalid`].
    pub error_color: Color,
    /// Blank cells between the frame and the text, per side.
    pub padding: u16,
    /// Input filter for the embedded text box.
    pub keyboard_type: KeyboardType,
    /// Raise the label as soon as focus arrives instead of on the first
    /// keystroke.
    pub raise_on_focus: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            placeholder_color: Color::DarkGray,
            text_color: Color::Reset,
            underline_color: Color::Blue,
            border_color: Color::Gray,
            success_color: Color::Green,
            error_color: Color::Red,
            padding: 1,
            keyboard_type: KeyboardType::Default,
            raise_on_focus: false,
        }
    }
}

impl Appearance {
    /// Default appearance with the given placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }
}

/// Underline tint for a validation state.
pub fn tint(validation: ValidationState, appearance: &Appearance) -> Color {
    match validation {
        ValidationState::Invalid => appearance.error_color,
        ValidationState::Valid => appearance.success_color,
        ValidationState::None => appearance.underline_color,
    }
}

/// Styles resolved from an [`Appearance`] and a [`ValidationState`].
///
/// Recomputed from scratch on every appearance-affecting event, so applying
/// the same inputs twice always yields the same styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Frame.
    pub border: Style,
    /// Floating label.
    pub label: Style,
    /// Entered text.
    pub text: Style,
    /// Underline indicator.
    pub underline: Style,
}

impl ResolvedStyle {
    /// Resolve the styles for the given inputs.
    pub fn resolve(appearance: &Appearance, validation: ValidationState) -> Self {
        let tint = tint(validation, appearance);
        let label = match validation {
            ValidationState::None => appearance.placeholder_color,
            ValidationState::Valid | ValidationState::Invalid => tint,
        };
        Self {
            border: Style::default().fg(appearance.border_color),
            label: Style::default().fg(label),
            text: Style::default().fg(appearance.text_color),
            underline: Style::default().fg(tint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_follows_validation() {
        let app = Appearance {
            underline_color: Color::Magenta,
            ..Appearance::default()
        };
        assert_eq!(tint(ValidationState::None, &app), Color::Magenta);
        assert_eq!(tint(ValidationState::Valid, &app), Color::Green);
        assert_eq!(tint(ValidationState::Invalid, &app), Color::Red);
    }

    #[test]
    fn label_keeps_placeholder_color_when_neutral() {
        let app = Appearance::with_placeholder("Email");
        let style = ResolvedStyle::resolve(&app, ValidationState::None);
        assert_eq!(style.label.fg, Some(Color::DarkGray));
        assert_eq!(style.underline.fg, Some(Color::Blue));
    }

    #[test]
    fn label_takes_validation_tint() {
        let app = Appearance::with_placeholder("Email");
        let style = ResolvedStyle::resolve(&app, ValidationState::Invalid);
        assert_eq!(style.label.fg, Some(Color::Red));
        assert_eq!(style.underline.fg, Some(Color::Red));
        assert_eq!(style.border.fg, Some(Color::Gray));
    }

    #[test]
    fn resolve_is_idempotent() {
        let app = Appearance::with_placeholder("Name");
        assert_eq!(
            ResolvedStyle::resolve(&app, ValidationState::Valid),
            ResolvedStyle::resolve(&app, ValidationState::Valid)
        );
    }
}
