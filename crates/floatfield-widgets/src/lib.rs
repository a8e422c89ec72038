//! Widgets for the **floatfield** TUI toolkit.
//!
//! Every widget in this crate implements [`floatfield_core::Component`], so it
//! can be embedded inside any [`floatfield_core::Model`] and composed freely
//! within [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`field`] | Floating-label text field with an animated underline |
//! | [`text_box`] | Single-line editable text, the field's input surface |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`focus`] | [`FocusRing`](focus::FocusRing) for cycling focus across fields |
//! | [`keyboard`] | Keyboard types and the input filter each one applies |
//! | [`tween`] | Time-based scalar animation with easing |
//! | [`validate`] | Ready-made content validators |

pub mod field;
pub mod focus;
pub mod keyboard;
pub mod text_box;
pub mod tween;
pub mod validate;

pub use field::{FloatingLabelField, ValidationState};
