//! **floatfield** -- floating-label text fields for [`ratatui`] applications.
//!
//! This is the umbrella crate that re-exports the runtime and the widgets
//! from a single dependency:
//!
//! ```toml
//! [dependencies]
//! floatfield = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`floatfield_core`] are available at the crate
//!   root ([`Model`], [`Component`], [`Command`], [`Subscription`],
//!   [`Program`], [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from
//!   [`floatfield_widgets`] (the field itself, focus cycling, validators).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use floatfield::widgets::field::{self, FloatingLabelField};
//! use floatfield::widgets::validate::email_state;
//! use floatfield::{terminal_events, Command, Component, Model, Subscription, TerminalEvent};
//! use ratatui::Frame;
//!
//! struct Email {
//!     field: FloatingLabelField,
//! }
//!
//! enum Msg {
//!     Field(field::Message),
//! }
//!
//! impl Model for Email {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let mut field = FloatingLabelField::new("Email").with_validator(email_state);
//!         let cmd = field.on_focus_gained().map(Msg::Field);
//!         (Email { field }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Field(m) => self.field.update(m).map(Msg::Field),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         let area = frame.area();
//!         self.field.view(frame, ratatui::layout::Rect { height: 3, ..area });
//!     }
//!
//!     fn subscriptions(&self) -> Vec<Subscription<Msg>> {
//!         let mut subs: Vec<_> = self
//!             .field
//!             .subscriptions()
//!             .into_iter()
//!             .map(|s| s.map(Msg::Field))
//!             .collect();
//!         subs.push(terminal_events(|ev| match ev {
//!             TerminalEvent::Key(key) => Some(Msg::Field(field::Message::KeyPress(key))),
//!             _ => None,
//!         }));
//!         subs
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     floatfield::run::<Email>(()).await.unwrap();
//! }
//! ```

pub use floatfield_core::*;
pub mod widgets {
    pub use floatfield_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
