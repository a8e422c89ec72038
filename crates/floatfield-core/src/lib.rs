//! Host runtime for **floatfield** components.
//!
//! `floatfield-core` is the host view system a floating-label field plugs
//! into. It follows the [Elm Architecture]: a screen is a [`Model`] with an
//! **init -> update -> view** cycle, fields are [`Component`]s owned by the
//! screen, and side effects travel through [`Command`]s and
//! [`Subscription`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level screen trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Notification or side effect returned from `update` |
//! | [`Subscription`] | Long-lived event source (terminal events, frame clock) |
//! | [`FrameClock`] | Fixed-rate tick that samples running animations |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! Everything here runs on one task: `update` is synchronous, animations are
//! sampled on frame ticks, and a new animation target simply replaces the
//! old one.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, OutputTarget, Program, ProgramError, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, FrameClock};

/// Run a model with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
