use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives an **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) builds the initial state and an optional startup
///    [`Command`].
/// 2. [`view`](Model::view) draws the state into a [`ratatui::Frame`].
/// 3. Terminal events and frame ticks arrive as messages through
///    [`Subscription`]s.
/// 4. [`update`](Model::update) applies each message and may return a
///    [`Command`].
///
/// A screen hosting floating-label fields is a `Model`; each field is a
/// [`Component`](crate::Component) owned by it.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`]. Use `()` when none is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    ///
    /// After `update` returns, the runtime re-renders and reconciles
    /// [`subscriptions`](Model::subscriptions).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must be a pure function of `&self`.
    fn view(&self, frame: &mut Frame);

    /// Declare active subscriptions. Called after every update.
    ///
    /// The runtime diffs the returned list against the active set by
    /// [`SubscriptionId`](crate::SubscriptionId): new ones start, missing
    /// ones are aborted, unchanged ones keep running.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
