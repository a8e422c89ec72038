use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) but its [`view`](Component::view)
/// receives the area to draw into, so a parent decides where each child lives.
/// Lifecycle moments that a retained-mode toolkit would deliver through
/// overridden callbacks (mounting, bounds changes, focus changes) arrive here
/// as ordinary messages or explicit method calls made by the parent.
///
/// # Composition pattern
///
/// Wrap the child's message type in a parent variant and lift the child's
/// commands with [`Command::map`]:
///
/// ```rust,ignore
/// use floatfield_core::{Model, Component, Command};
/// use floatfield_widgets::field::{self, FloatingLabelField};
/// use ratatui::Frame;
///
/// struct Screen { email: FloatingLabelField }
///
/// #[derive(Debug)]
/// enum Msg { Email(field::Message) }
///
/// impl Model for Screen {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         (Screen { email: FloatingLabelField::new("Email") }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Email(m) => self.email.update(m).map(Msg::Email),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         let area = frame.area();
///         self.email.view(frame, ratatui::layout::Rect { height: 3, ..area });
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent lifts it with [`.map()`](Command::map).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into `area`. Implementations must confine drawing to it.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Declare active subscriptions for this component.
    ///
    /// Parents collect these and return them (mapped) from
    /// [`Model::subscriptions`](crate::Model::subscriptions). Animated
    /// components return a frame clock here only while something is moving.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether this component currently holds input focus.
    fn focused(&self) -> bool {
        false
    }
}
