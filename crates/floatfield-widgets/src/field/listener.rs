use super::FloatingLabelField;

/// Notifications a field sends to its single optional listener.
///
/// Every method has a no-op default, so implement only what you need. The
/// same notifications are also returned as
/// [`Message::Notify`](super::Message::Notify) commands for parents that
/// prefer message routing over callbacks.
///
/// ```ignore
/// struct Echo;
///
/// impl FieldListener for Echo {
///     fn on_change(&mut self, field: &FloatingLabelField) {
///         tracing::info!(value = %field.value(), "changed");
///     }
/// }
///
/// let field = FloatingLabelField::new("First name").with_listener(Echo);
/// ```
pub trait FieldListener: Send {
    /// The field gained focus.
    fn on_begin_editing(&mut self, _field: &FloatingLabelField) {}

    /// The content changed.
    fn on_change(&mut self, _field: &FloatingLabelField) {}

    /// The return key was pressed. The answer is handed back to the caller
    /// of [`on_submit`](FloatingLabelField::on_submit).
    fn on_should_return(&mut self, _field: &FloatingLabelField) -> bool {
        true
    }

    /// The field lost focus.
    fn on_end_editing(&mut self, _field: &FloatingLabelField) {}
}

/// Notification kinds, as carried by [`Message::Notify`](super::Message::Notify).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Focus arrived.
    BeginEditing,
    /// Content changed to the given value.
    Changed(String),
    /// Return pressed with the given value.
    ShouldReturn(String),
    /// Focus left.
    EndEditing,
}
