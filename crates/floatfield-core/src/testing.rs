//! Headless harnesses for exercising models and components without a TTY.

use crate::command::{Action, Command, CommandInner};
use crate::component::Component;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// Drives a [`Model`] without a real terminal.
///
/// Synchronous commands ([`Command::message`]) are queued and flushed with
/// [`drain_messages`](TestProgram::drain_messages); async commands are
/// dropped. Quit requests are recorded so tests can assert on them.
///
/// ```rust,ignore
/// let mut prog = TestProgram::<SignupScreen>::new(());
/// prog.send(Msg::Email(field::Message::FocusGained));
/// prog.send(Msg::Email(field::Message::ContentChanged("a@b.co".into())));
/// prog.drain_messages();
/// assert!(prog.render_string(40, 5).contains("Email"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle. Follow-up messages
    /// stay queued until [`drain_messages`](TestProgram::drain_messages).
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Process queued messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Messages queued but not yet delivered.
    pub fn pending(&self) -> &[M::Message] {
        &self.pending_messages
    }

    /// Whether any update returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable reference to the model for direct test setup.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content, one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Action(Action::Message(msg)) => {
                self.pending_messages.push(msg);
            }
            CommandInner::Action(Action::Quit) => {
                self.quit_requested = true;
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            // Async commands can't be executed synchronously in tests
            CommandInner::Future(_) => {}
        }
    }
}

/// Render a single [`Component`] into a `width` x `height` buffer.
pub fn render_component<C: Component>(component: &C, width: u16, height: u16) -> Buffer {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            component.view(frame, frame.area());
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Flatten a buffer's symbols into a string with one line per row.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;
    use ratatui::Frame;

    // A label that moves to the first row once the screen has content.
    struct LabelScreen {
        content: String,
        notices: Vec<&'static str>,
    }

    #[derive(Debug)]
    enum Msg {
        Type(char),
        Clear,
        Notice(&'static str),
        Done,
    }

    impl Model for LabelScreen {
        type Message = Msg;
        type Flags = String;

        fn init(content: String) -> (Self, Command<Msg>) {
            let screen = LabelScreen {
                content,
                notices: Vec::new(),
            };
            (screen, Command::message(Msg::Notice("mounted")))
        }

        fn update(&mut self, msg: Msg) -> Command<Msg> {
            match msg {
                Msg::Type(c) => {
                    let first = self.content.is_empty();
                    self.content.push(c);
                    if first {
                        Command::message(Msg::Notice("raised"))
                    } else {
                        Command::none()
                    }
                }
                Msg::Clear => {
                    self.content.clear();
                    Command::batch(vec![
                        Command::message(Msg::Notice("cleared")),
                        Command::message(Msg::Notice("resting")),
                    ])
                }
                Msg::Notice(n) => {
                    self.notices.push(n);
                    Command::none()
                }
                Msg::Done => Command::quit(),
            }
        }

        fn view(&self, frame: &mut Frame) {
            let area = frame.area();
            let row = if self.content.is_empty() { 1 } else { 0 };
            let label = Rect::new(area.x, area.y + row, area.width, 1);
            frame.render_widget(Paragraph::new("Name"), label);
            if !self.content.is_empty() {
                let text = Rect::new(area.x, area.y + 1, area.width, 1);
                frame.render_widget(Paragraph::new(self.content.as_str()), text);
            }
        }
    }

    struct Badge(&'static str);

    impl Component for Badge {
        type Message = ();

        fn update(&mut self, _msg: ()) -> Command<()> {
            Command::none()
        }

        fn view(&self, frame: &mut Frame, area: Rect) {
            frame.render_widget(Paragraph::new(self.0), area);
        }
    }

    #[test]
    fn init_command_is_queued() {
        let mut prog = TestProgram::<LabelScreen>::new(String::new());
        assert_eq!(prog.pending().len(), 1);
        prog.drain_messages();
        assert_eq!(prog.model().notices, vec!["mounted"]);
    }

    #[test]
    fn first_keystroke_chains_a_notice() {
        let mut prog = TestProgram::<LabelScreen>::new(String::new());
        prog.send(Msg::Type('a'));
        prog.send(Msg::Type('b'));
        prog.drain_messages();
        assert_eq!(prog.model().content, "ab");
        assert_eq!(prog.model().notices, vec!["mounted", "raised"]);
    }

    #[test]
    fn batched_messages_keep_order() {
        let mut prog = TestProgram::<LabelScreen>::new("x".into());
        prog.send(Msg::Clear);
        prog.drain_messages();
        assert_eq!(prog.model().notices, vec!["mounted", "cleared", "resting"]);
    }

    #[test]
    fn render_reflects_label_position() {
        let mut prog = TestProgram::<LabelScreen>::new(String::new());
        assert_eq!(prog.render_string(6, 2), "      \nName  ");
        prog.send(Msg::Type('J'));
        assert_eq!(prog.render_string(6, 2), "Name  \nJ     ");
    }

    #[test]
    fn quit_is_recorded() {
        let mut prog = TestProgram::<LabelScreen>::new(String::new());
        assert!(!prog.quit_requested());
        prog.send(Msg::Done);
        assert!(prog.quit_requested());
    }

    #[test]
    fn component_renders_into_buffer() {
        let buf = render_component(&Badge("ok"), 4, 1);
        assert_eq!(buffer_to_string(&buf), "ok  ");
    }
}
