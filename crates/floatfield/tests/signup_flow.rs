use std::time::{Duration, Instant};

use floatfield::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use floatfield::ratatui::layout::{Constraint, Layout, Rect};
use floatfield::ratatui::Frame;
use floatfield::testing::TestProgram;
use floatfield::widgets::field::{self, FieldEvent, FloatingLabelField, LabelState, ValidationState};
use floatfield::widgets::focus::{FocusChange, FocusRing};
use floatfield::widgets::keyboard::KeyboardType;
use floatfield::widgets::validate::email_state;
use floatfield::{Command, Component, Model};

const NAME: usize = 0;
const EMAIL: usize = 1;

struct Form {
    fields: [FloatingLabelField; 2],
    focus: FocusRing<2>,
    returned: Vec<(usize, String)>,
}

#[derive(Debug)]
enum Msg {
    Field(usize, field::Message),
    Key(KeyEvent),
    Next,
    Settle,
}

impl Form {
    fn forward(&mut self, index: usize, msg: field::Message) -> Command<Msg> {
        self.fields[index]
            .update(msg)
            .map(move |m| Msg::Field(index, m))
    }

    fn apply_focus(&mut self, change: FocusChange) -> Command<Msg> {
        let mut cmds = Vec::new();
        if let Some(i) = change.lost {
            cmds.push(self.forward(i, field::Message::FocusLost));
        }
        if let Some(i) = change.gained {
            cmds.push(self.forward(i, field::Message::FocusGained));
        }
        Command::batch(cmds)
    }
}

impl Model for Form {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let fields = [
            FloatingLabelField::new("Name").with_animation_duration(Duration::ZERO),
            FloatingLabelField::new("Email")
                .with_keyboard_type(KeyboardType::EmailAddress)
                .with_animation_duration(Duration::ZERO),
        ];
        let mut form = Form {
            fields,
            focus: FocusRing::new(),
            returned: Vec::new(),
        };
        let change = form.focus.focus(NAME);
        let cmd = form.apply_focus(change);
        (form, cmd)
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Field(i, field::Message::Notify(event)) => {
                match event {
                    FieldEvent::Changed(value) if i == EMAIL => {
                        self.fields[EMAIL].set_validation_state(email_state(&value));
                    }
                    FieldEvent::ShouldReturn(value) => {
                        self.returned.push((i, value));
                        let _ = self.focus.clear();
                    }
                    _ => {}
                }
                Command::none()
            }
            Msg::Field(i, m) => self.forward(i, m),
            Msg::Key(key) => match self.focus.focused() {
                Some(i) => self.forward(i, field::Message::KeyPress(key)),
                None => Command::none(),
            },
            Msg::Next => {
                let change = self.focus.focus_next();
                self.apply_focus(change)
            }
            Msg::Settle => {
                let now = Instant::now();
                for f in &mut self.fields {
                    f.tick(now);
                }
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame) {
        let areas: [Rect; 2] =
            Layout::vertical([Constraint::Length(3); 2]).areas(frame.area());
        for (f, area) in self.fields.iter().zip(areas) {
            f.view(frame, area);
        }
    }
}

fn type_text(prog: &mut TestProgram<Form>, text: &str) {
    for c in text.chars() {
        prog.send(Msg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
    }
    prog.drain_messages();
    prog.send(Msg::Settle);
}

fn press(prog: &mut TestProgram<Form>, code: KeyCode) {
    prog.send(Msg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    prog.drain_messages();
    prog.send(Msg::Settle);
}

#[test]
fn first_field_starts_focused_with_resting_label() {
    let mut prog = TestProgram::<Form>::new(());
    prog.drain_messages();
    let form = prog.model();
    assert!(form.fields[NAME].focused());
    assert!(!form.fields[EMAIL].focused());
    assert_eq!(form.fields[NAME].label_state(), LabelState::Resting);
}

#[test]
fn typing_raises_label_onto_frame() {
    let mut prog = TestProgram::<Form>::new(());
    prog.drain_messages();
    type_text(&mut prog, "Ada");

    assert_eq!(prog.model().fields[NAME].value(), "Ada");
    assert_eq!(prog.model().fields[NAME].label_state(), LabelState::Raised);

    let screen = prog.render_string(16, 6);
    let rows: Vec<&str> = screen.lines().collect();
    assert!(rows[0].contains("Name"), "{screen}");
    assert!(rows[1].contains("Ada"), "{screen}");
    assert!(rows[4].contains("Email"), "{screen}");
}

#[test]
fn email_field_tracks_validation() {
    let mut prog = TestProgram::<Form>::new(());
    prog.drain_messages();
    prog.send(Msg::Next);
    prog.drain_messages();
    assert!(prog.model().fields[EMAIL].focused());

    type_text(&mut prog, "ada@");
    assert_eq!(
        prog.model().fields[EMAIL].validation_state(),
        ValidationState::Invalid
    );

    type_text(&mut prog, "example.com");
    assert_eq!(
        prog.model().fields[EMAIL].validation_state(),
        ValidationState::Valid
    );

    for _ in 0.."ada@example.com".len() {
        press(&mut prog, KeyCode::Backspace);
    }
    assert_eq!(
        prog.model().fields[EMAIL].validation_state(),
        ValidationState::None
    );
}

#[test]
fn enter_returns_and_defocuses() {
    let mut prog = TestProgram::<Form>::new(());
    prog.drain_messages();
    type_text(&mut prog, "Ada");
    press(&mut prog, KeyCode::Enter);

    let form = prog.model();
    assert_eq!(form.returned, vec![(NAME, "Ada".to_string())]);
    assert!(!form.fields[NAME].focused());
    assert_eq!(form.focus.focused(), None);
    assert_eq!(form.fields[NAME].label_state(), LabelState::Raised);
    assert_eq!(form.fields[NAME].underline_fraction(), 0.0);
}

#[test]
fn enter_on_empty_field_rests_label() {
    let mut prog = TestProgram::<Form>::new(());
    prog.drain_messages();
    press(&mut prog, KeyCode::Enter);

    let form = prog.model();
    assert_eq!(form.returned, vec![(NAME, String::new())]);
    assert_eq!(form.fields[NAME].label_state(), LabelState::Resting);
}

#[test]
fn moving_focus_blurs_previous_field() {
    let mut prog = TestProgram::<Form>::new(());
    prog.drain_messages();
    type_text(&mut prog, "Ada");
    prog.send(Msg::Next);
    prog.drain_messages();
    prog.send(Msg::Settle);

    let form = prog.model();
    assert!(!form.fields[NAME].focused());
    assert!(form.fields[EMAIL].focused());
    assert_eq!(form.fields[NAME].underline_fraction(), 0.0);
    assert_eq!(form.fields[EMAIL].underline_fraction(), 1.0);
    assert_eq!(form.fields[NAME].label_state(), LabelState::Raised);
}
