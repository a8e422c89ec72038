//! # Signup Form Demo
//!
//! Three floating-label fields composed into one screen:
//! - Wrapping each field's messages in a parent message with the field index
//! - Cycling focus with `FocusRing` and forwarding the lost/gained pair
//! - Recoloring the email field from `email_state` on every change
//! - Reacting to `FieldEvent` notifications returned as commands
//!
//! Run with: `cargo run --example signup_form`
//! Set `FLOATFIELD_LOG=/tmp/floatfield.log` to capture `tracing` output.

use std::path::PathBuf;
use std::time::Duration;

use floatfield::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use floatfield::ratatui::layout::{Alignment, Constraint, Layout, Rect};
use floatfield::ratatui::style::{Color, Modifier, Style};
use floatfield::ratatui::text::{Line, Span};
use floatfield::ratatui::widgets::Paragraph;
use floatfield::ratatui::Frame;
use floatfield::widgets::field::{self, FieldEvent, FloatingLabelField, ValidationState};
use floatfield::widgets::focus::{FocusChange, FocusRing};
use floatfield::widgets::keyboard::KeyboardType;
use floatfield::widgets::validate::email_state;
use floatfield::{
    terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent,
};

const FIRST: usize = 0;
const LAST: usize = 1;
const EMAIL: usize = 2;

struct SignupForm {
    fields: [FloatingLabelField; 3],
    focus: FocusRing<3>,
    status: Option<(String, Color)>,
    status_generation: u64,
}

#[derive(Debug)]
enum Msg {
    Field(usize, field::Message),
    Key(KeyEvent),
    Paste(String),
    Resized(Rect),
    FocusNext,
    FocusPrev,
    ClearStatus(u64),
    Quit,
}

impl SignupForm {
    fn field_areas(area: Rect) -> [Rect; 3] {
        let [_, form, _, _] = Self::layout(area);
        Layout::vertical([Constraint::Length(3); 3]).areas(form)
    }

    fn layout(area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(9),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(area)
    }

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

    fn set_status(&mut self, text: String, color: Color) -> Command<Msg> {
        self.status = Some((text, color));
        self.status_generation += 1;
        let generation = self.status_generation;
        Command::tick(Duration::from_secs(3), move |_| Msg::ClearStatus(generation))
    }

    fn on_notify(&mut self, index: usize, event: FieldEvent) -> Command<Msg> {
        match event {
            FieldEvent::Changed(value) => {
                tracing::debug!(field = index, %value, "changed");
                if index == EMAIL {
                    self.fields[EMAIL].set_validation_state(email_state(&value));
                }
                Command::none()
            }
            FieldEvent::ShouldReturn(value) => {
                tracing::info!(field = index, %value, "returned");
                // The field has already given up focus.
                let _ = self.focus.clear();
                if index == EMAIL {
                    self.submit()
                } else {
                    let change = self.focus.focus(index + 1);
                    self.apply_focus(change)
                }
            }
            FieldEvent::BeginEditing | FieldEvent::EndEditing => Command::none(),
        }
    }

    fn submit(&mut self) -> Command<Msg> {
        let first = self.fields[FIRST].value();
        let last = self.fields[LAST].value();
        let email = self.fields[EMAIL].value();
        match self.fields[EMAIL].validation_state() {
            ValidationState::Valid if !first.is_empty() => {
                tracing::info!(%first, %last, %email, "signed up");
                self.set_status(format!("Welcome, {first}! We'll write to {email}."), Color::Green)
            }
            ValidationState::Valid => self.set_status("First name is required".into(), Color::Red),
            ValidationState::Invalid => {
                self.set_status("That email address looks wrong".into(), Color::Red)
            }
            ValidationState::None => self.set_status("Email is required".into(), Color::Red),
        }
    }
}

impl Model for SignupForm {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut form = SignupForm {
            fields: [
                FloatingLabelField::new("First name").with_key("first-name"),
                FloatingLabelField::new("Last name").with_key("last-name"),
                FloatingLabelField::new("Email")
                    .with_key("email")
                    .with_keyboard_type(KeyboardType::EmailAddress)
                    .with_raise_on_focus(true),
            ],
            focus: FocusRing::new(),
            status: None,
            status_generation: 0,
        };
        let change = form.focus.focus(FIRST);
        let mut cmds = vec![form.apply_focus(change)];
        // Later sizes arrive as resize events.
        if let Ok((width, height)) = floatfield::crossterm::terminal::size() {
            cmds.push(form.update(Msg::Resized(Rect::new(0, 0, width, height))));
        }
        (form, Command::batch(cmds))
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Field(i, field::Message::Notify(event)) => self.on_notify(i, event),
            Msg::Field(i, m) => self.forward(i, m),
            Msg::Key(key) => match self.focus.focused() {
                Some(i) => self.forward(i, field::Message::KeyPress(key)),
                None => Command::none(),
            },
            Msg::Paste(text) => match self.focus.focused() {
                Some(i) => self.forward(i, field::Message::Paste(text)),
                None => Command::none(),
            },
            Msg::Resized(area) => {
                let areas = Self::field_areas(area);
                let cmds: Vec<_> = (0..areas.len())
                    .map(|i| self.forward(i, field::Message::BoundsChanged(areas[i])))
                    .collect();
                Command::batch(cmds)
            }
            Msg::FocusNext => {
                let change = self.focus.focus_next();
                self.apply_focus(change)
            }
            Msg::FocusPrev => {
                let change = self.focus.focus_prev();
                self.apply_focus(change)
            }
            Msg::ClearStatus(generation) => {
                if generation == self.status_generation {
                    self.status = None;
                }
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let [title_area, _, status_area, help_area] = Self::layout(area);

        let title = Paragraph::new("Create an account")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(title, title_area);

        for (field, field_area) in self.fields.iter().zip(Self::field_areas(area)) {
            field.view(frame, field_area);
        }

        if let Some((ref text, color)) = self.status {
            let status = Paragraph::new(text.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(color));
            frame.render_widget(status, status_area);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" next  "),
            Span::styled("Shift+Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" prev  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" return  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, Rect { height: 1, ..help_area });
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let mut subs: Vec<Subscription<Msg>> = self
            .fields
            .iter()
            .enumerate()
            .flat_map(|(i, f)| {
                f.subscriptions()
                    .into_iter()
                    .map(move |s| s.map(move |m| Msg::Field(i, m)))
            })
            .collect();

        subs.push(terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                (KeyCode::Tab, KeyModifiers::NONE) => Some(Msg::FocusNext),
                (KeyCode::BackTab, _) => Some(Msg::FocusPrev),
                _ => Some(Msg::Key(key)),
            },
            TerminalEvent::Paste(text) => Some(Msg::Paste(text)),
            ev => ev.resized_area().map(Msg::Resized),
        }));
        subs
    }
}

#[floatfield::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        log_file: std::env::var_os("FLOATFIELD_LOG").map(PathBuf::from),
        title: Some("floatfield signup".into()),
        ..ProgramOptions::default()
    };
    floatfield::run_with::<SignupForm>((), options).await?;
    Ok(())
}
