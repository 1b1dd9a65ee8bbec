use iced::{
    Element, Length, Task, Color, Alignment,
};
use iced::widget::{
    Column, Row, Container, Text, Button, TextInput, Space, Svg, svg, text_input,
};
use log::{error, info};
use tokio::task;

use crate::controller::{FormController, PendingSave};
use crate::dialogs;
use crate::error::PassError;
use crate::storage::StoreFile;

const LOGO: &[u8] = include_bytes!("../assets/logo.svg");
const WEBSITE_INPUT: &str = "website";
const LABEL_WIDTH: f32 = 130.0;
const SIDE_BUTTON_WIDTH: f32 = 160.0;

#[derive(Debug, Clone)]
pub enum Message {
    WebsiteChanged(String),
    UsernameChanged(String),
    PasswordChanged(String),
    Search,
    Generate,
    Add,
    SaveAnswered(Option<PendingSave>),
    DialogClosed,
}

pub struct PassKeepApp {
    controller: FormController,
    // while a native dialog is up the form takes no input
    dialog_open: bool,
    status_message: String,
}

impl PassKeepApp {
    pub fn new(store: StoreFile) -> (Self, Task<Message>) {
        info!("credential store at {:?}", store.path());
        (
            PassKeepApp {
                controller: FormController::new(store),
                dialog_open: false,
                status_message: String::new(),
            },
            focus_website(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WebsiteChanged(s) => {
                if !self.dialog_open {
                    self.controller.form_mut().website = s;
                }
            }
            Message::UsernameChanged(s) => {
                if !self.dialog_open {
                    self.controller.form_mut().username = s;
                }
            }
            Message::PasswordChanged(s) => {
                if !self.dialog_open {
                    self.controller.form_mut().password = s;
                }
            }
            Message::Generate => {
                if self.dialog_open {
                    return Task::none();
                }
                let password = self.controller.generate();
                self.status_message = "Password copied to clipboard".to_string();
                return iced::clipboard::write(password);
            }
            Message::Add => {
                if self.dialog_open {
                    return Task::none();
                }
                self.dialog_open = true;
                return match self.controller.prepare_save() {
                    Ok(pending) => Task::perform(run_dialog(move || {
                        dialogs::confirm_save(pending)
                    }), |answer| Message::SaveAnswered(answer.flatten())),
                    Err(e) => {
                        self.status_message = "Nothing saved".to_string();
                        Task::perform(run_dialog(move || {
                            dialogs::show_error(&e)
                        }), |_| Message::DialogClosed)
                    }
                };
            }
            Message::SaveAnswered(Some(pending)) => {
                let website = pending.website().to_string();
                match self.controller.confirm_save(pending) {
                    Ok(()) => {
                        self.dialog_open = false;
                        self.status_message = format!("Saved credentials for {}", website);
                        return focus_website();
                    }
                    Err(e) => {
                        error!("saving {:?} to {:?} failed: {}", website, self.controller.store().path(), e);
                        self.status_message = "Save failed".to_string();
                        return Task::perform(run_dialog(move || {
                            dialogs::show_error(&e)
                        }), |_| Message::DialogClosed);
                    }
                }
            }
            Message::SaveAnswered(None) => {
                self.dialog_open = false;
                self.status_message = "Nothing saved".to_string();
            }
            Message::Search => {
                if self.dialog_open {
                    return Task::none();
                }
                self.dialog_open = true;
                return match self.controller.search() {
                    Ok((website, credential)) => {
                        self.status_message = format!("Found credentials for {}", website);
                        Task::perform(run_dialog(move || {
                            dialogs::show_credential(&website, &credential)
                        }), |_| Message::DialogClosed)
                    }
                    Err(e) => {
                        if matches!(e, PassError::Io { .. } | PassError::Malformed { .. }) {
                            error!("search failed: {}", e);
                        }
                        self.status_message.clear();
                        Task::perform(run_dialog(move || {
                            dialogs::show_error(&e)
                        }), |_| Message::DialogClosed)
                    }
                };
            }
            Message::DialogClosed => {
                self.dialog_open = false;
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let form = self.controller.form();

        let logo = Container::new(
            Svg::new(svg::Handle::from_memory(LOGO))
                .width(Length::Fixed(200.0))
                .height(Length::Fixed(200.0))
        )
        .center_x(Length::Fill);

        let mut website_input = self.field(&form.website, Message::WebsiteChanged)
            .id(text_input::Id::new(WEBSITE_INPUT));
        if !self.dialog_open {
            website_input = website_input.on_submit(Message::Search);
        }

        let website_row = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(label("Website:"))
            .push(website_input)
            .push(self.action_button("Search", Message::Search, Length::Fixed(SIDE_BUTTON_WIDTH)));

        let username_row = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(label("Email/Username:"))
            .push(self.field(&form.username, Message::UsernameChanged));

        let password_row = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(label("Password:"))
            .push(self.field(&form.password, Message::PasswordChanged))
            .push(self.action_button("Generate password", Message::Generate, Length::Fixed(SIDE_BUTTON_WIDTH)));

        let add_row = Row::new()
            .push(Space::with_width(Length::Fixed(LABEL_WIDTH + 10.0)))
            .push(self.action_button("Add", Message::Add, Length::Fill));

        let status = Text::new(&self.status_message)
            .size(12)
            .style(|_theme| {
                iced::widget::text::Style {
                    color: Some(Color::from_rgb(0.4, 0.4, 0.4)),
                }
            });

        let content = Column::new()
            .padding(50)
            .spacing(12)
            .width(Length::Fill)
            .push(logo)
            .push(website_row)
            .push(username_row)
            .push(password_row)
            .push(add_row)
            .push(status);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn field<'a>(&self, value: &'a str, on_input: fn(String) -> Message) -> TextInput<'a, Message> {
        let input = TextInput::new("", value)
            .padding(8)
            .size(14)
            .width(Length::Fill);
        if self.dialog_open { input } else { input.on_input(on_input) }
    }

    fn action_button(&self, text: &'static str, message: Message, width: Length) -> Button<'_, Message> {
        let button = Button::new(
            Text::new(text)
                .size(14)
                .align_x(iced::alignment::Horizontal::Center)
                .width(Length::Fill)
        )
        .padding(8)
        .width(width);
        if self.dialog_open { button } else { button.on_press(message) }
    }
}

fn label(text: &'static str) -> Text<'static> {
    Text::new(text)
        .size(14)
        .width(Length::Fixed(LABEL_WIDTH))
}

/// Dialogs block until dismissed, so they run on the blocking pool.
/// `None` means the dialog task itself died.
async fn run_dialog<T, F>(show: F) -> Option<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    match task::spawn_blocking(show).await {
        Ok(answer) => Some(answer),
        Err(e) => {
            error!("dialog task failed: {}", e);
            None
        }
    }
}

fn focus_website() -> Task<Message> {
    text_input::focus(text_input::Id::new(WEBSITE_INPUT))
}
