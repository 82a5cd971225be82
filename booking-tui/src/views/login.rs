//! Login form

use booking_client::BookingApi;
use crossterm::event::{KeyCode, KeyEvent};
use shared::client::LoginRequest;

use super::{Feedback, Intent, Notice, TextField, cycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Username,
    Password,
    Back,
    Submit,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 4] = [
        LoginFocus::Username,
        LoginFocus::Password,
        LoginFocus::Back,
        LoginFocus::Submit,
    ];
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginFocus,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: TextField::new("Username"),
            password: TextField::masked("Password"),
            focus: LoginFocus::default(),
        }
    }
}

impl LoginForm {
    pub fn set_username(&mut self, value: &str) {
        self.username.set(value);
    }

    pub fn set_password(&mut self, value: &str) {
        self.password.set(value);
    }

    /// `POST /login`; the session cookie lands in the client's jar
    pub async fn submit(&mut self, api: &dyn BookingApi) -> Feedback {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(Notice::error("Please enter your username and password"));
        }

        let request = LoginRequest {
            username: self.username.value().to_string(),
            password: self.password.value().to_string(),
        };
        match api.login(&request).await {
            Ok(_) => Ok(Notice::info("Login successful!")),
            Err(e) => {
                tracing::warn!(username = %request.username, error = %e, "Login failed");
                Err(Notice::error(e.message_or("Login failed")))
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Intent {
        match key.code {
            KeyCode::Esc => Intent::Back,
            KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => {
                let idx = LoginFocus::ORDER
                    .iter()
                    .position(|f| *f == self.focus)
                    .unwrap_or(0);
                let forward = matches!(key.code, KeyCode::Tab | KeyCode::Down);
                self.focus = LoginFocus::ORDER[cycle(idx, LoginFocus::ORDER.len(), forward)];
                Intent::None
            }
            KeyCode::Enter => match self.focus {
                LoginFocus::Back => Intent::Back,
                _ => Intent::Submit,
            },
            _ => {
                match self.focus {
                    LoginFocus::Username => {
                        self.username.edit(key);
                    }
                    LoginFocus::Password => {
                        self.password.edit(key);
                    }
                    LoginFocus::Back | LoginFocus::Submit => {}
                }
                Intent::None
            }
        }
    }
}
