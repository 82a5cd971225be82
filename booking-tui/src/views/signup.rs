//! Account signup form
//!
//! The name is checked on every keystroke; submit is refused while the check
//! fails or any field is blank.

use booking_client::BookingApi;
use crossterm::event::{KeyCode, KeyEvent};
use shared::client::SignupRequest;
use shared::validation::{FieldError, validate_name};

use super::{Feedback, Intent, Notice, TextField, cycle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupFocus {
    #[default]
    Username,
    Password,
    Name,
    Back,
    Submit,
}

impl SignupFocus {
    const ORDER: [SignupFocus; 5] = [
        SignupFocus::Username,
        SignupFocus::Password,
        SignupFocus::Name,
        SignupFocus::Back,
        SignupFocus::Submit,
    ];
}

#[derive(Debug, Clone)]
pub struct SignupForm {
    pub username: TextField,
    pub password: TextField,
    pub name: TextField,
    pub name_error: Option<FieldError>,
    pub focus: SignupFocus,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            username: TextField::new("Username"),
            password: TextField::masked("Password"),
            name: TextField::new("Name (Hangul/English)"),
            name_error: None,
            focus: SignupFocus::default(),
        }
    }
}

impl SignupForm {
    pub fn set_username(&mut self, value: &str) {
        self.username.set(value);
    }

    pub fn set_password(&mut self, value: &str) {
        self.password.set(value);
    }

    pub fn set_name(&mut self, value: &str) {
        self.name.set(value);
        self.name_error = validate_name(value).err();
    }

    fn request(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.value().to_string(),
            password: self.password.value().to_string(),
            name: self.name.value().to_string(),
        }
    }

    /// `POST /signup`
    pub async fn submit(&mut self, api: &dyn BookingApi) -> Feedback {
        if self.username.is_empty() || self.password.is_empty() || self.name.is_empty() {
            return Err(Notice::error("Please fill in every field"));
        }
        if self.name_error.is_some() {
            return Err(Notice::error("Check the name format!"));
        }

        let request = self.request();
        match api.signup(&request).await {
            Ok(_) => {
                tracing::info!(username = %request.username, "Signed up");
                Ok(Notice::info("Signup complete!"))
            }
            Err(e) => {
                tracing::warn!(username = %request.username, error = %e, "Signup failed");
                Err(Notice::error(e.message_or("Signup failed")))
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Intent {
        match key.code {
            KeyCode::Esc => return Intent::Back,
            KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => {
                let idx = SignupFocus::ORDER
                    .iter()
                    .position(|f| *f == self.focus)
                    .unwrap_or(0);
                let forward = matches!(key.code, KeyCode::Tab | KeyCode::Down);
                self.focus = SignupFocus::ORDER[cycle(idx, SignupFocus::ORDER.len(), forward)];
                return Intent::None;
            }
            KeyCode::Enter => {
                return match self.focus {
                    SignupFocus::Back => Intent::Back,
                    _ => Intent::Submit,
                };
            }
            _ => {}
        }

        match self.focus {
            SignupFocus::Username => {
                self.username.edit(key);
            }
            SignupFocus::Password => {
                self.password.edit(key);
            }
            SignupFocus::Name => {
                let raw = self.name.edit(key);
                self.set_name(&raw);
            }
            SignupFocus::Back | SignupFocus::Submit => {}
        }
        Intent::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::NoticeLevel;
    use crate::views::testing::FakeApi;
    use crossterm::event::KeyModifiers;

    fn filled() -> SignupForm {
        let mut form = SignupForm::default();
        form.set_username("hong");
        form.set_password("pw1234");
        form.set_name("홍길동");
        form
    }

    #[test]
    fn test_name_is_validated_live() {
        let mut form = SignupForm::default();
        form.set_name("hong1");
        assert_eq!(form.name_error, Some(FieldError::InvalidName));
        form.set_name("Hong");
        assert_eq!(form.name_error, None);
    }

    #[tokio::test]
    async fn test_submit_posts_credentials() {
        let api = FakeApi::default();
        let mut form = filled();

        let notice = form.submit(&api).await.unwrap();
        assert_eq!(notice, Notice::info("Signup complete!"));

        let sent = api.signups.lock().unwrap().clone();
        assert_eq!(
            sent,
            vec![SignupRequest {
                username: "hong".into(),
                password: "pw1234".into(),
                name: "홍길동".into(),
            }]
        );
    }

    #[tokio::test]
    async fn test_invalid_name_blocks_submit() {
        let api = FakeApi::default();
        let mut form = filled();
        form.set_name("h0ng");

        let notice = form.submit(&api).await.unwrap_err();
        assert_eq!(notice.text, "Check the name format!");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_field_blocks_submit() {
        let api = FakeApi::default();
        let mut form = filled();
        form.set_password("");

        assert!(form.submit(&api).await.is_err());
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_server_message_is_shown() {
        let api = FakeApi::default();
        api.fail("signup", 409, "ID already exists");
        let mut form = filled();

        let notice = form.submit(&api).await.unwrap_err();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "ID already exists");

        api.fail("signup", 500, "");
        let notice = form.submit(&api).await.unwrap_err();
        assert_eq!(notice.text, "Signup failed");
    }

    #[test]
    fn test_typing_into_name_field() {
        let mut form = SignupForm::default();
        form.focus = SignupFocus::Name;
        for c in "Kim7".chars() {
            form.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(form.name.value(), "Kim7");
        assert_eq!(form.name_error, Some(FieldError::InvalidName));

        form.handle_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(form.name_error, None);
    }

    #[test]
    fn test_keys_map_to_intents() {
        let mut form = SignupForm::default();
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(form.handle_key(enter), Intent::Submit);

        form.focus = SignupFocus::Back;
        assert_eq!(form.handle_key(enter), Intent::Back);
        assert_eq!(
            form.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Intent::Back
        );
    }
}
