//! Landing screen: welcome text and the signup / login entry points

use crossterm::event::{KeyCode, KeyEvent};

use super::{Intent, View, cycle};

pub const WELCOME: &str = "Welcome to Dongguk Restaurant!";
pub const TAGLINE: &str = "Sign up or log in, then book a table for the date and time you want.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeButton {
    #[default]
    Signup,
    Login,
}

#[derive(Debug, Clone, Default)]
pub struct HomeMenu {
    pub focus: HomeButton,
}

impl HomeMenu {
    const BUTTONS: [HomeButton; 2] = [HomeButton::Signup, HomeButton::Login];

    pub fn handle_key(&mut self, key: KeyEvent) -> Intent {
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Left | KeyCode::BackTab => {
                let idx = Self::BUTTONS.iter().position(|b| *b == self.focus).unwrap_or(0);
                let forward = matches!(key.code, KeyCode::Tab | KeyCode::Right);
                self.focus = Self::BUTTONS[cycle(idx, Self::BUTTONS.len(), forward)];
                Intent::None
            }
            KeyCode::Enter => match self.focus {
                HomeButton::Signup => Intent::Open(View::Signup),
                HomeButton::Login => Intent::Open(View::Login),
            },
            KeyCode::Char('s') => Intent::Open(View::Signup),
            KeyCode::Char('l') => Intent::Open(View::Login),
            KeyCode::Char('q') => Intent::Quit,
            _ => Intent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_home_navigation() {
        let mut home = HomeMenu::default();
        assert_eq!(home.handle_key(key(KeyCode::Enter)), Intent::Open(View::Signup));

        home.handle_key(key(KeyCode::Tab));
        assert_eq!(home.focus, HomeButton::Login);
        assert_eq!(home.handle_key(key(KeyCode::Enter)), Intent::Open(View::Login));

        assert_eq!(home.handle_key(key(KeyCode::Char('q'))), Intent::Quit);
    }

    #[test]
    fn test_esc_does_not_quit() {
        let mut home = HomeMenu::default();
        assert_eq!(home.handle_key(key(KeyCode::Esc)), Intent::None);
    }
}
