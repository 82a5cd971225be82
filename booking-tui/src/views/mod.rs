//! View state
//!
//! Every screen is a plain state struct plus a key handler. Key handlers only
//! edit local state and report an [`Intent`]; anything that talks to the
//! backend is an async method the [`crate::App`] router calls with the API.

pub mod field;
pub mod home;
pub mod login;
pub mod my_reservations;
pub mod reservation;
pub mod signup;

#[cfg(test)]
pub(crate) mod testing;

pub use field::TextField;
pub use home::HomeMenu;
pub use login::LoginForm;
pub use my_reservations::MyReservations;
pub use reservation::{ReservationPage, Step};
pub use signup::SignupForm;

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Signup,
    Login,
    Reservation,
    MyReservations,
}

impl View {
    /// Screens behind the login
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Reservation | Self::MyReservations)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Modal message the user acknowledges with a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Result of a form submission: the notice to show, `Ok` when it went through
pub type Feedback = Result<Notice, Notice>;

/// Action waiting for a yes/no answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    CancelReservation(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub prompt: String,
    pub action: ConfirmAction,
}

impl Confirm {
    pub fn cancel_reservation(id: i64) -> Self {
        Self {
            prompt: "Really cancel this reservation?".to_string(),
            action: ConfirmAction::CancelReservation(id),
        }
    }
}

/// What a key press asks the router to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    None,
    Quit,
    Open(View),
    Back,
    Submit,
    Next,
    Previous,
    ShowTables,
    Book(i64),
    Cancel(i64),
    Reload,
    Notify(Notice),
    Logout,
    /// A confirmation prompt was answered with yes
    Confirmed(ConfirmAction),
}

impl Intent {
    /// Whether dispatching this may wait on the backend
    pub fn calls_backend(&self) -> bool {
        matches!(
            self,
            Self::Submit
                | Self::ShowTables
                | Self::Book(_)
                | Self::Reload
                | Self::Logout
                | Self::Confirmed(_)
                | Self::Open(View::MyReservations)
        )
    }
}

/// Move a focus index forward or backward with wrap-around
pub(crate) fn cycle(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(cycle(0, 3, true), 1);
        assert_eq!(cycle(2, 3, true), 0);
        assert_eq!(cycle(0, 3, false), 2);
        assert_eq!(cycle(0, 0, true), 0);
    }

    #[test]
    fn test_backend_intents() {
        assert!(Intent::Submit.calls_backend());
        assert!(Intent::Open(View::MyReservations).calls_backend());
        assert!(Intent::Confirmed(ConfirmAction::CancelReservation(3)).calls_backend());
        assert!(!Intent::Open(View::Login).calls_backend());
        assert!(!Intent::Next.calls_backend());
        assert!(!Intent::Cancel(3).calls_backend());
    }

    #[test]
    fn test_login_gated_views() {
        assert!(View::Reservation.requires_login());
        assert!(View::MyReservations.requires_login());
        assert!(!View::Signup.requires_login());
        assert!(!View::Home.requires_login());
    }
}
