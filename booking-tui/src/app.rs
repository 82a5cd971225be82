//! View router
//!
//! Owns the current screen, the login flag and the modal layer (notice /
//! confirmation). Switching screens builds fresh view state, so a form never
//! shows what was typed the last time it was open.

use booking_client::BookingApi;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

use crate::views::{
    Confirm, ConfirmAction, HomeMenu, Intent, LoginForm, MyReservations, Notice, ReservationPage,
    SignupForm, View,
};

/// Current screen and its state
#[derive(Debug, Clone)]
pub enum Screen {
    Home(HomeMenu),
    Signup(SignupForm),
    Login(LoginForm),
    Reservation(ReservationPage),
    MyReservations(MyReservations),
}

impl Screen {
    pub fn view(&self) -> View {
        match self {
            Self::Home(_) => View::Home,
            Self::Signup(_) => View::Signup,
            Self::Login(_) => View::Login,
            Self::Reservation(_) => View::Reservation,
            Self::MyReservations(_) => View::MyReservations,
        }
    }
}

pub struct App {
    api: Arc<dyn BookingApi>,
    pub screen: Screen,
    pub logged_in: bool,
    pub notice: Option<Notice>,
    pub confirm: Option<Confirm>,
    pub should_quit: bool,
    /// A backend call is in flight
    pub loading: bool,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl App {
    pub fn new(api: Arc<dyn BookingApi>) -> Self {
        Self {
            api,
            screen: Screen::Home(HomeMenu::default()),
            logged_in: false,
            notice: None,
            confirm: None,
            should_quit: false,
            loading: false,
            today: local_today,
        }
    }

    /// Override the calendar (tests)
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn view(&self) -> View {
        self.screen.view()
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    /// Switch screens; login-only screens are ignored while logged out
    pub async fn navigate(&mut self, view: View) {
        if view.requires_login() && !self.logged_in {
            tracing::warn!(?view, "Navigation requires login");
            return;
        }
        tracing::debug!(from = ?self.view(), to = ?view, "Navigate");

        self.screen = match view {
            View::Home => Screen::Home(HomeMenu::default()),
            View::Signup => Screen::Signup(SignupForm::default()),
            View::Login => Screen::Login(LoginForm::default()),
            View::Reservation => Screen::Reservation(ReservationPage::default()),
            View::MyReservations => {
                let mut list = MyReservations::default();
                if let Some(notice) = list.load(self.api.as_ref()).await {
                    self.notice = Some(notice);
                }
                Screen::MyReservations(list)
            }
        };
    }

    /// `POST /logout`, then back to the landing screen whatever the outcome
    pub async fn logout(&mut self) {
        if let Err(e) = self.api.logout().await {
            tracing::warn!(error = %e, "Logout request failed");
        }
        self.logged_in = false;
        self.navigate(View::Home).await;
        tracing::info!("Logged out");
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        let intent = self.key_intent(key);
        self.dispatch(intent).await;
    }

    /// Synchronous half of a key press: modal keys, nav keys, then the screen
    ///
    /// The event loop draws between this and [`App::dispatch`], so a
    /// backend call shows the loading popup while it runs.
    pub fn key_intent(&mut self, key: KeyEvent) -> Intent {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Intent::Quit;
        }

        // Modals swallow every key
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.notice = None;
            }
            return Intent::None;
        }
        if let Some(confirm) = self.confirm.take() {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    Intent::Confirmed(confirm.action)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Intent::None,
                _ => {
                    self.confirm = Some(confirm);
                    Intent::None
                }
            };
        }

        if self.logged_in {
            match key.code {
                KeyCode::F(1) => return Intent::Open(View::Reservation),
                KeyCode::F(2) => return Intent::Open(View::MyReservations),
                KeyCode::F(3) => return Intent::Logout,
                _ => {}
            }
        }

        let today = self.today();
        match &mut self.screen {
            Screen::Home(menu) => menu.handle_key(key),
            Screen::Signup(form) => form.handle_key(key),
            Screen::Login(form) => form.handle_key(key),
            Screen::Reservation(page) => page.handle_key(key, today),
            Screen::MyReservations(list) => list.handle_key(key),
        }
    }

    pub async fn dispatch(&mut self, intent: Intent) {
        let api = Arc::clone(&self.api);
        let today = self.today();

        match intent {
            Intent::None => {}
            Intent::Quit => self.should_quit = true,
            Intent::Open(view) => self.navigate(view).await,
            Intent::Notify(notice) => self.notice = Some(notice),
            Intent::Back => {
                if matches!(self.screen, Screen::Signup(_) | Screen::Login(_)) {
                    self.navigate(View::Home).await;
                }
            }
            Intent::Submit => match &mut self.screen {
                Screen::Signup(form) => {
                    let feedback = form.submit(api.as_ref()).await;
                    let success = feedback.is_ok();
                    self.notice = Some(feedback.unwrap_or_else(|n| n));
                    if success {
                        self.navigate(View::Login).await;
                    }
                }
                Screen::Login(form) => {
                    let feedback = form.submit(api.as_ref()).await;
                    let success = feedback.is_ok();
                    self.notice = Some(feedback.unwrap_or_else(|n| n));
                    if success {
                        self.logged_in = true;
                        self.navigate(View::Reservation).await;
                    }
                }
                _ => {}
            },
            Intent::Next => {
                if let Screen::Reservation(page) = &mut self.screen
                    && let Err(notice) = page.next(today)
                {
                    self.notice = Some(notice);
                }
            }
            Intent::Previous => {
                if let Screen::Reservation(page) = &mut self.screen {
                    page.previous();
                }
            }
            Intent::ShowTables => {
                if let Screen::Reservation(page) = &mut self.screen {
                    self.notice = page.show_tables(api.as_ref()).await;
                }
            }
            Intent::Book(table_id) => {
                if let Screen::Reservation(page) = &mut self.screen {
                    self.notice = page.reserve(api.as_ref(), table_id).await;
                }
            }
            Intent::Cancel(id) => {
                if matches!(self.screen, Screen::MyReservations(_)) {
                    self.confirm = Some(Confirm::cancel_reservation(id));
                }
            }
            Intent::Reload => {
                if let Screen::MyReservations(list) = &mut self.screen {
                    self.notice = list.load(api.as_ref()).await;
                }
            }
            Intent::Confirmed(ConfirmAction::CancelReservation(id)) => {
                if let Screen::MyReservations(list) = &mut self.screen {
                    self.notice = list.cancel(api.as_ref(), id).await;
                }
            }
            Intent::Logout => self.logout().await,
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::{FakeApi, reservation, table};
    use crate::views::{NoticeLevel, Step};
    use shared::models::MealTime;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn app(api: &Arc<FakeApi>) -> App {
        let api: Arc<dyn BookingApi> = api.clone();
        App::new(api).with_today(today)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
    }

    async fn log_in(app: &mut App) {
        app.navigate(View::Login).await;
        if let Screen::Login(form) = &mut app.screen {
            form.set_username("hong");
            form.set_password("pw1234");
        }
        app.dispatch(Intent::Submit).await;
        app.notice = None;
    }

    #[tokio::test]
    async fn test_starts_at_home_logged_out() {
        let api = Arc::new(FakeApi::default());
        let app = app(&api);
        assert_eq!(app.view(), View::Home);
        assert!(!app.logged_in);
    }

    #[tokio::test]
    async fn test_signup_success_goes_to_login() {
        let api = Arc::new(FakeApi::default());
        let mut app = app(&api);

        app.handle_key(key(KeyCode::Char('s'))).await;
        assert_eq!(app.view(), View::Signup);

        type_text(&mut app, "hong").await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "pw1234").await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "Hong").await;
        app.handle_key(key(KeyCode::Enter)).await;

        assert_eq!(app.view(), View::Login);
        assert_eq!(app.notice, Some(Notice::info("Signup complete!")));
        assert_eq!(api.signups.lock().unwrap()[0].name, "Hong");
    }

    #[tokio::test]
    async fn test_signup_failure_stays() {
        let api = Arc::new(FakeApi::default());
        api.fail("signup", 409, "ID already exists");
        let mut app = app(&api);
        app.navigate(View::Signup).await;
        if let Screen::Signup(form) = &mut app.screen {
            form.set_username("hong");
            form.set_password("pw");
            form.set_name("Hong");
        }
        app.dispatch(Intent::Submit).await;

        assert_eq!(app.view(), View::Signup);
        assert_eq!(app.notice, Some(Notice::error("ID already exists")));
    }

    #[tokio::test]
    async fn test_login_opens_reservation_wizard() {
        let api = Arc::new(FakeApi::default());
        let mut app = app(&api);
        log_in(&mut app).await;

        assert!(app.logged_in);
        assert_eq!(app.view(), View::Reservation);
    }

    #[tokio::test]
    async fn test_login_failure_keeps_user_out() {
        let api = Arc::new(FakeApi::default());
        api.fail("login", 401, "Wrong password");
        let mut app = app(&api);
        app.navigate(View::Login).await;
        if let Screen::Login(form) = &mut app.screen {
            form.set_username("hong");
            form.set_password("bad");
        }
        app.dispatch(Intent::Submit).await;

        assert!(!app.logged_in);
        assert_eq!(app.view(), View::Login);
        assert_eq!(app.notice.as_ref().unwrap().level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn test_back_returns_home() {
        let api = Arc::new(FakeApi::default());
        let mut app = app(&api);
        app.navigate(View::Login).await;
        app.handle_key(key(KeyCode::Esc)).await;
        assert_eq!(app.view(), View::Home);
    }

    #[tokio::test]
    async fn test_gated_views_need_login() {
        let api = Arc::new(FakeApi::default());
        let mut app = app(&api);

        app.navigate(View::MyReservations).await;
        assert_eq!(app.view(), View::Home);
        app.handle_key(key(KeyCode::F(2))).await;
        assert_eq!(app.view(), View::Home);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_nav_keys_when_logged_in() {
        let api = Arc::new(FakeApi::default());
        *api.reservations.lock().unwrap() = vec![reservation(1, "2026-10-25", MealTime::Lunch)];
        let mut app = app(&api);
        log_in(&mut app).await;

        app.handle_key(key(KeyCode::F(2))).await;
        assert_eq!(app.view(), View::MyReservations);
        match &app.screen {
            Screen::MyReservations(list) => assert_eq!(list.reservations.len(), 1),
            other => panic!("unexpected screen {:?}", other.view()),
        }

        app.handle_key(key(KeyCode::F(1))).await;
        assert_eq!(app.view(), View::Reservation);

        app.handle_key(key(KeyCode::F(3))).await;
        assert!(!app.logged_in);
        assert_eq!(app.view(), View::Home);
        assert!(api.calls().contains(&"POST /logout".to_string()));
    }

    #[tokio::test]
    async fn test_logout_clears_session_even_on_error() {
        let api = Arc::new(FakeApi::default());
        api.fail("logout", 500, "boom");
        let mut app = app(&api);
        log_in(&mut app).await;

        app.logout().await;
        assert!(!app.logged_in);
        assert_eq!(app.view(), View::Home);
        assert!(app.notice.is_none());
    }

    #[tokio::test]
    async fn test_wizard_through_the_router() {
        let api = Arc::new(FakeApi::with_tables(vec![
            table(1, "Window", 2, false),
            table(2, "Room", 6, false),
        ]));
        let mut app = app(&api);
        log_in(&mut app).await;

        // Step 1: Enter without a date
        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(
            app.notice,
            Some(Notice::error("Please select a date first"))
        );
        app.handle_key(key(KeyCode::Enter)).await;
        assert!(app.notice.is_none());

        type_text(&mut app, "2026-10-30").await;
        app.handle_key(key(KeyCode::Enter)).await;

        // Step 2
        type_text(&mut app, "홍길동").await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "010-9876-5432").await;
        app.handle_key(key(KeyCode::Tab)).await;
        type_text(&mut app, "1111222233334444").await;
        app.handle_key(key(KeyCode::Enter)).await;

        let Screen::Reservation(page) = &app.screen else {
            panic!("expected wizard");
        };
        assert_eq!(page.step, Step::Tables);
        assert_eq!(page.phone.value(), "01098765432");

        // Step 3: book the first table
        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.notice, Some(Notice::info("Reservation complete!")));
        let created = api.created.lock().unwrap().clone();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].table_id, 1);
        assert_eq!(created[0].date.to_string(), "2026-10-30");
    }

    #[tokio::test]
    async fn test_cancel_needs_confirmation() {
        let api = Arc::new(FakeApi::default());
        *api.reservations.lock().unwrap() = vec![
            reservation(1, "2026-10-25", MealTime::Dinner),
            reservation(2, "2026-10-25", MealTime::Lunch),
        ];
        let mut app = app(&api);
        log_in(&mut app).await;
        app.navigate(View::MyReservations).await;

        // Declined
        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.confirm, Some(Confirm::cancel_reservation(2)));
        app.handle_key(key(KeyCode::Char('n'))).await;
        assert!(app.confirm.is_none());
        assert!(!api.calls().iter().any(|c| c.starts_with("DELETE")));

        // Unrelated keys keep the prompt open
        app.handle_key(key(KeyCode::Enter)).await;
        app.handle_key(key(KeyCode::Char('x'))).await;
        assert!(app.confirm.is_some());

        // Accepted
        app.handle_key(key(KeyCode::Char('y'))).await;
        assert!(app.confirm.is_none());
        assert_eq!(app.notice, Some(Notice::info("Reservation cancelled")));
        assert!(api.calls().contains(&"DELETE /reservations/2".to_string()));
        match &app.screen {
            Screen::MyReservations(list) => {
                assert_eq!(list.reservations.len(), 1);
                assert_eq!(list.reservations[0].id, 1);
            }
            other => panic!("unexpected screen {:?}", other.view()),
        }
    }

    #[tokio::test]
    async fn test_load_failure_is_reported() {
        let api = Arc::new(FakeApi::default());
        api.fail("reservations", 500, "");
        let mut app = app(&api);
        log_in(&mut app).await;
        app.navigate(View::MyReservations).await;

        assert_eq!(app.view(), View::MyReservations);
        assert_eq!(
            app.notice,
            Some(Notice::error("Could not load reservations"))
        );
    }

    #[tokio::test]
    async fn test_reload_key_refetches_list() {
        let api = Arc::new(FakeApi::default());
        let mut app = app(&api);
        log_in(&mut app).await;
        app.navigate(View::MyReservations).await;

        *api.reservations.lock().unwrap() = vec![reservation(7, "2026-10-28", MealTime::Dinner)];
        app.handle_key(key(KeyCode::Char('r'))).await;
        match &app.screen {
            Screen::MyReservations(list) => assert_eq!(list.reservations[0].id, 7),
            other => panic!("unexpected screen {:?}", other.view()),
        }
        assert!(app.notice.is_none());

        api.fail("reservations", 503, "Database is busy");
        app.handle_key(key(KeyCode::Char('r'))).await;
        assert_eq!(app.notice, Some(Notice::error("Database is busy")));
        match &app.screen {
            Screen::MyReservations(list) => assert_eq!(list.reservations.len(), 1),
            other => panic!("unexpected screen {:?}", other.view()),
        }
    }

    #[tokio::test]
    async fn test_loading_flag_cleared_after_dispatch() {
        let api = Arc::new(FakeApi::default());
        let mut app = app(&api);
        log_in(&mut app).await;

        let intent = app.key_intent(key(KeyCode::F(3)));
        assert_eq!(intent, Intent::Logout);
        assert!(intent.calls_backend());
        // Nothing has been sent yet
        assert!(!api.calls().contains(&"POST /logout".to_string()));

        app.loading = true;
        app.dispatch(intent).await;
        assert!(!app.loading);
        assert!(!app.logged_in);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_anywhere() {
        let api = Arc::new(FakeApi::default());
        let mut app = app(&api);
        app.navigate(View::Signup).await;
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await;
        assert!(app.should_quit);
    }
}
