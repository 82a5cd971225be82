//! The logged-in user's reservations, nearest first, with cancellation

use booking_client::BookingApi;
use crossterm::event::{KeyCode, KeyEvent};
use shared::models::{Reservation, sort_reservations};

use super::{Intent, Notice, cycle};

pub const SORT_HINT: &str = "Sorted by the nearest reservation";
pub const EMPTY_TEXT: &str = "You have no reservations.";

#[derive(Debug, Clone, Default)]
pub struct MyReservations {
    pub reservations: Vec<Reservation>,
    pub selected: usize,
    /// Set once the first load finished, successful or not
    pub loaded: bool,
}

impl MyReservations {
    /// `GET /reservations`, sorted nearest first
    pub async fn load(&mut self, api: &dyn BookingApi) -> Option<Notice> {
        let result = api.reservations().await;
        self.loaded = true;
        match result {
            Ok(mut list) => {
                sort_reservations(&mut list);
                tracing::debug!(count = list.len(), "Reservations loaded");
                self.selected = self.selected.min(list.len().saturating_sub(1));
                self.reservations = list;
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load reservations");
                Some(Notice::error(e.message_or("Could not load reservations")))
            }
        }
    }

    pub fn selected(&self) -> Option<&Reservation> {
        self.reservations.get(self.selected)
    }

    /// `DELETE /reservations/{id}` (already confirmed), then reload
    pub async fn cancel(&mut self, api: &dyn BookingApi, id: i64) -> Option<Notice> {
        match api.cancel_reservation(id).await {
            Ok(resp) => {
                let notice = if resp.message.trim().is_empty() {
                    Notice::info("Reservation cancelled")
                } else {
                    Notice::info(resp.message)
                };
                if let Some(reload) = self.load(api).await {
                    tracing::warn!(notice = %reload.text, "Reload after cancel failed");
                }
                Some(notice)
            }
            Err(e) => {
                tracing::warn!(reservation_id = id, error = %e, "Cancellation rejected");
                Some(Notice::error(e.message_or("Cancellation failed")))
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Intent {
        let len = self.reservations.len();
        match key.code {
            KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                self.selected = cycle(self.selected, len, true);
                Intent::None
            }
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab => {
                self.selected = cycle(self.selected, len, false);
                Intent::None
            }
            KeyCode::Enter | KeyCode::Delete | KeyCode::Char('c') => match self.selected() {
                Some(r) => Intent::Cancel(r.id),
                None => Intent::None,
            },
            KeyCode::Char('r') => Intent::Reload,
            _ => Intent::None,
        }
    }
}
