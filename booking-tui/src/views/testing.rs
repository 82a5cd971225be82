//! In-memory `BookingApi` for view tests

use async_trait::async_trait;
use booking_client::{BookingApi, ClientError, ClientResult};
use chrono::NaiveDate;
use shared::client::{LoginRequest, MessageResponse, SignupRequest};
use shared::models::{DiningTable, MealTime, NewReservation, Reservation};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct FakeApi {
    /// Operation name -> (status, message) it should fail with
    failures: Mutex<HashMap<&'static str, (u16, String)>>,
    pub tables: Mutex<Vec<DiningTable>>,
    pub reservations: Mutex<Vec<Reservation>>,
    pub calls: Mutex<Vec<String>>,
    pub signups: Mutex<Vec<SignupRequest>>,
    pub logins: Mutex<Vec<LoginRequest>>,
    pub created: Mutex<Vec<NewReservation>>,
}

impl FakeApi {
    pub fn with_tables(tables: Vec<DiningTable>) -> Self {
        let api = Self::default();
        *api.tables.lock().unwrap() = tables;
        api
    }

    pub fn fail(&self, op: &'static str, status: u16, message: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(op, (status, message.to_string()));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str, detail: String) -> ClientResult<()> {
        self.calls.lock().unwrap().push(detail);
        match self.failures.lock().unwrap().get(op) {
            Some((status, message)) => Err(match status {
                400 => ClientError::Validation(message.clone()),
                401 => ClientError::Unauthorized(message.clone()),
                403 => ClientError::Forbidden(message.clone()),
                404 => ClientError::NotFound(message.clone()),
                409 => ClientError::Conflict(message.clone()),
                _ => ClientError::Internal {
                    status: *status,
                    message: message.clone(),
                },
            }),
            None => Ok(()),
        }
    }
}

pub(crate) fn table(id: i64, location: &str, capacity: u32, reserved: bool) -> DiningTable {
    DiningTable {
        id,
        location: location.to_string(),
        capacity,
        reserved,
    }
}

pub(crate) fn reservation(id: i64, date: &str, time: MealTime) -> Reservation {
    Reservation {
        id,
        date: date.parse().unwrap(),
        time,
        table_id: id,
        guests: 2,
        location: None,
        capacity: None,
    }
}

#[async_trait]
impl BookingApi for FakeApi {
    async fn signup(&self, request: &SignupRequest) -> ClientResult<MessageResponse> {
        self.record("signup", format!("POST /signup {}", request.username))?;
        self.signups.lock().unwrap().push(request.clone());
        Ok(MessageResponse::new("Signup complete"))
    }

    async fn login(&self, request: &LoginRequest) -> ClientResult<MessageResponse> {
        self.record("login", format!("POST /login {}", request.username))?;
        self.logins.lock().unwrap().push(request.clone());
        Ok(MessageResponse::new("Login successful"))
    }

    async fn logout(&self) -> ClientResult<MessageResponse> {
        self.record("logout", "POST /logout".to_string())?;
        Ok(MessageResponse::new("Logged out"))
    }

    async fn tables(&self, date: NaiveDate, time: MealTime) -> ClientResult<Vec<DiningTable>> {
        self.record("tables", format!("GET /tables?date={}&time={}", date, time))?;
        Ok(self.tables.lock().unwrap().clone())
    }

    async fn reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.record("reservations", "GET /reservations".to_string())?;
        Ok(self.reservations.lock().unwrap().clone())
    }

    async fn create_reservation(&self, request: &NewReservation) -> ClientResult<MessageResponse> {
        self.record(
            "create_reservation",
            format!("POST /reservations table={}", request.table_id),
        )?;
        for t in self.tables.lock().unwrap().iter_mut() {
            if t.id == request.table_id {
                t.reserved = true;
            }
        }
        self.created.lock().unwrap().push(request.clone());
        Ok(MessageResponse::new("Reservation complete"))
    }

    async fn cancel_reservation(&self, id: i64) -> ClientResult<MessageResponse> {
        self.record("cancel_reservation", format!("DELETE /reservations/{}", id))?;
        self.reservations.lock().unwrap().retain(|r| r.id != id);
        Ok(MessageResponse::new("Reservation cancelled"))
    }
}
