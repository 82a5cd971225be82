//! Backend API seam
//!
//! Views only see this trait; [`crate::HttpClient`] is the network
//! implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::client::{LoginRequest, MessageResponse, SignupRequest};
use shared::models::{DiningTable, MealTime, NewReservation, Reservation};

use crate::ClientResult;

#[async_trait]
pub trait BookingApi: Send + Sync {
    /// `POST /signup`
    async fn signup(&self, request: &SignupRequest) -> ClientResult<MessageResponse>;

    /// `POST /login`; on success the session cookie is kept for later calls
    async fn login(&self, request: &LoginRequest) -> ClientResult<MessageResponse>;

    /// `POST /logout`
    async fn logout(&self) -> ClientResult<MessageResponse>;

    /// `GET /tables?date=..&time=..`
    async fn tables(&self, date: NaiveDate, time: MealTime) -> ClientResult<Vec<DiningTable>>;

    /// `GET /reservations` for the logged-in user
    async fn reservations(&self) -> ClientResult<Vec<Reservation>>;

    /// `POST /reservations`
    async fn create_reservation(&self, request: &NewReservation) -> ClientResult<MessageResponse>;

    /// `DELETE /reservations/{id}`
    async fn cancel_reservation(&self, id: i64) -> ClientResult<MessageResponse>;
}
