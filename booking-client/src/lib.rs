//! Booking Client - HTTP client for the reservation backend
//!
//! Provides the signup/login/table/reservation calls the views need, behind
//! the [`BookingApi`] trait so views can be driven by any implementation.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::BookingApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, MessageResponse, SignupRequest};
pub use shared::models::{DiningTable, MealTime, NewReservation, Reservation};
