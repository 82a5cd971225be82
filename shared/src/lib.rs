//! Shared types for the table booking client
//!
//! DTOs exchanged with the reservation backend and the field validation
//! rules used by every form that submits them.

pub mod client;
pub mod models;
pub mod validation;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, MessageResponse, SignupRequest, TableQuery};
pub use models::{DiningTable, MealTime, NewReservation, Reservation, TableAvailability};
pub use validation::{FieldError, GuestCount};
