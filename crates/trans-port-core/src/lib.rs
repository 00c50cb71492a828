// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod availability;
pub mod booking;
pub mod config;
pub mod fare;
pub mod fleet;
pub mod request;
pub mod routes;
pub mod store;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

pub use availability::{AvailabilityResolver, AvailabilitySnapshot};
pub use booking::{BookingRecord, BookingStatus};
pub use fleet::{Fleet, Vehicle, VehicleType};
pub use routes::{normalize, RouteId};

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Invalid booking date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Invalid booking time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("Unknown booking status '{0}'")]
    InvalidStatus(String),
    #[error("Unknown vehicle type '{0}'")]
    UnknownVehicleType(String),
    #[error("Booking '{0}' not found")]
    BookingNotFound(String),
    #[error("Booking cannot move from {0} to {1}")]
    InvalidTransition(BookingStatus, BookingStatus),
    #[error("Invalid setting {0}: {1}")]
    InvalidSetting(&'static str, String),
}

/// Directory holding `settings.json` and the default `bookings.json`.
/// Falls back to the working directory when no home directory can be resolved.
pub fn get_config_root() -> PathBuf {
    ProjectDirs::from("org", "trans-port", "Trans-Port")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
