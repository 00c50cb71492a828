// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::fleet::VehicleType;
use crate::TransportError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Whether a booking in this status still occupies its vehicle.
    pub fn holds_vehicle(&self) -> bool {
        *self != BookingStatus::Cancelled
    }

    /// Completed and cancelled bookings are closed for further changes.
    pub fn is_closed(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Pending bookings get confirmed or cancelled, confirmed ones complete
    /// or drop back to pending. Nothing leaves a closed status.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
                | (BookingStatus::Confirmed, BookingStatus::Pending)
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        BookingStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == lower)
            .ok_or_else(|| TransportError::InvalidStatus(s.to_string()))
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, TransportError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| TransportError::InvalidDate(raw.to_string()))
}

/// Accepts `HH:MM` as produced by time pickers, and `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Result<NaiveTime, TransportError> {
    let raw_trimmed = raw.trim();
    NaiveTime::parse_from_str(raw_trimmed, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw_trimmed, "%H:%M:%S"))
        .map_err(|_| TransportError::InvalidTime(raw.to_string()))
}

/// Joins a calendar date and a wall-clock time into one naive local instant.
pub fn parse_instant(date: &str, time: &str) -> Result<NaiveDateTime, TransportError> {
    Ok(parse_date(date)?.and_time(parse_time(time)?))
}

/// A stored booking. Date and time are kept as the strings the booking form
/// produced so that records written by older clients still load.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    pub booking_date: String,
    pub booking_time: String,
    #[serde(default)]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub passengers: u32,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

impl BookingRecord {
    /// Minimal record carrying only what the conflict check reads.
    pub fn scheduled(vehicle_id: &str, date: &str, time: &str, status: BookingStatus) -> Self {
        Self {
            vehicle_id: Some(vehicle_id.to_string()),
            booking_date: date.to_string(),
            booking_time: time.to_string(),
            status,
            ..Default::default()
        }
    }

    pub fn scheduled_at(&self) -> Result<NaiveDateTime, TransportError> {
        parse_instant(&self.booking_date, &self.booking_time)
    }

    /// Future bookings that are neither completed nor cancelled.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        !self.status.is_closed()
            && self
                .scheduled_at()
                .map(|at| at > now)
                .unwrap_or(false)
    }
}
