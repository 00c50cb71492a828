// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::availability::AvailabilitySnapshot;
use crate::booking::{self, BookingRecord, BookingStatus};
use crate::config::Settings;
use crate::fleet::VehicleType;
use chrono::{DateTime, Months, NaiveDateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

const MAX_LOCATION_LEN: usize = 100;
const MAX_PASSENGERS: u32 = 50;
const MAX_SPECIAL_REQUESTS_LEN: usize = 500;

/// A booking as entered by the user, before a vehicle has been assigned.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub origin: String,
    pub destination: String,
    pub booking_date: String,
    pub booking_time: String,
    pub vehicle_type: Option<VehicleType>,
    pub passengers: Option<u32>,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub special_requests: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn location_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9\s,.\-]+$").unwrap())
}

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z\s.'\-]+$").unwrap())
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\d\s\-+()]+$").unwrap())
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}$").unwrap())
}

fn check_location(value: &str, what: &str) -> Option<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if trimmed.is_empty() {
        Some(format!("{} location is required.", what))
    } else if len < 3 {
        Some(format!("{} location must be at least 3 characters long.", what))
    } else if len > MAX_LOCATION_LEN {
        Some(format!(
            "{} location is too long. Maximum {} characters allowed.",
            what, MAX_LOCATION_LEN
        ))
    } else if !location_re().is_match(trimmed) {
        Some(format!(
            "{} location may only contain letters, numbers, spaces, commas, periods and hyphens.",
            what
        ))
    } else {
        None
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

impl BookingRequest {
    /// Checks every field and returns all problems found, in form order.
    /// `snapshot` must be the availability for this request's route and slot.
    pub fn validate(
        &self,
        snapshot: &AvailabilitySnapshot,
        now: NaiveDateTime,
        settings: &Settings,
    ) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if let Some(msg) = check_location(&self.origin, "Origin") {
            errors.push(FieldError::new("origin", msg));
        }

        if let Some(msg) = check_location(&self.destination, "Destination") {
            errors.push(FieldError::new("destination", msg));
        } else if self.origin.trim().to_lowercase() == self.destination.trim().to_lowercase() {
            errors.push(FieldError::new(
                "destination",
                "Destination cannot be the same as origin.",
            ));
        }

        let today = now.date();
        let date = booking::parse_date(&self.booking_date);
        match &date {
            Err(_) => errors.push(FieldError::new(
                "booking_date",
                "Booking date is required in YYYY-MM-DD format.",
            )),
            Ok(d) if *d < today => errors.push(FieldError::new(
                "booking_date",
                "Booking date cannot be in the past.",
            )),
            Ok(d) => {
                let limit = today.checked_add_months(Months::new(settings.max_advance_months));
                if limit.map_or(false, |limit| *d > limit) {
                    errors.push(FieldError::new(
                        "booking_date",
                        format!(
                            "Booking date cannot be more than {} months in advance.",
                            settings.max_advance_months
                        ),
                    ));
                }
            }
        }

        let time = booking::parse_time(&self.booking_time);
        match (&date, &time) {
            (_, Err(_)) => errors.push(FieldError::new(
                "booking_time",
                "Booking time is required in HH:MM format.",
            )),
            (Ok(d), Ok(t)) if *d == today && d.and_time(*t) < now => errors.push(FieldError::new(
                "booking_time",
                "Booking time cannot be in the past.",
            )),
            _ => {}
        }

        let schedule_known = !self.origin.trim().is_empty()
            && !self.destination.trim().is_empty()
            && date.is_ok()
            && time.is_ok();
        match self.vehicle_type {
            None => errors.push(FieldError::new("vehicle_type", "Vehicle type is required.")),
            Some(t) if schedule_known && snapshot.count(t) == 0 => errors.push(FieldError::new(
                "vehicle_type",
                format!(
                    "{} is not available for this route and time.",
                    t.label()
                ),
            )),
            _ => {}
        }

        self.check_passengers(&mut errors);
        self.check_contact(&mut errors);

        let special_len = self.special_requests.chars().count();
        if special_len > MAX_SPECIAL_REQUESTS_LEN {
            errors.push(FieldError::new(
                "special_requests",
                format!(
                    "Special requests exceed {} characters by {}.",
                    MAX_SPECIAL_REQUESTS_LEN,
                    special_len - MAX_SPECIAL_REQUESTS_LEN
                ),
            ));
        }

        errors
    }

    fn check_passengers(&self, errors: &mut Vec<FieldError>) {
        let Some(passengers) = self.passengers else {
            errors.push(FieldError::new(
                "passengers",
                "Number of passengers is required.",
            ));
            return;
        };

        if passengers == 0 && self.vehicle_type != Some(VehicleType::Truck) {
            errors.push(FieldError::new(
                "passengers",
                "At least 1 passenger is required for this vehicle type.",
            ));
        } else if let Some(t) = self.vehicle_type {
            let (min, max) = t.passenger_limits();
            if passengers < min {
                errors.push(FieldError::new(
                    "passengers",
                    format!("{} requires at least {} passenger{}.", t.label(), min, plural(min)),
                ));
            } else if passengers > max {
                errors.push(FieldError::new(
                    "passengers",
                    format!(
                        "{} can accommodate at most {} passenger{}.",
                        t.label(),
                        max,
                        plural(max)
                    ),
                ));
            }
        } else if passengers > MAX_PASSENGERS {
            errors.push(FieldError::new(
                "passengers",
                format!("Maximum {} passengers allowed per booking.", MAX_PASSENGERS),
            ));
        }
    }

    fn check_contact(&self, errors: &mut Vec<FieldError>) {
        let name = self.contact_name.trim();
        let name_len = name.chars().count();
        if name.is_empty() {
            errors.push(FieldError::new("contact_name", "Contact name is required."));
        } else if name_len < 2 {
            errors.push(FieldError::new(
                "contact_name",
                "Contact name must be at least 2 characters long.",
            ));
        } else if name_len > 50 {
            errors.push(FieldError::new(
                "contact_name",
                "Contact name is too long. Maximum 50 characters allowed.",
            ));
        } else if !name_re().is_match(name) {
            errors.push(FieldError::new(
                "contact_name",
                "Contact name may only contain letters, spaces, apostrophes, periods and hyphens.",
            ));
        }

        let phone = self.contact_phone.trim();
        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count() as u32;
        if phone.is_empty() {
            errors.push(FieldError::new("contact_phone", "Contact phone number is required."));
        } else if !phone_re().is_match(phone) {
            errors.push(FieldError::new(
                "contact_phone",
                "Phone number may only contain digits, spaces, hyphens, plus signs \
                 and parentheses.",
            ));
        } else if digits < 10 {
            errors.push(FieldError::new(
                "contact_phone",
                format!(
                    "Phone number must have at least 10 digits, got {} digit{}.",
                    digits,
                    plural(digits)
                ),
            ));
        } else if digits > 15 {
            errors.push(FieldError::new(
                "contact_phone",
                "Phone number is too long. Maximum 15 digits allowed.",
            ));
        }

        let email = self.contact_email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("contact_email", "Contact email address is required."));
        } else if email.len() > 100 {
            errors.push(FieldError::new(
                "contact_email",
                "Email address is too long. Maximum 100 characters allowed.",
            ));
        } else if !email_re().is_match(email) {
            errors.push(FieldError::new(
                "contact_email",
                "Email address must look like name@domain.com.",
            ));
        }
    }

    /// Builds the pending record stored before payment. The id is the
    /// creation time in milliseconds.
    pub fn into_record(
        self,
        vehicle_id: Option<String>,
        created_at: DateTime<Utc>,
    ) -> BookingRecord {
        BookingRecord {
            id: created_at.timestamp_millis().to_string(),
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
            booking_date: self.booking_date.trim().to_string(),
            booking_time: self.booking_time.trim().to_string(),
            vehicle_type: self.vehicle_type,
            vehicle_id,
            passengers: self.passengers.unwrap_or(0),
            contact_name: self.contact_name.trim().to_string(),
            contact_phone: self.contact_phone.trim().to_string(),
            contact_email: self.contact_email.trim().to_string(),
            special_requests: self.special_requests.trim().to_string(),
            status: BookingStatus::Pending,
            created_at: Some(created_at),
            ..Default::default()
        }
    }
}
