// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::booking::{BookingRecord, BookingStatus};
use crate::TransportError;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub upcoming: usize,
}

/// Bookings persisted as a single JSON array, newest first.
#[derive(Debug, Clone)]
pub struct BookingStore {
    path: PathBuf,
    bookings: Vec<BookingRecord>,
}

impl BookingStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let bookings = Self::read(&path)?;
        log::debug!("Loaded {} booking(s) from {:?}", bookings.len(), path);
        Ok(Self { path, bookings })
    }

    fn read(path: &Path) -> Result<Vec<BookingRecord>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).context("Failed to read bookings.json")?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).context("Failed to parse bookings.json")
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create bookings directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(&self.bookings).context("Failed to serialize bookings")?;
        fs::write(&self.path, content).context("Failed to write bookings.json")?;
        log::info!("Saved {} booking(s) to {:?}", self.bookings.len(), self.path);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored booking, unfiltered. This is the snapshot handed to the
    /// availability resolver.
    pub fn all(&self) -> &[BookingRecord] {
        &self.bookings
    }

    pub fn get(&self, id: &str) -> Option<&BookingRecord> {
        self.bookings.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut BookingRecord, TransportError> {
        self.bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| TransportError::BookingNotFound(id.to_string()))
    }

    /// Looks up `id` and checks that it may move to `next`.
    fn transition(
        &mut self,
        id: &str,
        next: BookingStatus,
    ) -> Result<&mut BookingRecord, TransportError> {
        let booking = self.get_mut(id)?;
        if !booking.status.can_transition_to(next) {
            return Err(TransportError::InvalidTransition(booking.status, next));
        }
        log::info!("Booking {}: {} -> {}", id, booking.status, next);
        booking.status = next;
        Ok(booking)
    }

    pub fn add(&mut self, booking: BookingRecord) -> Result<()> {
        self.bookings.insert(0, booking);
        self.save()
    }

    pub fn set_status(&mut self, id: &str, status: BookingStatus) -> Result<()> {
        self.transition(id, status)?;
        self.save()
    }

    /// Records a simulated payment and confirms the booking. Only pending
    /// bookings can be paid.
    pub fn confirm_payment(
        &mut self,
        id: &str,
        method: &str,
        amount: u64,
        paid_at: DateTime<Utc>,
    ) -> Result<()> {
        let booking = self.transition(id, BookingStatus::Confirmed)?;
        booking.payment_method = Some(method.to_string());
        booking.amount = Some(amount);
        booking.paid_at = Some(paid_at);
        log::info!("Booking {} paid via {} ({})", id, method, amount);
        self.save()
    }

    pub fn remove(&mut self, id: &str) -> Result<BookingRecord> {
        let idx = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| TransportError::BookingNotFound(id.to_string()))?;
        let removed = self.bookings.remove(idx);
        self.save()?;
        Ok(removed)
    }

    pub fn filter_by_status(&self, status: Option<BookingStatus>) -> Vec<&BookingRecord> {
        self.bookings
            .iter()
            .filter(|b| status.map_or(true, |s| b.status == s))
            .collect()
    }

    /// Bookings ordered by scheduled time, earliest first. Records with an
    /// unreadable date or time sort last.
    pub fn sorted_by_schedule(&self, status: Option<BookingStatus>) -> Vec<&BookingRecord> {
        let mut list = self.filter_by_status(status);
        list.sort_by_key(|b| match b.scheduled_at() {
            Ok(at) => (0, Some(at)),
            Err(_) => (1, None),
        });
        list
    }

    /// The `limit` most recently created bookings, newest first. Records
    /// without a creation time come last.
    pub fn recent(&self, limit: usize) -> Vec<&BookingRecord> {
        let mut list: Vec<&BookingRecord> = self.bookings.iter().collect();
        list.sort_by(|a, b| match (a.created_at, b.created_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        list.truncate(limit);
        list
    }

    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<&BookingRecord> {
        self.bookings.iter().filter(|b| b.is_upcoming(now)).collect()
    }

    pub fn stats(&self, now: NaiveDateTime) -> BookingStats {
        let count = |s: BookingStatus| self.bookings.iter().filter(|b| b.status == s).count();
        BookingStats {
            total: self.bookings.len(),
            pending: count(BookingStatus::Pending),
            confirmed: count(BookingStatus::Confirmed),
            completed: count(BookingStatus::Completed),
            upcoming: self.upcoming(now).len(),
        }
    }
}
