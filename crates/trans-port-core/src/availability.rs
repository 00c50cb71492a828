// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::booking::BookingRecord;
use crate::fleet::{Fleet, Vehicle, VehicleType};
use crate::routes::{self, RouteId};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default half-width of the exclusion window around an existing booking.
pub const CONFLICT_WINDOW_HOURS: i64 = 2;

/// Result of one availability query. Recomputed on every call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    /// Matching vehicles in fleet order.
    pub available: Vec<Vehicle>,
    /// Only types with at least one match appear here.
    pub counts: BTreeMap<VehicleType, usize>,
    pub total: usize,
}

impl AvailabilitySnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_vehicles(available: Vec<Vehicle>) -> Self {
        let mut counts = BTreeMap::new();
        for vehicle in &available {
            *counts.entry(vehicle.vehicle_type).or_insert(0) += 1;
        }
        let total = available.len();
        Self {
            available,
            counts,
            total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, vehicle_type: VehicleType) -> usize {
        self.counts.get(&vehicle_type).copied().unwrap_or(0)
    }

    /// Picks the vehicle a new booking of `vehicle_type` is assigned to:
    /// the first free one in fleet order.
    pub fn allocate(&self, vehicle_type: VehicleType) -> Option<&Vehicle> {
        self.available
            .iter()
            .find(|v| v.vehicle_type == vehicle_type)
    }
}

/// Filters a fleet by route coverage and schedule conflicts.
///
/// The resolver only reads the fleet and the booking slice it is handed;
/// both are snapshots owned by the caller.
#[derive(Debug, Clone)]
pub struct AvailabilityResolver<'a> {
    fleet: &'a Fleet,
    window: Duration,
}

impl<'a> AvailabilityResolver<'a> {
    pub fn new(fleet: &'a Fleet) -> Self {
        Self {
            fleet,
            window: Duration::hours(CONFLICT_WINDOW_HOURS),
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn resolve(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
        time: NaiveTime,
        existing: &[BookingRecord],
    ) -> AvailabilitySnapshot {
        self.resolve_at(origin, destination, date.and_time(time), existing)
    }

    pub fn resolve_at(
        &self,
        origin: &str,
        destination: &str,
        at: NaiveDateTime,
        existing: &[BookingRecord],
    ) -> AvailabilitySnapshot {
        let (Some(origin_route), Some(destination_route)) =
            (routes::normalize(origin), routes::normalize(destination))
        else {
            log::debug!("Empty origin or destination, nothing to resolve");
            return AvailabilitySnapshot::empty();
        };

        self.resolve_routes(origin_route, destination_route, at, existing)
    }

    /// Same as [`resolve_at`](Self::resolve_at) for already-normalized routes.
    pub fn resolve_routes(
        &self,
        origin: RouteId,
        destination: RouteId,
        at: NaiveDateTime,
        existing: &[BookingRecord],
    ) -> AvailabilitySnapshot {
        let available: Vec<Vehicle> = self
            .fleet
            .vehicles()
            .iter()
            .filter(|v| v.available && v.covers(origin, destination))
            .filter(|v| !self.is_conflicted(v, at, existing))
            .cloned()
            .collect();

        let snapshot = AvailabilitySnapshot::from_vehicles(available);
        log::debug!(
            "Availability {} -> {} at {}: {} vehicle(s) {:?}",
            origin,
            destination,
            at,
            snapshot.total,
            snapshot.counts
        );
        snapshot
    }

    fn is_conflicted(
        &self,
        vehicle: &Vehicle,
        at: NaiveDateTime,
        existing: &[BookingRecord],
    ) -> bool {
        existing
            .iter()
            .filter(|b| b.status.holds_vehicle())
            .filter(|b| b.vehicle_id.as_deref() == Some(vehicle.id.as_str()))
            .any(|b| match b.scheduled_at() {
                Ok(booked_at) => {
                    let gap = if booked_at > at {
                        booked_at - at
                    } else {
                        at - booked_at
                    };
                    if gap < self.window {
                        log::debug!(
                            "Vehicle {} excluded: booking '{}' at {} is within the window",
                            vehicle.id,
                            b.id,
                            booked_at
                        );
                        true
                    } else {
                        false
                    }
                }
                Err(e) => {
                    log::warn!("Ignoring booking '{}' for {}: {}", b.id, vehicle.id, e);
                    false
                }
            })
    }
}
