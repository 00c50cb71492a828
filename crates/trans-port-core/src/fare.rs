// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::fleet::VehicleType;
use serde::{Deserialize, Serialize};

/// Every trip is priced as this distance until real routing exists.
pub const ESTIMATED_DISTANCE_KM: f64 = 10.0;
const BASE_DISTANCE_KM: f64 = 10.0;
const PER_EXTRA_PASSENGER: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareQuote {
    pub price: u64,
    pub tax: u64,
    pub total: u64,
}

pub fn base_fare(vehicle_type: VehicleType) -> u64 {
    match vehicle_type {
        VehicleType::Motorcycle => 50,
        VehicleType::Auto => 100,
        VehicleType::Sedan => 200,
        VehicleType::Suv => 300,
        VehicleType::Van => 400,
        VehicleType::Bus => 800,
        VehicleType::Truck => 500,
    }
}

/// Prices a trip: base fare scaled by 20% per passenger beyond the first,
/// then tax on top. Both price and tax round half away from zero.
pub fn quote(vehicle_type: VehicleType, passengers: u32, tax_rate: f64) -> FareQuote {
    let passenger_multiplier = if passengers > 1 {
        1.0 + f64::from(passengers - 1) * PER_EXTRA_PASSENGER
    } else {
        1.0
    };
    let distance_multiplier = ESTIMATED_DISTANCE_KM / BASE_DISTANCE_KM;

    let base = base_fare(vehicle_type) as f64;
    let price = (base * passenger_multiplier * distance_multiplier).round() as u64;
    let tax = (price as f64 * tax_rate).round() as u64;

    FareQuote {
        price,
        tax,
        total: price + tax,
    }
}
