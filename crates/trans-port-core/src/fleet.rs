// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::routes::RouteId;
use crate::TransportError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Motorcycle,
    Auto,
    Sedan,
    Suv,
    Van,
    Bus,
    Truck,
}

/// Icon shown for a type string no table knows about.
pub const FALLBACK_ICON: &str = "🚗";

impl VehicleType {
    pub const ALL: [VehicleType; 7] = [
        VehicleType::Motorcycle,
        VehicleType::Auto,
        VehicleType::Sedan,
        VehicleType::Suv,
        VehicleType::Van,
        VehicleType::Bus,
        VehicleType::Truck,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Auto => "auto",
            VehicleType::Sedan => "sedan",
            VehicleType::Suv => "suv",
            VehicleType::Van => "van",
            VehicleType::Bus => "bus",
            VehicleType::Truck => "truck",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Motorcycle => "Motorcycle",
            VehicleType::Auto => "Auto",
            VehicleType::Sedan => "Sedan",
            VehicleType::Suv => "SUV",
            VehicleType::Van => "Van",
            VehicleType::Bus => "Bus",
            VehicleType::Truck => "Truck",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            VehicleType::Motorcycle => "🏍️",
            VehicleType::Auto => "🛺",
            VehicleType::Sedan => "🚗",
            VehicleType::Suv => "🚙",
            VehicleType::Van => "🚐",
            VehicleType::Bus => "🚌",
            VehicleType::Truck => "🚚",
        }
    }

    /// Inclusive passenger range accepted for a booking. Trucks carry cargo,
    /// so zero passengers is allowed there.
    pub fn passenger_limits(&self) -> (u32, u32) {
        match self {
            VehicleType::Motorcycle => (1, 2),
            VehicleType::Auto => (1, 4),
            VehicleType::Sedan => (1, 5),
            VehicleType::Suv => (1, 8),
            VehicleType::Van => (1, 15),
            VehicleType::Bus => (1, 50),
            VehicleType::Truck => (0, 2),
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleType {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        VehicleType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| TransportError::UnknownVehicleType(s.to_string()))
    }
}

/// Display label for a raw type string; unknown types are echoed back.
pub fn type_label(raw: &str) -> String {
    raw.parse::<VehicleType>()
        .map(|t| t.label().to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Icon for a raw type string, [`FALLBACK_ICON`] when unknown.
pub fn type_icon(raw: &str) -> &'static str {
    raw.parse::<VehicleType>()
        .map(|t| t.icon())
        .unwrap_or(FALLBACK_ICON)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub capacity: u32,
    pub routes: Vec<RouteId>,
    pub available: bool,
}

impl Vehicle {
    pub fn new(id: &str, vehicle_type: VehicleType, capacity: u32, routes: &[RouteId]) -> Self {
        Self {
            id: id.to_string(),
            vehicle_type,
            capacity,
            routes: routes.to_vec(),
            available: true,
        }
    }

    /// True when the vehicle services both endpoints, in either direction.
    pub fn covers(&self, origin: RouteId, destination: RouteId) -> bool {
        self.routes.contains(&origin) && self.routes.contains(&destination)
    }
}

/// Immutable vehicle roster. Iteration order is the order availability
/// results are reported in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// The compiled-in fleet the application ships with.
    pub fn standard() -> Self {
        use RouteId::*;
        use VehicleType::*;

        Self::new(vec![
            Vehicle::new("m1", Motorcycle, 2, &[CityCenter, Airport, Station]),
            Vehicle::new("m2", Motorcycle, 2, &[CityCenter, Mall, Hospital]),
            Vehicle::new("a1", Auto, 4, &[CityCenter, Airport, Station, Mall]),
            Vehicle::new("a2", Auto, 4, &[CityCenter, Hospital, University]),
            Vehicle::new("a3", Auto, 4, &[Airport, Station, Hotel]),
            Vehicle::new("s1", Sedan, 5, &[CityCenter, Airport, Station, Mall, Hotel]),
            Vehicle::new("s2", Sedan, 5, &[CityCenter, Hospital, University, Mall]),
            Vehicle::new("s3", Sedan, 5, &[Airport, Station, Hotel, Resort]),
            Vehicle::new("u1", Suv, 8, &[CityCenter, Airport, Station, Mall, Hotel, Resort]),
            Vehicle::new("u2", Suv, 8, &[CityCenter, Hospital, University, Mall, Park]),
            Vehicle::new("u3", Suv, 8, &[Airport, Station, Hotel, Resort, Beach]),
            Vehicle::new("v1", Van, 15, &[CityCenter, Airport, Station, Mall, Hotel, University]),
            Vehicle::new("v2", Van, 15, &[CityCenter, Hospital, University, Mall, Park]),
            Vehicle::new("v3", Van, 15, &[Airport, Station, Hotel, Resort]),
            Vehicle::new(
                "b1",
                Bus,
                50,
                &[CityCenter, Airport, Station, Mall, Hotel, University, Hospital],
            ),
            Vehicle::new("b2", Bus, 50, &[CityCenter, Airport, Station, Mall, Hotel, Resort]),
            Vehicle::new("b3", Bus, 50, &[CityCenter, Hospital, University, Mall, Park, Beach]),
            Vehicle::new("b4", Bus, 50, &[Airport, Station, Hotel, Resort, Beach]),
            Vehicle::new("t1", Truck, 2, &[CityCenter, Airport, Station, Warehouse]),
            Vehicle::new("t2", Truck, 2, &[CityCenter, Mall, Warehouse, Factory]),
        ])
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
