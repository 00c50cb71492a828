// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical service areas the fleet is scheduled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteId {
    CityCenter,
    Airport,
    Station,
    Mall,
    Hotel,
    Resort,
    Beach,
    Park,
    Hospital,
    University,
    Warehouse,
    Factory,
}

/// Route used when a non-empty location matches no keyword.
pub const DEFAULT_ROUTE: RouteId = RouteId::CityCenter;

/// Location keywords in priority order. The first keyword contained in the
/// lower-cased input wins, so a broad keyword listed early shadows the longer
/// phrases after it (e.g. "center" catches "shopping center").
pub const ROUTE_KEYWORDS: &[(&str, RouteId)] = &[
    ("city center", RouteId::CityCenter),
    ("city-center", RouteId::CityCenter),
    ("downtown", RouteId::CityCenter),
    ("center", RouteId::CityCenter),
    ("airport", RouteId::Airport),
    ("airport terminal", RouteId::Airport),
    ("station", RouteId::Station),
    ("railway station", RouteId::Station),
    ("bus station", RouteId::Station),
    ("train station", RouteId::Station),
    ("mall", RouteId::Mall),
    ("shopping mall", RouteId::Mall),
    ("shopping center", RouteId::Mall),
    ("hotel", RouteId::Hotel),
    ("resort", RouteId::Resort),
    ("beach", RouteId::Beach),
    ("park", RouteId::Park),
    ("hospital", RouteId::Hospital),
    ("university", RouteId::University),
    ("college", RouteId::University),
    ("warehouse", RouteId::Warehouse),
    ("factory", RouteId::Factory),
];

impl RouteId {
    pub const ALL: [RouteId; 12] = [
        RouteId::CityCenter,
        RouteId::Airport,
        RouteId::Station,
        RouteId::Mall,
        RouteId::Hotel,
        RouteId::Resort,
        RouteId::Beach,
        RouteId::Park,
        RouteId::Hospital,
        RouteId::University,
        RouteId::Warehouse,
        RouteId::Factory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteId::CityCenter => "city-center",
            RouteId::Airport => "airport",
            RouteId::Station => "station",
            RouteId::Mall => "mall",
            RouteId::Hotel => "hotel",
            RouteId::Resort => "resort",
            RouteId::Beach => "beach",
            RouteId::Park => "park",
            RouteId::Hospital => "hospital",
            RouteId::University => "university",
            RouteId::Warehouse => "warehouse",
            RouteId::Factory => "factory",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a free-text location onto a route.
///
/// Returns `None` only for empty or whitespace-only input. Anything else that
/// matches no keyword is routed to [`DEFAULT_ROUTE`].
pub fn normalize(location: &str) -> Option<RouteId> {
    let location_lower = location.trim().to_lowercase();
    if location_lower.is_empty() {
        return None;
    }

    let route = ROUTE_KEYWORDS
        .iter()
        .find(|(keyword, _)| location_lower.contains(keyword))
        .map(|&(_, route)| route)
        .unwrap_or(DEFAULT_ROUTE);

    log::debug!("Normalized location '{}' -> {}", location, route);
    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank_have_no_route() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   \t"), None);
    }

    #[test]
    fn test_unmatched_falls_back_to_city_center() {
        assert_eq!(normalize("Somewhere Unknown"), Some(RouteId::CityCenter));
    }

    #[test]
    fn test_case_and_padding_ignored() {
        assert_eq!(normalize("  AIRPORT  "), Some(RouteId::Airport));
        assert_eq!(normalize("Grand Hotel"), Some(RouteId::Hotel));
        assert_eq!(normalize("State College"), Some(RouteId::University));
    }

    #[test]
    fn test_every_route_reachable_from_its_own_name() {
        for route in RouteId::ALL {
            assert_eq!(normalize(route.as_str()), Some(route), "{}", route);
        }
    }

    #[test]
    fn test_route_serializes_kebab_case() {
        let json = serde_json::to_string(&RouteId::CityCenter).unwrap();
        assert_eq!(json, "\"city-center\"");
    }
}
