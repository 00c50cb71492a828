// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz
//
// Keyword precedence is first-match-wins over the declared table order.
// These cases pin down the overlaps so that reordering the table shows up here.

use trans_port_core::routes::{normalize, RouteId, ROUTE_KEYWORDS};

#[test]
fn test_station_phrases() {
    let cases = [
        ("Railway Station", RouteId::Station),
        ("Train Station Plaza", RouteId::Station),
        ("Central Bus Station", RouteId::Station),
    ];

    for (input, expected) in &cases {
        let result = normalize(input);
        assert_eq!(
            result,
            Some(*expected),
            "'{}' should be {:?}, got {:?}",
            input,
            expected,
            result
        );
    }
}

#[test]
fn test_broad_keywords_shadow_later_phrases() {
    let cases = [
        // "center" is declared before "shopping center"
        ("Shopping Center", RouteId::CityCenter),
        ("Phoenix Shopping Mall", RouteId::Mall),
        // "mall" is declared before "hotel"
        ("Hotel near the Mall", RouteId::Mall),
        // "resort" is declared before "beach"
        ("Beach Resort", RouteId::Resort),
        // "park" before "hospital", and substring matches inside words
        ("Sunset Park Hospital", RouteId::Park),
        ("Spark Plug Factory", RouteId::Park),
        ("Airport Terminal 2", RouteId::Airport),
        ("Downtown Parking", RouteId::CityCenter),
    ];

    for (input, expected) in &cases {
        let result = normalize(input);
        assert_eq!(
            result,
            Some(*expected),
            "'{}' should be {:?}, got {:?}",
            input,
            expected,
            result
        );
    }
}

#[test]
fn test_fallback_and_empty() {
    assert_eq!(normalize("Somewhere Unknown"), Some(RouteId::CityCenter));
    assert_eq!(normalize("42 Elm Street"), Some(RouteId::CityCenter));
    assert_eq!(normalize(""), None);
    assert_eq!(normalize("    "), None);
}

#[test]
fn test_keyword_table_is_lowercase() {
    for (keyword, _) in ROUTE_KEYWORDS {
        assert_eq!(*keyword, keyword.to_lowercase());
        assert_eq!(*keyword, keyword.trim());
    }
}

#[test]
fn test_every_route_has_a_keyword() {
    for route in RouteId::ALL {
        assert!(
            ROUTE_KEYWORDS.iter().any(|(_, r)| *r == route),
            "{} has no keyword",
            route
        );
    }
}
