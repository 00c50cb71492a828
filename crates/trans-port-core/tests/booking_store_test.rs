// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use chrono::{DateTime, Utc};
use simplelog::{Config, LevelFilter, TestLogger};
use trans_port_core::booking::{parse_instant, BookingRecord, BookingStatus};
use trans_port_core::fare;
use trans_port_core::request::BookingRequest;
use trans_port_core::store::{BookingStats, BookingStore};
use trans_port_core::{AvailabilityResolver, Fleet, TransportError, VehicleType};

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn record(id: &str, vehicle: &str, date: &str, time: &str, status: BookingStatus) -> BookingRecord {
    BookingRecord {
        id: id.to_string(),
        ..BookingRecord::scheduled(vehicle, date, time, status)
    }
}

#[test]
fn test_store_persists_across_reopen() -> anyhow::Result<()> {
    init_logging();
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("data").join("bookings.json");

    let mut store = BookingStore::open(&path)?;
    store.add(record("1", "a1", "2024-06-01", "14:00", BookingStatus::Pending))?;
    store.add(record("2", "s1", "2024-06-02", "09:00", BookingStatus::Pending))?;

    let reopened = BookingStore::open(&path)?;
    let ids: Vec<&str> = reopened.all().iter().map(|b| b.id.as_str()).collect();
    // Newest first
    assert_eq!(ids, vec!["2", "1"]);
    Ok(())
}

#[test]
fn test_status_changes_and_removal() -> anyhow::Result<()> {
    init_logging();
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("bookings.json");

    let mut store = BookingStore::open(&path)?;
    store.add(record("1", "a1", "2024-06-01", "14:00", BookingStatus::Pending))?;
    store.add(record("2", "s1", "2024-06-02", "09:00", BookingStatus::Pending))?;

    store.set_status("1", BookingStatus::Cancelled)?;
    let removed = store.remove("2")?;
    assert_eq!(removed.vehicle_id.as_deref(), Some("s1"));

    let reopened = BookingStore::open(&path)?;
    assert_eq!(reopened.all().len(), 1);
    assert_eq!(reopened.get("1").map(|b| b.status), Some(BookingStatus::Cancelled));
    assert!(reopened.get("2").is_none());
    Ok(())
}

#[test]
fn test_payment_confirms_and_blocks_vehicle() -> anyhow::Result<()> {
    init_logging();
    let temp_dir = tempfile::tempdir()?;
    let mut store = BookingStore::open(temp_dir.path().join("bookings.json"))?;
    let fleet = Fleet::standard();
    let resolver = AvailabilityResolver::new(&fleet);
    let now = parse_instant("2024-05-30", "09:00")?;
    let created: DateTime<Utc> = "2024-05-30T09:00:00Z".parse()?;

    let request = BookingRequest {
        origin: "Downtown".to_string(),
        destination: "Warehouse".to_string(),
        booking_date: "2024-06-01".to_string(),
        booking_time: "14:00".to_string(),
        vehicle_type: Some(VehicleType::Truck),
        passengers: Some(1),
        contact_name: "Lee Chan".to_string(),
        contact_phone: "0123456789".to_string(),
        contact_email: "lee@example.org".to_string(),
        special_requests: String::new(),
    };
    let at = parse_instant(&request.booking_date, &request.booking_time)?;

    let before = resolver.resolve_at(&request.origin, &request.destination, at, store.all());
    assert_eq!(before.count(VehicleType::Truck), 2);
    assert!(request
        .validate(&before, now, &Default::default())
        .is_empty());

    let vehicle_id = before
        .allocate(VehicleType::Truck)
        .map(|v| v.id.clone());
    assert_eq!(vehicle_id.as_deref(), Some("t1"));

    let booking = request.into_record(vehicle_id, created);
    let id = booking.id.clone();
    store.add(booking)?;

    let quote = fare::quote(VehicleType::Truck, 1, 0.18);
    store.confirm_payment(&id, "upi", quote.total, created)?;

    let paid = store.get(&id).unwrap();
    assert_eq!(paid.status, BookingStatus::Confirmed);
    assert_eq!(paid.amount, Some(590));
    assert_eq!(paid.payment_method.as_deref(), Some("upi"));

    let after = resolver.resolve_at("Downtown", "Warehouse", at, store.all());
    assert_eq!(after.count(VehicleType::Truck), 1);
    assert_eq!(after.allocate(VehicleType::Truck).map(|v| v.id.as_str()), Some("t2"));
    Ok(())
}

#[test]
fn test_listing_and_stats() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let mut store = BookingStore::open(temp_dir.path().join("bookings.json"))?;
    store.add(record("1", "a1", "2024-06-03", "08:00", BookingStatus::Pending))?;
    store.add(record("2", "a2", "2024-06-01", "18:00", BookingStatus::Confirmed))?;
    store.add(record("3", "a3", "2024-05-01", "10:00", BookingStatus::Completed))?;
    store.add(record("4", "s1", "2024-06-05", "10:00", BookingStatus::Cancelled))?;
    store.add(record("5", "s2", "bad-date", "10:00", BookingStatus::Pending))?;

    let sorted: Vec<&str> = store
        .sorted_by_schedule(None)
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(sorted, vec!["3", "2", "1", "4", "5"]);

    let pending: Vec<&str> = store
        .sorted_by_schedule(Some(BookingStatus::Pending))
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(pending, vec!["1", "5"]);

    let now = parse_instant("2024-06-01", "12:00")?;
    assert_eq!(
        store.stats(now),
        BookingStats {
            total: 5,
            pending: 2,
            confirmed: 1,
            completed: 1,
            upcoming: 2,
        }
    );
    Ok(())
}

#[test]
fn test_cancelled_booking_cannot_be_reopened() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("bookings.json");
    let mut store = BookingStore::open(&path)?;
    store.add(record("1", "t2", "2024-06-01", "14:00", BookingStatus::Pending))?;
    store.set_status("1", BookingStatus::Cancelled)?;

    // With "1" cancelled, t2 is free again and goes to the next booking.
    let fleet = Fleet::standard();
    let at = parse_instant("2024-06-01", "14:00")?;
    let snapshot =
        AvailabilityResolver::new(&fleet).resolve_at("Mall", "Factory", at, store.all());
    let allocated = snapshot.allocate(VehicleType::Truck).map(|v| v.id.as_str());
    assert_eq!(allocated, Some("t2"));
    store.add(record("2", "t2", "2024-06-01", "14:00", BookingStatus::Pending))?;

    let err = store.set_status("1", BookingStatus::Pending).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TransportError>(),
        Some(TransportError::InvalidTransition(
            BookingStatus::Cancelled,
            BookingStatus::Pending
        ))
    ));

    let reopened = BookingStore::open(&path)?;
    let live_on_t2: Vec<&str> = reopened
        .all()
        .iter()
        .filter(|b| b.vehicle_id.as_deref() == Some("t2") && b.status.holds_vehicle())
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(live_on_t2, vec!["2"]);
    Ok(())
}

#[test]
fn test_only_pending_bookings_can_be_paid() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let mut store = BookingStore::open(temp_dir.path().join("bookings.json"))?;
    let paid_at: DateTime<Utc> = "2024-05-30T09:00:00Z".parse()?;
    store.add(record("1", "a1", "2024-06-01", "14:00", BookingStatus::Completed))?;

    assert!(store.confirm_payment("1", "card", 236, paid_at).is_err());
    let booking = store.get("1").unwrap();
    assert_eq!(booking.status, BookingStatus::Completed);
    assert!(booking.amount.is_none());
    Ok(())
}

#[test]
fn test_recent_orders_by_creation_time() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let mut store = BookingStore::open(temp_dir.path().join("bookings.json"))?;
    let created = |ts: &str| ts.parse::<DateTime<Utc>>().ok();

    let entries = [
        ("1", Some("2024-05-01T08:00:00Z")),
        ("2", None),
        ("3", Some("2024-05-03T08:00:00Z")),
        ("4", Some("2024-05-02T08:00:00Z")),
    ];
    for (id, ts) in entries {
        store.add(BookingRecord {
            created_at: ts.and_then(created),
            ..record(id, "a1", "2024-06-01", "14:00", BookingStatus::Pending)
        })?;
    }

    let ids = |list: Vec<&BookingRecord>| -> Vec<String> {
        list.iter().map(|b| b.id.clone()).collect()
    };
    assert_eq!(ids(store.recent(5)), vec!["3", "4", "1", "2"]);
    assert_eq!(ids(store.recent(2)), vec!["3", "4"]);
    Ok(())
}
