// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{bail, Context, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use trans_port_core::booking::{self, BookingRecord, BookingStatus};
use trans_port_core::config::Settings;
use trans_port_core::fare;
use trans_port_core::fleet::type_icon;
use trans_port_core::request::BookingRequest;
use trans_port_core::store::BookingStore;
use trans_port_core::{AvailabilityResolver, AvailabilitySnapshot, Fleet, VehicleType};

const RECENT_LIMIT: usize = 5;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the bookings file
    #[arg(short, long, env = "TRANS_PORT_STORE")]
    store: Option<PathBuf>,

    /// Path to settings.json
    #[arg(long, env = "TRANS_PORT_SETTINGS")]
    settings: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaymentMethod {
    Card,
    Upi,
    Wallet,
}

impl PaymentMethod {
    fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Wallet => "wallet",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show which route a location maps to
    Normalize { location: String },
    /// List free vehicles for a trip
    Availability {
        origin: String,
        destination: String,
        /// YYYY-MM-DD
        date: String,
        /// HH:MM
        time: String,
    },
    /// Create a pending booking and assign a vehicle
    Book {
        origin: String,
        destination: String,
        date: String,
        time: String,
        #[arg(long = "type")]
        vehicle_type: String,
        #[arg(long)]
        passengers: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Price a trip without booking it
    Quote {
        vehicle_type: String,
        #[arg(default_value_t = 1)]
        passengers: u32,
    },
    /// Pay for a pending booking, confirming it
    Pay { id: String, method: PaymentMethod },
    /// List bookings by scheduled time
    List {
        #[arg(long)]
        status: Option<String>,
    },
    /// Change a booking's status
    Status { id: String, status: String },
    /// Delete a booking
    Delete { id: String },
    /// Summary counts and the latest bookings
    Stats,
}

fn print_snapshot(snapshot: &AvailabilitySnapshot) {
    if snapshot.is_empty() {
        println!("No vehicles available for this route and time.");
        return;
    }

    println!(
        "{} {} available",
        snapshot.total,
        if snapshot.total == 1 { "vehicle" } else { "vehicles" }
    );
    for (vehicle_type, count) in &snapshot.counts {
        println!("  {} {:<10} {}", vehicle_type.icon(), vehicle_type.label(), count);
    }
}

fn print_booking(b: &BookingRecord) {
    let vehicle = b.vehicle_type.map(|t| t.as_str()).unwrap_or("");
    println!(
        "[{:<9}] {} {} {} {} -> {} {} {} ({} pax)",
        b.status.label(),
        b.id,
        b.booking_date,
        b.booking_time,
        b.origin,
        b.destination,
        type_icon(vehicle),
        b.vehicle_id.as_deref().unwrap_or("-"),
        b.passengers
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);

    let settings_path = cli.settings.clone().unwrap_or_else(Settings::default_path);
    if !settings_path.exists() {
        match Settings::default().save(&settings_path) {
            Ok(()) => log::info!("Wrote default settings to {:?}", settings_path),
            Err(e) => log::warn!("Could not write default settings: {:#}", e),
        }
    }
    let settings = Settings::load(&settings_path)?;
    let store_path = cli.store.clone().unwrap_or_else(|| settings.bookings_path());
    log::debug!("Using bookings file {:?}", store_path);

    let fleet = Fleet::standard();
    let resolver = AvailabilityResolver::new(&fleet).with_window(settings.conflict_window()?);
    let now = Local::now().naive_local();

    match cli.command {
        Commands::Normalize { location } => match trans_port_core::normalize(&location) {
            Some(route) => println!("{}", route),
            None => println!("(no route: empty location)"),
        },
        Commands::Availability {
            origin,
            destination,
            date,
            time,
        } => {
            let date = booking::parse_date(&date)?;
            let time = booking::parse_time(&time)?;
            let store = BookingStore::open(&store_path)?;
            let snapshot = resolver.resolve(&origin, &destination, date, time, store.all());
            print_snapshot(&snapshot);
        }
        Commands::Book {
            origin,
            destination,
            date,
            time,
            vehicle_type,
            passengers,
            name,
            phone,
            email,
            notes,
        } => {
            let vehicle_type: VehicleType = vehicle_type.parse()?;
            let mut store = BookingStore::open(&store_path)?;
            let request = BookingRequest {
                origin,
                destination,
                booking_date: date,
                booking_time: time,
                vehicle_type: Some(vehicle_type),
                passengers: Some(passengers),
                contact_name: name,
                contact_phone: phone,
                contact_email: email,
                special_requests: notes,
            };

            let requested = booking::parse_instant(&request.booking_date, &request.booking_time);
            let snapshot = match requested {
                Ok(at) => {
                    resolver.resolve_at(&request.origin, &request.destination, at, store.all())
                }
                Err(_) => AvailabilitySnapshot::empty(),
            };

            let errors = request.validate(&snapshot, now, &settings);
            if !errors.is_empty() {
                for e in &errors {
                    eprintln!("{}: {}", e.field, e.message);
                }
                bail!("Booking rejected ({} problem(s))", errors.len());
            }

            let vehicle_id = snapshot.allocate(vehicle_type).map(|v| v.id.clone());
            let record = request.into_record(vehicle_id, Utc::now());
            let quote = fare::quote(vehicle_type, record.passengers, settings.tax_rate);
            println!(
                "Booked {} ({}), pending payment of {}",
                record.id,
                record.vehicle_id.as_deref().unwrap_or("-"),
                quote.total
            );
            store.add(record)?;
        }
        Commands::Quote {
            vehicle_type,
            passengers,
        } => {
            let vehicle_type: VehicleType = vehicle_type.parse()?;
            let quote = fare::quote(vehicle_type, passengers, settings.tax_rate);
            println!("{} {}", vehicle_type.icon(), vehicle_type.label());
            println!("  Fare  {:>6}", quote.price);
            println!("  Tax   {:>6}", quote.tax);
            println!("  Total {:>6}", quote.total);
        }
        Commands::Pay { id, method } => {
            let mut store = BookingStore::open(&store_path)?;
            let booking = store
                .get(&id)
                .with_context(|| format!("Booking '{}' not found", id))?;
            let vehicle_type = booking
                .vehicle_type
                .with_context(|| format!("Booking '{}' has no vehicle type", id))?;
            let quote = fare::quote(vehicle_type, booking.passengers, settings.tax_rate);
            store.confirm_payment(&id, method.as_str(), quote.total, Utc::now())?;
            println!("Payment of {} received. Booking {} confirmed.", quote.total, id);
        }
        Commands::List { status } => {
            let status = status.as_deref().map(str::parse::<BookingStatus>).transpose()?;
            let store = BookingStore::open(&store_path)?;
            let bookings = store.sorted_by_schedule(status);
            if bookings.is_empty() {
                println!("No bookings found.");
            }
            for b in bookings {
                print_booking(b);
            }
        }
        Commands::Status { id, status } => {
            let status: BookingStatus = status.parse()?;
            let mut store = BookingStore::open(&store_path)?;
            store.set_status(&id, status)?;
            println!("Booking {} is now {}", id, status);
        }
        Commands::Delete { id } => {
            let mut store = BookingStore::open(&store_path)?;
            store.remove(&id)?;
            println!("Deleted booking {}", id);
        }
        Commands::Stats => {
            let store = BookingStore::open(&store_path)?;
            let stats = store.stats(now);
            println!("Total     {}", stats.total);
            println!("Pending   {}", stats.pending);
            println!("Confirmed {}", stats.confirmed);
            println!("Completed {}", stats.completed);
            println!("Upcoming  {}", stats.upcoming);

            let recent = store.recent(RECENT_LIMIT);
            if !recent.is_empty() {
                println!();
                println!("Recent bookings");
                for b in recent {
                    print_booking(b);
                }
            }
        }
    }

    Ok(())
}
