//! Plain-text rendering of the two surfaces. Pure functions of [`BookingView`].

use railbook_core::{BookingStep, BookingView, BookingWizard, Surface, Tab};
use railbook_shared::{Station, Train};
use std::fmt::Write;

pub fn render(view: &BookingView) -> String {
    match view.surface {
        Surface::Landing => landing(),
        Surface::Booking if view.wizard.is_open() => wizard(view),
        Surface::Booking => booking(view),
    }
}

pub fn landing() -> String {
    let mut out = String::new();
    out.push_str("RAILWAY.\n\n");
    out.push_str("EST. 2026 - PREMIUM TRAVEL\n");
    out.push_str("Redefining Rail Travel\n");
    out.push_str("Journey across India in unparalleled comfort.\n");
    out.push_str("Real-time booking, instant confirmation, zero hassle.\n\n");
    out.push_str("Type `start` to book your journey.\n");
    out
}

fn booking(view: &BookingView) -> String {
    let mut out = String::new();
    out.push_str("Railbook Train Booking\n");
    out.push_str("Book train tickets online\n\n");

    let _ = writeln!(
        out,
        "From: {}   To: {}   {}",
        code_or_placeholder(&view.from, "From Station"),
        code_or_placeholder(&view.to, "To Station"),
        if view.can_search() { "[search]" } else { "(set from/to to search)" }
    );

    let (trains_label, stations_label) = (
        format!("Trains ({})", view.trains.len()),
        format!("Stations ({})", view.stations.len()),
    );
    match view.tab {
        Tab::Trains => {
            let _ = writeln!(out, "[{}]  {}", trains_label, stations_label);
        }
        Tab::Stations => {
            let _ = writeln!(out, "{}  [{}]", trains_label, stations_label);
        }
    }

    for notice in view.notices() {
        let _ = writeln!(out, "! {} (type `retry` to try again)", notice.message);
    }
    out.push('\n');

    if view.loading {
        out.push_str("Loading...\n");
        return out;
    }

    match view.tab {
        Tab::Trains => {
            let trains = view.visible_trains().unwrap_or_default();
            if trains.is_empty() {
                out.push_str("No trains found\n");
            }
            for train in trains {
                out.push_str(&train_card(train));
            }
        }
        Tab::Stations => {
            for station in view.visible_stations().unwrap_or_default() {
                out.push_str(&station_card(station));
            }
        }
    }
    out
}

fn code_or_placeholder<'a>(code: &'a str, placeholder: &'a str) -> &'a str {
    if code.is_empty() {
        placeholder
    } else {
        code
    }
}

pub fn train_card(train: &Train) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  #{}  [{}]", train.name, train.number, train.badge());
    let _ = writeln!(out, "  {} → {}", train.source, train.destination);
    let _ = writeln!(
        out,
        "  {} - {} | {} seats | ₹{}",
        train.departure_time, train.arrival_time, train.seats_available, train.fare
    );
    if !train.running_days.is_empty() {
        let _ = writeln!(out, "  {}", train.running_days_label());
    }
    let _ = writeln!(out, "  `book {}`", train.number);
    out.push('\n');
    out
}

pub fn station_card(station: &Station) -> String {
    format!("{}  {}  ({}, {})\n", station.code, station.name, station.city, station.state)
}

fn progress(step: BookingStep) -> String {
    let current = step.number().unwrap_or(0);
    let marker = |n: u8| {
        if current > n {
            "✓"
        } else if current == n {
            "●"
        } else {
            "○"
        }
    };
    format!(
        "{} 1 Passenger ── {} 2 Payment ── {} 3 Confirmed",
        marker(1),
        marker(2),
        marker(3)
    )
}

fn wizard(view: &BookingView) -> String {
    let mut out = String::new();
    let attempt = match view.wizard.attempt() {
        Some(attempt) => attempt,
        None => return out,
    };
    let train = &attempt.train;
    let route = format!(
        "{} → {}",
        view.station_name(&train.source),
        view.station_name(&train.destination)
    );

    let _ = writeln!(out, "{}\n", progress(view.wizard.step()));
    let _ = writeln!(out, "{}", train.name);
    let _ = writeln!(out, "{}", route);
    let _ = writeln!(out, "Fare: ₹{}\n", train.fare);

    match &view.wizard {
        BookingWizard::Passenger(_) => {
            let p = &attempt.passenger;
            out.push_str("Passenger Details\n");
            let _ = writeln!(out, "  name:   {}", p.name);
            let _ = writeln!(out, "  email:  {}", p.email);
            let _ = writeln!(out, "  phone:  {}", p.phone);
            let _ = writeln!(out, "  age:    {}", p.age);
            let _ = writeln!(out, "  gender: {}", p.gender);
            out.push_str("\n`set <field> <value>` to fill in, `next` to continue to payment, `close` to cancel.\n");
        }
        BookingWizard::Payment(_) => {
            let pay = &attempt.payment;
            out.push_str("Payment Details\n");
            let card = if pay.card_number.expose().is_empty() {
                String::new()
            } else {
                format!("**** {}", pay.card_number.last4())
            };
            let _ = writeln!(out, "  card:   {}", card);
            let _ = writeln!(out, "  expiry: {}", pay.expiry);
            let _ = writeln!(out, "  cvv:    {}", "*".repeat(pay.cvv.expose().chars().count()));
            let _ = writeln!(out, "\nTotal Amount: ₹{}", train.fare);
            let _ = writeln!(
                out,
                "\n`next` to pay ₹{}, `back` to edit passenger details, `close` to cancel.",
                train.fare
            );
        }
        BookingWizard::Confirmed { reference, .. } => {
            out.push_str("Booking Confirmed!\n\n");
            let _ = writeln!(out, "  PNR: {}", reference);
            let _ = writeln!(out, "  Train:     {} ({})", train.name, train.number);
            let _ = writeln!(out, "  Route:     {}", route);
            let _ = writeln!(out, "  Passenger: {}", attempt.passenger.name);
            let _ = writeln!(out, "  Time:      {} - {}", train.departure_time, train.arrival_time);
            let _ = writeln!(out, "  Fare:      ₹{}", train.fare);
            out.push_str("  CONFIRMED\n\n`done` to close.\n");
        }
        BookingWizard::Closed => {}
    }
    out
}
