//! Status lines printed around the ledger tables

use crate::route::Route;
use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

/// Printed when a query yields no rows
pub const NO_ROUTES: &str = "No routes found.";

pub fn heading(icon: &str, text: &str) {
    println!("{} {}", icon, text.style(theme().heading));
}

pub fn route_added(route: &Route) {
    println!(
        "{} {} #{} to {} at {}",
        Icons::CHECK,
        "Added route".style(theme().ok),
        route.number.style(theme().route_number),
        route.destination,
        route.time.style(theme().departure_time)
    );
}

pub fn schema_ready(tables: &[String]) {
    println!(
        "{} {} {}",
        Icons::CHECK,
        "Schema ready:".style(theme().ok),
        tables.join(", ")
    );
}

pub fn no_routes() {
    println!("{} {}", Icons::WARN, NO_ROUTES.style(theme().notice));
}

/// `label: value` with the label dimmed
pub fn field(label: &str, value: &str) {
    println!("  {} {}", format!("{label}:").style(theme().label), value);
}

/// Diagnostics go to stderr so JSON on stdout stays parseable
pub fn failure(message: &str) {
    eprintln!("{} {}", Icons::CROSS, message.style(theme().failure));
}
