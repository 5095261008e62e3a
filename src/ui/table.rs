use crate::route::{LedgerStats, Route};
use crate::ui::theme;
use owo_colors::OwoColorize;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct RouteRow {
    #[tabled(rename = "Destination")]
    destination: String,
    #[tabled(rename = "No.")]
    number: String,
    #[tabled(rename = "Time")]
    time: String,
}

impl From<&Route> for RouteRow {
    fn from(route: &Route) -> Self {
        let t = theme();
        Self {
            destination: route.destination.clone(),
            number: route.number.style(t.route_number).to_string(),
            time: route.time.style(t.departure_time).to_string(),
        }
    }
}

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Table")]
    table: &'static str,
    #[tabled(rename = "Rows")]
    rows: usize,
}

/// Departure table; empty string when there is nothing to show.
/// The route number column is right-aligned.
pub fn routes_table(routes: &[Route]) -> String {
    if routes.is_empty() {
        return String::new();
    }

    Table::new(routes.iter().map(RouteRow::from))
        .with(Style::rounded())
        .modify(Columns::single(1), Alignment::right())
        .to_string()
}

/// Row counts per ledger table
pub fn stats_table(stats: &LedgerStats) -> String {
    let rows = [
        CountRow { table: "destinations", rows: stats.destinations },
        CountRow { table: "departures", rows: stats.departures },
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}
