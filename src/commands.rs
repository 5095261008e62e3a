use routes::output::{emit_success, OutputMode};
use routes::ui::{self, Icons};
use routes::{Route, RouteLedger};

pub fn run_init(ledger: &RouteLedger, output_mode: OutputMode) -> anyhow::Result<()> {
    ledger.initialize()?;
    let tables = ledger.tables()?;
    if output_mode.is_human() {
        ui::schema_ready(&tables);
    } else {
        emit_success(output_mode, "init", serde_json::json!({ "tables": tables }))?;
    }
    Ok(())
}

pub fn run_add(
    ledger: &mut RouteLedger,
    number: i64,
    destination: &str,
    time: &str,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let route = ledger.add(number, destination, time)?;
    if output_mode.is_human() {
        ui::route_added(&route);
    } else {
        emit_success(output_mode, "add", &route)?;
    }
    Ok(())
}

pub fn run_display(ledger: &RouteLedger, output_mode: OutputMode) -> anyhow::Result<()> {
    let routes = ledger.list_all()?;
    render_routes("display", &routes, output_mode)
}

pub fn run_select(ledger: &RouteLedger, time: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let routes = ledger.list_after(time)?;
    if output_mode.is_human() {
        ui::heading(Icons::CLOCK, &format!("Departures after {}", time));
    }
    render_routes("select", &routes, output_mode)
}

pub fn run_stats(ledger: &RouteLedger, database: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    let stats = ledger.stats()?;
    if output_mode.is_human() {
        ui::heading(Icons::STATS, "Ledger Statistics");
        ui::field("Database", database);
        println!("{}", ui::stats_table(&stats));
    } else {
        emit_success(output_mode, "stats", stats)?;
    }
    Ok(())
}

fn render_routes(command: &str, routes: &[Route], output_mode: OutputMode) -> anyhow::Result<()> {
    if !output_mode.is_human() {
        return emit_success(output_mode, command, routes);
    }

    if routes.is_empty() {
        ui::no_routes();
    } else {
        ui::heading(Icons::BUS, &format!("{} route(s)", routes.len()));
        println!("{}", ui::routes_table(routes));
    }
    Ok(())
}
