pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{failure, field, heading, no_routes, route_added, schema_ready, NO_ROUTES};
pub use table::{routes_table, stats_table};
pub use theme::{theme, Theme};
