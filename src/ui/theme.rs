use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for ledger output. Cells in the departure table are styled too,
/// so a plain theme must never emit escape codes.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub heading: Style,
    pub ok: Style,
    pub failure: Style,
    pub notice: Style,
    pub label: Style,
    pub route_number: Style,
    pub departure_time: Style,
}

impl Theme {
    /// Colored only when stdout is a terminal and the environment allows
    /// colors (`CLICOLOR`, `NO_COLOR` are honored by `console`).
    pub fn detect() -> Self {
        if console::Term::stdout().is_term() && console::colors_enabled() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn colored() -> Self {
        Self {
            heading: Style::new().cyan().bold(),
            ok: Style::new().green().bold(),
            failure: Style::new().red().bold(),
            notice: Style::new().yellow(),
            label: Style::new().dimmed(),
            route_number: Style::new().bold(),
            departure_time: Style::new().magenta(),
        }
    }

    pub fn plain() -> Self {
        let none = Style::new();
        Self {
            heading: none,
            ok: none,
            failure: none,
            notice: none,
            label: none,
            route_number: none,
            departure_time: none,
        }
    }

    /// True when every style is a no-op
    pub fn is_plain(&self) -> bool {
        [
            self.heading,
            self.ok,
            self.failure,
            self.notice,
            self.label,
            self.route_number,
            self.departure_time,
        ]
        .iter()
        .all(|s| s.is_plain())
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
