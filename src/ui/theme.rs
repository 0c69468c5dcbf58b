//! Visual theme and styling.

use console::Style;

use crate::scrutiny::Severity;

/// Scrutineer's visual theme.
#[derive(Debug, Clone)]
pub struct ScrutinyTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    pub critical: Style,
    pub major: Style,
    pub minor: Style,
    pub info: Style,
}

impl Default for ScrutinyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrutinyTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            critical: Style::new().red().bold(),
            major: Style::new().red(),
            minor: Style::new().color256(208),
            info: Style::new().cyan().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            critical: Style::new(),
            major: Style::new(),
            minor: Style::new(),
            info: Style::new(),
        }
    }

    /// Colored theme that styles even when the target is not a terminal.
    pub fn forced() -> Self {
        let theme = Self::new();
        Self {
            success: theme.success.force_styling(true),
            warning: theme.warning.force_styling(true),
            error: theme.error.force_styling(true),
            dim: theme.dim.force_styling(true),
            highlight: theme.highlight.force_styling(true),
            header: theme.header.force_styling(true),
            critical: theme.critical.force_styling(true),
            major: theme.major.force_styling(true),
            minor: theme.minor.force_styling(true),
            info: theme.info.force_styling(true),
        }
    }

    /// Style for a gap severity.
    pub fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Critical => &self.critical,
            Severity::Major => &self.major,
            Severity::Minor => &self.minor,
            Severity::Info => &self.info,
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{} {}", self.header.apply_to("◆"), self.highlight.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
