//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show per-pass detail and resolved gaps.
    Verbose,
    #[default]
    Normal,
    /// Show the report and the verdict only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-pass detail.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers and progress notes.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
