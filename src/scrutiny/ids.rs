//! Per-pass gap identifiers.

/// Issues gap ids for one scrutiny pass.
///
/// Each pass owns a fresh counter, so concurrent runs over different roadmaps
/// never share numbering.
#[derive(Debug, Default)]
pub struct GapIds {
    next: u32,
}

impl GapIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id (`GAP-001`, `GAP-002`, ...).
    pub fn next_id(&mut self) -> String {
        self.next += 1;
        format!("GAP-{:03}", self.next)
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut ids = GapIds::new();
        assert_eq!(ids.next_id(), "GAP-001");
        assert_eq!(ids.next_id(), "GAP-002");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn fresh_counter_restarts() {
        let mut first = GapIds::new();
        first.next_id();
        first.next_id();

        let mut second = GapIds::new();
        assert_eq!(second.next_id(), "GAP-001");
    }
}
