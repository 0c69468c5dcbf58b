//! Checker registry.
//!
//! The [`CheckerRegistry`] holds checkers in registration order, which is the
//! order their gaps appear in a pass.

use super::checker::{Checker, CheckerId};
use super::checks::{
    DeliverableCoverageCheck, DependencyIntegrityCheck, ExitConditionQualityCheck,
    GateCoverageCheck, IndexFlagsCheck, RoleModelAlignmentCheck, RollbackCoverageCheck,
    SchemaCompletenessCheck, SequenceOptimizationCheck, SkillValidityCheck, StepSpecificityCheck,
    ToolValidityCheck,
};
use super::ids::GapIds;
use super::Gap;
use crate::config::ScrutinyConfig;
use crate::error::{Result, ScrutinyError};
use crate::roadmap::Roadmap;

/// Ordered collection of checkers.
pub struct CheckerRegistry {
    checkers: Vec<Box<dyn Checker>>,
}

impl CheckerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    /// Create a registry with the twelve built-in checkers and default
    /// allow-lists.
    pub fn with_builtins() -> Self {
        Self::from_config(&ScrutinyConfig::default())
    }

    /// Create a registry with the built-in checkers, extending the tool and
    /// skill allow-lists from `config`.
    pub fn from_config(config: &ScrutinyConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SchemaCompletenessCheck));
        registry.register(Box::new(
            ToolValidityCheck::new().with_extras(&config.extra_tool_prefixes, &config.extra_tools),
        ));
        registry.register(Box::new(
            SkillValidityCheck::new().with_extras(&config.extra_skills),
        ));
        registry.register(Box::new(DependencyIntegrityCheck));
        registry.register(Box::new(RoleModelAlignmentCheck));
        registry.register(Box::new(ExitConditionQualityCheck));
        registry.register(Box::new(StepSpecificityCheck));
        registry.register(Box::new(DeliverableCoverageCheck));
        registry.register(Box::new(IndexFlagsCheck));
        registry.register(Box::new(SequenceOptimizationCheck));
        registry.register(Box::new(GateCoverageCheck));
        registry.register(Box::new(RollbackCoverageCheck));
        registry
    }

    /// Register a checker. A checker with the same id replaces the old one in
    /// place.
    pub fn register(&mut self, checker: Box<dyn Checker>) {
        let id = checker.id();
        match self.checkers.iter().position(|c| c.id() == id) {
            Some(index) => self.checkers[index] = checker,
            None => self.checkers.push(checker),
        }
    }

    /// Get a checker by ID.
    pub fn get(&self, id: &CheckerId) -> Option<&dyn Checker> {
        self.checkers
            .iter()
            .find(|c| &c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Keep only the named checkers.
    ///
    /// Fails without changing the registry if any id is unknown.
    pub fn retain_only(&mut self, ids: &[CheckerId]) -> Result<()> {
        if let Some(unknown) = ids.iter().find(|id| self.get(id).is_none()) {
            return Err(ScrutinyError::UnknownChecker {
                id: unknown.to_string(),
            });
        }
        self.checkers.retain(|c| ids.contains(&c.id()));
        Ok(())
    }

    /// Iterate over checkers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Checker> {
        self.checkers.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered checkers.
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Run every checker against `roadmap` and concatenate their gaps.
    pub fn run_all(&self, roadmap: &Roadmap, ids: &mut GapIds) -> Vec<Gap> {
        let mut gaps = Vec::new();
        for checker in self.iter() {
            let found = checker.check(roadmap, ids);
            tracing::debug!("Checker {} reported {} gap(s)", checker.id(), found.len());
            gaps.extend(found);
        }
        gaps
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
