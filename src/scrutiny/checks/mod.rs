//! Built-in checkers.
//!
//! The twelve analyses every scrutiny pass runs, in registry order.

pub mod deliverable_coverage;
pub mod dependency_integrity;
pub mod exit_condition_quality;
pub mod gate_coverage;
pub mod index_flags;
pub mod role_model_alignment;
pub mod rollback_coverage;
pub mod schema_completeness;
pub mod sequence_optimization;
pub mod skill_validity;
pub mod step_specificity;
pub mod tool_validity;

pub use deliverable_coverage::DeliverableCoverageCheck;
pub use dependency_integrity::DependencyIntegrityCheck;
pub use exit_condition_quality::ExitConditionQualityCheck;
pub use gate_coverage::GateCoverageCheck;
pub use index_flags::IndexFlagsCheck;
pub use role_model_alignment::RoleModelAlignmentCheck;
pub use rollback_coverage::RollbackCoverageCheck;
pub use schema_completeness::{SchemaCompletenessCheck, MANDATORY_FIELDS};
pub use sequence_optimization::SequenceOptimizationCheck;
pub use skill_validity::SkillValidityCheck;
pub use step_specificity::StepSpecificityCheck;
pub use tool_validity::ToolValidityCheck;
