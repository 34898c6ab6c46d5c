//! Analyses built on top of the semantics: validation of attacks, strength of arguments and debates.

mod attack_validator;
pub use attack_validator::AttackValidation;
pub use attack_validator::AttackValidator;
pub use attack_validator::AttackVerdict;

mod debate;
pub use debate::CounterKind;
pub use debate::DebateBuilder;

mod residual_strength;
pub use residual_strength::CompleteBlendPolicy;
pub use residual_strength::GroundedPolicy;
pub use residual_strength::PreferredFractionPolicy;
pub use residual_strength::ResidualStrength;
pub use residual_strength::ResidualStrengthEvaluator;
pub use residual_strength::StrengthPolicy;
pub use residual_strength::StrengthPolicyKind;

mod validation_report;
pub use validation_report::ValidationReport;
