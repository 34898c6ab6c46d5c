//! Solvers dedicated to the computation of extensions and to acceptance problems.

mod cache;
pub use cache::ExtensionCache;

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod defense_checker;
pub use defense_checker::DefenseChecker;

mod engine;
pub use engine::SemanticsEngine;
pub use engine::SemanticsExtensions;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod limits;
pub use limits::ComputationLimits;
pub use limits::EnumerationStrategy;
pub use limits::DEFAULT_MAX_SEARCH_ARGUMENTS;
pub use limits::DEFAULT_TIMEOUT;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionEnumerator;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;
