//! Rebuttal is an abstract argumentation engine used to validate counter-arguments.
//!
//! Arguments and their attacks are modelled as an [argumentation framework](aa::AAFramework).
//! The [solvers](solvers) compute the extensions of such frameworks under the grounded, complete, preferred and stable semantics,
//! either one at a time or through the [SemanticsEngine](solvers::SemanticsEngine) facade.
//! The [analysis](analysis) module builds on these semantics to decide whether a proposed attack changes the status of its target,
//! and to score the strength an argument keeps after being attacked.
//!
//! ```
//! # use rebuttal::aa::{AAFramework, Semantics};
//! # use rebuttal::analysis::{AttackValidator, AttackVerdict};
//! # use rebuttal::solvers::SemanticsEngine;
//! let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b")]).unwrap();
//! let grounded = SemanticsEngine::new(&af).compute(Semantics::GR).unwrap();
//! assert_eq!(vec!["a"], grounded.extensions()[0].labels(&af));
//! let validation = AttackValidator::new(&af).unwrap().validate(&"b", &"a");
//! assert_eq!(AttackVerdict::Effective, validation.verdict());
//! ```

#![warn(missing_docs)]

pub mod aa;

pub mod analysis;

pub mod error;

pub mod io;

pub mod solvers;

pub mod utils;
