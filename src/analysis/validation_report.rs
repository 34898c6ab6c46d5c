use crate::{
    aa::{LabelType, Semantics},
    io::AspartixWriter,
    solvers::SemanticsEngine,
};
use anyhow::{Context, Result};

/// A summary of the effect of a counter-argument on an original argument.
///
/// The report is computed from the grounded and complete extensions of the framework both arguments belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport<T>
where
    T: LabelType,
{
    /// The counter-argument is in the grounded extension while the original argument is not.
    pub is_valid_attack: bool,
    /// The original argument belongs to at least one complete extension.
    pub original_survives: bool,
    /// The counter-argument belongs to the grounded extension or to a complete extension.
    pub counter_succeeds: bool,
    /// The framework has at least one complete extension.
    pub logical_consistency: bool,
    /// The labels of the grounded extension.
    pub grounded: Vec<T>,
    /// The labels of the complete extensions.
    pub complete: Vec<Vec<T>>,
    /// The framework, written in the Aspartix format.
    pub formal_representation: String,
}

impl<T> ValidationReport<T>
where
    T: LabelType,
{
    /// Computes the report of `counter` against `original` in the framework of the engine.
    pub fn compute(engine: &SemanticsEngine<'_, T>, original: &T, counter: &T) -> Result<Self> {
        let af = engine.framework();
        let context = "while computing a validation report";
        let original_id = af.argument_set().get_argument_index(original).context(context)?;
        let counter_id = af.argument_set().get_argument_index(counter).context(context)?;
        let grounded = engine.compute(Semantics::GR).context(context)?;
        let complete = engine.compute(Semantics::CO).context(context)?;
        let in_grounded = |id| grounded.is_credulously_accepted(id);
        Ok(Self {
            is_valid_attack: in_grounded(counter_id) && !in_grounded(original_id),
            original_survives: complete.is_credulously_accepted(original_id),
            counter_succeeds: in_grounded(counter_id) || complete.is_credulously_accepted(counter_id),
            logical_consistency: !complete.is_empty(),
            grounded: grounded
                .extensions()
                .iter()
                .flat_map(|e| e.labels(af))
                .collect(),
            complete: complete.extensions().iter().map(|e| e.labels(af)).collect(),
            formal_representation: AspartixWriter.framework_to_string(af)?,
        })
    }
}
