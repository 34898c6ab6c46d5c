use super::{ResidualStrengthEvaluator, ValidationReport};
use crate::{
    aa::{AAFramework, LabelType},
    error::{EngineError, Result},
    solvers::SemanticsEngine,
};
use log::debug;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The kinds of counter-arguments.
///
/// The kind of a counter-argument determines the shape of the attacks it introduces in the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum CounterKind {
    /// Contradicts the original argument.
    DirectRefutation,
    /// Questions a premise of the original argument.
    PremiseChallenge,
    /// Exhibits a case where the original argument does not hold.
    CounterExample,
    /// Proposes another explanation of the conclusion of the original argument.
    AlternativeExplanation,
    /// Derives an absurdity from the original argument.
    ReductioAdAbsurdum,
}

impl CounterKind {
    /// Returns `true` iff counter-arguments of this kind attack the original argument.
    ///
    /// Alternative explanations do not; they compete with the original argument on a shared conclusion.
    pub fn attacks_directly(&self) -> bool {
        !matches!(self, CounterKind::AlternativeExplanation)
    }
}

/// Builds the framework of a debate made of one original argument and typed counter-arguments.
///
/// Counter-arguments attack the original argument, except alternative explanations:
/// they attack a conclusion argument, which is also attacked by the original one.
/// The conclusion argument is only added to the framework when the first alternative explanation is.
///
/// # Example
///
/// ```
/// # use rebuttal::analysis::{CounterKind, DebateBuilder, ResidualStrengthEvaluator};
/// let mut debate = DebateBuilder::new("claim", "conclusion").unwrap();
/// assert_eq!(1.0, debate.assess_strength(&ResidualStrengthEvaluator::default()).unwrap());
/// debate.add_counter("refutation", CounterKind::DirectRefutation).unwrap();
/// assert_eq!(0.0, debate.assess_strength(&ResidualStrengthEvaluator::default()).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DebateBuilder<T>
where
    T: LabelType,
{
    af: AAFramework<T>,
    original: T,
    original_id: usize,
    conclusion: T,
    conclusion_id: Option<usize>,
    counters: Vec<(usize, CounterKind)>,
}

impl<T> DebateBuilder<T>
where
    T: LabelType,
{
    /// Builds a debate with an original argument and the label to use for its conclusion.
    ///
    /// Both labels must be distinct.
    pub fn new(original: T, conclusion: T) -> Result<Self> {
        if original == conclusion {
            return Err(EngineError::duplicate_argument(&conclusion));
        }
        let mut af = AAFramework::default();
        let original_id = af.new_argument(original.clone())?;
        Ok(Self {
            af,
            original,
            original_id,
            conclusion,
            conclusion_id: None,
            counters: vec![],
        })
    }

    /// Adds a counter-argument of the given kind.
    ///
    /// The id of the new argument is returned.
    pub fn add_counter(&mut self, label: T, kind: CounterKind) -> Result<usize> {
        self.add_counter_with_content(label, kind, None)
    }

    /// Adds a counter-argument of the given kind, with a content.
    pub fn add_counter_with_content(
        &mut self,
        label: T,
        kind: CounterKind,
        content: Option<String>,
    ) -> Result<usize> {
        if label == self.conclusion {
            return Err(EngineError::duplicate_argument(&label));
        }
        let id = self.af.new_argument_with_content(label, content)?;
        let target = if kind.attacks_directly() {
            self.original_id
        } else {
            self.conclusion_id()?
        };
        self.af.new_attack_by_ids(id, target)?;
        debug!(
            "added a counter-argument of kind {}; the debate has now {} argument(s) and {} attack(s)",
            kind,
            self.af.n_arguments(),
            self.af.n_attacks()
        );
        self.counters.push((id, kind));
        Ok(id)
    }

    fn conclusion_id(&mut self) -> Result<usize> {
        if let Some(id) = self.conclusion_id {
            return Ok(id);
        }
        let id = self.af.new_argument(self.conclusion.clone())?;
        self.af.new_attack_by_ids(self.original_id, id)?;
        self.conclusion_id = Some(id);
        Ok(id)
    }

    /// Returns the framework built so far.
    pub fn framework(&self) -> &AAFramework<T> {
        &self.af
    }

    /// Consumes the builder and returns the framework.
    pub fn into_framework(self) -> AAFramework<T> {
        self.af
    }

    /// Returns the id of the original argument.
    pub fn original_id(&self) -> usize {
        self.original_id
    }

    /// Returns the id of the conclusion argument, if an alternative explanation was added.
    pub fn conclusion_argument_id(&self) -> Option<usize> {
        self.conclusion_id
    }

    /// Returns the ids and kinds of the counter-arguments, in insertion order.
    pub fn counters(&self) -> &[(usize, CounterKind)] {
        &self.counters
    }

    /// Returns the strength of the original argument under the evaluator policy.
    ///
    /// The strength of an argument that has no counter-argument is 1.
    pub fn assess_strength(&self, evaluator: &ResidualStrengthEvaluator<'_, T>) -> Result<f64> {
        if self.counters.is_empty() {
            return Ok(1.0);
        }
        Ok(evaluator.evaluate_argument(&self.af, &self.original)?.score())
    }

    /// Computes the validation report of a counter-argument against the original argument.
    pub fn validation_report(&self, counter: &T) -> anyhow::Result<ValidationReport<T>> {
        ValidationReport::compute(&SemanticsEngine::new(&self.af), &self.original, counter)
    }
}
