use crate::{
    aa::{AAFramework, LabelType},
    error::{EngineError, Result},
    solvers::SemanticsEngine,
    utils::{self, ArgSet, Label, Labelling},
};
use log::debug;
use strum_macros::{AsRefStr, Display, EnumString};

/// The verdict of the validation of a proposed attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum AttackVerdict {
    /// The attack changes the status of its target: the target was not OUT and is not IN after the attack.
    Effective,
    /// The attack leaves the target status unchanged.
    Redundant,
    /// The attack refers to an unknown argument.
    Invalid,
}

/// The result of the validation of a proposed attack.
///
/// It holds the augmented framework (the original one plus the attack)
/// and its grounded extension, so that no further computation is needed to inspect the result.
/// For invalid attacks, the augmented framework is a copy of the original one.
#[derive(Debug, Clone)]
pub struct AttackValidation<T>
where
    T: LabelType,
{
    verdict: AttackVerdict,
    cause: Option<EngineError>,
    target: Option<usize>,
    target_label_before: Option<Label>,
    target_label_after: Option<Label>,
    augmented: AAFramework<T>,
    grounded_labelling: Labelling,
}

impl<T> AttackValidation<T>
where
    T: LabelType,
{
    /// Returns the verdict.
    pub fn verdict(&self) -> AttackVerdict {
        self.verdict
    }

    /// Returns the error that made the attack invalid, if any.
    pub fn cause(&self) -> Option<&EngineError> {
        self.cause.as_ref()
    }

    /// Returns the id of the target, if it exists.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// Returns the grounded label of the target before the attack, if the target exists.
    pub fn target_label_before(&self) -> Option<Label> {
        self.target_label_before
    }

    /// Returns the grounded label of the target after the attack, if the target exists.
    pub fn target_label_after(&self) -> Option<Label> {
        self.target_label_after
    }

    /// Returns the framework augmented with the attack.
    pub fn augmented_framework(&self) -> &AAFramework<T> {
        &self.augmented
    }

    /// Returns the grounded labelling of the augmented framework.
    pub fn grounded_labelling(&self) -> &Labelling {
        &self.grounded_labelling
    }

    /// Returns the grounded extension of the augmented framework.
    pub fn grounded_extension(&self) -> ArgSet {
        self.grounded_labelling.in_set()
    }
}

/// Decides whether proposed attacks are structurally and semantically relevant.
///
/// The validator is built from a framework and its grounded labelling.
/// A proposed attack is [Invalid](AttackVerdict::Invalid) if one of its endpoints is unknown,
/// [Redundant](AttackVerdict::Redundant) if its target was already OUT, if the attack already exists,
/// or if the target is still IN after the attack,
/// and [Effective](AttackVerdict::Effective) otherwise.
/// The framework is never modified: the attack is added to a copy.
///
/// # Example
///
/// ```
/// # use rebuttal::aa::AAFramework;
/// # use rebuttal::analysis::{AttackValidator, AttackVerdict};
/// let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[]).unwrap();
/// let validator = AttackValidator::new(&af).unwrap();
/// let validation = validator.validate(&"a", &"b");
/// assert_eq!(AttackVerdict::Effective, validation.verdict());
/// assert_eq!(vec!["a"], validation.grounded_extension().labels(validation.augmented_framework()));
/// ```
pub struct AttackValidator<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    grounded_labelling: Labelling,
}

impl<'a, T> AttackValidator<'a, T>
where
    T: LabelType,
{
    /// Builds a validator, computing the grounded labelling of the framework.
    ///
    /// An error is returned if the framework does not pass the integrity checks.
    pub fn new(af: &'a AAFramework<T>) -> Result<Self> {
        let grounded_labelling = SemanticsEngine::new(af).grounded_labelling()?;
        Ok(Self {
            af,
            grounded_labelling,
        })
    }

    /// Builds a validator from an already computed grounded extension.
    ///
    /// An error is returned if the framework does not pass the integrity checks,
    /// or if the extension refers to an argument id the framework does not have.
    pub fn new_with_grounded_extension(af: &'a AAFramework<T>, grounded: &ArgSet) -> Result<Self> {
        af.check_integrity()?;
        if let Some(id) = grounded.iter().find(|i| *i >= af.n_arguments()) {
            return Err(EngineError::InvalidFramework(format!(
                "the grounded extension refers to argument id {} but the framework has {} argument(s)",
                id,
                af.n_arguments()
            )));
        }
        Ok(Self {
            af,
            grounded_labelling: Labelling::from_extension(af, grounded),
        })
    }

    /// Validates the attack from `counter` to `target`.
    pub fn validate(&self, counter: &T, target: &T) -> AttackValidation<T> {
        let arguments = self.af.argument_set();
        let target_id = arguments.get_argument_index(target).ok();
        let ids = arguments
            .get_argument_index(counter)
            .and_then(|c| arguments.get_argument_index(target).map(|t| (c, t)));
        let (counter_id, target_id) = match ids {
            Ok(ids) => ids,
            Err(e) => {
                debug!("invalid attack from {} to {}: {}", counter, target, e);
                let label = target_id.map(|t| self.grounded_labelling.label_of(t));
                return AttackValidation {
                    verdict: AttackVerdict::Invalid,
                    cause: Some(e),
                    target: target_id,
                    target_label_before: label,
                    target_label_after: label,
                    augmented: self.af.clone(),
                    grounded_labelling: self.grounded_labelling.clone(),
                };
            }
        };
        let before = self.grounded_labelling.label_of(target_id);
        let unchanged = |verdict| AttackValidation {
            verdict,
            cause: None,
            target: Some(target_id),
            target_label_before: Some(before),
            target_label_after: Some(before),
            augmented: self.af.clone(),
            grounded_labelling: self.grounded_labelling.clone(),
        };
        if self.af.has_attack(counter_id, target_id) {
            debug!("attack from {} to {} already exists", counter, target);
            return unchanged(AttackVerdict::Redundant);
        }
        let mut augmented = self.af.clone();
        if let Err(e) = augmented.new_attack_by_ids(counter_id, target_id) {
            return AttackValidation {
                verdict: AttackVerdict::Invalid,
                cause: Some(e),
                ..unchanged(AttackVerdict::Invalid)
            };
        }
        let grounded_labelling = utils::grounded_labelling(&augmented);
        let after = grounded_labelling.label_of(target_id);
        let verdict = match (before, after) {
            (Label::Out, _) | (_, Label::In) => AttackVerdict::Redundant,
            _ => AttackVerdict::Effective,
        };
        debug!(
            "attack from {} to {} is {} (target was {}, is now {})",
            counter, target, verdict, before, after
        );
        AttackValidation {
            verdict,
            cause: None,
            target: Some(target_id),
            target_label_before: Some(before),
            target_label_after: Some(after),
            augmented,
            grounded_labelling,
        }
    }
}
