use super::AttackValidation;
use crate::{
    aa::{AAFramework, LabelType, Semantics},
    error::{EngineError, Result},
    solvers::{ComputationLimits, EnumerationStrategy, ExtensionCache, SemanticsEngine},
    utils::{Label, Labelling},
};
use log::debug;
use std::fmt::Display;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// A way to score the strength of an argument given the semantics of the framework it belongs to.
///
/// Policies get an engine bound to the framework, the grounded labelling of this framework
/// and the id of the argument to score.
/// The returned score must lie in `[0, 1]`.
pub trait StrengthPolicy<T>
where
    T: LabelType,
{
    /// The name of the policy, as displayed to the user.
    fn name(&self) -> &'static str;

    /// Scores an argument.
    fn score(
        &self,
        engine: &SemanticsEngine<'_, T>,
        grounded: &Labelling,
        target: usize,
    ) -> Result<f64>;
}

fn base_score(label: Label) -> f64 {
    match label {
        Label::In => 1.0,
        Label::Undec => 0.5,
        Label::Out => 0.0,
    }
}

/// Scores arguments by their grounded label: 1 for IN, 0.5 for UNDEC, 0 for OUT.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroundedPolicy;

impl<T> StrengthPolicy<T> for GroundedPolicy
where
    T: LabelType,
{
    fn name(&self) -> &'static str {
        StrengthPolicyKind::Grounded.into()
    }

    fn score(
        &self,
        _engine: &SemanticsEngine<'_, T>,
        grounded: &Labelling,
        target: usize,
    ) -> Result<f64> {
        Ok(base_score(grounded.label_of(target)))
    }
}

/// Scores arguments by the fraction of preferred extensions they belong to.
///
/// The fraction is only used when the argument is credulously but not skeptically accepted;
/// the grounded score is returned otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct PreferredFractionPolicy;

impl<T> StrengthPolicy<T> for PreferredFractionPolicy
where
    T: LabelType,
{
    fn name(&self) -> &'static str {
        StrengthPolicyKind::PreferredFraction.into()
    }

    fn score(
        &self,
        engine: &SemanticsEngine<'_, T>,
        grounded: &Labelling,
        target: usize,
    ) -> Result<f64> {
        let preferred = engine.compute(Semantics::PR)?;
        let n_containing = preferred.count_containing(target);
        if n_containing > 0 && n_containing < preferred.len() {
            Ok(n_containing as f64 / preferred.len() as f64)
        } else {
            Ok(base_score(grounded.label_of(target)))
        }
    }
}

/// Scores arguments by their acceptance rate among the complete extensions,
/// averaged with 1 when the argument belongs to the grounded extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompleteBlendPolicy;

impl<T> StrengthPolicy<T> for CompleteBlendPolicy
where
    T: LabelType,
{
    fn name(&self) -> &'static str {
        StrengthPolicyKind::CompleteBlend.into()
    }

    fn score(
        &self,
        engine: &SemanticsEngine<'_, T>,
        grounded: &Labelling,
        target: usize,
    ) -> Result<f64> {
        let complete = engine.compute(Semantics::CO)?;
        let rate = if complete.is_empty() {
            0.0
        } else {
            complete.count_containing(target) as f64 / complete.len() as f64
        };
        if grounded.label_of(target) == Label::In {
            Ok((rate + 1.0) / 2.0)
        } else {
            Ok(rate)
        }
    }
}

/// The available strength policies.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum StrengthPolicyKind {
    /// See [GroundedPolicy].
    Grounded,
    /// See [PreferredFractionPolicy].
    #[default]
    PreferredFraction,
    /// See [CompleteBlendPolicy].
    CompleteBlend,
}

impl StrengthPolicyKind {
    /// Builds the policy associated with this kind.
    pub fn policy<T>(&self) -> Box<dyn StrengthPolicy<T>>
    where
        T: LabelType,
    {
        match self {
            StrengthPolicyKind::Grounded => Box::new(GroundedPolicy),
            StrengthPolicyKind::PreferredFraction => Box::new(PreferredFractionPolicy),
            StrengthPolicyKind::CompleteBlend => Box::new(CompleteBlendPolicy),
        }
    }
}

/// A strength score, together with the name of the policy that computed it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualStrength {
    score: f64,
    policy: &'static str,
}

impl ResidualStrength {
    /// Returns the score, in `[0, 1]`.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Returns the name of the policy used to compute the score.
    pub fn policy(&self) -> &'static str {
        self.policy
    }
}

impl Display for ResidualStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.score, self.policy)
    }
}

/// Computes the residual strength of arguments, usually after an attack was validated.
///
/// # Example
///
/// ```
/// # use rebuttal::aa::AAFramework;
/// # use rebuttal::analysis::{AttackValidator, ResidualStrengthEvaluator, StrengthPolicyKind};
/// let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b")]).unwrap();
/// let validation = AttackValidator::new(&af).unwrap().validate(&"b", &"a");
/// let evaluator = ResidualStrengthEvaluator::default().with_policy_kind(StrengthPolicyKind::Grounded);
/// let strength = evaluator.evaluate(&validation).unwrap();
/// assert_eq!(0.5, strength.score());
/// assert_eq!("grounded", strength.policy());
/// ```
pub struct ResidualStrengthEvaluator<'a, T>
where
    T: LabelType,
{
    policy: Box<dyn StrengthPolicy<T> + 'a>,
    limits: ComputationLimits,
    strategy: EnumerationStrategy,
    cache: Option<&'a ExtensionCache>,
}

impl<T> Default for ResidualStrengthEvaluator<'_, T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            policy: StrengthPolicyKind::default().policy(),
            limits: ComputationLimits::default(),
            strategy: EnumerationStrategy::default(),
            cache: None,
        }
    }
}

impl<'a, T> ResidualStrengthEvaluator<'a, T>
where
    T: LabelType,
{
    /// Uses one of the built-in policies.
    pub fn with_policy_kind(self, kind: StrengthPolicyKind) -> Self {
        self.with_policy(kind.policy())
    }

    /// Uses a custom policy.
    pub fn with_policy(mut self, policy: Box<dyn StrengthPolicy<T> + 'a>) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the limits of the semantics computations needed by the policy.
    pub fn with_limits(mut self, limits: ComputationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the enumeration strategy of the semantics computations needed by the policy.
    pub fn with_strategy(mut self, strategy: EnumerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Shares the extensions computed by the policy through a cache.
    pub fn with_cache(mut self, cache: &'a ExtensionCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Returns the name of the policy in use.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }

    fn engine<'b>(&self, af: &'b AAFramework<T>) -> SemanticsEngine<'b, T>
    where
        'a: 'b,
    {
        let engine = SemanticsEngine::new(af)
            .with_limits(self.limits)
            .with_strategy(self.strategy);
        match self.cache {
            Some(c) => engine.with_cache(c),
            None => engine,
        }
    }

    fn score_with(
        &self,
        engine: &SemanticsEngine<'_, T>,
        grounded: &Labelling,
        target: usize,
    ) -> Result<ResidualStrength> {
        let score = self.policy.score(engine, grounded, target)?;
        debug!(
            "strength of argument {} is {} under policy {}",
            engine.framework().argument_set().get_argument_by_id(target),
            score,
            self.policy.name()
        );
        Ok(ResidualStrength {
            score,
            policy: self.policy.name(),
        })
    }

    /// Computes the strength of an argument in a framework.
    pub fn evaluate_argument(&self, af: &AAFramework<T>, argument: &T) -> Result<ResidualStrength> {
        let target = af.argument_set().get_argument_index(argument)?;
        let engine = self.engine(af);
        let grounded = engine.grounded_labelling()?;
        self.score_with(&engine, &grounded, target)
    }

    /// Computes the strength of the target of a validated attack, in the augmented framework.
    ///
    /// If the attack was invalid, the error that made it invalid is returned.
    pub fn evaluate(&self, validation: &AttackValidation<T>) -> Result<ResidualStrength> {
        if let Some(cause) = validation.cause() {
            return Err(cause.clone());
        }
        let target = validation.target().ok_or_else(|| {
            EngineError::UnknownArgument("target of the validated attack".to_string())
        })?;
        let engine = self.engine(validation.augmented_framework());
        self.score_with(&engine, validation.grounded_labelling(), target)
    }
}
