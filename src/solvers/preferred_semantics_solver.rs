use super::{
    ComputationLimits, CompleteSemanticsSolver, CredulousAcceptanceComputer, EnumerationStrategy,
    ExtensionEnumerator, SingleExtensionComputer, SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    error::Result,
    utils::ArgSet,
};

/// A solver for the preferred semantics.
///
/// Preferred extensions are the subset-maximal complete extensions.
/// They are computed by enumerating the complete extensions and discarding the ones strictly included in another one.
/// When several preferred extensions exist, all of them are returned.
///
/// Since an argument is credulously accepted under the preferred semantics iff it is credulously accepted under the complete one,
/// credulous acceptance certificates are preferred extensions obtained the same way.
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    complete_solver: CompleteSemanticsSolver<'a, T>,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the preferred semantics, using the default limits.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::AAFramework;
    /// # use rebuttal::solvers::{ExtensionEnumerator, PreferredSemanticsSolver};
    /// let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]).unwrap();
    /// let mut solver = PreferredSemanticsSolver::new(&af);
    /// assert_eq!(2, solver.enumerate_extensions().unwrap().len());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_limits(af, ComputationLimits::default())
    }

    /// Builds a new solver for the preferred semantics, using the provided limits.
    pub fn new_with_limits(af: &'a AAFramework<T>, limits: ComputationLimits) -> Self {
        Self {
            complete_solver: CompleteSemanticsSolver::new_with_limits(af, limits),
        }
    }

    /// Sets the strategy used to enumerate the underlying complete extensions.
    pub fn with_strategy(mut self, strategy: EnumerationStrategy) -> Self {
        self.complete_solver = self.complete_solver.with_strategy(strategy);
        self
    }
}

/// Keeps the sets that are not strictly included in another set of the list.
///
/// The relative order of the kept sets is preserved.
pub(crate) fn maximal_sets(sets: Vec<ArgSet>) -> Vec<ArgSet> {
    sets.iter()
        .filter(|s| !sets.iter().any(|other| s.is_strict_subset(other)))
        .cloned()
        .collect()
}

impl<T> SingleExtensionComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Result<Option<ArgSet>> {
        Ok(self.enumerate_extensions()?.into_iter().next())
    }
}

impl<T> ExtensionEnumerator<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<ArgSet>> {
        Ok(maximal_sets(self.complete_solver.enumerate_extensions()?))
    }
}

impl<T> CredulousAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgSet>)> {
        let certificate = self
            .enumerate_extensions()?
            .into_iter()
            .find(|ext| ext.contains(arg.id()));
        Ok((certificate.is_some(), certificate))
    }
}

impl<T> SkepticalAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgSet>)> {
        let certificate = self
            .enumerate_extensions()?
            .into_iter()
            .find(|ext| !ext.contains(arg.id()));
        Ok((certificate.is_none(), certificate))
    }
}
