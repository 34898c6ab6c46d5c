use super::{
    ComputationLimits, CompleteSemanticsSolver, CredulousAcceptanceComputer, DefenseChecker,
    EnumerationStrategy, ExtensionEnumerator, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    error::Result,
    utils::ArgSet,
};

/// A solver for the stable semantics.
///
/// Stable extensions are the conflict-free sets attacking every argument they do not contain.
/// Each of them is a complete extension; they are computed by filtering the complete ones.
///
/// A framework may have no stable extension.
/// In this case, no argument is credulously accepted and every argument is skeptically accepted.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    complete_solver: CompleteSemanticsSolver<'a, T>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver for the stable semantics, using the default limits.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::AAFramework;
    /// # use rebuttal::solvers::{SingleExtensionComputer, StableSemanticsSolver};
    /// let af = AAFramework::new_with_labels_and_attacks(&["a"], &[("a", "a")]).unwrap();
    /// let mut solver = StableSemanticsSolver::new(&af);
    /// assert!(solver.compute_one_extension().unwrap().is_none());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_limits(af, ComputationLimits::default())
    }

    /// Builds a new solver for the stable semantics, using the provided limits.
    pub fn new_with_limits(af: &'a AAFramework<T>, limits: ComputationLimits) -> Self {
        Self {
            af,
            complete_solver: CompleteSemanticsSolver::new_with_limits(af, limits),
        }
    }

    /// Sets the strategy used to enumerate the underlying complete extensions.
    pub fn with_strategy(mut self, strategy: EnumerationStrategy) -> Self {
        self.complete_solver = self.complete_solver.with_strategy(strategy);
        self
    }
}

impl<T> SingleExtensionComputer<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Result<Option<ArgSet>> {
        Ok(self.enumerate_extensions()?.into_iter().next())
    }
}

impl<T> ExtensionEnumerator<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<ArgSet>> {
        let checker = DefenseChecker::new(self.af);
        Ok(self
            .complete_solver
            .enumerate_extensions()?
            .into_iter()
            .filter(|ext| checker.is_stable(ext))
            .collect())
    }
}

impl<T> CredulousAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
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

impl<T> SkepticalAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn read_af(instance: &str) -> AAFramework<String> {
        let reader = AspartixReader::default();
        reader.read(&mut instance.as_bytes()).unwrap()
    }

    #[test]
    fn test_compute_one() {
        let af = read_af(
            r#"
        arg(a0).
        arg(a1).
        att(a0,a1).
        "#,
        );
        let mut solver = StableSemanticsSolver::new(&af);
        assert_eq!(
            vec!["a0".to_string()],
            solver.compute_one_extension().unwrap().unwrap().labels(&af)
        )
    }

    #[test]
    fn test_compute_one_auto_attack() {
        let af = read_af(
            r#"
        arg(a0).
        arg(a1).
        att(a0,a1).
        att(a0,a0).
        "#,
        );
        let mut solver = StableSemanticsSolver::new(&af);
        assert!(solver.compute_one_extension().unwrap().is_none());
    }

    #[test]
    fn test_compute_one_no_exists() {
        let af = read_af(
            r#"
        arg(a0).
        arg(a1).
        arg(a2).
        att(a0,a1).
        att(a1,a2).
        att(a2,a0).
        "#,
        );
        let mut solver = StableSemanticsSolver::new(&af);
        assert!(solver.compute_one_extension().unwrap().is_none());
    }

    #[test]
    fn test_acceptance_mutual_attack() {
        let af = read_af(
            r#"
        arg(a0).
        arg(a1).
        att(a0,a1).
        att(a1,a0).
        "#,
        );
        let mut solver = StableSemanticsSolver::new(&af);
        let a0 = af.argument_set().get_argument(&"a0".to_string()).unwrap();
        let a1 = af.argument_set().get_argument(&"a1".to_string()).unwrap();
        assert!(solver.is_credulously_accepted(a0).unwrap());
        assert!(solver.is_credulously_accepted(a1).unwrap());
        assert!(!solver.is_skeptically_accepted(a0).unwrap());
        assert!(!solver.is_skeptically_accepted(a1).unwrap());
    }

    #[test]
    fn test_acceptance_without_extension() {
        let af = read_af(
            r#"
        arg(a0).
        arg(a1).
        arg(a2).
        att(a0,a1).
        att(a1,a0).
        att(a2,a2).
        "#,
        );
        let mut solver = StableSemanticsSolver::new(&af);
        let a0 = af.argument_set().get_argument(&"a0".to_string()).unwrap();
        assert!(!solver.is_credulously_accepted(a0).unwrap());
        assert_eq!(
            (true, None),
            solver.is_skeptically_accepted_with_certificate(a0).unwrap()
        );
    }

    #[test]
    fn test_stable_differs_from_preferred() {
        let af = read_af(
            r#"
        arg(a).
        arg(b).
        arg(c).
        att(a,b).
        att(b,a).
        att(b,c).
        att(c,c).
        "#,
        );
        let mut solver = StableSemanticsSolver::new(&af);
        assert_eq!(
            vec![vec!["b".to_string()]],
            solver
                .enumerate_extensions()
                .unwrap()
                .iter()
                .map(|e| e.labels(&af))
                .collect::<Vec<Vec<String>>>()
        );
    }
}
