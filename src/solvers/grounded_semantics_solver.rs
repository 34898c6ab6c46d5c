use super::{
    CredulousAcceptanceComputer, ExtensionEnumerator, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    error::Result,
    utils::{self, ArgSet},
};

/// A solver used to solve queries for the grounded semantics.
///
/// The (unique) grounded extension is the minimal complete extension (see [CompleteSemanticsSolver](crate::solvers::CompleteSemanticsSolver) for more information).
/// It is computed in time polynomial in the size of the framework.
///
/// This solver implements [SingleExtensionComputer], [ExtensionEnumerator] and both [CredulousAcceptanceComputer] and [SkepticalAcceptanceComputer] interfaces.
/// In all these cases, the computation resumes to the (polynomial time) computation of the grounded extension,
/// and never fails.
///
/// When a certificate is provided, the certificate is the grounded extension itself.
pub struct GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> GroundedSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::{AAFramework, LabelType};
    /// # use rebuttal::solvers::{SingleExtensionComputer, GroundedSemanticsSolver};
    /// fn search_one_extension<T>(af: &AAFramework<T>) where T: LabelType {
    ///     let mut solver = GroundedSemanticsSolver::new(af);
    ///     let ext = solver.compute_one_extension().unwrap().unwrap();
    ///     println!("found the grounded extension: {:?}", ext.labels(af));
    /// }
    /// # search_one_extension::<usize>(&AAFramework::default());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    /// Computes the grounded extension.
    pub fn grounded_extension(&self) -> ArgSet {
        utils::grounded_extension(self.af)
    }
}

impl<T> SingleExtensionComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Result<Option<ArgSet>> {
        Ok(Some(self.grounded_extension()))
    }
}

impl<T> ExtensionEnumerator<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<ArgSet>> {
        Ok(vec![self.grounded_extension()])
    }
}

impl<T> CredulousAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgSet>)> {
        let ext = self.grounded_extension();
        if ext.contains(arg.id()) {
            Ok((true, Some(ext)))
        } else {
            Ok((false, None))
        }
    }
}

impl<T> SkepticalAcceptanceComputer<T> for GroundedSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgSet>)> {
        let ext = self.grounded_extension();
        if ext.contains(arg.id()) {
            Ok((true, None))
        } else {
            Ok((false, Some(ext)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    #[test]
    fn test_grounded_solver() {
        let instance = r#"
        arg(a0).
        arg(a1).
        att(a0,a1).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let mut solver = GroundedSemanticsSolver::new(&af);
        let ext = solver.compute_one_extension().unwrap().unwrap();
        assert_eq!(vec!["a0".to_string()], ext.labels(&af));
        let a0 = af.argument_set().get_argument(&"a0".to_string()).unwrap();
        let a1 = af.argument_set().get_argument(&"a1".to_string()).unwrap();
        assert!(solver.is_credulously_accepted(a0).unwrap());
        assert!(!solver.is_credulously_accepted(a1).unwrap());
        assert!(solver.is_skeptically_accepted(a0).unwrap());
        assert!(!solver.is_skeptically_accepted(a1).unwrap());
        assert_eq!(1, solver.enumerate_extensions().unwrap().len());
    }

    #[test]
    fn test_certificates() {
        let instance = r#"
        arg(a0).
        arg(a1).
        att(a0,a1).
        "#;
        let reader = AspartixReader::default();
        let af = reader.read(&mut instance.as_bytes()).unwrap();
        let mut solver = GroundedSemanticsSolver::new(&af);
        let a0 = af.argument_set().get_argument(&"a0".to_string()).unwrap();
        let a1 = af.argument_set().get_argument(&"a1".to_string()).unwrap();
        assert_eq!(
            vec!["a0".to_string()],
            solver
                .is_credulously_accepted_with_certificate(a0)
                .unwrap()
                .1
                .unwrap()
                .labels(&af)
        );
        assert_eq!(
            vec!["a0".to_string()],
            solver
                .is_skeptically_accepted_with_certificate(a1)
                .unwrap()
                .1
                .unwrap()
                .labels(&af)
        );
        assert_eq!(
            (true, None),
            solver.is_skeptically_accepted_with_certificate(a0).unwrap()
        );
    }
}
