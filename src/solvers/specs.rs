use crate::aa::{Argument, LabelType};
use crate::error::Result;
use crate::utils::ArgSet;

/// A trait for solvers able to compute an extension.
pub trait SingleExtensionComputer<T>
where
    T: LabelType,
{
    /// Computes a single extension.
    ///
    /// In case the problem admits no extension, [Option::None] is returned.
    /// An error is returned if the computation exceeds the limits of the solver.
    fn compute_one_extension(&mut self) -> Result<Option<ArgSet>>;
}

/// A trait for solvers able to enumerate all the extensions of a semantics.
pub trait ExtensionEnumerator<T>
where
    T: LabelType,
{
    /// Computes all the extensions, sorted in increasing order.
    ///
    /// An empty vector means that no extension exists;
    /// an error is returned if the computation exceeds the limits of the solver.
    fn enumerate_extensions(&mut self) -> Result<Vec<ArgSet>>;
}

/// A trait for solvers able to check the credulous acceptance of an argument.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the credulous acceptance of an argument.
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        self.is_credulously_accepted_with_certificate(arg)
            .map(|(accepted, _)| accepted)
    }

    /// Checks the credulous acceptance of an argument, and provide a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is an extension containing the argument.
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgSet>)>;
}

/// A trait for solvers able to check the skeptical acceptance of an argument.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the skeptical acceptance of an argument.
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool> {
        self.is_skeptically_accepted_with_certificate(arg)
            .map(|(accepted, _)| accepted)
    }

    /// Checks the skeptical acceptance of an argument, and provide a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`.
    /// Otherwise, the certificate is an extension that does not contain the argument.
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgSet>)>;
}
