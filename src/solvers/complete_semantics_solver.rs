use super::{
    limits::SearchBudget, ComputationLimits, CredulousAcceptanceComputer, DefenseChecker,
    EnumerationStrategy, ExtensionEnumerator, SingleExtensionComputer,
    SkepticalAcceptanceComputer,
};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    error::Result,
    utils::{self, ArgSet, Label},
};
use log::debug;

/// A solver used to solve queries for the complete semantics.
///
/// A complete extension is a conflict-free set of arguments equal to the set of arguments it defends.
/// The extensions are enumerated by a search over the arguments,
/// following the [EnumerationStrategy] given to the solver.
/// The search is bounded by the [ComputationLimits] of the solver.
///
/// Computing one extension and checking skeptical acceptance only require the grounded extension,
/// which is the minimal complete extension.
/// Checking credulous acceptance requires an enumeration.
pub struct CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    limits: ComputationLimits,
    strategy: EnumerationStrategy,
}

impl<'a, T> CompleteSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the complete semantics, using the default limits.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::AAFramework;
    /// # use rebuttal::solvers::{CompleteSemanticsSolver, ExtensionEnumerator};
    /// let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]).unwrap();
    /// let mut solver = CompleteSemanticsSolver::new(&af);
    /// let extensions = solver.enumerate_extensions().unwrap();
    /// assert_eq!(3, extensions.len());
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self::new_with_limits(af, ComputationLimits::default())
    }

    /// Builds a new solver dedicated to the complete semantics, using the provided limits.
    pub fn new_with_limits(af: &'a AAFramework<T>, limits: ComputationLimits) -> Self {
        Self {
            af,
            limits,
            strategy: EnumerationStrategy::default(),
        }
    }

    /// Sets the strategy used to enumerate the extensions.
    pub fn with_strategy(mut self, strategy: EnumerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    fn search_setup(&self) -> (ArgSet, Vec<usize>) {
        let n = self.af.n_arguments();
        let (fixed, candidates) = match self.strategy {
            EnumerationStrategy::Exhaustive => (
                ArgSet::with_capacity(n),
                (0..n).filter(|i| !self.af.is_self_attacking(*i)).collect(),
            ),
            EnumerationStrategy::GroundedSplit => {
                let labelling = utils::grounded_labelling(self.af);
                let candidates = (0..n)
                    .filter(|i| {
                        labelling.label_of(*i) == Label::Undec && !self.af.is_self_attacking(*i)
                    })
                    .collect();
                (labelling.in_set(), candidates)
            }
        };
        let candidates = DefenseChecker::new(self.af).defendable_candidates(&fixed, candidates);
        (fixed, candidates)
    }
}

impl<T> SingleExtensionComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn compute_one_extension(&mut self) -> Result<Option<ArgSet>> {
        Ok(Some(utils::grounded_extension(self.af)))
    }
}

impl<T> ExtensionEnumerator<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> Result<Vec<ArgSet>> {
        let (mut current, candidates) = self.search_setup();
        debug!(
            "enumerating complete extensions ({} strategy, branching on {} out of {} arguments)",
            self.strategy,
            candidates.len(),
            self.af.n_arguments()
        );
        let mut search = CompleteExtensionSearch {
            checker: DefenseChecker::new(self.af),
            budget: self.limits.start_search(candidates.len())?,
            candidates,
            found: vec![],
        };
        search.search(0, &mut current)?;
        let mut extensions = search.found;
        extensions.sort_unstable();
        debug!("found {} complete extension(s)", extensions.len());
        Ok(extensions)
    }
}

impl<T> CredulousAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
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

impl<T> SkepticalAcceptanceComputer<T> for CompleteSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<ArgSet>)> {
        let grounded = utils::grounded_extension(self.af);
        if grounded.contains(arg.id()) {
            Ok((true, None))
        } else {
            Ok((false, Some(grounded)))
        }
    }
}

struct CompleteExtensionSearch<'a, T>
where
    T: LabelType,
{
    checker: DefenseChecker<'a, T>,
    budget: SearchBudget,
    candidates: Vec<usize>,
    found: Vec<ArgSet>,
}

impl<T> CompleteExtensionSearch<'_, T>
where
    T: LabelType,
{
    fn search(&mut self, depth: usize, current: &mut ArgSet) -> Result<()> {
        self.budget.tick()?;
        if depth == self.candidates.len() {
            if self.checker.is_complete(current) {
                self.found.push(current.clone());
            }
            return Ok(());
        }
        let arg = self.candidates[depth];
        if self.checker.can_extend(current, arg) {
            current.insert(arg);
            self.search(depth + 1, current)?;
            current.remove(arg);
        }
        self.search(depth + 1, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::io::{AspartixReader, InstanceReader};

    fn read_af(instance: &str) -> AAFramework<String> {
        let reader = AspartixReader::default();
        reader.read(&mut instance.as_bytes()).unwrap()
    }

    fn labels_of(af: &AAFramework<String>, extensions: &[ArgSet]) -> Vec<Vec<String>> {
        extensions.iter().map(|e| e.labels(af)).collect()
    }

    macro_rules! test_for_strategy {
        ($strategy:expr, $suffix:literal) => {
            paste::item! {
    #[test]
    fn [< test_acceptance_1_ $suffix >] () {
        let af = read_af(r#"
        arg(a0).
        arg(a1).
        att(a0,a1).
        "#);
        let mut solver = CompleteSemanticsSolver::new(&af).with_strategy($strategy);
        let a0 = af.argument_set().get_argument(&"a0".to_string()).unwrap();
        let a1 = af.argument_set().get_argument(&"a1".to_string()).unwrap();
        assert!(solver.is_credulously_accepted(a0).unwrap());
        assert!(!solver.is_credulously_accepted(a1).unwrap());
    }

    #[test]
    fn [< test_acceptance_2_ $suffix >] () {
        let af = read_af(r#"
        arg(a0).
        arg(a1).
        att(a0,a1).
        att(a1,a0).
        "#);
        let mut solver = CompleteSemanticsSolver::new(&af).with_strategy($strategy);
        let a0 = af.argument_set().get_argument(&"a0".to_string()).unwrap();
        let a1 = af.argument_set().get_argument(&"a1".to_string()).unwrap();
        assert!(solver.is_credulously_accepted(a0).unwrap());
        assert!(solver.is_credulously_accepted(a1).unwrap());
        assert!(!solver.is_skeptically_accepted(a0).unwrap());
    }

    #[test]
    fn [< test_enumerate_mutual_attack_ $suffix >] () {
        let af = read_af(r#"
        arg(a0).
        arg(a1).
        arg(a2).
        att(a0,a1).
        att(a1,a0).
        att(a0,a2).
        "#);
        let mut solver = CompleteSemanticsSolver::new(&af).with_strategy($strategy);
        let extensions = solver.enumerate_extensions().unwrap();
        assert_eq!(
            vec![
                vec![],
                vec!["a0".to_string()],
                vec!["a1".to_string(), "a2".to_string()],
            ],
            labels_of(&af, &extensions)
        );
    }

    #[test]
    fn [< test_enumerate_odd_cycle_ $suffix >] () {
        let af = read_af(r#"
        arg(a).
        arg(b).
        arg(c).
        att(a,b).
        att(b,c).
        att(c,a).
        "#);
        let mut solver = CompleteSemanticsSolver::new(&af).with_strategy($strategy);
        let extensions = solver.enumerate_extensions().unwrap();
        assert_eq!(vec![ArgSet::with_capacity(3)], extensions);
    }

    #[test]
    fn [< test_enumerate_empty_ $suffix >] () {
        let af = AAFramework::<String>::default();
        let mut solver = CompleteSemanticsSolver::new(&af).with_strategy($strategy);
        assert_eq!(vec![ArgSet::with_capacity(0)], solver.enumerate_extensions().unwrap());
    }

    #[test]
    fn [< test_certificates_ $suffix >] () {
        let af = read_af(r#"
        arg(a0).
        arg(a1).
        arg(a2).
        att(a0,a1).
        "#);
        let mut solver = CompleteSemanticsSolver::new(&af).with_strategy($strategy);
        let a0 = af.argument_set().get_argument(&"a0".to_string()).unwrap();
        let a1 = af.argument_set().get_argument(&"a1".to_string()).unwrap();
        assert_eq!(
            vec!["a0".to_string(), "a2".to_string()],
            solver
                .is_credulously_accepted_with_certificate(a0)
                .unwrap()
                .1
                .unwrap()
                .labels(&af)
        );
        assert_eq!(
            (false, None),
            solver.is_credulously_accepted_with_certificate(a1).unwrap()
        )
    }
            }
        };
    }

    test_for_strategy!(EnumerationStrategy::Exhaustive, "exhaustive");
    test_for_strategy!(EnumerationStrategy::GroundedSplit, "grounded_split");

    #[test]
    fn test_compute_one_is_grounded() {
        let af = read_af(
            r#"
        arg(a0).
        arg(a1).
        arg(a2).
        att(a0,a1).
        att(a1,a2).
        att(a2,a1).
        "#,
        );
        let mut solver = CompleteSemanticsSolver::new(&af);
        assert_eq!(
            vec!["a0".to_string(), "a2".to_string()],
            solver.compute_one_extension().unwrap().unwrap().labels(&af)
        );
    }

    #[test]
    fn test_grounded_split_skips_decided_arguments() {
        let labels = (0..40).map(|i| format!("a{}", i)).collect::<Vec<String>>();
        let attacks = (0..39)
            .map(|i| (labels[i].clone(), labels[i + 1].clone()))
            .collect::<Vec<(String, String)>>();
        let af = AAFramework::new_with_labels_and_attacks(&labels, &attacks).unwrap();
        let limits = ComputationLimits::default().with_max_search_arguments(10);
        let mut split = CompleteSemanticsSolver::new_with_limits(&af, limits)
            .with_strategy(EnumerationStrategy::GroundedSplit);
        assert_eq!(1, split.enumerate_extensions().unwrap().len());
        let mut exhaustive = CompleteSemanticsSolver::new_with_limits(&af, limits)
            .with_strategy(EnumerationStrategy::Exhaustive);
        assert!(matches!(
            exhaustive.enumerate_extensions(),
            Err(EngineError::ComputationTooLarge(_))
        ));
    }

    #[test]
    fn test_undefendable_arguments_are_not_branched_on() {
        let mut labels = vec!["s".to_string()];
        labels.extend((0..30).map(|i| format!("x{}", i)));
        let attacks = labels
            .iter()
            .map(|l| ("s".to_string(), l.clone()))
            .collect::<Vec<(String, String)>>();
        let af = AAFramework::new_with_labels_and_attacks(&labels, &attacks).unwrap();
        for strategy in [EnumerationStrategy::Exhaustive, EnumerationStrategy::GroundedSplit] {
            let mut solver = CompleteSemanticsSolver::new(&af).with_strategy(strategy);
            assert_eq!(0, solver.search_setup().1.len());
            assert_eq!(
                vec![ArgSet::with_capacity(31)],
                solver.enumerate_extensions().unwrap()
            );
        }
    }
}
