use super::{
    ComputationLimits, CompleteSemanticsSolver, EnumerationStrategy, ExtensionCache,
    ExtensionEnumerator, GroundedSemanticsSolver, PreferredSemanticsSolver,
    StableSemanticsSolver,
};
use crate::{
    aa::{AAFramework, LabelType, Semantics},
    error::Result,
    utils::{self, ArgSet, Labelling},
};
use log::{debug, error};
use std::sync::Arc;

/// The extensions of a framework under a given semantics.
///
/// The extensions are sorted in increasing order.
/// An empty list means the semantics admits no extension (which can only happen for the stable semantics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticsExtensions {
    semantics: Semantics,
    extensions: Arc<Vec<ArgSet>>,
}

impl SemanticsExtensions {
    pub(crate) fn new(semantics: Semantics, extensions: Arc<Vec<ArgSet>>) -> Self {
        Self {
            semantics,
            extensions,
        }
    }

    /// Returns the semantics these extensions were computed for.
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    /// Returns the extensions.
    pub fn extensions(&self) -> &[ArgSet] {
        &self.extensions
    }

    /// Returns the number of extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Returns `true` iff there is no extension.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Checks whether an argument (given by its id) belongs to at least one extension.
    pub fn is_credulously_accepted(&self, id: usize) -> bool {
        self.extensions.iter().any(|e| e.contains(id))
    }

    /// Checks whether an argument (given by its id) belongs to every extension.
    pub fn is_skeptically_accepted(&self, id: usize) -> bool {
        self.extensions.iter().all(|e| e.contains(id))
    }

    /// Returns the number of extensions an argument (given by its id) belongs to.
    pub fn count_containing(&self, id: usize) -> usize {
        self.extensions.iter().filter(|e| e.contains(id)).count()
    }
}

/// The entry point of semantics computations.
///
/// The engine borrows a framework and dispatches semantics computations to the dedicated solvers.
/// It checks the integrity of the framework before any computation,
/// applies the computation limits and the enumeration strategy it is configured with,
/// and optionally shares its results through an [ExtensionCache].
///
/// # Example
///
/// ```
/// # use rebuttal::aa::{AAFramework, Semantics};
/// # use rebuttal::solvers::SemanticsEngine;
/// let af = AAFramework::new_with_labels_and_attacks(
///     &["a", "b", "c"],
///     &[("a", "b"), ("b", "c"), ("c", "a")],
/// ).unwrap();
/// let engine = SemanticsEngine::new(&af);
/// let grounded = engine.compute(Semantics::GR).unwrap();
/// assert!(grounded.extensions()[0].is_empty());
/// assert!(engine.compute(Semantics::ST).unwrap().is_empty());
/// ```
pub struct SemanticsEngine<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    limits: ComputationLimits,
    strategy: EnumerationStrategy,
    cache: Option<&'a ExtensionCache>,
}

impl<'a, T> SemanticsEngine<'a, T>
where
    T: LabelType,
{
    /// Builds an engine for the given framework, using the default limits and strategy and no cache.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self {
            af,
            limits: ComputationLimits::default(),
            strategy: EnumerationStrategy::default(),
            cache: None,
        }
    }

    /// Sets the computation limits.
    pub fn with_limits(mut self, limits: ComputationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the strategy used to enumerate complete extensions.
    pub fn with_strategy(mut self, strategy: EnumerationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the cache used to share computed extensions.
    pub fn with_cache(mut self, cache: &'a ExtensionCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Returns the framework this engine works on.
    pub fn framework(&self) -> &'a AAFramework<T> {
        self.af
    }

    /// Computes the extensions of the framework under the given semantics.
    ///
    /// An [`InvalidFramework`](crate::error::EngineError::InvalidFramework) error is returned if the framework is broken,
    /// and a [`ComputationTooLarge`](crate::error::EngineError::ComputationTooLarge) error if the limits are exceeded.
    /// No partial result is returned in case of error.
    pub fn compute(&self, semantics: Semantics) -> Result<SemanticsExtensions> {
        self.check_framework()?;
        let extensions = match self.cache {
            Some(cache) => {
                let digest = self.af.content_digest();
                debug!("looking up {} extensions of framework {}", semantics, digest);
                cache.get_or_try_compute(digest, semantics, || self.compute_uncached(semantics))?
            }
            None => Arc::new(self.compute_uncached(semantics)?),
        };
        Ok(SemanticsExtensions::new(semantics, extensions))
    }

    /// Computes the grounded labelling of the framework.
    pub fn grounded_labelling(&self) -> Result<Labelling> {
        self.check_framework()?;
        Ok(utils::grounded_labelling(self.af))
    }

    fn check_framework(&self) -> Result<()> {
        self.af.check_integrity().map_err(|e| {
            error!("refusing to compute semantics: {}", e);
            e
        })
    }

    fn compute_uncached(&self, semantics: Semantics) -> Result<Vec<ArgSet>> {
        debug!(
            "computing {} extensions of a framework with {} arguments and {} attacks",
            semantics,
            self.af.n_arguments(),
            self.af.n_attacks()
        );
        match semantics {
            Semantics::GR => GroundedSemanticsSolver::new(self.af).enumerate_extensions(),
            Semantics::CO => CompleteSemanticsSolver::new_with_limits(self.af, self.limits)
                .with_strategy(self.strategy)
                .enumerate_extensions(),
            Semantics::PR => PreferredSemanticsSolver::new_with_limits(self.af, self.limits)
                .with_strategy(self.strategy)
                .enumerate_extensions(),
            Semantics::ST => StableSemanticsSolver::new_with_limits(self.af, self.limits)
                .with_strategy(self.strategy)
                .enumerate_extensions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use strum::IntoEnumIterator;

    fn extensions_labels(
        af: &AAFramework<&'static str>,
        extensions: &SemanticsExtensions,
    ) -> Vec<Vec<&'static str>> {
        extensions.extensions().iter().map(|e| e.labels(af)).collect()
    }

    #[test]
    fn test_empty_framework() {
        let af = AAFramework::<&'static str>::default();
        let engine = SemanticsEngine::new(&af);
        for semantics in Semantics::iter() {
            let result = engine.compute(semantics).unwrap();
            assert_eq!(semantics, result.semantics());
            assert_eq!(vec![Vec::<&str>::new()], extensions_labels(&af, &result));
        }
    }

    #[test]
    fn test_self_attacker() {
        let af = AAFramework::new_with_labels_and_attacks(&["a"], &[("a", "a")]).unwrap();
        let engine = SemanticsEngine::new(&af);
        let empty = vec![Vec::<&str>::new()];
        assert_eq!(empty, extensions_labels(&af, &engine.compute(Semantics::GR).unwrap()));
        assert_eq!(empty, extensions_labels(&af, &engine.compute(Semantics::PR).unwrap()));
        assert!(engine.compute(Semantics::ST).unwrap().is_empty());
    }

    #[test]
    fn test_isolated_arguments_in_every_extension() {
        let af = AAFramework::new_with_labels_and_attacks(
            &["a", "b", "i"],
            &[("a", "b"), ("b", "a")],
        )
        .unwrap();
        let engine = SemanticsEngine::new(&af);
        for semantics in Semantics::iter() {
            let result = engine.compute(semantics).unwrap();
            assert!(!result.is_empty());
            assert!(result.is_skeptically_accepted(2));
        }
    }

    #[test]
    fn test_acceptance_helpers() {
        let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b"), ("b", "a")])
            .unwrap();
        let engine = SemanticsEngine::new(&af);
        let preferred = engine.compute(Semantics::PR).unwrap();
        assert_eq!(2, preferred.len());
        assert!(preferred.is_credulously_accepted(0));
        assert!(!preferred.is_skeptically_accepted(0));
        assert_eq!(1, preferred.count_containing(1));
    }

    #[test]
    fn test_limits_are_applied() {
        let labels = (0..12).map(|i| format!("a{}", i)).collect::<Vec<String>>();
        let attacks = (0..12)
            .map(|i| (labels[i].clone(), labels[(i + 1) % 12].clone()))
            .collect::<Vec<(String, String)>>();
        let af = AAFramework::new_with_labels_and_attacks(&labels, &attacks).unwrap();
        let engine = SemanticsEngine::new(&af)
            .with_limits(ComputationLimits::default().with_max_search_arguments(4));
        assert!(matches!(
            engine.compute(Semantics::PR),
            Err(EngineError::ComputationTooLarge(_))
        ));
        assert_eq!(1, engine.compute(Semantics::GR).unwrap().len());
    }

    #[test]
    fn test_cache_is_keyed_by_content() {
        let cache = ExtensionCache::default();
        let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b")]).unwrap();
        let before = SemanticsEngine::new(&af)
            .with_cache(&cache)
            .compute(Semantics::GR)
            .unwrap();
        let augmented = af.with_attack(&"b", &"a").unwrap();
        let after = SemanticsEngine::new(&augmented)
            .with_cache(&cache)
            .compute(Semantics::GR)
            .unwrap();
        assert_eq!(vec![vec!["a"]], extensions_labels(&af, &before));
        assert_eq!(
            vec![Vec::<&str>::new()],
            extensions_labels(&augmented, &after)
        );
        assert_eq!(2, cache.len());
    }

    #[test]
    fn test_idempotence() {
        let af = AAFramework::new_with_labels_and_attacks(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "a"), ("b", "c"), ("c", "d"), ("d", "c")],
        )
        .unwrap();
        let engine = SemanticsEngine::new(&af);
        for semantics in Semantics::iter() {
            assert_eq!(
                engine.compute(semantics).unwrap(),
                engine.compute(semantics).unwrap()
            );
        }
    }
}
