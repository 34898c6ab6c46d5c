use crate::error::{EngineError, Result};
use std::time::{Duration, Instant};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The default maximal number of arguments a search may branch on.
pub const DEFAULT_MAX_SEARCH_ARGUMENTS: usize = 30;

/// The default maximal duration of a search.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// The number of search nodes explored between two clock readings.
const CLOCK_CHECK_PERIOD: usize = 1 << 10;

/// The ceiling applied to the extension searches.
///
/// A search branching on more than `max_search_arguments` arguments is refused,
/// and a search running longer than the timeout (if any) is interrupted.
/// The default limits are [`DEFAULT_MAX_SEARCH_ARGUMENTS`] and [`DEFAULT_TIMEOUT`].
/// In both cases, a [`ComputationTooLarge`](EngineError::ComputationTooLarge) error is returned.
///
/// # Example
///
/// ```
/// # use rebuttal::solvers::ComputationLimits;
/// # use std::time::Duration;
/// let limits = ComputationLimits::default()
///     .with_max_search_arguments(20)
///     .with_timeout(Duration::from_secs(1));
/// assert_eq!(20, limits.max_search_arguments());
/// assert_eq!(Some(Duration::from_secs(1)), limits.timeout());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputationLimits {
    max_search_arguments: usize,
    timeout: Option<Duration>,
}

impl Default for ComputationLimits {
    fn default() -> Self {
        Self {
            max_search_arguments: DEFAULT_MAX_SEARCH_ARGUMENTS,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ComputationLimits {
    /// Returns limits that never interrupt a search.
    pub fn unbounded() -> Self {
        Self {
            max_search_arguments: usize::MAX,
            timeout: None,
        }
    }

    /// Sets the maximal number of arguments a search may branch on.
    pub fn with_max_search_arguments(mut self, max_search_arguments: usize) -> Self {
        self.max_search_arguments = max_search_arguments;
        self
    }

    /// Sets the maximal duration of a search.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the maximal number of arguments a search may branch on.
    pub fn max_search_arguments(&self) -> usize {
        self.max_search_arguments
    }

    /// Returns the maximal duration of a search, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) fn start_search(&self, n_branching_arguments: usize) -> Result<SearchBudget> {
        if n_branching_arguments > self.max_search_arguments {
            return Err(EngineError::ComputationTooLarge(format!(
                "the search would branch on {} arguments (limit is {})",
                n_branching_arguments, self.max_search_arguments
            )));
        }
        Ok(SearchBudget {
            deadline: self.timeout.map(|t| (Instant::now() + t, t)),
            n_nodes: 0,
        })
    }
}

/// The running budget of a single search.
pub(crate) struct SearchBudget {
    deadline: Option<(Instant, Duration)>,
    n_nodes: usize,
}

impl SearchBudget {
    /// Registers a new search node, returning an error if the deadline has passed.
    pub(crate) fn tick(&mut self) -> Result<()> {
        self.n_nodes += 1;
        if self.n_nodes % CLOCK_CHECK_PERIOD != 0 {
            return Ok(());
        }
        match self.deadline {
            Some((deadline, timeout)) if Instant::now() >= deadline => {
                Err(EngineError::ComputationTooLarge(format!(
                    "timeout of {}ms exceeded after {} search nodes",
                    timeout.as_millis(),
                    self.n_nodes
                )))
            }
            _ => Ok(()),
        }
    }
}

/// The strategy used to enumerate the complete extensions.
///
/// Both strategies compute the same extensions.
/// `Exhaustive` branches on every argument, while `GroundedSplit` starts from the grounded labelling
/// and only branches on the undecided arguments that do not attack themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum EnumerationStrategy {
    /// Subset enumeration with conflict-freeness pruning.
    Exhaustive,
    /// Case-splitting on the arguments left undecided by the grounded labelling.
    #[default]
    GroundedSplit,
}
