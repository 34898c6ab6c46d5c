use crate::aa::{AAFramework, LabelType};
use crate::utils::ArgSet;

/// The primitive predicates of abstract argumentation.
///
/// The checker borrows a framework and evaluates conflict-freeness and defense of candidate sets.
/// None of its functions has side effects.
///
/// # Example
///
/// ```
/// # use rebuttal::aa::AAFramework;
/// # use rebuttal::solvers::DefenseChecker;
/// # use rebuttal::utils::ArgSet;
/// let af = AAFramework::new_with_labels_and_attacks(
///     &["a", "b", "c"],
///     &[("b", "a"), ("c", "b")],
/// ).unwrap();
/// let checker = DefenseChecker::new(&af);
/// let s = ArgSet::from_ids(3, vec![2]);
/// assert!(checker.defends(&s, 0));
/// assert!(!checker.is_admissible(&ArgSet::from_ids(3, vec![0])));
/// assert!(checker.is_admissible(&ArgSet::from_ids(3, vec![0, 2])));
/// ```
pub struct DefenseChecker<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
}

impl<'a, T> DefenseChecker<'a, T>
where
    T: LabelType,
{
    /// Builds a checker for the given framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self { af }
    }

    /// Checks that no argument of the set attacks an argument of the set, itself included.
    pub fn is_conflict_free(&self, set: &ArgSet) -> bool {
        set.iter()
            .all(|a| self.af.attacked_by(a).iter().all(|b| !set.contains(*b)))
    }

    /// Checks whether an argument can be added to a conflict-free set while keeping it conflict-free.
    pub(crate) fn can_extend(&self, set: &ArgSet, arg: usize) -> bool {
        !self.af.is_self_attacking(arg)
            && self.af.attacked_by(arg).iter().all(|b| !set.contains(*b))
            && self.af.attackers_of(arg).iter().all(|b| !set.contains(*b))
    }

    /// Removes the candidates that cannot belong to a complete extension including `fixed`.
    ///
    /// A candidate is kept while each of its attackers is attacked by a member of `fixed` or by another kept candidate.
    /// Removals are iterated until a fixpoint is reached.
    pub(crate) fn defendable_candidates(
        &self,
        fixed: &ArgSet,
        mut candidates: Vec<usize>,
    ) -> Vec<usize> {
        let mut potential_defenders =
            ArgSet::from_ids(self.af.n_arguments(), candidates.iter().copied());
        potential_defenders.union_with(fixed);
        loop {
            let n_candidates = candidates.len();
            candidates.retain(|a| {
                let defendable = self.defends(&potential_defenders, *a);
                if !defendable {
                    potential_defenders.remove(*a);
                }
                defendable
            });
            if candidates.len() == n_candidates {
                return candidates;
            }
        }
    }

    /// Checks whether each attacker of the argument is attacked by a member of the set.
    ///
    /// Unattacked arguments are defended by any set.
    pub fn defends(&self, set: &ArgSet, arg: usize) -> bool {
        self.af.attackers_of(arg).iter().all(|attacker| {
            self.af
                .attackers_of(*attacker)
                .iter()
                .any(|defender| set.contains(*defender))
        })
    }

    /// Checks that the set is conflict-free and defends all its members.
    pub fn is_admissible(&self, set: &ArgSet) -> bool {
        self.is_conflict_free(set) && set.iter().all(|a| self.defends(set, a))
    }

    /// Computes the characteristic function, that is the set of arguments defended by the set.
    pub fn characteristic(&self, set: &ArgSet) -> ArgSet {
        let n = self.af.n_arguments();
        ArgSet::from_ids(n, (0..n).filter(|a| self.defends(set, *a)))
    }

    /// Checks that the set is conflict-free and is a fixpoint of the characteristic function.
    pub fn is_complete(&self, set: &ArgSet) -> bool {
        self.is_conflict_free(set) && self.characteristic(set) == *set
    }

    /// Returns the set of arguments attacked by a member of the set.
    pub fn attacked_by_set(&self, set: &ArgSet) -> ArgSet {
        let mut attacked = ArgSet::with_capacity(self.af.n_arguments());
        set.iter()
            .flat_map(|a| self.af.attacked_by(a).iter())
            .for_each(|b| attacked.insert(*b));
        attacked
    }

    /// Checks that the set is conflict-free and attacks every argument outside it.
    pub fn is_stable(&self, set: &ArgSet) -> bool {
        if !self.is_conflict_free(set) {
            return false;
        }
        let mut range = self.attacked_by_set(set);
        range.union_with(set);
        range.len() == self.af.n_arguments()
    }
}
