use super::{Argument, ArgumentSet, LabelType};
use crate::error::{EngineError, Result};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt::Display;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// Attacks are stored with set semantics: adding an attack that already exists leaves the framework unchanged.
/// Both the attackers and the attacked arguments of each argument are indexed when attacks are added,
/// so that the semantics solvers never scan the whole attack relation to answer a neighborhood query.
///
/// Frameworks are not meant to be modified once handed to a solver.
/// Adding a counter-attack is done through [`with_attack`](Self::with_attack), which returns an augmented copy.
#[derive(Clone, Debug)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attack_set: HashSet<(usize, usize)>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
}

impl<T> Default for AAFramework<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new_with_argument_set(ArgumentSet::default())
    }
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use rebuttal::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

/// A content digest of a framework.
///
/// The digest is computed from the argument labels (in id order) and the set of attacks;
/// the order in which attacks were added does not change it.
/// It is used as a key when caching semantics computations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameworkDigest([u8; 32]);

impl Display for FrameworkDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0[..8].iter().try_for_each(|b| write!(f, "{:02x}", b))
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]).unwrap();
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// assert_eq!(0, framework.n_attacks());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attacks_from = (0..arguments.len()).map(|_| vec![]).collect();
        let attacks_to = (0..arguments.len()).map(|_| vec![]).collect();
        AAFramework {
            arguments,
            attacks: vec![],
            attack_set: HashSet::new(),
            attacks_from,
            attacks_to,
        }
    }

    /// Builds an AA framework from a list of argument labels and a list of attacks given by labels.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::AAFramework;
    /// let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b")]).unwrap();
    /// assert_eq!(1, af.n_attacks());
    /// assert!(AAFramework::new_with_labels_and_attacks(&["a"], &[("a", "z")]).is_err());
    /// ```
    pub fn new_with_labels_and_attacks(labels: &[T], attacks: &[(T, T)]) -> Result<Self> {
        let mut af = Self::new_with_argument_set(ArgumentSet::new_with_labels(labels)?);
        for (from, to) in attacks {
            af.new_attack(from, to)?;
        }
        Ok(af)
    }

    /// Adds a new argument to this argumentation framework and returns its id.
    ///
    /// If an argument with the same label already exists, a [`DuplicateArgument`](EngineError::DuplicateArgument) error is returned.
    pub fn new_argument(&mut self, label: T) -> Result<usize> {
        self.new_argument_with_content(label, None)
    }

    /// Adds a new argument with an attached content to this argumentation framework and returns its id.
    ///
    /// The content is carried along but never interpreted.
    pub fn new_argument_with_content(&mut self, label: T, content: Option<String>) -> Result<usize> {
        let id = self.arguments.new_argument(label, content)?;
        self.attacks_from.push(Vec::new());
        self.attacks_to.push(Vec::new());
        Ok(id)
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an [`UnknownArgument`](EngineError::UnknownArgument) error is returned.
    /// Else, the attack is added if it was not already present.
    /// The returned boolean is `true` iff the attack was not already in the framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert!(framework.new_attack(&labels[0], &labels[1]).unwrap());
    /// assert!(!framework.new_attack(&labels[0], &labels[1]).unwrap());
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<bool> {
        let attacker_id = self.arguments.get_argument_index(from)?;
        let attacked_id = self.arguments.get_argument_index(to)?;
        Ok(self.push_attack(attacker_id, attacked_id))
    }

    /// Adds a new attack given the IDs of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an error is returned.
    /// The returned boolean is `true` iff the attack was not already in the framework.
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<bool> {
        let n_arguments = self.arguments.len();
        if from >= n_arguments {
            return Err(EngineError::unknown_argument(format!("#{}", from)));
        }
        if to >= n_arguments {
            return Err(EngineError::unknown_argument(format!("#{}", to)));
        }
        Ok(self.push_attack(from, to))
    }

    fn push_attack(&mut self, from: usize, to: usize) -> bool {
        if !self.attack_set.insert((from, to)) {
            return false;
        }
        self.attacks.push((from, to));
        self.attacks_from[from].push(to);
        self.attacks_to[to].push(from);
        true
    }

    /// Returns a copy of this framework in which an attack is added.
    ///
    /// This framework is left untouched.
    /// If the attack is already present, the copy is equal to this framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::AAFramework;
    /// let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[]).unwrap();
    /// let augmented = af.with_attack(&"b", &"a").unwrap();
    /// assert_eq!(0, af.n_attacks());
    /// assert_eq!(1, augmented.n_attacks());
    /// ```
    pub fn with_attack(&self, from: &T, to: &T) -> Result<Self> {
        let mut augmented = self.clone();
        augmented.new_attack(from, to)?;
        Ok(augmented)
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator to the attacks, in insertion order.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| {
            Attack(
                self.arguments.get_argument_by_id(*a),
                self.arguments.get_argument_by_id(*b),
            )
        })
    }

    /// Provides an iterator to the attacks that have the given argument as attacker.
    pub fn iter_attacks_from(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        let attacker = self.arguments.get_argument_by_id(arg.id());
        self.attacks_from[arg.id()]
            .iter()
            .map(move |b| Attack(attacker, self.arguments.get_argument_by_id(*b)))
    }

    /// Provides an iterator to the attacks that have the given argument as attacked.
    pub fn iter_attacks_to(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        let attacked = self.arguments.get_argument_by_id(arg.id());
        self.attacks_to[arg.id()]
            .iter()
            .map(move |a| Attack(self.arguments.get_argument_by_id(*a), attacked))
    }

    /// Returns the ids of the arguments attacking the argument with the given id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn attackers_of(&self, id: usize) -> &[usize] {
        &self.attacks_to[id]
    }

    /// Returns the ids of the arguments attacked by the argument with the given id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn attacked_by(&self, id: usize) -> &[usize] {
        &self.attacks_from[id]
    }

    /// Checks whether an attack exists between two arguments given by their ids.
    pub fn has_attack(&self, from: usize, to: usize) -> bool {
        self.attack_set.contains(&(from, to))
    }

    /// Checks whether an argument attacks itself.
    pub fn is_self_attacking(&self, id: usize) -> bool {
        self.has_attack(id, id)
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }

    /// Checks the structural invariants of the framework.
    ///
    /// Every attack must refer to existing arguments, and the adjacency indexes must agree with the attack relation.
    /// An [`InvalidFramework`](EngineError::InvalidFramework) error is returned otherwise.
    pub fn check_integrity(&self) -> Result<()> {
        let n = self.n_arguments();
        if self.attacks_from.len() != n || self.attacks_to.len() != n {
            return Err(EngineError::InvalidFramework(format!(
                "adjacency indexes cover {} and {} arguments instead of {}",
                self.attacks_from.len(),
                self.attacks_to.len(),
                n
            )));
        }
        if let Some((a, b)) = self.attacks.iter().find(|(a, b)| *a >= n || *b >= n) {
            return Err(EngineError::InvalidFramework(format!(
                "attack from #{} to #{} refers to an undefined argument",
                a, b
            )));
        }
        let n_indexed: usize = self.attacks_from.iter().map(|v| v.len()).sum();
        if n_indexed != self.attacks.len() || self.attack_set.len() != self.attacks.len() {
            return Err(EngineError::InvalidFramework(
                "adjacency indexes disagree with the attack relation".to_string(),
            ));
        }
        Ok(())
    }

    /// Computes the content digest of this framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::AAFramework;
    /// let af1 = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b"), ("b", "a")]).unwrap();
    /// let af2 = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("b", "a"), ("a", "b")]).unwrap();
    /// assert_eq!(af1.content_digest(), af2.content_digest());
    /// ```
    pub fn content_digest(&self) -> FrameworkDigest {
        let mut hasher = Sha256::new();
        hasher.update((self.n_arguments() as u64).to_le_bytes());
        for arg in self.arguments.iter() {
            let label = arg.label().to_string();
            hasher.update((label.len() as u64).to_le_bytes());
            hasher.update(label.as_bytes());
        }
        let mut sorted_attacks = self.attacks.clone();
        sorted_attacks.sort_unstable();
        hasher.update((sorted_attacks.len() as u64).to_le_bytes());
        for (a, b) in sorted_attacks {
            hasher.update((a as u64).to_le_bytes());
            hasher.update((b as u64).to_le_bytes());
        }
        FrameworkDigest(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> AAFramework<String> {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels).unwrap();
        AAFramework::new_with_argument_set(args)
    }

    #[test]
    fn test_n_args() {
        assert_eq!(3, abc().n_arguments());
    }

    #[test]
    fn test_new_attack_ok() {
        let mut af = abc();
        assert_eq!(0, af.n_attacks());
        assert!(af.new_attack(&"a".to_string(), &"a".to_string()).unwrap());
        assert_eq!(1, af.n_attacks());
        assert_eq!((0, 0), af.attacks[0]);
        assert!(af.is_self_attacking(0));
    }

    #[test]
    fn test_new_attack_is_idempotent() {
        let mut af = abc();
        assert!(af.new_attack(&"a".to_string(), &"b".to_string()).unwrap());
        assert!(!af.new_attack(&"a".to_string(), &"b".to_string()).unwrap());
        assert!(!af.new_attack_by_ids(0, 1).unwrap());
        assert_eq!(1, af.n_attacks());
        assert_eq!(&[0], af.attackers_of(1));
        assert_eq!(&[1], af.attacked_by(0));
    }

    #[test]
    fn test_new_attack_unknown_label_1() {
        let mut af = abc();
        assert_eq!(
            EngineError::UnknownArgument("d".to_string()),
            af.new_attack(&"d".to_string(), &"a".to_string())
                .unwrap_err()
        );
    }

    #[test]
    fn test_new_attack_unknown_label_2() {
        let mut af = abc();
        af.new_attack(&"a".to_string(), &"d".to_string())
            .unwrap_err();
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_new_attack_by_ids_unknown_id() {
        let mut af = abc();
        af.new_attack_by_ids(3, 0).unwrap_err();
        af.new_attack_by_ids(0, 3).unwrap_err();
    }

    #[test]
    fn test_new_argument() {
        let mut af = abc();
        assert_eq!(3, af.new_argument("d".to_string()).unwrap());
        assert_eq!(4, af.n_arguments());
        assert_eq!(
            EngineError::DuplicateArgument("d".to_string()),
            af.new_argument("d".to_string()).unwrap_err()
        );
        assert_eq!(4, af.n_arguments());
        assert!(af.new_attack(&"d".to_string(), &"a".to_string()).unwrap());
        assert_eq!(&[3], af.attackers_of(0));
    }

    #[test]
    fn test_adjacency() {
        let mut af = abc();
        af.new_attack_by_ids(0, 1).unwrap();
        af.new_attack_by_ids(2, 1).unwrap();
        af.new_attack_by_ids(1, 0).unwrap();
        let mut attackers = af.attackers_of(1).to_vec();
        attackers.sort_unstable();
        assert_eq!(vec![0, 2], attackers);
        assert_eq!(&[1], af.attacked_by(0));
        assert!(af.attacked_by(1).contains(&0));
        assert_eq!(
            2,
            af.iter_attacks_to(af.argument_set().get_argument_by_id(1))
                .count()
        );
        assert!(af
            .iter_attacks_from(af.argument_set().get_argument_by_id(2))
            .all(|att| att.attacked().label() == "b"));
    }

    #[test]
    fn test_with_attack_leaves_original_untouched() {
        let af = abc();
        let augmented = af.with_attack(&"a".to_string(), &"b".to_string()).unwrap();
        assert_eq!(0, af.n_attacks());
        assert_eq!(1, augmented.n_attacks());
        assert!(augmented.has_attack(0, 1));
        assert!(af.with_attack(&"a".to_string(), &"z".to_string()).is_err());
    }

    #[test]
    fn test_check_integrity() {
        let mut af = abc();
        af.new_attack_by_ids(0, 1).unwrap();
        af.check_integrity().unwrap();
        af.attacks.push((0, 7));
        assert!(matches!(
            af.check_integrity(),
            Err(EngineError::InvalidFramework(_))
        ));
    }

    #[test]
    fn test_digest() {
        let mut af1 = abc();
        af1.new_attack_by_ids(0, 1).unwrap();
        af1.new_attack_by_ids(1, 2).unwrap();
        let mut af2 = abc();
        af2.new_attack_by_ids(1, 2).unwrap();
        af2.new_attack_by_ids(0, 1).unwrap();
        assert_eq!(af1.content_digest(), af2.content_digest());
        af2.new_attack_by_ids(2, 0).unwrap();
        assert_ne!(af1.content_digest(), af2.content_digest());
        assert_ne!(abc().content_digest(), AAFramework::<String>::default().content_digest());
        assert_eq!(16, af1.content_digest().to_string().len());
    }
}
