use crate::aa::{AAFramework, Argument, LabelType};
use std::cmp::Ordering;

const WORD_BITS: usize = u64::BITS as usize;

/// A set of arguments, given by their ids.
///
/// The set is stored as a fixed-capacity bit set over the argument ids of a framework,
/// which keeps conflict-freeness and inclusion checks cheap during extension searches.
/// Extensions computed by the solvers are returned as such sets.
///
/// Two sets are equal iff they contain the same ids, whatever their capacity.
/// Sets are ordered lexicographically by their sorted ids.
#[derive(Clone, Debug, Default, Eq)]
pub struct ArgSet {
    words: Vec<u64>,
    capacity: usize,
}

impl ArgSet {
    /// Builds an empty set able to store the ids in `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            capacity,
        }
    }

    /// Builds a set containing all the ids in `0..capacity`.
    pub fn full(capacity: usize) -> Self {
        let mut set = Self::with_capacity(capacity);
        (0..capacity).for_each(|i| set.insert(i));
        set
    }

    /// Builds a set from an iterator of ids.
    ///
    /// # Panics
    ///
    /// Panics if an id is greater than or equal to the capacity.
    pub fn from_ids<I>(capacity: usize, ids: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = Self::with_capacity(capacity);
        ids.into_iter().for_each(|i| set.insert(i));
        set
    }

    /// Builds a set from a list of argument labels of a framework.
    ///
    /// An error is returned if one of the labels is undefined.
    pub fn from_labels<T>(af: &AAFramework<T>, labels: &[T]) -> crate::error::Result<Self>
    where
        T: LabelType,
    {
        let mut set = Self::with_capacity(af.n_arguments());
        for l in labels {
            set.insert(af.argument_set().get_argument_index(l)?);
        }
        Ok(set)
    }

    /// Returns the maximal number of ids this set can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds an id to the set.
    pub fn insert(&mut self, id: usize) {
        assert!(id < self.capacity, "id {} out of bounds", id);
        self.words[id / WORD_BITS] |= 1u64 << (id % WORD_BITS);
    }

    /// Removes an id from the set.
    pub fn remove(&mut self, id: usize) {
        if id < self.capacity {
            self.words[id / WORD_BITS] &= !(1u64 << (id % WORD_BITS));
        }
    }

    /// Checks whether an id belongs to the set.
    pub fn contains(&self, id: usize) -> bool {
        id < self.capacity && self.words[id / WORD_BITS] & (1u64 << (id % WORD_BITS)) != 0
    }

    /// Returns the number of ids in the set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` iff the set has no id.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Checks whether all the ids of this set belong to the other one.
    pub fn is_subset(&self, other: &ArgSet) -> bool {
        self.words.iter().enumerate().all(|(i, w)| {
            let o = other.words.get(i).copied().unwrap_or(0);
            w & !o == 0
        })
    }

    /// Checks whether this set is a subset of the other one and differs from it.
    pub fn is_strict_subset(&self, other: &ArgSet) -> bool {
        self.is_subset(other) && self.len() < other.len()
    }

    /// Checks whether the two sets share at least one id.
    pub fn intersects(&self, other: &ArgSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Adds all the ids of the other set to this one.
    pub fn union_with(&mut self, other: &ArgSet) {
        if other.capacity > self.capacity {
            self.words.resize(other.words.len(), 0);
            self.capacity = other.capacity;
        }
        self.words
            .iter_mut()
            .zip(other.words.iter())
            .for_each(|(a, b)| *a |= b);
    }

    /// Iterates over the ids of the set, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, w)| {
            let mut word = *w;
            std::iter::from_fn(move || {
                if word == 0 {
                    None
                } else {
                    let bit = word.trailing_zeros() as usize;
                    word &= word - 1;
                    Some(i * WORD_BITS + bit)
                }
            })
        })
    }

    /// Returns the arguments of a framework this set refers to.
    pub fn arguments<'a, T>(&self, af: &'a AAFramework<T>) -> Vec<&'a Argument<T>>
    where
        T: LabelType,
    {
        self.iter()
            .map(|id| af.argument_set().get_argument_by_id(id))
            .collect()
    }

    /// Returns the labels of the arguments of a framework this set refers to.
    pub fn labels<T>(&self, af: &AAFramework<T>) -> Vec<T>
    where
        T: LabelType,
    {
        self.iter()
            .map(|id| af.argument_set().get_argument_by_id(id).label().clone())
            .collect()
    }
}

impl PartialEq for ArgSet {
    fn eq(&self, other: &Self) -> bool {
        let n = self.words.len().max(other.words.len());
        (0..n).all(|i| {
            self.words.get(i).copied().unwrap_or(0) == other.words.get(i).copied().unwrap_or(0)
        })
    }
}

impl PartialOrd for ArgSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArgSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl std::hash::Hash for ArgSet {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.iter().for_each(|i| i.hash(state));
    }
}
