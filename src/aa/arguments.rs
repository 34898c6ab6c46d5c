use crate::error::{EngineError, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits allowing their use in maps and their display.
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize] and [String] implements [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label, which is its identity for the caller,
/// and an identifier which is its index in the argument set it belongs to.
/// An optional content (the claim or text the argument stands for) may be attached to it;
/// the engine never interprets it.
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
    content: Option<String>,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use rebuttal::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the content attached to this argument, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// Ids are given in insertion order, starting at zero; they are dense, as arguments are never removed.
#[derive(Clone, Debug)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            arguments: Vec::new(),
            label_to_id: HashMap::new(),
        }
    }
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, a [`DuplicateArgument`](EngineError::DuplicateArgument) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
    /// assert_eq!(3, arguments.len());
    /// assert!(ArgumentSet::new_with_labels(&["a", "a"]).is_err());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Result<Self> {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
        };
        for l in labels.iter() {
            argument_set.new_argument(l.clone(), None)?;
        }
        Ok(argument_set)
    }

    /// Adds a new argument to this set and returns its id.
    ///
    /// The id of the new argument is the previous maximal id plus one.
    /// If an argument with the same label is already defined, an error is returned and the set is left unchanged.
    pub fn new_argument(&mut self, label: T, content: Option<String>) -> Result<usize> {
        if self.label_to_id.contains_key(&label) {
            return Err(EngineError::duplicate_argument(&label));
        }
        let id = self.arguments.len();
        self.label_to_id.insert(label.clone(), id);
        self.arguments.push(Argument { id, label, content });
        Ok(id)
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// If no such label exists, an [`UnknownArgument`](EngineError::UnknownArgument) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
    /// assert_eq!(0, arguments.get_argument_index(&labels[0]).unwrap());
    /// assert_eq!(2, arguments.get_argument_index(&labels[2]).unwrap());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize> {
        self.label_to_id
            .get(label)
            .copied()
            .ok_or_else(|| EngineError::unknown_argument(label))
    }

    /// Returns the argument associated to an argument label.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::ArgumentSet;
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]).unwrap();
    /// assert!(arguments.get_argument(&"a").is_ok());
    /// assert!(arguments.get_argument(&"d").is_err());
    /// ```
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.get_argument_index(label)
            .map(|i| &self.arguments[i])
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns an iterator to the arguments, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}
