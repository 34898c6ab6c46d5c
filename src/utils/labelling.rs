use super::ArgSet;
use crate::aa::{AAFramework, LabelType};
use strum_macros::{AsRefStr, Display, EnumString};

/// The status of an argument in a labelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Label {
    /// The argument is accepted.
    In,
    /// The argument is attacked by an accepted argument.
    Out,
    /// The argument is neither accepted nor rejected.
    Undec,
}

/// A labelling of the arguments of a framework.
///
/// A labelling is equivalent to an extension:
/// an argument is IN iff it belongs to the extension,
/// OUT iff it is attacked by an argument of the extension,
/// and UNDEC otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labelling {
    labels: Vec<Label>,
}

impl Labelling {
    pub(crate) fn new(labels: Vec<Label>) -> Self {
        Self { labels }
    }

    /// Builds the labelling corresponding to an extension.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::AAFramework;
    /// # use rebuttal::utils::{ArgSet, Label, Labelling};
    /// let af = AAFramework::new_with_labels_and_attacks(&["a", "b", "c"], &[("a", "b")]).unwrap();
    /// let labelling = Labelling::from_extension(&af, &ArgSet::from_ids(3, vec![0]));
    /// assert_eq!(Label::In, labelling.label_of(0));
    /// assert_eq!(Label::Out, labelling.label_of(1));
    /// assert_eq!(Label::Undec, labelling.label_of(2));
    /// ```
    pub fn from_extension<T>(af: &AAFramework<T>, extension: &ArgSet) -> Self
    where
        T: LabelType,
    {
        let mut labels = vec![Label::Undec; af.n_arguments()];
        extension.iter().for_each(|i| {
            af.attacked_by(i)
                .iter()
                .for_each(|attacked| labels[*attacked] = Label::Out)
        });
        extension.iter().for_each(|i| labels[i] = Label::In);
        Self { labels }
    }

    /// Returns the label of the argument with the given id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn label_of(&self, id: usize) -> Label {
        self.labels[id]
    }

    /// Returns the label of an argument given by its label in the framework.
    pub fn label_of_argument<T>(&self, af: &AAFramework<T>, arg: &T) -> crate::error::Result<Label>
    where
        T: LabelType,
    {
        af.argument_set()
            .get_argument_index(arg)
            .map(|i| self.labels[i])
    }

    /// Returns the set of arguments with the given label.
    pub fn set_of(&self, label: Label) -> ArgSet {
        ArgSet::from_ids(
            self.labels.len(),
            self.labels
                .iter()
                .enumerate()
                .filter(|(_, l)| **l == label)
                .map(|(i, _)| i),
        )
    }

    /// Returns the set of IN arguments, that is the extension this labelling stands for.
    pub fn in_set(&self) -> ArgSet {
        self.set_of(Label::In)
    }

    /// Returns the number of labelled arguments.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` iff no argument is labelled.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates over the labels, in argument id order.
    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.labels.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::grounded_labelling;

    #[test]
    fn test_label_display() {
        assert_eq!("IN", Label::In.to_string());
        assert_eq!("OUT", Label::Out.to_string());
        assert_eq!("UNDEC", Label::Undec.as_ref());
        assert_eq!(Label::Undec, "UNDEC".parse::<Label>().unwrap());
    }

    #[test]
    fn test_from_extension_roundtrip_on_grounded() {
        let af = AAFramework::new_with_labels_and_attacks(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("d", "d")],
        )
        .unwrap();
        let grounded = grounded_labelling(&af);
        let rebuilt = Labelling::from_extension(&af, &grounded.in_set());
        assert_eq!(grounded, rebuilt);
        assert_eq!(Label::Undec, rebuilt.label_of_argument(&af, &"d").unwrap());
        assert!(rebuilt.label_of_argument(&af, &"z").is_err());
    }

    #[test]
    fn test_set_of() {
        let af = AAFramework::new_with_labels_and_attacks(&["a", "b", "c"], &[("a", "b")]).unwrap();
        let labelling = Labelling::from_extension(&af, &ArgSet::from_ids(3, vec![0, 2]));
        assert_eq!(ArgSet::from_ids(3, vec![1]), labelling.set_of(Label::Out));
        assert!(labelling.set_of(Label::Undec).is_empty());
        assert_eq!(3, labelling.len());
        assert_eq!(2, labelling.iter().filter(|l| *l == Label::In).count());
    }
}
