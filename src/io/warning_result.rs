/// A value read from an input, along with the warnings raised while reading it.
///
/// Unlike a `Result`, there is always a value; warnings are passed to a callback when it is consumed.
pub(crate) struct Warned<T, W> {
    value: T,
    warnings: Vec<W>,
}

impl<T, W> Warned<T, W> {
    /// Wraps a value raising no warning.
    pub(crate) fn ok(value: T) -> Self {
        Self {
            value,
            warnings: vec![],
        }
    }

    /// Attaches a new warning to the value.
    pub(crate) fn with_warning(mut self, warning: W) -> Self {
        self.warnings.push(warning);
        self
    }

    /// Consumes the warnings, returning the value.
    ///
    /// The callback is only called when there is at least one warning.
    pub(crate) fn consume_warnings<F>(self, f: F) -> T
    where
        F: FnOnce(Vec<W>),
    {
        if !self.warnings.is_empty() {
            f(self.warnings);
        }
        self.value
    }

    /// Pairs two values, concatenating their warnings.
    pub(crate) fn zip<U>(mut self, other: Warned<U, W>) -> Warned<(T, U), W> {
        self.warnings.extend(other.warnings);
        Warned {
            value: (self.value, other.value),
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T>(w: Warned<T, &'static str>) -> (T, Vec<&'static str>) {
        let mut consumed = vec![];
        let value = w.consume_warnings(|warnings| consumed = warnings);
        (value, consumed)
    }

    #[test]
    fn test_consume_without_warning() {
        let mut called = false;
        assert_eq!(1, Warned::<_, String>::ok(1).consume_warnings(|_| called = true));
        assert!(!called);
    }

    #[test]
    fn test_consume_with_warning() {
        assert_eq!((1, vec!["w"]), collect(Warned::ok(1).with_warning("w")));
    }

    #[test]
    fn test_zip() {
        assert_eq!(((1, 2), vec![]), collect(Warned::ok(1).zip(Warned::ok(2))));
        assert_eq!(
            ((1, 2), vec!["w2"]),
            collect(Warned::ok(1).zip(Warned::ok(2).with_warning("w2")))
        );
        assert_eq!(
            ((1, 2), vec!["w1", "w2"]),
            collect(
                Warned::ok(1)
                    .with_warning("w1")
                    .zip(Warned::ok(2).with_warning("w2"))
            )
        );
    }
}
