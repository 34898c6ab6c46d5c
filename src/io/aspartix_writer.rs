use super::ResponseWriter;
use crate::aa::{AAFramework, Argument, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format.
///
/// This object is used to write an [`AAFramework`] using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html),
/// and to write the answers to problems:
///   * extension: the list of argument labels between brackets, separated by commas (`[a,b]`)
///   * list of extensions: the list of extensions between brackets, separated by commas (`[[a,b],[c]]`)
///   * absence of extension: `NO`
///   * acceptance status: `YES` and `NO`
///
/// # Example
///
/// ```
/// # use rebuttal::aa::AAFramework;
/// # use rebuttal::io::AspartixWriter;
/// let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("a", "b")]).unwrap();
/// let mut buffer = Vec::new();
/// AspartixWriter::default().write_framework(&af, &mut buffer).unwrap();
/// assert_eq!("arg(a).\narg(b).\natt(a,b).\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct AspartixWriter;

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    ///
    /// Arguments are written in id order, attacks in insertion order.
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing an Aspartix framework";
        for arg in framework.argument_set().iter() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }

    /// Returns the Aspartix representation of a framework as a string.
    pub fn framework_to_string<T: LabelType>(&self, framework: &AAFramework<T>) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_framework(framework, &mut buffer)?;
        String::from_utf8(buffer).context("while converting an Aspartix framework to a string")
    }
}

fn write_bracketed_extension<T: LabelType>(
    writer: &mut dyn Write,
    extension: &[&Argument<T>],
) -> std::io::Result<()> {
    write!(writer, "[")?;
    for (i, arg) in extension.iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        write!(writer, "{}", arg)?;
    }
    write!(writer, "]")
}

impl<T> ResponseWriter<T> for AspartixWriter
where
    T: LabelType,
{
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()> {
        let context = "while writing an extension";
        write_bracketed_extension(writer, extension).context(context)?;
        writeln!(writer).context(context)?;
        writer.flush().context(context)
    }

    fn write_extensions(
        &self,
        writer: &mut dyn Write,
        extensions: &[Vec<&Argument<T>>],
    ) -> Result<()> {
        let context = "while writing a list of extensions";
        write!(writer, "[").context(context)?;
        for (i, ext) in extensions.iter().enumerate() {
            if i > 0 {
                write!(writer, ",").context(context)?;
            }
            write_bracketed_extension(writer, ext).context(context)?;
        }
        writeln!(writer, "]").context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        super::specs::write_acceptance_status(writer, acceptance_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn written<F>(f: F) -> String
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_af() {
        let framework = AAFramework::new_with_labels_and_attacks(
            &["a".to_string(), "b".to_string(), "c".to_string()],
            &[
                ("a".to_string(), "a".to_string()),
                ("b".to_string(), "c".to_string()),
            ],
        )
        .unwrap();
        assert_eq!(
            "arg(a).\narg(b).\narg(c).\natt(a,a).\natt(b,c).\n",
            AspartixWriter.framework_to_string(&framework).unwrap()
        )
    }

    #[test]
    fn test_write_single_extension() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]).unwrap();
        let ext = args.iter().collect::<Vec<&Argument<&str>>>();
        assert_eq!(
            "[a,b,c]\n",
            written(|w| AspartixWriter.write_single_extension(w, &ext))
        );
        assert_eq!(
            "[]\n",
            written(|w| AspartixWriter.write_single_extension(w, &[] as &[&Argument<&str>]))
        );
    }

    #[test]
    fn test_write_extensions() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]).unwrap();
        let all = args.iter().collect::<Vec<&Argument<&str>>>();
        let extensions = vec![vec![], vec![all[0], all[2]], vec![all[1]]];
        assert_eq!(
            "[[],[a,c],[b]]\n",
            written(|w| AspartixWriter.write_extensions(w, &extensions))
        );
        assert_eq!(
            "[]\n",
            written(|w| AspartixWriter.write_extensions(w, &[] as &[Vec<&Argument<&str>>]))
        );
    }

    #[test]
    fn test_write_status() {
        assert_eq!(
            "NO\n",
            written(|w| ResponseWriter::<String>::write_no_extension(&AspartixWriter, w))
        );
        assert_eq!(
            "YES\n",
            written(|w| ResponseWriter::<String>::write_acceptance_status(&AspartixWriter, w, true))
        );
        assert_eq!(
            "NO\n",
            written(|w| ResponseWriter::<String>::write_acceptance_status(&AspartixWriter, w, false))
        );
    }
}
