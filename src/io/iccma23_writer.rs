use super::ResponseWriter;
use crate::aa::{AAFramework, Argument, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the formats used in the ICCMA 2023 competition.
///
/// The answers to argumentation problems are written this way:
///   * extension: the letter `w`, followed by a space and the list of argument labels, splitted by spaces
///   * list of extensions: one extension per line, or `NO` if the list is empty
///   * absence of extension: `NO`
///   * acceptance status: `YES` and `NO`
///
/// Frameworks are written with the `p af N` preamble, arguments being numbered by their ids (starting at 1).
#[derive(Default)]
pub struct Iccma23Writer;

impl Iccma23Writer {
    /// Writes a framework using the ICCMA 2023 format to the provided writer.
    ///
    /// # Example
    ///
    /// ```
    /// # use rebuttal::aa::AAFramework;
    /// # use rebuttal::io::Iccma23Writer;
    /// let af = AAFramework::new_with_labels_and_attacks(&["a", "b"], &[("b", "a")]).unwrap();
    /// let mut buffer = Vec::new();
    /// Iccma23Writer.write_framework(&af, &mut buffer).unwrap();
    /// assert_eq!("p af 2\n2 1\n", String::from_utf8(buffer).unwrap());
    /// ```
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing an ICCMA 2023 framework";
        writeln!(writer, "p af {}", framework.n_arguments()).context(context)?;
        for attack in framework.iter_attacks() {
            writeln!(
                writer,
                "{} {}",
                attack.attacker().id() + 1,
                attack.attacked().id() + 1
            )
            .context(context)?;
        }
        writer.flush().context(context)
    }
}

fn write_w_line<T: LabelType>(
    writer: &mut dyn Write,
    extension: &[&Argument<T>],
) -> std::io::Result<()> {
    write!(writer, "w")?;
    for arg in extension {
        write!(writer, " {}", arg)?;
    }
    writeln!(writer)
}

impl ResponseWriter<usize> for Iccma23Writer {
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<usize>],
    ) -> Result<()> {
        let context = "while writing an extension";
        write_w_line(writer, extension).context(context)?;
        writer.flush().context(context)
    }

    fn write_extensions(
        &self,
        writer: &mut dyn Write,
        extensions: &[Vec<&Argument<usize>>],
    ) -> Result<()> {
        if extensions.is_empty() {
            return self.write_no_extension(writer);
        }
        let context = "while writing a list of extensions";
        for ext in extensions {
            write_w_line(writer, ext).context(context)?;
        }
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
