use super::{warning_result::Warned, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};

const ARG_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\).\s*$").unwrap();
    static ref ARG_LINE_ARG_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\).\s*$", ARG_AND_SPACE_PATTERN)).unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^\s*att\([^,]+,[^)]+\).\s*$").unwrap();
    static ref ATT_LINE_ARG_NAMES_PATTERN: Regex = Regex::new(&format!(
        r"^\s*att\(({}),({})\).\s*$",
        ARG_AND_SPACE_PATTERN, ARG_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

const SPACES_WARNING: &str = "argument names beginning or ending by spaces may be ambiguous";

enum AspartixLine {
    Blank,
    Arg(Warned<String, String>),
    Att(Warned<(String, String), String>),
}

fn captured_arg(c: &Captures, i: usize) -> Warned<String, String> {
    let str_arg = c.get(i).map(|m| m.as_str()).unwrap_or_default();
    let trimmed = str_arg.trim().to_string();
    if trimmed.len() == str_arg.len() {
        Warned::ok(trimmed)
    } else {
        Warned::ok(trimmed).with_warning(SPACES_WARNING.to_string())
    }
}

fn parse_line(l: &str) -> Result<AspartixLine> {
    let trimmed = l.trim();
    if trimmed.is_empty() || trimmed.starts_with('%') {
        return Ok(AspartixLine::Blank);
    }
    if ARG_LINE_PATTERN.is_match(l) {
        return match ARG_LINE_ARG_NAME_PATTERN.captures(l) {
            Some(c) => Ok(AspartixLine::Arg(captured_arg(&c, 1))),
            None => Err(anyhow!("invalid argument name in {}", trimmed)),
        };
    }
    if ATT_LINE_PATTERN.is_match(l) {
        return match ATT_LINE_ARG_NAMES_PATTERN.captures(l) {
            Some(c) => Ok(AspartixLine::Att(
                captured_arg(&c, 1).zip(captured_arg(&c, 2)),
            )),
            None => Err(anyhow!("invalid argument names in {}", trimmed)),
        };
    }
    Err(anyhow!(r#"syntax error in line "{}""#, trimmed))
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// All the arguments must be declared before the first attack.
/// Lines starting with `%` are comments.
/// Declaring an argument twice is an error, while declaring an attack twice only raises a warning.
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// # Example
///
/// ```
/// # use rebuttal::aa::AAFramework;
/// # use rebuttal::io::{AspartixReader, InstanceReader};
/// let reader = AspartixReader::default();
/// let af = reader.read(&mut "arg(a).\narg(b).\natt(a,b).\n".as_bytes()).unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!(1, af.n_attacks());
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn warn(&self, line: usize, warning: &str) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line, warning.to_string()));
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut arg_labels = vec![];
        let mut af: Option<AAFramework<String>> = None;
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let warn_all = |warnings: Vec<String>| warnings.iter().for_each(|w| self.warn(1 + i, w));
            let l = line.with_context(context)?;
            match parse_line(&l).with_context(context)? {
                AspartixLine::Blank => {}
                AspartixLine::Arg(label) => {
                    if af.is_some() {
                        return Err(anyhow!("found an argument declaration after an attack"))
                            .with_context(context);
                    }
                    arg_labels.push(label.consume_warnings(warn_all));
                }
                AspartixLine::Att(labels) => {
                    let (from, to) = labels.consume_warnings(warn_all);
                    if af.is_none() {
                        let arguments = ArgumentSet::new_with_labels(&arg_labels)
                            .context("while building the set of arguments")?;
                        af = Some(AAFramework::new_with_argument_set(arguments));
                    }
                    if let Some(framework) = af.as_mut() {
                        let is_new = framework.new_attack(&from, &to).with_context(context)?;
                        if !is_new {
                            self.warn(1 + i, &format!("attack ({},{}) declared more than once", from, to));
                        }
                    }
                }
            }
        }
        match af {
            Some(framework) => Ok(framework),
            None => Ok(AAFramework::new_with_argument_set(
                ArgumentSet::new_with_labels(&arg_labels)
                    .context("while building the set of arguments")?,
            )),
        }
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        Ok(af.argument_set().get_argument(&arg.to_string())?)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
