use super::{InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, Read};

/// A reader for the ICCMA 2023 format.
///
/// This object is used to read an [`AAFramework`] encoded using the ICCMA 2023 input format, as defined on [the competition website](https://iccma2023.github.io/rules.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [usize].
///
/// # ICCMA 2023 format
///
/// The following content defines an Argumentation Framework with three arguments (given by the indexes `1`, `2` and `3`) and three attacks (`1` and `2` attack each other and `3` attacks `2`).
///
/// ```text
/// p af 3
/// 1 2
/// 2 1
/// 3 2
/// ```
///
/// Lines beginning with `#` are comments.
/// Empty lines are only allowed at the end of the input.
#[derive(Default)]
pub struct Iccma23Reader {
    warning_handlers: Vec<WarningHandler>,
}

impl InstanceReader<usize> for Iccma23Reader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<usize>> {
        let mut af: Option<AAFramework<usize>> = None;
        let mut found_empty_lines = false;
        for (i, line) in BufReader::new(reader).lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = line.with_context(context)?;
            if l.starts_with('#') {
                continue;
            }
            if l.trim().is_empty() {
                found_empty_lines = true;
                continue;
            }
            if found_empty_lines {
                return Err(anyhow!("got content after an empty line")).with_context(context);
            }
            let words = l.split_whitespace().collect::<Vec<&str>>();
            let framework = match af.as_mut() {
                None => {
                    let n_args = read_preamble(&words, "af").with_context(context)?;
                    let labels = (1..=n_args).collect::<Vec<usize>>();
                    af = Some(AAFramework::new_with_argument_set(
                        ArgumentSet::new_with_labels(&labels)?,
                    ));
                    continue;
                }
                Some(framework) => framework,
            };
            let (attacker, attacked) =
                read_attack(&words, framework.n_arguments()).with_context(context)?;
            if !framework.new_attack_by_ids(attacker - 1, attacked - 1)? {
                let warning = format!("attack {} {} declared more than once", attacker, attacked);
                self.warning_handlers
                    .iter()
                    .for_each(|h| (h)(1 + i, warning.clone()));
            }
        }
        af.ok_or_else(|| anyhow!("missing preamble"))
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<usize>,
        arg: &str,
    ) -> Result<&'a Argument<usize>> {
        match arg.parse::<usize>() {
            Ok(n) if n > 0 && n <= af.n_arguments() => {
                Ok(af.argument_set().get_argument_by_id(n - 1))
            }
            _ => Err(anyhow!("unknown arg: {}", arg)),
        }
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

fn read_attack(words: &[&str], n_args: usize) -> Result<(usize, usize)> {
    if words.len() != 2 {
        return Err(anyhow!(
            "error in attack; expected 2 words, got {}",
            words.len()
        ));
    }
    let read_arg = |word: &str, arg_type| match word.parse::<usize>() {
        Ok(n) if n >= 1 && n <= n_args => Ok(n),
        _ => Err(anyhow!(
            "error in attack: invalid argument index for {}",
            arg_type
        )),
    };
    Ok((read_arg(words[0], "attacker")?, read_arg(words[1], "attacked")?))
}

fn read_preamble(words: &[&str], expected_kind: &str) -> Result<usize> {
    if words.len() != 3 {
        return Err(anyhow!(
            "error in preamble; expected 3 words, got {}",
            words.len()
        ));
    }
    if words[0] != "p" {
        return Err(anyhow!(
            r#"error in first word of preamble; expected "p", got "{}""#,
            words[0]
        ));
    }
    if words[1] != expected_kind {
        return Err(anyhow!(
            r#"error in second word of preamble; expected "{}", got "{}""#,
            expected_kind,
            words[1]
        ));
    }
    words[2]
        .parse::<usize>()
        .map_err(|_| anyhow!("error in preamble: invalid number of arguments"))
}
