use anyhow::{anyhow, Context, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The semantics associated with a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Semantics {
    /// The grounded semantics
    GR,
    /// The complete semantics
    CO,
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
}

impl Semantics {
    /// Returns `true` iff this semantics always admits a single extension.
    pub fn is_single_status(&self) -> bool {
        matches!(self, Semantics::GR)
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Query {
    /// Compute a single extension
    SE,
    /// Enumerate all the extensions
    EE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Returns `true` iff the query is about the acceptance of an argument.
    pub fn requires_argument(&self) -> bool {
        matches!(self, Query::DC | Query::DS)
    }
}

/// Iterates over the problem strings (`XX-YY`) handled by the engine.
pub fn iter_problem_strings() -> impl Iterator<Item = String> {
    Query::iter().flat_map(|q| Semantics::iter().map(move |s| format!("{}-{}", q, s)))
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// This functions reads a problem string following the format in ICCMA competitions.
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    let context = || format!(r#"while parsing problem string "{}""#, problem);
    match problem.find('-') {
        Some(n) => {
            let query = problem[0..n]
                .parse::<Query>()
                .map_err(|_| anyhow!(r#"undefined query "{}""#, &problem[0..n]))
                .with_context(context)?;
            let semantics = problem[1 + n..]
                .parse::<Semantics>()
                .map_err(|_| anyhow!(r#"undefined semantics "{}""#, &problem[1 + n..]))
                .with_context(context)?;
            Ok((query, semantics))
        }
        None => Err(anyhow!("no hyphen in problem string")).with_context(context),
    }
}
