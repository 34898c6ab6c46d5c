use super::{
    app_helper::AppHelper, cli_manager::Command, AuthorsCommand, CheckCommand, ProblemsCommand,
    SolveCommand, ValidateCommand,
};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use rebuttal::{
    aa::{AAFramework, LabelType},
    io::InstanceReader,
    solvers::{
        ComputationLimits, EnumerationStrategy, DEFAULT_MAX_SEARCH_ARGUMENTS, DEFAULT_TIMEOUT,
    },
};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
    time::Duration,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Rebuttal, an abstract argumentation engine for counter-argument validation.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ProblemsCommand::new()),
        Box::new(SolveCommand::new()),
        Box::new(ValidateCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

/// Returns the value of an argument, or an error if it is missing.
pub(crate) fn required_value<'a>(arg_matches: &'a ArgMatches<'_>, arg: &str) -> Result<&'a str> {
    arg_matches
        .value_of(arg)
        .ok_or_else(|| anyhow!("missing value for {}", arg))
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the AF")
        .required(true)
}

pub(crate) const ARG_PROBLEM: &str = "PROBLEM";
pub(crate) const ARG_ARG: &str = "ARG";

pub(crate) fn problem_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_PROBLEM)
            .short("p")
            .empty_values(false)
            .multiple(false)
            .help("the problem to solve")
            .required(true),
        Arg::with_name(ARG_ARG)
            .short("a")
            .empty_values(false)
            .multiple(false)
            .help("the argument (for DC/DS queries)")
            .required(false),
    ]
}

pub(crate) const ARG_READER: &str = "READER";

pub(crate) const READER_APX: &str = "apx";
pub(crate) const READER_ICCMA23: &str = "iccma23";

pub(crate) fn reader_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_READER)
        .short("r")
        .long("reader")
        .empty_values(false)
        .multiple(false)
        .possible_values(&[READER_APX, READER_ICCMA23])
        .default_value(READER_ICCMA23)
        .help("the input file format")
        .required(false)
}

const ARG_MAX_SEARCH_ARGUMENTS: &str = "MAX_SEARCH_ARGUMENTS";
const ARG_TIMEOUT_MS: &str = "TIMEOUT_MS";
const ARG_STRATEGY: &str = "STRATEGY";

lazy_static::lazy_static! {
    static ref DEFAULT_MAX_SEARCH_ARGUMENTS_STR: String = DEFAULT_MAX_SEARCH_ARGUMENTS.to_string();
    static ref DEFAULT_TIMEOUT_MS_STR: String = DEFAULT_TIMEOUT.as_millis().to_string();
}

pub(crate) fn limits_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_MAX_SEARCH_ARGUMENTS)
            .long("max-search-arguments")
            .empty_values(false)
            .multiple(false)
            .default_value(DEFAULT_MAX_SEARCH_ARGUMENTS_STR.as_str())
            .help("the maximal number of arguments an extension search may branch on")
            .required(false),
        Arg::with_name(ARG_TIMEOUT_MS)
            .long("timeout-ms")
            .empty_values(false)
            .multiple(false)
            .default_value(DEFAULT_TIMEOUT_MS_STR.as_str())
            .help("the maximal duration of an extension search, in milliseconds")
            .required(false),
        Arg::with_name(ARG_STRATEGY)
            .long("strategy")
            .empty_values(false)
            .multiple(false)
            .possible_values(&["exhaustive", "grounded-split"])
            .default_value("grounded-split")
            .help("the strategy used to enumerate complete extensions")
            .required(false),
    ]
}

pub(crate) fn computation_limits(arg_matches: &ArgMatches<'_>) -> Result<ComputationLimits> {
    let mut limits = ComputationLimits::default();
    if let Some(n) = arg_matches.value_of(ARG_MAX_SEARCH_ARGUMENTS) {
        let n = n
            .parse::<usize>()
            .with_context(|| format!(r#"invalid maximal number of search arguments "{}""#, n))?;
        limits = limits.with_max_search_arguments(n);
    }
    if let Some(t) = arg_matches.value_of(ARG_TIMEOUT_MS) {
        let t = t
            .parse::<u64>()
            .with_context(|| format!(r#"invalid timeout "{}""#, t))?;
        limits = limits.with_timeout(Duration::from_millis(t));
    }
    Ok(limits)
}

pub(crate) fn enumeration_strategy(arg_matches: &ArgMatches<'_>) -> Result<EnumerationStrategy> {
    match arg_matches.value_of(ARG_STRATEGY) {
        Some(s) => s
            .parse::<EnumerationStrategy>()
            .with_context(|| format!(r#"invalid enumeration strategy "{}""#, s)),
        None => Ok(EnumerationStrategy::default()),
    }
}

pub(crate) fn read_file_path<T>(
    file_path: &str,
    reader: &mut dyn InstanceReader<T>,
) -> Result<AAFramework<T>>
where
    T: LabelType,
{
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(
        File::open(&canonicalized)
            .with_context(|| format!("while opening file {:?}", canonicalized))?,
    );
    let af = reader.read(&mut file_reader)?;
    info!(
        "the argumentation framework has {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks(),
    );
    Ok(af)
}

fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
