use super::{
    cli_manager::{logging_level_cli_arg, Command},
    common,
};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::{info, warn};
use rebuttal::{
    aa::{self, AAFramework, Argument, LabelType, Query, Semantics},
    io::{AspartixReader, AspartixWriter, Iccma23Reader, Iccma23Writer, InstanceReader, ResponseWriter},
    solvers::{
        CompleteSemanticsSolver, ComputationLimits, CredulousAcceptanceComputer,
        EnumerationStrategy, GroundedSemanticsSolver, PreferredSemanticsSolver, SemanticsEngine,
        SingleExtensionComputer, SkepticalAcceptanceComputer, StableSemanticsSolver,
    },
};

const CMD_NAME: &str = "solve";

const ARG_CERTIFICATE: &str = "CERTIFICATE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .args(&common::problem_args())
            .arg(common::reader_arg())
            .args(&common::limits_args())
            .arg(
                Arg::with_name(ARG_CERTIFICATE)
                    .long("with-certificate")
                    .takes_value(false)
                    .help("output an extension witnessing the answer to DC/DS queries, if any"),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = common::required_value(arg_matches, common::ARG_INPUT)?;
        let (query, semantics) =
            aa::read_problem_string(common::required_value(arg_matches, common::ARG_PROBLEM)?)?;
        let options = SolvingOptions {
            query,
            semantics,
            arg: arg_matches.value_of(common::ARG_ARG),
            limits: common::computation_limits(arg_matches)?,
            strategy: common::enumeration_strategy(arg_matches)?,
            with_certificate: arg_matches.is_present(ARG_CERTIFICATE),
        };
        match common::required_value(arg_matches, common::ARG_READER)? {
            common::READER_APX => {
                let mut reader = AspartixReader::default();
                let af = common::read_file_path(file, &mut reader)?;
                solve(&af, &reader, &AspartixWriter, &options)
            }
            common::READER_ICCMA23 => {
                let mut reader = Iccma23Reader::default();
                let af = common::read_file_path(file, &mut reader)?;
                solve(&af, &reader, &Iccma23Writer, &options)
            }
            r => Err(anyhow!("unknown reader: {}", r)),
        }
    }
}

struct SolvingOptions<'a> {
    query: Query,
    semantics: Semantics,
    arg: Option<&'a str>,
    limits: ComputationLimits,
    strategy: EnumerationStrategy,
    with_certificate: bool,
}

fn solve<T>(
    af: &AAFramework<T>,
    reader: &dyn InstanceReader<T>,
    writer: &dyn ResponseWriter<T>,
    options: &SolvingOptions,
) -> Result<()>
where
    T: LabelType,
{
    let arg = options
        .arg
        .map(|a| reader.read_arg_from_str(af, a))
        .transpose()
        .context("while parsing the argument passed to the command line")?;
    info!("solving {}-{}", options.query, options.semantics);
    let mut out = std::io::stdout();
    match (options.query, arg) {
        (Query::SE, arg) | (Query::EE, arg) if arg.is_some() => {
            warn!(
                "unexpected argument on the command line (useless for query {})",
                options.query
            );
            solve_without_argument(af, writer, options, &mut out)
        }
        (Query::SE, _) | (Query::EE, _) => solve_without_argument(af, writer, options, &mut out),
        (query, None) => Err(anyhow!(
            "missing argument on the command line (required for query {})",
            query
        )),
        (Query::DC, Some(arg)) => {
            let mut solver = credulous_acceptance_computer(af, options);
            let (status, certificate) = solver.is_credulously_accepted_with_certificate(arg)?;
            writer.write_acceptance_status(&mut out, status)?;
            match certificate {
                Some(c) if options.with_certificate => {
                    writer.write_single_extension(&mut out, &c.arguments(af))
                }
                _ => Ok(()),
            }
        }
        (Query::DS, Some(arg)) => {
            let mut solver = skeptical_acceptance_computer(af, options);
            let (status, certificate) = solver.is_skeptically_accepted_with_certificate(arg)?;
            writer.write_acceptance_status(&mut out, status)?;
            match certificate {
                Some(c) if options.with_certificate => {
                    writer.write_single_extension(&mut out, &c.arguments(af))
                }
                _ => Ok(()),
            }
        }
    }
}

fn solve_without_argument<T>(
    af: &AAFramework<T>,
    writer: &dyn ResponseWriter<T>,
    options: &SolvingOptions,
    out: &mut dyn std::io::Write,
) -> Result<()>
where
    T: LabelType,
{
    if options.query == Query::EE {
        let extensions = SemanticsEngine::new(af)
            .with_limits(options.limits)
            .with_strategy(options.strategy)
            .compute(options.semantics)?;
        info!("found {} extension(s)", extensions.len());
        let arguments = extensions
            .extensions()
            .iter()
            .map(|e| e.arguments(af))
            .collect::<Vec<Vec<&Argument<T>>>>();
        return writer.write_extensions(out, &arguments);
    }
    let mut solver = single_extension_computer(af, options);
    match solver.compute_one_extension()? {
        Some(ext) => writer.write_single_extension(out, &ext.arguments(af)),
        None => writer.write_no_extension(out),
    }
}

fn single_extension_computer<'a, T>(
    af: &'a AAFramework<T>,
    options: &SolvingOptions,
) -> Box<dyn SingleExtensionComputer<T> + 'a>
where
    T: LabelType,
{
    match options.semantics {
        Semantics::GR => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::CO => Box::new(
            CompleteSemanticsSolver::new_with_limits(af, options.limits)
                .with_strategy(options.strategy),
        ),
        Semantics::PR => Box::new(
            PreferredSemanticsSolver::new_with_limits(af, options.limits)
                .with_strategy(options.strategy),
        ),
        Semantics::ST => Box::new(
            StableSemanticsSolver::new_with_limits(af, options.limits)
                .with_strategy(options.strategy),
        ),
    }
}

fn credulous_acceptance_computer<'a, T>(
    af: &'a AAFramework<T>,
    options: &SolvingOptions,
) -> Box<dyn CredulousAcceptanceComputer<T> + 'a>
where
    T: LabelType,
{
    match options.semantics {
        Semantics::GR => Box::new(GroundedSemanticsSolver::new(af)),
        // certificates must be preferred extensions
        Semantics::PR if options.with_certificate => Box::new(
            PreferredSemanticsSolver::new_with_limits(af, options.limits)
                .with_strategy(options.strategy),
        ),
        // credulous acceptance is the same under the complete and preferred semantics
        Semantics::CO | Semantics::PR => Box::new(
            CompleteSemanticsSolver::new_with_limits(af, options.limits)
                .with_strategy(options.strategy),
        ),
        Semantics::ST => Box::new(
            StableSemanticsSolver::new_with_limits(af, options.limits)
                .with_strategy(options.strategy),
        ),
    }
}

fn skeptical_acceptance_computer<'a, T>(
    af: &'a AAFramework<T>,
    options: &SolvingOptions,
) -> Box<dyn SkepticalAcceptanceComputer<T> + 'a>
where
    T: LabelType,
{
    match options.semantics {
        // skeptical acceptance under the complete semantics is membership of the grounded extension
        Semantics::GR | Semantics::CO => Box::new(GroundedSemanticsSolver::new(af)),
        Semantics::PR => Box::new(
            PreferredSemanticsSolver::new_with_limits(af, options.limits)
                .with_strategy(options.strategy),
        ),
        Semantics::ST => Box::new(
            StableSemanticsSolver::new_with_limits(af, options.limits)
                .with_strategy(options.strategy),
        ),
    }
}
