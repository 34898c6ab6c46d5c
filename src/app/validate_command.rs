use super::{
    cli_manager::{logging_level_cli_arg, Command},
    common,
};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;
use rebuttal::{
    aa::{AAFramework, LabelType},
    analysis::{AttackValidator, AttackVerdict, ResidualStrengthEvaluator, StrengthPolicyKind},
    io::{AspartixReader, Iccma23Reader, InstanceReader},
    solvers::{ComputationLimits, EnumerationStrategy},
    utils::Label,
};
use std::str::FromStr;

const CMD_NAME: &str = "validate";

const ARG_COUNTER: &str = "COUNTER";
const ARG_TARGET: &str = "TARGET";
const ARG_POLICY: &str = "POLICY";

pub(crate) struct ValidateCommand;

impl ValidateCommand {
    pub(crate) fn new() -> Self {
        ValidateCommand
    }
}

impl<'a> Command<'a> for ValidateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Validates a counter-attack and computes the residual strength of its target")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(
                Arg::with_name(ARG_COUNTER)
                    .long("counter")
                    .empty_values(false)
                    .multiple(false)
                    .help("the counter-argument")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_TARGET)
                    .long("target")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument attacked by the counter-argument")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_POLICY)
                    .long("policy")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["grounded", "preferred-fraction", "complete-blend"])
                    .default_value("preferred-fraction")
                    .help("the policy used to compute the residual strength")
                    .required(false),
            )
            .arg(common::reader_arg())
            .args(&common::limits_args())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = common::required_value(arg_matches, common::ARG_INPUT)?;
        let counter = common::required_value(arg_matches, ARG_COUNTER)?;
        let target = common::required_value(arg_matches, ARG_TARGET)?;
        let policy = common::required_value(arg_matches, ARG_POLICY)?;
        let policy = StrengthPolicyKind::from_str(policy)
            .map_err(|_| anyhow!(r#"unknown strength policy "{}""#, policy))?;
        let request = ValidationRequest {
            file,
            counter,
            target,
            policy,
            limits: common::computation_limits(arg_matches)?,
            strategy: common::enumeration_strategy(arg_matches)?,
        };
        match common::required_value(arg_matches, common::ARG_READER)? {
            common::READER_APX => run(&mut AspartixReader::default(), &request),
            common::READER_ICCMA23 => run(&mut Iccma23Reader::default(), &request),
            r => Err(anyhow!("unknown reader: {}", r)),
        }
    }
}

struct ValidationRequest<'a> {
    file: &'a str,
    counter: &'a str,
    target: &'a str,
    policy: StrengthPolicyKind,
    limits: ComputationLimits,
    strategy: EnumerationStrategy,
}

fn run<T>(reader: &mut dyn InstanceReader<T>, request: &ValidationRequest) -> Result<()>
where
    T: LabelType + FromStr,
{
    let af = common::read_file_path(request.file, reader)?;
    let evaluator = ResidualStrengthEvaluator::default()
        .with_policy_kind(request.policy)
        .with_limits(request.limits)
        .with_strategy(request.strategy);
    validate(&af, request.counter, request.target, &evaluator)
}

fn parse_label<T>(label: &str) -> Result<T>
where
    T: LabelType + FromStr,
{
    label
        .parse::<T>()
        .map_err(|_| anyhow!(r#"invalid argument label "{}""#, label))
}

fn validate<T>(
    af: &AAFramework<T>,
    counter: &str,
    target: &str,
    evaluator: &ResidualStrengthEvaluator<'_, T>,
) -> Result<()>
where
    T: LabelType + FromStr,
{
    let counter = parse_label::<T>(counter)?;
    let target = parse_label::<T>(target)?;
    info!("validating the attack from {} to {}", counter, target);
    let validator = AttackValidator::new(af)?;
    let validation = validator.validate(&counter, &target);
    println!("verdict: {}", validation.verdict());
    let print_label = |name: &str, label: Option<Label>| match label {
        Some(l) => println!("target label {}: {}", name, l),
        None => println!("target label {}: none", name),
    };
    print_label("before", validation.target_label_before());
    print_label("after", validation.target_label_after());
    let grounded = validation
        .grounded_extension()
        .labels(validation.augmented_framework())
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<String>>();
    println!("grounded extension: [{}]", grounded.join(","));
    if validation.verdict() == AttackVerdict::Invalid {
        if let Some(cause) = validation.cause() {
            println!("cause: {}", cause);
        }
        return Ok(());
    }
    let strength = evaluator.evaluate(&validation)?;
    println!("residual strength: {}", strength);
    Ok(())
}
