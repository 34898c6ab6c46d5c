use super::{
    cli_manager::{logging_level_cli_arg, Command},
    common,
};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::info;
use rebuttal::{
    aa::{AAFramework, LabelType},
    io::{AspartixReader, Iccma23Reader},
};

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input AF files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::reader_arg())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = common::required_value(arg_matches, common::ARG_INPUT)?;
        match common::required_value(arg_matches, common::ARG_READER)? {
            common::READER_APX => {
                check_integrity(&common::read_file_path(file, &mut AspartixReader::default())?)
            }
            common::READER_ICCMA23 => {
                check_integrity(&common::read_file_path(file, &mut Iccma23Reader::default())?)
            }
            r => Err(anyhow!("unknown reader: {}", r)),
        }
    }
}

fn check_integrity<T>(af: &AAFramework<T>) -> Result<()>
where
    T: LabelType,
{
    af.check_integrity()?;
    info!("framework digest is {}", af.content_digest());
    Ok(())
}
