// crusti_app_helper
// Copyright (C) 2020  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::app_helper::{init_logger, init_logger_with_level};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches};
use log::{info, LevelFilter};
use std::{ffi::OsString, io::Write, str::FromStr};
use sysinfo::System;

/// A subcommand of the app.
///
/// Commands describe their CLI arguments with clap and execute themselves given the matched arguments.
/// Each command must have a unique name.
pub(crate) trait Command<'a> {
    /// Returns the name of the command, as typed on the command line.
    fn name(&self) -> &str;

    /// Returns the clap subcommand describing the arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command; an error makes the app exit with a failure status.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}

const LOGGING_LEVEL_ARG: &str = "LOGGING_LEVEL";

/// The argument used to set the logging level; each command should include it.
pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    author: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

impl<'a> CliManager<'a> {
    pub(crate) fn new(app_name: &'a str, version: &'a str, author: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            author,
            about,
            commands: vec![],
        }
    }

    pub(crate) fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    fn clap_app(&self) -> App<'a, 'a> {
        let app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .author(self.author)
            .about(self.about);
        self.commands
            .iter()
            .fold(app, |app, c| app.subcommand(c.clap_subcommand()))
    }

    pub(crate) fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = args
            .into_iter()
            .map(|a| a.into())
            .collect::<Vec<OsString>>();
        match self.clap_app().get_matches_from_safe(args.iter()) {
            Ok(matches) => {
                let (command, command_matches) = self
                    .commands
                    .iter()
                    .find_map(|c| matches.subcommand_matches(c.name()).map(|m| (c, m)))
                    .ok_or_else(|| anyhow!("no command to execute"))?;
                let log_level = match command_matches.value_of(LOGGING_LEVEL_ARG) {
                    Some(level) => LevelFilter::from_str(level)
                        .map_err(|_| anyhow!("invalid logging level: {}", level))?,
                    None => LevelFilter::Info,
                };
                init_logger_with_level(log_level);
                info!("{} {}", self.app_name, self.version);
                sys_info();
                command.execute(command_matches)
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger();
                self.print_help(&args)
            }
            Err(e) => {
                init_logger();
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help(&self, args: &[OsString]) -> Result<()> {
        const HELP_STRINGS: [&str; 3] = ["help", "-h", "--help"];
        let words = args
            .iter()
            .skip(1)
            .take(2)
            .map(|a| a.to_string_lossy().to_string())
            .collect::<Vec<String>>();
        let subcommand_name = match words.as_slice() {
            [first, second] if HELP_STRINGS.contains(&first.as_str()) => Some(second),
            [first, ..] if !HELP_STRINGS.contains(&first.as_str()) => Some(first),
            _ => None,
        };
        let subcommand = subcommand_name
            .and_then(|name| self.commands.iter().find(|c| c.name() == name.as_str()));
        let mut message = WritableString::default();
        let written = match subcommand {
            Some(c) => c.clap_subcommand().write_long_help(&mut message),
            None => self.clap_app().write_long_help(&mut message),
        };
        written.context("while writing the help message")?;
        message.0.split('\n').for_each(|s| info!("{}", s));
        info!("");
        Ok(())
    }
}

fn sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    let unknown = || "[unknown]".to_string();
    info!("running on {}", System::host_name().unwrap_or_else(unknown));
    info!(
        "OS is {} {} with kernel {}",
        System::name().unwrap_or_else(unknown),
        System::os_version().unwrap_or_else(unknown),
        System::kernel_version().unwrap_or_else(unknown)
    );
    let mut cpu_kinds = sys.cpus().iter().map(|c| c.brand()).collect::<Vec<&str>>();
    cpu_kinds.sort_unstable();
    cpu_kinds.dedup();
    info!(
        "physical core count: {} {:?}",
        sys.physical_core_count()
            .map(|n| n.to_string())
            .unwrap_or_else(unknown),
        cpu_kinds
    );
    info!("total memory: {} MB", sys.total_memory() >> 20);
    info!("----------------------------------------");
}

/// An implementation of `std::io::Write` collecting the written bytes into a `String`.
#[derive(Default)]
struct WritableString(String);

impl Write for WritableString {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::SubCommand;
    use std::{cell::RefCell, rc::Rc};

    struct FlagCommand {
        executed: Rc<RefCell<bool>>,
        flag_set: Rc<RefCell<bool>>,
    }

    impl<'a> Command<'a> for FlagCommand {
        fn name(&self) -> &str {
            "flag"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("flag")
                .about("records its invocation")
                .arg(Arg::with_name("set").short("s"))
                .arg(logging_level_cli_arg())
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            *self.executed.borrow_mut() = true;
            *self.flag_set.borrow_mut() = arg_matches.is_present("set");
            Ok(())
        }
    }

    fn run(args: Vec<&'static str>) -> Result<(bool, bool)> {
        let mut manager = CliManager::new("app", "0.0.0", "author", "about");
        let executed = Rc::new(RefCell::new(false));
        let flag_set = Rc::new(RefCell::new(false));
        manager.add_command(Box::new(FlagCommand {
            executed: Rc::clone(&executed),
            flag_set: Rc::clone(&flag_set),
        }));
        manager.parse_cli(args)?;
        let result = (*executed.borrow(), *flag_set.borrow());
        Ok(result)
    }

    #[test]
    fn test_command_executed() {
        assert_eq!(
            (true, false),
            run(vec!["app", "flag", "--logging-level", "off"]).unwrap()
        );
    }

    #[test]
    fn test_command_with_flag() {
        assert_eq!(
            (true, true),
            run(vec!["app", "flag", "-s", "--logging-level", "off"]).unwrap()
        );
    }

    #[test]
    fn test_no_subcommand() {
        assert!(run(vec!["app"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(run(vec!["app", "foo"]).is_err());
    }

    #[test]
    fn test_unknown_arg() {
        assert!(run(vec!["app", "flag", "-b"]).is_err());
    }

    #[test]
    fn test_invalid_logging_level() {
        assert!(run(vec!["app", "flag", "--logging-level", "verbose"]).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!((false, false), run(vec!["app", "-h"]).unwrap());
        assert_eq!((false, false), run(vec!["app", "help"]).unwrap());
        assert_eq!((false, false), run(vec!["app", "help", "flag"]).unwrap());
        assert_eq!((false, false), run(vec!["app", "flag", "-h"]).unwrap());
    }

    #[test]
    fn test_writable_string() {
        let mut s = WritableString::default();
        write!(s, "abc").unwrap();
        write!(s, "def").unwrap();
        s.flush().unwrap();
        assert_eq!("abcdef", s.0);
    }
}
