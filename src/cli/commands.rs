//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::RandomTreeService;
use crate::cli::args::{Cli, Commands, ConfigCommands, GenerateArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{label_for, Identifier};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Generate(args)) => cmd_generate(cli, args),
        Some(Commands::Label { identifier }) => cmd_label(identifier),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::InvalidArgs(
            "no command given, see --help".to_string(),
        )),
    }
}

/// Command line flags override loaded settings.
pub fn apply_overrides(mut settings: Settings, args: &GenerateArgs) -> Settings {
    if let Some(v) = args.max_depth {
        settings.max_depth = v;
    }
    if let Some(v) = args.min_width {
        settings.min_width = v;
    }
    if let Some(v) = args.max_width {
        settings.max_width = v;
    }
    if let Some(v) = &args.root {
        settings.root = v.clone();
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings.show_unlabeled |= args.show_unlabeled;
    settings
}

#[instrument(skip(cli))]
fn cmd_generate(cli: &Cli, args: &GenerateArgs) -> CliResult<()> {
    let settings = apply_overrides(Settings::load(cli.config.as_deref())?, args);
    debug!("settings: {:?}", settings);

    let mut service = RandomTreeService::new(&settings)?;
    let result = service.generate_labeled()?;

    if settings.show_unlabeled {
        output::header("unlabeled");
        output::info(&result.raw);
        output::header("labeled");
    }
    output::info(&result.labeled);
    Ok(())
}

fn cmd_label(identifier: &str) -> CliResult<()> {
    let identifier: Identifier = identifier.parse()?;
    output::info(&label_for(&identifier));
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::InvalidArgs(
                    "cannot determine config directory".to_string(),
                ))
            }
        },
    }
    Ok(())
}
