use clap::error::ErrorKind;
use clap::{Arg, ArgAction, Command, CommandFactory, FromArgMatches, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

use deblank::{ConverterConfig, Error, NameConverter, PromptEngine, Renamer};

mod output;

const HOMEPAGE: &str = "https://github.com/stomar/deblank";

const VERSION_TEXT: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Copyright (C) 2012-2013 Marcus Stollsteimer.\n",
    "License GPLv3+: GNU GPL version 3 or later <http://gnu.org/licenses/gpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

#[derive(Parser)]
#[command(name = "deblank")]
#[command(version = VERSION_TEXT)]
#[command(disable_version_flag = true)]
#[command(
    about = "Rename files and replace or remove special characters like spaces, parentheses, or umlauts"
)]
struct Cli {
    /// Files to rename
    #[arg(value_name = "FILE", required_unless_present = "list")]
    files: Vec<PathBuf>,

    /// Do not rename files, only display what would happen
    #[arg(short = 'n', long = "no-act")]
    no_act: bool,

    /// List the used character substitutions
    #[arg(short, long)]
    list: bool,
}

fn build_command(config: &ConverterConfig) -> Command {
    Cli::command()
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print a brief version information and exit")
                .action(ArgAction::Version),
        )
        .after_help(format!(
            "The new filename will only contain the following characters:\n\n    {}\n\n\
             Spaces are replaced by underscores, German umlauts and eszett are\n\
             transliterated, all other invalid characters are removed.\n\n\
             Report bugs on the deblank home page: <{}>",
            config.valid_chars_to_string(),
            HOMEPAGE
        ))
}

fn main() -> ExitCode {
    let config = ConverterConfig::default();

    let matches = match build_command(&config).try_get_matches() {
        Ok(matches) => matches,
        Err(e) => return usage_fail(e),
    };
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => return usage_fail(e),
    };

    if cli.list {
        print!("{}", config.substitutions_to_string());
        return ExitCode::SUCCESS;
    }

    let converter = match NameConverter::new(&config) {
        Ok(converter) => converter,
        Err(err) => return fail(&err),
    };

    let mut renamer = Renamer::new(converter, PromptEngine::stdio(), cli.no_act);
    let summary = renamer.run(&cli.files);

    ExitCode::from(output::exit_code_to_u8(output::exit_code_for_summary(
        &summary,
    )))
}

fn usage_fail(e: clap::Error) -> ExitCode {
    let err = match e.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
        ErrorKind::MissingRequiredArgument => {
            Error::validation_missing_argument(vec!["FILE".to_string()])
        }
        _ => Error::validation_invalid_argument("options", clap_message(&e)),
    };
    fail(&err)
}

fn fail(err: &Error) -> ExitCode {
    output::print_error(err);
    ExitCode::from(output::exit_code_to_u8(output::exit_code_for_error(
        err.code,
    )))
}

/// First line of clap's rendered error, without its `error: ` prefix.
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.render().to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line.trim_start_matches("error: ").to_string()
}
