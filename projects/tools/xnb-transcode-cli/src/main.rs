#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

use argh::FromArgs;
use tracing::error;
use xnb_transcode_cli::{commands, exit_codes, logging};

#[derive(FromArgs, Debug)]
/// Converts XNA/MonoGame XNB textures to PNG images
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Convert(commands::convert::ConvertCmd),
    Inspect(commands::inspect::InspectCmd),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Commands::Convert(cmd) => cmd.verbose,
            Commands::Inspect(cmd) => cmd.verbose,
        }
    }
}

fn main() {
    let cli: TopLevel = argh::from_env();
    logging::init(cli.command.verbose());

    let result = match cli.command {
        Commands::Convert(cmd) => commands::convert::handle_convert_command(cmd),
        Commands::Inspect(cmd) => commands::inspect::handle_inspect_command(cmd),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}
