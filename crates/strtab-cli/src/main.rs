mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Table {
            file,
            order,
            renumber,
        } => {
            commands::table::run(commands::table::TableArgs {
                file,
                order,
                renumber,
            });
        }
        Command::Encode { file } => {
            commands::encode::run(commands::encode::EncodeArgs { file });
        }
    }
}
