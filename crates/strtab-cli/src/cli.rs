use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OrderChoice {
    #[default]
    Text,
    Id,
}

#[derive(Parser)]
#[command(name = "strtab", bin_name = "strtab")]
#[command(about = "De-duplicating string table over line input")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Intern each input line and print the table
    #[command(after_help = r#"EXAMPLES:
  strtab table words.txt
  strtab table words.txt --order id
  cat words.txt | strtab table --renumber"#)]
    Table {
        /// Input file (defaults to stdin)
        file: Option<PathBuf>,

        /// Index to print in ascending key order
        #[arg(long, value_enum, default_value_t = OrderChoice::Text)]
        order: OrderChoice,

        /// Renumber ids densely in text order before printing
        #[arg(long)]
        renumber: bool,
    },

    /// Replace each input line with its assigned id
    #[command(after_help = r#"EXAMPLES:
  strtab encode words.txt
  cat words.txt | strtab encode"#)]
    Encode {
        /// Input file (defaults to stdin)
        file: Option<PathBuf>,
    },
}
