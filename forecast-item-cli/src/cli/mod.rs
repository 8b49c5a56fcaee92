//! Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::generate::GenerateCommands;

/// Generate Tactical and Operational forecast item workbooks from SKU remap requests
#[derive(Parser, Debug)]
#[command(name = "forecast-item-cli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply user requests to the data manager file and write the output workbooks
    Generate(GenerateCommands),
    /// Inspect the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "forecast-item-cli",
            "-vv",
            "generate",
            "--data-manager",
            "dm.xlsx",
            "--user-request",
            "req.xlsx",
            "--run-date",
            "03/07/2025",
            "--preview",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.data_manager.to_str(), Some("dm.xlsx"));
                assert!(args.preview);
                assert_eq!(
                    args.run_date,
                    chrono::NaiveDate::from_ymd_opt(2025, 3, 7)
                );
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_requires_both_files() {
        assert!(
            Cli::try_parse_from(["forecast-item-cli", "generate", "--data-manager", "dm.xlsx"])
                .is_err()
        );
    }

    #[test]
    fn test_bad_run_date_is_rejected() {
        assert!(
            Cli::try_parse_from([
                "forecast-item-cli",
                "generate",
                "--data-manager",
                "dm.xlsx",
                "--user-request",
                "req.xlsx",
                "--run-date",
                "2025-03-07",
            ])
            .is_err()
        );
    }
}
