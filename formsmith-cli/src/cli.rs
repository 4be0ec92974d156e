use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use formsmith::PayloadKey;

/// Clap-facing mirror of [`PayloadKey`].
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum PayloadKeyArg {
    Id,
    Label,
}

impl From<PayloadKeyArg> for PayloadKey {
    fn from(arg: PayloadKeyArg) -> Self {
        match arg {
            PayloadKeyArg::Id => PayloadKey::Id,
            PayloadKeyArg::Label => PayloadKey::Label,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "formsmith")]
#[command(version)]
#[command(about = "Build, fill in and submit forms from command scripts")]
#[command(long_about = "
formsmith runs command scripts against an in-memory form session. A script is
a JSON or YAML list of commands tagged by `op` (add-field, update-field,
delete-field, clear-all, append-option, set-option, remove-option,
move-option, set-value, validate, submit).

Configuration is read from an optional file given with --config and from
FORMSMITH_* environment variables (nested keys split on `__`).

Example usage:
  formsmith run form.yaml                      # Print one JSON result per command
  formsmith run form.json --payload-key label  # Key accepted payloads by label
  formsmith schema form.yaml                   # Print the schema the script builds
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a script and print each command's result as one JSON line
    #[command(long_about = "
Run a command script and print each command's result as one line of JSON.

Exits with 0 when the script completes, 1 when the script or configuration
cannot be used, and 2 when the last submit in the script was rejected.
")]
    Run {
        /// Script file (.json, .yaml or .yml)
        script: PathBuf,

        /// Configuration file (.toml, .yaml, .yml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override how accepted payloads are keyed
        #[arg(long, value_enum)]
        payload_key: Option<PayloadKeyArg>,
    },
    /// Run a script silently and print the resulting schema
    Schema {
        /// Script file (.json, .yaml or .yml)
        script: PathBuf,

        /// Configuration file (.toml, .yaml, .yml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_options() {
        let cli = Cli::try_parse_from([
            "formsmith",
            "run",
            "form.yaml",
            "--config",
            "formsmith.toml",
            "--payload-key",
            "label",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                script,
                config,
                payload_key,
            } => {
                assert_eq!(script, PathBuf::from("form.yaml"));
                assert_eq!(config, Some(PathBuf::from("formsmith.toml")));
                assert_eq!(payload_key, Some(PayloadKeyArg::Label));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["formsmith", "schema", "form.json", "--quiet"]).unwrap();
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Schema { .. }));
    }

    #[test]
    fn test_bad_payload_key_rejected() {
        let result =
            Cli::try_parse_from(["formsmith", "run", "form.json", "--payload-key", "name"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_script_is_required() {
        assert!(Cli::try_parse_from(["formsmith", "run"]).is_err());
    }

    #[test]
    fn test_payload_key_conversion() {
        assert_eq!(PayloadKey::from(PayloadKeyArg::Id), PayloadKey::Id);
        assert_eq!(PayloadKey::from(PayloadKeyArg::Label), PayloadKey::Label);
    }
}
