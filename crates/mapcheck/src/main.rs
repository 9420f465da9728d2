mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "mapcheck", version, about = "Declarative key/value validation CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_subcommand() {
        let cli = Cli::try_parse_from([
            "mapcheck",
            "check",
            "subject.json",
            "constraints.json",
            "--default-type",
            "email",
            "--template",
            "missing_key={:key} is required",
            "--template",
            "invalid_value_format={:key} is malformed",
        ])
        .expect("check args should parse");

        let Command::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.default_type.as_deref(), Some("email"));
        assert_eq!(args.templates.len(), 2);
    }

    #[test]
    fn parses_format_subcommand_with_global_flags() {
        let cli = Cli::try_parse_from([
            "mapcheck",
            "format",
            "integer",
            "42",
            "--format",
            "json",
            "--log-level",
            "off",
        ])
        .expect("format args should parse");
        assert!(matches!(cli.command, Command::Format(_)));
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
    }

    #[test]
    fn rejects_missing_constraints_path() {
        let err = Cli::try_parse_from(["mapcheck", "check", "subject.json"])
            .expect_err("constraints path is required");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
