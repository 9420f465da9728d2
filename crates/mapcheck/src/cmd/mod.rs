use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod check;
pub mod format;
pub mod types;
pub mod version;

/// Default cap for subject and constraint documents.
pub const DEFAULT_MAX_DOCUMENT_SIZE: u64 = 1024 * 1024;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a subject document against a constraint set.
    Check(CheckArgs),
    /// Check a single value against one type tag.
    Format(FormatArgs),
    /// List known type tags and template slots.
    Types(TypesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Format(args) => format::run(args, format),
        Command::Types(args) => types::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON object of subject values.
    pub subject: PathBuf,
    /// JSON object of constraints, validated in key order.
    pub constraints: PathBuf,
    /// Type applied to constraints without one (e.g. email, "Integer type").
    #[arg(long, value_name = "TYPE", env = "MAPCHECK_DEFAULT_TYPE")]
    pub default_type: Option<String>,
    /// Override a message template (SLOT=TEMPLATE). Repeatable.
    #[arg(long = "template", value_name = "SLOT=TEMPLATE")]
    pub templates: Vec<String>,
    /// Use the historical `[a-zA-z]` name character class.
    #[arg(long)]
    pub legacy_name_pattern: bool,
    /// Maximum bytes accepted per input document.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_DOCUMENT_SIZE)]
    pub max_document_size: u64,
}

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Type tag to check against.
    pub type_tag: String,
    /// Value to check.
    pub value: String,
    /// Use the name/email-only string validator.
    #[arg(long)]
    pub legacy: bool,
}

#[derive(Args, Debug, Default)]
pub struct TypesArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
