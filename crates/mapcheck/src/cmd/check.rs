use std::fs::File;
use std::io::Read;
use std::path::Path;

use mapcheck_rules::{
    ConstraintSet, FormatOptions, MapValidator, NamePattern, Subject, ValidatorConfig,
};

use crate::cmd::CheckArgs;
use crate::exit::{
    constraint_error, flag_error, io_error, load_error, CliError, CliResult, DATA_INVALID,
    FAILURE, SUCCESS, USAGE,
};
use crate::output::{print_check, CheckReport, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let config = build_config(&args)?;

    let subject_doc = read_document(&args.subject, args.max_document_size)?;
    let subject = Subject::from_json(&subject_doc)
        .map_err(|err| load_error(&format!("failed loading {}", args.subject.display()), err))?;
    let constraints_doc = read_document(&args.constraints, args.max_document_size)?;
    let constraints = ConstraintSet::from_json(&constraints_doc).map_err(|err| {
        load_error(&format!("failed loading {}", args.constraints.display()), err)
    })?;
    tracing::debug!(
        subject_keys = subject.len(),
        constraint_keys = constraints.len(),
        "loaded documents"
    );

    let constraint_count = constraints.len();
    let validator = MapValidator::with_config(subject, constraints, config);
    let outcome = validator.validate();

    let failure = match &outcome {
        Ok(()) => None,
        Err(err) if err.kind().is_subject_error() => Some(err),
        Err(err) => return Err(constraint_error(err.clone())),
    };

    let subject_label = args.subject.display().to_string();
    let constraints_label = args.constraints.display().to_string();
    let report = CheckReport::new(
        &subject_label,
        &constraints_label,
        constraint_count,
        failure,
    );
    print_check(&report, format);

    if let Some(err) = failure {
        tracing::info!(key = err.key(), kind = %err.kind(), "subject rejected");
        return Ok(FAILURE);
    }
    Ok(SUCCESS)
}

fn build_config(args: &CheckArgs) -> CliResult<ValidatorConfig> {
    let mut config = ValidatorConfig::default();

    if let Some(name) = &args.default_type {
        config = config
            .with_default_type_named(name)
            .map_err(|err| flag_error("--default-type", err))?;
    }

    for spec in &args.templates {
        let (slot, template) = parse_template_flag(spec)?;
        config = config
            .with_template_named(slot, template)
            .map_err(|err| flag_error("--template", err))?;
    }

    if args.legacy_name_pattern {
        config = config.with_format_options(FormatOptions {
            name_pattern: NamePattern::Legacy,
        });
    }

    Ok(config)
}

fn parse_template_flag(spec: &str) -> CliResult<(&str, &str)> {
    spec.split_once('=')
        .map(|(slot, template)| (slot.trim(), template))
        .ok_or_else(|| {
            CliError::new(
                USAGE,
                format!("--template expects SLOT=TEMPLATE, got: {spec}"),
            )
        })
}

fn read_document(path: &Path, max_bytes: u64) -> CliResult<String> {
    let context = format!("failed reading {}", path.display());
    let file = File::open(path).map_err(|err| io_error(&context, err))?;
    let len = file
        .metadata()
        .map_err(|err| io_error(&context, err))?
        .len();
    if len > max_bytes {
        return Err(too_large(path, len, max_bytes));
    }

    let mut content = String::new();
    file.take(max_bytes.saturating_add(1))
        .read_to_string(&mut content)
        .map_err(|err| io_error(&context, err))?;
    let read = content.len() as u64;
    if read > max_bytes {
        return Err(too_large(path, read, max_bytes));
    }
    Ok(content)
}

fn too_large(path: &Path, len: u64, max_bytes: u64) -> CliError {
    CliError::new(
        DATA_INVALID,
        format!(
            "{} is too large ({len} bytes, max {max_bytes})",
            path.display()
        ),
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mapcheck_rules::{TemplateSlot, TypeTag};

    use super::*;
    use crate::cmd::DEFAULT_MAX_DOCUMENT_SIZE;

    fn args() -> CheckArgs {
        CheckArgs {
            subject: PathBuf::from("subject.json"),
            constraints: PathBuf::from("constraints.json"),
            default_type: None,
            templates: Vec::new(),
            legacy_name_pattern: false,
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
        }
    }

    #[test]
    fn template_flag_splits_on_first_equals() {
        assert_eq!(
            parse_template_flag("missing_key={:key} = required").unwrap(),
            ("missing_key", "{:key} = required")
        );
        assert_eq!(parse_template_flag("nope").unwrap_err().code, USAGE);
    }

    #[test]
    fn build_config_applies_flags() {
        let config = build_config(&CheckArgs {
            default_type: Some("Email TYPE".to_string()),
            templates: vec!["missing_key=need {:key}".to_string()],
            legacy_name_pattern: true,
            ..args()
        })
        .unwrap();
        assert_eq!(config.default_type, TypeTag::Email);
        assert_eq!(
            config.templates.get(TemplateSlot::MissingKey),
            "need {:key}"
        );
        assert_eq!(config.format.name_pattern, NamePattern::Legacy);
    }

    #[test]
    fn build_config_rejects_bad_flags_as_usage() {
        let err = build_config(&CheckArgs {
            default_type: Some("phone".to_string()),
            ..args()
        })
        .unwrap_err();
        assert_eq!(err.code, USAGE);

        let err = build_config(&CheckArgs {
            templates: vec!["missing_key=no token".to_string()],
            ..args()
        })
        .unwrap_err();
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn read_document_enforces_size_cap() {
        let path = std::env::temp_dir().join(format!(
            "mapcheck-read-cap-{}-{}.json",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::write(&path, r#"{"name":"John Smith"}"#).unwrap();

        assert!(read_document(&path, 1024).is_ok());
        let err = read_document(&path, 8).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.contains("too large"));

        let _ = std::fs::remove_file(&path);
    }
}
