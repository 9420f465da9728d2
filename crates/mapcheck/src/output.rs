use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use mapcheck_rules::{TemplateSlot, TypeTag, ValidationError};
use serde::Serialize;

const CHECK_SCHEMA_ID: &str = "https://schemas.mapcheck.dev/cli/v1/check-result.schema.json";
const FORMAT_SCHEMA_ID: &str = "https://schemas.mapcheck.dev/cli/v1/format-result.schema.json";
const TYPES_SCHEMA_ID: &str = "https://schemas.mapcheck.dev/cli/v1/types.schema.json";

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
pub struct CheckReport<'a> {
    schema_id: &'static str,
    pub subject: &'a str,
    pub constraints: &'a str,
    pub constraint_count: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureOutput<'a>>,
}

#[derive(Serialize)]
pub struct FailureOutput<'a> {
    pub kind: &'static str,
    pub key: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> CheckReport<'a> {
    pub fn new(
        subject: &'a str,
        constraints: &'a str,
        constraint_count: usize,
        failure: Option<&'a ValidationError>,
    ) -> Self {
        Self {
            schema_id: CHECK_SCHEMA_ID,
            subject,
            constraints,
            constraint_count,
            valid: failure.is_none(),
            failure: failure.map(|err| FailureOutput {
                kind: err.kind().as_str(),
                key: err.key(),
                message: err.message(),
            }),
        }
    }
}

pub fn print_check(report: &CheckReport<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = new_table(vec!["SUBJECT", "CONSTRAINTS", "RESULT", "KEY", "MESSAGE"]);
            let (result, key, message) = match &report.failure {
                Some(failure) => (
                    failure.kind,
                    failure.key.unwrap_or("-"),
                    failure.message,
                ),
                None => ("valid", "-", "-"),
            };
            table.add_row(vec![
                report.subject.to_string(),
                format!("{} keys", report.constraint_count),
                result.to_string(),
                key.to_string(),
                message.to_string(),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => match &report.failure {
            Some(failure) => println!(
                "{}: invalid ({}) key={} message={}",
                report.subject,
                failure.kind,
                failure.key.unwrap_or("-"),
                failure.message
            ),
            None => println!(
                "{}: valid ({} keys checked)",
                report.subject, report.constraint_count
            ),
        },
    }
}

#[derive(Serialize)]
pub struct FormatReport<'a> {
    schema_id: &'static str,
    pub validator: &'static str,
    pub type_tag: TypeTag,
    pub value: &'a str,
    pub valid: bool,
}

impl<'a> FormatReport<'a> {
    pub fn new(validator: &'static str, type_tag: TypeTag, value: &'a str, valid: bool) -> Self {
        Self {
            schema_id: FORMAT_SCHEMA_ID,
            validator,
            type_tag,
            value,
            valid,
        }
    }
}

pub fn print_format(report: &FormatReport<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = new_table(vec!["VALIDATOR", "TYPE", "VALUE", "VALID"]);
            table.add_row(vec![
                report.validator.to_string(),
                report.type_tag.to_string(),
                report.value.to_string(),
                report.valid.to_string(),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!(
            "{} {:?} is {}",
            report.type_tag,
            report.value,
            if report.valid { "valid" } else { "invalid" }
        ),
    }
}

#[derive(Serialize)]
struct TypeOutput {
    name: &'static str,
    legacy_label: &'static str,
    scalar_format: bool,
}

#[derive(Serialize)]
struct SlotOutput {
    name: &'static str,
    default_template: &'static str,
}

#[derive(Serialize)]
struct TypesOutput {
    schema_id: &'static str,
    types: Vec<TypeOutput>,
    template_slots: Vec<SlotOutput>,
}

pub fn print_types(format: OutputFormat) {
    let types: Vec<TypeOutput> = TypeTag::ALL
        .into_iter()
        .map(|tag| TypeOutput {
            name: tag.as_str(),
            legacy_label: tag.legacy_label(),
            scalar_format: tag.is_format(),
        })
        .collect();
    let slots: Vec<SlotOutput> = TemplateSlot::ALL
        .into_iter()
        .map(|slot| SlotOutput {
            name: slot.as_str(),
            default_template: slot.default_template(),
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&TypesOutput {
            schema_id: TYPES_SCHEMA_ID,
            types,
            template_slots: slots,
        }),
        OutputFormat::Table => {
            let mut table = new_table(vec!["TYPE", "LEGACY LABEL", "SCALAR FORMAT"]);
            for ty in &types {
                table.add_row(vec![
                    ty.name.to_string(),
                    ty.legacy_label.to_string(),
                    ty.scalar_format.to_string(),
                ]);
            }
            println!("{table}");

            let mut table = new_table(vec!["TEMPLATE SLOT", "DEFAULT"]);
            for slot in &slots {
                table.add_row(vec![slot.name.to_string(), slot.default_template.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for ty in &types {
                println!("type {} ({})", ty.name, ty.legacy_label);
            }
            for slot in &slots {
                println!("slot {} = {}", slot.name, slot.default_template);
            }
        }
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_report_serializes_failure() {
        let err = ValidationError::MissingKey {
            key: "email".to_string(),
            message: "The key 'email' is mandatory".to_string(),
        };
        let report = CheckReport::new("subject.json", "rules.json", 2, Some(&err));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["failure"]["kind"], "missing_key");
        assert_eq!(json["failure"]["key"], "email");
        assert_eq!(json["schema_id"], CHECK_SCHEMA_ID);
    }

    #[test]
    fn check_report_omits_failure_when_valid() {
        let report = CheckReport::new("subject.json", "rules.json", 2, None);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["valid"], true);
        assert!(json.get("failure").is_none());
    }

    #[test]
    fn format_report_uses_snake_case_tag() {
        let report = FormatReport::new("scalar", TypeTag::InCollection, "x", false);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type_tag"], "in_collection");
    }
}
