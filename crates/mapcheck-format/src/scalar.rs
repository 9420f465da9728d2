//! Scalar format validator.
//!
//! [`validate`] checks one value against one format tag. The aggregate
//! validator calls it for `Name`, `Email`, `Numeric` and `Integer`; the two
//! remaining tags are not formats and always yield `false` here.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::tag::TypeTag;
use crate::value::Value;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_PART_LEN: usize = 64;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,}( [A-Za-z]+)?$").unwrap());

// `A-z` also spans the six ASCII punctuation characters between `Z` and `a`.
static LEGACY_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-z]{2,}( [a-zA-Z]+)?$").unwrap());

static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[ \t\n\r\x0B\x0C]*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$",
    )
    .unwrap()
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+",
        r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    ))
    .unwrap()
});

/// Which character class the `Name` format uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePattern {
    /// `^[A-Za-z]{2,}( [A-Za-z]+)?$`
    #[default]
    Strict,
    /// The historical `[a-zA-z]` first-word class. It admits the six ASCII
    /// characters between `Z` and `a`; only for constraint sets that depend on
    /// that exact behavior.
    Legacy,
}

/// Tunables for the scalar format validator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub name_pattern: NamePattern,
}

/// Check `value` against `tag` with default options.
pub fn validate(value: &Value, tag: TypeTag) -> bool {
    validate_with(value, tag, &FormatOptions::default())
}

/// Check `value` against `tag`.
pub fn validate_with(value: &Value, tag: TypeTag, options: &FormatOptions) -> bool {
    let text = value.text();
    let valid = match tag {
        TypeTag::Name => is_name(&text, options.name_pattern),
        TypeTag::Email => is_email(&text),
        TypeTag::Numeric => value.is_number() || is_numeric(&text),
        TypeTag::Integer => INTEGER_RE.is_match(&text),
        TypeTag::SimpleString | TypeTag::InCollection => {
            debug!(%tag, "type tag is not a scalar format");
            false
        }
    };
    trace!(%tag, valid, "scalar format check");
    valid
}

pub(crate) fn is_name(text: &str, pattern: NamePattern) -> bool {
    match pattern {
        NamePattern::Strict => NAME_RE.is_match(text),
        NamePattern::Legacy => LEGACY_NAME_RE.is_match(text),
    }
}

pub(crate) fn is_email(text: &str) -> bool {
    if text.len() > MAX_EMAIL_LEN {
        return false;
    }
    match text.split_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_PART_LEN => EMAIL_RE.is_match(text),
        _ => false,
    }
}

fn is_numeric(text: &str) -> bool {
    NUMERIC_RE.is_match(text)
}
