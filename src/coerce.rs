//! # Type Coercion
//!
//! Converts raw option text into the value an option field expects and writes
//! it through the field's handle.
//!
//! Fields are classified by their handle, a closed [`Field`] union:
//!
//! - **Flag**: a plain `bool`, set from `"true"`/`"false"`.
//! - **Scalar**: text, numbers, paths, semantic versions and dates, optionally
//!   nullable (`Option<T>`). Handled by [`convert`], which passes matching
//!   types through, then tries the target's conversion from the source, then
//!   the source's conversion to the target.
//! - **Choice**: an [`OptionEnum`], resolved by unambiguous prefix of the
//!   member names.
//! - **Items**: a `Vec<String>`; the value is split on `;` and appended.
//! - **Pairs**: a `BTreeMap<String, String>`; each `;` segment must be
//!   `key=value`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::error::CommandLineError;
use crate::matching::{resolve_partial, Resolution};

/// Format used to parse and print [`ScalarType::Date`] values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator between values of multi-valued options.
pub const VALUE_SEPARATOR: char = ';';

/// The scalar types an option can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Text,
    Boolean,
    Integer,
    Unsigned,
    Float,
    Path,
    Version,
    Date,
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarType::Text => "text",
            ScalarType::Boolean => "boolean",
            ScalarType::Integer => "integer",
            ScalarType::Unsigned => "unsigned integer",
            ScalarType::Float => "number",
            ScalarType::Path => "path",
            ScalarType::Version => "version",
            ScalarType::Date => "date",
        };
        f.write_str(name)
    }
}

/// A typed scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Text(String),
    Boolean(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Path(PathBuf),
    Version(semver::Version),
    Date(NaiveDate),
}

impl ScalarValue {
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            ScalarValue::Text(_) => ScalarType::Text,
            ScalarValue::Boolean(_) => ScalarType::Boolean,
            ScalarValue::Integer(_) => ScalarType::Integer,
            ScalarValue::Unsigned(_) => ScalarType::Unsigned,
            ScalarValue::Float(_) => ScalarType::Float,
            ScalarValue::Path(_) => ScalarType::Path,
            ScalarValue::Version(_) => ScalarType::Version,
            ScalarValue::Date(_) => ScalarType::Date,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(text) => f.write_str(text),
            ScalarValue::Boolean(value) => write!(f, "{value}"),
            ScalarValue::Integer(value) => write!(f, "{value}"),
            ScalarValue::Unsigned(value) => write!(f, "{value}"),
            ScalarValue::Float(value) => write!(f, "{value}"),
            ScalarValue::Path(path) => write!(f, "{}", path.display()),
            ScalarValue::Version(version) => write!(f, "{version}"),
            ScalarValue::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}

/// Why a value could not be coerced.
///
/// Everything except [`CoerceError::CommandLine`] is reported to the user as
/// [`CommandLineError::InvalidOptionValue`]; already-structured errors pass
/// through unchanged.
#[derive(Error, Debug)]
pub enum CoerceError {
    #[error("'{value}' is not a valid {target}: {reason}")]
    Parse {
        value: String,
        target: ScalarType,
        reason: String,
    },

    #[error("a {0} option does not accept null")]
    Null(ScalarType),

    #[error("'{0}' is not a key=value pair")]
    MissingKey(String),

    #[error("duplicate key '{0}'")]
    DuplicateKey(String),

    #[error(transparent)]
    CommandLine(#[from] CommandLineError),
}

impl CoerceError {
    /// Converts into the error reported for `option value`.
    pub fn into_command_line_error(self, option: &str, value: &str) -> CommandLineError {
        match self {
            CoerceError::CommandLine(error) => error,
            other => CommandLineError::InvalidOptionValue {
                option: option.to_string(),
                value: value.to_string(),
                reason: other.to_string(),
            },
        }
    }
}

/// A writable scalar field.
///
/// Implemented for every supported scalar type and its `Option<_>` wrapper;
/// only the wrapper accepts null.
pub trait ScalarSlot {
    fn scalar_type(&self) -> ScalarType;
    fn is_nullable(&self) -> bool;
    fn store(&mut self, value: Option<ScalarValue>) -> Result<(), CoerceError>;
}

fn mismatch(value: &ScalarValue, target: ScalarType) -> CoerceError {
    CommandLineError::UnsupportedConversion {
        from: value.scalar_type(),
        to: target,
    }
    .into()
}

macro_rules! scalar_slot {
    ($ty:ty => $variant:ident) => {
        impl ScalarSlot for $ty {
            fn scalar_type(&self) -> ScalarType {
                ScalarType::$variant
            }

            fn is_nullable(&self) -> bool {
                false
            }

            fn store(&mut self, value: Option<ScalarValue>) -> Result<(), CoerceError> {
                match value {
                    Some(ScalarValue::$variant(inner)) => {
                        *self = inner;
                        Ok(())
                    }
                    Some(other) => Err(mismatch(&other, ScalarType::$variant)),
                    None => Err(CoerceError::Null(ScalarType::$variant)),
                }
            }
        }

        impl ScalarSlot for Option<$ty> {
            fn scalar_type(&self) -> ScalarType {
                ScalarType::$variant
            }

            fn is_nullable(&self) -> bool {
                true
            }

            fn store(&mut self, value: Option<ScalarValue>) -> Result<(), CoerceError> {
                match value {
                    Some(ScalarValue::$variant(inner)) => {
                        *self = Some(inner);
                        Ok(())
                    }
                    Some(other) => Err(mismatch(&other, ScalarType::$variant)),
                    None => {
                        *self = None;
                        Ok(())
                    }
                }
            }
        }
    };
}

scalar_slot!(String => Text);
scalar_slot!(bool => Boolean);
scalar_slot!(i64 => Integer);
scalar_slot!(u64 => Unsigned);
scalar_slot!(f64 => Float);
scalar_slot!(PathBuf => Path);
scalar_slot!(semver::Version => Version);
scalar_slot!(NaiveDate => Date);

/// An enum usable as an option value.
///
/// Members are matched by their `name`, ignoring case, and may be abbreviated
/// to any unambiguous prefix.
pub trait OptionEnum: Copy + 'static {
    /// Every member, in the order they are listed in help.
    const VARIANTS: &'static [Self];

    fn name(self) -> &'static str;
}

/// A writable enum field.
pub trait ChoiceSlot {
    fn variant_names(&self) -> Vec<&'static str>;
    fn select(&mut self, index: usize);
}

impl<E: OptionEnum> ChoiceSlot for E {
    fn variant_names(&self) -> Vec<&'static str> {
        E::VARIANTS.iter().map(|variant| variant.name()).collect()
    }

    fn select(&mut self, index: usize) {
        if let Some(variant) = E::VARIANTS.get(index) {
            *self = *variant;
        }
    }
}

/// Handle to an option field of a command.
pub enum Field<'a> {
    Flag(&'a mut bool),
    Scalar(&'a mut dyn ScalarSlot),
    Choice(&'a mut dyn ChoiceSlot),
    Items(&'a mut Vec<String>),
    Pairs(&'a mut BTreeMap<String, String>),
}

impl Field<'_> {
    pub fn kind(&self) -> OptionKind {
        match self {
            Field::Flag(_) => OptionKind::Boolean,
            Field::Scalar(slot) => OptionKind::Scalar(slot.scalar_type()),
            Field::Choice(choice) => OptionKind::Enum(choice.variant_names()),
            Field::Items(_) => OptionKind::Collection,
            Field::Pairs(_) => OptionKind::Map,
        }
    }
}

/// The declared value kind of an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    Boolean,
    Scalar(ScalarType),
    Enum(Vec<&'static str>),
    Collection,
    Map,
}

impl OptionKind {
    /// Whether values are merged into the field rather than replacing it.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, OptionKind::Collection | OptionKind::Map)
    }

    /// Placeholder shown after the option name in help.
    pub fn value_hint(&self) -> Option<String> {
        match self {
            OptionKind::Boolean => None,
            OptionKind::Scalar(scalar) => Some(format!("<{scalar}>")),
            OptionKind::Enum(names) => Some(format!("<{}>", names.join("|"))),
            OptionKind::Collection => Some("<value;...>".to_string()),
            OptionKind::Map => Some("<key=value;...>".to_string()),
        }
    }
}

/// Coerces `raw` into the field's type and writes it.
///
/// `option` is the token the value was given for; it is only used to report
/// enum resolution failures.
pub fn assign(field: Field<'_>, option: &str, raw: &str) -> Result<(), CoerceError> {
    match field {
        Field::Flag(flag) => *flag = parse_bool(raw)?,
        Field::Scalar(slot) => coerce_scalar(Some(raw), slot)?,
        Field::Choice(choice) => select_choice(choice, option, raw)?,
        Field::Items(items) => items.extend(split_values(raw).map(str::to_string)),
        Field::Pairs(pairs) => merge_pairs(pairs, raw)?,
    }
    Ok(())
}

/// Coerces optional text into a scalar slot. `None` is null.
pub fn coerce_scalar(raw: Option<&str>, slot: &mut dyn ScalarSlot) -> Result<(), CoerceError> {
    let value = raw
        .map(|text| convert(ScalarValue::Text(text.to_string()), slot.scalar_type()))
        .transpose()?;
    slot.store(value)
}

/// Converts `value` into `target`.
pub fn convert(value: ScalarValue, target: ScalarType) -> Result<ScalarValue, CoerceError> {
    if value.scalar_type() == target {
        return Ok(value);
    }
    if let Some(converted) = convert_from(&value, target) {
        return converted;
    }
    if let Some(converted) = convert_to(&value, target) {
        return converted;
    }
    Err(CommandLineError::UnsupportedConversion {
        from: value.scalar_type(),
        to: target,
    }
    .into())
}

/// Conversions the target type performs from a source value.
fn convert_from(value: &ScalarValue, target: ScalarType) -> Option<Result<ScalarValue, CoerceError>> {
    match (target, value) {
        (_, ScalarValue::Text(text)) => Some(parse_scalar(text, target)),
        (ScalarType::Float, ScalarValue::Integer(n)) => Some(Ok(ScalarValue::Float(*n as f64))),
        (ScalarType::Float, ScalarValue::Unsigned(n)) => Some(Ok(ScalarValue::Float(*n as f64))),
        (ScalarType::Integer, ScalarValue::Unsigned(n)) => Some(
            i64::try_from(*n)
                .map(ScalarValue::Integer)
                .map_err(|e| out_of_range(value, target, e)),
        ),
        _ => None,
    }
}

/// Conversions the source value performs into a target type.
fn convert_to(value: &ScalarValue, target: ScalarType) -> Option<Result<ScalarValue, CoerceError>> {
    match (value, target) {
        (_, ScalarType::Text) => Some(Ok(ScalarValue::Text(value.to_string()))),
        (ScalarValue::Integer(n), ScalarType::Unsigned) => Some(
            u64::try_from(*n)
                .map(ScalarValue::Unsigned)
                .map_err(|e| out_of_range(value, target, e)),
        ),
        _ => None,
    }
}

fn out_of_range(value: &ScalarValue, target: ScalarType, error: impl fmt::Display) -> CoerceError {
    CoerceError::Parse {
        value: value.to_string(),
        target,
        reason: error.to_string(),
    }
}

fn parse_scalar(text: &str, target: ScalarType) -> Result<ScalarValue, CoerceError> {
    let invalid = |reason: String| CoerceError::Parse {
        value: text.to_string(),
        target,
        reason,
    };

    match target {
        ScalarType::Text => Ok(ScalarValue::Text(text.to_string())),
        ScalarType::Boolean => parse_bool(text).map(ScalarValue::Boolean),
        ScalarType::Integer => text
            .trim()
            .parse()
            .map(ScalarValue::Integer)
            .map_err(|e: std::num::ParseIntError| invalid(e.to_string())),
        ScalarType::Unsigned => text
            .trim()
            .parse()
            .map(ScalarValue::Unsigned)
            .map_err(|e: std::num::ParseIntError| invalid(e.to_string())),
        ScalarType::Float => text
            .trim()
            .parse()
            .map(ScalarValue::Float)
            .map_err(|e: std::num::ParseFloatError| invalid(e.to_string())),
        ScalarType::Path => Ok(ScalarValue::Path(PathBuf::from(text))),
        ScalarType::Version => semver::Version::parse(text.trim())
            .map(ScalarValue::Version)
            .map_err(|e| invalid(e.to_string())),
        ScalarType::Date => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
            .map(ScalarValue::Date)
            .map_err(|e| invalid(e.to_string())),
    }
}

fn parse_bool(text: &str) -> Result<bool, CoerceError> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(CoerceError::Parse {
            value: text.to_string(),
            target: ScalarType::Boolean,
            reason: "expected 'true' or 'false'".to_string(),
        })
    }
}

fn split_values(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(VALUE_SEPARATOR).filter(|segment| !segment.is_empty())
}

fn select_choice(choice: &mut dyn ChoiceSlot, option: &str, raw: &str) -> Result<(), CoerceError> {
    let names = choice.variant_names();
    match resolve_partial(names.iter().enumerate().map(|(i, name)| (i, *name)), raw) {
        Resolution::Unique(index) => {
            choice.select(index);
            Ok(())
        }
        Resolution::Unknown => Err(CommandLineError::UnknownOption {
            option: option.to_string(),
        }
        .into()),
        Resolution::Ambiguous(candidates) => Err(CommandLineError::AmbiguousOption {
            option: raw.to_string(),
            candidates,
        }
        .into()),
    }
}

/// Validates every segment before inserting any of them.
fn merge_pairs(pairs: &mut BTreeMap<String, String>, raw: &str) -> Result<(), CoerceError> {
    let mut parsed: Vec<(&str, &str)> = Vec::new();
    for segment in split_values(raw) {
        let (key, value) = segment
            .split_once('=')
            .ok_or_else(|| CoerceError::MissingKey(segment.to_string()))?;
        if pairs.contains_key(key) || parsed.iter().any(|(seen, _)| *seen == key) {
            return Err(CoerceError::DuplicateKey(key.to_string()));
        }
        parsed.push((key, value));
    }

    pairs.extend(
        parsed
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string())),
    );
    Ok(())
}
