//! Timestamp parsing against an ordered list of textual layouts.
//!
//! The value form tries every layout in priority order. The pointer form
//! registered in the registry accepts RFC 3339 only; the `*time.Time`
//! descriptor path in the converter goes through the value form instead.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Weekday};

use crate::error::{ConvertError, RegistryError};
use crate::kind::PrimitiveKind;
use crate::registry::RegistryBuilder;
use crate::value::Value;

pub fn register(builder: &mut RegistryBuilder) -> Result<(), RegistryError> {
    builder.register_pair(PrimitiveKind::Timestamp, convert_timestamp, convert_timestamp_ptr)
}

/// How a layout's format string is applied.
enum Shape {
    /// RFC 3339 with optional fractional seconds.
    Rfc3339,
    /// Date and time without zone, taken as UTC.
    Naive(&'static str),
    /// Like `Naive`, after collapsing whitespace runs (space-padded days).
    Collapsed(&'static str),
    /// Date only, midnight UTC.
    Date(&'static str),
    /// Numeric zone offset (`%z`).
    Zoned(&'static str),
    /// Trailing alphabetic zone abbreviation (`MST`, `UTC`, ...), resolved
    /// to a zero offset.
    Abbreviated(&'static str),
}

struct Layout {
    name: &'static str,
    /// Separator after a leading weekday name. The weekday is checked for
    /// spelling only, never against the date.
    weekday: Option<&'static str>,
    shape: Shape,
}

const fn layout(name: &'static str, weekday: Option<&'static str>, shape: Shape) -> Layout {
    Layout { name, weekday, shape }
}

/// Priority order: first match wins. `%.f` accepts an optional fraction
/// after the seconds field.
const LAYOUTS: &[Layout] = &[
    layout("RFC 3339", None, Shape::Rfc3339),
    layout("date time", None, Shape::Naive("%Y-%m-%d %H:%M:%S%.f")),
    layout("date", None, Shape::Date("%Y-%m-%d")),
    layout("RFC 822", None, Shape::Abbreviated("%d %b %y %H:%M")),
    layout("RFC 850", Some(", "), Shape::Abbreviated("%d-%b-%y %H:%M:%S%.f")),
    layout("ANSI C", Some(" "), Shape::Collapsed("%b %d %H:%M:%S%.f %Y")),
    layout("RFC 1123", Some(", "), Shape::Abbreviated("%d %b %Y %H:%M:%S%.f")),
    layout("RFC 1123 numeric zone", Some(", "), Shape::Zoned("%d %b %Y %H:%M:%S%.f %z")),
    layout("RFC 822 numeric zone", None, Shape::Zoned("%d %b %y %H:%M %z")),
];

impl Layout {
    fn parse(&self, input: &str) -> Option<DateTime<FixedOffset>> {
        let rest = match self.weekday {
            Some(separator) => strip_weekday(input, separator)?,
            None => input,
        };
        self.shape.parse(rest)
    }
}

/// Drop a leading `Mon`/`Monday` token followed by `separator`.
fn strip_weekday<'a>(input: &'a str, separator: &str) -> Option<&'a str> {
    let (day, rest) = input.split_once(separator)?;
    day.parse::<Weekday>().ok()?;
    Some(rest)
}

impl Shape {
    fn parse(&self, input: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            Shape::Rfc3339 => DateTime::parse_from_rfc3339(input).ok(),
            Shape::Naive(fmt) => NaiveDateTime::parse_from_str(input, fmt)
                .ok()
                .map(|naive| naive.and_utc().fixed_offset()),
            Shape::Collapsed(fmt) => {
                let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
                NaiveDateTime::parse_from_str(&collapsed, fmt)
                    .ok()
                    .map(|naive| naive.and_utc().fixed_offset())
            }
            Shape::Date(fmt) => NaiveDate::parse_from_str(input, fmt)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc().fixed_offset()),
            Shape::Zoned(fmt) => DateTime::parse_from_str(input, fmt).ok(),
            Shape::Abbreviated(fmt) => {
                let (head, zone) = input.rsplit_once(' ')?;
                if zone.is_empty() || !zone.chars().all(|c| c.is_ascii_alphabetic()) {
                    return None;
                }
                NaiveDateTime::parse_from_str(head, fmt)
                    .ok()
                    .map(|naive| naive.and_utc().fixed_offset())
            }
        }
    }
}

/// Parse `input` against every known layout, returning the first match.
pub fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>, ConvertError> {
    for layout in LAYOUTS {
        if let Some(t) = layout.parse(input) {
            tracing::trace!(layout = layout.name, "timestamp layout matched");
            return Ok(t);
        }
    }
    Err(ConvertError::parse(
        input,
        PrimitiveKind::Timestamp.keyword(),
        "no known layout matches",
    ))
}

pub fn convert_timestamp(input: &str) -> Result<Value, ConvertError> {
    parse_timestamp(input).map(Value::Timestamp)
}

/// Pointer form: RFC 3339 only.
pub fn convert_timestamp_ptr(input: &str) -> Result<Value, ConvertError> {
    DateTime::parse_from_rfc3339(input)
        .map(|t| Value::Timestamp(t).boxed())
        .map_err(|e| ConvertError::parse(input, PrimitiveKind::Timestamp.keyword(), e.to_string()))
}
