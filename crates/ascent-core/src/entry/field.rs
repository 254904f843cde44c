//! Draft field names and typed field updates.
//!
//! `FieldUpdate::parse` is where raw user text becomes a typed value. The
//! builder only ever sees already-typed updates.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::types::{Attempts, Effort, SkillKind, TickType};
use crate::error::{AscentError, Result};

/// A field on the entry draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Grade,
    TickType,
    Attempts,
    Location,
    Height,
    TimeOnWall,
    Effort,
    PhysicalSkills,
    TechnicalSkills,
    Notes,
}

impl Field {
    /// Every field, in presentation order.
    pub const ALL: [Field; 11] = [
        Field::Name,
        Field::Grade,
        Field::TickType,
        Field::Attempts,
        Field::Location,
        Field::Height,
        Field::TimeOnWall,
        Field::Effort,
        Field::PhysicalSkills,
        Field::TechnicalSkills,
        Field::Notes,
    ];

    /// Record key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Grade => "grade",
            Self::TickType => "tickType",
            Self::Attempts => "attempts",
            Self::Location => "location",
            Self::Height => "height",
            Self::TimeOnWall => "timeOnWall",
            Self::Effort => "effort",
            Self::PhysicalSkills => "physicalSkills",
            Self::TechnicalSkills => "technicalSkills",
            Self::Notes => "notes",
        }
    }

    /// Prompt label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Route name",
            Self::Grade => "Grade",
            Self::TickType => "Tick type",
            Self::Attempts => "Attempts",
            Self::Location => "Location",
            Self::Height => "Height (ft)",
            Self::TimeOnWall => "Time on wall (min)",
            Self::Effort => "Effort (1-10)",
            Self::PhysicalSkills => "Physical skills",
            Self::TechnicalSkills => "Technical skills",
            Self::Notes => "Notes",
        }
    }

    /// Whether the field lives in the collapsible optional section.
    pub fn is_optional_section(&self) -> bool {
        matches!(
            self,
            Self::Location
                | Self::Height
                | Self::TimeOnWall
                | Self::Effort
                | Self::PhysicalSkills
                | Self::TechnicalSkills
                | Self::Notes
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = AscentError;

    /// Accepts record keys as well as snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().to_ascii_lowercase() == key)
            .ok_or_else(|| AscentError::UnknownField(s.trim().to_string()))
    }
}

/// One typed mutation of the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Grade(String),
    TickType(TickType),
    Attempts(Attempts),
    Location(String),
    Height(Option<f64>),
    TimeOnWall(Option<f64>),
    Effort(Effort),
    Skills(SkillKind, BTreeSet<String>),
    Notes(String),
}

impl FieldUpdate {
    /// The field this update targets.
    pub fn field(&self) -> Field {
        match self {
            Self::Name(_) => Field::Name,
            Self::Grade(_) => Field::Grade,
            Self::TickType(_) => Field::TickType,
            Self::Attempts(_) => Field::Attempts,
            Self::Location(_) => Field::Location,
            Self::Height(_) => Field::Height,
            Self::TimeOnWall(_) => Field::TimeOnWall,
            Self::Effort(_) => Field::Effort,
            Self::Skills(SkillKind::Physical, _) => Field::PhysicalSkills,
            Self::Skills(SkillKind::Technical, _) => Field::TechnicalSkills,
            Self::Notes(_) => Field::Notes,
        }
    }

    /// Coerce raw user text into an update for `field`.
    ///
    /// Strings are kept as typed (trimming happens when the record is
    /// built). An empty value clears optional numbers. Skill lists are
    /// comma-separated.
    pub fn parse(field: Field, raw: &str) -> Result<Self> {
        let update = match field {
            Field::Name => Self::Name(raw.to_string()),
            Field::Grade => Self::Grade(raw.trim().to_string()),
            Field::TickType => Self::TickType(raw.parse()?),
            Field::Attempts => Self::Attempts(Attempts::try_from(parse_small_int(field, raw)?)?),
            Field::Location => Self::Location(raw.to_string()),
            Field::Height => Self::Height(parse_measure(field, raw)?),
            Field::TimeOnWall => Self::TimeOnWall(parse_measure(field, raw)?),
            Field::Effort => Self::Effort(Effort::try_from(parse_small_int(field, raw)?)?),
            Field::PhysicalSkills => Self::Skills(SkillKind::Physical, split_tags(raw)),
            Field::TechnicalSkills => Self::Skills(SkillKind::Technical, split_tags(raw)),
            Field::Notes => Self::Notes(raw.to_string()),
        };
        Ok(update)
    }

    /// Parse a `key=value` pair as given on the command line.
    pub fn parse_pair(pair: &str) -> Result<Self> {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            AscentError::InvalidInput(format!("'{}' (expected key=value)", pair))
        })?;
        Self::parse(key.parse()?, value)
    }
}

/// Trim tags, drop blanks, and collapse duplicates.
pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn split_tags(raw: &str) -> BTreeSet<String> {
    normalize_tags(raw.split(','))
}

fn parse_small_int(field: Field, raw: &str) -> Result<u8> {
    raw.trim().parse::<u8>().map_err(|_| {
        AscentError::InvalidInput(format!("{} must be a whole number, got '{}'", field, raw.trim()))
    })
}

fn parse_measure(field: Field, raw: &str) -> Result<Option<f64>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed.parse().map_err(|_| {
        AscentError::InvalidInput(format!("{} must be a number, got '{}'", field, trimmed))
    })?;
    if !value.is_finite() {
        return Err(AscentError::InvalidInput(format!(
            "{} must be a finite number, got '{}'",
            field, trimmed
        )));
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_from_str_spellings() {
        assert_eq!("tickType".parse::<Field>().unwrap(), Field::TickType);
        assert_eq!("tick_type".parse::<Field>().unwrap(), Field::TickType);
        assert_eq!("time-on-wall".parse::<Field>().unwrap(), Field::TimeOnWall);
        assert_eq!(
            "unknown".parse::<Field>(),
            Err(AscentError::UnknownField("unknown".to_string()))
        );
    }

    #[test]
    fn test_optional_section_membership() {
        let optional: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| f.is_optional_section())
            .collect();
        assert!(!optional.contains(&Field::Name));
        assert!(!optional.contains(&Field::Attempts));
        assert!(optional.contains(&Field::Effort));
        assert_eq!(optional.len(), 7);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(
            FieldUpdate::parse(Field::Height, " 40.5 ").unwrap(),
            FieldUpdate::Height(Some(40.5))
        );
        assert_eq!(
            FieldUpdate::parse(Field::TimeOnWall, "").unwrap(),
            FieldUpdate::TimeOnWall(None)
        );
        assert!(FieldUpdate::parse(Field::Height, "tall").is_err());
        assert!(FieldUpdate::parse(Field::Height, "inf").is_err());
    }

    #[test]
    fn test_parse_negative_height_is_kept() {
        assert_eq!(
            FieldUpdate::parse(Field::Height, "-3").unwrap(),
            FieldUpdate::Height(Some(-3.0))
        );
    }

    #[test]
    fn test_parse_bounded_ints() {
        assert_eq!(
            FieldUpdate::parse(Field::Attempts, "3").unwrap(),
            FieldUpdate::Attempts(Attempts::new(3).unwrap())
        );
        assert!(matches!(
            FieldUpdate::parse(Field::Attempts, "6"),
            Err(AscentError::OutOfRange(_))
        ));
        assert!(matches!(
            FieldUpdate::parse(Field::Effort, "0"),
            Err(AscentError::OutOfRange(_))
        ));
        assert!(matches!(
            FieldUpdate::parse(Field::Effort, "-1"),
            Err(AscentError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_skills_normalizes() {
        let update = FieldUpdate::parse(Field::PhysicalSkills, " crimp, ,sloper,crimp ").unwrap();
        let expected: BTreeSet<String> =
            ["crimp", "sloper"].iter().map(|s| s.to_string()).collect();
        assert_eq!(update, FieldUpdate::Skills(SkillKind::Physical, expected));
        assert_eq!(update.field(), Field::PhysicalSkills);
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            FieldUpdate::parse_pair("tick=flash"),
            Err(AscentError::UnknownField("tick".to_string()))
        );
        assert_eq!(
            FieldUpdate::parse_pair("tickType=flash").unwrap(),
            FieldUpdate::TickType(TickType::Flash)
        );
        assert_eq!(
            FieldUpdate::parse_pair("notes=a=b").unwrap(),
            FieldUpdate::Notes("a=b".to_string())
        );
        assert!(FieldUpdate::parse_pair("novalue").is_err());
    }
}
