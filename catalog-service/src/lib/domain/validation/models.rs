use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Field families that have a dedicated validation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationFieldKind {
    Nickname,
    Password,
    Age,
    GenreName,
    DvdTitle,
    DvdDirectors,
    DvdDescription,
    DvdYear,
    DvdDuration,
    DvdCopies,
    DvdPrice,
}

impl ValidationFieldKind {
    pub const ALL: [ValidationFieldKind; 11] = [
        ValidationFieldKind::Nickname,
        ValidationFieldKind::Password,
        ValidationFieldKind::Age,
        ValidationFieldKind::GenreName,
        ValidationFieldKind::DvdTitle,
        ValidationFieldKind::DvdDirectors,
        ValidationFieldKind::DvdDescription,
        ValidationFieldKind::DvdYear,
        ValidationFieldKind::DvdDuration,
        ValidationFieldKind::DvdCopies,
        ValidationFieldKind::DvdPrice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationFieldKind::Nickname => "NICKNAME",
            ValidationFieldKind::Password => "PASSWORD",
            ValidationFieldKind::Age => "AGE",
            ValidationFieldKind::GenreName => "GENRE_NAME",
            ValidationFieldKind::DvdTitle => "DVD_TITLE",
            ValidationFieldKind::DvdDirectors => "DVD_DIRECTORS",
            ValidationFieldKind::DvdDescription => "DVD_DESCRIPTION",
            ValidationFieldKind::DvdYear => "DVD_YEAR",
            ValidationFieldKind::DvdDuration => "DVD_DURATION",
            ValidationFieldKind::DvdCopies => "DVD_COPIES",
            ValidationFieldKind::DvdPrice => "DVD_PRICE",
        }
    }
}

impl fmt::Display for ValidationFieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationFieldKind {
    type Err = String;

    /// Accepts `DVD_TITLE`, `dvd_title` or `dvd-title`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("Unknown validation field: {}", s))
    }
}

/// A field value submitted for validation.
///
/// Deserialized untagged from JSON: integers, decimals, strings, string
/// arrays and `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
    TextList(Vec<String>),
    #[default]
    Null,
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "integer",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Text(_) => "text",
            FieldValue::TextList(_) => "text list",
            FieldValue::Null => "null",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::TextList(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_kind() {
        assert_eq!("DVD_TITLE".parse(), Ok(ValidationFieldKind::DvdTitle));
        assert_eq!("dvd-price".parse(), Ok(ValidationFieldKind::DvdPrice));
        assert_eq!("nickname".parse(), Ok(ValidationFieldKind::Nickname));
        assert!("GENRE_DELETION".parse::<ValidationFieldKind>().is_err());
    }

    #[test]
    fn test_field_value_from_json() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[42, 4.5, "text", ["a", "b"], null]"#).unwrap();

        assert_eq!(
            values,
            vec![
                FieldValue::Integer(42),
                FieldValue::Decimal(4.5),
                FieldValue::Text("text".to_string()),
                FieldValue::TextList(vec!["a".to_string(), "b".to_string()]),
                FieldValue::Null,
            ]
        );
    }
}
