//! Enumerations shared across the models

use serde::{Deserialize, Serialize};

/// Semantic type assigned to a column
///
/// Types are assigned per column, never per cell. A column is monomorphic by
/// convention even when individual raw cells disagree with its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    #[default]
    String,
    Number,
    Boolean,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
}

impl Type {
    /// All types in declaration order
    pub const ALL: [Type; 5] = [
        Type::String,
        Type::Number,
        Type::Boolean,
        Type::Date,
        Type::DateTime,
    ];

    /// Wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::String => "string",
            Type::Number => "number",
            Type::Boolean => "boolean",
            Type::Date => "date",
            Type::DateTime => "datetime",
        }
    }

    /// Whether values of this type compare chronologically
    pub fn is_temporal(&self) -> bool {
        matches!(self, Type::Date | Type::DateTime)
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Type {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "text" => Ok(Type::String),
            "number" | "numeric" => Ok(Type::Number),
            "boolean" | "bool" => Ok(Type::Boolean),
            "date" => Ok(Type::Date),
            "datetime" | "date-time" | "timestamp" => Ok(Type::DateTime),
            other => Err(format!("unknown type '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_serde_names() {
        assert_eq!(serde_json::to_string(&Type::DateTime).unwrap(), "\"datetime\"");
        assert_eq!(serde_json::to_string(&Type::Number).unwrap(), "\"number\"");
        let parsed: Type = serde_json::from_str("\"date\"").unwrap();
        assert_eq!(parsed, Type::Date);
    }

    #[test]
    fn test_type_from_str() {
        assert_eq!("Number".parse::<Type>().unwrap(), Type::Number);
        assert_eq!("date-time".parse::<Type>().unwrap(), Type::DateTime);
        assert!("blob".parse::<Type>().is_err());
    }
}
