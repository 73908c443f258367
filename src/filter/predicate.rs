use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    Equals,
    Contains,
    GreaterThan,
    LessThan,
    /// Any other operator name. Evaluates as always satisfied.
    Unknown(String),
}

impl Operator {
    /// Never fails: unrecognised names become [`Operator::Unknown`].
    pub fn parse(s: &str) -> Operator {
        match s {
            "=" => return Operator::Equals,
            ">" => return Operator::GreaterThan,
            "<" => return Operator::LessThan,
            _ => {}
        }

        [
            Operator::Equals,
            Operator::Contains,
            Operator::GreaterThan,
            Operator::LessThan,
        ]
        .into_iter()
        .find(|op| op.name().eq_ignore_ascii_case(s))
        .unwrap_or_else(|| Operator::Unknown(s.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            Operator::Equals => "equals",
            Operator::Contains => "contains",
            Operator::GreaterThan => "greaterThan",
            Operator::LessThan => "lessThan",
            Operator::Unknown(name) => name,
        }
    }

    /// Human wording, e.g. "greater than".
    pub fn label(&self) -> &str {
        match self {
            Operator::GreaterThan => "greater than",
            Operator::LessThan => "less than",
            other => other.name(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        Operator::parse(&s)
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.name().to_string()
    }
}

/// A single `field operator value` condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

impl Predicate {
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// True when field, operator name and value are all non-empty. No trimming.
    pub fn is_complete(&self) -> bool {
        !self.field.is_empty() && !self.operator.name().is_empty() && !self.value.is_empty()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)
    }
}
