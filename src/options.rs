//! Catalog of filters offered in the filter form.

use crate::filter::Operator;
use crate::schema::{FieldType, FieldTypes};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub field: String,
    pub operator: Operator,
    pub label: String,
}

impl FilterOption {
    pub fn new(field: impl Into<String>, operator: Operator, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator,
            label: label.into(),
        }
    }

    /// `field:operator`, the key used to pick an option.
    pub fn key(&self) -> String {
        format!("{}:{}", self.field, self.operator)
    }
}

/// The options shipped with the sample table.
pub fn sample_options() -> Vec<FilterOption> {
    vec![
        FilterOption::new("name", Operator::Contains, "Name contains"),
        FilterOption::new("age", Operator::Equals, "Age equals"),
        FilterOption::new("age", Operator::GreaterThan, "Age greater than"),
        FilterOption::new("age", Operator::LessThan, "Age less than"),
        FilterOption::new("date", Operator::Equals, "Date equals"),
        FilterOption::new("status", Operator::Equals, "Status equals"),
    ]
}

/// Text fields get `contains` and `equals`; numeric and date fields get `equals` and the orderings.
pub fn options_for(types: &FieldTypes) -> Vec<FilterOption> {
    let mut options = Vec::new();

    for (field, ty) in types.iter() {
        let operators = match ty {
            FieldType::Text => vec![Operator::Contains, Operator::Equals],
            FieldType::Numeric | FieldType::Date => {
                vec![Operator::Equals, Operator::GreaterThan, Operator::LessThan]
            }
        };
        for op in operators {
            let label = format!("{} {}", capitalize(field), op.label());
            options.push(FilterOption::new(field, op, label));
        }
    }

    options
}

pub fn find_option<'a>(options: &'a [FilterOption], key: &str) -> Option<&'a FilterOption> {
    options.iter().find(|o| o.key() == key)
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
