use std::cmp::Ordering;

use super::predicate::{Operator, Predicate};
use crate::dataset::{scalar_text, Record};
use crate::schema::{parse_date, FieldType, FieldTypes};

/// True when `record` satisfies every predicate. An empty filter list matches everything.
pub fn matches(record: &Record, filters: &[Predicate], types: &FieldTypes) -> bool {
    filters.iter().all(|p| evaluate(record, p, types))
}

/// Records that satisfy every predicate, in their original order.
pub fn filter_records<'a>(
    records: &'a [Record],
    filters: &[Predicate],
    types: &FieldTypes,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches(record, filters, types))
        .collect()
}

pub fn evaluate(record: &Record, predicate: &Predicate, types: &FieldTypes) -> bool {
    let field = predicate.field.as_str();
    let value = predicate.value.as_str();

    let result = match &predicate.operator {
        Operator::Equals => eval_equals(record, field, value),
        Operator::Contains => eval_contains(record, field, value),
        Operator::GreaterThan => eval_order(record, field, value, types, Ordering::Greater),
        Operator::LessThan => eval_order(record, field, value, types, Ordering::Less),
        Operator::Unknown(_) => true,
    };

    tracing::trace!(%predicate, result, "evaluated predicate");
    result
}

fn eval_equals(record: &Record, field: &str, value: &str) -> bool {
    record.text(field).map_or(false, |text| text == value)
}

fn eval_contains(record: &Record, field: &str, value: &str) -> bool {
    let Some(text) = record.text(field) else {
        return false;
    };
    text.to_lowercase().contains(&value.to_lowercase())
}

fn eval_order(
    record: &Record,
    field: &str,
    value: &str,
    types: &FieldTypes,
    wanted: Ordering,
) -> bool {
    try_compare(record, field, value, types.type_of(field)) == Some(wanted)
}

fn try_compare(record: &Record, field: &str, value: &str, ty: FieldType) -> Option<Ordering> {
    let left = scalar_text(record.get(field)?)?;
    compare_as(&left, value, ty)
}

/// Orders two texts as `ty`: numbers numerically, dates chronologically, text byte-wise.
///
/// `None` when either side does not parse as `ty`.
pub fn compare_as(left: &str, right: &str, ty: FieldType) -> Option<Ordering> {
    match ty {
        FieldType::Numeric => {
            let left: f64 = left.trim().parse().ok()?;
            let right: f64 = right.trim().parse().ok()?;
            left.partial_cmp(&right)
        }
        FieldType::Date => Some(parse_date(left)?.cmp(&parse_date(right)?)),
        FieldType::Text => Some(left.cmp(right)),
    }
}
