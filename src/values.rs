//! Distinct values of one field, for building filter thresholds.

use serde_yaml::Value as YamlValue;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::dataset::{scalar_text, Record};
use crate::filter::compare_as;
use crate::schema::FieldType;

/// How often each scalar value of `field` occurs. Sequence items count individually.
pub fn collect_values(records: &[Record], field: &str) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    let values = records.iter().filter_map(|r| r.get(field)).flat_map(|v| match v {
        YamlValue::Sequence(items) => items.iter().collect::<Vec<_>>(),
        other => vec![other],
    });

    for text in values.filter_map(scalar_text).filter(|s| !s.is_empty()) {
        *counts.entry(text).or_default() += 1;
    }

    counts
}

/// One line per value, ordered as `ty` orders them.
///
/// With `show_count`, lines read `value: count` and the most frequent come first.
/// Values that do not parse as `ty` sort after those that do.
pub fn format_values(counts: HashMap<String, usize>, ty: FieldType, show_count: bool) -> Vec<String> {
    let mut entries: Vec<(String, usize)> = counts.into_iter().collect();

    entries.sort_by(|(a, a_count), (b, b_count)| {
        let by_count = if show_count {
            b_count.cmp(a_count)
        } else {
            Ordering::Equal
        };
        by_count.then_with(|| typed_order(a, b, ty))
    });

    entries
        .into_iter()
        .map(|(value, count)| {
            if show_count {
                format!("{value}: {count}")
            } else {
                value
            }
        })
        .collect()
}

fn typed_order(a: &str, b: &str, ty: FieldType) -> Ordering {
    let parses = |s: &str| compare_as(s, s, ty).is_some();
    match (parses(a), parses(b)) {
        (true, true) => compare_as(a, b, ty).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
    .then_with(|| a.cmp(b))
}
