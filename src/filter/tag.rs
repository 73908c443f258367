//! `field:operator:value` tag strings.
//!
//! Tags are how filters are typed on the command line and shown in lists.
//! They stay at the edge: the model and evaluator only see [`Predicate`]s.

use super::predicate::{Operator, Predicate};
use crate::error::{Error, Result};

const SEPARATOR: char = ':';

/// Joins field, operator name and value with `:`.
///
/// Only the value may contain `:` and still decode back unchanged. A colon in the
/// field or in an unknown operator name shifts the split, so such predicates do
/// not survive [`encode`] then [`decode`].
pub fn encode(predicate: &Predicate) -> String {
    format!(
        "{}{SEPARATOR}{}{SEPARATOR}{}",
        predicate.field, predicate.operator, predicate.value
    )
}

/// Splits on the first two separators; the value keeps any further colons.
pub fn decode(tag: &str) -> Result<Predicate> {
    let mut parts = tag.splitn(3, SEPARATOR);

    let field = parts.next().unwrap_or_default();
    let operator = parts
        .next()
        .ok_or_else(|| Error::invalid_tag(tag, "missing operator"))?;
    let value = parts
        .next()
        .ok_or_else(|| Error::invalid_tag(tag, "missing value"))?;

    Ok(Predicate::new(field, Operator::parse(operator), value))
}

pub fn decode_all<I, S>(tags: I) -> Result<Vec<Predicate>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter().map(|tag| decode(tag.as_ref())).collect()
}
