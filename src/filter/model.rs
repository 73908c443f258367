//! Filter state owned by one table session.
//!
//! [`FilterModel`] keeps the active predicates in insertion order together
//! with the single predicate being built in the filter form. Callers read the
//! active set through [`FilterModel::filters`] and evaluate with
//! [`FilterModel::apply`]; evaluation never mutates the model.

use super::eval;
use super::predicate::{Operator, Predicate};
use super::tag;
use crate::dataset::Record;
use crate::error::Result;
use crate::options::FilterOption;
use crate::schema::FieldTypes;

/// The predicate currently being edited. The operator stays unset until one is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InProgressFilter {
    pub field: String,
    pub operator: Option<Operator>,
    pub value: String,
}

impl InProgressFilter {
    /// The finished predicate, if field, operator and value are all filled in.
    pub fn to_predicate(&self) -> Option<Predicate> {
        let operator = self.operator.clone()?;
        let predicate = Predicate::new(self.field.clone(), operator, self.value.clone());
        predicate.is_complete().then_some(predicate)
    }

    pub fn is_complete(&self) -> bool {
        self.to_predicate().is_some()
    }
}

impl From<Predicate> for InProgressFilter {
    fn from(p: Predicate) -> Self {
        let operator = (!p.operator.name().is_empty()).then_some(p.operator);
        Self {
            field: p.field,
            operator,
            value: p.value,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterModel {
    filters: Vec<Predicate>,
    in_progress: InProgressFilter,
}

impl FilterModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &[Predicate] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Appends without checking completeness; gate with [`Predicate::is_complete`] first.
    pub fn add_filter(&mut self, predicate: Predicate) {
        tracing::debug!(%predicate, "adding filter");
        self.filters.push(predicate);
    }

    /// Removes the first structurally equal predicate. Absent predicates are ignored.
    pub fn remove_filter(&mut self, predicate: &Predicate) {
        if let Some(idx) = self.filters.iter().position(|p| p == predicate) {
            tracing::debug!(%predicate, "removing filter");
            self.filters.remove(idx);
        }
    }

    pub fn replace_all(&mut self, predicates: impl IntoIterator<Item = Predicate>) {
        self.filters = predicates.into_iter().collect();
        tracing::debug!(count = self.filters.len(), "replaced filters");
    }

    pub fn in_progress(&self) -> &InProgressFilter {
        &self.in_progress
    }

    pub fn set_in_progress(&mut self, partial: InProgressFilter) {
        self.in_progress = partial;
    }

    pub fn set_in_progress_value(&mut self, value: impl Into<String>) {
        self.in_progress.value = value.into();
    }

    /// Stages an option's field and operator with an empty value.
    pub fn select_option(&mut self, option: &FilterOption) {
        self.in_progress = InProgressFilter {
            field: option.field.clone(),
            operator: Some(option.operator.clone()),
            value: String::new(),
        };
    }

    pub fn clear_in_progress(&mut self) {
        self.in_progress = InProgressFilter::default();
    }

    /// Moves a complete in-progress filter into the active set and resets the form.
    ///
    /// Returns false and leaves everything unchanged when the filter is incomplete.
    pub fn commit_in_progress(&mut self) -> bool {
        let Some(predicate) = self.in_progress.to_predicate() else {
            tracing::debug!(in_progress = ?self.in_progress, "in-progress filter is incomplete");
            return false;
        };
        self.add_filter(predicate);
        self.clear_in_progress();
        true
    }

    /// Decodes `field:operator:value` tags and commits each complete one, in order.
    ///
    /// Incomplete tags are skipped with a warning. A malformed tag fails the whole
    /// batch before anything is staged. Returns how many filters were added.
    pub fn stage_tags<S: AsRef<str>>(&mut self, tags: &[S]) -> Result<usize> {
        let predicates = tag::decode_all(tags)?;

        let mut added = 0;
        for (raw, predicate) in tags.iter().zip(predicates) {
            let raw: &str = raw.as_ref();
            self.set_in_progress(predicate.into());
            if self.commit_in_progress() {
                added += 1;
            } else {
                tracing::warn!(tag = raw, "ignoring incomplete filter");
                self.clear_in_progress();
            }
        }
        Ok(added)
    }

    pub fn apply<'a>(&self, records: &'a [Record], types: &FieldTypes) -> Vec<&'a Record> {
        eval::filter_records(records, &self.filters, types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_active() -> Predicate {
        Predicate::new("status", Operator::Equals, "Active")
    }

    fn age_over_30() -> Predicate {
        Predicate::new("age", Operator::GreaterThan, "30")
    }

    #[test]
    fn test_add_preserves_order_and_duplicates() {
        let mut model = FilterModel::new();
        model.add_filter(status_active());
        model.add_filter(age_over_30());
        model.add_filter(status_active());
        assert_eq!(
            model.filters(),
            &[status_active(), age_over_30(), status_active()]
        );
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut model = FilterModel::new();
        model.replace_all([status_active(), age_over_30(), status_active()]);
        model.remove_filter(&status_active());
        assert_eq!(model.filters(), &[age_over_30(), status_active()]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut model = FilterModel::new();
        model.add_filter(status_active());
        model.remove_filter(&age_over_30());
        assert_eq!(model.filters(), &[status_active()]);
    }

    #[test]
    fn test_add_then_remove_is_empty() {
        let mut model = FilterModel::new();
        model.add_filter(age_over_30());
        model.remove_filter(&age_over_30());
        assert!(model.is_empty());
    }

    #[test]
    fn test_replace_all_with_empty_clears() {
        let mut model = FilterModel::new();
        model.add_filter(status_active());
        model.replace_all(Vec::new());
        assert!(model.is_empty());
    }

    #[test]
    fn test_commit_requires_complete_filter() {
        let mut model = FilterModel::new();
        model.set_in_progress(InProgressFilter {
            field: "age".to_string(),
            operator: Some(Operator::GreaterThan),
            value: String::new(),
        });
        assert!(!model.commit_in_progress());
        assert!(model.is_empty());
        assert_eq!(model.in_progress().field, "age");

        model.set_in_progress_value("30");
        assert!(model.commit_in_progress());
        assert_eq!(model.filters(), &[age_over_30()]);
        assert_eq!(model.in_progress(), &InProgressFilter::default());
    }

    #[test]
    fn test_commit_without_operator_fails() {
        let mut model = FilterModel::new();
        model.set_in_progress(InProgressFilter {
            field: "age".to_string(),
            operator: None,
            value: "30".to_string(),
        });
        assert!(!model.commit_in_progress());
    }

    #[test]
    fn test_select_option_resets_value() {
        let mut model = FilterModel::new();
        model.set_in_progress_value("stale");
        let option = FilterOption::new("name", Operator::Contains, "Name contains");
        model.select_option(&option);
        assert_eq!(
            model.in_progress(),
            &InProgressFilter {
                field: "name".to_string(),
                operator: Some(Operator::Contains),
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_stage_tags_skips_incomplete() {
        let mut model = FilterModel::new();
        let added = model
            .stage_tags(&["status:equals:Active", "age:equals:", "age::30", ":contains:x"])
            .unwrap();
        assert_eq!(added, 1);
        assert_eq!(model.filters(), &[status_active()]);
        assert_eq!(model.in_progress(), &InProgressFilter::default());
    }

    #[test]
    fn test_stage_tags_rejects_malformed_tag() {
        let mut model = FilterModel::new();
        let err = model
            .stage_tags(&["age:greaterThan:30", "status"])
            .unwrap_err();
        assert!(matches!(err, crate::Error::InvalidTag { .. }));
        assert!(model.is_empty());
    }

    #[test]
    fn test_stage_tags_appends_after_existing() {
        let mut model = FilterModel::new();
        model.add_filter(status_active());
        let tags = vec!["age:>:30".to_string()];
        assert_eq!(model.stage_tags(&tags).unwrap(), 1);
        assert_eq!(model.filters(), &[status_active(), age_over_30()]);
    }

    #[test]
    fn test_in_progress_from_incomplete_predicate() {
        let staged: InProgressFilter =
            Predicate::new("age", Operator::Unknown(String::new()), "30").into();
        assert!(staged.operator.is_none());
        assert!(!staged.is_complete());
    }
}
