//! Filter record tables with `field operator value` predicates.
//!
//! A [`FilterModel`](filter::FilterModel) holds the active predicates and the
//! one being edited; [`filter::matches`] decides whether a
//! [`Record`](dataset::Record) passes all of them. Ordering comparisons use a
//! [`FieldTypes`](schema::FieldTypes) registry to pick numeric, date or text
//! comparison.
//!
//! ```
//! use tabq::dataset::{sample_records, sample_types};
//! use tabq::filter::{FilterModel, Operator, Predicate};
//!
//! let records = sample_records();
//! let mut model = FilterModel::new();
//! model.add_filter(Predicate::new("age", Operator::LessThan, "30"));
//!
//! let visible = model.apply(&records, &sample_types());
//! assert_eq!(visible.len(), 3);
//! ```

pub mod dataset;
pub mod error;
pub mod filter;
pub mod options;
pub mod schema;
pub mod source;
pub mod table;
pub mod values;

pub use error::{Error, Result};
