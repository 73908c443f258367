pub mod eval;
pub mod model;
pub mod predicate;
pub mod tag;

pub use eval::{compare_as, evaluate, filter_records, matches};
pub use model::{FilterModel, InProgressFilter};
pub use predicate::{Operator, Predicate};
