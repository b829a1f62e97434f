mod model;
mod mutation;
mod query;
mod repository;

pub use model::{CategoryModel, CategorySummaryModel};
pub(crate) use model::{InternalCategoryModel, InternalCategorySummaryModel};
pub use mutation::*;
pub use query::*;
pub use repository::*;
