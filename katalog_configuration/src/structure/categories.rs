use serde::Deserialize;

use crate::traits::Resolve;


pub(crate) type UnresolvedCategoriesConfiguration = CategoriesConfiguration;

/// Behaviour of the category endpoints.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CategoriesConfiguration {
    /// When a category deletion fails, the response carries a failure message,
    /// but keeps the `200 OK` status unless this is set to `true`.
    #[serde(default)]
    pub report_delete_failures_as_server_error: bool,
}

impl Resolve for UnresolvedCategoriesConfiguration {
    type Resolved = CategoriesConfiguration;

    fn resolve(self) -> Self::Resolved {
        self
    }
}
