/// Conversion from a database-layer model into its API (wire) counterpart.
pub trait IntoApiModel {
    type ApiModel;

    fn into_api_model(self) -> Self::ApiModel;
}
