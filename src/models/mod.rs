use serde::{Deserialize, Serialize};

use crate::form::FormData;

/// A recommendation record as returned by the REST API
///
/// `id` is server-assigned and absent until the record has been created
/// or retrieved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub original_product_id: String,
    pub recommendation_product_id: String,
    pub recommendation_product_name: String,
    pub reason: String,
    pub activated: bool,
}

/// Request body for create and update calls
///
/// Same shape as [`Recommendation`] minus the server-assigned `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationPayload {
    pub name: String,
    pub original_product_id: String,
    pub recommendation_product_id: String,
    pub recommendation_product_name: String,
    pub reason: String,
    pub activated: bool,
}

impl From<&FormData> for RecommendationPayload {
    fn from(form: &FormData) -> Self {
        RecommendationPayload {
            name: form.name.clone(),
            original_product_id: form.original_product_id.clone(),
            recommendation_product_id: form.recommendation_product_id.clone(),
            recommendation_product_name: form.recommendation_product_name.clone(),
            reason: form.reason.clone(),
            activated: form.activated,
        }
    }
}

/// JSON body the API sends with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
