/// REST API client for the recommendations service
///
/// The [`RecommendationApi`] trait is the seam between the form controller and
/// the wire: production code talks JSON over HTTP through [`HttpApi`], tests
/// substitute a mock. Any 2xx response is success; any non-2xx response is
/// folded into [`AppError::Api`] carrying whatever `message` the error body
/// held.
use async_trait::async_trait;
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{ApiErrorBody, Recommendation, RecommendationPayload},
};

/// Async interface to the recommendations CRUD API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationApi: Send + Sync {
    /// POST a new recommendation; the response carries the assigned id
    async fn create(&self, payload: &RecommendationPayload) -> AppResult<Recommendation>;

    /// PUT the full payload over the record with the given id
    async fn update(&self, id: &str, payload: &RecommendationPayload)
        -> AppResult<Recommendation>;

    /// GET a single recommendation by id
    async fn retrieve(&self, id: &str) -> AppResult<Recommendation>;

    /// DELETE a recommendation by id
    async fn delete(&self, id: &str) -> AppResult<()>;

    /// GET the collection filtered by a prebuilt query string (may be empty)
    async fn search(&self, query: &str) -> AppResult<Vec<Recommendation>>;
}

/// HTTP implementation of [`RecommendationApi`]
#[derive(Clone)]
pub struct HttpApi {
    http_client: HttpClient,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Converts a non-2xx response into an [`AppError::Api`]
    ///
    /// The `message` field of the JSON error body is surfaced when present;
    /// a malformed or missing body yields `None` and callers fall back to a
    /// generic message.
    async fn error_from_response(response: reqwest::Response) -> AppError {
        let status = response.status().as_u16();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .map(|body| body.message);

        AppError::Api { status, message }
    }
}

#[async_trait]
impl RecommendationApi for HttpApi {
    async fn create(&self, payload: &RecommendationPayload) -> AppResult<Recommendation> {
        let url = self.url("/recommendations");
        let response = self.http_client.post(&url).json(payload).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let rec: Recommendation = response.json().await?;
        tracing::info!(id = ?rec.id, "Recommendation created");
        Ok(rec)
    }

    async fn update(
        &self,
        id: &str,
        payload: &RecommendationPayload,
    ) -> AppResult<Recommendation> {
        let url = self.url(&format!("/recommendations/{}", id));
        let response = self.http_client.put(&url).json(payload).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let rec: Recommendation = response.json().await?;
        tracing::info!(id = %id, "Recommendation updated");
        Ok(rec)
    }

    async fn retrieve(&self, id: &str) -> AppResult<Recommendation> {
        let url = self.url(&format!("/recommendations/{}", id));
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let rec: Recommendation = response.json().await?;
        tracing::info!(id = %id, "Recommendation retrieved");
        Ok(rec)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let url = self.url(&format!("/recommendations/{}", id));
        let response = self.http_client.delete(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        tracing::info!(id = %id, "Recommendation deleted");
        Ok(())
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Recommendation>> {
        let url = self.url(&format!("/recommendations?{}", query));
        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let recs: Vec<Recommendation> = response.json().await?;
        tracing::info!(query = %query, results = recs.len(), "Search completed");
        Ok(recs)
    }
}
