/// Binds the recommendation form to the REST API
///
/// One controller instance owns its form surface and transport and exposes the
/// six user commands as methods. Each request-issuing command reads the form,
/// clears the flash area, awaits exactly one request, and applies the
/// settlement back to the surface. Nothing is retried or cancelled; the last
/// settlement to land wins.
use crate::{
    form::{clear_form_data, read_form_data, write_form_data, Field, FormSurface},
    models::RecommendationPayload,
    query::build_search_query,
    render::render_results_table,
    transport::RecommendationApi,
};

const SUCCESS: &str = "Success";
const DELETED: &str = "Recommendation has been Deleted!";
const SERVER_ERROR: &str = "Server error!";

pub struct FormController<S, A>
where
    S: FormSurface,
    A: RecommendationApi,
{
    surface: S,
    api: A,
}

impl<S, A> FormController<S, A>
where
    S: FormSurface,
    A: RecommendationApi,
{
    pub fn new(surface: S, api: A) -> Self {
        Self { surface, api }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Creates a new recommendation from the current form fields
    pub async fn create(&mut self) {
        let form = read_form_data(&self.surface);
        let payload = RecommendationPayload::from(&form);

        self.surface.clear_flash();

        match self.api.create(&payload).await {
            Ok(rec) => {
                write_form_data(&mut self.surface, &rec);
                self.surface.flash(SUCCESS);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Create failed");
                self.surface.flash(e.server_message().unwrap_or(SERVER_ERROR));
            }
        }
    }

    /// Overwrites the recommendation identified by the form's id field
    pub async fn update(&mut self) {
        let form = read_form_data(&self.surface);
        let payload = RecommendationPayload::from(&form);

        self.surface.clear_flash();

        match self.api.update(&form.id, &payload).await {
            Ok(rec) => {
                write_form_data(&mut self.surface, &rec);
                self.surface.flash(SUCCESS);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Update failed");
                self.surface.flash(e.server_message().unwrap_or(SERVER_ERROR));
            }
        }
    }

    /// Fetches the recommendation identified by the form's id field
    ///
    /// On failure the form is cleared before the error message is shown.
    pub async fn retrieve(&mut self) {
        let form = read_form_data(&self.surface);

        self.surface.clear_flash();

        match self.api.retrieve(&form.id).await {
            Ok(rec) => {
                write_form_data(&mut self.surface, &rec);
                self.surface.flash(SUCCESS);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Retrieve failed");
                clear_form_data(&mut self.surface);
                self.surface.flash(e.server_message().unwrap_or(SERVER_ERROR));
            }
        }
    }

    /// Deletes the recommendation identified by the form's id field
    ///
    /// Failures always show the generic message; the server's error body is
    /// not surfaced for deletes.
    pub async fn delete(&mut self) {
        let form = read_form_data(&self.surface);

        self.surface.clear_flash();

        match self.api.delete(&form.id).await {
            Ok(()) => {
                clear_form_data(&mut self.surface);
                self.surface.flash(DELETED);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Delete failed");
                self.surface.flash(SERVER_ERROR);
            }
        }
    }

    /// Empties every form field and the flash area; issues no request
    pub fn clear(&mut self) {
        self.surface.set(Field::Id, "");
        self.surface.clear_flash();
        clear_form_data(&mut self.surface);
    }

    /// Searches by the form's name, reason and activated fields
    ///
    /// Results are rendered into the search results container and the first
    /// result, when there is one, is copied into the form. An empty result
    /// set leaves the form untouched.
    pub async fn search(&mut self) {
        let form = read_form_data(&self.surface);
        let query = build_search_query(&form);

        self.surface.clear_flash();

        match self.api.search(&query).await {
            Ok(recs) => {
                self.surface.set_search_results(&render_results_table(&recs));
                if let Some(first) = recs.first() {
                    write_form_data(&mut self.surface, first);
                }
                self.surface.flash(SUCCESS);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Search failed");
                self.surface.flash(e.server_message().unwrap_or(SERVER_ERROR));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        form::{Field, MemoryForm},
        models::Recommendation,
        transport::MockRecommendationApi,
    };

    fn sample_rec(id: i64) -> Recommendation {
        Recommendation {
            id: Some(id),
            name: "bundle".to_string(),
            original_product_id: "100".to_string(),
            recommendation_product_id: "200".to_string(),
            recommendation_product_name: "Widget Pro".to_string(),
            reason: "CROSS_SELL".to_string(),
            activated: true,
        }
    }

    fn not_found() -> AppError {
        AppError::Api {
            status: 404,
            message: Some("not found".to_string()),
        }
    }

    fn populated_form() -> MemoryForm {
        let mut form = MemoryForm::new();
        form.set(Field::Id, "7");
        form.set(Field::Name, "bundle");
        form.set(Field::OriginalProductId, "100");
        form.set(Field::ProductId, "200");
        form.set(Field::ProductName, "Widget Pro");
        form.set(Field::Activated, "true");
        form.set(Field::Reason, "CROSS_SELL");
        form
    }

    #[tokio::test]
    async fn test_create_success_writes_response_and_flashes() {
        let mut api = MockRecommendationApi::new();
        api.expect_create()
            .withf(|payload| payload.name == "bundle" && payload.activated)
            .returning(|_| Ok(sample_rec(42)));

        let mut form = populated_form();
        form.set(Field::Id, "");
        let mut controller = FormController::new(form, api);

        controller.create().await;

        assert_eq!(controller.surface().get(Field::Id), "42");
        assert_eq!(controller.surface().flash_text(), "Success");
    }

    #[tokio::test]
    async fn test_create_failure_flashes_server_message() {
        let mut api = MockRecommendationApi::new();
        api.expect_create().returning(|_| {
            Err(AppError::Api {
                status: 400,
                message: Some("missing name".to_string()),
            })
        });

        let mut controller = FormController::new(populated_form(), api);
        controller.create().await;

        assert_eq!(controller.surface().flash_text(), "missing name");
    }

    #[tokio::test]
    async fn test_create_failure_without_body_message_falls_back() {
        let mut api = MockRecommendationApi::new();
        api.expect_create().returning(|_| {
            Err(AppError::Api {
                status: 500,
                message: None,
            })
        });

        let mut controller = FormController::new(populated_form(), api);
        controller.create().await;

        assert_eq!(controller.surface().flash_text(), "Server error!");
    }

    #[tokio::test]
    async fn test_update_uses_form_id() {
        let mut api = MockRecommendationApi::new();
        api.expect_update()
            .withf(|id, _| id == "7")
            .returning(|_, _| Ok(sample_rec(7)));

        let mut controller = FormController::new(populated_form(), api);
        controller.update().await;

        assert_eq!(controller.surface().flash_text(), "Success");
    }

    #[tokio::test]
    async fn test_update_failure_leaves_form_intact() {
        let mut api = MockRecommendationApi::new();
        api.expect_update().returning(|_, _| Err(not_found()));

        let mut controller = FormController::new(populated_form(), api);
        controller.update().await;

        assert_eq!(controller.surface().get(Field::Name), "bundle");
        assert_eq!(controller.surface().get(Field::Id), "7");
        assert_eq!(controller.surface().flash_text(), "not found");
    }

    #[tokio::test]
    async fn test_retrieve_failure_clears_form() {
        let mut api = MockRecommendationApi::new();
        api.expect_retrieve().returning(|_| Err(not_found()));

        let mut controller = FormController::new(populated_form(), api);
        controller.retrieve().await;

        for field in Field::ALL {
            assert_eq!(controller.surface().get(field), "");
        }
        assert_eq!(controller.surface().flash_text(), "not found");
    }

    #[tokio::test]
    async fn test_retrieve_success_populates_form() {
        let mut api = MockRecommendationApi::new();
        api.expect_retrieve()
            .withf(|id| id == "42")
            .returning(|_| Ok(sample_rec(42)));

        let mut form = MemoryForm::new();
        form.set(Field::Id, "42");
        let mut controller = FormController::new(form, api);

        controller.retrieve().await;

        assert_eq!(controller.surface().get(Field::Name), "bundle");
        assert_eq!(controller.surface().get(Field::Activated), "true");
        assert_eq!(controller.surface().flash_text(), "Success");
    }

    #[tokio::test]
    async fn test_delete_success_clears_form_and_flashes() {
        let mut api = MockRecommendationApi::new();
        api.expect_delete().returning(|_| Ok(()));

        let mut controller = FormController::new(populated_form(), api);
        controller.delete().await;

        assert_eq!(controller.surface().get(Field::Name), "");
        assert_eq!(
            controller.surface().flash_text(),
            "Recommendation has been Deleted!"
        );
    }

    #[tokio::test]
    async fn test_delete_failure_message_is_generic() {
        let mut api = MockRecommendationApi::new();
        api.expect_delete().returning(|_| {
            Err(AppError::Api {
                status: 404,
                message: Some("Rec with id '7' was not found.".to_string()),
            })
        });

        let mut controller = FormController::new(populated_form(), api);
        controller.delete().await;

        assert_eq!(controller.surface().flash_text(), "Server error!");
    }

    #[tokio::test]
    async fn test_clear_empties_everything_without_request() {
        let api = MockRecommendationApi::new();
        let mut controller = FormController::new(populated_form(), api);
        controller.surface_mut().flash("stale");

        controller.clear();

        for field in Field::ALL {
            assert_eq!(controller.surface().get(field), "");
        }
        assert_eq!(controller.surface().flash_text(), "");
    }

    #[tokio::test]
    async fn test_search_sends_built_query() {
        let mut api = MockRecommendationApi::new();
        api.expect_search()
            .withf(|query| query == "name=bundle&reason=CROSS_SELL&activated=true")
            .returning(|_| Ok(vec![]));

        let mut controller = FormController::new(populated_form(), api);
        controller.search().await;

        assert_eq!(controller.surface().flash_text(), "Success");
    }

    #[tokio::test]
    async fn test_search_copies_first_result_into_form() {
        let mut api = MockRecommendationApi::new();
        api.expect_search()
            .returning(|_| Ok(vec![sample_rec(1), sample_rec(2)]));

        let mut controller = FormController::new(MemoryForm::new(), api);
        controller.search().await;

        assert_eq!(controller.surface().get(Field::Id), "1");
        assert!(controller.surface().search_results().contains("row_1"));
        assert_eq!(controller.surface().flash_text(), "Success");
    }

    #[tokio::test]
    async fn test_search_empty_result_leaves_form_untouched() {
        let mut api = MockRecommendationApi::new();
        api.expect_search().returning(|_| Ok(vec![]));

        let mut controller = FormController::new(populated_form(), api);
        controller.search().await;

        assert_eq!(controller.surface().get(Field::Name), "bundle");
        assert_eq!(controller.surface().get(Field::Id), "7");
        assert_eq!(controller.surface().flash_text(), "Success");
    }

    #[tokio::test]
    async fn test_search_failure_flashes_server_message() {
        let mut api = MockRecommendationApi::new();
        api.expect_search().returning(|_| {
            Err(AppError::Api {
                status: 500,
                message: Some("query failed".to_string()),
            })
        });

        let mut controller = FormController::new(populated_form(), api);
        controller.search().await;

        assert_eq!(controller.surface().flash_text(), "query failed");
    }
}
