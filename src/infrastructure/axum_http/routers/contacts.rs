use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use serde_json::json;

use crate::{
    application::usecases::contacts::ContactUseCase,
    domain::{
        repositories::contacts::ContactRepository,
        value_objects::contacts::InsertContactModel,
    },
    infrastructure::{
        axum_http::error_responses::usecase_error,
        postgres::{
            postgres_connection::PgPoolSquad, repositories::contacts::ContactPostgres,
        },
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let contact_repository = ContactPostgres::new(Arc::clone(&db_pool));
    let contact_usecase = ContactUseCase::new(Arc::new(contact_repository));

    Router::new()
        .route("/", post(create::<ContactPostgres>))
        .with_state(Arc::new(contact_usecase))
}

pub async fn create<C>(
    State(contact_usecase): State<Arc<ContactUseCase<C>>>,
    Json(insert_contact_model): Json<InsertContactModel>,
) -> impl IntoResponse
where
    C: ContactRepository + Send + Sync + 'static,
{
    match contact_usecase.create(insert_contact_model).await {
        Ok(contact_id) => (StatusCode::CREATED, Json(json!({ "id": contact_id }))).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}
