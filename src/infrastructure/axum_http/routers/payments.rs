use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    application::usecases::{
        notifications::Mailer,
        payments::{PaymentGateway, PaymentUseCase},
    },
    domain::{
        repositories::{
            bookings::BookingRepository, payments::PaymentRepository,
            services::ServiceRepository,
        },
        value_objects::payments::{CreateOrderModel, VerifyPaymentModel},
    },
    infrastructure::{
        axum_http::error_responses::usecase_error,
        email::smtp_mailer::SmtpMailer,
        gateway::razorpay_client::RazorpayClient,
        postgres::{
            postgres_connection::PgPoolSquad,
            repositories::{
                bookings::BookingPostgres, payments::PaymentPostgres,
                services::ServicePostgres,
            },
        },
    },
};

pub type PaymentUseCaseSquad =
    PaymentUseCase<BookingPostgres, PaymentPostgres, ServicePostgres, RazorpayClient, SmtpMailer>;

pub fn build_usecase(
    db_pool: Arc<PgPoolSquad>,
    gateway: Arc<RazorpayClient>,
    mailer: Arc<SmtpMailer>,
    currency: String,
    base_url: String,
) -> PaymentUseCaseSquad {
    let booking_repository = BookingPostgres::new(Arc::clone(&db_pool));
    let payment_repository = PaymentPostgres::new(Arc::clone(&db_pool));
    let service_repository = ServicePostgres::new(Arc::clone(&db_pool));

    PaymentUseCase::new(
        Arc::new(booking_repository),
        Arc::new(payment_repository),
        Arc::new(service_repository),
        gateway,
        mailer,
        currency,
        base_url,
    )
}

pub fn routes(payment_usecase: Arc<PaymentUseCaseSquad>) -> Router {
    Router::new()
        .route(
            "/create-order",
            post(
                create_order::<
                    BookingPostgres,
                    PaymentPostgres,
                    ServicePostgres,
                    RazorpayClient,
                    SmtpMailer,
                >,
            ),
        )
        .route(
            "/verify",
            post(
                verify::<
                    BookingPostgres,
                    PaymentPostgres,
                    ServicePostgres,
                    RazorpayClient,
                    SmtpMailer,
                >,
            ),
        )
        .route(
            "/:payment_id",
            get(
                get_by_id::<
                    BookingPostgres,
                    PaymentPostgres,
                    ServicePostgres,
                    RazorpayClient,
                    SmtpMailer,
                >,
            ),
        )
        .with_state(payment_usecase)
}

pub async fn create_order<B, P, S, G, M>(
    State(payment_usecase): State<Arc<PaymentUseCase<B, P, S, G, M>>>,
    Json(create_order_model): Json<CreateOrderModel>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
    S: ServiceRepository + Send + Sync + 'static,
    G: PaymentGateway + 'static,
    M: Mailer + 'static,
{
    match payment_usecase.create_order(create_order_model).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn get_by_id<B, P, S, G, M>(
    State(payment_usecase): State<Arc<PaymentUseCase<B, P, S, G, M>>>,
    Path(payment_id): Path<Uuid>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
    S: ServiceRepository + Send + Sync + 'static,
    G: PaymentGateway + 'static,
    M: Mailer + 'static,
{
    match payment_usecase.get(payment_id).await {
        Ok(payment) => (StatusCode::OK, Json(payment)).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}

pub async fn verify<B, P, S, G, M>(
    State(payment_usecase): State<Arc<PaymentUseCase<B, P, S, G, M>>>,
    Json(verify_payment_model): Json<VerifyPaymentModel>,
) -> impl IntoResponse
where
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
    S: ServiceRepository + Send + Sync + 'static,
    G: PaymentGateway + 'static,
    M: Mailer + 'static,
{
    match payment_usecase.verify(verify_payment_model).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "verified": true }))).into_response(),
        Err(err) => usecase_error(err.status_code(), err),
    }
}
