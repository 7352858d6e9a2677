use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    application::usecases::notifications::{self, Mailer},
    domain::{
        entities::payments::InsertPaymentEntity,
        repositories::{
            bookings::BookingRepository, payments::PaymentRepository,
            services::ServiceRepository,
        },
        value_objects::{
            enums::{booking_statuses::BookingStatus, payment_statuses::PaymentStatus},
            payments::{
                CreateOrderModel, CreateOrderResponseDto, OrderDto, PaymentDto,
                VerifyPaymentModel,
            },
        },
    },
    infrastructure::gateway::razorpay_client::RazorpayClient,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GatewayOrder {
    pub id: String,
    pub amount_minor: i64,
    pub currency: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> AnyResult<GatewayOrder>;

    fn verify_payment_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;

    fn key_id(&self) -> String;
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> AnyResult<GatewayOrder> {
        let order = self.create_order(amount_minor, currency, receipt).await?;
        Ok(GatewayOrder {
            id: order.id,
            amount_minor: order.amount,
            currency: order.currency,
        })
    }

    fn verify_payment_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        self.verify_payment_signature(order_id, payment_id, signature)
    }

    fn key_id(&self) -> String {
        self.key_id().to_string()
    }
}

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("booking not found")]
    BookingNotFound,
    #[error("payment not found")]
    PaymentNotFound,
    #[error("booking is not open for payment")]
    BookingNotPayable,
    #[error("a payment for this booking is already in progress")]
    DuplicatePayment,
    #[error("payment verification failed")]
    SignatureMismatch,
    #[error("payment already finalized")]
    AlreadyFinalized,
    #[error("payment gateway unavailable")]
    Gateway(anyhow::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PaymentError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PaymentError::BookingNotFound | PaymentError::PaymentNotFound => {
                StatusCode::NOT_FOUND
            }
            PaymentError::BookingNotPayable | PaymentError::DuplicatePayment => {
                StatusCode::CONFLICT
            }
            PaymentError::SignatureMismatch | PaymentError::AlreadyFinalized => {
                StatusCode::BAD_REQUEST
            }
            PaymentError::Gateway(_) => StatusCode::BAD_GATEWAY,
            PaymentError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PaymentError>;

pub struct PaymentUseCase<B, P, S, G, M>
where
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
    S: ServiceRepository + Send + Sync + 'static,
    G: PaymentGateway + 'static,
    M: Mailer + 'static,
{
    booking_repo: Arc<B>,
    payment_repo: Arc<P>,
    service_repo: Arc<S>,
    gateway: Arc<G>,
    mailer: Arc<M>,
    currency: String,
    base_url: String,
}

impl<B, P, S, G, M> PaymentUseCase<B, P, S, G, M>
where
    B: BookingRepository + Send + Sync + 'static,
    P: PaymentRepository + Send + Sync + 'static,
    S: ServiceRepository + Send + Sync + 'static,
    G: PaymentGateway + 'static,
    M: Mailer + 'static,
{
    pub fn new(
        booking_repo: Arc<B>,
        payment_repo: Arc<P>,
        service_repo: Arc<S>,
        gateway: Arc<G>,
        mailer: Arc<M>,
        currency: String,
        base_url: String,
    ) -> Self {
        Self {
            booking_repo,
            payment_repo,
            service_repo,
            gateway,
            mailer,
            currency,
            base_url,
        }
    }

    /// Creates a gateway order for a pending booking and records the
    /// matching pending payment. The charged amount is always the
    /// booking's server-held amount.
    pub async fn create_order(
        &self,
        model: CreateOrderModel,
    ) -> UseCaseResult<CreateOrderResponseDto> {
        let booking_id = model.booking_id;
        info!(%booking_id, "payments: create order requested");

        let booking = self
            .booking_repo
            .find_by_id(booking_id)
            .await
            .map_err(|err| {
                error!(%booking_id, db_error = ?err, "payments: failed to load booking");
                PaymentError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%booking_id, "payments: booking not found for order creation");
                PaymentError::BookingNotFound
            })?;

        let status = BookingStatus::from_str(&booking.status).unwrap_or(BookingStatus::Pending);
        if status != BookingStatus::Pending {
            warn!(
                %booking_id,
                status = %booking.status,
                "payments: booking is not open for payment"
            );
            return Err(PaymentError::BookingNotPayable);
        }

        let amount_minor = i64::from(booking.amount_minor);
        if let Some(client_amount) = model.amount_minor {
            if client_amount != amount_minor {
                warn!(
                    %booking_id,
                    client_amount,
                    amount_minor,
                    "payments: ignoring client-declared amount"
                );
            }
        }

        let currency = model.currency.unwrap_or_else(|| self.currency.clone());
        let receipt = format!("bk_{}", booking.id.simple());

        let order = self
            .gateway
            .create_order(amount_minor, &currency, &receipt)
            .await
            .map_err(|err| {
                error!(%booking_id, error = ?err, "payments: gateway order creation failed");
                PaymentError::Gateway(err)
            })?;

        let payment_id = self
            .payment_repo
            .create_pending_for_booking(InsertPaymentEntity {
                booking_id: booking.id,
                amount_minor: booking.amount_minor,
                currency: currency.clone(),
                status: PaymentStatus::Pending.to_string(),
                method: None,
                provider_order_id: order.id.clone(),
                provider_payment_id: None,
                customer_email: booking.customer_email.clone(),
                error: None,
            })
            .await
            .map_err(|err| {
                error!(%booking_id, db_error = ?err, "payments: failed to record pending payment");
                PaymentError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(
                    %booking_id,
                    provider_order_id = %order.id,
                    "payments: non-terminal payment already exists for booking"
                );
                PaymentError::DuplicatePayment
            })?;

        info!(
            %booking_id,
            %payment_id,
            provider_order_id = %order.id,
            amount_minor,
            "payments: gateway order created"
        );

        Ok(CreateOrderResponseDto {
            key: self.gateway.key_id(),
            order: OrderDto {
                id: order.id,
                amount_minor: order.amount_minor,
                currency: order.currency,
            },
            payment_id,
        })
    }

    /// Verifies a gateway callback and finalizes the payment. The
    /// signature check mutates nothing; a replayed or concurrent
    /// callback is rejected by the status compare-and-set.
    pub async fn verify(&self, model: VerifyPaymentModel) -> UseCaseResult<()> {
        let payment_id = model.payment_id;

        if !self.gateway.verify_payment_signature(
            &model.razorpay_order_id,
            &model.razorpay_payment_id,
            &model.razorpay_signature,
        ) {
            warn!(
                %payment_id,
                provider_order_id = %model.razorpay_order_id,
                provider_payment_id = %model.razorpay_payment_id,
                "payments: signature verification failed"
            );
            return Err(PaymentError::SignatureMismatch);
        }

        let payment = self
            .payment_repo
            .find_by_id(payment_id)
            .await
            .map_err(|err| {
                error!(%payment_id, db_error = ?err, "payments: failed to load payment");
                PaymentError::Internal(err)
            })?
            .ok_or_else(|| {
                warn!(%payment_id, "payments: payment not found for verification");
                PaymentError::PaymentNotFound
            })?;

        // The signed order must be the one this payment was opened for,
        // otherwise a signature from an unrelated order could finalize it.
        if payment.provider_order_id != model.razorpay_order_id {
            warn!(
                %payment_id,
                expected_order_id = %payment.provider_order_id,
                provided_order_id = %model.razorpay_order_id,
                "payments: callback order id does not match payment"
            );
            return Err(PaymentError::SignatureMismatch);
        }

        let status = PaymentStatus::from_str(&payment.status).unwrap_or(PaymentStatus::Pending);
        if status.is_terminal() {
            warn!(
                %payment_id,
                status = %payment.status,
                "payments: verification replay on finalized payment"
            );
            return Err(PaymentError::AlreadyFinalized);
        }

        let applied = self
            .payment_repo
            .complete_and_confirm_booking(payment.id, &model.razorpay_payment_id)
            .await
            .map_err(|err| {
                error!(%payment_id, db_error = ?err, "payments: failed to finalize payment");
                PaymentError::Internal(err)
            })?;

        if !applied {
            warn!(
                %payment_id,
                "payments: concurrent verification already finalized payment"
            );
            return Err(PaymentError::AlreadyFinalized);
        }

        info!(
            %payment_id,
            booking_id = %payment.booking_id,
            provider_payment_id = %model.razorpay_payment_id,
            "payments: payment completed and booking confirmed"
        );

        self.dispatch_confirmation(payment.booking_id).await;

        Ok(())
    }

    pub async fn get(&self, payment_id: Uuid) -> UseCaseResult<PaymentDto> {
        let payment = self
            .payment_repo
            .find_by_id(payment_id)
            .await
            .map_err(|err| {
                error!(%payment_id, db_error = ?err, "payments: failed to load payment");
                PaymentError::Internal(err)
            })?
            .ok_or(PaymentError::PaymentNotFound)?;

        Ok(PaymentDto::from(payment))
    }

    /// Startup sweep for the crash window between a committed payment
    /// and its booking confirmation becoming visible.
    pub async fn reconcile_confirmations(&self) -> UseCaseResult<usize> {
        let repaired = self
            .booking_repo
            .confirm_bookings_with_completed_payments()
            .await
            .map_err(|err| {
                error!(db_error = ?err, "payments: reconciliation sweep failed");
                PaymentError::Internal(err)
            })?;

        if repaired > 0 {
            warn!(repaired, "payments: repaired bookings left behind by a crash");
        }

        Ok(repaired)
    }

    async fn dispatch_confirmation(&self, booking_id: Uuid) {
        let booking = match self.booking_repo.find_by_id(booking_id).await {
            Ok(Some(booking)) => booking,
            Ok(None) => {
                warn!(%booking_id, "payments: confirmed booking vanished before notification");
                return;
            }
            Err(err) => {
                warn!(
                    %booking_id,
                    db_error = ?err,
                    "payments: failed to load booking for notification"
                );
                return;
            }
        };

        let artist = match self
            .service_repo
            .find_artist_for_service(booking.service_id)
            .await
        {
            Ok(artist) => artist,
            Err(err) => {
                warn!(
                    %booking_id,
                    service_id = booking.service_id,
                    db_error = ?err,
                    "payments: failed to load artist for notification"
                );
                None
            }
        };

        notifications::dispatch_booking_confirmed(
            self.mailer.as_ref(),
            &booking,
            artist.as_ref(),
            &self.base_url,
        )
        .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::{always, eq};

    use crate::application::usecases::notifications::MockMailer;
    use crate::domain::{
        entities::{
            artists::ArtistEntity, bookings::BookingEntity, payments::PaymentEntity,
        },
        repositories::{
            bookings::MockBookingRepository, payments::MockPaymentRepository,
            services::MockServiceRepository,
        },
    };

    const BASE_URL: &str = "https://blushbook.example";

    fn sample_booking(id: Uuid, status: BookingStatus) -> BookingEntity {
        BookingEntity {
            id,
            customer_id: None,
            customer_name: "Asha Rao".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: "+91-9000000001".to_string(),
            service_id: 1,
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            event_time: "10:30".to_string(),
            status: status.to_string(),
            amount_minor: 500000,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_payment(id: Uuid, booking_id: Uuid, status: PaymentStatus) -> PaymentEntity {
        PaymentEntity {
            id,
            booking_id,
            amount_minor: 500000,
            currency: "INR".to_string(),
            status: status.to_string(),
            method: None,
            provider_order_id: "order_abc".to_string(),
            provider_payment_id: None,
            customer_email: "asha@example.com".to_string(),
            error: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample_artist() -> ArtistEntity {
        ArtistEntity {
            id: 7,
            display_name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            phone: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn usecase(
        booking_repo: MockBookingRepository,
        payment_repo: MockPaymentRepository,
        service_repo: MockServiceRepository,
        gateway: MockPaymentGateway,
        mailer: MockMailer,
    ) -> PaymentUseCase<
        MockBookingRepository,
        MockPaymentRepository,
        MockServiceRepository,
        MockPaymentGateway,
        MockMailer,
    > {
        PaymentUseCase::new(
            Arc::new(booking_repo),
            Arc::new(payment_repo),
            Arc::new(service_repo),
            Arc::new(gateway),
            Arc::new(mailer),
            "INR".to_string(),
            BASE_URL.to_string(),
        )
    }

    fn verify_model(payment_id: Uuid) -> VerifyPaymentModel {
        VerifyPaymentModel {
            razorpay_order_id: "order_abc".to_string(),
            razorpay_payment_id: "pay_xyz".to_string(),
            razorpay_signature: "deadbeef".to_string(),
            payment_id,
        }
    }

    #[tokio::test]
    async fn create_order_charges_the_booking_amount_not_the_client_amount() {
        let booking_id = Uuid::new_v4();
        let payment_id = Uuid::new_v4();

        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_find_by_id()
            .with(eq(booking_id))
            .returning(move |_| {
                Box::pin(async move { Ok(Some(sample_booking(booking_id, BookingStatus::Pending))) })
            });

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_create_order()
            .with(eq(500000i64), eq("INR"), always())
            .times(1)
            .returning(|amount_minor, currency, _| {
                Ok(GatewayOrder {
                    id: "order_abc".to_string(),
                    amount_minor,
                    currency: currency.to_string(),
                })
            });
        gateway.expect_key_id().return_const("rzp_test_key".to_string());

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo
            .expect_create_pending_for_booking()
            .withf(move |entity| {
                entity.booking_id == booking_id
                    && entity.amount_minor == 500000
                    && entity.status == "pending"
                    && entity.provider_order_id == "order_abc"
            })
            .times(1)
            .returning(move |_| Box::pin(async move { Ok(Some(payment_id)) }));

        let usecase = usecase(
            booking_repo,
            payment_repo,
            MockServiceRepository::new(),
            gateway,
            MockMailer::new(),
        );

        // The client lies about the amount; the gateway still sees 500000.
        let response = usecase
            .create_order(CreateOrderModel {
                booking_id,
                amount_minor: Some(1),
                currency: None,
            })
            .await
            .expect("order creation should succeed");

        assert_eq!(response.key, "rzp_test_key");
        assert_eq!(response.order.amount_minor, 500000);
        assert_eq!(response.order.currency, "INR");
        assert_eq!(response.payment_id, payment_id);
    }

    #[tokio::test]
    async fn create_order_rejects_an_unknown_booking() {
        let booking_id = Uuid::new_v4();

        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = usecase(
            booking_repo,
            MockPaymentRepository::new(),
            MockServiceRepository::new(),
            MockPaymentGateway::new(),
            MockMailer::new(),
        );

        let result = usecase
            .create_order(CreateOrderModel {
                booking_id,
                amount_minor: None,
                currency: None,
            })
            .await;

        assert!(matches!(result, Err(PaymentError::BookingNotFound)));
    }

    #[tokio::test]
    async fn create_order_rejects_a_booking_that_is_not_pending() {
        let booking_id = Uuid::new_v4();

        let mut booking_repo = MockBookingRepository::new();
        booking_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move { Ok(Some(sample_booking(booking_id, BookingStatus::Confirmed))) })
        });

        let usecase = usecase(
            booking_repo,
            MockPaymentRepository::new(),
            MockServiceRepository::new(),
            MockPaymentGateway::new(),
            MockMailer::new(),
        );

        let result = usecase
            .create_order(CreateOrderModel {
                booking_id,
                amount_minor: None,
                currency: None,
            })
            .await;

        assert!(matches!(result, Err(PaymentError::BookingNotPayable)));
    }

    #[tokio::test]
    async fn create_order_conflicts_when_a_payment_is_already_open() {
        let booking_id = Uuid::new_v4();

        let mut booking_repo = MockBookingRepository::new();
        booking_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move { Ok(Some(sample_booking(booking_id, BookingStatus::Pending))) })
        });

        let mut gateway = MockPaymentGateway::new();
        gateway.expect_create_order().returning(|amount_minor, currency, _| {
            Ok(GatewayOrder {
                id: "order_dup".to_string(),
                amount_minor,
                currency: currency.to_string(),
            })
        });

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo
            .expect_create_pending_for_booking()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = usecase(
            booking_repo,
            payment_repo,
            MockServiceRepository::new(),
            gateway,
            MockMailer::new(),
        );

        let result = usecase
            .create_order(CreateOrderModel {
                booking_id,
                amount_minor: None,
                currency: None,
            })
            .await;

        assert!(matches!(result, Err(PaymentError::DuplicatePayment)));
    }

    #[tokio::test]
    async fn create_order_propagates_gateway_failure_without_recording_a_payment() {
        let booking_id = Uuid::new_v4();

        let mut booking_repo = MockBookingRepository::new();
        booking_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move { Ok(Some(sample_booking(booking_id, BookingStatus::Pending))) })
        });

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_create_order()
            .returning(|_, _, _| Err(anyhow::anyhow!("gateway timeout")));

        // No expectations on the payment repo: recording a payment here
        // would fail the test.
        let usecase = usecase(
            booking_repo,
            MockPaymentRepository::new(),
            MockServiceRepository::new(),
            gateway,
            MockMailer::new(),
        );

        let result = usecase
            .create_order(CreateOrderModel {
                booking_id,
                amount_minor: None,
                currency: None,
            })
            .await;

        assert!(matches!(result, Err(PaymentError::Gateway(_))));
    }

    #[tokio::test]
    async fn verify_confirms_booking_and_notifies_once() {
        let booking_id = Uuid::new_v4();
        let payment_id = Uuid::new_v4();

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_verify_payment_signature()
            .with(eq("order_abc"), eq("pay_xyz"), eq("deadbeef"))
            .returning(|_, _, _| true);

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move {
                Ok(Some(sample_payment(payment_id, booking_id, PaymentStatus::Pending)))
            })
        });
        payment_repo
            .expect_complete_and_confirm_booking()
            .with(eq(payment_id), eq("pay_xyz"))
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(true) }));

        let mut booking_repo = MockBookingRepository::new();
        booking_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move { Ok(Some(sample_booking(booking_id, BookingStatus::Confirmed))) })
        });

        let mut service_repo = MockServiceRepository::new();
        service_repo
            .expect_find_artist_for_service()
            .with(eq(1i64))
            .returning(|_| Box::pin(async { Ok(Some(sample_artist())) }));

        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(2)
            .returning(|_, _, _, _| Ok(()));

        let usecase = usecase(booking_repo, payment_repo, service_repo, gateway, mailer);

        usecase
            .verify(verify_model(payment_id))
            .await
            .expect("verification should succeed");
    }

    #[tokio::test]
    async fn verify_rejects_a_bad_signature_without_touching_state() {
        let payment_id = Uuid::new_v4();

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_verify_payment_signature()
            .returning(|_, _, _| false);

        // No repository or mailer expectations: any call fails the test.
        let usecase = usecase(
            MockBookingRepository::new(),
            MockPaymentRepository::new(),
            MockServiceRepository::new(),
            gateway,
            MockMailer::new(),
        );

        let result = usecase.verify(verify_model(payment_id)).await;
        assert!(matches!(result, Err(PaymentError::SignatureMismatch)));
    }

    #[tokio::test]
    async fn verify_rejects_a_replay_on_a_finalized_payment() {
        let booking_id = Uuid::new_v4();
        let payment_id = Uuid::new_v4();

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_verify_payment_signature()
            .returning(|_, _, _| true);

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move {
                Ok(Some(sample_payment(payment_id, booking_id, PaymentStatus::Completed)))
            })
        });

        let usecase = usecase(
            MockBookingRepository::new(),
            payment_repo,
            MockServiceRepository::new(),
            gateway,
            MockMailer::new(),
        );

        let result = usecase.verify(verify_model(payment_id)).await;
        assert!(matches!(result, Err(PaymentError::AlreadyFinalized)));
    }

    #[tokio::test]
    async fn verify_rejects_the_loser_of_a_concurrent_callback_race() {
        let booking_id = Uuid::new_v4();
        let payment_id = Uuid::new_v4();

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_verify_payment_signature()
            .returning(|_, _, _| true);

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move {
                Ok(Some(sample_payment(payment_id, booking_id, PaymentStatus::Pending)))
            })
        });
        // The compare-and-set lost: another callback finalized first.
        payment_repo
            .expect_complete_and_confirm_booking()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let usecase = usecase(
            MockBookingRepository::new(),
            payment_repo,
            MockServiceRepository::new(),
            gateway,
            MockMailer::new(),
        );

        let result = usecase.verify(verify_model(payment_id)).await;
        assert!(matches!(result, Err(PaymentError::AlreadyFinalized)));
    }

    #[tokio::test]
    async fn verify_rejects_a_signature_for_someone_elses_order() {
        let booking_id = Uuid::new_v4();
        let payment_id = Uuid::new_v4();

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_verify_payment_signature()
            .returning(|_, _, _| true);

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move {
                Ok(Some(sample_payment(payment_id, booking_id, PaymentStatus::Pending)))
            })
        });

        let usecase = usecase(
            MockBookingRepository::new(),
            payment_repo,
            MockServiceRepository::new(),
            gateway,
            MockMailer::new(),
        );

        let mut model = verify_model(payment_id);
        model.razorpay_order_id = "order_other".to_string();

        let result = usecase.verify(model).await;
        assert!(matches!(result, Err(PaymentError::SignatureMismatch)));
    }

    #[tokio::test]
    async fn get_exposes_the_payment_status() {
        let booking_id = Uuid::new_v4();
        let payment_id = Uuid::new_v4();

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move {
                Ok(Some(sample_payment(payment_id, booking_id, PaymentStatus::Completed)))
            })
        });

        let usecase = usecase(
            MockBookingRepository::new(),
            payment_repo,
            MockServiceRepository::new(),
            MockPaymentGateway::new(),
            MockMailer::new(),
        );

        let payment = usecase.get(payment_id).await.expect("payment should load");
        assert_eq!(payment.status, PaymentStatus::Completed);
        assert_eq!(payment.booking_id, booking_id);
    }

    #[tokio::test]
    async fn a_failed_notification_does_not_fail_verification() {
        let booking_id = Uuid::new_v4();
        let payment_id = Uuid::new_v4();

        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_verify_payment_signature()
            .returning(|_, _, _| true);

        let mut payment_repo = MockPaymentRepository::new();
        payment_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move {
                Ok(Some(sample_payment(payment_id, booking_id, PaymentStatus::Pending)))
            })
        });
        payment_repo
            .expect_complete_and_confirm_booking()
            .returning(|_, _| Box::pin(async { Ok(true) }));

        let mut booking_repo = MockBookingRepository::new();
        booking_repo.expect_find_by_id().returning(move |_| {
            Box::pin(async move { Ok(Some(sample_booking(booking_id, BookingStatus::Confirmed))) })
        });

        let mut service_repo = MockServiceRepository::new();
        service_repo
            .expect_find_artist_for_service()
            .returning(|_| Box::pin(async { Ok(Some(sample_artist())) }));

        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(2)
            .returning(|_, _, _, _| Err(anyhow::anyhow!("smtp down")));

        let usecase = usecase(booking_repo, payment_repo, service_repo, gateway, mailer);

        usecase
            .verify(verify_model(payment_id))
            .await
            .expect("verification must not fail on notification errors");
    }
}
