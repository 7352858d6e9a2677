use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::entities::{artists::ArtistEntity, bookings::BookingEntity};
use crate::infrastructure::email::templates;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str, text: &str) -> Result<()>;
}

/// Best-effort confirmation dispatch to the customer and, when known,
/// the artist. Failures are logged and never propagated; a confirmed
/// booking must stay confirmed whether or not the emails go out.
pub async fn dispatch_booking_confirmed<M>(
    mailer: &M,
    booking: &BookingEntity,
    artist: Option<&ArtistEntity>,
    base_url: &str,
) where
    M: Mailer + ?Sized,
{
    let (subject, html, text) = templates::booking_confirmed_customer(booking, base_url);
    match mailer
        .send(&booking.customer_email, &subject, &html, &text)
        .await
    {
        Ok(()) => info!(
            booking_id = %booking.id,
            to = %booking.customer_email,
            "notifications: customer confirmation sent"
        ),
        Err(err) => warn!(
            booking_id = %booking.id,
            to = %booking.customer_email,
            error = ?err,
            "notifications: customer confirmation failed"
        ),
    }

    let Some(artist) = artist else {
        warn!(
            booking_id = %booking.id,
            service_id = booking.service_id,
            "notifications: no active artist for service, skipping artist email"
        );
        return;
    };

    let (subject, html, text) = templates::booking_confirmed_artist(booking, artist);
    match mailer.send(&artist.email, &subject, &html, &text).await {
        Ok(()) => info!(
            booking_id = %booking.id,
            to = %artist.email,
            "notifications: artist notification sent"
        ),
        Err(err) => warn!(
            booking_id = %booking.id,
            to = %artist.email,
            error = ?err,
            "notifications: artist notification failed"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::eq;
    use uuid::Uuid;

    fn sample_booking() -> BookingEntity {
        BookingEntity {
            id: Uuid::new_v4(),
            customer_id: None,
            customer_name: "Asha Rao".to_string(),
            customer_email: "asha@example.com".to_string(),
            customer_phone: "+91-9000000001".to_string(),
            service_id: 1,
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).unwrap(),
            event_time: "10:30".to_string(),
            status: "confirmed".to_string(),
            amount_minor: 500000,
            notes: None,
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

    #[tokio::test]
    async fn sends_to_customer_and_artist() {
        let booking = sample_booking();
        let artist = sample_artist();

        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .with(
                eq("asha@example.com"),
                mockall::predicate::always(),
                mockall::predicate::always(),
                mockall::predicate::always(),
            )
            .times(1)
            .returning(|_, _, _, _| Ok(()));
        mailer
            .expect_send()
            .with(
                eq("meera@example.com"),
                mockall::predicate::always(),
                mockall::predicate::always(),
                mockall::predicate::always(),
            )
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        dispatch_booking_confirmed(&mailer, &booking, Some(&artist), "https://example.com").await;
    }

    #[tokio::test]
    async fn a_failed_customer_send_still_notifies_the_artist() {
        let booking = sample_booking();
        let artist = sample_artist();

        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .with(
                eq("asha@example.com"),
                mockall::predicate::always(),
                mockall::predicate::always(),
                mockall::predicate::always(),
            )
            .times(1)
            .returning(|_, _, _, _| Err(anyhow::anyhow!("smtp down")));
        mailer
            .expect_send()
            .with(
                eq("meera@example.com"),
                mockall::predicate::always(),
                mockall::predicate::always(),
                mockall::predicate::always(),
            )
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        dispatch_booking_confirmed(&mailer, &booking, Some(&artist), "https://example.com").await;
    }

    #[tokio::test]
    async fn skips_artist_email_when_artist_is_unknown() {
        let booking = sample_booking();

        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        dispatch_booking_confirmed(&mailer, &booking, None, "https://example.com").await;
    }
}
