use crate::domain::entities::{artists::ArtistEntity, bookings::BookingEntity};

fn format_amount(amount_minor: i32) -> String {
    format!("{}.{:02}", amount_minor / 100, amount_minor % 100)
}

pub fn booking_confirmed_customer(
    booking: &BookingEntity,
    base_url: &str,
) -> (String, String, String) {
    let subject = "Your booking is confirmed".to_string();
    let amount = format_amount(booking.amount_minor);
    let status_url = format!("{}/bookings/{}", base_url, booking.id);

    let text = format!(
        "Hi {name},\n\n\
         Your booking on {date} at {time} is confirmed. We have received \
         your payment of {amount}.\n\n\
         You can check your booking at {url}\n\n\
         See you soon!",
        name = booking.customer_name,
        date = booking.event_date,
        time = booking.event_time,
        amount = amount,
        url = status_url,
    );

    let html = format!(
        "<p>Hi {name},</p>\
         <p>Your booking on <strong>{date}</strong> at <strong>{time}</strong> \
         is confirmed. We have received your payment of <strong>{amount}</strong>.</p>\
         <p><a href=\"{url}\">View your booking</a></p>\
         <p>See you soon!</p>",
        name = booking.customer_name,
        date = booking.event_date,
        time = booking.event_time,
        amount = amount,
        url = status_url,
    );

    (subject, html, text)
}

pub fn booking_confirmed_artist(
    booking: &BookingEntity,
    artist: &ArtistEntity,
) -> (String, String, String) {
    let subject = format!("New confirmed booking on {}", booking.event_date);

    let text = format!(
        "Hi {artist},\n\n\
         A booking for {date} at {time} has been paid and confirmed.\n\n\
         Customer: {name}\n\
         Phone: {phone}\n\
         Notes: {notes}",
        artist = artist.display_name,
        date = booking.event_date,
        time = booking.event_time,
        name = booking.customer_name,
        phone = booking.customer_phone,
        notes = booking.notes.as_deref().unwrap_or("-"),
    );

    let html = format!(
        "<p>Hi {artist},</p>\
         <p>A booking for <strong>{date}</strong> at <strong>{time}</strong> \
         has been paid and confirmed.</p>\
         <ul><li>Customer: {name}</li><li>Phone: {phone}</li>\
         <li>Notes: {notes}</li></ul>",
        artist = artist.display_name,
        date = booking.event_date,
        time = booking.event_time,
        name = booking.customer_name,
        phone = booking.customer_phone,
        notes = booking.notes.as_deref().unwrap_or("-"),
    );

    (subject, html, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
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
            notes: Some("bridal trial".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn customer_template_carries_name_amount_and_link() {
        let booking = sample_booking();
        let (subject, html, text) =
            booking_confirmed_customer(&booking, "https://blushbook.example");

        assert_eq!(subject, "Your booking is confirmed");
        assert!(text.contains("Asha Rao"));
        assert!(text.contains("5000.00"));
        assert!(html.contains(&format!(
            "https://blushbook.example/bookings/{}",
            booking.id
        )));
    }

    #[test]
    fn artist_template_carries_customer_details() {
        let booking = sample_booking();
        let artist = ArtistEntity {
            id: 7,
            display_name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
            phone: None,
            is_active: true,
            created_at: Utc::now(),
        };

        let (subject, html, text) = booking_confirmed_artist(&booking, &artist);
        assert!(subject.contains("2026-09-12"));
        assert!(text.contains("bridal trial"));
        assert!(html.contains("+91-9000000001"));
    }

    #[test]
    fn amounts_format_with_two_decimals() {
        assert_eq!(format_amount(500000), "5000.00");
        assert_eq!(format_amount(123456), "1234.56");
        assert_eq!(format_amount(5), "0.05");
    }
}
