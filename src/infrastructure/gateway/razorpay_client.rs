use std::time::Duration;

use anyhow::Result;
use hmac::{Hmac, Mac};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::error;

type HmacSha256 = Hmac<Sha256>;

const ORDERS_URL: &str = "https://api.razorpay.com/v1/orders";

/// Minimal Razorpay Orders client built on reqwest.
pub struct RazorpayClient {
    http: reqwest::Client,
    key_id: String,
    key_secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorEnvelope {
    error: RazorpayErrorDetails,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorDetails {
    code: Option<String>,
    description: Option<String>,
    source: Option<String>,
    step: Option<String>,
    reason: Option<String>,
}

impl RazorpayClient {
    pub fn new(key_id: String, key_secret: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            key_id,
            key_secret,
        })
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        let (error_code, error_description, error_source, error_step, error_reason) =
            match serde_json::from_str::<RazorpayErrorEnvelope>(&body) {
                Ok(envelope) => {
                    let details = envelope.error;
                    (
                        details.code,
                        details.description,
                        details.source,
                        details.step,
                        details.reason,
                    )
                }
                Err(_) => (None, None, None, None, None),
            };

        error!(
            status = %status,
            razorpay_error_code = ?error_code,
            razorpay_error_description = ?error_description,
            razorpay_error_source = ?error_source,
            razorpay_error_step = ?error_step,
            razorpay_error_reason = ?error_reason,
            response_body = %body,
            context = %context,
            "razorpay api request failed"
        );

        anyhow::bail!(
            "Razorpay API request failed: {} (status {})",
            context,
            status
        );
    }

    /// Creates a gateway order for the given amount in minor units.
    /// https://razorpay.com/docs/api/orders/create
    pub async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<RazorpayOrder> {
        let body = CreateOrderBody {
            amount: amount_minor,
            currency,
            receipt,
        };

        let resp = self
            .http
            .post(ORDERS_URL)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "create order").await?;

        let order: RazorpayOrder = resp.json().await?;
        Ok(order)
    }

    /// Verifies the checkout callback signature: hex-encoded
    /// HMAC-SHA256 over `"{order_id}|{payment_id}"` with the key secret.
    /// `Mac::verify_slice` gives the constant-time comparison.
    /// https://razorpay.com/docs/payments/payment-gateway/web-integration/standard/build-integration
    pub fn verify_payment_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> bool {
        let provided = match hex::decode(signature) {
            Ok(bytes) => bytes,
            Err(_) => return false,
        };

        let mut mac = match HmacSha256::new_from_slice(self.key_secret.as_bytes()) {
            Ok(mac) => mac,
            Err(_) => return false,
        };
        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

        mac.verify_slice(&provided).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(secret: &str) -> RazorpayClient {
        RazorpayClient::new(
            "rzp_test_key".to_string(),
            secret.to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn accepts_a_signature_made_with_the_shared_secret() {
        let client = client("shhh");
        let signature = sign("shhh", "order_123", "pay_456");
        assert!(client.verify_payment_signature("order_123", "pay_456", &signature));
    }

    #[test]
    fn rejects_a_signature_made_with_another_secret() {
        let client = client("shhh");
        let signature = sign("other", "order_123", "pay_456");
        assert!(!client.verify_payment_signature("order_123", "pay_456", &signature));
    }

    #[test]
    fn rejects_tampered_ids() {
        let client = client("shhh");
        let signature = sign("shhh", "order_123", "pay_456");
        assert!(!client.verify_payment_signature("order_999", "pay_456", &signature));
        assert!(!client.verify_payment_signature("order_123", "pay_999", &signature));
    }

    #[test]
    fn rejects_non_hex_signatures() {
        let client = client("shhh");
        assert!(!client.verify_payment_signature("order_123", "pay_456", "not-hex!"));
    }
}
