#![allow(clippy::unwrap_used)]

use domain_types::{errors::RedirectError, response_types::GatewayResponseData};
use indexmap::IndexMap;
use interfaces::response::{PaymentResponse, RedirectResponse};
use serde_json::json;

const REDIRECT_URL: &str = "https://example.com/redirect?a=1&b=2";

/// A reply that exposes nothing beyond the defaults.
struct AcknowledgementResponse;

impl PaymentResponse for AcknowledgementResponse {
    fn is_successful(&self) -> bool {
        false
    }
}

/// An offsite reply directing the customer to a gateway-hosted payment page.
struct OffsitePaymentResponse {
    redirect: bool,
    method: Option<String>,
    data: Option<IndexMap<String, String>>,
}

impl OffsitePaymentResponse {
    fn with_method(method: &str) -> Self {
        Self {
            redirect: true,
            method: Some(method.to_string()),
            data: None,
        }
    }
}

impl PaymentResponse for OffsitePaymentResponse {
    fn is_successful(&self) -> bool {
        false
    }

    fn is_redirect(&self) -> bool {
        self.redirect
    }

    fn as_redirect(&self) -> Option<&dyn RedirectResponse> {
        Some(self)
    }
}

impl RedirectResponse for OffsitePaymentResponse {
    fn redirect_url(&self) -> String {
        REDIRECT_URL.to_string()
    }

    fn redirect_method(&self) -> Option<String> {
        self.method.clone()
    }

    fn redirect_data(&self) -> Option<IndexMap<String, String>> {
        self.data.clone()
    }
}

#[derive(Debug, PartialEq)]
struct PurchaseRequest {
    reference: &'static str,
}

#[test]
fn test_response_data_keeps_request_and_payload() {
    let request = PurchaseRequest {
        reference: "order-42",
    };
    let response = GatewayResponseData::new(request, Some(json!({"foo": "bar"})));

    assert_eq!(
        *response.request(),
        PurchaseRequest {
            reference: "order-42"
        }
    );
    assert_eq!(response.data(), Some(&json!({"foo": "bar"})));
}

#[test]
fn test_default_methods() {
    let response = AcknowledgementResponse;

    assert!(!response.is_successful());
    assert!(!response.is_pending());
    assert!(!response.is_completed());
    assert!(!response.is_redirect());
    assert!(!response.is_transparent_redirect());
    assert!(!response.is_cancelled());
    assert_eq!(response.transaction_reference(), None);
    assert_eq!(response.message(), None);
    assert_eq!(response.code(), None);
}

#[test]
fn test_redirect_response_not_implemented() {
    let report = AcknowledgementResponse.redirect_response().unwrap_err();

    assert_eq!(
        *report.current_context(),
        RedirectError::RedirectNotSupported
    );
    assert_eq!(
        report.current_context().to_string(),
        "This response does not support redirection."
    );
}

#[test]
fn test_redirect_response_not_supported() {
    let response = OffsitePaymentResponse {
        redirect: false,
        method: None,
        data: None,
    };
    let report = response.redirect_response().unwrap_err();

    assert_eq!(
        *report.current_context(),
        RedirectError::RedirectNotSupported
    );
}

#[test]
fn test_redirect_response_get() {
    let response = OffsitePaymentResponse::with_method("GET");
    let http_response = response.redirect_response().unwrap();

    assert_eq!(http_response.status_code, 302);
    assert_eq!(http_response.header("Location"), Some(REDIRECT_URL));
    assert!(http_response.body.is_empty());
}

#[test]
fn test_redirect_response_defaults_to_get() {
    let response = OffsitePaymentResponse {
        redirect: true,
        method: None,
        data: None,
    };
    let http_response = response.redirect_response().unwrap();

    assert_eq!(http_response.status_code, 302);
    assert_eq!(http_response.header("Location"), Some(REDIRECT_URL));
}

#[test]
fn test_redirect_response_post() {
    let data = IndexMap::from_iter([
        ("foo".to_string(), "bar".to_string()),
        ("key&\"".to_string(), "<value>".to_string()),
    ]);
    let response = OffsitePaymentResponse {
        redirect: true,
        method: Some("POST".to_string()),
        data: Some(data),
    };
    let http_response = response.redirect_response().unwrap();

    assert_eq!(http_response.status_code, 200);
    assert_eq!(http_response.header("Content-Type"), Some("text/html"));

    let body = http_response.body_text();
    assert!(
        body.contains("<form action=\"https://example.com/redirect?a=1&amp;b=2\" method=\"post\">")
    );
    assert!(body.contains("<input type=\"hidden\" name=\"foo\" value=\"bar\" />"));
    assert!(
        body.contains("<input type=\"hidden\" name=\"key&amp;&quot;\" value=\"&lt;value&gt;\" />")
    );
}

#[test]
fn test_redirect_response_post_without_data() {
    let response = OffsitePaymentResponse::with_method("POST");
    let http_response = response.redirect_response().unwrap();

    assert_eq!(http_response.status_code, 200);
    let body = http_response.body_text();
    assert!(body.contains("method=\"post\">"));
    assert!(!body.contains("type=\"hidden\""));
}

#[test]
fn test_redirect_response_invalid_method() {
    let response = OffsitePaymentResponse::with_method("DELETE");
    let report = response.redirect_response().unwrap_err();

    assert_eq!(
        *report.current_context(),
        RedirectError::InvalidRedirectMethod("DELETE".to_owned())
    );
    assert_eq!(
        report.current_context().to_string(),
        "Invalid redirect method \"DELETE\"."
    );
}

#[test]
fn test_redirect_response_method_match_is_case_sensitive() {
    let response = OffsitePaymentResponse::with_method("get");
    let report = response.redirect_response().unwrap_err();

    assert_eq!(
        *report.current_context(),
        RedirectError::InvalidRedirectMethod("get".to_owned())
    );
}

#[test]
fn test_redirect_response_is_idempotent() {
    let data = IndexMap::from_iter([("foo".to_string(), "bar".to_string())]);
    let response = OffsitePaymentResponse {
        redirect: true,
        method: Some("POST".to_string()),
        data: Some(data),
    };

    let first = response.redirect_response().unwrap();
    let second = response.redirect_response().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.body, second.body);
}
