use common_utils::{consts, fp_utils, CustomResult, Method};
use domain_types::{
    errors::RedirectError, redirect_types::RedirectForm, response_types::HttpResponse,
    utils::ForeignTryFrom,
};
use error_stack::report;
use indexmap::IndexMap;

/// The uniform query surface every gateway reply exposes.
///
/// Concrete gateways override only what their reply actually carries; the base
/// fields default to the quiet state: nothing pending, no redirect, nothing
/// cancelled, no diagnostics.
pub trait PaymentResponse {
    /// Whether the transaction completed successfully.
    fn is_successful(&self) -> bool;

    /// Whether the gateway is still processing the transaction.
    fn is_pending(&self) -> bool {
        false
    }

    /// Whether the transaction ran to completion on the gateway side.
    fn is_completed(&self) -> bool {
        false
    }

    /// Whether the customer must be sent to a gateway-hosted page before the
    /// transaction can proceed.
    fn is_redirect(&self) -> bool {
        false
    }

    /// Whether that redirect is a POST form auto-submitted on the customer's
    /// behalf.
    fn is_transparent_redirect(&self) -> bool {
        false
    }

    /// Whether the customer abandoned the transaction.
    fn is_cancelled(&self) -> bool {
        false
    }

    /// The gateway's reference for this transaction.
    fn transaction_reference(&self) -> Option<String> {
        None
    }

    /// Human-readable message returned by the gateway.
    fn message(&self) -> Option<String> {
        None
    }

    /// Gateway-specific status or error code.
    fn code(&self) -> Option<String> {
        None
    }

    /// The redirect view of this response. Redirect-capable types return
    /// `Some(self)`.
    fn as_redirect(&self) -> Option<&dyn RedirectResponse> {
        None
    }

    /// Build the HTTP response that carries the customer to the gateway.
    fn redirect_response(&self) -> CustomResult<HttpResponse, RedirectError> {
        build_redirect_response(self.as_redirect())
    }
}

/// Redirect capability of a gateway reply.
pub trait RedirectResponse: PaymentResponse {
    /// Where the customer must be sent.
    fn redirect_url(&self) -> String;

    /// Declared redirect method. The responder assumes GET when absent.
    fn redirect_method(&self) -> Option<String> {
        None
    }

    /// Fields submitted with a POST redirect, in gateway order.
    fn redirect_data(&self) -> Option<IndexMap<String, String>> {
        None
    }
}

/// Turn a response's redirect intent into a concrete HTTP response.
///
/// GET redirects carry the URL verbatim in `Location`; POST redirects render
/// an auto-submitting form document. Any other declared method is refused with
/// the offending literal.
pub fn build_redirect_response(
    redirect: Option<&dyn RedirectResponse>,
) -> CustomResult<HttpResponse, RedirectError> {
    let redirect = redirect.ok_or(report!(RedirectError::RedirectNotSupported))?;
    fp_utils::when(!redirect.is_redirect(), || {
        Err(report!(RedirectError::RedirectNotSupported))
    })?;

    let method = redirect
        .redirect_method()
        .unwrap_or_else(|| consts::DEFAULT_REDIRECT_METHOD.to_string());
    tracing::debug!(redirect_method = %method, "building redirect response");

    let form = match method.as_str() {
        "GET" => RedirectForm::Form {
            endpoint: redirect.redirect_url(),
            method: Method::Get,
            form_fields: IndexMap::new(),
        },
        "POST" => RedirectForm::Form {
            endpoint: redirect.redirect_url(),
            method: Method::Post,
            form_fields: redirect.redirect_data().unwrap_or_default(),
        },
        other => {
            return Err(report!(RedirectError::InvalidRedirectMethod(
                other.to_owned()
            )))
        }
    };
    HttpResponse::foreign_try_from(form)
}
