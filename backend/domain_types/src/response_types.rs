use std::borrow::Cow;

use bytes::Bytes;
use common_utils::{
    consts,
    errors::{CustomResult, ParsingError},
    ext_traits::ValueExt,
};
use error_stack::{report, ResultExt};
use http::{header, HeaderMap, HeaderValue, StatusCode};

use crate::errors::RedirectError;

/// A gateway's raw reply paired with the request that produced it.
///
/// The payload is stored exactly as the gateway returned it; typed views are
/// derived on demand via [`Self::parse_data`]. Immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct GatewayResponseData<R> {
    request: R,
    data: Option<serde_json::Value>,
}

impl<R> GatewayResponseData<R> {
    pub fn new(request: R, data: Option<serde_json::Value>) -> Self {
        Self { request, data }
    }

    /// The request this reply answers.
    pub fn request(&self) -> &R {
        &self.request
    }

    /// The raw payload, if the gateway sent one.
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }

    /// Decode the raw payload into a typed reply.
    pub fn parse_data<T>(&self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: serde::de::DeserializeOwned,
    {
        match &self.data {
            Some(value) => value.clone().parse_value(type_name),
            None => Err(report!(ParsingError::StructParseFailure(type_name)))
                .attach_printable("response carried no payload"),
        }
    }
}

/// A synthesized HTTP response describing how a client should be redirected.
///
/// Constructed fresh per call and handed to the caller; never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// status code
    pub status_code: u16,
    /// headers
    pub headers: HeaderMap,
    /// body
    pub body: Bytes,
}

impl HttpResponse {
    /// A `302 Found` pointing at `location`, carried verbatim.
    pub fn found(location: &str) -> CustomResult<Self, RedirectError> {
        let location_value = HeaderValue::from_str(location)
            .change_context(RedirectError::InvalidRedirectUrl(location.to_owned()))?;
        let mut headers = HeaderMap::new();
        headers.insert(header::LOCATION, location_value);
        Ok(Self {
            status_code: StatusCode::FOUND.as_u16(),
            headers,
            body: Bytes::new(),
        })
    }

    /// A `200 OK` carrying an HTML document.
    pub fn html_page(document: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(consts::HTML_CONTENT_TYPE),
        );
        Self {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: Bytes::from(document),
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// The body decoded as text.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
