use common_utils::{consts, CustomResult, Method};
use error_stack::{report, ResultExt};
use indexmap::IndexMap;

use crate::{
    errors::RedirectError,
    response_types::HttpResponse,
    utils::{escape_html_attribute, ForeignTryFrom},
};

/// How a client should be sent to a gateway-hosted page.
///
/// `form_fields` preserves insertion order; the generated document submits
/// fields in exactly the order the gateway supplied them.
#[derive(Debug, Eq, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
pub enum RedirectForm {
    Form {
        endpoint: String,
        method: Method,
        form_fields: IndexMap<String, String>,
    },
    Html {
        html_data: String,
    },
}

impl From<(url::Url, Method)> for RedirectForm {
    fn from((mut redirect_url, method): (url::Url, Method)) -> Self {
        let form_fields = IndexMap::from_iter(
            redirect_url
                .query_pairs()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );

        // Do not include query params in the endpoint
        redirect_url.set_query(None);

        Self::Form {
            endpoint: redirect_url.to_string(),
            method,
            form_fields,
        }
    }
}

impl ForeignTryFrom<RedirectForm> for HttpResponse {
    type Error = RedirectError;

    fn foreign_try_from(form: RedirectForm) -> CustomResult<Self, Self::Error> {
        match form {
            RedirectForm::Form {
                endpoint,
                method: Method::Get,
                form_fields,
            } => {
                if form_fields.is_empty() {
                    Self::found(&endpoint)
                } else {
                    Self::found(&append_query_fields(&endpoint, &form_fields)?)
                }
            }
            RedirectForm::Form {
                endpoint,
                method: Method::Post,
                form_fields,
            } => Ok(Self::html_page(build_auto_submit_form(
                &endpoint,
                &form_fields,
            ))),
            RedirectForm::Form { method, .. } => Err(report!(
                RedirectError::InvalidRedirectMethod(method.to_string())
            )),
            RedirectForm::Html { html_data } => Ok(Self::html_page(html_data)),
        }
    }
}

fn append_query_fields(
    endpoint: &str,
    form_fields: &IndexMap<String, String>,
) -> CustomResult<String, RedirectError> {
    let mut location = url::Url::parse(endpoint)
        .change_context(RedirectError::InvalidRedirectUrl(endpoint.to_owned()))?;
    location.query_pairs_mut().extend_pairs(form_fields.iter());
    Ok(location.to_string())
}

/// Render the transparent-redirect document: one form, submitted on load, with
/// a plain submit button for clients that do not run scripts.
fn build_auto_submit_form(endpoint: &str, form_fields: &IndexMap<String, String>) -> String {
    let mut hidden_fields = String::new();
    for (name, value) in form_fields {
        hidden_fields.push_str(&format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\" />\n",
            escape_html_attribute(name),
            escape_html_attribute(value),
        ));
    }
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head><title>{title}</title></head>\n",
            "<body onload=\"document.forms[0].submit();\">\n",
            "<form action=\"{action}\" method=\"post\">\n",
            "{fields}",
            "<noscript><input type=\"submit\" value=\"Continue\" /></noscript>\n",
            "</form>\n",
            "</body>\n",
            "</html>\n",
        ),
        title = consts::REDIRECT_PAGE_TITLE,
        action = escape_html_attribute(endpoint),
        fields = hidden_fields,
    )
}
