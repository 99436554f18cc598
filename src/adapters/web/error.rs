//! HTTP error responses for web adapter.

use askama::Template;
use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

use crate::domain::error::TradeProError;

use super::is_htmx_request;
use super::templates::{BasePage, ErrorTemplate};

/// Rendered error fragment, attached to error responses for [`wrap_errors`].
#[derive(Debug, Clone)]
struct ErrorContent(String);

#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub message: String,
}

impl WebError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

pub fn status_from_error(err: &TradeProError) -> StatusCode {
    match err {
        TradeProError::ConfigInvalid { .. } | TradeProError::ConfigParse { .. } => {
            StatusCode::BAD_REQUEST
        }
        TradeProError::UnknownInstrument { .. } => StatusCode::NOT_FOUND,
        TradeProError::OrderRejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TradeProError::Data { .. } | TradeProError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<TradeProError> for WebError {
    fn from(err: TradeProError) -> Self {
        Self::new(status_from_error(&err), err.to_string())
    }
}

impl From<askama::Error> for WebError {
    fn from(err: askama::Error) -> Self {
        log::error!("template render failed: {err}");
        Self::internal("Failed to render page")
    }
}

/// Error responses carry only the error fragment; the layout is added by
/// [`wrap_errors`] for full page loads.
impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let template = ErrorTemplate {
            message: &self.message,
            status: self.status.as_u16(),
        };
        match template.render() {
            Ok(html) => {
                let mut resp = (self.status, Html(html.clone())).into_response();
                resp.extensions_mut().insert(ErrorContent(html));
                resp
            }
            Err(_) => (self.status, self.message).into_response(),
        }
    }
}

/// Wraps error fragments in the base layout unless HTMX asked for them.
pub async fn wrap_errors(request: Request, next: Next) -> Response {
    let htmx = is_htmx_request(request.headers());
    let mut resp = next.run(request).await;
    if htmx {
        return resp;
    }
    let Some(ErrorContent(content)) = resp.extensions_mut().remove::<ErrorContent>() else {
        return resp;
    };
    let page = BasePage {
        title: "Error",
        active: "",
        content: &content,
    };
    match page.render() {
        Ok(html) => (resp.status(), Html(html)).into_response(),
        Err(_) => resp,
    }
}
