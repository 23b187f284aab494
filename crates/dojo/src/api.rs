use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_net::http::Response;

use crate::data::{Credential, ErrorBody};

pub const AUTHORIZATION: &str = "Authorization";

#[derive(Debug, Clone, Copy)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalServerError,
    #[error("Unauthorized Access")]
    UnauthorizedAccess(Option<String>),
    #[error("Forbidden Access")]
    ForbiddenAccess,
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Serialize error: {0}")]
    SerializeError(String),
    #[error("Unexpected response status code: {0}")]
    UnexpectedStatusCode(u16),
}

impl ApiError {
    /// The message the backend attached to a rejection, if it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::BadRequest(detail) | ApiError::NotFound(detail) => Some(detail),
            ApiError::UnauthorizedAccess(detail) => detail.as_deref(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Headers attached to every outgoing request.
///
/// Cloning yields another handle to the same header set, so the session store
/// and the HTTP client can share one: a header set through either handle is
/// sent with every request made afterwards.
#[derive(Clone, Default)]
pub struct ApiHeaders(Rc<RefCell<HashMap<String, String>>>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.0.borrow_mut().insert(key.into(), value.into());
    }

    pub fn delete(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    pub fn set_credential(&self, credential: &Credential) {
        self.insert(AUTHORIZATION, credential.bearer());
    }

    pub fn clear_credential(&self) {
        self.delete(AUTHORIZATION);
    }

    pub fn authorization(&self) -> Option<String> {
        self.get(AUTHORIZATION)
    }
}

impl PartialEq for ApiHeaders {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<&ApiHeaders> for gloo_net::http::Headers {
    fn from(val: &ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0.borrow().iter() {
            headers.set(key, value);
        }
        headers
    }
}

/// Maps a response status to the error it represents, `None` for success.
pub fn error_for_status(status: u16, endpoint: &str, detail: Option<String>) -> Option<ApiError> {
    match status {
        200..=299 => None,
        400 => Some(ApiError::BadRequest(
            detail.unwrap_or_else(|| format!("Bad request to {endpoint}")),
        )),
        401 => Some(ApiError::UnauthorizedAccess(detail)),
        403 => Some(ApiError::ForbiddenAccess),
        404 => Some(ApiError::NotFound(
            detail.unwrap_or_else(|| format!("{endpoint} not found")),
        )),
        500..=599 => Some(ApiError::InternalServerError),
        status => Some(ApiError::UnexpectedStatusCode(status)),
    }
}

/// Pulls `detail` out of a FastAPI-style error body.
pub fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|body| body.detail)
}

async fn handle_response_status(response: Response, endpoint: &str) -> ApiResult<Response> {
    let status = response.status();
    if (200..=299).contains(&status) {
        return Ok(response);
    }

    let detail = response.text().await.ok().as_deref().and_then(parse_detail);
    match error_for_status(status, endpoint, detail) {
        Some(err) => Err(err),
        None => Ok(response),
    }
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = handle_response_status(response, endpoint).await?;
    validated_response
        .json::<T>()
        .await
        .map_err(|e| ApiError::ParseError(e.to_string()))
}

/// Typed JSON transport used by [`crate::client::Api`].
#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    /// Header set sent with every request.
    fn headers(&self) -> &ApiHeaders;

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned;

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;
}

/// [`ApiClient`] backed by the browser's `fetch` through `gloo-net`.
pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>, headers: ApiHeaders) -> Self {
        Self {
            root_url: root_url.into(),
            headers,
        }
    }

    async fn make_request<B>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<&B>,
    ) -> ApiResult<Response>
    where
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.root_url, endpoint);

        let builder = match method {
            HttpMethod::Get => gloo_net::http::Request::get(&url),
            HttpMethod::Post => gloo_net::http::Request::post(&url),
        }
        .headers((&self.headers).into());

        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::SerializeError(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| ApiError::SerializeError(e.to_string()))?,
        };

        request.send().await.map_err(ApiError::NetworkError)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    fn headers(&self) -> &ApiHeaders {
        &self.headers
    }

    async fn get<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .make_request::<()>(HttpMethod::Get, endpoint, None)
            .await?;
        handle_json_response(response, endpoint).await
    }

    async fn post<T, B>(&self, endpoint: &str, body: &B) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self
            .make_request(HttpMethod::Post, endpoint, Some(body))
            .await?;
        handle_json_response(response, endpoint).await
    }
}
