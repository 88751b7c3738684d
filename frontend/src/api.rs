//! HTTP gateway.
//!
//! One configured client for the whole app. The session handle is
//! injected so the gateway can read the token for the `Authorization`
//! header and clear the session when any endpoint other than
//! `/auth/login` answers 401.

use crate::session::Session;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use teampulse_shared::ErrorBody;
use teampulse_shared::files::attachment_filename;

/// Client-side classification of request failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 401 on an authenticated endpoint; the session has already been
    /// cleared when this is returned.
    Unauthorized,
    /// HTTP >= 400 with the body's `detail` when it had one.
    Status { status: u16, detail: Option<String> },
    /// Transport-level failure (fetch rejected, connection refused).
    Network(String),
    /// 2xx body that did not decode.
    Decode(String),
}

impl ApiError {
    /// Message for the user: the server's `detail` verbatim when
    /// available, otherwise the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "session expired"),
            ApiError::Status { status, detail } => match detail {
                Some(detail) => write!(f, "HTTP {status}: {detail}"),
                None => write!(f, "HTTP {status}"),
            },
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Decode(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

/// Decoded blob response plus the headers needed to save it.
pub struct FileDownload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
}

impl FileDownload {
    /// Saves through a synthesized anchor click. The filename comes from
    /// `Content-Disposition` when present, else `fallback_name`.
    pub fn save(&self, fallback_name: &str) -> Result<(), ApiError> {
        let filename = attachment_filename(self.content_disposition.as_deref(), fallback_name);
        crate::web::download::save_file(&self.bytes, self.content_type.as_deref(), &filename)
            .map_err(|e| ApiError::Network(format!("{e:?}")))
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: String, session: Session) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, session }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token.get_untracked() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    /// Maps non-2xx responses to `ApiError` and runs the 401 discipline:
    /// any authenticated endpoint rejecting the token tears the session
    /// down before the caller sees the error.
    async fn check(&self, path: &str, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let detail = response.json::<ErrorBody>().await.ok().map(|b| b.detail);
        if status == 401 && path != "/auth/login" {
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }
        Err(ApiError::Status { status, detail })
    }

    async fn send(&self, path: &str, request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.check(path, response).await
    }

    // =========================================================
    // JSON requests
    // =========================================================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.send(path, request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(path, request).await?;
        Ok(())
    }

    pub async fn patch_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::patch(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(path, request).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(path, request).await?;
        Ok(())
    }

    /// POST with an empty body (acknowledge, mark-read, request-feedback).
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(path, request).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::delete(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(path, request).await?;
        Ok(())
    }

    // =========================================================
    // Form bodies
    // =========================================================

    /// `application/x-www-form-urlencoded` POST; used by login, which is
    /// the one endpoint the 401 discipline exempts.
    pub async fn post_urlencoded<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let params = web_sys::UrlSearchParams::new()
            .map_err(|_| ApiError::Network("failed to build form body".to_string()))?;
        for (key, value) in fields {
            params.append(key, value);
        }
        let body = String::from(params.to_string());
        let request = self
            .authorize(Request::post(&self.url(path)))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.send(path, request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Multipart POST. The browser supplies the boundary, so no explicit
    /// Content-Type header here.
    pub async fn post_multipart(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<(), ApiError> {
        let request = self
            .authorize(Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.send(path, request).await?;
        Ok(())
    }

    // =========================================================
    // Blob responses
    // =========================================================

    pub async fn get_blob(&self, path: &str) -> Result<FileDownload, ApiError> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = self.send(path, request).await?;
        let content_type = response.headers().get("content-type");
        let content_disposition = response.headers().get("content-disposition");
        let bytes = response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(FileDownload {
            bytes,
            content_type,
            content_disposition,
        })
    }
}

/// Returns the gateway from context.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}
