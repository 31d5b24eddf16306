use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, DATE};
use reqwest::Method;
use serde_json::Value;

use crate::{
    config::Settings,
    error::{BroadcasterError, DispatchError},
    http_client,
    signer::{self, Credentials},
};

/// Normalized outcome of one API call.
///
/// `body` is the parsed JSON response when one was received; `status_code`
/// is the real HTTP status, or a synthetic one for transport failures (408
/// for a timeout, 500 for connection and other errors).
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub body: Option<Value>,
    pub status_code: u16,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Mekari API client: signs and dispatches requests against one base URL.
pub struct MekariClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl MekariClient {
    pub fn new(settings: &Settings) -> Result<Self, BroadcasterError> {
        let http = http_client::builder(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            credentials: Credentials {
                client_id: settings.client_id.clone(),
                client_secret: settings.client_secret.clone(),
            },
        })
    }

    /// Send one signed request.
    ///
    /// Every outcome is folded into the returned [`ApiResponse`]; failures
    /// are logged here and surfaced only through the status code, so callers
    /// check `status_code`/`body` instead of handling errors.
    pub async fn send(&self, method: Method, path: &str, payload: Option<&Value>) -> ApiResponse {
        match self.dispatch(method, path, payload).await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(error = %e, "request failed");
                ApiResponse {
                    body: None,
                    status_code: e.status_code(),
                }
            }
        }
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<ApiResponse, DispatchError> {
        // Headers are signed per request; the signature binds the Date value.
        let headers = signer::sign(&method, path, &self.credentials);
        let url = format!("{}{}", self.base_url, path);
        let mut req = self
            .http
            .request(method, url)
            .header(AUTHORIZATION, headers.authorization.as_str())
            .header(DATE, headers.date.as_str())
            .header(CONTENT_TYPE, headers.content_type);
        if let Some(body) = payload {
            req = req.json(body);
        }
        let resp = req.send().await.map_err(|e| classify(e, path))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DispatchError::Http {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        let body = resp.json::<Value>().await.ok();
        Ok(ApiResponse {
            body,
            status_code: status.as_u16(),
        })
    }
}

fn classify(e: reqwest::Error, path: &str) -> DispatchError {
    let path = path.to_string();
    if e.is_timeout() {
        DispatchError::Timeout { source: e, path }
    } else if e.is_connect() {
        DispatchError::Connection { source: e, path }
    } else {
        DispatchError::Other { source: e, path }
    }
}
