use std::convert::Infallible;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::api::envelope::ApiResponse;
use crate::auth;
use crate::config;
use crate::error::AuthError;

/// Header carrying a trusted-service credential. Only internal services
/// send it; its presence switches the token gate to the server path.
pub const SERVER_TOKEN_HEADER: &str = "serverToken";

/// Per-request state for one handler invocation.
///
/// Extracting a `RequestContext` performs the request setup every handler
/// shares: a fresh correlation id, the captured URL, the raw body, and the
/// `serverToken` header if an internal service sent one. The envelope in
/// `resp` starts out as success (code 0) and already carries the
/// correlation id.
///
/// Extraction never rejects the request. An unreadable body is logged and
/// treated as empty rather than failing the call.
#[derive(Debug)]
pub struct RequestContext {
    pub request_id: String,
    pub request_url: String,
    pub req_params: Bytes,
    pub server_token: String,
    pub resp: ApiResponse,
}

#[async_trait]
impl<S> FromRequest<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();

        let request_id = Uuid::new_v4().to_string();
        let request_url = parts.uri.to_string();

        // Last occurrence wins when the header repeats
        let server_token = parts
            .headers
            .get_all(SERVER_TOKEN_HEADER)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .last()
            .unwrap_or_default()
            .to_string();

        let limit = config::config().api.max_request_size_bytes;
        let req_params = match axum::body::to_bytes(body, limit).await {
            Ok(bytes) => bytes,
            Err(e) => {
                // Absorbed: the request proceeds with an empty body
                tracing::warn!(
                    "requestId:{}, requestUrl:{}, body read failed: {}",
                    request_id,
                    request_url,
                    e
                );
                Bytes::new()
            }
        };

        let params_log = if config::config().api.enable_request_logging {
            String::from_utf8_lossy(&req_params).into_owned()
        } else {
            format!("<{} bytes>", req_params.len())
        };
        tracing::info!(
            "requestId:{}, requestUrl:{}, params:{}",
            request_id,
            request_url,
            params_log
        );

        let resp = ApiResponse::new(request_id.clone());

        Ok(Self {
            request_id,
            request_url,
            req_params,
            server_token,
            resp,
        })
    }
}

impl RequestContext {
    /// Deserialize the captured body into the handler's params type
    pub fn parse_params<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.req_params)
    }

    /// Authorize the request for an operation on `user_id`'s data.
    ///
    /// Strict either/or dispatch: when a serverToken header was captured the
    /// caller is a trusted internal service, only the server credential is
    /// verified and `token` is ignored. Otherwise `token` must be a valid
    /// user token whose embedded user id matches `user_id`.
    ///
    /// On failure the envelope's `code`/`msg` are set and an `Err` comes
    /// back so the handler can stop and emit the envelope as-is.
    pub fn check_token(&mut self, user_id: i64, token: &str) -> Result<(), AuthError> {
        if self.server_token.is_empty() {
            self.user_check(user_id, token)
        } else {
            self.server_check()
        }
    }

    fn user_check(&mut self, user_id: i64, token: &str) -> Result<(), AuthError> {
        match auth::verify_user_token(token) {
            Err(_) => self.fail(AuthError::TokenCheck),
            Ok(claims) if claims.user_id != user_id => self.fail(AuthError::UserCheck),
            Ok(_) => Ok(()),
        }
    }

    fn server_check(&mut self) -> Result<(), AuthError> {
        match auth::verify_server_token(&self.server_token) {
            Err(_) => self.fail(AuthError::TokenCheck),
            Ok(_) => Ok(()),
        }
    }

    fn fail(&mut self, err: AuthError) -> Result<(), AuthError> {
        self.resp.set_auth_error(&err);
        Err(err)
    }

    /// Emit the envelope: backfill the default message, log the serialized
    /// response against the request URL, and answer with transport 200.
    pub fn finish(mut self) -> Response {
        self.resp.finalize();
        match serde_json::to_string(&self.resp) {
            Ok(serialized) => tracing::info!(
                "requestUrl:{}, response data:{}",
                self.request_url,
                serialized
            ),
            Err(e) => tracing::error!(
                "requestUrl:{}, response serialization failed: {}",
                self.request_url,
                e
            ),
        }
        self.resp.into_response()
    }
}
