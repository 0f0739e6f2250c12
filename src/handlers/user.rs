// User endpoints. These are the thinnest useful consumers of the shared
// request context: login issues a user token, infos is gated by the dual
// user/server token check.
use axum::response::Response;
use serde::Deserialize;
use serde_json::json;

use crate::api::{codes, RequestContext};
use crate::auth;
use crate::config;

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct InfosParams {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub token: String,
}

/// POST /user/login - issue a user token
///
/// Credential verification (password, captcha) lives in the account service;
/// this endpoint turns an already-authenticated user id into a signed token.
pub async fn login(mut ctx: RequestContext) -> Response {
    let params: LoginParams = match ctx.parse_params() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("requestId:{}, bad login params: {}", ctx.request_id, e);
            ctx.resp
                .set_error(codes::PARAMS_PARSE_ERROR, "params parse failed!");
            return ctx.finish();
        }
    };

    match auth::generate_user_token(params.user_id) {
        Ok(token) => {
            let expires_in = config::config().security.token_expiry_hours * 3600;
            ctx.resp.data = json!({
                "userId": params.user_id,
                "token": token,
                "expiresIn": expires_in,
            });
        }
        Err(e) => {
            tracing::error!("requestId:{}, token issuance failed: {}", ctx.request_id, e);
            ctx.resp
                .set_error(codes::USER_LOGIN_ERROR, "login failed!");
        }
    }

    ctx.finish()
}

/// POST /user/infos - fetch the caller's profile
///
/// Gated: an end user must present their own token, an internal service
/// passes via the serverToken header.
pub async fn infos(mut ctx: RequestContext) -> Response {
    let params: InfosParams = match ctx.parse_params() {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("requestId:{}, bad infos params: {}", ctx.request_id, e);
            ctx.resp
                .set_error(codes::PARAMS_PARSE_ERROR, "params parse failed!");
            return ctx.finish();
        }
    };

    if ctx.check_token(params.user_id, &params.token).is_err() {
        // Envelope already carries the failure code/msg
        return ctx.finish();
    }

    ctx.resp.data = json!({
        "userId": params.user_id,
    });
    ctx.finish()
}
