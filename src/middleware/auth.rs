use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::auth::{self, Claims};
use crate::error::ApiError;

/// Bearer-token gate for the protected route mount. Missing or malformed
/// credentials short-circuit with 403; a present but invalid token (bad
/// signature, expired) answers 401. Decoded claims ride along in request
/// extensions for downstream handlers.
pub async fn verify_token(headers: HeaderMap, mut request: Request, next: Next) -> Response {
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(err) => return err.into_response(),
    };

    let claims: Claims = match auth::decode_token(&token) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!("token rejected: {}", err);
            return ApiError::unauthorized("Invalid token").into_response();
        }
    };

    request.extensions_mut().insert(claims);
    next.run(request).await
}

/// Extract the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let header = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::forbidden("Token requerido"))?;

    match header.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.to_string()),
        _ => Err(ApiError::forbidden("Token requerido")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn missing_header_is_forbidden() {
        let err = bearer_token(&headers_with(None)).unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn non_bearer_scheme_is_forbidden() {
        let err = bearer_token(&headers_with(Some("Basic abc123"))).unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn empty_bearer_token_is_forbidden() {
        let err = bearer_token(&headers_with(Some("Bearer   "))).unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn bearer_token_is_extracted() {
        let token = bearer_token(&headers_with(Some("Bearer abc.def.ghi"))).unwrap();
        assert_eq!(token, "abc.def.ghi");
    }
}
