use axum::{
    extract::State,
    http::{HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{self, Header};
use axum_extra::TypedHeader;
use subtle::ConstantTimeEq;

use crate::{error::AppError, state::AppState};

static X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

// Header "X-API-Key: <clave>"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl Header for ApiKey {
    fn name() -> &'static HeaderName {
        &X_API_KEY
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        let key = value.to_str().map_err(|_| headers::Error::invalid())?;
        Ok(ApiKey(key.to_string()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}

// Se ejecuta ANTES del router: sin la clave correcta no se llega a ningún handler
pub async fn api_key_middleware(
    State(state): State<AppState>,
    api_key: Option<TypedHeader<ApiKey>>,
    request: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    match api_key {
        Some(TypedHeader(ApiKey(provided))) if key_matches(&state.api_key, &provided) => {
            Ok(next.run(request).await)
        }
        Some(_) => {
            tracing::warn!("API key incorrecta en {} {}", request.method(), request.uri().path());
            Err(AppError::Unauthorized)
        }
        None => {
            tracing::warn!("Petición sin API key en {} {}", request.method(), request.uri().path());
            Err(AppError::Unauthorized)
        }
    }
}

// Comparación en tiempo constante
fn key_matches(expected: &str, provided: &str) -> bool {
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}
