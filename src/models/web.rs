use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::{Deserialize, Serialize};

// Sobre uniforme de todas las respuestas: `{code, status, data}`
#[derive(Debug, Serialize, Deserialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

impl<T> WebResponse<T> {
    pub fn new(code: StatusCode, data: T) -> Self {
        Self {
            code: code.as_u16(),
            status: status_text(code),
            data,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> Response {
        // El código HTTP real siempre coincide con `code`
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

// "Bad Request" -> "BAD REQUEST"
fn status_text(code: StatusCode) -> String {
    code.canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_matches_wire_contract() {
        assert_eq!(status_text(StatusCode::OK), "OK");
        assert_eq!(status_text(StatusCode::BAD_REQUEST), "BAD REQUEST");
        assert_eq!(status_text(StatusCode::NOT_FOUND), "NOT FOUND");
        assert_eq!(status_text(StatusCode::UNAUTHORIZED), "UNAUTHORIZED");
        assert_eq!(
            status_text(StatusCode::INTERNAL_SERVER_ERROR),
            "INTERNAL SERVER ERROR"
        );
    }

    #[test]
    fn null_data_is_serialized_explicitly() {
        let body = serde_json::to_value(WebResponse::ok(())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "code": 200, "status": "OK", "data": null })
        );
    }

    #[test]
    fn into_response_uses_envelope_code() {
        let response = WebResponse::new(StatusCode::NOT_FOUND, "missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
