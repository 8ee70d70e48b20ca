use axum::{
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::HandlerError;
use crate::models::OutgoingResult;

pub const ALLOW_HEADERS: &str = "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const ALLOW_METHODS: &str = "OPTIONS,POST";

// Event handed to the function by the hosting platform.
// Only the fields this function reads are modelled, the rest is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEvent {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<Authorizer>,
}

// Claims attached by the identity provider. Read for logging only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorizer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claims: Option<HashMap<String, serde_json::Value>>,
}

impl InboundEvent {
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(body.into()),
            request_context: None,
        }
    }

    pub fn claims(&self) -> Option<&HashMap<String, serde_json::Value>> {
        self.request_context
            .as_ref()?
            .authorizer
            .as_ref()?
            .claims
            .as_ref()
    }

    // email first, then the user pool username
    pub fn user_identity(&self) -> Option<&str> {
        let claims = self.claims()?;
        ["email", "cognito:username"]
            .iter()
            .filter_map(|key| claims.get(*key).and_then(|v| v.as_str()))
            .find(|v| !v.is_empty())
    }
}

// Response handed back to the hosting platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundEvent {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn cors_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ("Access-Control-Allow-Headers".to_string(), ALLOW_HEADERS.to_string()),
        ("Access-Control-Allow-Methods".to_string(), ALLOW_METHODS.to_string()),
    ])
}

impl OutboundEvent {
    pub fn from_result(result: Result<OutgoingResult, HandlerError>) -> Self {
        let (status_code, outgoing) = match result {
            Ok(outgoing) => (200, outgoing),
            Err(e) => (500, OutgoingResult::failure(e.to_string())),
        };

        let body = serde_json::to_string(&outgoing)
            .unwrap_or_else(|_| r#"{"success":false,"error":"Failed to encode response"}"#.to_string());

        Self {
            status_code,
            headers: cors_headers(),
            body,
        }
    }

    // Preflight answer for browsers
    pub fn preflight() -> Self {
        Self {
            status_code: 200,
            headers: cors_headers(),
            body: String::new(),
        }
    }
}

// Lets the same envelope be served over plain HTTP
impl IntoResponse for OutboundEvent {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }

        (status, headers, self.body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_email_claim() {
        let event: InboundEvent = serde_json::from_str(
            r#"{"body":"{}","requestContext":{"authorizer":{"claims":{"email":"a@b.c","cognito:username":"abc"}}}}"#,
        )
        .unwrap();
        assert_eq!(event.user_identity(), Some("a@b.c"));
    }

    #[test]
    fn falls_back_to_username_claim() {
        let event: InboundEvent = serde_json::from_str(
            r#"{"requestContext":{"authorizer":{"claims":{"cognito:username":"abc"}}}}"#,
        )
        .unwrap();
        assert_eq!(event.user_identity(), Some("abc"));
        assert!(event.body.is_none());
    }

    #[test]
    fn authorizer_without_claims_is_fine() {
        let event: InboundEvent =
            serde_json::from_str(r#"{"body":"x","requestContext":{"authorizer":{}}}"#).unwrap();
        assert!(event.claims().is_none());
        assert!(event.user_identity().is_none());
    }

    #[test]
    fn error_maps_to_500_with_cors() {
        let out = OutboundEvent::from_result(Err(HandlerError::Validation("bad body".into())));
        assert_eq!(out.status_code, 500);
        assert_eq!(out.headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(out.headers["Access-Control-Allow-Methods"], "OPTIONS,POST");

        let body: serde_json::Value = serde_json::from_str(&out.body).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "bad body");
    }

    #[test]
    fn serializes_with_platform_field_names() {
        let out = OutboundEvent::from_result(Ok(OutgoingResult::success("ok".into(), vec![])));
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert!(value["body"].is_string());
    }
}
