//! Request and response payloads for the HTTP API.
//!
//! Every payload is a flat JSON object. Identifiers taken from the path are
//! echoed back as strings; created resources always report integer id `1`.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// Arbitrary JSON object accepted as a product request body.
///
/// Field values may be any JSON, nested objects and arrays included.
/// Anything that is not a JSON object is rejected by the `Json` extractor.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct JsonObject(pub HashMap<String, Value>);

/// Flat string-valued JSON object accepted by the auth, settings and user
/// routes.
///
/// Strings are kept verbatim, numbers and booleans are converted to their
/// text form and `null` is kept as an absent value. A nested object or array
/// under any key fails deserialization, so the `Json` extractor rejects it.
#[derive(Debug, Clone, Default, ToSchema)]
#[schema(value_type = Object)]
pub struct StringObject(pub HashMap<String, Option<String>>);

impl StringObject {
    /// Look up a top-level field; `null` reads as `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    /// Read a field, missing or `null` as the empty string.
    pub fn text_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }
}

impl<'de> Deserialize<'de> for StringObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, Value>::deserialize(deserializer)?;

        raw.into_iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::Null => None,
                    Value::String(s) => Some(s),
                    Value::Bool(b) => Some(b.to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Array(_) | Value::Object(_) => {
                        return Err(de::Error::custom(format!(
                            "field `{key}` must be a string, number or boolean"
                        )));
                    }
                };
                Ok((key, text))
            })
            .collect::<Result<HashMap<_, _>, _>>()
            .map(Self)
    }
}

/// Query-string helper: an empty value (`?page=`) reads as absent rather
/// than failing to parse.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}

/// `{ "message": ... }`
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: String,
}

/// Query string for `GET /search`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search text.
    pub q: Option<String>,
    /// Page number, 1 when omitted or empty.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i32>,
}

/// Search echo.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub query: String,
    pub page: i32,
}

/// Settings update echo.
#[derive(Debug, Serialize, ToSchema)]
pub struct SettingsResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    /// `theme` from the request body, empty when absent.
    pub theme: String,
}

/// Session deletion acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionDeletedResponse {
    pub message: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Echo of a path identifier.
#[derive(Debug, Serialize, ToSchema)]
pub struct IdResponse {
    pub id: String,
}

/// Id assigned to a newly created resource.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: u64,
}

impl CreatedResponse {
    /// Every create handler reports the same id.
    pub const STUB_ID: u64 = 1;

    pub fn stub() -> Self {
        Self { id: Self::STUB_ID }
    }
}

/// Query string for `GET /products`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Category filter (accepted, not applied).
    pub category: Option<String>,
}

/// Query string for `GET /users`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListParams {
    /// Page number (accepted, not applied).
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i32>,
    /// Page size (accepted, not applied).
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ProductListResponse {
    #[schema(value_type = Vec<Object>)]
    pub products: Vec<Value>,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ReviewListResponse {
    #[schema(value_type = Vec<Object>)]
    pub reviews: Vec<Value>,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct UserListResponse {
    #[schema(value_type = Vec<Object>)]
    pub users: Vec<Value>,
}

#[derive(Debug, Default, Serialize, ToSchema)]
pub struct PostListResponse {
    #[schema(value_type = Vec<Object>)]
    pub posts: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use axum::extract::Query;
    use serde_json::json;

    #[test]
    fn string_object_coerces_scalars() {
        let body: StringObject = serde_json::from_value(
            json!({"theme": "dark", "size": 3, "flag": true, "none": null}),
        )
        .unwrap();

        assert_eq!(body.text_or_empty("theme"), "dark");
        assert_eq!(body.text_or_empty("size"), "3");
        assert_eq!(body.text_or_empty("flag"), "true");
        assert_eq!(body.get("none"), None);
        assert_eq!(body.text_or_empty("none"), "");
        assert_eq!(body.text_or_empty("missing"), "");
    }

    #[test]
    fn string_object_rejects_nested_values() {
        let err = serde_json::from_value::<StringObject>(json!({"theme": {"a": 1}})).unwrap_err();
        assert!(err.to_string().contains("theme"));

        assert!(serde_json::from_value::<StringObject>(json!({"tags": ["a"]})).is_err());
        assert!(serde_json::from_value::<StringObject>(json!(["a"])).is_err());
    }

    #[test]
    fn json_object_accepts_nested_but_rejects_arrays() {
        assert!(serde_json::from_value::<JsonObject>(json!({"tags": ["a"], "dims": {"w": 1}})).is_ok());
        assert!(serde_json::from_value::<JsonObject>(json!([1, 2])).is_err());
    }

    #[test]
    fn empty_query_values_read_as_absent() {
        let uri: axum::http::Uri = "/search?q=&page=".parse().unwrap();
        let Query(params) = Query::<SearchParams>::try_from_uri(&uri).unwrap();
        assert_eq!(params.q.as_deref(), Some(""));
        assert_eq!(params.page, None);

        let uri: axum::http::Uri = "/users?page=&limit=20".parse().unwrap();
        let Query(params) = Query::<UserListParams>::try_from_uri(&uri).unwrap();
        assert_eq!(params.page, None);
        assert_eq!(params.limit, Some(20));

        let uri: axum::http::Uri = "/users?limit=ten".parse().unwrap();
        assert!(Query::<UserListParams>::try_from_uri(&uri).is_err());
    }

    #[test]
    fn camel_case_keys_on_echo_responses() {
        let settings = SettingsResponse {
            user_id: "42".to_string(),
            theme: String::new(),
        };
        assert_eq!(
            serde_json::to_value(settings).unwrap(),
            json!({"userId": "42", "theme": ""})
        );

        let session = SessionDeletedResponse {
            message: "Session deleted".to_string(),
            session_id: "abc".to_string(),
        };
        assert_eq!(
            serde_json::to_value(session).unwrap(),
            json!({"message": "Session deleted", "sessionId": "abc"})
        );
    }
}
