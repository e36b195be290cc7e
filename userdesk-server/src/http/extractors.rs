//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Multipart, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::{Form, Json};
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::models::FormFields;

/// Extract and validate an integer user id from the path
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::InvalidParam {
                name: "user_id",
                reason: e.body_text(),
            })?;

        let id = raw.parse::<i64>().map_err(|_| ApiError::InvalidParam {
            name: "user_id",
            reason: format!("'{}' is not a valid integer", raw),
        })?;

        Ok(Self(id))
    }
}

/// Collect a submitted form regardless of encoding.
///
/// The FastUI front-end posts `multipart/form-data`; urlencoded bodies and
/// flat JSON objects are accepted too.
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            from_multipart(req, state).await
        } else if content_type.starts_with("application/json") {
            let Json(object): Json<Map<String, Value>> = Json::from_request(req, state)
                .await
                .map_err(|e| bad_request(e.body_text()))?;
            Ok(from_json(object))
        } else {
            let Form(pairs): Form<Vec<(String, String)>> = Form::from_request(req, state)
                .await
                .map_err(|e| bad_request(e.body_text()))?;
            Ok(FormFields::new(pairs))
        }
    }
}

async fn from_multipart<S>(req: Request, state: &S) -> Result<FormFields, ApiError>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| bad_request(e.body_text()))?;

    let mut pairs = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await.map_err(|e| bad_request(e.body_text()))?;
        pairs.push((name, value));
    }

    Ok(FormFields::new(pairs))
}

fn from_json(object: Map<String, Value>) -> FormFields {
    object
        .into_iter()
        .filter_map(|(key, value)| {
            let text = match value {
                Value::Null => return None,
                Value::String(s) => s,
                other => other.to_string(),
            };
            Some((key, text))
        })
        .collect()
}

fn bad_request(message: String) -> ApiError {
    ApiError::BadRequest { message }
}
