use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::errors::HttpError;

/// Query string extractor that keeps the first value of a repeated key.
///
/// Plain `Query<T>` rejects `?search=a&search=b` with its own text body
/// before the handler runs; here the later values are ignored and any
/// remaining failure comes back as an `HttpError`.
pub struct FirstValueQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for FirstValueQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        let mut first = Map::new();
        for (key, value) in pairs {
            first.entry(key).or_insert(Value::String(value));
        }

        serde_json::from_value(Value::Object(first))
            .map(Self)
            .map_err(|e| HttpError::BadRequest(format!("Invalid query string: {e}")))
    }
}
