// EchoedJson - JSON Extractor With Echoed Diagnostics
// Like axum's Json, but a parse failure answers 422 with the error list
// and the raw request body so clients can see exactly what they sent

use crate::error::ApiError;
use crate::validation::FieldError;
use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

pub struct EchoedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for EchoedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| anyhow::anyhow!("failed to buffer request body: {err}"))?;

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(EchoedJson(value)),
            Err(err) => {
                // Log the parse error only; the body goes back to the client
                tracing::warn!("rejecting request body: {err}");
                Err(ApiError::Validation {
                    errors: vec![FieldError::new("body", err.to_string(), "json")],
                    body: Some(String::from_utf8_lossy(&bytes).into_owned()),
                })
            }
        }
    }
}
