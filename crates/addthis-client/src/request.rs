//! URL, query and response handling shared by the async and blocking clients.

use crate::error::ClientError;
use crate::types::{ApiErrorResponse, QueryParams, EXPECTED_SEGMENTS, PUBID_PARAM};

/// Build `{base_url}{metric}/{dimension}.json`. `base_url` must end with `/`.
pub(crate) fn request_url(base_url: &str, metric: &str, dimension: &str) -> String {
    format!("{base_url}{metric}/{dimension}.json")
}

/// Add the default publisher id unless the caller already chose one.
pub(crate) fn merge_query(mut params: QueryParams, default_pubid: Option<&str>) -> QueryParams {
    if let Some(pubid) = default_pubid.filter(|p| !p.is_empty()) {
        params
            .entry(PUBID_PARAM.to_string())
            .or_insert_with(|| pubid.to_string());
    }
    params
}

/// Split an accumulated path into metric and dimension.
pub(crate) fn split_path(segments: &[String]) -> Result<(&str, &str), ClientError> {
    match segments {
        [metric, dimension] => Ok((metric.as_str(), dimension.as_str())),
        _ => Err(ClientError::Validation {
            expected: EXPECTED_SEGMENTS,
            actual: segments.len(),
        }),
    }
}

/// Map a response to the parsed body or an API error.
pub(crate) fn parse_body(status: u16, body: &[u8]) -> Result<serde_json::Value, ClientError> {
    if status != 200 {
        let api_error: ApiErrorResponse = serde_json::from_slice(body)?;
        tracing::warn!(
            status,
            code = api_error.error.code,
            message = %api_error.error.message,
            "AddThis API returned an error"
        );
        return Err(api_error.into_error(status));
    }

    tracing::debug!(status, bytes = body.len(), "AddThis API request succeeded");
    Ok(serde_json::from_slice(body)?)
}
