//! Encoders turning a [`HeaderStore`] into request data.
//!
//! Escaping follows `application/x-www-form-urlencoded`: unreserved
//! characters pass through, space becomes `+`, everything else is
//! percent-encoded. Order is the store's key order.

use url::form_urlencoded;

use crate::headers::HeaderStore;

/// Form body pairs, serialized by the HTTP client.
pub type FormPayload = Vec<(String, String)>;

/// Encode the store as a URL query suffix.
///
/// Returns `""` for an empty store, otherwise `?k1=v1&k2=v2`.
pub fn encode_as_query_string(headers: &HeaderStore) -> String {
    if headers.is_empty() {
        return String::new();
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in headers.iter() {
        serializer.append_pair(name, value);
    }
    format!("?{}", serializer.finish())
}

/// Encode the store as form payload pairs. An empty store yields an empty payload.
pub fn encode_as_form_payload(headers: &HeaderStore) -> FormPayload {
    headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
