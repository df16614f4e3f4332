use super::IdentityError;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::Deserialize;

#[derive(Deserialize)]
struct IdTokenClaims {
    #[serde(default)]
    sub: Option<String>,
}

///
/// Extract subject claim from OpenID Connect identity token.
///
/// Signature of the token is NOT verified, only the payload is read.
///
/// ### Errors
/// - [IdentityError::Malformed] when token is not three dot-separated segments
///   or payload is not base64url encoded JSON object
/// - [IdentityError::MissingSubject] when `sub` claim is missing or empty
///
pub fn decode_subject(id_token: &str) -> Result<String, IdentityError> {
    let segments = id_token.split('.').collect::<Vec<_>>();
    let [_, payload, _] = segments.as_slice() else {
        return Err(IdentityError::Malformed("expected three segments"));
    };

    let payload = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| IdentityError::Malformed("payload is not base64url"))?;
    let claims = serde_json::from_slice::<IdTokenClaims>(&payload)
        .map_err(|_| IdentityError::Malformed("payload is not JSON object"))?;

    match claims.sub {
        Some(sub) if !sub.is_empty() => Ok(sub),
        _ => Err(IdentityError::MissingSubject),
    }
}
