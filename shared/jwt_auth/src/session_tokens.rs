use crate::{
    dto::Claims,
    error::{IssueError, ValidationError},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};

pub const ACCESS_TOKEN_LIFESPAN: Duration = Duration::minutes(30);
pub const REFRESH_TOKEN_LIFESPAN: Duration = Duration::days(30);

///
/// Issues and validates signed session tokens.
///
/// Service has no state other than the signing secret,
/// cloning is cheap because keys are kept behind an Arc.
///
#[derive(Clone)]
pub struct SessionTokens {
    inner: Arc<SessionTokensInner>,
}

struct SessionTokensInner {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionTokens {
    pub fn new(algorithm: Algorithm, secret: &[u8]) -> Self {
        // expiration is checked manually in validate_at
        // so it's possible to evaluate token against any instant
        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;

        let inner = SessionTokensInner {
            header: Header::new(algorithm),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        };

        Self {
            inner: Arc::new(inner),
        }
    }

    ///
    /// Issues short-lived token used to authorize requests.
    ///
    pub fn issue_access(&self, user_id: &str) -> Result<String, IssueError> {
        self.issue_access_at(user_id, OffsetDateTime::now_utc())
    }

    pub fn issue_access_at(
        &self,
        user_id: &str,
        issued_at: OffsetDateTime,
    ) -> Result<String, IssueError> {
        let (token, _) = self.issue(user_id, issued_at, ACCESS_TOKEN_LIFESPAN)?;

        Ok(token)
    }

    ///
    /// Issues long-lived token that can be exchanged for new access token.
    ///
    /// ### Returns
    /// token and the instant it expires at. Caller is responsible for storing both
    /// if token should be compared later.
    ///
    pub fn issue_refresh(&self, user_id: &str) -> Result<(String, OffsetDateTime), IssueError> {
        self.issue_refresh_at(user_id, OffsetDateTime::now_utc())
    }

    pub fn issue_refresh_at(
        &self,
        user_id: &str,
        issued_at: OffsetDateTime,
    ) -> Result<(String, OffsetDateTime), IssueError> {
        self.issue(user_id, issued_at, REFRESH_TOKEN_LIFESPAN)
    }

    ///
    /// Validates token signature and expiration.
    ///
    /// ### Returns
    /// ID of the user token was issued for
    ///
    /// ### Errors
    /// - [ValidationError::InvalidSignature] when token was not signed with this secret
    /// - [ValidationError::Expired] when token expiration instant passed
    /// - [ValidationError::Malformed] in any other case
    ///
    pub fn validate(&self, token: &str) -> Result<String, ValidationError> {
        self.validate_at(token, OffsetDateTime::now_utc())
    }

    pub fn validate_at(&self, token: &str, now: OffsetDateTime) -> Result<String, ValidationError> {
        let token_data = jsonwebtoken::decode::<Claims>(
            token,
            &self.inner.decoding_key,
            &self.inner.validation,
        )?;

        if now.unix_timestamp() >= token_data.claims.exp {
            return Err(ValidationError::Expired);
        }

        Ok(token_data.claims.user_id)
    }

    fn issue(
        &self,
        user_id: &str,
        issued_at: OffsetDateTime,
        lifespan: Duration,
    ) -> Result<(String, OffsetDateTime), IssueError> {
        let expire_at = issued_at + lifespan;
        let claims = Claims {
            user_id: user_id.to_string(),
            iat: issued_at.unix_timestamp(),
            exp: expire_at.unix_timestamp(),
        };

        let token = jsonwebtoken::encode(&self.inner.header, &claims, &self.inner.encoding_key)?;
        tracing::debug!(%expire_at, "issued session token");

        Ok((token, expire_at))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use jsonwebtoken::Algorithm;

    const USER_ID: &str = "65f1c0ffee0ddba11ca7b0a7";

    fn session_tokens() -> SessionTokens {
        SessionTokens::new(Algorithm::HS256, b"some secret")
    }

    #[test]
    fn validate_access_token_right_after_issue() {
        let tokens = session_tokens();

        let token = tokens.issue_access(USER_ID).unwrap();
        let user_id = tokens.validate(&token).unwrap();

        assert_eq!(user_id, USER_ID);
    }

    #[test]
    fn validate_access_token_before_expiration() {
        let tokens = session_tokens();
        let issued_at = OffsetDateTime::now_utc();

        let token = tokens.issue_access_at(USER_ID, issued_at).unwrap();
        let result = tokens.validate_at(&token, issued_at + Duration::minutes(29));

        assert_eq!(result.unwrap(), USER_ID);
    }

    #[test]
    fn validate_access_token_at_expiration() {
        let tokens = session_tokens();
        let issued_at = OffsetDateTime::now_utc();

        let token = tokens.issue_access_at(USER_ID, issued_at).unwrap();
        let result = tokens.validate_at(&token, issued_at + ACCESS_TOKEN_LIFESPAN);

        assert!(matches!(result, Err(ValidationError::Expired)));
    }

    #[test]
    fn validate_access_token_after_expiration() {
        let tokens = session_tokens();
        let issued_at = OffsetDateTime::now_utc() - Duration::hours(1);

        let token = tokens.issue_access_at(USER_ID, issued_at).unwrap();
        let result = tokens.validate(&token);

        assert!(matches!(result, Err(ValidationError::Expired)));
    }

    #[test]
    fn validate_refresh_token_lives_longer_than_access_token() {
        let tokens = session_tokens();
        let issued_at = OffsetDateTime::now_utc();

        let (token, expire_at) = tokens.issue_refresh_at(USER_ID, issued_at).unwrap();

        assert_eq!(expire_at, issued_at + REFRESH_TOKEN_LIFESPAN);
        let result = tokens.validate_at(&token, issued_at + Duration::days(29));
        assert_eq!(result.unwrap(), USER_ID);
        let result = tokens.validate_at(&token, issued_at + Duration::days(31));
        assert!(matches!(result, Err(ValidationError::Expired)));
    }

    #[test]
    fn validate_token_signed_with_other_secret() {
        let other = SessionTokens::new(Algorithm::HS256, b"other secret");
        let token = other.issue_access(USER_ID).unwrap();

        let result = session_tokens().validate(&token);

        assert!(matches!(result, Err(ValidationError::InvalidSignature)));
    }

    #[test]
    fn validate_token_with_tampered_payload() {
        let tokens = session_tokens();
        let token = tokens.issue_access(USER_ID).unwrap();
        let other_token = tokens.issue_access("65f1c0ffee0ddba11ca7b0a8").unwrap();

        // payload of one token with signature of another
        let mut parts = token.split('.').collect::<Vec<_>>();
        let other_parts = other_token.split('.').collect::<Vec<_>>();
        parts[1] = other_parts[1];
        let tampered = parts.join(".");

        let result = tokens.validate(&tampered);

        assert!(matches!(result, Err(ValidationError::InvalidSignature)));
    }

    #[test]
    fn validate_garbage() {
        let result = session_tokens().validate("that's not correct JWT");

        assert!(matches!(result, Err(ValidationError::Malformed(_))));
    }

    #[test]
    fn validate_token_signed_with_other_algorithm() {
        let other = SessionTokens::new(Algorithm::HS512, b"some secret");
        let token = other.issue_access(USER_ID).unwrap();

        let result = session_tokens().validate(&token);

        assert!(matches!(result, Err(ValidationError::Malformed(_))));
    }

    #[test]
    fn validate_token_without_user_id() {
        let claims = serde_json::json!({
            "iat": OffsetDateTime::now_utc().unix_timestamp(),
            "exp": (OffsetDateTime::now_utc() + Duration::hours(1)).unix_timestamp(),
        });
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"some secret"),
        )
        .unwrap();

        let result = session_tokens().validate(&token);

        assert!(matches!(result, Err(ValidationError::Malformed(_))));
    }
}
