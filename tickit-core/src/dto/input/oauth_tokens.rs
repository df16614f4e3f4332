use serde::Deserialize;

///
/// Tokens received by the client from identity provider.
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthTokens {
    pub access_token: String,
    pub id_token: String,

    /// Provider's refresh token, not used by the server
    #[serde(default)]
    pub refresh_token: String,
}
