#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("malformed identity token: {0}")]
    Malformed(&'static str),

    #[error("identity token has no subject")]
    MissingSubject,

    #[error("identity provider responded with status {0}")]
    UpstreamStatus(u16),

    #[error("identity provider unreachable: {0}")]
    UpstreamUnreachable(reqwest::Error),

    #[error("identity provider response not parsable: {0}")]
    Parse(String),

    #[error("identity provider profile has no nickname")]
    MissingField,
}
