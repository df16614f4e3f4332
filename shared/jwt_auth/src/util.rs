use anyhow::anyhow;
use jsonwebtoken::Algorithm;
use std::str::FromStr;

///
/// Parses algorithm used to sign session tokens.
///
/// Tokens are signed and verified with one shared secret
/// so only HMAC family is accepted.
///
pub fn parse_jwt_algorithm(jwt_algorithm: &str) -> anyhow::Result<Algorithm> {
    let algorithm = Algorithm::from_str(jwt_algorithm)
        .map_err(|err| anyhow!("invalid algorithm: {err}"))?;

    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        algorithm => Err(anyhow!(
            "unsupported algorithm {algorithm:?}, expected one of HS256, HS384, HS512"
        )),
    }
}

///
/// Rejects secrets that are obviously unusable.
///
pub fn parse_jwt_secret(jwt_secret: String) -> anyhow::Result<Vec<u8>> {
    if jwt_secret.trim().is_empty() {
        return Err(anyhow!("jwt secret cannot be empty"));
    }

    Ok(jwt_secret.into_bytes())
}
