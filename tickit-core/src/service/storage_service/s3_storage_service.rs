use super::{StorageError, StorageService};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use time::{macros::format_description, Duration, OffsetDateTime, UtcOffset};

type HmacSha256 = Hmac<Sha256>;

pub const UPLOAD_URL_LIFESPAN: Duration = Duration::minutes(15);

const ALGORITHM: &str = "AWS4-HMAC-SHA256";
const SERVICE: &str = "s3";
const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

///
/// Presigns object URLs of S3 compatible bucket with AWS Signature Version 4.
/// Signing is done locally, no request is sent to the object store.
///
pub struct S3StorageService {
    host: String,
    region: String,
    access_key: String,
    secret_key: String,
}

impl S3StorageService {
    ///
    /// Objects are addressed virtual-host style: `{bucket}.{endpoint}`
    ///
    pub fn new(
        endpoint: &str,
        region: String,
        bucket: &str,
        access_key: String,
        secret_key: String,
    ) -> Self {
        Self {
            host: format!("{bucket}.{endpoint}"),
            region,
            access_key,
            secret_key,
        }
    }

    fn presign(
        &self,
        method: &str,
        key: &str,
        now: OffsetDateTime,
        expires_in: Duration,
    ) -> Result<String, StorageError> {
        let now = now.to_offset(UtcOffset::UTC);
        let amz_date = now.format(format_description!(
            "[year][month][day]T[hour][minute][second]Z"
        ))?;
        let date_stamp = now.format(format_description!("[year][month][day]"))?;

        let scope = format!("{date_stamp}/{}/{SERVICE}/aws4_request", self.region);
        let credential = format!("{}/{scope}", self.access_key);

        let path = key
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let uri = format!("/{path}");

        // parameters have to be sorted by name
        let query = [
            ("X-Amz-Algorithm", ALGORITHM.to_string()),
            ("X-Amz-Credential", credential),
            ("X-Amz-Date", amz_date.clone()),
            ("X-Amz-Expires", expires_in.whole_seconds().to_string()),
            ("X-Amz-SignedHeaders", "host".to_string()),
        ]
        .iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

        let canonical_request = format!(
            "{method}\n{uri}\n{query}\nhost:{}\n\nhost\n{UNSIGNED_PAYLOAD}",
            self.host
        );
        let string_to_sign = format!(
            "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
            hex::encode(Sha256::digest(canonical_request.as_bytes()))
        );

        let secret = format!("AWS4{}", self.secret_key);
        let signing_key = [
            date_stamp.as_bytes(),
            self.region.as_bytes(),
            SERVICE.as_bytes(),
            "aws4_request".as_bytes(),
        ]
        .into_iter()
        .try_fold(secret.into_bytes(), |key, data| hmac_sha256(&key, data))?;
        let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes())?);

        Ok(format!(
            "https://{}{uri}?{query}&X-Amz-Signature={signature}",
            self.host
        ))
    }
}

impl StorageService for S3StorageService {
    fn presign_upload(&self, key: &str) -> Result<String, StorageError> {
        let url = self.presign("PUT", key, OffsetDateTime::now_utc(), UPLOAD_URL_LIFESPAN)?;
        tracing::debug!(key, "presigned upload url");

        Ok(url)
    }
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, StorageError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| StorageError::SigningKey)?;
    mac.update(data);

    Ok(mac.finalize().into_bytes().to_vec())
}
