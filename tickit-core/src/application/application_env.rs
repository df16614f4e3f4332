use anyhow::anyhow;
use jsonwebtoken::Algorithm;
use jwt_auth::util::{parse_jwt_algorithm, parse_jwt_secret};
use std::{net::SocketAddr, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    pub jwt_algorithm: Algorithm,
    pub jwt_secret: Vec<u8>,

    pub kakao_profile_url: String,
    pub kakao_timeout: Duration,

    /// Host without bucket, e.g. `s3.ap-northeast-2.amazonaws.com`
    pub s3_endpoint: String,
    pub s3_region: String,
    pub s3_bucket: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKIT_CORE_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKIT_CORE_LOG_FILENAME")?;
        let bind_address = Self::env_var("TICKIT_CORE_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("TICKIT_CORE_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("TICKIT_CORE_DB_NAME")?;
        let max_http_content_len = Self::env_var("TICKIT_CORE_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithm = parse_jwt_algorithm(&Self::env_var("TICKIT_CORE_JWT_ALGORITHM")?)?;
        let jwt_secret = parse_jwt_secret(Self::env_var("TICKIT_CORE_JWT_SECRET")?)?;
        let kakao_profile_url = Self::env_var("TICKIT_CORE_KAKAO_PROFILE_URL")?;
        let kakao_timeout = Self::env_var("TICKIT_CORE_KAKAO_TIMEOUT")?.parse()?;
        let kakao_timeout = Duration::from_secs(kakao_timeout);
        let s3_endpoint = Self::env_var("TICKIT_CORE_S3_ENDPOINT")?;
        let s3_region = Self::env_var("TICKIT_CORE_S3_REGION")?;
        let s3_bucket = Self::env_var("TICKIT_CORE_S3_BUCKET")?;
        let s3_access_key = Self::env_var("TICKIT_CORE_S3_ACCESS_KEY")?;
        let s3_secret_key = Self::env_var("TICKIT_CORE_S3_SECRET_KEY")?;

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            jwt_algorithm,
            jwt_secret,
            kakao_profile_url,
            kakao_timeout,
            s3_endpoint,
            s3_region,
            s3_bucket,
            s3_access_key,
            s3_secret_key,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
