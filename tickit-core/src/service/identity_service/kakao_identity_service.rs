use super::{IdentityError, IdentityProfile, IdentityService};
use anyhow::Context;
use axum::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Deserialize)]
struct KakaoProfile {
    #[serde(rename = "nickName", default)]
    nick_name: String,
}

///
/// Reads user profiles from Kakao talk profile API.
///
pub struct KakaoIdentityService {
    http_client: reqwest::Client,
    profile_url: String,
}

impl KakaoIdentityService {
    pub fn new(profile_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed building identity provider HTTP client")?;

        Ok(Self {
            http_client,
            profile_url,
        })
    }
}

#[async_trait]
impl IdentityService for KakaoIdentityService {
    async fn fetch_profile(&self, access_token: &str) -> Result<IdentityProfile, IdentityError> {
        tracing::debug!(url = %self.profile_url, "fetching identity profile");

        let response = self
            .http_client
            .get(&self.profile_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(IdentityError::UpstreamUnreachable)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body, "identity provider rejected profile request");
            return Err(IdentityError::UpstreamStatus(status.as_u16()));
        }

        let profile = response
            .json::<KakaoProfile>()
            .await
            .map_err(|err| IdentityError::Parse(err.to_string()))?;

        if profile.nick_name.is_empty() {
            return Err(IdentityError::MissingField);
        }

        tracing::debug!("fetched identity profile");

        Ok(IdentityProfile {
            nick_name: profile.nick_name,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::{
        http::{header::AUTHORIZATION, HeaderMap, StatusCode},
        response::IntoResponse,
        routing::get,
        Router,
    };
    use tokio::net::TcpListener;

    async fn profile(headers: HeaderMap) -> impl IntoResponse {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        match authorization {
            "Bearer valid" => (
                StatusCode::OK,
                r#"{"nickName":"Gildong","profileImageURL":"https://k.kakaocdn.net/p.jpg"}"#,
            ),
            "Bearer nameless" => (StatusCode::OK, r#"{"nickName":""}"#),
            "Bearer garbage" => (StatusCode::OK, "<html></html>"),
            _ => (StatusCode::UNAUTHORIZED, r#"{"code":-401}"#),
        }
    }

    async fn spawn_provider() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let router = Router::new().route("/v1/api/talk/profile", get(profile));
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });

        format!("http://{address}/v1/api/talk/profile")
    }

    async fn service() -> KakaoIdentityService {
        KakaoIdentityService::new(spawn_provider().await, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn fetch_profile_ok() {
        let service = service().await;

        let profile = service.fetch_profile("valid").await.unwrap();

        assert_eq!(profile.nick_name, "Gildong");
    }

    #[tokio::test]
    async fn fetch_profile_rejected_token() {
        let service = service().await;

        let result = service.fetch_profile("expired").await;

        assert!(matches!(result, Err(IdentityError::UpstreamStatus(401))));
    }

    #[tokio::test]
    async fn fetch_profile_empty_nickname() {
        let service = service().await;

        let result = service.fetch_profile("nameless").await;

        assert!(matches!(result, Err(IdentityError::MissingField)));
    }

    #[tokio::test]
    async fn fetch_profile_not_json() {
        let service = service().await;

        let result = service.fetch_profile("garbage").await;

        assert!(matches!(result, Err(IdentityError::Parse(_))));
    }

    #[tokio::test]
    async fn fetch_profile_provider_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let service =
            KakaoIdentityService::new(format!("http://{address}/"), Duration::from_secs(5))
                .unwrap();

        let result = service.fetch_profile("valid").await;

        assert!(matches!(result, Err(IdentityError::UpstreamUnreachable(_))));
    }
}
