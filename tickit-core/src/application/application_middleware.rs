use super::ApplicationEnv;
use crate::auth::SessionAuthLayer;
use jwt_auth::SessionTokens;
use axum::extract::DefaultBodyLimit;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct ApplicationMiddleware {
    pub auth: SessionAuthLayer,
    pub body_limit: DefaultBodyLimit,
    pub trace: TraceLayer<SharedClassifier<ServerErrorsAsFailures>>,
}

pub fn create_middleware(
    env: &ApplicationEnv,
    session_tokens: SessionTokens,
) -> ApplicationMiddleware {
    let auth = SessionAuthLayer::new(session_tokens);
    // exceeding the limit rejects the Json extractor with 413
    let body_limit = DefaultBodyLimit::max(env.max_http_content_len);
    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware {
        auth,
        body_limit,
        trace,
    }
}
