mod application;
mod auth;
mod date_time;
mod dto;
mod error;
mod repository;
mod routing;
mod service;

use application::ApplicationEnv;
use jwt_auth::SessionTokens;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set.
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let session_tokens = SessionTokens::new(env.jwt_algorithm, &env.jwt_secret);

    let (state, state_to_close) =
        application::create_state(&env, session_tokens.clone()).await?;
    let middleware = application::create_middleware(&env, session_tokens);
    let app = application::create_application(state, middleware);

    tracing::info!("listening on {}", env.bind_address);
    let listener = TcpListener::bind(env.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(application::shutdown_signal())
        .await?;

    application::close(state_to_close).await;

    Ok(())
}
