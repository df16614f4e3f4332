use super::ApplicationEnv;
use crate::{
    repository::{SchedulesRepositoryImpl, TicketsRepositoryImpl, UsersRepositoryImpl},
    service::{
        KakaoIdentityService, S3StorageService, SchedulesService, SchedulesServiceImpl,
        TicketsService, TicketsServiceImpl, UploadsService, UploadsServiceImpl, UsersService,
        UsersServiceImpl,
    },
};
use axum::extract::FromRef;
use jwt_auth::SessionTokens;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub tickets_service: Arc<dyn TicketsService>,
    pub schedules_service: Arc<dyn SchedulesService>,
    pub users_service: Arc<dyn UsersService>,
    pub uploads_service: Arc<dyn UploadsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
    session_tokens: SessionTokens,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(db.clone()).await?;
    let tickets_repository = Arc::new(tickets_repository);

    let schedules_repository = SchedulesRepositoryImpl::new(db.clone()).await?;
    let schedules_repository = Arc::new(schedules_repository);

    let users_repository = UsersRepositoryImpl::new(db).await?;
    let users_repository = Arc::new(users_repository);

    tracing::info!("creating services");
    let tickets_service = TicketsServiceImpl::new(tickets_repository);
    let tickets_service = Arc::new(tickets_service);

    let schedules_service = SchedulesServiceImpl::new(schedules_repository);
    let schedules_service = Arc::new(schedules_service);

    let identity_service =
        KakaoIdentityService::new(env.kakao_profile_url.clone(), env.kakao_timeout)?;
    let identity_service = Arc::new(identity_service);

    let users_service = UsersServiceImpl::new(session_tokens, identity_service, users_repository);
    let users_service = Arc::new(users_service);

    let storage_service = S3StorageService::new(
        &env.s3_endpoint,
        env.s3_region.clone(),
        &env.s3_bucket,
        env.s3_access_key.clone(),
        env.s3_secret_key.clone(),
    );
    let storage_service = Arc::new(storage_service);

    let uploads_service = UploadsServiceImpl::new(storage_service);
    let uploads_service = Arc::new(uploads_service);

    Ok((
        ApplicationState {
            tickets_service,
            schedules_service,
            users_service,
            uploads_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
