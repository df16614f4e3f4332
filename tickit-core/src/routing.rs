use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::User,
    dto::{input, output, output::Envelope},
    error::Error,
    service::{SchedulesService, TicketsService, UploadsService, UsersService},
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/auth", get(get_profile).delete(delete_user))
        .route("/api/v1/auth/logout", delete(delete_session))
        .route("/api/v1/tickets", get(get_tickets).post(post_ticket))
        .route(
            "/api/v1/tickets/:id",
            get(get_ticket).put(put_ticket).delete(delete_ticket),
        )
        .route("/api/v1/schedules", get(get_schedules).post(post_schedule))
        .route("/api/v1/schedules/for-ticket", get(get_schedules_for_ticket))
        .route(
            "/api/v1/schedules/:id",
            get(get_schedule).put(put_schedule).delete(delete_schedule),
        )
        .route("/api/v1/s3/presigned-url", get(get_upload_url))
        .route_layer(application_middleware.auth.clone())
        .route("/api/v1/health", get(get_health))
        .route("/api/v1/auth/kakao/register", post(post_register))
        .route("/api/v1/auth/kakao/login", post(post_login))
        .route("/api/v1/auth/refresh", post(post_refresh))
}

// HEALTH

async fn get_health() -> Envelope<output::Health> {
    Envelope::ok("server is running", output::Health { status: "ok" })
}

// AUTH

async fn post_register(
    State(users_service): State<Arc<dyn UsersService>>,
    body: Result<Json<input::OAuthTokens>, JsonRejection>,
) -> Result<Envelope<output::Tokens>, Error> {
    let Json(tokens) = body?;
    let tokens = users_service.register(tokens).await?;

    Ok(Envelope::created("user registered", tokens))
}

async fn post_login(
    State(users_service): State<Arc<dyn UsersService>>,
    body: Result<Json<input::OAuthTokens>, JsonRejection>,
) -> Result<Envelope<output::Tokens>, Error> {
    let Json(tokens) = body?;
    let tokens = users_service.login(tokens).await?;

    Ok(Envelope::ok("user logged in", tokens))
}

async fn post_refresh(
    State(users_service): State<Arc<dyn UsersService>>,
    body: Result<Json<input::RefreshToken>, JsonRejection>,
) -> Result<Envelope<output::Tokens>, Error> {
    let Json(refresh_token) = body?;
    let tokens = users_service.refresh(refresh_token).await?;

    Ok(Envelope::ok("session refreshed", tokens))
}

async fn get_profile(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
) -> Result<Envelope<output::Profile>, Error> {
    let profile = users_service.find_profile(user.id).await?;

    Ok(Envelope::ok("profile found", profile))
}

async fn delete_session(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
) -> Result<Envelope<()>, Error> {
    users_service.logout(user.id).await?;

    Ok(Envelope::empty(StatusCode::OK, "user logged out"))
}

async fn delete_user(
    State(users_service): State<Arc<dyn UsersService>>,
    Extension(user): Extension<User>,
) -> Result<Envelope<()>, Error> {
    users_service.withdraw(user.id).await?;

    Ok(Envelope::empty(StatusCode::OK, "user withdrew"))
}

// TICKETS

async fn get_tickets(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
) -> Result<Envelope<Vec<output::TicketPreview>>, Error> {
    let previews = tickets_service.find_ticket_previews(user.id).await?;

    Ok(Envelope::ok("tickets found", previews))
}

async fn post_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    body: Result<Json<input::Ticket>, JsonRejection>,
) -> Result<Envelope<output::Ticket>, Error> {
    let Json(ticket) = body?;
    let ticket = tickets_service.create_ticket(user.id, ticket).await?;

    Ok(Envelope::created("ticket created", ticket))
}

async fn get_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Envelope<output::Ticket>, Error> {
    let ticket = tickets_service.find_ticket(&id, user.id).await?;

    Ok(Envelope::ok("ticket found", ticket))
}

async fn put_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    body: Result<Json<input::Ticket>, JsonRejection>,
) -> Result<Envelope<output::Ticket>, Error> {
    let Json(ticket) = body?;
    let ticket = tickets_service.update_ticket(&id, user.id, ticket).await?;

    Ok(Envelope::ok("ticket updated", ticket))
}

async fn delete_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Envelope<()>, Error> {
    tickets_service.delete_ticket(&id, user.id).await?;

    Ok(Envelope::empty(StatusCode::OK, "ticket deleted"))
}

// SCHEDULES

async fn get_schedules(
    State(schedules_service): State<Arc<dyn SchedulesService>>,
    Extension(user): Extension<User>,
    filters: Result<Query<input::CalendarFilters>, QueryRejection>,
) -> Result<Envelope<Vec<output::ScheduleCalendarPreview>>, Error> {
    let Query(filters) = filters?;
    let previews = schedules_service
        .find_calendar_previews(user.id, filters)
        .await?;

    Ok(Envelope::ok("schedules found", previews))
}

async fn get_schedules_for_ticket(
    State(schedules_service): State<Arc<dyn SchedulesService>>,
    Extension(user): Extension<User>,
    filters: Result<Query<input::TicketSchedulesFilters>, QueryRejection>,
) -> Result<Envelope<Vec<output::ScheduleTicketPreview>>, Error> {
    let Query(filters) = filters?;
    let previews = schedules_service
        .find_ticket_previews(user.id, filters.date)
        .await?;

    Ok(Envelope::ok("schedules found", previews))
}

async fn post_schedule(
    State(schedules_service): State<Arc<dyn SchedulesService>>,
    Extension(user): Extension<User>,
    body: Result<Json<input::Schedule>, JsonRejection>,
) -> Result<Envelope<output::Schedule>, Error> {
    let Json(schedule) = body?;
    let schedule = schedules_service.create_schedule(user.id, schedule).await?;

    Ok(Envelope::created("schedule created", schedule))
}

async fn get_schedule(
    State(schedules_service): State<Arc<dyn SchedulesService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Envelope<output::Schedule>, Error> {
    let schedule = schedules_service.find_schedule(&id, user.id).await?;

    Ok(Envelope::ok("schedule found", schedule))
}

async fn put_schedule(
    State(schedules_service): State<Arc<dyn SchedulesService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
    body: Result<Json<input::Schedule>, JsonRejection>,
) -> Result<Envelope<output::Schedule>, Error> {
    let Json(schedule) = body?;
    let schedule = schedules_service
        .update_schedule(&id, user.id, schedule)
        .await?;

    Ok(Envelope::ok("schedule updated", schedule))
}

async fn delete_schedule(
    State(schedules_service): State<Arc<dyn SchedulesService>>,
    Extension(user): Extension<User>,
    Path(id): Path<String>,
) -> Result<Envelope<()>, Error> {
    schedules_service.delete_schedule(&id, user.id).await?;

    Ok(Envelope::empty(StatusCode::OK, "schedule deleted"))
}

// UPLOADS

async fn get_upload_url(
    State(uploads_service): State<Arc<dyn UploadsService>>,
) -> Result<Envelope<output::UploadUrl>, Error> {
    let upload_url = uploads_service.create_upload_url()?;

    Ok(Envelope::ok("upload url created", upload_url))
}
