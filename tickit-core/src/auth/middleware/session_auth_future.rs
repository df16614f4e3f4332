use crate::dto::output::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pin_project::pin_project;
use std::{
    future::Future,
    pin::Pin,
    task::{ready, Context, Poll},
};
use tracing::Span;

#[pin_project(project = SessionAuthFutureProj)]
pub enum SessionAuthFuture<F> {
    Authorized {
        #[pin]
        inner: F,

        /// span that should be used to add
        /// user context to request processing
        span: Span,
    },
    Unauthorized,
}

impl<F, E> Future for SessionAuthFuture<F>
where
    F: Future<Output = Result<Response, E>>,
{
    type Output = Result<Response, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let result = match self.project() {
            SessionAuthFutureProj::Authorized { inner, span } => {
                let _entered = span.enter();
                ready!(inner.poll(cx))
            }
            SessionAuthFutureProj::Unauthorized => {
                let response =
                    Envelope::empty(StatusCode::UNAUTHORIZED, "authentication required")
                        .into_response();
                Ok(response)
            }
        };

        Poll::Ready(result)
    }
}
