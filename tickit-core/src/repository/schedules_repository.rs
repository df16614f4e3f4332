use super::{
    dto::{Schedule, ScheduleCalendarPreview, ScheduleContent, ScheduleTicketPreview},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchedulesRepository: Send + Sync {
    ///
    /// Inserts new schedule owned by the user.
    ///
    async fn insert(&self, user_id: ObjectId, content: ScheduleContent)
        -> Result<Schedule, Error>;

    ///
    /// Finds schedule with id that belongs to the user
    ///
    async fn find(&self, id: ObjectId, user_id: ObjectId) -> Result<Option<Schedule>, Error>;

    ///
    /// Finds previews of user's schedules that take place on the date or before it.
    /// Previews are sorted descending by date.
    ///
    async fn find_many_until(
        &self,
        user_id: ObjectId,
        date: &str,
    ) -> Result<Vec<ScheduleTicketPreview>, Error>;

    ///
    /// Finds previews of user's schedules with date in inclusive range.
    /// Previews are sorted ascending by date.
    ///
    async fn find_many_between(
        &self,
        user_id: ObjectId,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<ScheduleCalendarPreview>, Error>;

    ///
    /// Replaces content of the schedule.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - schedule does not exist
    ///     - schedule does not belong to the user
    ///
    async fn update(
        &self,
        id: ObjectId,
        user_id: ObjectId,
        content: ScheduleContent,
    ) -> Result<(), Error>;

    ///
    /// Deletes schedule.
    ///
    /// ### Errors
    /// - [Error::NoDocumentUpdated] when
    ///     - schedule does not exist
    ///     - schedule does not belong to the user
    ///
    async fn delete(&self, id: ObjectId, user_id: ObjectId) -> Result<(), Error>;
}
