use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use bson::oid::ObjectId;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SchedulesService: Send + Sync {
    ///
    /// ### Errors
    /// - [Error::Validation] when date or time has invalid format
    ///
    async fn create_schedule(
        &self,
        user_id: ObjectId,
        schedule: input::Schedule,
    ) -> Result<output::Schedule, Error>;

    ///
    /// ### Errors
    /// - [Error::ScheduleNotExist] when
    ///     - id is not valid schedule id
    ///     - schedule with id does not exist
    ///     - schedule does not belong to the user
    ///
    async fn find_schedule(&self, id: &str, user_id: ObjectId)
        -> Result<output::Schedule, Error>;

    ///
    /// Find previews of user's schedules that took place on the date or earlier.
    /// Today is used when date is missing.
    ///
    /// ### Errors
    /// - [Error::Validation] when date has invalid format
    ///
    async fn find_ticket_previews(
        &self,
        user_id: ObjectId,
        date: Option<String>,
    ) -> Result<Vec<output::ScheduleTicketPreview>, Error>;

    ///
    /// Find previews of user's schedules between dates, both inclusive
    ///
    /// ### Errors
    /// - [Error::Validation] when any date has invalid format
    ///
    async fn find_calendar_previews(
        &self,
        user_id: ObjectId,
        filters: input::CalendarFilters,
    ) -> Result<Vec<output::ScheduleCalendarPreview>, Error>;

    ///
    /// Replace schedule content
    ///
    /// ### Errors
    /// - [Error::Validation] when date or time has invalid format
    /// - [Error::ScheduleNotExist] when
    ///     - id is not valid schedule id
    ///     - schedule with id does not exist
    ///     - schedule does not belong to the user
    ///
    async fn update_schedule(
        &self,
        id: &str,
        user_id: ObjectId,
        schedule: input::Schedule,
    ) -> Result<output::Schedule, Error>;

    ///
    /// ### Errors
    /// - [Error::ScheduleNotExist] when
    ///     - id is not valid schedule id
    ///     - schedule with id does not exist
    ///     - schedule does not belong to the user
    ///
    async fn delete_schedule(&self, id: &str, user_id: ObjectId) -> Result<(), Error>;
}
