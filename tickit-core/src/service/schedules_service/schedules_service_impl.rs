use super::SchedulesService;
use crate::{
    date_time,
    dto::{input, output},
    error::Error,
    repository::{self, ScheduleContent, SchedulesRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

pub struct SchedulesServiceImpl {
    repository: Arc<dyn SchedulesRepository>,
}

impl SchedulesServiceImpl {
    pub fn new(repository: Arc<dyn SchedulesRepository>) -> Self {
        Self { repository }
    }

    fn parse_id(id: &str) -> Result<ObjectId, Error> {
        ObjectId::parse_str(id).map_err(|_| Error::ScheduleNotExist)
    }

    fn schedule_content(schedule: input::Schedule) -> Result<ScheduleContent, Error> {
        date_time::parse_date(&schedule.date)?;
        date_time::validate_time(&schedule.time)?;

        Ok(ScheduleContent {
            date: schedule.date,
            title: schedule.title,
            number: schedule.number,
            image: schedule.image,
            thumbnail: schedule.thumbnail,
            location: schedule.location,
            time: schedule.time,
            seat: schedule.seat,
            casting: schedule.casting,
            company: schedule.company,
            link: schedule.link,
            memo: schedule.memo,
        })
    }

    fn map_not_exist(err: repository::Error) -> Error {
        match err {
            repository::Error::NoDocumentUpdated => Error::ScheduleNotExist,
            err => Error::Database(err),
        }
    }
}

#[async_trait]
impl SchedulesService for SchedulesServiceImpl {
    async fn create_schedule(
        &self,
        user_id: ObjectId,
        schedule: input::Schedule,
    ) -> Result<output::Schedule, Error> {
        tracing::info!("creating schedule");
        tracing::trace!(?schedule);

        let content = Self::schedule_content(schedule)?;
        let schedule = self.repository.insert(user_id, content).await?;

        let id = schedule.id.to_hex();
        tracing::info!(id, "created schedule");

        Ok(schedule.into())
    }

    async fn find_schedule(
        &self,
        id: &str,
        user_id: ObjectId,
    ) -> Result<output::Schedule, Error> {
        tracing::info!(id, "finding schedule");

        let id = Self::parse_id(id)?;
        let schedule = self
            .repository
            .find(id, user_id)
            .await?
            .ok_or(Error::ScheduleNotExist)?;

        tracing::info!("found schedule");

        Ok(schedule.into())
    }

    async fn find_ticket_previews(
        &self,
        user_id: ObjectId,
        date: Option<String>,
    ) -> Result<Vec<output::ScheduleTicketPreview>, Error> {
        let date = match date {
            Some(date) => {
                date_time::parse_date(&date)?;
                date
            }
            None => date_time::today(),
        };
        tracing::info!(date, "finding schedule previews for ticket");

        let previews = self.repository.find_many_until(user_id, &date).await?;
        tracing::info!(count = previews.len(), "found schedule previews");

        let previews = previews
            .into_iter()
            .map(output::ScheduleTicketPreview::from)
            .collect();

        Ok(previews)
    }

    async fn find_calendar_previews(
        &self,
        user_id: ObjectId,
        filters: input::CalendarFilters,
    ) -> Result<Vec<output::ScheduleCalendarPreview>, Error> {
        tracing::info!(?filters, "finding schedule previews for calendar");

        date_time::parse_date(&filters.start_date)?;
        date_time::parse_date(&filters.end_date)?;

        let previews = self
            .repository
            .find_many_between(user_id, &filters.start_date, &filters.end_date)
            .await?;
        tracing::info!(count = previews.len(), "found schedule previews");

        let previews = previews
            .into_iter()
            .map(output::ScheduleCalendarPreview::from)
            .collect();

        Ok(previews)
    }

    async fn update_schedule(
        &self,
        id: &str,
        user_id: ObjectId,
        schedule: input::Schedule,
    ) -> Result<output::Schedule, Error> {
        tracing::info!(id, "updating schedule");
        tracing::trace!(?schedule);

        let id = Self::parse_id(id)?;
        let content = Self::schedule_content(schedule)?;

        self.repository
            .update(id, user_id, content.clone())
            .await
            .map_err(Self::map_not_exist)?;

        tracing::info!("updated schedule");

        Ok(output::Schedule::new(id, content))
    }

    async fn delete_schedule(&self, id: &str, user_id: ObjectId) -> Result<(), Error> {
        tracing::info!(id, "deleting schedule");

        let id = Self::parse_id(id)?;

        self.repository
            .delete(id, user_id)
            .await
            .map_err(Self::map_not_exist)?;

        tracing::info!("deleted schedule");

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{date_time::FormatError, repository::MockSchedulesRepository};

    fn input_schedule() -> input::Schedule {
        input::Schedule {
            date: "2024-03-01".to_string(),
            title: "Musical".to_string(),
            number: 3,
            image: String::new(),
            thumbnail: true,
            location: "Blue Square".to_string(),
            time: "PM-07-30".to_string(),
            seat: "R-11".to_string(),
            casting: String::new(),
            company: String::new(),
            link: String::new(),
            memo: "with friends".to_string(),
        }
    }

    fn inserted_schedule(user_id: ObjectId, content: ScheduleContent) -> repository::Schedule {
        repository::Schedule {
            id: ObjectId::new(),
            user_id,
            date: content.date,
            title: content.title,
            number: content.number,
            image: content.image,
            thumbnail: content.thumbnail,
            location: content.location,
            time: content.time,
            seat: content.seat,
            casting: content.casting,
            company: content.company,
            link: content.link,
            memo: content.memo,
        }
    }

    #[tokio::test]
    async fn create_schedule_ok() {
        let user_id = ObjectId::new();
        let mut repository = MockSchedulesRepository::new();
        repository
            .expect_insert()
            .withf(move |id, content| *id == user_id && content.title == "Musical")
            .return_once(|user_id, content| Ok(inserted_schedule(user_id, content)));
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let schedule = service
            .create_schedule(user_id, input_schedule())
            .await
            .unwrap();

        assert_eq!(schedule.date, "2024-03-01");
        assert_eq!(schedule.time, "PM-07-30");
        assert!(schedule.thumbnail);
    }

    #[tokio::test]
    async fn create_schedule_invalid_date() {
        let mut repository = MockSchedulesRepository::new();
        repository.expect_insert().never();
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let mut input = input_schedule();
        input.date = "2024-02-30".to_string();
        let result = service.create_schedule(ObjectId::new(), input).await;

        assert!(matches!(
            result,
            Err(Error::Validation(FormatError::Date(_)))
        ));
    }

    #[tokio::test]
    async fn create_schedule_invalid_time() {
        let mut repository = MockSchedulesRepository::new();
        repository.expect_insert().never();
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let mut input = input_schedule();
        input.time = "19:30".to_string();
        let result = service.create_schedule(ObjectId::new(), input).await;

        assert!(matches!(
            result,
            Err(Error::Validation(FormatError::Time(_)))
        ));
    }

    #[tokio::test]
    async fn find_schedule_invalid_id() {
        let mut repository = MockSchedulesRepository::new();
        repository.expect_find().never();
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let result = service.find_schedule("123", ObjectId::new()).await;

        assert!(matches!(result, Err(Error::ScheduleNotExist)));
    }

    #[tokio::test]
    async fn find_schedule_of_other_user() {
        let mut repository = MockSchedulesRepository::new();
        repository.expect_find().return_once(|_, _| Ok(None));
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let result = service
            .find_schedule(&ObjectId::new().to_hex(), ObjectId::new())
            .await;

        assert!(matches!(result, Err(Error::ScheduleNotExist)));
    }

    #[tokio::test]
    async fn find_ticket_previews_defaults_to_today() {
        let today = date_time::today();
        let mut repository = MockSchedulesRepository::new();
        repository
            .expect_find_many_until()
            .withf(move |_, date| date == today)
            .return_once(|_, _| Ok(Vec::new()));
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let previews = service
            .find_ticket_previews(ObjectId::new(), None)
            .await
            .unwrap();

        assert!(previews.is_empty());
    }

    #[tokio::test]
    async fn find_ticket_previews_given_date() {
        let id = ObjectId::new();
        let mut repository = MockSchedulesRepository::new();
        repository
            .expect_find_many_until()
            .withf(|_, date| date == "2024-01-31")
            .return_once(move |_, _| {
                Ok(vec![repository::ScheduleTicketPreview {
                    id,
                    title: "Opera".to_string(),
                    date: "2024-01-20".to_string(),
                }])
            });
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let previews = service
            .find_ticket_previews(ObjectId::new(), Some("2024-01-31".to_string()))
            .await
            .unwrap();

        assert_eq!(
            previews,
            vec![output::ScheduleTicketPreview {
                id: id.to_hex(),
                title: "Opera".to_string(),
                date: "2024-01-20".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn find_ticket_previews_invalid_date() {
        let mut repository = MockSchedulesRepository::new();
        repository.expect_find_many_until().never();
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let result = service
            .find_ticket_previews(ObjectId::new(), Some("31-01-2024".to_string()))
            .await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn find_calendar_previews_ok() {
        let mut repository = MockSchedulesRepository::new();
        repository
            .expect_find_many_between()
            .withf(|_, start, end| start == "2024-03-01" && end == "2024-03-31")
            .return_once(|_, _, _| Ok(Vec::new()));
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let filters = input::CalendarFilters {
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-31".to_string(),
        };
        let previews = service
            .find_calendar_previews(ObjectId::new(), filters)
            .await
            .unwrap();

        assert!(previews.is_empty());
    }

    #[tokio::test]
    async fn find_calendar_previews_invalid_end_date() {
        let mut repository = MockSchedulesRepository::new();
        repository.expect_find_many_between().never();
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let filters = input::CalendarFilters {
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-32".to_string(),
        };
        let result = service
            .find_calendar_previews(ObjectId::new(), filters)
            .await;

        assert!(matches!(
            result,
            Err(Error::Validation(FormatError::Date(_)))
        ));
    }

    #[tokio::test]
    async fn update_schedule_echoes_content() {
        let mut repository = MockSchedulesRepository::new();
        repository.expect_update().return_once(|_, _, _| Ok(()));
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let id = ObjectId::new();
        let schedule = service
            .update_schedule(&id.to_hex(), ObjectId::new(), input_schedule())
            .await
            .unwrap();

        assert_eq!(schedule.id, id.to_hex());
        assert_eq!(schedule.memo, "with friends");
    }

    #[tokio::test]
    async fn update_schedule_not_exist() {
        let mut repository = MockSchedulesRepository::new();
        repository
            .expect_update()
            .return_once(|_, _, _| Err(repository::Error::NoDocumentUpdated));
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let result = service
            .update_schedule(&ObjectId::new().to_hex(), ObjectId::new(), input_schedule())
            .await;

        assert!(matches!(result, Err(Error::ScheduleNotExist)));
    }

    #[tokio::test]
    async fn delete_schedule_ok() {
        let mut repository = MockSchedulesRepository::new();
        repository.expect_delete().return_once(|_, _| Ok(()));
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let result = service
            .delete_schedule(&ObjectId::new().to_hex(), ObjectId::new())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn delete_schedule_not_exist() {
        let mut repository = MockSchedulesRepository::new();
        repository
            .expect_delete()
            .return_once(|_, _| Err(repository::Error::NoDocumentUpdated));
        let service = SchedulesServiceImpl::new(Arc::new(repository));

        let result = service
            .delete_schedule(&ObjectId::new().to_hex(), ObjectId::new())
            .await;

        assert!(matches!(result, Err(Error::ScheduleNotExist)));
    }
}
