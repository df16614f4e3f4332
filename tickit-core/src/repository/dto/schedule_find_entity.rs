use super::{Schedule, ScheduleCalendarPreview, ScheduleTicketPreview};
use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct ScheduleFindEntity {
    pub _id: ObjectId,
    pub user_id: ObjectId,
    pub date: String,
    pub title: String,
    pub number: i32,
    pub image: String,
    pub thumbnail: bool,
    pub location: String,
    pub time: String,
    pub seat: String,
    pub casting: String,
    pub company: String,
    pub link: String,
    pub memo: String,
}

#[derive(Deserialize)]
pub struct ScheduleCalendarPreviewFindEntity {
    pub _id: ObjectId,
    pub title: String,
    pub image: String,
    pub date: String,
}

#[derive(Deserialize)]
pub struct ScheduleTicketPreviewFindEntity {
    pub _id: ObjectId,
    pub title: String,
    pub date: String,
}

impl From<ScheduleFindEntity> for Schedule {
    fn from(value: ScheduleFindEntity) -> Self {
        Self {
            id: value._id,
            user_id: value.user_id,
            date: value.date,
            title: value.title,
            number: value.number,
            image: value.image,
            thumbnail: value.thumbnail,
            location: value.location,
            time: value.time,
            seat: value.seat,
            casting: value.casting,
            company: value.company,
            link: value.link,
            memo: value.memo,
        }
    }
}

impl From<ScheduleCalendarPreviewFindEntity> for ScheduleCalendarPreview {
    fn from(value: ScheduleCalendarPreviewFindEntity) -> Self {
        Self {
            id: value._id,
            title: value.title,
            image: value.image,
            date: value.date,
        }
    }
}

impl From<ScheduleTicketPreviewFindEntity> for ScheduleTicketPreview {
    fn from(value: ScheduleTicketPreviewFindEntity) -> Self {
        Self {
            id: value._id,
            title: value.title,
            date: value.date,
        }
    }
}
