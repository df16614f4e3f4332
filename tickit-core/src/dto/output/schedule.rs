use crate::repository;
use bson::oid::ObjectId;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub id: String,
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

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ScheduleCalendarPreview {
    pub id: String,
    pub title: String,
    pub image: String,
    pub date: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ScheduleTicketPreview {
    pub id: String,
    pub title: String,
    pub date: String,
}

impl Schedule {
    pub fn new(id: ObjectId, content: repository::ScheduleContent) -> Self {
        Self {
            id: id.to_hex(),
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
}

impl From<repository::Schedule> for Schedule {
    fn from(value: repository::Schedule) -> Self {
        Self {
            id: value.id.to_hex(),
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

impl From<repository::ScheduleCalendarPreview> for ScheduleCalendarPreview {
    fn from(value: repository::ScheduleCalendarPreview) -> Self {
        Self {
            id: value.id.to_hex(),
            title: value.title,
            image: value.image,
            date: value.date,
        }
    }
}

impl From<repository::ScheduleTicketPreview> for ScheduleTicketPreview {
    fn from(value: repository::ScheduleTicketPreview) -> Self {
        Self {
            id: value.id.to_hex(),
            title: value.title,
            date: value.date,
        }
    }
}
