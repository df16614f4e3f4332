use crate::repository::ScheduleContent;
use bson::oid::ObjectId;
use serde::Serialize;

#[derive(Serialize)]
pub struct ScheduleInsertEntity {
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

impl ScheduleInsertEntity {
    pub fn new(user_id: ObjectId, content: ScheduleContent) -> Self {
        Self {
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
}
