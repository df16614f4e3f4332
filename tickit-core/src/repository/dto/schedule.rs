use bson::oid::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub id: ObjectId,
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

///
/// Values of the schedule chosen by its owner.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleContent {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCalendarPreview {
    pub id: ObjectId,
    pub title: String,
    pub image: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTicketPreview {
    pub id: ObjectId,
    pub title: String,
    pub date: String,
}
