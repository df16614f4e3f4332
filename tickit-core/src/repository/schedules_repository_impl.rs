use super::{
    dto::{
        Schedule, ScheduleCalendarPreview, ScheduleCalendarPreviewFindEntity, ScheduleContent,
        ScheduleFindEntity, ScheduleTicketPreview, ScheduleTicketPreviewFindEntity,
    },
    entity::ScheduleInsertEntity,
    indexes,
    Error, SchedulesRepository,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};

const SCHEDULES: &str = "schedules";
const INDEX_NAME_USER_ID_DATE: &str = "index_user_id_date";

pub struct SchedulesRepositoryImpl {
    database: Database,
}

impl SchedulesRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection = database.collection::<Document>(SCHEDULES);
        let index_names = indexes::list_index_names(&collection).await?;

        if !index_names.contains(&INDEX_NAME_USER_ID_DATE.to_string()) {
            Self::create_user_id_date_index(&collection).await?;
            tracing::debug!("created index {SCHEDULES}.{INDEX_NAME_USER_ID_DATE}");
        }

        Ok(Self { database })
    }

    async fn create_user_id_date_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "user_id": 1,
                "date": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_USER_ID_DATE.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl SchedulesRepository for SchedulesRepositoryImpl {
    async fn insert(
        &self,
        user_id: ObjectId,
        content: ScheduleContent,
    ) -> Result<Schedule, Error> {
        let insert_entity = ScheduleInsertEntity::new(user_id, content.clone());

        let insert_result = self
            .database
            .collection::<ScheduleInsertEntity>(SCHEDULES)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert)?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            return Err(Error::invalid_inserted_id());
        };

        Ok(Schedule {
            id,
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
        })
    }

    async fn find(&self, id: ObjectId, user_id: ObjectId) -> Result<Option<Schedule>, Error> {
        let schedule = self
            .database
            .collection::<ScheduleFindEntity>(SCHEDULES)
            .find_one(doc! {
                "_id": id,
                "user_id": user_id,
            })
            .await?
            .map(Schedule::from);

        Ok(schedule)
    }

    async fn find_many_until(
        &self,
        user_id: ObjectId,
        date: &str,
    ) -> Result<Vec<ScheduleTicketPreview>, Error> {
        // dates are stored as YYYY-MM-DD so lexical order is chronological
        let previews = self
            .database
            .collection::<ScheduleTicketPreviewFindEntity>(SCHEDULES)
            .find(doc! {
                "user_id": user_id,
                "date": { "$lte": date },
            })
            .projection(doc! {
                "_id": 1,
                "title": 1,
                "date": 1,
            })
            .sort(doc! {
                "date": -1,
            })
            .await?
            .map_ok(ScheduleTicketPreview::from)
            .try_collect()
            .await?;

        Ok(previews)
    }

    async fn find_many_between(
        &self,
        user_id: ObjectId,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<ScheduleCalendarPreview>, Error> {
        let previews = self
            .database
            .collection::<ScheduleCalendarPreviewFindEntity>(SCHEDULES)
            .find(doc! {
                "user_id": user_id,
                "date": {
                    "$gte": start_date,
                    "$lte": end_date,
                },
            })
            .projection(doc! {
                "_id": 1,
                "title": 1,
                "image": 1,
                "date": 1,
            })
            .sort(doc! {
                "date": 1,
            })
            .await?
            .map_ok(ScheduleCalendarPreview::from)
            .try_collect()
            .await?;

        Ok(previews)
    }

    async fn update(
        &self,
        id: ObjectId,
        user_id: ObjectId,
        content: ScheduleContent,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(SCHEDULES)
            .update_one(
                doc! {
                    "_id": id,
                    "user_id": user_id,
                },
                doc! {
                    "$set": {
                        "date": content.date,
                        "title": content.title,
                        "number": content.number,
                        "image": content.image,
                        "thumbnail": content.thumbnail,
                        "location": content.location,
                        "time": content.time,
                        "seat": content.seat,
                        "casting": content.casting,
                        "company": content.company,
                        "link": content.link,
                        "memo": content.memo,
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete(&self, id: ObjectId, user_id: ObjectId) -> Result<(), Error> {
        let delete_result = self
            .database
            .collection::<Document>(SCHEDULES)
            .delete_one(doc! {
                "_id": id,
                "user_id": user_id,
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
