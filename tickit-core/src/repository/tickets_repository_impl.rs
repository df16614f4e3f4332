use super::{
    dto::{Ticket, TicketContent, TicketFindEntity, TicketPreview, TicketPreviewFindEntity},
    entity::TicketInsertEntity,
    indexes,
    Error, TicketsRepository,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};
use time::OffsetDateTime;

const TICKETS: &str = "tickets";
const INDEX_NAME_USER_ID_CREATED_AT: &str = "index_user_id_created_at";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection = database.collection::<Document>(TICKETS);
        let index_names = indexes::list_index_names(&collection).await?;

        if !index_names.contains(&INDEX_NAME_USER_ID_CREATED_AT.to_string()) {
            Self::create_user_id_created_at_index(&collection).await?;
            tracing::debug!("created index {TICKETS}.{INDEX_NAME_USER_ID_CREATED_AT}");
        }

        Ok(Self { database })
    }

    async fn create_user_id_created_at_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "user_id": 1,
                "created_at": -1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_USER_ID_CREATED_AT.to_string())
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }

    fn content_document(content: TicketContent) -> Document {
        let fields = content
            .fields
            .into_iter()
            .map(|field| {
                doc! {
                    "subtitle": field.subtitle,
                    "content": field.content,
                }
            })
            .collect::<Vec<_>>();

        doc! {
            "image": content.image,
            "title": content.title,
            "location": content.location,
            "date_time": DateTime::from(content.date_time),
            "background_color": content.background_color,
            "foreground_color": content.foreground_color,
            "fields": fields,
        }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(
        &self,
        user_id: ObjectId,
        content: TicketContent,
        created_at: OffsetDateTime,
    ) -> Result<Ticket, Error> {
        let insert_entity =
            TicketInsertEntity::new(user_id, content.clone(), DateTime::from(created_at));

        let insert_result = self
            .database
            .collection::<TicketInsertEntity>(TICKETS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert)?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            return Err(Error::invalid_inserted_id());
        };

        Ok(Ticket {
            id,
            user_id,
            image: content.image,
            title: content.title,
            location: content.location,
            date_time: content.date_time,
            background_color: content.background_color,
            foreground_color: content.foreground_color,
            fields: content.fields,
            created_at,
        })
    }

    async fn find(&self, id: ObjectId, user_id: ObjectId) -> Result<Option<Ticket>, Error> {
        let ticket_entity = self
            .database
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! {
                "_id": id,
                "user_id": user_id,
            })
            .await?;

        let ticket = ticket_entity.map(Ticket::from);

        Ok(ticket)
    }

    async fn find_many_previews(&self, user_id: ObjectId) -> Result<Vec<TicketPreview>, Error> {
        let previews = self
            .database
            .collection::<TicketPreviewFindEntity>(TICKETS)
            .find(doc! {
                "user_id": user_id,
            })
            .projection(doc! {
                "_id": 1,
                "image": 1,
            })
            .sort(doc! {
                "created_at": -1,
            })
            .await?
            .map_ok(TicketPreview::from)
            .try_collect()
            .await?;

        Ok(previews)
    }

    async fn update(
        &self,
        id: ObjectId,
        user_id: ObjectId,
        content: TicketContent,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(TICKETS)
            .update_one(
                doc! {
                    "_id": id,
                    "user_id": user_id,
                },
                doc! {
                    "$set": Self::content_document(content),
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
            .collection::<Document>(TICKETS)
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

///
/// Tests require env variables to be set and database to be running
///
#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{
        test_database::{create_test_database, destroy_test_database},
        TicketField,
    };
    use time::macros::datetime;

    fn content(title: &str) -> TicketContent {
        TicketContent {
            image: "8a1f0c02-3f0e-4f4e-9a57-5a2b1e7d9c11".to_string(),
            title: title.to_string(),
            location: "Seoul Arts Center".to_string(),
            date_time: datetime!(2024-03-01 13:30 UTC),
            background_color: "0xffFFFFFF".to_string(),
            foreground_color: "0xff000000".to_string(),
            fields: vec![TicketField {
                subtitle: "seat".to_string(),
                content: "R-7".to_string(),
            }],
        }
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn insert_then_find() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;
        let user_id = ObjectId::new();

        let inserted = repository
            .insert(user_id, content("Concert"), datetime!(2024-02-01 10:00 UTC))
            .await?;
        let found = repository.find(inserted.id, user_id).await?;

        assert_eq!(found, Some(inserted));

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn find_other_user_ticket() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;

        let inserted = repository
            .insert(ObjectId::new(), content("Concert"), OffsetDateTime::now_utc())
            .await?;
        let found = repository.find(inserted.id, ObjectId::new()).await?;

        assert_eq!(found, None);

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn find_many_previews_newest_first() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;
        let user_id = ObjectId::new();

        let older = repository
            .insert(user_id, content("older"), datetime!(2024-01-01 10:00 UTC))
            .await?;
        let newer = repository
            .insert(user_id, content("newer"), datetime!(2024-02-01 10:00 UTC))
            .await?;
        repository
            .insert(ObjectId::new(), content("other"), datetime!(2024-03-01 10:00 UTC))
            .await?;

        let previews = repository.find_many_previews(user_id).await?;
        let ids = previews.iter().map(|preview| preview.id).collect::<Vec<_>>();

        assert_eq!(ids, vec![newer.id, older.id]);

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn update_replaces_content() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;
        let user_id = ObjectId::new();

        let inserted = repository
            .insert(user_id, content("Concert"), OffsetDateTime::now_utc())
            .await?;
        let mut new_content = content("Musical");
        new_content.fields = vec![];
        repository
            .update(inserted.id, user_id, new_content)
            .await?;
        let found = repository.find(inserted.id, user_id).await?.unwrap();

        assert_eq!(found.title, "Musical");
        assert!(found.fields.is_empty());

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn update_other_user_ticket() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;

        let inserted = repository
            .insert(ObjectId::new(), content("Concert"), OffsetDateTime::now_utc())
            .await?;
        let result = repository
            .update(inserted.id, ObjectId::new(), content("Musical"))
            .await;

        assert!(matches!(result, Err(Error::NoDocumentUpdated)));

        destroy_test_database(database).await;

        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires running database"]
    async fn delete_twice() -> anyhow::Result<()> {
        let database = create_test_database().await?;
        let repository = TicketsRepositoryImpl::new(database.clone()).await?;
        let user_id = ObjectId::new();

        let inserted = repository
            .insert(user_id, content("Concert"), OffsetDateTime::now_utc())
            .await?;
        let first = repository.delete(inserted.id, user_id).await;
        let second = repository.delete(inserted.id, user_id).await;

        assert!(first.is_ok());
        assert!(matches!(second, Err(Error::NoDocumentUpdated)));

        destroy_test_database(database).await;

        Ok(())
    }
}
