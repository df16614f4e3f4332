use super::{
    dto::{User, UserFindEntity},
    entity::UserInsertEntity,
    indexes,
    Error, UsersRepository,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use mongodb::{options::IndexOptions, Collection, Database, IndexModel};
use time::OffsetDateTime;

const USERS: &str = "users";
const INDEX_NAME_UNIQUE_OAUTH_ID: &str = "unique_index_oauth_id";

pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection = database.collection::<Document>(USERS);
        let index_names = indexes::list_index_names(&collection).await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_OAUTH_ID.to_string()) {
            Self::create_unique_oauth_id_index(&collection).await?;
            tracing::debug!("created index {USERS}.{INDEX_NAME_UNIQUE_OAUTH_ID}");
        }

        Ok(Self { database })
    }

    async fn create_unique_oauth_id_index(
        collection: &Collection<Document>,
    ) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! {
                "oauth_id": 1,
            })
            .options(
                IndexOptions::builder()
                    .name(INDEX_NAME_UNIQUE_OAUTH_ID.to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        collection.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn insert(&self, oauth_id: &str, name: &str) -> Result<User, Error> {
        let insert_entity = UserInsertEntity {
            oauth_id: oauth_id.to_string(),
            name: name.to_string(),
        };

        let insert_result = self
            .database
            .collection::<UserInsertEntity>(USERS)
            .insert_one(&insert_entity)
            .await
            .map_err(Error::from_insert)?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            return Err(Error::invalid_inserted_id());
        };

        Ok(User {
            id,
            oauth_id: insert_entity.oauth_id,
            name: insert_entity.name,
            refresh_token: None,
            token_expiry: None,
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! { "_id": id })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn find_by_oauth_id(&self, oauth_id: &str) -> Result<Option<User>, Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! { "oauth_id": oauth_id })
            .await?
            .map(User::from);

        Ok(user)
    }

    async fn save_refresh_token(
        &self,
        id: ObjectId,
        refresh_token: &str,
        token_expiry: OffsetDateTime,
    ) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "refresh_token": refresh_token,
                        "token_expiry": DateTime::from(token_expiry),
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn remove_refresh_token(&self, id: ObjectId) -> Result<(), Error> {
        let update_result = self
            .database
            .collection::<Document>(USERS)
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$unset": {
                        "refresh_token": "",
                        "token_expiry": "",
                    }
                },
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<(), Error> {
        let delete_result = self
            .database
            .collection::<Document>(USERS)
            .delete_one(doc! { "_id": id })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }
}
