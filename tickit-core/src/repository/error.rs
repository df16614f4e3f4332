#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("no document updated")]
    NoDocumentUpdated,

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

impl Error {
    ///
    /// Translates mongo error into [Error::InsertUniqueViolation]
    /// when it was caused by duplicated key.
    ///
    pub fn from_insert(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        let ErrorKind::Write(ref write_failure) = *err.kind else {
            return Error::Mongo(err);
        };

        let WriteFailure::WriteError(write_error) = write_failure else {
            return Error::Mongo(err);
        };

        const DUPLICATE_KEY_CODE: i32 = 11000;
        match write_error.code == DUPLICATE_KEY_CODE {
            true => Error::InsertUniqueViolation,
            false => Error::Mongo(err),
        }
    }

    pub(super) fn invalid_inserted_id() -> Self {
        tracing::error!("invalid type of inserted '_id'");

        Error::Mongo(
            mongodb::error::ErrorKind::Custom(std::sync::Arc::new("invalid type of inserted '_id'"))
                .into(),
        )
    }
}
