use bson::Document;
use mongodb::{
    error::{Error, ErrorKind},
    Collection,
};

const NAMESPACE_NOT_FOUND_CODE: i32 = 26;

///
/// Names of indexes of the collection.
/// Collection that was not created yet has no indexes.
///
pub(super) async fn list_index_names(
    collection: &Collection<Document>,
) -> Result<Vec<String>, Error> {
    match collection.list_index_names().await {
        Ok(index_names) => Ok(index_names),
        Err(err) if is_namespace_not_found(&err) => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

fn is_namespace_not_found(err: &Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Command(ref command_error) if command_error.code == NAMESPACE_NOT_FOUND_CODE
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use bson::doc;
    use mongodb::error::CommandError;
    use std::sync::Arc;

    fn command_error(code: i32, code_name: &str) -> Error {
        let command_error: CommandError = bson::from_document(doc! {
            "code": code,
            "codeName": code_name,
            "errmsg": "command failed",
        })
        .unwrap();

        ErrorKind::Command(command_error).into()
    }

    #[test]
    fn namespace_not_found_is_recognized() {
        let err = command_error(NAMESPACE_NOT_FOUND_CODE, "NamespaceNotFound");

        assert!(is_namespace_not_found(&err));
    }

    #[test]
    fn other_command_error_is_not_namespace_not_found() {
        let err = command_error(13, "Unauthorized");

        assert!(!is_namespace_not_found(&err));
    }

    #[test]
    fn other_error_kind_is_not_namespace_not_found() {
        let err: Error = ErrorKind::Custom(Arc::new("connection reset")).into();

        assert!(!is_namespace_not_found(&err));
    }
}
