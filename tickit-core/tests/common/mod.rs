use bson::oid::ObjectId;
use jwt_auth::{test::create_long_lived_token, util::parse_jwt_algorithm};
use std::sync::Once;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("TICKIT_CORE_BIND_ADDRESS").unwrap()
}

///
/// Access token of user that does not have to be registered.
/// Tickets and schedules only require valid session.
///
pub fn create_access_token_with_id(user_id: ObjectId) -> String {
    let algorithm = std::env::var("TICKIT_CORE_JWT_ALGORITHM").unwrap();
    let algorithm = parse_jwt_algorithm(&algorithm).unwrap();
    let secret = std::env::var("TICKIT_CORE_JWT_SECRET").unwrap();

    create_long_lived_token(&user_id.to_hex(), algorithm, secret.as_bytes())
}

pub fn create_access_token() -> String {
    create_access_token_with_id(ObjectId::new())
}
