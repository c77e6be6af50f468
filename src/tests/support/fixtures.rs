use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::shared::persistence::codec::{Codec, PasswordCodec};
use crate::shared::persistence::{AuditFields, SoftDelete};
use crate::user::application::domain::{User, UserPublic};

const PLACEHOLDER_HASH: &str = "$argon2id$v=19$m=1024,t=1,p=1$c29tZXNhbHQ$aGFzaA";

fn audit(id: Uuid) -> AuditFields {
    let updated = Utc::now();
    AuditFields::restore(id, updated - Duration::days(1), updated).unwrap()
}

pub fn stored_user(id: Uuid, email: &str) -> User {
    let mut user = User::new(
        audit(id),
        SoftDelete::new(),
        email.to_string(),
        "jane".to_string(),
        PLACEHOLDER_HASH.to_string(),
    );
    user.full_name = Some("Jane Doe".to_string());
    user
}

pub fn deleted_user(id: Uuid, at: DateTime<Utc>) -> User {
    User::new(
        audit(id),
        SoftDelete::restore(true, Some(at)).unwrap(),
        "jane@example.com".to_string(),
        "jane".to_string(),
        PLACEHOLDER_HASH.to_string(),
    )
}

/// A live user whose stored hash really matches `plaintext`.
pub fn user_with_password(email: &str, plaintext: &str) -> User {
    let hash = PasswordCodec::for_tests()
        .encode(plaintext.to_string())
        .unwrap();

    User::new(
        audit(Uuid::new_v4()),
        SoftDelete::new(),
        email.to_string(),
        "jane".to_string(),
        hash,
    )
}

pub fn public_user(id: Uuid) -> UserPublic {
    stored_user(id, "jane@example.com").to_public()
}
