use async_trait::async_trait;

use crate::shared::persistence::codec::PasswordCodec;
use crate::user::application::ports::outgoing::PasswordVerifier;

#[async_trait]
impl PasswordVerifier for PasswordCodec {
    async fn verify_password(&self, plaintext: String, stored: Option<String>) -> bool {
        self.verify_in_background(plaintext, stored).await
    }
}
