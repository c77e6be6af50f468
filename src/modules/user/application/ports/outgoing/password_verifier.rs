use async_trait::async_trait;

#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// `stored` is `None` when no account matched; implementations still spend
    /// one verification's worth of effort and return `false`.
    async fn verify_password(&self, plaintext: String, stored: Option<String>) -> bool;
}
