pub mod authenticate_user;
pub mod create_user;
pub mod fetch_user;
pub mod soft_delete_user;
pub mod update_user;
