pub mod sea_orm_entity;
mod security;
mod user_codecs;
mod user_repository_postgres;

pub use user_codecs::UserCodecs;
pub use user_repository_postgres::UserRepositoryPostgres;
