use sea_orm::entity::prelude::*;
use sea_orm::IdenStatic;

use crate::shared::persistence::codec::CodecKind;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique, column_type = "String(StringLen::N(255))")]
    pub email: String,

    #[sea_orm(unique, column_type = "String(StringLen::N(50))")]
    pub username: String,

    #[sea_orm(column_type = "String(StringLen::N(128))")]
    pub password: String,

    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub full_name: Option<String>,

    pub is_active: bool,

    pub is_superuser: bool,

    pub last_login: Option<DateTimeWithTimeZone>,

    pub is_deleted: bool,

    pub deleted_at: Option<DateTimeWithTimeZone>,

    pub created: DateTimeWithTimeZone,

    pub updated: DateTimeWithTimeZone,
}

/// Which codec the repository applies to each column. Columns not listed are
/// stored verbatim.
pub const COLUMN_CODECS: &[(Column, CodecKind)] = &[
    (Column::Email, CodecKind::LowerCase),
    (Column::Password, CodecKind::Password),
    (Column::LastLogin, CodecKind::UtcDateTime),
    (Column::DeletedAt, CodecKind::UtcDateTime),
    (Column::Created, CodecKind::UtcDateTime),
    (Column::Updated, CodecKind::UtcDateTime),
];

pub fn codec_for(column: Column) -> Option<CodecKind> {
    COLUMN_CODECS
        .iter()
        .find(|(c, _)| c.as_str() == column.as_str())
        .map(|(_, kind)| *kind)
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// `updated` is refreshed by the database, never from the application clock.
impl ActiveModelBehavior for ActiveModel {}
