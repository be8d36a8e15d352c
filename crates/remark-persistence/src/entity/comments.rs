//! Comment entity
//!
//! One row per comment, attached to an owning domain object through the
//! `(module_name, entity_name, entity_id)` triple. Rows are never removed;
//! `is_deleted` marks them inactive and every read path filters on it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Free-text comment body; the only field mutable after creation.
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    /// Module of the owning domain object, e.g. "orders".
    pub module_name: String,
    /// Entity type of the owning domain object within the module.
    pub entity_name: String,
    /// Instance id of the owning domain object.
    pub entity_id: i32,
    pub created_at: DateTimeWithTimeZone,
    /// Refreshed on every mutating write, including soft delete.
    pub updated_at: DateTimeWithTimeZone,
    /// Actor ids; populated by an authentication layer, not by this core.
    #[sea_orm(nullable)]
    pub created_by: Option<i32>,
    #[sea_orm(nullable)]
    pub updated_by: Option<i32>,
    /// Soft-delete flag; never exposed on the wire.
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
