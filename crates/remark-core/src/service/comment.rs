//! Comment service layer
//!
//! Free functions over a [`DatabaseConnection`], one per operation. All
//! read paths go through [`active`] so soft-deleted rows are excluded
//! everywhere, including the lookups inside update and delete.

use sea_orm::*;

use remark_common::RemarkError;
use remark_persistence::entity::comments;

use crate::model::{CommentFilterParameters, CommentInfo};

/// Active-only query constructor.
///
/// Soft-deleted rows stay in the table but are invisible to every read;
/// there is deliberately no "include deleted" variant.
fn active() -> Select<comments::Entity> {
    comments::Entity::find().filter(comments::Column::IsDeleted.eq(false))
}

/// Find all comments matching the filter parameters.
pub async fn find_all(
    db: &DatabaseConnection,
    filter: &CommentFilterParameters,
) -> anyhow::Result<Vec<CommentInfo>> {
    let models = build_query(filter)?.all(db).await?;

    Ok(models.into_iter().map(CommentInfo::from).collect())
}

/// Find the comment by its id.
pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<CommentInfo> {
    let model = find_one(db, id).await?;

    Ok(CommentInfo::from(model))
}

/// Find a non-deleted comment row by id.
///
/// Shared by the read, update, and delete paths so the not-found contract
/// lives in one place. A soft-deleted id and a never-existing id are
/// indistinguishable to callers.
pub async fn find_one(db: &DatabaseConnection, id: i32) -> anyhow::Result<comments::Model> {
    active()
        .filter(comments::Column::Id.eq(id))
        .one(db)
        .await?
        .ok_or_else(|| RemarkError::CommentNotFound.into())
}

/// Save a new comment.
///
/// The store assigns the id; timestamps are set here before the insert and
/// the response is built from those in-memory values. Actor ids stay unset.
pub async fn create(
    db: &DatabaseConnection,
    comment: &str,
    module_name: &str,
    entity_name: &str,
    entity_id: i32,
) -> anyhow::Result<CommentInfo> {
    let now = chrono::Utc::now().fixed_offset();
    let entity = comments::ActiveModel {
        comment: Set(comment.to_string()),
        module_name: Set(module_name.to_string()),
        entity_name: Set(entity_name.to_string()),
        entity_id: Set(entity_id),
        created_at: Set(now),
        updated_at: Set(now),
        is_deleted: Set(false),
        ..Default::default()
    };

    let res = comments::Entity::insert(entity).exec(db).await?;

    Ok(CommentInfo {
        id: res.last_insert_id,
        comment: comment.to_string(),
        module_name: module_name.to_string(),
        entity_name: entity_name.to_string(),
        entity_id,
        created_at: now,
        updated_at: now,
        created_by: None,
        updated_by: None,
    })
}

/// Update a comment.
///
/// Only the free-text comment field is mutable; module/entity identity is
/// fixed at creation.
pub async fn update(db: &DatabaseConnection, id: i32, comment: &str) -> anyhow::Result<CommentInfo> {
    let model = find_one(db, id).await?;

    let mut entity: comments::ActiveModel = model.into();
    entity.comment = Set(comment.to_string());
    entity.updated_at = Set(chrono::Utc::now().fixed_offset());

    let model = entity.update(db).await?;

    Ok(CommentInfo::from(model))
}

/// Soft-delete a comment.
///
/// Flips the flag and refreshes `updated_at`; the row stays in the table.
pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<()> {
    let model = find_one(db, id).await?;

    let mut entity: comments::ActiveModel = model.into();
    entity.is_deleted = Set(true);
    entity.updated_at = Set(chrono::Utc::now().fixed_offset());

    entity.update(db).await?;

    Ok(())
}

/// Translate the filter parameters into a query.
///
/// Each present field contributes one predicate, combined with AND on top
/// of the implicit active-only predicate. The `comment` filter field is
/// accepted but contributes nothing, matching the wire contract.
fn build_query(
    filter: &CommentFilterParameters,
) -> Result<Select<comments::Entity>, RemarkError> {
    let mut select = active();

    if let Some(id) = filter.id {
        select = select.filter(comments::Column::Id.eq(id));
    }
    if let Some(created_by) = filter.created_by {
        select = select.filter(comments::Column::CreatedBy.eq(created_by));
    }
    if let Some(updated_by) = filter.updated_by {
        select = select.filter(comments::Column::UpdatedBy.eq(updated_by));
    }
    if let Some(module_name) = &filter.module_name {
        select = select.filter(comments::Column::ModuleName.eq(module_name.clone()));
    }
    if let Some(entity_name) = &filter.entity_name {
        select = select.filter(comments::Column::EntityName.eq(entity_name.clone()));
    }
    if let Some(entity_id) = filter.entity_id {
        select = select.filter(comments::Column::EntityId.eq(entity_id));
    }

    if filter.created_at.is_some() {
        let (start, end) = parse_date_range(filter.created_at.as_deref())?;
        select = select.filter(comments::Column::CreatedAt.between(start, end));
    }
    if filter.updated_at.is_some() {
        // The updatedAt range value is carried in the createdAt parameter.
        let (start, end) = parse_date_range(filter.created_at.as_deref())?;
        select = select.filter(comments::Column::UpdatedAt.between(start, end));
    }

    let select = match (&filter.sort_by, &filter.sort_order) {
        (Some(sort_by), Some(sort_order)) => {
            let column = sort_column(sort_by)
                .ok_or_else(|| RemarkError::InvalidSortField(sort_by.clone()))?;
            if sort_order.eq_ignore_ascii_case("desc") {
                select.order_by_desc(column)
            } else {
                select.order_by_asc(column)
            }
        }
        _ => select.order_by_desc(comments::Column::Id),
    };

    match (filter.page_size, filter.page_number) {
        (Some(page_size), Some(page_number)) => {
            // Page numbers are 1-based.
            let offset = page_number.saturating_sub(1) * page_size;
            Ok(select.offset(offset).limit(page_size))
        }
        _ => Ok(select),
    }
}

/// Map a wire-level sort field name onto an entity column.
///
/// Unknown names are rejected instead of being handed to the query layer.
fn sort_column(name: &str) -> Option<comments::Column> {
    match name {
        "id" => Some(comments::Column::Id),
        "comment" => Some(comments::Column::Comment),
        "moduleName" => Some(comments::Column::ModuleName),
        "entityName" => Some(comments::Column::EntityName),
        "entityId" => Some(comments::Column::EntityId),
        "createdAt" => Some(comments::Column::CreatedAt),
        "updatedAt" => Some(comments::Column::UpdatedAt),
        "createdBy" => Some(comments::Column::CreatedBy),
        "updatedBy" => Some(comments::Column::UpdatedBy),
        _ => None,
    }
}

/// Parse a `"<millis>to<millis>"` range string into inclusive bounds.
fn parse_date_range(
    value: Option<&str>,
) -> Result<(sea_orm::prelude::DateTimeWithTimeZone, sea_orm::prelude::DateTimeWithTimeZone), RemarkError>
{
    let value = value.ok_or(RemarkError::InvalidDateRange)?;
    let parts: Vec<&str> = value.split("to").collect();
    if parts.len() < 2 {
        return Err(RemarkError::InvalidDateRange);
    }

    let start_ms: i64 = parts[0].parse().map_err(|_| RemarkError::InvalidDateRange)?;
    let end_ms: i64 = parts[1].parse().map_err(|_| RemarkError::InvalidDateRange)?;

    let start =
        chrono::DateTime::from_timestamp_millis(start_ms).ok_or(RemarkError::InvalidDateRange)?;
    let end =
        chrono::DateTime::from_timestamp_millis(end_ms).ok_or(RemarkError::InvalidDateRange)?;

    Ok((start.fixed_offset(), end.fixed_offset()))
}
