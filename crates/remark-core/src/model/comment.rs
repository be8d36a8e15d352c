use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use remark_persistence::entity::comments;

/// Comment representation for API responses
///
/// Mirrors the stored row minus the soft-delete flag, which is never
/// exposed on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentInfo {
    pub id: i32,
    pub comment: String,
    pub module_name: String,
    pub entity_name: String,
    pub entity_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

impl From<comments::Model> for CommentInfo {
    fn from(model: comments::Model) -> Self {
        Self {
            id: model.id,
            comment: model.comment,
            module_name: model.module_name,
            entity_name: model.entity_name,
            entity_id: model.entity_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
            created_by: model.created_by,
            updated_by: model.updated_by,
        }
    }
}

/// Request body for creating a comment
///
/// All fields are required on the wire; they stay optional here so the
/// handler can answer with the fixed per-field messages instead of a
/// deserialization error.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateParam {
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub module_name: Option<String>,
    #[serde(default)]
    pub entity_name: Option<String>,
    #[serde(default)]
    pub entity_id: Option<i32>,
}

/// Request body for updating a comment
///
/// Only the comment text is mutable; identity fields supplied in the body
/// are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdateParam {
    #[serde(default)]
    pub comment: Option<String>,
}

/// Flat filter/sort/page parameter set for list queries
///
/// Every field is optional; absent fields impose no constraint.
/// `created_at`/`updated_at` carry a range string of two epoch-millisecond
/// values separated by the literal `to`, e.g. `1700000000000to1700003600000`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentFilterParameters {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub created_by: Option<i32>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub updated_by: Option<i32>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub module_name: Option<String>,
    #[serde(default)]
    pub entity_name: Option<String>,
    #[serde(default)]
    pub entity_id: Option<i32>,
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
    #[serde(default)]
    pub page_number: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_info_from_model() {
        let now = chrono::Utc::now().fixed_offset();
        let model = comments::Model {
            id: 7,
            comment: "looks good".to_string(),
            module_name: "orders".to_string(),
            entity_name: "order".to_string(),
            entity_id: 42,
            created_at: now,
            updated_at: now,
            created_by: None,
            updated_by: None,
            is_deleted: false,
        };

        let info = CommentInfo::from(model);
        assert_eq!(info.id, 7);
        assert_eq!(info.comment, "looks good");
        assert_eq!(info.module_name, "orders");
        assert_eq!(info.entity_name, "order");
        assert_eq!(info.entity_id, 42);
        assert!(info.created_by.is_none());
    }

    #[test]
    fn test_comment_info_serializes_camel_case() {
        let now = chrono::Utc::now().fixed_offset();
        let info = CommentInfo {
            id: 1,
            comment: "hi".to_string(),
            module_name: "orders".to_string(),
            entity_name: "order".to_string(),
            entity_id: 2,
            created_at: now,
            updated_at: now,
            created_by: None,
            updated_by: None,
        };

        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("moduleName").is_some());
        assert!(json.get("entityName").is_some());
        assert!(json.get("entityId").is_some());
        assert!(json.get("createdAt").is_some());
        // Unpopulated actor ids serialize as explicit nulls.
        assert!(json.get("createdBy").unwrap().is_null());
        // The soft-delete flag never appears on the wire.
        assert!(json.get("isDeleted").is_none());
    }

    #[test]
    fn test_filter_parameters_from_query_string() {
        let filter: CommentFilterParameters = serde_urlencoded_from(
            "moduleName=orders&entityId=2&pageSize=10&pageNumber=1&sortOrder=desc",
        );
        assert_eq!(filter.module_name.as_deref(), Some("orders"));
        assert_eq!(filter.entity_id, Some(2));
        assert_eq!(filter.page_size, Some(10));
        assert_eq!(filter.page_number, Some(1));
        assert_eq!(filter.sort_order.as_deref(), Some("desc"));
        assert!(filter.id.is_none());
        assert!(filter.created_at.is_none());
    }

    #[test]
    fn test_update_param_ignores_identity_fields() {
        let param: CommentUpdateParam = serde_json::from_str(
            r#"{"comment":"edited","moduleName":"other","entityId":99}"#,
        )
        .unwrap();
        assert_eq!(param.comment.as_deref(), Some("edited"));
    }

    fn serde_urlencoded_from(query: &str) -> CommentFilterParameters {
        // web::Query uses the same urlencoded deserializer under the hood.
        serde_urlencoded::from_str(query).unwrap()
    }
}
