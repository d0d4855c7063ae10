use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FieldDto {
    pub name: String,
    pub field_type: String,
}

/// Attribute layout of one component kind.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SchemaDto {
    pub kind: String,
    pub common_fields: Vec<FieldDto>,
    pub kind_fields: Vec<FieldDto>,
}
