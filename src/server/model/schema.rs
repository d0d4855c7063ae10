//! Per-kind attribute schema descriptors.
//!
//! Every kind shares the common fields (`id`, `name`, `brand_id`, `image`, `price`)
//! and adds its own fixed attribute list. The descriptors are pure data; `validate`
//! checks an attribute payload against them before it is decoded into
//! `ComponentAttributes`.

use serde_json::Value;

use crate::{
    model::schema::{FieldDto, SchemaDto},
    server::{error::catalog::CatalogError, model::kind::ComponentKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Decimal,
    Text,
    TextList,
    Boolean,
    Reference(&'static str),
    OptionalReference(&'static str),
}

impl FieldType {
    fn describe(&self) -> String {
        match self {
            FieldType::Integer => "integer".to_string(),
            FieldType::Decimal => "decimal".to_string(),
            FieldType::Text => "text".to_string(),
            FieldType::TextList => "text_list".to_string(),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::Reference(target) => format!("reference:{}", target),
            FieldType::OptionalReference(target) => format!("optional_reference:{}", target),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub field_type: FieldType,
}

const fn field(name: &'static str, field_type: FieldType) -> FieldSpec {
    FieldSpec { name, field_type }
}

pub const COMMON_FIELDS: &[FieldSpec] = &[
    field("id", FieldType::Integer),
    field("name", FieldType::Text),
    field("brand_id", FieldType::Reference("brand")),
    field("image", FieldType::OptionalReference("image")),
    field("price", FieldType::Decimal),
];

const CHASSIS_FIELDS: &[FieldSpec] = &[
    field("type", FieldType::Text),
    field("form_factor", FieldType::Text),
    field("material", FieldType::Text),
];

const EXPANSION_CARD_FIELDS: &[FieldSpec] = &[
    field("type", FieldType::Text),
    field("interface_type", FieldType::Text),
    field("speed", FieldType::Text),
    field("power_rating", FieldType::Integer),
];

const FIBER_OPTIC_CARD_FIELDS: &[FieldSpec] = &[
    field("fiber_type", FieldType::Text),
    field("speed", FieldType::Text),
    field("power_rating", FieldType::Integer),
];

const GRAPHIC_CARD_FIELDS: &[FieldSpec] = &[
    field("gpu_architecture", FieldType::Text),
    field("memory_type", FieldType::Text),
    field("power_rating", FieldType::Integer),
];

const NETWORK_CARD_FIELDS: &[FieldSpec] = &[
    field("model", FieldType::Text),
    field("interface", FieldType::Text),
    field("speed", FieldType::Text),
];

const POWER_SUPPLY_FIELDS: &[FieldSpec] = &[
    field("capacity", FieldType::Integer),
    field("efficiency", FieldType::Decimal),
    field("form_factor", FieldType::Text),
    field("modular", FieldType::Boolean),
];

const RAID_CONTROLLER_FIELDS: &[FieldSpec] = &[
    field("model", FieldType::Text),
    field("supported_levels", FieldType::TextList),
];

const RAM_FIELDS: &[FieldSpec] = &[
    field("capacity", FieldType::Integer),
    field("type", FieldType::Text),
    field("speed", FieldType::Integer),
];

/// Attribute layout of one component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSchema {
    pub kind: ComponentKind,
    pub common_fields: &'static [FieldSpec],
    pub kind_fields: &'static [FieldSpec],
}

/// Looks up the schema descriptor for a kind.
pub fn schema_of(kind: ComponentKind) -> ComponentSchema {
    let kind_fields = match kind {
        ComponentKind::Chassis => CHASSIS_FIELDS,
        ComponentKind::ExpansionCard => EXPANSION_CARD_FIELDS,
        ComponentKind::FiberOpticCard => FIBER_OPTIC_CARD_FIELDS,
        ComponentKind::GraphicCard => GRAPHIC_CARD_FIELDS,
        ComponentKind::NetworkCard => NETWORK_CARD_FIELDS,
        ComponentKind::PowerSupply => POWER_SUPPLY_FIELDS,
        ComponentKind::RaidController => RAID_CONTROLLER_FIELDS,
        ComponentKind::Ram => RAM_FIELDS,
    };

    ComponentSchema {
        kind,
        common_fields: COMMON_FIELDS,
        kind_fields,
    }
}

impl ComponentSchema {
    /// Checks a kind-specific attribute payload.
    ///
    /// The payload must be a JSON object holding exactly the kind fields, each with the
    /// declared type. Numeric fields must be non-negative.
    ///
    /// # Returns
    /// - `Ok(())` - Payload matches the schema
    /// - `Err(CatalogError::InvalidPayload)` - Describes the first mismatch found
    pub fn validate(&self, attributes: &Value) -> Result<(), CatalogError> {
        let Some(object) = attributes.as_object() else {
            return Err(CatalogError::InvalidPayload(format!(
                "Attributes for {} must be a JSON object",
                self.kind
            )));
        };

        if let Some(unknown) = object
            .keys()
            .find(|key| !self.kind_fields.iter().any(|f| f.name == key.as_str()))
        {
            return Err(CatalogError::InvalidPayload(format!(
                "Unknown attribute '{}' for {}",
                unknown, self.kind
            )));
        }

        for spec in self.kind_fields {
            let Some(value) = object.get(spec.name) else {
                return Err(CatalogError::InvalidPayload(format!(
                    "Missing attribute '{}' for {}",
                    spec.name, self.kind
                )));
            };

            check_value(self.kind, spec, value)?;
        }

        Ok(())
    }

    pub fn into_dto(self) -> SchemaDto {
        let to_dto = |spec: &FieldSpec| FieldDto {
            name: spec.name.to_string(),
            field_type: spec.field_type.describe(),
        };

        SchemaDto {
            kind: self.kind.to_string(),
            common_fields: self.common_fields.iter().map(to_dto).collect(),
            kind_fields: self.kind_fields.iter().map(to_dto).collect(),
        }
    }
}

fn check_value(kind: ComponentKind, spec: &FieldSpec, value: &Value) -> Result<(), CatalogError> {
    let type_error = || {
        CatalogError::InvalidPayload(format!(
            "Attribute '{}' for {} must be of type {}",
            spec.name,
            kind,
            spec.field_type.describe()
        ))
    };
    let negative_error = || {
        CatalogError::InvalidPayload(format!(
            "Attribute '{}' for {} must be non-negative",
            spec.name, kind
        ))
    };

    match spec.field_type {
        FieldType::Integer => {
            if value.is_u64() {
                Ok(())
            } else if value.is_i64() {
                Err(negative_error())
            } else {
                Err(type_error())
            }
        }
        FieldType::Decimal => match value.as_f64() {
            Some(number) if number >= 0.0 => Ok(()),
            Some(_) => Err(negative_error()),
            None => Err(type_error()),
        },
        FieldType::Text => value.is_string().then_some(()).ok_or_else(type_error),
        FieldType::TextList => match value.as_array() {
            Some(items) if items.iter().all(Value::is_string) => Ok(()),
            _ => Err(type_error()),
        },
        FieldType::Boolean => value.is_boolean().then_some(()).ok_or_else(type_error),
        FieldType::Reference(_) | FieldType::OptionalReference(_) => Err(type_error()),
    }
}
