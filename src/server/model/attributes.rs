//! Typed kind-specific component attributes.
//!
//! The `attributes` column stores exactly one of these payloads as JSON. Decoding is
//! driven by the component kind rather than by guessing from the shape, since several
//! kinds share field names (`speed`, `form_factor`, `type`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::server::model::kind::ComponentKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChassisAttributes {
    #[serde(rename = "type")]
    pub chassis_type: String,
    pub form_factor: String,
    pub material: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpansionCardAttributes {
    #[serde(rename = "type")]
    pub card_type: String,
    pub interface_type: String,
    pub speed: String,
    pub power_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FiberOpticCardAttributes {
    pub fiber_type: String,
    pub speed: String,
    pub power_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphicCardAttributes {
    pub gpu_architecture: String,
    pub memory_type: String,
    pub power_rating: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkCardAttributes {
    pub model: String,
    pub interface: String,
    pub speed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PowerSupplyAttributes {
    /// Watts.
    pub capacity: u32,
    /// Percent.
    pub efficiency: f64,
    pub form_factor: String,
    pub modular: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RaidControllerAttributes {
    pub model: String,
    pub supported_levels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RamAttributes {
    /// Gigabytes.
    pub capacity: u32,
    #[serde(rename = "type")]
    pub memory_type: String,
    /// MT/s.
    pub speed: u32,
}

/// Kind-specific attributes of a component, one variant per kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentAttributes {
    Chassis(ChassisAttributes),
    ExpansionCard(ExpansionCardAttributes),
    FiberOpticCard(FiberOpticCardAttributes),
    GraphicCard(GraphicCardAttributes),
    NetworkCard(NetworkCardAttributes),
    PowerSupply(PowerSupplyAttributes),
    RaidController(RaidControllerAttributes),
    Ram(RamAttributes),
}

impl ComponentAttributes {
    /// Decodes a stored or submitted payload as the attributes of `kind`.
    pub fn decode(kind: ComponentKind, value: Value) -> Result<Self, serde_json::Error> {
        let attributes = match kind {
            ComponentKind::Chassis => Self::Chassis(serde_json::from_value(value)?),
            ComponentKind::ExpansionCard => Self::ExpansionCard(serde_json::from_value(value)?),
            ComponentKind::FiberOpticCard => Self::FiberOpticCard(serde_json::from_value(value)?),
            ComponentKind::GraphicCard => Self::GraphicCard(serde_json::from_value(value)?),
            ComponentKind::NetworkCard => Self::NetworkCard(serde_json::from_value(value)?),
            ComponentKind::PowerSupply => Self::PowerSupply(serde_json::from_value(value)?),
            ComponentKind::RaidController => Self::RaidController(serde_json::from_value(value)?),
            ComponentKind::Ram => Self::Ram(serde_json::from_value(value)?),
        };

        Ok(attributes)
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Chassis(_) => ComponentKind::Chassis,
            Self::ExpansionCard(_) => ComponentKind::ExpansionCard,
            Self::FiberOpticCard(_) => ComponentKind::FiberOpticCard,
            Self::GraphicCard(_) => ComponentKind::GraphicCard,
            Self::NetworkCard(_) => ComponentKind::NetworkCard,
            Self::PowerSupply(_) => ComponentKind::PowerSupply,
            Self::RaidController(_) => ComponentKind::RaidController,
            Self::Ram(_) => ComponentKind::Ram,
        }
    }

    /// Serializes back into the flat JSON object stored in the `attributes` column.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
