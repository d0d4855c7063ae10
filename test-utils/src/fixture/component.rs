//! Component fixtures for creating in-memory test data.
//!
//! Provides component entity models for every kind with attribute payloads that satisfy
//! the kind's schema, so fixtures hydrate cleanly through the catalog service.

use entity::component;
use sea_orm::entity::prelude::Json;
use serde_json::json;

/// Default test component kind.
pub const DEFAULT_KIND: &str = "chassis";

/// Default test component name.
pub const DEFAULT_NAME: &str = "Test Component";

/// Default brand ID for components.
pub const DEFAULT_BRAND_ID: i32 = 1;

/// Default component price.
pub const DEFAULT_PRICE: f64 = 199.99;

/// Every registered kind name.
pub const KINDS: [&str; 8] = [
    "chassis",
    "expansion_card",
    "fiber_optic_card",
    "graphic_card",
    "network_card",
    "power_supply",
    "raid_controller",
    "ram",
];

/// Returns a valid attribute payload for the given kind.
///
/// Unknown kinds yield an empty object.
pub fn attributes(kind: &str) -> Json {
    match kind {
        "chassis" => json!({
            "type": "Rackmount",
            "form_factor": "2U",
            "material": "Steel",
        }),
        "expansion_card" => json!({
            "type": "Riser",
            "interface_type": "PCIe 4.0 x16",
            "speed": "16 GT/s",
            "power_rating": 25,
        }),
        "fiber_optic_card" => json!({
            "fiber_type": "Single-mode",
            "speed": "25 Gbps",
            "power_rating": 12,
        }),
        "graphic_card" => json!({
            "gpu_architecture": "Ampere",
            "memory_type": "GDDR6",
            "power_rating": 300,
        }),
        "network_card" => json!({
            "model": "X710-DA2",
            "interface": "SFP+",
            "speed": "10 Gbps",
        }),
        "power_supply" => json!({
            "capacity": 1100,
            "efficiency": 94.5,
            "form_factor": "CRPS",
            "modular": true,
        }),
        "raid_controller" => json!({
            "model": "PERC H755",
            "supported_levels": ["0", "1", "5", "10"],
        }),
        "ram" => json!({
            "capacity": 32,
            "type": "DDR5",
            "speed": 4800,
        }),
        _ => json!({}),
    }
}

/// Creates a component entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - kind: `"chassis"`
/// - name: `"Test Component"`
/// - brand_id: `1`
/// - image_id: `None`
/// - price: `199.99`
/// - attributes: valid chassis attributes
pub fn entity() -> component::Model {
    entity_builder().build()
}

/// Creates a builder for customizing a component entity model.
pub fn entity_builder() -> ComponentEntityBuilder {
    ComponentEntityBuilder {
        entity: component::Model {
            id: 1,
            kind: DEFAULT_KIND.to_string(),
            name: DEFAULT_NAME.to_string(),
            brand_id: DEFAULT_BRAND_ID,
            image_id: None,
            price: DEFAULT_PRICE,
            attributes: attributes(DEFAULT_KIND),
        },
    }
}

/// Builder for component entity models.
///
/// Setting the kind also resets the attributes to that kind's defaults; call
/// `attributes()` afterwards to override them.
pub struct ComponentEntityBuilder {
    entity: component::Model,
}

impl ComponentEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        let kind = kind.into();
        self.entity.attributes = attributes(&kind);
        self.entity.kind = kind;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn brand_id(mut self, brand_id: i32) -> Self {
        self.entity.brand_id = brand_id;
        self
    }

    pub fn image_id(mut self, image_id: Option<i32>) -> Self {
        self.entity.image_id = image_id;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    pub fn attributes(mut self, attributes: Json) -> Self {
        self.entity.attributes = attributes;
        self
    }

    pub fn build(self) -> component::Model {
        self.entity
    }
}
