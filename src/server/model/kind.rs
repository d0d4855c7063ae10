//! The closed set of component kinds.

use std::{fmt, str::FromStr};

use crate::server::error::catalog::CatalogError;

/// One of the eight registered component kinds.
///
/// The string form is the snake_case name used in URLs, the `component.kind`
/// column and the `component_server.component_kind` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Chassis,
    ExpansionCard,
    FiberOpticCard,
    GraphicCard,
    NetworkCard,
    PowerSupply,
    RaidController,
    Ram,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 8] = [
        ComponentKind::Chassis,
        ComponentKind::ExpansionCard,
        ComponentKind::FiberOpticCard,
        ComponentKind::GraphicCard,
        ComponentKind::NetworkCard,
        ComponentKind::PowerSupply,
        ComponentKind::RaidController,
        ComponentKind::Ram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Chassis => "chassis",
            ComponentKind::ExpansionCard => "expansion_card",
            ComponentKind::FiberOpticCard => "fiber_optic_card",
            ComponentKind::GraphicCard => "graphic_card",
            ComponentKind::NetworkCard => "network_card",
            ComponentKind::PowerSupply => "power_supply",
            ComponentKind::RaidController => "raid_controller",
            ComponentKind::Ram => "ram",
        }
    }

    /// Human readable name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Chassis => "Chassis",
            ComponentKind::ExpansionCard => "Expansion card",
            ComponentKind::FiberOpticCard => "Fiber optic card",
            ComponentKind::GraphicCard => "Graphic card",
            ComponentKind::NetworkCard => "Network card",
            ComponentKind::PowerSupply => "Power supply",
            ComponentKind::RaidController => "RAID controller",
            ComponentKind::Ram => "RAM module",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownKind(s.to_string()))
    }
}
