//! Laptop records as sent by the Catalog API and as shown in the listing.

use serde::{Deserialize, Serialize};

use crate::ids::LaptopId;
use crate::money::Money;

/// A laptop exactly as the Catalog API serializes it.
///
/// Field names follow the API's Spanish wire format. Older deployments use
/// camel-cased variants (`ramGb`, `tarjetaGrafica`, ...), accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLaptopRecord {
    pub id: LaptopId,

    #[serde(alias = "imagen", default)]
    pub image: String,

    #[serde(rename = "categoria")]
    pub category: String,

    #[serde(rename = "marca")]
    pub brand: String,

    #[serde(rename = "modelo")]
    pub model: String,

    #[serde(rename = "procesador", default)]
    pub processor: String,

    #[serde(rename = "ramgb", alias = "ramGb", alias = "ramGB")]
    pub ram_gb: u32,

    #[serde(rename = "almacenamientogb", alias = "almacenamientoGb", alias = "almacenamientoGB")]
    pub storage_gb: u32,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "pulgadas")]
    pub screen_inches: f64,

    #[serde(
        rename = "grafica",
        alias = "tarjetaGrafica",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub graphics: Option<String>,

    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A laptop ready for display. Built only by [`crate::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayLaptop {
    /// List key; the API's own identifier.
    pub id: LaptopId,
    /// Presentation-only number derived from `id`.
    pub numeric_id: Option<u32>,
    pub brand: String,
    pub model: String,
    /// Always lower-case.
    pub category: String,
    pub price: Money,
    pub image: String,
    pub processor: String,
    /// e.g. `16GB`
    pub ram: String,
    /// e.g. `512GB`
    pub storage: String,
    /// e.g. `15.6"`
    pub screen: String,
    /// Graphics card, or the locale's integrated-graphics label.
    pub graphics: String,
    pub has_dedicated_graphics: bool,
    /// Empty when the API sent none.
    pub description: String,
}

impl DisplayLaptop {
    /// `brand model`, used for titles and alt text.
    pub fn title(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}
