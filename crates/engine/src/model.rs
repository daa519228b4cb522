use serde::{Deserialize, Serialize};

use crate::catalog::ServiceEntry;

// ---------------------------------------------------------------------------
// Document header
// ---------------------------------------------------------------------------

/// Recipient of the quote. All fields are free text; nothing is validated
/// beyond being present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientData {
    pub name: String,
    /// Contact line, e.g. "A/C Sr Ranieri".
    pub contact: String,
    pub phone: String,
    pub address: String,
    pub email: String,
}

/// Issuing company identity and branding. The image behind `logo_url` is
/// owned by the host application, never by the model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyData {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub site: String,
    pub logo_url: String,
    pub signatory_name: String,
    pub mobile: String,
    pub secondary_email: String,
}

/// Commercial conditions block. Six independent free-text fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyConditions {
    pub payment: String,
    pub freight: String,
    pub taxes: String,
    pub min_billing: String,
    pub shipping: String,
    pub validity: String,
}

// ---------------------------------------------------------------------------
// Line items
// ---------------------------------------------------------------------------

fn default_kits() -> u32 {
    1
}

/// Quantity × unit-price line. Tax rates are carried for display only and
/// are never folded into the monetary total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitItem {
    pub id: String,
    pub service_name: String,
    #[serde(default)]
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
    #[serde(default)]
    pub tax_ipi: Option<f64>,
    #[serde(default)]
    pub tax_icms: Option<f64>,
    #[serde(default = "default_kits")]
    pub kits: u32,
}

impl UnitItem {
    /// Copy a catalog entry into a fresh line. `name`, `unit` and
    /// `unit_price` are copied BY VALUE: later catalog edits never reach
    /// an already-created item.
    pub fn from_catalog(id: impl Into<String>, entry: &ServiceEntry) -> Self {
        Self {
            id: id.into(),
            service_name: entry.name.clone(),
            description: String::new(),
            unit: entry.unit.clone(),
            quantity: 0.0,
            unit_price: entry.unit_price,
            tax_ipi: None,
            tax_icms: None,
            kits: 1,
        }
    }
}

/// Packaging-weight × kits × price-per-kg line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightItem {
    pub id: String,
    pub product: String,
    #[serde(default)]
    pub description: String,
    /// e.g. "Parte A".
    #[serde(default)]
    pub packaging_type: String,
    /// Weight of one packaging unit, in kg.
    pub packaging_weight: f64,
    pub price_per_kg: f64,
    #[serde(default)]
    pub ipi: f64,
    #[serde(default)]
    pub icms: f64,
    #[serde(default = "default_kits")]
    pub kits: u32,
}

/// One priced line within a section. The two pricing shapes are structurally
/// distinct, so the model keeps them as a tagged union rather than one
/// overloaded record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "pricing", rename_all = "snake_case")]
pub enum Item {
    Unit(UnitItem),
    Weight(WeightItem),
}

impl Item {
    pub fn id(&self) -> &str {
        match self {
            Item::Unit(item) => &item.id,
            Item::Weight(item) => &item.id,
        }
    }

    /// Display label: the service or product name.
    pub fn label(&self) -> &str {
        match self {
            Item::Unit(item) => &item.service_name,
            Item::Weight(item) => &item.product,
        }
    }
}

// ---------------------------------------------------------------------------
// Sections and charges
// ---------------------------------------------------------------------------

/// A named monetary line not tied to a specific item (freight, DIFAL, ST).
/// Negative values are credits/discounts and are accepted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementalCharge {
    pub id: String,
    pub description: String,
    pub value: f64,
}

/// A grouped work area of the quote (one floor/zone) with its own area size
/// and item list. Section-level extras stay outside the material total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// Area in m². Zero is tolerated everywhere downstream.
    #[serde(default)]
    pub area_size: f64,
    #[serde(default)]
    pub description: String,
    /// Free-text consumption note, e.g. "120g/m²".
    #[serde(default)]
    pub consumption: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub supplemental: Vec<SupplementalCharge>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            area_size: 0.0,
            description: String::new(),
            consumption: None,
            items: Vec::new(),
            supplemental: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The whole quote. The document exclusively owns its sections; each section
/// exclusively owns its items and extras. Hosts treat the document as an
/// immutable snapshot passed by value between editor, core and renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteDocument {
    pub number: String,
    /// Issue date as free text (the host picks the convention, e.g. "21/11/2025").
    pub date: String,
    pub reference: String,
    pub subject: String,
    pub salutation: String,
    pub intro_text: String,
    pub client: ClientData,
    pub company: CompanyData,
    pub sections: Vec<Section>,
    /// Document-level extras ("Frete Total", tax adjustments).
    pub global_extras: Vec<SupplementalCharge>,
    pub conditions: SupplyConditions,
    pub notes: String,
}

impl QuoteDocument {
    /// A placeholder document: one empty section, everything else blank.
    /// The editor fills fields in one by one.
    pub fn new(number: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            date: date.into(),
            subject: "Proposta Comercial".to_string(),
            salutation: "Prezados Senhores,".to_string(),
            sections: vec![Section::new("1", "Área 1")],
            ..Self::default()
        }
    }
}
