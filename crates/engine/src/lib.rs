//! `cotador-engine` — Commercial quote model.
//!
//! Pure model crate: the quote entity graph (document, sections, items,
//! supplemental charges), the service catalog, and the total derivations.
//! No IO or UI dependencies.

pub mod catalog;
pub mod model;
pub mod totals;

pub use catalog::{ServiceCatalog, ServiceEntry};
pub use model::{
    ClientData, CompanyData, Item, QuoteDocument, Section, SupplementalCharge, SupplyConditions,
    UnitItem, WeightItem,
};
