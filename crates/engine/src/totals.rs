//! Total derivations over the quote graph.
//!
//! Every function here is pure and total: empty sequences sum to zero and
//! zero denominators yield zero, never NaN or an error. Results are exact
//! f64 values; rounding and locale formatting belong to the renderer.

use crate::model::{Item, QuoteDocument, Section, WeightItem};

/// Combined shipped weight of a weight-priced line: one packaging unit
/// times the number of kits.
pub fn effective_weight(item: &WeightItem) -> f64 {
    item.packaging_weight * item.kits as f64
}

/// Monetary total of one line, dispatching on the pricing shape.
/// Tax rates (IPI/ICMS) are metadata and are never folded in here.
pub fn item_total(item: &Item) -> f64 {
    match item {
        Item::Unit(item) => item.quantity * item.unit_price,
        Item::Weight(item) => effective_weight(item) * item.price_per_kg,
    }
}

/// Material total of a section: the sum of its item totals. Supplemental
/// charges stay out so operators see material cost and pass-through charges
/// as separate figures.
pub fn section_total(section: &Section) -> f64 {
    section.items.iter().map(item_total).sum()
}

/// Sum of a section's own supplemental charges.
pub fn section_extras_total(section: &Section) -> f64 {
    section.supplemental.iter().map(|c| c.value).sum()
}

/// Material cost per m² of the section's area. Guarded: a zero or negative
/// area yields 0.0, never a division error or infinity.
pub fn per_area_unit_value(section: &Section) -> f64 {
    if section.area_size > 0.0 {
        section_total(section) / section.area_size
    } else {
        0.0
    }
}

/// Materials-only document total: the sum of all section totals.
pub fn materials_total(document: &QuoteDocument) -> f64 {
    document.sections.iter().map(section_total).sum()
}

/// Sum of the document-level extras only.
pub fn global_extras_total(document: &QuoteDocument) -> f64 {
    document.global_extras.iter().map(|c| c.value).sum()
}

/// Every supplemental charge in the document: global extras plus each
/// section's extras. Each charge is counted exactly once.
pub fn extras_total(document: &QuoteDocument) -> f64 {
    global_extras_total(document) + document.sections.iter().map(section_extras_total).sum::<f64>()
}

/// The extras-inclusive figure. Callers choose between this and
/// [`materials_total`] as the headline number; the two are always exposed
/// side by side, never merged.
pub fn quote_total(document: &QuoteDocument) -> f64 {
    materials_total(document) + extras_total(document)
}
