//! Quote document commands: new / total / refine / catalog.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use cotador_assist::SuggestionClient;
use cotador_config::Settings;
use cotador_engine::{totals, QuoteDocument, ServiceCatalog};
use serde::Serialize;

use crate::util::{format_brl, format_qty};
use crate::CliError;

// ── new ─────────────────────────────────────────────────────────────

pub fn cmd_new(output: Option<PathBuf>) -> Result<(), CliError> {
    let settings = Settings::load();
    let now = Local::now();

    // Sequential-looking number derived from the clock; the operator edits
    // it to the real sequence before sending.
    let number = format!("COT-{}-{:04}", now.format("%y"), now.timestamp() % 10_000);
    let mut doc = QuoteDocument::new(number, now.format("%d/%m/%Y").to_string());
    doc.company = settings.company.clone();

    write_json(&doc, output.as_deref())
}

// ── total ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SectionReport {
    id: String,
    title: String,
    area_size: f64,
    materials: f64,
    per_area_unit_value: f64,
    extras: f64,
}

/// Every derived figure of a document, materials and extras kept apart.
/// Which of `materials_total`/`quote_total` is "the" total is the caller's
/// call; both are always present.
#[derive(Debug, Serialize)]
pub struct TotalReport {
    sections: Vec<SectionReport>,
    materials_total: f64,
    global_extras_total: f64,
    extras_total: f64,
    quote_total: f64,
}

pub fn build_report(doc: &QuoteDocument) -> TotalReport {
    TotalReport {
        sections: doc
            .sections
            .iter()
            .map(|s| SectionReport {
                id: s.id.clone(),
                title: s.title.clone(),
                area_size: s.area_size,
                materials: totals::section_total(s),
                per_area_unit_value: totals::per_area_unit_value(s),
                extras: totals::section_extras_total(s),
            })
            .collect(),
        materials_total: totals::materials_total(doc),
        global_extras_total: totals::global_extras_total(doc),
        extras_total: totals::extras_total(doc),
        quote_total: totals::quote_total(doc),
    }
}

pub fn cmd_total(quote: PathBuf, json: bool) -> Result<(), CliError> {
    let doc = read_document(&quote)?;
    let report = build_report(&doc);

    if json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| CliError::io(format!("report serialization error: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    for (idx, section) in report.sections.iter().enumerate() {
        println!(
            "ITEM {} · {} ({} m²)",
            idx + 1,
            section.title,
            format_qty(section.area_size)
        );
        println!("  Materiais:        R$ {}", format_brl(section.materials));
        println!(
            "  Valor por m²:     R$ {}",
            format_brl(section.per_area_unit_value)
        );
        if section.extras != 0.0 {
            println!("  Extras da seção:  R$ {}", format_brl(section.extras));
        }
    }

    println!();
    println!("Total materiais:    R$ {}", format_brl(report.materials_total));
    println!("Extras:             R$ {}", format_brl(report.extras_total));
    println!("Total com extras:   R$ {}", format_brl(report.quote_total));

    Ok(())
}

// ── refine ──────────────────────────────────────────────────────────

pub fn cmd_refine(quote: PathBuf, output: Option<PathBuf>) -> Result<(), CliError> {
    let mut doc = read_document(&quote)?;
    let settings = Settings::load();

    let hint = if doc.subject.trim().is_empty() {
        "construção civil"
    } else {
        doc.subject.as_str()
    };

    // On any provider failure the notes come back unchanged, so the
    // document written below is always valid.
    let client = SuggestionClient::from_settings(&settings.ai);
    doc.notes = client.refine_notes(&doc.notes, hint);

    write_json(&doc, output.as_deref())
}

// ── catalog ─────────────────────────────────────────────────────────

pub fn cmd_catalog(catalog: PathBuf) -> Result<(), CliError> {
    let contents = fs::read_to_string(&catalog)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", catalog.display())))?;
    let catalog: ServiceCatalog = serde_json::from_str(&contents)
        .map_err(|e| CliError::parse(format!("invalid catalog file: {e}")))?;

    for entry in &catalog {
        println!(
            "{:<44} {:<6} R$ {:>12}",
            entry.name,
            entry.unit,
            format_brl(entry.unit_price)
        );
        if let Some(scope) = &entry.scope {
            println!("    {scope}");
        }
    }
    eprintln!("{} entries", catalog.len());

    Ok(())
}

// ── shared helpers ──────────────────────────────────────────────────

fn read_document(path: &Path) -> Result<QuoteDocument, CliError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&contents)
        .map_err(|e| CliError::parse(format!("invalid quote file: {e}")))
}

fn write_json(doc: &QuoteDocument, output: Option<&Path>) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| CliError::io(format!("document serialization error: {e}")))?;
    match output {
        Some(path) => fs::write(path, json.as_bytes())
            .map_err(|e| CliError::io(format!("cannot write {}: {e}", path.display()))),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cotador_engine::{Item, Section, SupplementalCharge, UnitItem, WeightItem};

    fn sample_document() -> QuoteDocument {
        let mut doc = QuoteDocument::new("COT-26-0001", "06/08/2026");
        doc.sections[0].area_size = 4950.0;
        doc.sections[0].items.push(Item::Unit(UnitItem {
            id: "u1".into(),
            service_name: "Lapidação de piso".into(),
            description: String::new(),
            unit: "M²".into(),
            quantity: 100.0,
            unit_price: 85.5,
            tax_ipi: None,
            tax_icms: None,
            kits: 1,
        }));

        let mut area2 = Section::new("2", "Área 2");
        area2.area_size = 4950.0;
        area2.items.push(Item::Weight(WeightItem {
            id: "w1".into(),
            product: "Duratop SD".into(),
            description: String::new(),
            packaging_type: "Parte A".into(),
            packaging_weight: 231.0,
            price_per_kg: 4.55,
            ipi: 0.0,
            icms: 17.0,
            kits: 3,
        }));
        doc.sections.push(area2);

        doc.global_extras.push(SupplementalCharge {
            id: "g1".into(),
            description: "Frete Total".into(),
            value: -50.0,
        });
        doc
    }

    #[test]
    fn report_keeps_materials_and_extras_apart() {
        let report = build_report(&sample_document());
        assert_eq!(report.sections.len(), 2);
        assert!((report.materials_total - 11703.15).abs() < 1e-9);
        assert!((report.extras_total + 50.0).abs() < 1e-9);
        assert!((report.quote_total - 11653.15).abs() < 1e-9);
    }

    #[test]
    fn report_json_shape_is_stable() {
        // The --json output is consumed by scripts; field names are contract.
        let value = serde_json::to_value(build_report(&sample_document())).unwrap();
        assert!(value.get("materials_total").is_some());
        assert!(value.get("global_extras_total").is_some());
        assert!(value.get("extras_total").is_some());
        assert!(value.get("quote_total").is_some());
        assert_eq!(value["sections"][0]["id"], "1");
        assert!(value["sections"][0].get("per_area_unit_value").is_some());
    }

    #[test]
    fn documents_roundtrip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quote.json");
        write_json(&sample_document(), Some(&path)).unwrap();

        let back = read_document(&path).unwrap();
        assert_eq!(back.number, "COT-26-0001");
        assert_eq!(back.sections.len(), 2);
        let report = build_report(&back);
        assert!((report.quote_total - 11653.15).abs() < 1e-9);
    }
}
