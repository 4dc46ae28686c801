//! The updater: applies change records to a loaded types document.
//!
//! Pure in-memory mutation; file I/O stays with the caller so a failed run
//! never leaves a partial output behind.

use crate::config::{Config, ItemChange};
use crate::error::{Error, Result};
use crate::xmlfmt::{Element, TypesDoc};

/// Outcome of applying a whole change list.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Total number of `<type>` entries touched.
    pub updated: usize,
    /// Record names that matched no entry, in record order. Diagnostic only.
    pub unmatched: Vec<String>,
}

/// Apply one change record to every matching `<type>` entry in the tree.
///
/// Matching is by exact, case-sensitive `name` attribute; duplicates are all
/// updated identically. Returns how many entries matched. The nominal is
/// rescaled with truncation toward zero, restock/lifetime are overwritten
/// only when the record provides them, and the four tier flags are always
/// rewritten from the record's tier set.
pub fn apply_change(doc: &mut TypesDoc, change: &ItemChange) -> Result<usize> {
    let mask = change.tier_mask();
    let mut matched = 0usize;

    doc.root.visit_tag_mut("type", &mut |el| {
        if el.attr("name") != Some(change.name.as_str()) {
            return Ok(());
        }
        matched += 1;

        let nominal = read_nominal(el, &change.name)?;
        let scaled = (nominal as f64 * change.factor) as i64;
        el.set_attr("nominal", scaled.to_string());

        if let Some(restock) = change.restock {
            el.set_attr("restock", restock.to_string());
        }
        if let Some(lifetime) = change.lifetime {
            el.set_attr("lifetime", lifetime.to_string());
        }

        // Total overwrite: flags not in the record's tier set are cleared.
        for (i, enabled) in mask.iter().enumerate() {
            let key = format!("tier{}", i + 1);
            el.set_attr(&key, if *enabled { "1" } else { "0" });
        }
        Ok(())
    })?;

    Ok(matched)
}

/// Apply all records in order, collecting unmatched names.
pub fn apply_config(doc: &mut TypesDoc, cfg: &Config) -> Result<ApplyReport> {
    let mut report = ApplyReport::default();
    for change in &cfg.items {
        let matched = apply_change(doc, change)?;
        if matched == 0 {
            report.unmatched.push(change.name.clone());
        } else {
            report.updated += matched;
        }
    }
    Ok(report)
}

fn read_nominal(el: &Element, name: &str) -> Result<i64> {
    let raw = el.attr("nominal").ok_or_else(|| Error::MissingAttribute {
        name: name.to_string(),
        attr: "nominal",
    })?;
    raw.parse::<i64>().map_err(|_| Error::InvalidNominal {
        name: name.to_string(),
        value: raw.to_string(),
    })
}
