//! JSON dump of type entries, for inspecting a file before or after a run.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};

use crate::error::Result;
use crate::xmlfmt::{Element, TypesDoc, read_types};

/// Summary of one `<type>` entry: the attributes this tool manages.
pub fn type_summary(el: &Element) -> Value {
    let tiers: Vec<i64> = (1..=4)
        .filter(|i| el.attr(&format!("tier{i}")) == Some("1"))
        .collect();
    json!({
        "name": el.attr("name"),
        "nominal": int_attr(el, "nominal"),
        "restock": int_attr(el, "restock"),
        "lifetime": int_attr(el, "lifetime"),
        "tiers": tiers,
    })
}

fn int_attr(el: &Element, key: &str) -> Option<i64> {
    el.attr(key).and_then(|v| v.parse().ok())
}

/// All entries of a document as a JSON array, optionally filtered by name.
pub fn types_value(doc: &TypesDoc, name: Option<&str>) -> Value {
    let items: Vec<Value> = doc
        .type_entries()
        .into_iter()
        .filter(|el| name.is_none_or(|n| el.attr("name") == Some(n)))
        .map(type_summary)
        .collect();
    Value::Array(items)
}

pub fn dump_file_json(path: &Path, name: Option<&str>) -> Result<String> {
    let doc = read_types(path)?;
    Ok(serde_json::to_string_pretty(&types_value(&doc, name))?)
}

// Directory helpers
pub fn find_xml_files(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(rd) = fs::read_dir(dir) {
        for entry in rd.flatten() {
            let p = entry.path();
            if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("xml") {
                out.push(p);
            }
        }
    }
    out.sort();
    out
}

/// Map every `*.xml` file in a directory (non-recursive) to its entries.
/// A file that fails to parse becomes an `$error` entry instead of aborting.
pub fn dump_dir_map_json(dir: &Path, name: Option<&str>) -> Result<String> {
    let mut map = serde_json::Map::new();
    for f in find_xml_files(dir) {
        let key = f
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("file")
            .to_string();
        let value = match read_types(&f) {
            Ok(doc) => types_value(&doc, name),
            Err(e) => json!({"$error": e.to_string()}),
        };
        map.insert(key, value);
    }
    Ok(serde_json::to_string_pretty(&Value::Object(map))?)
}
