//! YAML change-list model and loader.
//!
//! The config is a mapping with one recognized key, `items`, holding an
//! ordered list of per-item change records. Field types are enforced at
//! deserialization; a record may target any number of `<type>` entries.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub items: Vec<ItemChange>,
}

/// One change record: matched against `<type name="...">` exactly.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemChange {
    pub name: String,
    /// Multiplier for the current nominal; result truncates toward zero.
    #[serde(default = "default_factor")]
    pub factor: f64,
    #[serde(default)]
    pub restock: Option<i64>,
    #[serde(default)]
    pub lifetime: Option<i64>,
    #[serde(default)]
    pub tier: Option<TierSpec>,
}

fn default_factor() -> f64 {
    1.0
}

/// Tier field accepts a single integer or a sequence of integers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TierSpec {
    One(i64),
    Many(Vec<i64>),
}

impl ItemChange {
    /// Desired state of tier1..tier4 as a mask. Absent or null `tier` means
    /// all four disabled; values outside 1..=4 are ignored.
    pub fn tier_mask(&self) -> [bool; 4] {
        let mut mask = [false; 4];
        let tiers: &[i64] = match &self.tier {
            None => &[],
            Some(TierSpec::One(t)) => std::slice::from_ref(t),
            Some(TierSpec::Many(ts)) => ts.as_slice(),
        };
        for t in tiers {
            if (1..=4).contains(t) {
                mask[(*t - 1) as usize] = true;
            }
        }
        mask
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&text)?;
    Ok(cfg)
}
