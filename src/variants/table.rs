//! Declarative variant tables.
//!
//! A table lists the variants to produce from one base image and the rule that
//! places each overlay. Tables are written in YAML:
//!
//! ```yaml
//! placement:
//!   x_shift: 40
//!   y_fraction: 0.58
//!   generic_label: "?"
//!   generic_y_fraction: 0.59
//! variants:
//!   - name: brick_2-1
//!     overlay: catan_brick_logo.png
//!     label: "2:1"
//!     scale: 0.2
//!   - name: plain
//!     label: "3:1"
//!     scale: 0.15
//!     nudge: [0, -4]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TouchupError};

/// Where an overlay lands on the base image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// Horizontal shift from centre, in pixels.
    pub x_shift: i64,
    /// Top of the overlay as a fraction of base height.
    pub y_fraction: f64,
    /// Label that marks the generic variant.
    pub generic_label: String,
    /// `y_fraction` used for the generic variant.
    pub generic_y_fraction: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x_shift: 40,
            y_fraction: 0.58,
            generic_label: "?".to_string(),
            generic_y_fraction: 0.59,
        }
    }
}

/// One output variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantEntry {
    /// Suffix appended to the base file stem.
    pub name: String,
    /// Overlay image, relative to the table's directory. `None` copies the base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<PathBuf>,
    /// Trade label; selects generic or standard placement.
    pub label: String,
    /// Overlay edge length as a fraction of base width.
    pub scale: f64,
    /// Extra pixel offset applied after placement.
    #[serde(default, skip_serializing_if = "is_zero_nudge")]
    pub nudge: (i64, i64),
}

fn is_zero_nudge(n: &(i64, i64)) -> bool {
    *n == (0, 0)
}

impl VariantEntry {
    pub fn new(name: &str, overlay: Option<&str>, label: &str, scale: f64) -> Self {
        Self {
            name: name.to_string(),
            overlay: overlay.map(PathBuf::from),
            label: label.to_string(),
            scale,
            nudge: (0, 0),
        }
    }
}

/// Ordered list of variants plus their shared placement rule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantTable {
    pub placement: Placement,
    pub variants: Vec<VariantEntry>,
}

impl VariantTable {
    /// Load a table from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TouchupError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read variant table: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a table from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let table: Self = serde_yaml::from_str(content).map_err(|e| TouchupError::Parse {
            message: format!("Invalid variant table: {}", e),
            help: Some("Check the table's YAML syntax".to_string()),
        })?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for entry in &self.variants {
            if entry.name.is_empty() {
                return Err(TouchupError::Parse {
                    message: "Variant with an empty name".to_string(),
                    help: Some("Every variant needs a name for its output file".to_string()),
                });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(TouchupError::Parse {
                    message: format!("Duplicate variant name '{}'", entry.name),
                    help: Some("Variant names become file names and must be unique".to_string()),
                });
            }
        }
        Ok(())
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| TouchupError::Parse {
            message: format!("Failed to serialize variant table: {}", e),
            help: None,
        })
    }

    /// Port variants for the boat graphic.
    pub fn builtin_ports() -> Self {
        Self {
            placement: Placement::default(),
            variants: vec![
                VariantEntry::new("brick_2-1", Some("catan_brick_logo.png"), "2:1", 0.20),
                VariantEntry::new("sheep_2-1", Some("catan_sheep_logo.png"), "2:1", 0.195),
                VariantEntry::new("rock_2-1", Some("catan_rock_logo.png"), "2:1", 0.19),
                VariantEntry::new("wheat_2-1", Some("catan_wheat_logo.png"), "2:1", 0.168),
                VariantEntry::new("wood_2-1", Some("catan_wood_logo.png"), "2:1", 0.18),
                VariantEntry::new("generic_3-1", Some("catan_generic_logo.png"), "?", 0.151),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal() {
        let table = VariantTable::parse("variants: []").unwrap();
        assert_eq!(table.placement, Placement::default());
        assert!(table.variants.is_empty());
    }

    #[test]
    fn test_parse_empty_document() {
        let table = VariantTable::parse("").unwrap();
        assert_eq!(table, VariantTable::default());
    }

    #[test]
    fn test_parse_full() {
        let yaml = r#"
placement:
  x_shift: -12
  y_fraction: 0.5
variants:
  - name: brick
    overlay: logos/brick.png
    label: "2:1"
    scale: 0.25
  - name: plain
    label: "3:1"
    scale: 0.1
    nudge: [3, -4]
"#;
        let table = VariantTable::parse(yaml).unwrap();

        assert_eq!(table.placement.x_shift, -12);
        assert_eq!(table.placement.y_fraction, 0.5);
        assert_eq!(table.placement.generic_label, "?");
        assert_eq!(
            table.variants,
            vec![
                VariantEntry::new("brick", Some("logos/brick.png"), "2:1", 0.25),
                VariantEntry {
                    nudge: (3, -4),
                    ..VariantEntry::new("plain", None, "3:1", 0.1)
                },
            ]
        );
    }

    #[test]
    fn test_missing_scale_is_an_error() {
        let yaml = "variants:\n  - name: a\n    label: x\n";
        assert!(matches!(
            VariantTable::parse(yaml).unwrap_err(),
            TouchupError::Parse { .. }
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let yaml = r#"
variants:
  - { name: a, label: x, scale: 0.1 }
  - { name: a, label: y, scale: 0.2 }
"#;
        assert!(VariantTable::parse(yaml).is_err());
    }

    #[test]
    fn test_builtin_ports() {
        let table = VariantTable::builtin_ports();
        let names: Vec<&str> = table.variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["brick_2-1", "sheep_2-1", "rock_2-1", "wheat_2-1", "wood_2-1", "generic_3-1"]
        );
        assert_eq!(table.variants[5].label, table.placement.generic_label);
    }

    #[test]
    fn test_yaml_round_trip() {
        let table = VariantTable::builtin_ports();
        let yaml = table.to_yaml().unwrap();
        assert_eq!(VariantTable::parse(&yaml).unwrap(), table);
    }
}
