use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Target,
    Competitor,
}

impl std::fmt::Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relationship::Target => write!(f, "target"),
            Relationship::Competitor => write!(f, "competitor"),
        }
    }
}

/// One tracked brand. The name is stored lowercase so mention matching
/// needs no per-brand normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub relationship: Relationship,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BrandsFile {
    brands: Vec<Brand>,
}

/// Ordered set of tracked brands: the target brand first, competitors in
/// declared order. Order is fixed for a run and drives mention iteration
/// and report tie-breaking.
#[derive(Debug, Clone)]
pub struct BrandRoster {
    brands: Vec<Brand>,
}

impl BrandRoster {
    /// Load and validate the roster from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails
    /// validation (empty names, duplicates, or not exactly one target).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
            path: path.display().to_string(),
            source: e,
        })?;

        let file: BrandsFile = serde_yaml::from_str(&content)?;
        Self::from_brands(file.brands)
    }

    /// Build a roster from an already-parsed brand list.
    ///
    /// Names are lowercased and trimmed. The target is moved to the front;
    /// competitors keep their declared order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any name is empty after
    /// trimming, any lowercased name repeats, or the list does not contain
    /// exactly one target brand.
    pub fn from_brands(brands: Vec<Brand>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        let mut target: Option<Brand> = None;
        let mut competitors = Vec::new();

        for mut brand in brands {
            brand.name = brand.name.trim().to_lowercase();
            if brand.name.is_empty() {
                return Err(ConfigError::Validation(
                    "brand name must be non-empty".to_string(),
                ));
            }
            if !seen.insert(brand.name.clone()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate brand name: '{}'",
                    brand.name
                )));
            }
            match brand.relationship {
                Relationship::Target => {
                    if let Some(existing) = &target {
                        return Err(ConfigError::Validation(format!(
                            "multiple target brands: '{}' and '{}'",
                            existing.name, brand.name
                        )));
                    }
                    target = Some(brand);
                }
                Relationship::Competitor => competitors.push(brand),
            }
        }

        let Some(target) = target else {
            return Err(ConfigError::Validation(
                "roster must declare exactly one target brand".to_string(),
            ));
        };

        let mut ordered = Vec::with_capacity(competitors.len() + 1);
        ordered.push(target);
        ordered.extend(competitors);
        Ok(Self { brands: ordered })
    }

    /// The target brand (always first in iteration order).
    #[must_use]
    pub fn target(&self) -> &Brand {
        &self.brands[0]
    }

    /// All brands in iteration order: target first, then competitors.
    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Brand names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.brands.iter().map(|b| b.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.brands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(name: &str, relationship: Relationship) -> Brand {
        Brand {
            name: name.to_string(),
            relationship,
            notes: None,
        }
    }

    #[test]
    fn target_is_ordered_first() {
        let roster = BrandRoster::from_brands(vec![
            brand("orient", Relationship::Competitor),
            brand("atomberg", Relationship::Target),
            brand("crompton", Relationship::Competitor),
        ])
        .unwrap();

        let names: Vec<&str> = roster.names().collect();
        assert_eq!(names, vec!["atomberg", "orient", "crompton"]);
        assert_eq!(roster.target().name, "atomberg");
    }

    #[test]
    fn names_are_lowercased_and_trimmed() {
        let roster = BrandRoster::from_brands(vec![
            brand("  Atomberg ", Relationship::Target),
            brand("Havells", Relationship::Competitor),
        ])
        .unwrap();

        let names: Vec<&str> = roster.names().collect();
        assert_eq!(names, vec!["atomberg", "havells"]);
    }

    #[test]
    fn rejects_empty_name() {
        let err = BrandRoster::from_brands(vec![brand("   ", Relationship::Target)]).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn rejects_duplicate_name_case_insensitively() {
        let err = BrandRoster::from_brands(vec![
            brand("atomberg", Relationship::Target),
            brand("Atomberg", Relationship::Competitor),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate brand name"));
    }

    #[test]
    fn rejects_missing_target() {
        let err =
            BrandRoster::from_brands(vec![brand("orient", Relationship::Competitor)]).unwrap_err();
        assert!(err.to_string().contains("exactly one target"));
    }

    #[test]
    fn rejects_multiple_targets() {
        let err = BrandRoster::from_brands(vec![
            brand("atomberg", Relationship::Target),
            brand("orient", Relationship::Target),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("multiple target brands"));
    }

    #[test]
    fn loads_roster_from_yaml() {
        let yaml = r"
brands:
  - name: atomberg
    relationship: target
  - name: orient
    relationship: competitor
    notes: ceiling fan incumbent
";
        let file: BrandsFile = serde_yaml::from_str(yaml).unwrap();
        let roster = BrandRoster::from_brands(file.brands).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.target().name, "atomberg");
    }
}
