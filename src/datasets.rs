// ABOUTME: Static dataset loading for the nutrition reference table and smoothie recipes
// ABOUTME: Reads JSON files once at startup into immutable lookup structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! Static dataset loading
//!
//! Both datasets are loaded once at startup and shared read-only for the
//! lifetime of the process. There is no persistence layer; the files are the
//! source of truth.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::{NutritionFact, Smoothie};

/// The static nutrition reference table, keyed by ingredient name
#[derive(Debug, Clone, Default)]
pub struct NutritionTable {
    entries: HashMap<String, NutritionFact>,
}

impl NutritionTable {
    /// Parse a nutrition table from a JSON object keyed by ingredient name
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the
    /// expected `{ "<name>": { calories, protein, fat, carbohydrates } }`
    /// shape.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let entries: HashMap<String, NutritionFact> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Load the nutrition table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or a
    /// serialization error if it cannot be parsed.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!(
                "failed to read nutrition table {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    /// Look up the reference entry for an ingredient name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NutritionFact> {
        self.entries.get(name)
    }

    /// Number of reference entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The static smoothie recipe dataset
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SmoothieDataset {
    smoothies: Vec<Smoothie>,
}

impl SmoothieDataset {
    /// Parse a recipe dataset from JSON with a top-level `smoothies` list
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the
    /// expected shape.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        Ok(dataset)
    }

    /// Load the recipe dataset from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or a
    /// serialization error if it cannot be parsed.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!(
                "failed to read recipe dataset {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    /// The ordered recipe list
    #[must_use]
    pub fn smoothies(&self) -> &[Smoothie] {
        &self.smoothies
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.smoothies.len()
    }

    /// Whether the dataset has no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.smoothies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrition_table_from_json() {
        let table = NutritionTable::from_json(
            r#"{
                "spinach": {"calories": 7, "protein": 0.9, "fat": 0.1, "carbohydrates": 1.1},
                "honey": {"calories": 40, "protein": 0, "fat": 0, "carbohydrates": 11,
                          "description": "natural sweetener"}
            }"#,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        let spinach = table.get("spinach").unwrap();
        assert!((spinach.calories - 7.0).abs() < f64::EPSILON);
        assert_eq!(
            table.get("honey").unwrap().description.as_deref(),
            Some("natural sweetener")
        );
        assert!(table.get("gravel").is_none());
    }

    #[test]
    fn test_nutrition_table_rejects_malformed_json() {
        let result = NutritionTable::from_json(r#"{"spinach": {"calories": "seven"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_smoothie_dataset_from_json() {
        let dataset = SmoothieDataset::from_json(
            r#"{"smoothies": [
                {"title": "Green Start", "image": "/assets/green.webp",
                 "ingredients": ["1 cup spinach"], "why": "fiber"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.smoothies()[0].title, "Green Start");
    }

    #[test]
    fn test_missing_file_is_storage_error() {
        let result = NutritionTable::load(Path::new("/nonexistent/ingredients.json"));
        let error = result.unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::StorageError);
    }
}
