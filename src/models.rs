// ABOUTME: Common data models for smoothie recipes and nutrition reference entries
// ABOUTME: Defines the read-only dataset records shared by the API and the static renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! Common data models for the smoothie catalog

use serde::{Deserialize, Serialize};

/// A smoothie recipe from the static dataset
///
/// Read-only for the lifetime of the process. The `ingredients` list holds
/// raw strings such as `"1/2 cup spinach"` that are parsed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Smoothie {
    /// Display title of the recipe
    pub title: String,
    /// Image reference (path under the assets directory)
    pub image: String,
    /// Ordered raw ingredient strings
    pub ingredients: Vec<String>,
    /// Optional rationale shown on the recipe card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
}

/// One entry of the static nutrition reference table
///
/// Values are per base unit: per cup for volume-measured ingredients, per
/// item for countable ones. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionFact {
    /// Calories per base unit
    pub calories: f64,
    /// Protein grams per base unit
    pub protein: f64,
    /// Fat grams per base unit
    pub fat: f64,
    /// Carbohydrate grams per base unit
    pub carbohydrates: f64,
    /// Optional short description shown alongside the ingredient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
