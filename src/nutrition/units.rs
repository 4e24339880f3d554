// ABOUTME: Measurement units for ingredient amounts and their cup-relative multipliers
// ABOUTME: Maps (amount, unit) to a dimensionless scale factor for reference nutrition values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

use serde::{Deserialize, Serialize};

/// Volume conversion constants (US volumetric)
const TSP_PER_CUP: f64 = 48.0;
const TBSP_PER_CUP: f64 = 16.0;

/// Ingredient measurement unit
///
/// Nutrition reference values are expressed per cup for volume-measured
/// ingredients and per item for countable ones. Teaspoon and tablespoon are
/// fractions of a cup; `whole` and bare counts scale the reference value
/// directly.
///
/// The reference table does not record which basis each entry uses, so a
/// count of a per-cup ingredient (e.g. `"2 whole banana"` against a per-cup
/// entry) scales the per-cup value by the count. This mirrors the upstream
/// dataset's convention and is a known correctness gap, not an invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IngredientUnit {
    /// Teaspoons (48 per cup)
    Tsp,
    /// Tablespoons (16 per cup)
    Tbsp,
    /// US cups (the reference base unit for volumes)
    Cup,
    /// Count of whole items (bananas, dates, etc.)
    #[default]
    Whole,
    /// Bare numeric second token treated as a count
    Unitless,
}

impl IngredientUnit {
    /// Recognize a unit token from an ingredient string
    ///
    /// Accepts the four unit keywords plus any all-digit token (a bare
    /// count). Anything else is not a unit and belongs to the ingredient
    /// name.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "tsp" => Some(Self::Tsp),
            "tbsp" => Some(Self::Tbsp),
            "cup" => Some(Self::Cup),
            "whole" => Some(Self::Whole),
            _ if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) => {
                Some(Self::Unitless)
            }
            _ => None,
        }
    }

    /// Get the abbreviation for display
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Tsp => "tsp",
            Self::Tbsp => "tbsp",
            Self::Cup => "cup",
            Self::Whole => "whole",
            Self::Unitless => "unitless",
        }
    }

    /// Check if this unit is a volume measurement
    #[must_use]
    pub const fn is_volume(&self) -> bool {
        matches!(self, Self::Tsp | Self::Tbsp | Self::Cup)
    }

    /// Compute the dimensionless multiplier for an amount in this unit
    ///
    /// The multiplier converts a reference per-base-unit nutrition value
    /// into the amount-specific value: `amount/48` for teaspoons,
    /// `amount/16` for tablespoons, and the amount itself for cups, whole
    /// items, and bare counts.
    #[must_use]
    pub fn multiplier(self, amount: f64) -> f64 {
        match self {
            Self::Tsp => amount / TSP_PER_CUP,
            Self::Tbsp => amount / TBSP_PER_CUP,
            Self::Cup | Self::Whole | Self::Unitless => amount,
        }
    }
}

impl std::fmt::Display for IngredientUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_token_recognition() {
        assert_eq!(IngredientUnit::from_token("tsp"), Some(IngredientUnit::Tsp));
        assert_eq!(
            IngredientUnit::from_token("tbsp"),
            Some(IngredientUnit::Tbsp)
        );
        assert_eq!(IngredientUnit::from_token("cup"), Some(IngredientUnit::Cup));
        assert_eq!(
            IngredientUnit::from_token("whole"),
            Some(IngredientUnit::Whole)
        );
        assert_eq!(
            IngredientUnit::from_token("2"),
            Some(IngredientUnit::Unitless)
        );
        assert_eq!(IngredientUnit::from_token("cups"), None);
        assert_eq!(IngredientUnit::from_token("spinach"), None);
        assert_eq!(IngredientUnit::from_token("2x"), None);
        assert_eq!(IngredientUnit::from_token(""), None);
    }

    #[test]
    fn test_tsp_multiplier_scales_with_amount() {
        assert!((IngredientUnit::Tsp.multiplier(1.0) - 1.0 / 48.0).abs() < 1e-12);
        assert!((IngredientUnit::Tsp.multiplier(0.5) - 0.5 / 48.0).abs() < 1e-12);
        assert!((IngredientUnit::Tsp.multiplier(3.0) - 3.0 / 48.0).abs() < 1e-12);
    }

    #[test]
    fn test_tbsp_multiplier_scales_with_amount() {
        assert!((IngredientUnit::Tbsp.multiplier(2.0) - 0.125).abs() < 1e-12);
        assert!((IngredientUnit::Tbsp.multiplier(1.0) - 1.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_direct_multipliers() {
        assert!((IngredientUnit::Cup.multiplier(0.75) - 0.75).abs() < f64::EPSILON);
        assert!((IngredientUnit::Whole.multiplier(2.0) - 2.0).abs() < f64::EPSILON);
        assert!((IngredientUnit::Unitless.multiplier(3.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_names_match_wire_format() {
        assert_eq!(
            serde_json::to_string(&IngredientUnit::Tbsp).unwrap(),
            "\"tbsp\""
        );
        assert_eq!(
            serde_json::from_str::<IngredientUnit>("\"whole\"").unwrap(),
            IngredientUnit::Whole
        );
    }
}
