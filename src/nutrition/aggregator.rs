// ABOUTME: Macro aggregation summing per-ingredient nutrition into recipe-level totals
// ABOUTME: Derives mass-share percentages and calorie-weighted bar segments for presentation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parser::Ingredient;

/// Energy density constants (Atwater factors)
const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Recipe-level macro totals
///
/// Derived on each request or render, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Total calories
    pub calories: f64,
    /// Total protein grams
    pub protein: f64,
    /// Total fat grams
    pub fat: f64,
    /// Total carbohydrate grams
    pub carbs: f64,
}

/// Percentage split of the three macros
///
/// Produced either by mass share (grams of the macro over total macro
/// grams) or by calorie weight (grams scaled by energy density). All three
/// fields are zero when the underlying denominator is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroShares {
    /// Protein percentage
    pub protein_pct: f64,
    /// Fat percentage
    pub fat_pct: f64,
    /// Carbohydrate percentage
    pub carbs_pct: f64,
}

impl MacroTotals {
    /// Accumulate one ingredient's scaled macros
    pub fn add(&mut self, ingredient: &Ingredient) {
        self.calories += ingredient.calories;
        self.protein += ingredient.protein;
        self.fat += ingredient.fat;
        self.carbs += ingredient.carbs;
    }

    /// Round every field to one decimal place for display
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            calories: round1(self.calories),
            protein: round1(self.protein),
            fat: round1(self.fat),
            carbs: round1(self.carbs),
        }
    }

    /// Total macro mass in grams (protein + fat + carbs)
    #[must_use]
    pub fn macro_mass(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }

    /// Each macro's percentage share of total macro mass
    #[must_use]
    pub fn mass_shares(&self) -> MacroShares {
        let mass = self.macro_mass();
        if mass <= 0.0 {
            return MacroShares::default();
        }
        MacroShares {
            protein_pct: self.protein / mass * 100.0,
            fat_pct: self.fat / mass * 100.0,
            carbs_pct: self.carbs / mass * 100.0,
        }
    }

    /// Calorie-weighted proportional segments for macro bars
    ///
    /// Protein and carbs weigh 4 kcal/g, fat 9 kcal/g, so the segments
    /// reflect where the energy comes from rather than raw grams.
    #[must_use]
    pub fn energy_shares(&self) -> MacroShares {
        let protein_kcal = self.protein * KCAL_PER_GRAM_PROTEIN;
        let fat_kcal = self.fat * KCAL_PER_GRAM_FAT;
        let carbs_kcal = self.carbs * KCAL_PER_GRAM_CARBS;
        let total = protein_kcal + fat_kcal + carbs_kcal;
        if total <= 0.0 {
            return MacroShares::default();
        }
        MacroShares {
            protein_pct: protein_kcal / total * 100.0,
            fat_pct: fat_kcal / total * 100.0,
            carbs_pct: carbs_kcal / total * 100.0,
        }
    }
}

/// Sum an ordered sequence of parsed ingredients into recipe totals
///
/// An empty sequence yields all-zero totals; that is a valid result, not an
/// error. Per-ingredient contributions are logged at debug level for
/// diagnostics.
#[must_use]
pub fn aggregate(ingredients: &[Ingredient]) -> MacroTotals {
    let mut totals = MacroTotals::default();
    for ingredient in ingredients {
        debug!(
            name = %ingredient.name,
            amount = %ingredient.amount_str,
            unit = %ingredient.unit,
            calories = ingredient.calories,
            protein = ingredient.protein,
            fat = ingredient.fat,
            carbs = ingredient.carbs,
            "ingredient macro contribution"
        );
        totals.add(ingredient);
    }
    totals
}

/// Round to one decimal place
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::NutritionTable;
    use crate::nutrition::parser::parse_ingredients;

    fn table() -> NutritionTable {
        NutritionTable::from_json(
            r#"{
                "spinach": {"calories": 7, "protein": 0.9, "fat": 0.1, "carbohydrates": 1.1},
                "almond butter": {"calories": 98, "protein": 3.4, "fat": 8.9, "carbohydrates": 3},
                "banana": {"calories": 105, "protein": 1.3, "fat": 0.4, "carbohydrates": 27}
            }"#,
        )
        .unwrap()
    }

    fn parse(lines: &[&str]) -> Vec<Ingredient> {
        let lines: Vec<String> = lines.iter().map(|s| (*s).to_owned()).collect();
        parse_ingredients(&lines, &table()).unwrap()
    }

    #[test]
    fn test_reference_scenario_totals() {
        let ingredients = parse(&["1 cup spinach", "2 tbsp almond butter"]);
        let totals = aggregate(&ingredients);
        assert!((totals.calories - 19.25).abs() < 1e-6);
        assert!((totals.protein - 1.325).abs() < 1e-6);
        assert!((totals.fat - 1.2125).abs() < 1e-6);
        assert!((totals.carbs - 1.475).abs() < 1e-6);

        let rounded = totals.rounded();
        assert!((rounded.calories - 19.3).abs() < f64::EPSILON);
        assert!((rounded.protein - 1.3).abs() < f64::EPSILON);
        assert!((rounded.fat - 1.2).abs() < f64::EPSILON);
        assert!((rounded.carbs - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_list_is_all_zero() {
        let totals = aggregate(&[]);
        assert_eq!(totals, MacroTotals::default());
        assert_eq!(totals.mass_shares(), MacroShares::default());
        assert_eq!(totals.energy_shares(), MacroShares::default());
    }

    #[test]
    fn test_aggregation_is_permutation_invariant() {
        let forward = aggregate(&parse(&["1 cup spinach", "2 tbsp almond butter", "1 banana"]));
        let backward = aggregate(&parse(&["1 banana", "2 tbsp almond butter", "1 cup spinach"]));
        assert!((forward.calories - backward.calories).abs() < 1e-9);
        assert!((forward.protein - backward.protein).abs() < 1e-9);
        assert!((forward.fat - backward.fat).abs() < 1e-9);
        assert!((forward.carbs - backward.carbs).abs() < 1e-9);
    }

    #[test]
    fn test_totals_match_sum_of_contributions() {
        let ingredients = parse(&["1 cup spinach", "2 tbsp almond butter", "1 banana"]);
        let totals = aggregate(&ingredients);
        let calories: f64 = ingredients.iter().map(|i| i.calories).sum();
        let protein: f64 = ingredients.iter().map(|i| i.protein).sum();
        assert!((totals.calories - calories).abs() < 1e-6);
        assert!((totals.protein - protein).abs() < 1e-6);
    }

    #[test]
    fn test_mass_shares_sum_to_hundred() {
        let totals = aggregate(&parse(&["1 cup spinach", "2 tbsp almond butter"]));
        let shares = totals.mass_shares();
        let sum = shares.protein_pct + shares.fat_pct + shares.carbs_pct;
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_energy_shares_weight_fat_higher() {
        // Equal grams of fat and protein: fat contributes 9/4 the energy
        let totals = MacroTotals {
            calories: 0.0,
            protein: 10.0,
            fat: 10.0,
            carbs: 0.0,
        };
        let shares = totals.energy_shares();
        assert!((shares.fat_pct / shares.protein_pct - 9.0 / 4.0).abs() < 1e-9);
        assert!((shares.carbs_pct).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round1() {
        assert!((round1(19.25) - 19.3).abs() < f64::EPSILON);
        assert!((round1(1.2125) - 1.2).abs() < f64::EPSILON);
        assert!((round1(0.0) - 0.0).abs() < f64::EPSILON);
    }
}
