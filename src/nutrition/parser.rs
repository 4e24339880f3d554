// ABOUTME: Parser turning raw ingredient strings into structured, macro-scaled Ingredient values
// ABOUTME: Handles decimal and a/b fraction amounts with a dedicated parser, never an evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! Ingredient string parsing
//!
//! An ingredient line is `"<amount> [<unit>] <name>"`: the first whitespace
//! token is the amount, the second token is a unit if it is one of the
//! recognized keywords or a bare count, and everything else is the name
//! looked up in the nutrition reference table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::units::IngredientUnit;
use crate::datasets::NutritionTable;

/// Parsing error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NutritionError {
    /// Ingredient name absent from the reference table
    #[error("ingredient '{0}' not found in the nutrition table")]
    UnknownIngredient(String),
    /// Amount token not parseable as a number or simple fraction
    #[error("amount '{0}' is not a number or a simple a/b fraction")]
    MalformedAmount(String),
}

/// A parsed ingredient with macro values scaled to its amount
///
/// Immutable after construction. The macro fields hold the reference
/// per-base-unit values multiplied by the unit-specific scale factor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    /// Canonical name as found in the reference table
    pub name: String,
    /// Numeric amount evaluated from the amount token
    pub amount: f64,
    /// Original amount token (e.g. `"1/2"`)
    pub amount_str: String,
    /// Measurement unit
    pub unit: IngredientUnit,
    /// Scaled calories
    pub calories: f64,
    /// Scaled protein grams
    pub protein: f64,
    /// Scaled fat grams
    pub fat: f64,
    /// Scaled carbohydrate grams
    pub carbs: f64,
    /// Reference description, when the table has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Ingredient {
    /// Parse one ingredient line against the nutrition reference table
    ///
    /// # Errors
    ///
    /// Returns [`NutritionError::MalformedAmount`] when the line is empty or
    /// its first token is not a finite number or `a/b` fraction, and
    /// [`NutritionError::UnknownIngredient`] when the parsed name has no
    /// reference entry.
    pub fn parse(line: &str, table: &NutritionTable) -> Result<Self, NutritionError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let amount_str = *tokens
            .first()
            .ok_or_else(|| NutritionError::MalformedAmount(String::new()))?;
        let amount = parse_amount(amount_str)?;

        let rest = &tokens[1..];
        let (unit, name) = match rest.first().and_then(|t| IngredientUnit::from_token(t)) {
            Some(unit) => (unit, rest[1..].join(" ")),
            None => (IngredientUnit::Whole, rest.join(" ")),
        };

        let fact = table
            .get(&name)
            .ok_or_else(|| NutritionError::UnknownIngredient(name.clone()))?;

        let multiplier = unit.multiplier(amount);

        Ok(Self {
            name,
            amount,
            amount_str: amount_str.to_owned(),
            unit,
            calories: fact.calories * multiplier,
            protein: fact.protein * multiplier,
            fat: fact.fat * multiplier,
            carbs: fact.carbohydrates * multiplier,
            description: fact.description.clone(),
        })
    }
}

/// Parse every line of an ingredient list, failing fast on the first error
///
/// One bad entry fails the whole list; there is no partial aggregation.
///
/// # Errors
///
/// Propagates the first parse failure unchanged.
pub fn parse_ingredients(
    lines: &[String],
    table: &NutritionTable,
) -> Result<Vec<Ingredient>, NutritionError> {
    lines
        .iter()
        .map(|line| Ingredient::parse(line, table))
        .collect()
}

/// Evaluate an amount token as a finite number
///
/// Accepts decimal numerals and simple `a/b` fractions with integer parts.
/// This is a dedicated parser on purpose: the amount token comes from
/// request input and must never reach an expression evaluator.
fn parse_amount(token: &str) -> Result<f64, NutritionError> {
    let malformed = || NutritionError::MalformedAmount(token.to_owned());

    if let Some((numerator, denominator)) = token.split_once('/') {
        let numerator: i64 = numerator.parse().map_err(|_| malformed())?;
        let denominator: i64 = denominator.parse().map_err(|_| malformed())?;
        if denominator == 0 {
            return Err(malformed());
        }
        // Safe: i64 -> f64 loses precision only far beyond culinary amounts
        #[allow(clippy::cast_precision_loss)]
        return Ok(numerator as f64 / denominator as f64);
    }

    let value: f64 = token.parse().map_err(|_| malformed())?;
    if !value.is_finite() {
        return Err(malformed());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> NutritionTable {
        NutritionTable::from_json(
            r#"{
                "spinach": {"calories": 7, "protein": 0.9, "fat": 0.1, "carbohydrates": 1.1,
                            "description": "iron-rich leafy green"},
                "almond butter": {"calories": 98, "protein": 3.4, "fat": 8.9, "carbohydrates": 3},
                "honey": {"calories": 40, "protein": 0.1, "fat": 0, "carbohydrates": 11},
                "banana": {"calories": 105, "protein": 1.3, "fat": 0.4, "carbohydrates": 27}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_cup_ingredient() {
        let ingredient = Ingredient::parse("1 cup spinach", &table()).unwrap();
        assert_eq!(ingredient.name, "spinach");
        assert_eq!(ingredient.unit, IngredientUnit::Cup);
        assert_eq!(ingredient.amount_str, "1");
        assert!((ingredient.calories - 7.0).abs() < 1e-6);
        assert!((ingredient.protein - 0.9).abs() < 1e-6);
        assert_eq!(
            ingredient.description.as_deref(),
            Some("iron-rich leafy green")
        );
    }

    #[test]
    fn test_parse_tbsp_scales_against_cup_reference() {
        let ingredient = Ingredient::parse("2 tbsp almond butter", &table()).unwrap();
        assert_eq!(ingredient.name, "almond butter");
        assert!((ingredient.calories - 12.25).abs() < 1e-6);
        assert!((ingredient.protein - 0.425).abs() < 1e-6);
        assert!((ingredient.fat - 1.1125).abs() < 1e-6);
        assert!((ingredient.carbs - 0.375).abs() < 1e-6);
    }

    #[test]
    fn test_parse_fraction_tsp() {
        let ingredient = Ingredient::parse("1/2 tsp honey", &table()).unwrap();
        assert!((ingredient.amount - 0.5).abs() < 1e-12);
        assert_eq!(ingredient.amount_str, "1/2");
        assert!((ingredient.calories - 40.0 * 0.5 / 48.0).abs() < 1e-6);
        assert!((ingredient.calories - 0.417).abs() < 1e-3);
    }

    #[test]
    fn test_missing_unit_defaults_to_whole() {
        let ingredient = Ingredient::parse("2 banana", &table()).unwrap();
        assert_eq!(ingredient.unit, IngredientUnit::Whole);
        assert!((ingredient.calories - 210.0).abs() < 1e-6);
    }

    #[test]
    fn test_explicit_whole_unit() {
        let ingredient = Ingredient::parse("1 whole banana", &table()).unwrap();
        assert_eq!(ingredient.unit, IngredientUnit::Whole);
        assert!((ingredient.calories - 105.0).abs() < 1e-6);
    }

    #[test]
    fn test_numeric_second_token_is_a_count_unit() {
        let ingredient = Ingredient::parse("2 2 banana", &table()).unwrap();
        assert_eq!(ingredient.unit, IngredientUnit::Unitless);
        assert_eq!(ingredient.name, "banana");
        assert!((ingredient.calories - 210.0).abs() < 1e-6);
    }

    #[test]
    fn test_multi_word_name_after_unit() {
        let ingredient = Ingredient::parse("1/4 cup almond butter", &table()).unwrap();
        assert_eq!(ingredient.name, "almond butter");
        assert!((ingredient.calories - 24.5).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_ingredient() {
        let error = Ingredient::parse("1 cup gravel", &table()).unwrap_err();
        assert_eq!(error, NutritionError::UnknownIngredient("gravel".into()));
    }

    #[test]
    fn test_unit_with_no_name_fails_lookup() {
        let error = Ingredient::parse("1 cup", &table()).unwrap_err();
        assert_eq!(error, NutritionError::UnknownIngredient(String::new()));
    }

    #[test]
    fn test_malformed_amounts() {
        for bad in ["one", "1//2", "1/0", "1/2/3", "", "inf", "nan"] {
            let line = format!("{bad} cup spinach");
            let error = Ingredient::parse(&line, &table()).unwrap_err();
            assert!(
                matches!(error, NutritionError::MalformedAmount(_)),
                "expected MalformedAmount for {bad:?}, got {error:?}"
            );
        }
    }

    #[test]
    fn test_empty_line_is_malformed_amount() {
        let error = Ingredient::parse("   ", &table()).unwrap_err();
        assert_eq!(error, NutritionError::MalformedAmount(String::new()));
    }

    #[test]
    fn test_decimal_amount() {
        let ingredient = Ingredient::parse("0.25 cup spinach", &table()).unwrap();
        assert!((ingredient.calories - 1.75).abs() < 1e-6);
    }

    #[test]
    fn test_parse_ingredients_fails_fast() {
        let lines = vec!["1 cup spinach".to_owned(), "1 cup gravel".to_owned()];
        let error = parse_ingredients(&lines, &table()).unwrap_err();
        assert_eq!(error, NutritionError::UnknownIngredient("gravel".into()));
    }

    #[test]
    fn test_parse_ingredients_preserves_order() {
        let lines = vec!["1 cup spinach".to_owned(), "2 banana".to_owned()];
        let ingredients = parse_ingredients(&lines, &table()).unwrap();
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name, "spinach");
        assert_eq!(ingredients[1].name, "banana");
    }
}
