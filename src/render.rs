// ABOUTME: Static HTML site generation for the smoothie recipe catalog
// ABOUTME: Renders one self-contained document with a card and macro bar per recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sinko Wellness

//! Static site rendering
//!
//! A one-shot batch process: every recipe in the dataset is parsed and
//! aggregated, then rendered as a card with its ingredient list, macro
//! totals, percentage labels, and a proportional macro bar. A recipe whose
//! ingredients fail to parse is reported and skipped; the rest of the batch
//! still renders.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::{error, info};

use crate::datasets::{NutritionTable, SmoothieDataset};
use crate::errors::{AppError, AppResult};
use crate::models::Smoothie;
use crate::nutrition::{aggregate, parse_ingredients, NutritionError};

const PAGE_TITLE: &str = "Gut-Healing Smoothie Recipes";

const PAGE_INTRO: &str = "These smoothies are designed to support gut health by balancing \
the gut microbiome, reducing inflammation, and promoting the growth of beneficial bacteria. \
They are rich in prebiotics, probiotics, fiber, and polyphenols to support digestion, \
energy, and immunity.";

const PAGE_FOOTER: &str = "Sinko Wellness";

/// Render the whole catalog into one self-contained HTML document
///
/// Recipes that fail to parse are skipped with an error log; the returned
/// document always contains the page scaffold even if every recipe fails.
#[must_use]
pub fn render_site(smoothies: &SmoothieDataset, nutrition: &NutritionTable) -> String {
    let mut html = String::new();

    html.push_str(&page_header());

    for smoothie in smoothies.smoothies() {
        match render_card(smoothie, nutrition) {
            Ok(card) => html.push_str(&card),
            Err(e) => {
                error!(recipe = %smoothie.title, error = %e, "skipping recipe in static render");
            }
        }
    }

    html.push_str(&page_footer());
    html
}

/// Write the rendered document to disk
///
/// # Errors
///
/// Returns a storage error if the file cannot be written.
pub fn write_site(path: &Path, html: &str) -> AppResult<()> {
    fs::write(path, html).map_err(|e| {
        AppError::storage(format!("failed to write site to {}: {e}", path.display()))
    })?;
    info!(path = %path.display(), bytes = html.len(), "static site written");
    Ok(())
}

/// Render one recipe card, failing if any ingredient does not parse
fn render_card(smoothie: &Smoothie, nutrition: &NutritionTable) -> Result<String, NutritionError> {
    let ingredients = parse_ingredients(&smoothie.ingredients, nutrition)?;
    let totals = aggregate(&ingredients).rounded();
    let labels = totals.mass_shares();
    let bars = totals.energy_shares();

    let title = encode_text(&smoothie.title);
    let image = encode_double_quoted_attribute(&smoothie.image);

    let mut card = String::new();
    let _ = write!(
        card,
        r#"
    <div class="mb-16">
      <h2 class="text-2xl font-semibold text-green-700 mb-4">{title}</h2>
      <img src="{image}" alt="{title}" class="w-full max-w-sm mx-auto rounded-lg shadow-md mb-4">
      <h3 class="text-xl font-medium text-green-600 mb-2">Ingredients:</h3>
      <ul class="list-disc list-inside text-lg">
"#
    );

    for (line, ingredient) in smoothie.ingredients.iter().zip(&ingredients) {
        let _ = write!(card, "        <li><strong>{}</strong>", encode_text(line));
        if let Some(description) = &ingredient.description {
            let _ = write!(card, " (<em>{}</em>)", encode_text(description));
        }
        card.push_str("</li>\n");
    }

    let _ = write!(
        card,
        r#"      </ul>
      <h3 class="text-xl font-medium text-green-600 mt-4 mb-2">Macronutrients:</h3>
      <div class="bg-green-50 p-4 rounded-lg">
        <p class="text-lg mb-2">Total Calories: {calories}</p>
        <div class="flex justify-between mb-2">
          <span>Protein: {protein}g ({protein_pct:.1}%)</span>
          <span>Fat: {fat}g ({fat_pct:.1}%)</span>
          <span>Carbs: {carbs}g ({carbs_pct:.1}%)</span>
        </div>
        <div class="w-full flex bg-gray-200 rounded-full h-2.5 overflow-hidden">
          <div class="bg-blue-600 h-2.5" style="width: {protein_bar:.1}%"></div>
          <div class="bg-yellow-400 h-2.5" style="width: {fat_bar:.1}%"></div>
          <div class="bg-green-500 h-2.5" style="width: {carbs_bar:.1}%"></div>
        </div>
      </div>
"#,
        calories = totals.calories,
        protein = totals.protein,
        protein_pct = labels.protein_pct,
        fat = totals.fat,
        fat_pct = labels.fat_pct,
        carbs = totals.carbs,
        carbs_pct = labels.carbs_pct,
        protein_bar = bars.protein_pct,
        fat_bar = bars.fat_pct,
        carbs_bar = bars.carbs_pct,
    );

    if let Some(why) = &smoothie.why {
        let _ = write!(
            card,
            "      <p class=\"text-lg mt-4\"><strong>Why:</strong> {}</p>\n",
            encode_text(why)
        );
    }
    card.push_str("    </div>\n");

    Ok(card)
}

fn page_header() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600&family=Playfair+Display:wght@400;600&display=swap" rel="stylesheet">
  <style>
    body {{ font-family: 'Inter', sans-serif; }}
    h1, h2 {{ font-family: 'Playfair Display', serif; }}
  </style>
</head>
<body class="bg-white text-gray-800">

  <header class="bg-green-50 py-8">
    <div class="max-w-5xl mx-auto text-center">
      <h1 class="text-4xl font-semibold text-green-700">{title}</h1>
      <p class="text-lg mt-4 text-green-600">Boost your gut health with these nourishing smoothies.</p>
    </div>
  </header>

  <section class="max-w-4xl mx-auto px-4 py-12">
    <p class="text-lg mb-8">{intro}</p>
  </section>

  <section class="max-w-4xl mx-auto px-4 py-12">
"#,
        title = encode_text(PAGE_TITLE),
        intro = encode_text(PAGE_INTRO),
    )
}

fn page_footer() -> String {
    format!(
        r#"  </section>

  <footer class="bg-green-100 py-8">
    <div class="max-w-5xl mx-auto text-center">
      <p class="text-gray-600">{footer}</p>
    </div>
  </footer>

</body>
</html>
"#,
        footer = encode_text(PAGE_FOOTER),
    )
}
