//! Medicine recommendation lines: product name and price inference.
//!
//! Advice lines carry an informal price marker ("... - ₹80"). The name and
//! price are recovered heuristically; both always produce a usable value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cart::CartAction;

/// Used when neither a price marker nor a known product name is found.
pub const DEFAULT_PRICE: f64 = 50.0;

static CURRENCY_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[₹$]\s*(\d+(?:[.,]\d+)?)").expect("currency regex"));
static BARE_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)").expect("amount regex"));
static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s*").expect("numbering regex"));

/// Catalogued prices, matched by substring in declaration order.
pub const KNOWN_PRICES: &[(&str, f64)] = &[
    ("paracetamol", 50.0),
    ("tylenol", 50.0),
    ("dolo", 60.0),
    ("crocin", 50.0),
    ("ibuprofen", 80.0),
    ("advil", 80.0),
    ("motrin", 80.0),
    ("aspirin", 45.0),
    ("disprin", 45.0),
    ("excedrin", 150.0),
    ("naproxen", 100.0),
    ("aleve", 100.0),
    ("antacid", 30.0),
    ("digene", 30.0),
    ("eno", 25.0),
    ("omeprazole", 50.0),
    ("omez", 50.0),
    ("prilosec", 50.0),
    ("pantoprazole", 60.0),
    ("pantocid", 60.0),
    ("ranitidine", 40.0),
    ("zantac", 40.0),
    ("famotidine", 45.0),
    ("pepcid", 45.0),
    ("dicyclomine", 35.0),
    ("simethicone", 30.0),
    ("probiotics", 200.0),
    ("diclofenac", 95.0),
    ("voltaren", 95.0),
    ("dramamine", 60.0),
    ("meclizine", 70.0),
    ("antivert", 70.0),
    ("bismuth", 50.0),
    ("pepto-bismol", 50.0),
    ("loperamide", 40.0),
    ("imodium", 40.0),
    ("guaifenesin", 65.0),
    ("mucinex", 65.0),
    ("dextromethorphan", 55.0),
    ("robitussin", 55.0),
    ("cetirizine", 40.0),
    ("zyrtec", 40.0),
    ("okacet", 40.0),
    ("loratadine", 45.0),
    ("claritin", 45.0),
    ("diphenhydramine", 35.0),
    ("benadryl", 35.0),
    ("strepsils", 75.0),
    ("cepacol", 80.0),
    ("halls", 70.0),
    ("melatonin", 200.0),
    ("magnesium", 150.0),
];

/// A purchasable advice line with its inferred product name and price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineRecommendation {
    pub line: String,
    pub name: String,
    pub price: f64,
}

impl MedicineRecommendation {
    pub fn from_line(line: &str) -> Self {
        Self {
            line: line.to_string(),
            name: product_name(line),
            price: extract_price(line),
        }
    }

    pub fn cart_action(&self) -> CartAction {
        CartAction {
            product_name: self.name.clone(),
            price: self.price,
        }
    }
}

/// Product name: text before the first '(' or '-', minus numbering and bullet.
///
/// "• Ibuprofen 400-600mg (Advil)" yields "Ibuprofen 400"; dashes inside
/// names are cut the same way.
pub fn product_name(line: &str) -> String {
    let head = line.split('(').next().unwrap_or("");
    let head = head.split('-').next().unwrap_or("").trim();
    let head = LEADING_NUMBER.replace(head, "");
    head.trim_start_matches('•').trim().to_string()
}

/// Price: a currency-marked amount, else the first number, else the catalogue
/// table, else [`DEFAULT_PRICE`].
pub fn extract_price(line: &str) -> f64 {
    let marked = CURRENCY_AMOUNT
        .captures(line)
        .and_then(|c| c.get(1))
        .or_else(|| BARE_AMOUNT.captures(line).and_then(|c| c.get(1)));
    if let Some(m) = marked {
        if let Ok(v) = m.as_str().replace(',', "").parse::<f64>() {
            return v;
        }
    }

    let lower = line.to_lowercase();
    KNOWN_PRICES
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_PRICE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupee_marker_wins_over_dosage() {
        let m = MedicineRecommendation::from_line("• Ibuprofen 400-600mg (Advil, Motrin) - ₹80");
        assert_eq!(m.price, 80.0);
        assert_eq!(m.name, "Ibuprofen 400");
    }

    #[test]
    fn test_price_from_table_when_unmarked() {
        assert_eq!(extract_price("Ibuprofen tablets"), 80.0);
        assert_eq!(extract_price("• Melatonin before bed"), 200.0);
    }

    #[test]
    fn test_price_default_when_nothing_matches() {
        assert_eq!(extract_price("• Warm salt water gargle"), DEFAULT_PRICE);
    }

    #[test]
    fn test_bare_number_is_used_without_marker() {
        assert_eq!(extract_price("Vitamin C 1000"), 1000.0);
        assert_eq!(extract_price("Pack of 1,200"), 1200.0);
    }

    #[test]
    fn test_name_strips_bullet_numbering_and_tail() {
        assert_eq!(
            product_name("• Excedrin Migraine (Acetaminophen + Aspirin + Caffeine) - ₹150"),
            "Excedrin Migraine"
        );
        assert_eq!(product_name("2. Simethicone - ₹30"), "Simethicone");
        assert_eq!(product_name("Probiotics"), "Probiotics");
    }

    #[test]
    fn test_cart_action_carries_name_and_price() {
        let action = MedicineRecommendation::from_line("• Famotidine 20mg (Pepcid) - ₹45").cart_action();
        assert_eq!(action.product_name, "Famotidine 20mg");
        assert_eq!(action.price, 45.0);
    }
}
