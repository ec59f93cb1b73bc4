//! Analysis output and its text rendering.

use serde::Serialize;

use crate::medicine::MedicineRecommendation;
use crate::symptom::SymptomKey;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Block {
    Headline(String),
    Section(String),
    Bullet(String),
    /// Index into [`Recommendation::medicines`].
    Medicine(usize),
    Warning(String),
    Caution(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub symptom: SymptomKey,
    pub title: String,
    pub blocks: Vec<Block>,
    pub medicines: Vec<MedicineRecommendation>,
    /// True when any urgent-care warning fired.
    pub urgent: bool,
    pub matched_rules: Vec<String>,
}

impl Recommendation {
    pub fn headlines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Headline(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Warning(t) => Some(t.as_str()),
            _ => None,
        })
    }

    /// Medicine by its 1-based display number.
    pub fn medicine(&self, number: usize) -> Option<&MedicineRecommendation> {
        number.checked_sub(1).and_then(|i| self.medicines.get(i))
    }

    pub fn fired(&self, rule_id: &str) -> bool {
        self.matched_rules.iter().any(|r| r == rule_id)
    }

    /// Single formatted message: headline, advice, numbered medicines, warnings.
    pub fn render(&self) -> String {
        let mut out = format!("📋 {}:\n", self.title);
        for block in &self.blocks {
            match block {
                Block::Headline(t) | Block::Section(t) => {
                    out.push('\n');
                    out.push_str(t);
                    out.push('\n');
                }
                Block::Bullet(t) => {
                    out.push_str("• ");
                    out.push_str(t);
                    out.push('\n');
                }
                Block::Medicine(i) => {
                    if let Some(m) = self.medicines.get(*i) {
                        out.push_str(&format!(
                            "[{}] • {}  🛒 {} ({})\n",
                            i + 1,
                            m.line,
                            m.name,
                            format_price(m.price)
                        ));
                    }
                }
                Block::Warning(t) | Block::Caution(t) => {
                    out.push_str("\n⚠️ ");
                    out.push_str(t);
                    out.push('\n');
                }
            }
        }
        out.trim_end().to_string()
    }
}

/// "₹80" for whole rupees, "₹12.50" otherwise.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("₹{price:.0}")
    } else {
        format!("₹{price:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recommendation {
        Recommendation {
            symptom: SymptomKey::Fever,
            title: "Fever Analysis".to_string(),
            blocks: vec![
                Block::Headline("You have a mild fever.".to_string()),
                Block::Section("💊 Recommended Medicines (OTC):".to_string()),
                Block::Medicine(0),
                Block::Bullet("Rest".to_string()),
                Block::Warning("URGENT: see a doctor.".to_string()),
            ],
            medicines: vec![MedicineRecommendation::from_line("Paracetamol 500mg - ₹50")],
            urgent: true,
            matched_rules: vec!["fever.mild".to_string()],
        }
    }

    #[test]
    fn test_render_numbers_medicines_and_keeps_order() {
        let text = sample().render();
        assert!(text.starts_with("📋 Fever Analysis:"));
        let headline = text.find("mild fever").unwrap();
        let med = text.find("[1] • Paracetamol 500mg - ₹50").unwrap();
        let warn = text.find("⚠️ URGENT").unwrap();
        assert!(headline < med && med < warn);
        assert!(text.contains("🛒 Paracetamol 500mg (₹50)"));
    }

    #[test]
    fn test_medicine_lookup_is_one_based() {
        let r = sample();
        assert!(r.medicine(0).is_none());
        assert_eq!(r.medicine(1).unwrap().price, 50.0);
        assert!(r.medicine(2).is_none());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(80.0), "₹80");
        assert_eq!(format_price(12.5), "₹12.50");
    }
}
