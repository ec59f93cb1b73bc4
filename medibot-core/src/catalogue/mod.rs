//! The fixed symptom catalogue: fifteen protocols, each with ten questions,
//! trigger keywords and an ordered rule set.

mod digestive;
mod general;
mod pain;
mod respiratory;

use once_cell::sync::Lazy;

use crate::recommendation::Recommendation;
use crate::rules::{self, Rule, Stage};
use crate::symptom::SymptomKey;

pub(crate) const OTC_MEDICINES: &str = "💊 Recommended Medicines (OTC):";
pub(crate) const HOME_REMEDIES: &str = "🏠 Home Remedies:";

pub const QUESTIONS_PER_PROTOCOL: usize = 10;

/// One symptom's question list and analysis rules.
#[derive(Debug, Clone)]
pub struct SymptomProtocol {
    pub key: SymptomKey,
    pub title: &'static str,
    /// Substrings that select this protocol from free text.
    pub keywords: &'static [&'static str],
    pub questions: &'static [&'static str],
    /// Answer positions the rules inspect.
    pub reads: &'static [usize],
    stages: Vec<Stage>,
}

impl SymptomProtocol {
    /// Analyze a finished answer list. Missing answers read as empty text.
    pub fn analyze(&self, answers: &[String]) -> Recommendation {
        rules::evaluate(self.key, self.title, &self.stages, answers)
    }

    pub fn question(&self, index: usize) -> Option<&'static str> {
        self.questions.get(index).copied()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.stages
            .iter()
            .flat_map(Stage::rules)
            .find(|r| r.id == id)
    }
}

pub struct Catalogue {
    protocols: Vec<SymptomProtocol>,
}

static STANDARD: Lazy<Catalogue> = Lazy::new(Catalogue::build);

impl Catalogue {
    /// The built-in catalogue, built once on first use.
    pub fn standard() -> &'static Catalogue {
        &STANDARD
    }

    fn build() -> Self {
        // Order matches SymptomKey::ALL; classification priority follows it.
        let protocols = vec![
            pain::headache(),
            respiratory::fever(),
            pain::stomach_pain(),
            respiratory::cold(),
            pain::muscle_pain(),
            pain::back_pain(),
            pain::joint_pain(),
            general::fatigue(),
            general::dizziness(),
            digestive::nausea(),
            digestive::diarrhea(),
            digestive::constipation(),
            respiratory::sore_throat(),
            respiratory::cough(),
            general::insomnia(),
        ];
        debug_assert!(
            protocols
                .iter()
                .zip(SymptomKey::ALL)
                .all(|(p, k)| p.key == k)
        );
        Self { protocols }
    }

    pub fn protocol(&self, key: SymptomKey) -> &SymptomProtocol {
        &self.protocols[key as usize]
    }

    /// Lookup by canonical name ("stomach pain"), case-insensitive.
    pub fn lookup(&self, name: &str) -> Option<&SymptomProtocol> {
        SymptomKey::parse(name).map(|k| self.protocol(k))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymptomProtocol> {
        self.protocols.iter()
    }

    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::Block;

    fn answers(pairs: &[(usize, &str)]) -> Vec<String> {
        let mut out = vec![String::new(); QUESTIONS_PER_PROTOCOL];
        for (i, text) in pairs {
            out[*i] = text.to_string();
        }
        out
    }

    #[test]
    fn test_catalogue_order_matches_keys() {
        let cat = Catalogue::standard();
        assert_eq!(cat.len(), SymptomKey::ALL.len());
        for (p, k) in cat.iter().zip(SymptomKey::ALL) {
            assert_eq!(p.key, k);
            assert_eq!(cat.protocol(k).key, k);
        }
    }

    #[test]
    fn test_every_protocol_has_ten_questions_and_valid_reads() {
        for p in Catalogue::standard().iter() {
            assert_eq!(p.questions.len(), QUESTIONS_PER_PROTOCOL, "{}", p.key);
            assert!(!p.keywords.is_empty(), "{}", p.key);
            assert!(p.reads.iter().all(|&i| i < p.questions.len()), "{}", p.key);
        }
    }

    #[test]
    fn test_rule_ids_are_unique_and_prefixed() {
        for p in Catalogue::standard().iter() {
            let prefix = p.key.as_str().split(' ').next().unwrap_or_default();
            let ids: Vec<&str> = p.stages().iter().flat_map(Stage::rules).map(|r| r.id).collect();
            for (i, id) in ids.iter().enumerate() {
                assert!(id.starts_with(&prefix), "{id} under {}", p.key);
                assert!(!ids[i + 1..].contains(id), "duplicate {id}");
            }
        }
    }

    #[test]
    fn test_empty_and_short_answers_never_panic() {
        for p in Catalogue::standard().iter() {
            for given in [vec![], vec!["yes".to_string()], answers(&[])] {
                let r = p.analyze(&given);
                assert!(r.headlines().count() + r.warnings().count() >= 1, "{}", p.key);
            }
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let cat = Catalogue::standard();
        assert_eq!(cat.lookup("Sore Throat").unwrap().key, SymptomKey::SoreThroat);
        assert!(cat.lookup("toothache").is_none());
    }

    #[test]
    fn test_headache_one_side_is_migraine() {
        let p = Catalogue::standard().protocol(SymptomKey::Headache);
        let r = p.analyze(&answers(&[(1, "One side"), (2, "6")]));
        assert!(r.fired("headache.migraine"));
        assert!(r.headlines().any(|h| h.contains("Migraine")));
        assert!(r.medicines.iter().any(|m| m.price == 80.0));
        assert!(!r.urgent);
    }

    #[test]
    fn test_headache_severity_eight_is_urgent() {
        let p = Catalogue::standard().protocol(SymptomKey::Headache);
        let r = p.analyze(&answers(&[(2, "8 out of 10")]));
        assert!(r.fired("headache.severe"));
        assert!(r.urgent);
    }

    #[test]
    fn test_fever_104_is_urgent() {
        let p = Catalogue::standard().protocol(SymptomKey::Fever);
        let r = p.analyze(&answers(&[(1, "104")]));
        assert!(r.fired("fever.high"));
        assert!(r.urgent);
    }

    #[test]
    fn test_fever_celsius_reading_is_converted() {
        let p = Catalogue::standard().protocol(SymptomKey::Fever);
        let r = p.analyze(&answers(&[(1, "about 38.5 C")]));
        assert!(r.fired("fever.moderate"));
        assert!(!r.urgent);
    }

    #[test]
    fn test_stomach_appendicitis_stops_analysis() {
        let p = Catalogue::standard().protocol(SymptomKey::StomachPain);
        let r = p.analyze(&answers(&[(0, "lower right side"), (2, "9")]));
        assert_eq!(r.matched_rules, vec!["stomach.appendicitis"]);
        assert!(r.urgent);
        assert!(r.medicines.is_empty());
    }

    #[test]
    fn test_diarrhea_blood_is_urgent() {
        let p = Catalogue::standard().protocol(SymptomKey::Diarrhea);
        let r = p.analyze(&answers(&[(0, "2 days"), (6, "blood")]));
        assert!(r.fired("diarrhea.blood"));
        assert!(r.urgent);
        assert!(r.warnings().any(|w| w.contains("Blood in Stool")));
    }

    #[test]
    fn test_denied_blood_is_not_urgent() {
        let p = Catalogue::standard().protocol(SymptomKey::Diarrhea);
        let r = p.analyze(&answers(&[(0, "2 days"), (6, "No, no blood")]));
        assert!(!r.fired("diarrhea.blood"));
        assert!(!r.urgent);

        let p = Catalogue::standard().protocol(SymptomKey::Cough);
        let r = p.analyze(&answers(&[(2, "clear, no blood")]));
        assert!(!r.fired("cough.blood"));
    }

    #[test]
    fn test_diarrhea_many_episodes_flags_dehydration() {
        let p = Catalogue::standard().protocol(SymptomKey::Diarrhea);
        let r = p.analyze(&answers(&[(1, "12 times"), (6, "no")]));
        assert!(r.fired("diarrhea.dehydration"));
        assert!(r.urgent);
    }

    #[test]
    fn test_dizziness_head_injury_is_urgent() {
        let p = Catalogue::standard().protocol(SymptomKey::Dizziness);
        let r = p.analyze(&answers(&[(4, "yes, I fell")]));
        assert_eq!(r.matched_rules, vec!["dizziness.head_injury"]);
        assert!(r.urgent);
        assert!(matches!(r.blocks.last(), Some(Block::Caution(_))));
    }

    #[test]
    fn test_insomnia_lists_priced_medicines() {
        let p = Catalogue::standard().protocol(SymptomKey::Insomnia);
        let r = p.analyze(&answers(&[(2, "4 hours"), (5, "yes")]));
        assert!(r.fired("insomnia.stress"));
        assert!(r.fired("insomnia.deprivation"));
        let prices: Vec<f64> = r.medicines.iter().map(|m| m.price).collect();
        assert_eq!(prices, vec![200.0, 150.0, 180.0, 35.0, 40.0]);
        assert!(!r.urgent);
    }

    #[test]
    fn test_cough_with_blood_warns() {
        let p = Catalogue::standard().protocol(SymptomKey::Cough);
        let r = p.analyze(&answers(&[(2, "some blood")]));
        assert!(r.fired("cough.blood"));
        assert!(r.urgent);
    }
}
