//! Keyword routing from free text to a symptom protocol.
//!
//! Plain substring containment over a lowercased copy of the utterance.
//! Protocols are tried in catalogue order and the first hit wins, so
//! "stomach cramps with a fever" routes to fever.

use crate::catalogue::Catalogue;
use crate::symptom::SymptomKey;

/// Classify against the built-in catalogue.
pub fn classify(utterance: &str) -> Option<SymptomKey> {
    classify_with(Catalogue::standard(), utterance)
}

pub fn classify_with(catalogue: &Catalogue, utterance: &str) -> Option<SymptomKey> {
    let lower = utterance.to_lowercase();
    let hit = catalogue
        .iter()
        .find(|p| p.keywords.iter().any(|k| lower.contains(k)))
        .map(|p| p.key);
    if hit.is_none() {
        tracing::debug!(len = utterance.len(), "no symptom keyword matched");
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusive_keywords_route_to_their_symptom() {
        let cases = [
            ("I have a throbbing headache on one side", SymptomKey::Headache),
            ("my temperature is high", SymptomKey::Fever),
            ("my belly hurts", SymptomKey::StomachPain),
            ("runny nose since monday", SymptomKey::Cold),
            ("sore muscles after gym, muscle pain", SymptomKey::MusclePain),
            ("lower back pain", SymptomKey::BackPain),
            ("knee joint pain", SymptomKey::JointPain),
            ("so exhausted lately", SymptomKey::Fatigue),
            ("feeling lightheaded", SymptomKey::Dizziness),
            ("a bit queasy", SymptomKey::Nausea),
            ("loose stools", SymptomKey::Diarrhea),
            ("hard stool", SymptomKey::Constipation),
            ("I have a sore throat", SymptomKey::SoreThroat),
            ("dry cough at night", SymptomKey::Cough),
            ("I can't sleep", SymptomKey::Insomnia),
        ];
        for (text, want) in cases {
            assert_eq!(classify(text), Some(want), "{text}");
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("MIGRAINE again"), Some(SymptomKey::Headache));
    }

    #[test]
    fn test_catalogue_order_breaks_ties() {
        assert_eq!(classify("stomach ache and fever"), Some(SymptomKey::Fever));
        assert_eq!(classify("cold and cough"), Some(SymptomKey::Cold));
    }

    #[test]
    fn test_no_keyword_is_none() {
        assert_eq!(classify("what are your opening hours?"), None);
        assert_eq!(classify(""), None);
    }
}
