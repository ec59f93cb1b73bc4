//! Canonical symptom keys recognized by the checker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed symptom protocols, in catalogue declaration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymptomKey {
    #[serde(rename = "headache")]
    Headache,
    #[serde(rename = "fever")]
    Fever,
    #[serde(rename = "stomach pain")]
    StomachPain,
    #[serde(rename = "cold")]
    Cold,
    #[serde(rename = "muscle pain")]
    MusclePain,
    #[serde(rename = "back pain")]
    BackPain,
    #[serde(rename = "joint pain")]
    JointPain,
    #[serde(rename = "fatigue")]
    Fatigue,
    #[serde(rename = "dizziness")]
    Dizziness,
    #[serde(rename = "nausea")]
    Nausea,
    #[serde(rename = "diarrhea")]
    Diarrhea,
    #[serde(rename = "constipation")]
    Constipation,
    #[serde(rename = "sore throat")]
    SoreThroat,
    #[serde(rename = "cough")]
    Cough,
    #[serde(rename = "insomnia")]
    Insomnia,
}

impl SymptomKey {
    pub const ALL: [SymptomKey; 15] = [
        SymptomKey::Headache,
        SymptomKey::Fever,
        SymptomKey::StomachPain,
        SymptomKey::Cold,
        SymptomKey::MusclePain,
        SymptomKey::BackPain,
        SymptomKey::JointPain,
        SymptomKey::Fatigue,
        SymptomKey::Dizziness,
        SymptomKey::Nausea,
        SymptomKey::Diarrhea,
        SymptomKey::Constipation,
        SymptomKey::SoreThroat,
        SymptomKey::Cough,
        SymptomKey::Insomnia,
    ];

    /// Lowercase canonical name, as users type it.
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomKey::Headache => "headache",
            SymptomKey::Fever => "fever",
            SymptomKey::StomachPain => "stomach pain",
            SymptomKey::Cold => "cold",
            SymptomKey::MusclePain => "muscle pain",
            SymptomKey::BackPain => "back pain",
            SymptomKey::JointPain => "joint pain",
            SymptomKey::Fatigue => "fatigue",
            SymptomKey::Dizziness => "dizziness",
            SymptomKey::Nausea => "nausea",
            SymptomKey::Diarrhea => "diarrhea",
            SymptomKey::Constipation => "constipation",
            SymptomKey::SoreThroat => "sore throat",
            SymptomKey::Cough => "cough",
            SymptomKey::Insomnia => "insomnia",
        }
    }

    /// Label used in the help listing ("Cold/Flu" rather than "cold").
    pub fn label(&self) -> &'static str {
        match self {
            SymptomKey::Headache => "Headache",
            SymptomKey::Fever => "Fever",
            SymptomKey::StomachPain => "Stomach Pain",
            SymptomKey::Cold => "Cold/Flu",
            SymptomKey::MusclePain => "Muscle Pain",
            SymptomKey::BackPain => "Back Pain",
            SymptomKey::JointPain => "Joint Pain",
            SymptomKey::Fatigue => "Fatigue",
            SymptomKey::Dizziness => "Dizziness",
            SymptomKey::Nausea => "Nausea",
            SymptomKey::Diarrhea => "Diarrhea",
            SymptomKey::Constipation => "Constipation",
            SymptomKey::SoreThroat => "Sore Throat",
            SymptomKey::Cough => "Cough",
            SymptomKey::Insomnia => "Insomnia",
        }
    }

    /// Exact key lookup (case-insensitive, trimmed). Free text goes through the classifier instead.
    pub fn parse(key: &str) -> Option<SymptomKey> {
        let k = key.trim().to_lowercase();
        SymptomKey::ALL.iter().copied().find(|s| s.as_str() == k)
    }
}

impl fmt::Display for SymptomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_canonical_names() {
        for key in SymptomKey::ALL {
            assert_eq!(SymptomKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SymptomKey::parse("  Stomach Pain "), Some(SymptomKey::StomachPain));
        assert_eq!(SymptomKey::parse("toothache"), None);
    }

    #[test]
    fn test_serde_uses_canonical_name() {
        let json = serde_json::to_string(&SymptomKey::SoreThroat).unwrap();
        assert_eq!(json, "\"sore throat\"");
        let back: SymptomKey = serde_json::from_str("\"back pain\"").unwrap();
        assert_eq!(back, SymptomKey::BackPain);
    }
}
