//! Fever and respiratory protocols.

use super::{HOME_REMEDIES, OTC_MEDICINES, SymptomProtocol};
use crate::rules::{Item::*, Rule, Stage};
use crate::symptom::SymptomKey;

const HIGH_FEVER_F: f64 = 103.0;
const MODERATE_FEVER_F: f64 = 101.0;

pub(super) fn fever() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::Fever,
        title: "Fever Analysis",
        keywords: &["fever", "temp", "temperature"],
        questions: &[
            "How long have you had the fever? (Hours, days?)",
            "What is your current body temperature? (In Fahrenheit or Celsius)",
            "Do you have body aches, chills, or sweating?",
            "Do you have a cough, sore throat, or runny nose?",
            "Are you experiencing any rashes, redness, or skin changes?",
            "Do you have nausea, vomiting, or loss of appetite?",
            "Have you traveled recently or been exposed to someone who is sick?",
            "Do you have a headache, stiff neck, or sensitivity to light?",
            "Are you taking any medication currently?",
            "Do you have any chronic medical conditions?",
        ],
        reads: &[1, 7],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "fever.high",
                    |a| a.temperature_f(1) >= HIGH_FEVER_F,
                    vec![Warning(
                        "HIGH FEVER ALERT: Your temperature is quite high (≥103°F/39.4°C). Please consult a doctor immediately, especially if it persists or you have other severe symptoms.",
                    )],
                ),
                Rule::new(
                    "fever.moderate",
                    |a| a.temperature_f(1) >= MODERATE_FEVER_F,
                    vec![Headline(
                        "You have a moderate fever (101-102.9°F / 38.3-39.3°C). Monitor closely and seek medical attention if it persists beyond 3 days.",
                    )],
                ),
                Rule::otherwise(
                    "fever.mild",
                    vec![Headline(
                        "You have a mild fever (100-100.9°F / 37.8-38.2°C), likely due to a viral infection.",
                    )],
                ),
            ]),
            Stage::Always(vec![
                Section(OTC_MEDICINES),
                Medicine("Paracetamol 500-1000mg (Dolo 650, Tylenol, Crocin) - every 4-6 hours, max 4g/day - ₹50"),
                Medicine("Ibuprofen 400-600mg (Advil, Motrin) - every 6-8 hours, if no stomach issues - ₹80"),
                Medicine("Aspirin 325-650mg (Disprin) - adults only, every 4-6 hours - ₹45"),
                Section("🏠 Home Remedies & Care:"),
                Bullet("Sponge bath with lukewarm water (not cold!)"),
                Bullet("Stay well hydrated - drink water, electrolyte solutions, or herbal teas"),
                Bullet("Get plenty of rest"),
                Bullet("Wear light, breathable clothing"),
                Bullet("Use a cool, damp cloth on forehead"),
                Bullet("Avoid alcohol and caffeine"),
            ]),
            Stage::Every(vec![Rule::new(
                "fever.stiff_neck",
                |a| a.has(7, "stiff neck"),
                vec![Warning(
                    "URGENT: Stiff neck with fever can indicate serious conditions. Seek immediate medical attention!",
                )],
            )]),
        ],
    }
}

pub(super) fn cold() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::Cold,
        title: "Cold & Flu Analysis",
        keywords: &["cold", "flu", "runny nose", "nasal congestion"],
        questions: &[
            "How many days have you had these symptoms?",
            "Is your nose runny or blocked?",
            "Do you have a sore throat or difficulty swallowing?",
            "Are you sneezing frequently?",
            "What color is your mucus? (Clear, yellow, green, or thick?)",
            "Do you have a cough? Is it dry or productive (with phlegm)?",
            "Do you have facial pressure, sinus pain, or headache?",
            "Do you have a fever, body aches, or chills?",
            "Are you experiencing fatigue or feeling tired?",
            "Have you been around anyone who is sick recently?",
        ],
        reads: &[0, 1, 2, 3, 4, 5, 7],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "cold.flu",
                    |a| a.has(7, "yes") || a.number(0, 1) > 3,
                    vec![Headline("This appears to be Influenza (Flu) or a more severe cold.")],
                ),
                Rule::otherwise("cold.common", vec![Headline("This appears to be a Common Cold.")]),
            ]),
            Stage::Always(vec![Section(OTC_MEDICINES)]),
            Stage::Every(vec![
                Rule::new(
                    "cold.antihistamine",
                    |a| a.has(1, "runny") || a.has(3, "yes"),
                    vec![
                        Bullet("Cetirizine 10mg (Okacet, Zyrtec) - for runny nose and sneezing"),
                        Bullet("Loratadine 10mg (Claritin) - non-drowsy option"),
                        Bullet("Diphenhydramine (Benadryl) - may cause drowsiness"),
                    ],
                ),
                Rule::new(
                    "cold.decongestant",
                    |a| a.has(1, "blocked"),
                    vec![
                        Bullet("Pseudoephedrine (Sudafed) - for nasal congestion"),
                        Bullet("Phenylephrine - decongestant"),
                        Bullet("Oxymetazoline nasal spray (Afrin) - use max 3 days"),
                    ],
                ),
                Rule::new(
                    "cold.throat",
                    |a| a.has(2, "yes"),
                    vec![
                        Bullet("Throat lozenges (Strepsils, Cepacol)"),
                        Bullet("Chloraseptic spray - for sore throat"),
                    ],
                ),
            ]),
            Stage::FirstMatch(vec![
                Rule::new(
                    "cold.dry_cough",
                    |a| a.has(5, "dry"),
                    vec![Bullet("Dextromethorphan (Robitussin DM) - for dry cough")],
                ),
                Rule::new(
                    "cold.wet_cough",
                    |a| a.has_any(5, &["wet", "phlegm"]),
                    vec![
                        Bullet("Guaifenesin (Mucinex) - expectorant for productive cough"),
                        Bullet("Bromhexine - to loosen phlegm"),
                    ],
                ),
            ]),
            Stage::Every(vec![Rule::new(
                "cold.fever_relief",
                |a| a.has_any(7, &["yes", "ache"]),
                vec![
                    Bullet("Paracetamol 500-1000mg (Tylenol, Dolo) - for fever and body aches"),
                    Bullet("Ibuprofen 400-600mg (Advil) - for fever and pain"),
                ],
            )]),
            Stage::Always(vec![
                Section(HOME_REMEDIES),
                Bullet("Steam inhalation - boil water, lean over with towel, breathe deeply"),
                Bullet("Salt water gargle (1/2 tsp salt in warm water) - 3-4 times daily"),
                Bullet("Stay hydrated - drink warm fluids (tea, soup, water)"),
                Bullet("Get plenty of rest"),
                Bullet("Use a humidifier or vaporizer"),
                Bullet("Vitamin C supplements (1000mg daily)"),
                Bullet("Zinc lozenges (may shorten cold duration)"),
                Bullet("Honey and lemon in warm water"),
            ]),
            Stage::Every(vec![Rule::new(
                "cold.bacterial",
                |a| a.has(4, "green") || (a.has(4, "yellow") && a.number(0, 1) > 7),
                vec![Caution(
                    "Note: Green/yellow mucus lasting more than 7 days may indicate a bacterial infection. Consider consulting a doctor.",
                )],
            )]),
        ],
    }
}

pub(super) fn sore_throat() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::SoreThroat,
        title: "Sore Throat Analysis",
        keywords: &["sore throat", "throat pain", "throat hurts", "throatache"],
        questions: &[
            "How long have you had the sore throat?",
            "On a scale of 1-10, how severe is the pain?",
            "Is it painful to swallow?",
            "Do you have a fever or body aches?",
            "Do you have a cough or runny nose?",
            "Are your tonsils swollen or do you see white spots?",
            "Do you have swollen lymph nodes in your neck?",
            "Have you been exposed to anyone with strep throat?",
            "Do you have hoarseness or voice changes?",
            "Is the pain worse in the morning or throughout the day?",
        ],
        reads: &[1, 3, 5, 6, 7],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "sore_throat.strep",
                    |a| a.has(5, "yes") && a.has(3, "yes") && a.has(7, "yes"),
                    vec![Warning(
                        "Possible Strep Throat. White spots on tonsils with fever may indicate strep throat, which requires antibiotics. Consult a healthcare provider for testing.",
                    )],
                ),
                Rule::new(
                    "sore_throat.infection",
                    |a| a.has(3, "yes") || a.has(6, "yes"),
                    vec![Headline("This may be a Bacterial or Viral Throat Infection.")],
                ),
                Rule::otherwise(
                    "sore_throat.viral",
                    vec![Headline("This appears to be a Sore Throat, likely viral.")],
                ),
            ]),
            Stage::Always(vec![
                Section(OTC_MEDICINES),
                Medicine("Throat lozenges (Strepsils, Cepacol, Halls) - for temporary pain relief - ₹75"),
                Medicine("Chloraseptic or Cepacol throat spray - ₹80"),
                Medicine("Ibuprofen 400-600mg (Advil) - for pain and inflammation - ₹80"),
                Medicine("Acetaminophen 500-1000mg (Tylenol) - for pain - ₹50"),
                Bullet("Warm salt water gargle solution (if available)"),
                Section(HOME_REMEDIES),
                Bullet("Salt water gargle (1/2 tsp salt in 8 oz warm water) - 3-4 times daily"),
                Bullet("Stay hydrated - drink warm fluids (tea with honey, warm water, soup)"),
                Bullet("Honey and lemon in warm water (soothing and antimicrobial)"),
                Bullet("Throat lozenges or hard candies (keep throat moist)"),
                Bullet("Rest your voice (avoid talking loudly or whispering)"),
                Bullet("Use a humidifier to add moisture to air"),
                Bullet("Avoid irritants (smoke, dry air, alcohol)"),
                Bullet("Warm compress on neck"),
                Bullet("Get plenty of rest"),
            ]),
            Stage::Every(vec![Rule::new(
                "sore_throat.evaluate",
                |a| a.number(1, 5) >= 8 || a.has(5, "yes"),
                vec![Caution(
                    "Note: Severe sore throat or symptoms suggesting strep throat should be evaluated by a healthcare provider for proper treatment.",
                )],
            )]),
        ],
    }
}

pub(super) fn cough() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::Cough,
        title: "Cough Analysis",
        keywords: &["cough", "coughing", "hacking"],
        questions: &[
            "How long have you had the cough?",
            "Is your cough dry (no phlegm) or productive (with phlegm/mucus)?",
            "What color is the phlegm? (Clear, white, yellow, green, or bloody?)",
            "Do you have a fever, body aches, or other cold symptoms?",
            "Does the cough worsen at night or when lying down?",
            "Do you have shortness of breath or wheezing?",
            "Have you been exposed to smoke, dust, or other irritants?",
            "Do you have chest pain or tightness?",
            "Are you taking any medications that might cause cough?",
            "Do you have heartburn or acid reflux?",
        ],
        reads: &[1, 2, 4, 5, 9],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "cough.breathing",
                    |a| a.has_any(5, &["yes", "shortness"]),
                    vec![Warning(
                        "Difficulty Breathing. Cough with shortness of breath or wheezing requires medical evaluation. Seek care if severe.",
                    )],
                ),
                Rule::new(
                    "cough.reflux",
                    |a| a.has(9, "yes") && a.has(4, "night"),
                    vec![Headline("This may be Acid Reflux-Related Cough.")],
                ),
                Rule::new(
                    "cough.bacterial",
                    |a| a.has(1, "productive") && a.has(2, "green"),
                    vec![Headline(
                        "This may be a Bacterial Infection. Consult a healthcare provider if it persists.",
                    )],
                ),
                Rule::new(
                    "cough.dry",
                    |a| a.has(1, "dry"),
                    vec![Headline("This appears to be a Dry Cough.")],
                ),
                Rule::otherwise(
                    "cough.productive",
                    vec![Headline("This appears to be a Productive Cough.")],
                ),
            ]),
            Stage::Always(vec![Section(OTC_MEDICINES)]),
            Stage::FirstMatch(vec![
                Rule::new(
                    "cough.suppressant",
                    |a| a.has(1, "dry"),
                    vec![
                        Medicine("Dextromethorphan (Robitussin DM, Delsym) - cough suppressant - ₹55"),
                        Bullet("Honey (natural cough suppressant - 1-2 tsp as needed)"),
                    ],
                ),
                Rule::otherwise(
                    "cough.expectorant",
                    vec![
                        Medicine("Guaifenesin (Mucinex, Robitussin) - expectorant to loosen phlegm - ₹65"),
                        Medicine("Bromhexine - to help clear mucus - ₹60"),
                        Bullet("Avoid cough suppressants for productive coughs (need to clear mucus)"),
                    ],
                ),
            ]),
            Stage::Always(vec![
                Medicine("Throat lozenges (Strepsils, Cepacol) - for throat irritation - ₹75"),
                Medicine("Ibuprofen or Acetaminophen (if you have fever or body aches) - ₹80"),
                Section(HOME_REMEDIES),
                Bullet("Stay hydrated - drink plenty of warm fluids (water, tea, soup)"),
                Bullet("Honey and lemon in warm water (soothing and helps with cough)"),
                Bullet("Steam inhalation - breathe steam from hot shower or bowl of hot water"),
                Bullet("Use a humidifier to add moisture to air"),
                Bullet("Elevate head while sleeping (for nighttime cough)"),
                Bullet("Avoid irritants (smoke, dust, strong perfumes)"),
                Bullet("Salt water gargle (if throat is irritated)"),
                Bullet("Get plenty of rest"),
            ]),
            Stage::Every(vec![Rule::new(
                "cough.blood",
                |a| a.affirms_any(2, &["blood"]),
                vec![Warning(
                    "URGENT: Blood in Phlegm. Coughing up blood requires immediate medical attention. Seek emergency care.",
                )],
            )]),
        ],
    }
}
