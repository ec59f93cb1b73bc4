//! Whole-body protocols: fatigue, dizziness, insomnia.

use super::SymptomProtocol;
use crate::rules::{Item::*, Rule, Stage};
use crate::symptom::SymptomKey;

pub(super) fn fatigue() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::Fatigue,
        title: "Fatigue Analysis",
        keywords: &["fatigue", "tired", "exhausted", "low energy", "feeling tired"],
        questions: &[
            "How long have you been feeling fatigued or tired?",
            "Is the fatigue constant or does it come and go?",
            "How would you rate your energy level? (1-10, where 1 is completely exhausted)",
            "Do you have difficulty sleeping or are you sleeping too much?",
            "Have you been under increased stress recently?",
            "Have you made any changes to your diet or eating habits?",
            "Do you have other symptoms? (Fever, body aches, headache, or mood changes?)",
            "Are you taking any medications that might cause fatigue?",
            "Have you been more physically active than usual?",
            "Do you feel better after rest or does rest not help?",
        ],
        reads: &[3, 4, 6],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "fatigue.illness",
                    |a| a.has_any(6, &["fever", "ache"]),
                    vec![Headline(
                        "Fatigue with fever or body aches may indicate an infection or illness.",
                    )],
                ),
                Rule::new(
                    "fatigue.sleep",
                    |a| a.has_any(3, &["difficulty", "insomnia"]),
                    vec![Headline("This may be related to sleep problems or insomnia.")],
                ),
                Rule::new(
                    "fatigue.stress",
                    |a| a.has(4, "yes"),
                    vec![Headline("This may be stress-related fatigue.")],
                ),
                Rule::otherwise(
                    "fatigue.general",
                    vec![Headline("This appears to be General Fatigue or Tiredness.")],
                ),
            ]),
            Stage::Always(vec![
                Section("💊 Recommended Supplements (if needed):"),
                Bullet("Iron supplements (if anemic - check with doctor first)"),
                Bullet("Vitamin B12 (if deficient)"),
                Bullet("Vitamin D3 (if deficient)"),
                Bullet("Multivitamin with B-complex"),
                Bullet("Coenzyme Q10 (may help with energy)"),
                Bullet("Avoid excessive caffeine (can cause energy crashes)"),
                Section("🏠 Lifestyle & Home Remedies:"),
                Bullet("Get 7-9 hours of quality sleep per night"),
                Bullet("Maintain a regular sleep schedule"),
                Bullet("Eat a balanced diet with regular meals"),
                Bullet("Stay hydrated - drink plenty of water"),
                Bullet("Exercise regularly (even light activity can boost energy)"),
                Bullet("Manage stress through relaxation techniques (meditation, yoga)"),
                Bullet("Take short breaks throughout the day"),
                Bullet("Limit alcohol and avoid smoking"),
                Bullet("Get sunlight exposure (for Vitamin D and circadian rhythm)"),
                Caution(
                    "Note: If fatigue persists for more than 2 weeks or is severe, consult a healthcare provider to rule out underlying conditions.",
                ),
            ]),
        ],
    }
}

pub(super) fn dizziness() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::Dizziness,
        title: "Dizziness Analysis",
        keywords: &["dizziness", "dizzy", "lightheaded", "vertigo", "feeling faint"],
        questions: &[
            "How long have you been experiencing dizziness?",
            "How would you describe it? (Spinning sensation, lightheadedness, feeling faint, or unsteady?)",
            "Does the dizziness occur when you stand up, move your head, or is it constant?",
            "Do you have nausea, vomiting, or sweating with the dizziness?",
            "Have you had any recent head injury or trauma?",
            "Are you taking any medications that might cause dizziness?",
            "Do you have ear pain, ringing in ears, or hearing changes?",
            "Do you have vision changes, headache, or confusion?",
            "Have you been dehydrated or not eating properly?",
            "Do you have any heart conditions or blood pressure issues?",
        ],
        reads: &[1, 2, 4, 6],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "dizziness.head_injury",
                    |a| a.has_any(4, &["yes", "injury"]),
                    vec![Warning(
                        "URGENT: Head Injury. Dizziness after head injury requires immediate medical evaluation. Seek emergency care.",
                    )],
                ),
                Rule::new(
                    "dizziness.vertigo",
                    |a| a.has(1, "spinning") && a.has(6, "ringing"),
                    vec![Headline(
                        "This may be Vertigo or Inner Ear Problem (e.g., Benign Paroxysmal Positional Vertigo - BPPV).",
                    )],
                ),
                Rule::new(
                    "dizziness.orthostatic",
                    |a| a.has(2, "stand"),
                    vec![Headline(
                        "This may be Orthostatic Hypotension (low blood pressure when standing).",
                    )],
                ),
                Rule::otherwise(
                    "dizziness.general",
                    vec![Headline("This appears to be General Dizziness or Lightheadedness.")],
                ),
            ]),
            Stage::Always(vec![
                Section("💊 Recommended Medicines (OTC - use with caution):"),
                Bullet("Meclizine (Antivert, Dramamine) - for vertigo and motion sickness"),
                Bullet("Dimenhydrinate (Dramamine) - for nausea and dizziness"),
                Bullet("Ginger supplements or tea - natural anti-nausea"),
                Section("🏠 Home Remedies & Safety:"),
                Bullet("Sit or lie down immediately when feeling dizzy"),
                Bullet("Move slowly when changing positions"),
                Bullet("Stay hydrated - drink plenty of water"),
                Bullet("Eat regular, balanced meals (avoid low blood sugar)"),
                Bullet("Avoid sudden head movements"),
                Bullet("Get up slowly from sitting or lying position"),
                Bullet("Avoid alcohol and caffeine"),
                Bullet("Use assistive devices if needed (cane, handrails)"),
                Bullet("Epley maneuver (for BPPV - consult doctor first)"),
                Caution(
                    "Important: If dizziness is severe, persistent, or accompanied by chest pain, difficulty speaking, or weakness, seek immediate medical attention.",
                ),
            ]),
        ],
    }
}

pub(super) fn insomnia() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::Insomnia,
        title: "Insomnia & Sleep Problems Analysis",
        keywords: &["insomnia", "can't sleep", "trouble sleeping", "sleep problems", "sleepless"],
        questions: &[
            "How long have you been having trouble sleeping?",
            "What is your main sleep problem? (Difficulty falling asleep, staying asleep, waking too early, or poor quality sleep?)",
            "How many hours of sleep do you typically get per night?",
            "What time do you usually go to bed and wake up?",
            "Do you feel tired or sleepy during the day?",
            "Are you under increased stress or anxiety?",
            "Do you drink caffeine, alcohol, or use electronic devices before bed?",
            "Do you have pain, discomfort, or other symptoms that keep you awake?",
            "Do you take naps during the day?",
            "Is your sleep environment comfortable? (Temperature, noise, light, mattress?)",
        ],
        reads: &[1, 2, 5, 6],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "insomnia.stress",
                    |a| a.has(5, "yes"),
                    vec![Headline("This may be Stress or Anxiety-Related Insomnia.")],
                ),
                Rule::new(
                    "insomnia.habits",
                    |a| a.has_any(6, &["caffeine", "electronic"]),
                    vec![Headline("This may be related to Sleep Habits or Lifestyle Factors.")],
                ),
                Rule::otherwise(
                    "insomnia.general",
                    vec![Headline("This appears to be Insomnia or Sleep Problems.")],
                ),
            ]),
            Stage::Always(vec![
                Section("💊 Recommended Supplements/Medicines (OTC - use cautiously):"),
                Medicine("Melatonin 0.5-3mg - take 30-60 min before bedtime - ₹200"),
                Medicine("Magnesium supplements (may promote relaxation) - ₹150"),
                Medicine("Valerian root (herbal sleep aid) - ₹180"),
                Bullet("Chamomile tea (natural relaxant)"),
                Medicine(
                    "Diphenhydramine (Benadryl) - short-term use only, may cause next-day drowsiness - ₹35",
                ),
                Medicine("Doxylamine (Unisom) - similar to diphenhydramine - ₹40"),
                Caution("Avoid long-term use of sleep aids without medical supervision"),
                Section("🏠 Sleep Hygiene & Lifestyle Changes:"),
                Bullet("Maintain a regular sleep schedule (same bedtime and wake time, even on weekends)"),
                Bullet("Create a relaxing bedtime routine (warm bath, reading, meditation)"),
                Bullet("Make your bedroom comfortable (cool, dark, quiet)"),
                Bullet("Avoid caffeine after 2 PM"),
                Bullet("Avoid alcohol close to bedtime (disrupts sleep quality)"),
                Bullet("Avoid large meals, heavy exercise, or stimulating activities before bed"),
                Bullet("Turn off electronic devices 1 hour before bed (blue light disrupts sleep)"),
                Bullet("Use bed only for sleep and intimacy (not work, TV, or phone)"),
                Bullet(
                    "If you can't sleep after 20 minutes, get up and do something relaxing, then return to bed",
                ),
                Bullet("Limit daytime naps to 20-30 minutes (if needed)"),
                Bullet("Get regular exercise (but not too close to bedtime)"),
                Bullet(
                    "Practice relaxation techniques (deep breathing, meditation, progressive muscle relaxation)",
                ),
                Bullet("Consider cognitive behavioral therapy for insomnia (CBT-I)"),
            ]),
            Stage::Every(vec![Rule::new(
                "insomnia.deprivation",
                |a| a.number(2, 7) < 5,
                vec![Caution(
                    "Severe sleep deprivation. If sleep problems persist and significantly affect your daily life, consult a healthcare provider or sleep specialist.",
                )],
            )]),
        ],
    }
}
