//! Digestive protocols: nausea, diarrhea, constipation.

use super::{HOME_REMEDIES, OTC_MEDICINES, SymptomProtocol};
use crate::rules::{Item::*, Rule, Stage};
use crate::symptom::SymptomKey;

pub(super) fn nausea() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::Nausea,
        title: "Nausea Analysis",
        keywords: &["nausea", "nauseous", "feeling sick", "queasy"],
        questions: &[
            "How long have you been feeling nauseous?",
            "Have you vomited? If yes, how many times?",
            "What triggered the nausea? (Food, motion, medication, or unknown?)",
            "Do you have any other symptoms? (Fever, diarrhea, abdominal pain, headache?)",
            "Are you pregnant or could you be pregnant?",
            "Have you eaten anything unusual or potentially spoiled?",
            "Are you taking any medications that might cause nausea?",
            "Do you have acid reflux or heartburn along with nausea?",
            "Does the nausea worsen with certain foods or smells?",
            "Have you been under stress or anxiety recently?",
        ],
        reads: &[2, 3, 4, 5],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "nausea.pregnancy",
                    |a| a.has_any(4, &["yes", "could"]),
                    vec![Headline("This may be Morning Sickness or Pregnancy-Related Nausea.")],
                ),
                Rule::new(
                    "nausea.food_poisoning",
                    |a| a.has_any(5, &["yes", "spoiled"]),
                    vec![Warning(
                        "Possible Food Poisoning. Nausea after eating potentially spoiled food may indicate food poisoning. Stay hydrated and seek medical care if severe or persistent.",
                    )],
                ),
                Rule::new(
                    "nausea.motion",
                    |a| a.has(2, "motion"),
                    vec![Headline("This appears to be Motion Sickness.")],
                ),
                Rule::new(
                    "nausea.medication",
                    |a| a.has(2, "medication"),
                    vec![Headline(
                        "This may be Medication-Induced Nausea. Consult your doctor about adjusting medication.",
                    )],
                ),
                Rule::otherwise("nausea.general", vec![Headline("This appears to be General Nausea.")]),
            ]),
            Stage::Always(vec![
                Section(OTC_MEDICINES),
                Bullet("Dimenhydrinate (Dramamine) - for motion sickness and general nausea"),
                Bullet("Meclizine (Antivert, Bonine) - for motion sickness"),
                Bullet("Bismuth subsalicylate (Pepto-Bismol) - for stomach upset"),
                Bullet("Antacids (if related to acid reflux)"),
                Bullet("Ginger supplements, capsules, or tea - natural anti-nausea"),
                Section(HOME_REMEDIES),
                Bullet("Eat small, frequent meals (avoid large meals)"),
                Bullet("Stick to bland foods (crackers, toast, rice, bananas)"),
                Bullet("Avoid spicy, greasy, or strong-smelling foods"),
                Bullet("Stay hydrated - sip water, clear broths, or electrolyte solutions"),
                Bullet("Ginger tea or ginger ale (real ginger, not just flavored)"),
                Bullet("Peppermint tea or peppermint candies"),
                Bullet("Get fresh air and avoid strong odors"),
                Bullet("Rest in a comfortable position"),
                Bullet("Acupressure (wrist bands for motion sickness)"),
            ]),
            Stage::Every(vec![Rule::new(
                "nausea.infection",
                |a| a.has(3, "fever") && a.has(3, "severe"),
                vec![Caution(
                    "Note: Nausea with fever and severe symptoms may indicate infection. Consult a healthcare provider if symptoms persist or worsen.",
                )],
            )]),
        ],
    }
}

pub(super) fn diarrhea() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::Diarrhea,
        title: "Diarrhea Analysis",
        keywords: &["diarrhea", "diarrhoea", "loose stool", "loose stools"],
        questions: &[
            "How long have you had diarrhea?",
            "How many times have you had loose stools today?",
            "What is the consistency? (Watery, loose, or semi-formed?)",
            "Do you have abdominal pain, cramping, or bloating?",
            "Do you have fever, nausea, or vomiting?",
            "Have you eaten anything unusual or traveled recently?",
            "Do you see blood or mucus in your stool?",
            "Are you able to keep fluids down?",
            "Do you feel dehydrated? (Dry mouth, decreased urination, dizziness?)",
            "Are you taking any medications, especially antibiotics?",
        ],
        reads: &[0, 1, 4, 6, 8],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "diarrhea.blood",
                    |a| a.affirms_any(6, &["yes", "blood"]),
                    vec![Warning(
                        "URGENT: Blood in Stool. Diarrhea with blood requires immediate medical attention. Seek emergency care.",
                    )],
                ),
                Rule::new(
                    "diarrhea.dehydration",
                    |a| a.has(8, "yes") || a.number(1, 3) > 10,
                    vec![Warning(
                        "Severe Diarrhea - Risk of Dehydration. Frequent diarrhea with signs of dehydration requires medical attention. Seek care if unable to keep fluids down.",
                    )],
                ),
                Rule::new(
                    "diarrhea.gastroenteritis",
                    |a| a.has(4, "yes") && a.number(0, 1) > 2,
                    vec![Headline("This may be Bacterial or Viral Gastroenteritis.")],
                ),
                Rule::new(
                    "diarrhea.acute",
                    |a| a.number(0, 1) < 2,
                    vec![Headline(
                        "This appears to be Acute Diarrhea, likely from food or viral infection.",
                    )],
                ),
                Rule::otherwise("diarrhea.general", vec![Headline("This appears to be Diarrhea.")]),
            ]),
            Stage::Always(vec![
                Section(OTC_MEDICINES),
                Bullet("Loperamide (Imodium) - to slow down bowel movements (use cautiously, not for bacterial infections)"),
                Bullet("Bismuth subsalicylate (Pepto-Bismol) - for diarrhea and stomach upset"),
                Bullet("Probiotics (Lactobacillus, Bifidobacterium) - to restore gut flora"),
                Bullet("Oral Rehydration Solution (ORS) - essential for preventing dehydration"),
                Bullet("Activated Charcoal (may help with some toxins)"),
                Section("🏠 Home Remedies & Hydration:"),
                Bullet("CRITICAL: Stay hydrated - drink water, ORS, clear broths, or electrolyte solutions"),
                Bullet("Eat BRAT diet: Bananas, Rice, Applesauce, Toast (bland foods)"),
                Bullet("Avoid dairy, spicy foods, caffeine, and alcohol"),
                Bullet("Avoid high-fiber foods temporarily"),
                Bullet("Get plenty of rest"),
                Bullet("Wash hands frequently to prevent spread"),
            ]),
            Stage::Every(vec![Rule::new(
                "diarrhea.persistent",
                |a| a.number(0, 1) > 3,
                vec![Caution(
                    "Note: Diarrhea lasting more than 3 days should be evaluated by a healthcare provider.",
                )],
            )]),
        ],
    }
}

pub(super) fn constipation() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::Constipation,
        title: "Constipation Analysis",
        keywords: &["constipation", "can't poop", "hard stool", "difficulty passing stool"],
        questions: &[
            "How long have you been constipated?",
            "When was your last bowel movement?",
            "How often do you normally have bowel movements?",
            "Is passing stool painful or difficult?",
            "Do you feel bloated or have abdominal discomfort?",
            "Have you made any recent changes to your diet or lifestyle?",
            "Are you taking any medications that might cause constipation?",
            "Do you drink enough water daily?",
            "Do you get regular physical activity?",
            "Do you have any other symptoms? (Nausea, vomiting, severe pain?)",
        ],
        reads: &[0, 9],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "constipation.severe",
                    |a| a.number(0, 1) > 7 && a.has(9, "severe"),
                    vec![Warning(
                        "Severe Constipation. Constipation lasting more than a week with severe symptoms should be evaluated by a healthcare provider.",
                    )],
                ),
                Rule::otherwise("constipation.general", vec![Headline("This appears to be Constipation.")]),
            ]),
            Stage::Always(vec![
                Section(OTC_MEDICINES),
                Bullet("Fiber supplements (Psyllium husk, Metamucil) - take with plenty of water"),
                Bullet("Stool softeners (Docusate sodium - Colace)"),
                Bullet("Osmotic laxatives (Polyethylene glycol - Miralax, Lactulose)"),
                Bullet("Stimulant laxatives (Senna, Bisacodyl - use short-term only)"),
                Bullet("Magnesium supplements (may help with regularity)"),
                Bullet("Probiotics (to support gut health)"),
                Section("🏠 Home Remedies & Lifestyle:"),
                Bullet("Increase fiber intake gradually (fruits, vegetables, whole grains)"),
                Bullet("Drink plenty of water (8-10 glasses daily)"),
                Bullet("Get regular physical activity (walking, exercise)"),
                Bullet("Establish regular bathroom routine"),
                Bullet("Don't ignore the urge to have a bowel movement"),
                Bullet("Prune juice or dried prunes (natural laxative)"),
                Bullet("Warm liquids in the morning (tea, warm water with lemon)"),
                Bullet("Avoid processed foods and excessive dairy"),
                Bullet("Consider abdominal massage"),
            ]),
            Stage::Every(vec![Rule::new(
                "constipation.persistent",
                |a| a.number(0, 1) > 3,
                vec![Caution(
                    "Note: If constipation persists for more than 3 days or is accompanied by severe pain, consult a healthcare provider.",
                )],
            )]),
        ],
    }
}
