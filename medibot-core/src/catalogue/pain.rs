//! Pain protocols: headache, stomach, muscle, back, joint.

use super::{HOME_REMEDIES, OTC_MEDICINES, SymptomProtocol};
use crate::rules::{Item::*, Rule, Stage};
use crate::symptom::SymptomKey;

pub(super) fn headache() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::Headache,
        title: "Headache Analysis",
        keywords: &["headache", "head pain", "migraine"],
        questions: &[
            "How long have you had this headache? (Hours, days, or recurring?)",
            "Where is the pain located? (Forehead, temples, one side, back of head, or all over?)",
            "On a scale of 1-10, how severe is the pain?",
            "How would you describe the pain? (Throbbing, dull, sharp, pressure, or stabbing?)",
            "Do you have sensitivity to light, sound, or smells?",
            "Have you experienced nausea, vomiting, or dizziness with this headache?",
            "Does the pain worsen with physical activity or movement?",
            "Have you taken any medication for it yet? If yes, what and did it help?",
            "Did you drink enough water today or skip any meals?",
            "Have you been under stress or had poor sleep recently?",
        ],
        reads: &[1, 2, 4, 6],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "headache.migraine",
                    |a| a.has_any(1, &["one side", "temple"]) || a.has(4, "yes"),
                    vec![
                        Headline("Your symptoms suggest a possible Migraine."),
                        Section(OTC_MEDICINES),
                        Medicine("Excedrin Migraine (Acetaminophen + Aspirin + Caffeine) - ₹150"),
                        Medicine("Ibuprofen 400-600mg (Advil, Motrin) - ₹80"),
                        Medicine("Naproxen 220mg (Aleve) - ₹100"),
                        Bullet("Sumatriptan (if prescribed by doctor)"),
                        Section(HOME_REMEDIES),
                        Bullet("Rest in a dark, quiet room"),
                        Bullet("Apply cold compress to forehead or temples"),
                        Bullet("Stay hydrated with water"),
                        Bullet("Avoid triggers (bright lights, strong smells)"),
                    ],
                ),
                Rule::new(
                    "headache.sinus_tension",
                    |a| a.has_any(1, &["forehead", "eyes", "sinus"]),
                    vec![
                        Headline("This sounds like a Sinus or Tension Headache."),
                        Section(OTC_MEDICINES),
                        Medicine("Acetaminophen 500-1000mg (Tylenol, Paracetamol) - ₹50"),
                        Medicine("Ibuprofen 400-600mg (Advil) - ₹80"),
                        Bullet("Decongestant (if sinus-related)"),
                        Section(HOME_REMEDIES),
                        Bullet("Steam inhalation for sinus relief"),
                        Bullet("Gentle neck and shoulder massage"),
                        Bullet("Warm compress on forehead"),
                    ],
                ),
                Rule::new(
                    "headache.exertion",
                    |a| a.has_any(6, &["yes", "worse"]),
                    vec![
                        Headline("This may be an Exertion or Exercise-Induced Headache."),
                        Section(OTC_MEDICINES),
                        Bullet("Ibuprofen or Acetaminophen"),
                        Bullet("Rest and avoid strenuous activity"),
                    ],
                ),
                Rule::otherwise(
                    "headache.general",
                    vec![
                        Headline(
                            "It appears to be a Tension or General Headache, likely due to stress, dehydration, or fatigue.",
                        ),
                        Section(OTC_MEDICINES),
                        Medicine("Paracetamol 500mg (Dolo, Crocin, Tylenol) - ₹50"),
                        Medicine("Aspirin 325mg (Disprin) - if no stomach issues - ₹45"),
                        Medicine("Ibuprofen 400mg (Advil) - ₹80"),
                        Section(HOME_REMEDIES),
                        Bullet("Rest in a quiet environment"),
                        Bullet("Drink plenty of water"),
                        Bullet("Apply cold or warm compress"),
                        Bullet("Practice relaxation techniques"),
                    ],
                ),
            ]),
            Stage::Every(vec![Rule::new(
                "headache.severe",
                |a| a.number(2, 5) >= 8,
                vec![Warning(
                    "Severe headache detected. If this persists or worsens, consult a healthcare provider immediately.",
                )],
            )]),
        ],
    }
}

pub(super) fn stomach_pain() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::StomachPain,
        title: "Stomach Pain Analysis",
        keywords: &["stomach", "belly", "abdomen", "stomachache"],
        questions: &[
            "Where exactly is the pain located? (Upper abdomen, lower abdomen, left side, right side, center?)",
            "How would you describe the pain? (Sharp/stabbing, dull/aching, cramping, burning, or pressure?)",
            "On a scale of 1-10, how severe is the pain?",
            "Do you have nausea, vomiting, or diarrhea?",
            "When did you last eat, and what did you eat?",
            "Do you have heartburn, acid reflux, or an acidic/burning sensation?",
            "Do you feel bloated, gassy, or have excessive belching?",
            "Have you had a fever along with the pain?",
            "Is the pain constant or does it come and go?",
            "Does the pain worsen when you move, press on it, or after eating?",
        ],
        reads: &[0, 1, 2, 5],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "stomach.acid",
                    |a| a.has(5, "yes") || a.has(1, "burn") || a.has(0, "upper"),
                    vec![
                        Headline("This suggests Acid Reflux, GERD, or Gastritis."),
                        Section(OTC_MEDICINES),
                        Medicine("Antacids (Digene, Eno, Tums) - for immediate relief - ₹30"),
                        Medicine("Omeprazole 20mg (Omez, Prilosec) - take on empty stomach, 30 min before breakfast - ₹50"),
                        Medicine("Pantoprazole 40mg (Pantocid) - similar to Omeprazole - ₹60"),
                        Medicine("Ranitidine 150mg (Zantac) - H2 blocker - ₹40"),
                        Medicine("Famotidine 20mg (Pepcid) - ₹45"),
                        Section(HOME_REMEDIES),
                        Bullet("Avoid spicy, acidic, or fatty foods"),
                        Bullet("Eat smaller, more frequent meals"),
                        Bullet("Don't lie down immediately after eating"),
                        Bullet("Elevate head while sleeping"),
                        Bullet("Avoid alcohol, caffeine, and smoking"),
                    ],
                ),
                Rule::new(
                    "stomach.cramps",
                    |a| a.has(0, "lower") && a.has(1, "cramp"),
                    vec![
                        Headline("This could be Intestinal Cramps, Gas, or IBS."),
                        Section(OTC_MEDICINES),
                        Medicine("Dicyclomine (for intestinal cramps) - ₹35"),
                        Medicine("Simethicone (for gas and bloating) - ₹30"),
                        Medicine("Probiotics (to restore gut flora) - ₹200"),
                        Medicine("Peppermint oil capsules (for IBS symptoms) - ₹150"),
                        Section(HOME_REMEDIES),
                        Bullet("Apply warm compress to abdomen"),
                        Bullet("Gentle abdominal massage"),
                        Bullet("Drink peppermint or chamomile tea"),
                        Bullet("Avoid gas-producing foods (beans, cabbage, carbonated drinks)"),
                    ],
                ),
                Rule::new(
                    "stomach.appendicitis",
                    |a| a.has(0, "right") && a.has(0, "lower") && a.number(2, 5) >= 7,
                    vec![
                        Warning(
                            "URGENT: Possible Appendicitis. Severe pain in the lower right abdomen requires immediate medical attention. Go to the emergency room or call emergency services.",
                        ),
                        Bullet("Do NOT take pain medication before seeing a doctor, as it can mask symptoms."),
                    ],
                )
                .terminal(),
                Rule::otherwise(
                    "stomach.indigestion",
                    vec![
                        Headline("This appears to be General Indigestion or Stomach Upset."),
                        Section(OTC_MEDICINES),
                        Medicine("Antacid liquid or tablets (Digene, Eno) - ₹30"),
                        Medicine("Activated Charcoal (for gas and bloating) - ₹40"),
                        Medicine("Digestive enzymes (if available) - ₹100"),
                        Section(HOME_REMEDIES),
                        Bullet("Rest and avoid heavy meals"),
                        Bullet("Drink plenty of water"),
                        Bullet("Eat bland foods (rice, bananas, toast)"),
                        Bullet("Avoid spicy, fried, or processed foods"),
                    ],
                ),
            ]),
            Stage::Every(vec![Rule::new(
                "stomach.severe",
                |a| a.number(2, 5) >= 8,
                vec![Warning(
                    "Severe pain detected. If pain is severe, persistent, or worsening, seek medical attention immediately.",
                )],
            )]),
        ],
    }
}

pub(super) fn muscle_pain() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::MusclePain,
        title: "Muscle Pain Analysis",
        keywords: &["muscle pain", "muscle ache", "muscle soreness", "sore muscles"],
        questions: &[
            "Where is the muscle pain located? (Neck, back, shoulders, arms, legs, or all over?)",
            "How long have you had this pain? (Hours, days, or weeks?)",
            "On a scale of 1-10, how severe is the pain?",
            "What triggered the pain? (Exercise, injury, overuse, or no specific cause?)",
            "Is the pain constant or does it worsen with movement?",
            "Do you have any swelling, redness, or warmth in the affected area?",
            "Have you been doing any new physical activities or exercises?",
            "Do you have fever, fatigue, or other symptoms along with the pain?",
            "Have you tried any treatments yet? (Ice, heat, rest, medication?)",
            "Does the pain improve with rest or worsen with activity?",
        ],
        reads: &[0, 2, 3, 5, 7],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "muscle.exercise",
                    |a| a.has_any(3, &["exercise", "overuse", "new"]),
                    vec![
                        Headline("This appears to be Exercise-Induced Muscle Soreness or Strain."),
                        Section(OTC_MEDICINES),
                        Medicine("Ibuprofen 400-600mg (Advil, Motrin) - anti-inflammatory, every 6-8 hours - ₹80"),
                        Medicine("Naproxen 220-440mg (Aleve) - longer-lasting relief - ₹100"),
                        Medicine("Acetaminophen 500-1000mg (Tylenol) - for pain relief - ₹50"),
                        Medicine("Topical pain relief: Diclofenac gel (Voltaren) - ₹95"),
                        Bullet("Muscle relaxants (if prescribed by doctor)"),
                        Section("🏠 Home Remedies (RICE Method):"),
                        Bullet("Rest - avoid activities that worsen pain"),
                        Bullet("Ice - apply cold pack for 15-20 min, 3-4 times daily (first 48 hours)"),
                        Bullet("Compression - use elastic bandage if needed"),
                        Bullet("Elevation - elevate affected area if possible"),
                        Bullet("After 48 hours, switch to heat therapy (warm compress, heating pad)"),
                        Bullet("Gentle stretching (once acute pain subsides)"),
                        Bullet("Epsom salt bath"),
                    ],
                ),
                Rule::new(
                    "muscle.infection",
                    |a| a.has(5, "yes") || a.has(7, "yes"),
                    vec![
                        Warning(
                            "Possible Infection or Serious Condition. Muscle pain with swelling, redness, warmth, or fever may indicate infection or other serious conditions. Please consult a healthcare provider.",
                        ),
                        Section("💊 Temporary Relief (while seeking medical care):"),
                        Bullet("Ibuprofen or Acetaminophen for pain and fever"),
                        Bullet("Apply cold compress to reduce swelling"),
                    ],
                ),
                Rule::new(
                    "muscle.back",
                    |a| a.has(0, "back"),
                    vec![
                        Headline("This appears to be Back Muscle Pain or Strain."),
                        Section(OTC_MEDICINES),
                        Bullet("Ibuprofen 400-600mg (Advil) - for inflammation and pain"),
                        Bullet("Naproxen 220-440mg (Aleve)"),
                        Bullet("Topical: Diclofenac gel, Capsaicin cream, or Menthol rubs"),
                        Bullet("Muscle relaxants (if prescribed)"),
                        Section(HOME_REMEDIES),
                        Bullet("Apply ice for first 48 hours, then heat"),
                        Bullet("Gentle back stretches and exercises"),
                        Bullet("Maintain good posture"),
                        Bullet("Sleep on a firm mattress with proper support"),
                        Bullet("Avoid heavy lifting"),
                    ],
                ),
                Rule::otherwise(
                    "muscle.general",
                    vec![
                        Headline("This appears to be General Muscle Pain or Aches."),
                        Section(OTC_MEDICINES),
                        Bullet("Ibuprofen 400-600mg (Advil, Motrin)"),
                        Bullet("Acetaminophen 500-1000mg (Tylenol)"),
                        Bullet("Topical pain relief gels or creams"),
                        Bullet("Epsom salt for baths"),
                        Section(HOME_REMEDIES),
                        Bullet("Rest the affected muscles"),
                        Bullet("Alternate ice and heat therapy"),
                        Bullet("Gentle massage"),
                        Bullet("Stay hydrated"),
                        Bullet("Gentle stretching when pain improves"),
                    ],
                ),
            ]),
            Stage::Every(vec![Rule::new(
                "muscle.severe",
                |a| a.number(2, 5) >= 8,
                vec![Warning(
                    "Severe pain detected. If pain is severe, persistent, or accompanied by other symptoms, consult a healthcare provider.",
                )],
            )]),
        ],
    }
}

pub(super) fn back_pain() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::BackPain,
        title: "Back Pain Analysis",
        keywords: &["back pain", "backache", "lower back", "upper back"],
        questions: &[
            "Where exactly is the back pain? (Upper back, lower back, middle back, or all over?)",
            "How long have you had this pain?",
            "On a scale of 1-10, how severe is the pain?",
            "What triggered it? (Lifting, sudden movement, sitting for long, or gradual onset?)",
            "Is the pain constant or does it come and go?",
            "Does the pain radiate to your legs, arms, or other areas?",
            "Do you have numbness, tingling, or weakness in your legs?",
            "Does the pain worsen with movement, sitting, or standing?",
            "Have you tried any treatments? (Rest, heat, ice, medication?)",
            "Do you have any other symptoms? (Fever, weight loss, difficulty controlling bladder/bowel?)",
        ],
        reads: &[2, 3, 5, 6],
        stages: vec![
            Stage::Every(vec![Rule::new(
                "back.nerve",
                |a| a.has(6, "yes") || a.has(5, "leg"),
                vec![Warning(
                    "Possible Nerve Involvement. Back pain with leg pain, numbness, or tingling may indicate nerve compression. Consult a healthcare provider, especially if severe.",
                )],
            )]),
            Stage::FirstMatch(vec![
                Rule::new(
                    "back.acute_strain",
                    |a| a.has_any(3, &["lifting", "sudden"]),
                    vec![Headline("This appears to be Acute Back Strain or Sprain.")],
                ),
                Rule::new(
                    "back.postural",
                    |a| a.has_any(3, &["sitting", "gradual"]),
                    vec![Headline("This may be Postural Back Pain or Chronic Strain.")],
                ),
                Rule::otherwise(
                    "back.muscle",
                    vec![Headline("This appears to be Back Muscle Pain.")],
                ),
            ]),
            Stage::Always(vec![
                Section(OTC_MEDICINES),
                Bullet("Ibuprofen 400-600mg (Advil, Motrin) - anti-inflammatory, every 6-8 hours"),
                Bullet("Naproxen 220-440mg (Aleve) - longer-lasting"),
                Bullet("Acetaminophen 500-1000mg (Tylenol) - for pain"),
                Bullet("Topical: Diclofenac gel (Voltaren), Capsaicin cream, or Menthol rubs"),
                Bullet("Muscle relaxants (if prescribed by doctor)"),
                Section("🏠 Home Remedies & Care:"),
                Bullet("First 48 hours: Apply ice pack for 15-20 min, 3-4 times daily"),
                Bullet("After 48 hours: Switch to heat therapy (heating pad, warm bath)"),
                Bullet("Gentle stretching exercises (when acute pain subsides)"),
                Bullet("Maintain good posture - sit and stand straight"),
                Bullet("Sleep on a firm mattress with proper support"),
                Bullet("Avoid heavy lifting - use proper lifting technique (bend knees, not back)"),
                Bullet("Take breaks from prolonged sitting"),
                Bullet("Consider ergonomic chair or lumbar support cushion"),
            ]),
            Stage::Every(vec![Rule::new(
                "back.severe",
                |a| a.number(2, 5) >= 8,
                vec![Warning(
                    "Severe back pain. If pain is severe, persistent, or accompanied by other symptoms, seek medical attention.",
                )],
            )]),
        ],
    }
}

pub(super) fn joint_pain() -> SymptomProtocol {
    SymptomProtocol {
        key: SymptomKey::JointPain,
        title: "Joint Pain Analysis",
        keywords: &["joint pain", "joint ache", "arthritis", "achy joints"],
        questions: &[
            "Which joints are affected? (Knees, hips, shoulders, wrists, fingers, or multiple?)",
            "How long have you had this joint pain?",
            "On a scale of 1-10, how severe is the pain?",
            "Is the joint swollen, red, warm, or stiff?",
            "Does the pain worsen with movement or improve with rest?",
            "Do you have morning stiffness that lasts more than 30 minutes?",
            "Have you had any injury to the joint recently?",
            "Do you have fever, rash, or other symptoms?",
            "Does the pain affect your ability to move the joint normally?",
            "Have you tried any treatments? (Ice, heat, rest, medication?)",
        ],
        reads: &[2, 3, 5, 6, 7],
        stages: vec![
            Stage::FirstMatch(vec![
                Rule::new(
                    "joint.infection",
                    |a| a.has(3, "yes") && a.has(7, "yes"),
                    vec![Warning(
                        "Possible Joint Infection. Swollen, warm joint with fever may indicate infection. Seek immediate medical attention.",
                    )],
                ),
                Rule::new(
                    "joint.inflammatory",
                    |a| a.has(5, "yes") && a.has(5, "morning"),
                    vec![Headline(
                        "This may indicate Rheumatoid Arthritis or Inflammatory Condition. Consult a healthcare provider for proper diagnosis.",
                    )],
                ),
                Rule::new(
                    "joint.injury",
                    |a| a.has(6, "yes"),
                    vec![Headline("This appears to be Joint Injury or Sprain.")],
                ),
                Rule::otherwise(
                    "joint.general",
                    vec![Headline("This appears to be Joint Pain or Arthritis.")],
                ),
            ]),
            Stage::Always(vec![
                Section(OTC_MEDICINES),
                Bullet("Ibuprofen 400-600mg (Advil, Motrin) - anti-inflammatory, every 6-8 hours"),
                Bullet("Naproxen 220-440mg (Aleve) - longer-lasting relief"),
                Bullet("Acetaminophen 500-1000mg (Tylenol) - for pain"),
                Bullet("Topical: Diclofenac gel (Voltaren), Capsaicin cream"),
                Bullet("Glucosamine and Chondroitin supplements (may help with joint health)"),
                Section(HOME_REMEDIES),
                Bullet("Apply ice for acute pain/swelling (15-20 min, 3-4 times daily)"),
                Bullet("Apply heat for chronic stiffness (warm compress, heating pad)"),
                Bullet("Rest the affected joint"),
                Bullet("Gentle range-of-motion exercises (when pain allows)"),
                Bullet("Maintain healthy weight to reduce joint stress"),
                Bullet("Use assistive devices if needed (cane, brace)"),
                Bullet("Epsom salt baths"),
            ]),
            Stage::Every(vec![Rule::new(
                "joint.severe",
                |a| a.number(2, 5) >= 8,
                vec![Warning(
                    "Severe joint pain. If pain is severe, persistent, or limiting function, consult a healthcare provider.",
                )],
            )]),
        ],
    }
}
