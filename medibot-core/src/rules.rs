//! Ordered rule stages evaluated over a finished answer list.
//!
//! A protocol's analysis is a list of stages run top to bottom:
//! - `Always`: unconditional advice
//! - `FirstMatch`: the first rule whose condition holds contributes
//! - `Every`: each matching rule contributes (warnings, additive remedies)
//!
//! A terminal rule stops the analysis right after its own items.

use crate::answers::Answers;
use crate::medicine::MedicineRecommendation;
use crate::recommendation::{Block, Recommendation};
use crate::symptom::SymptomKey;

pub type Condition = fn(Answers<'_>) -> bool;

/// One piece of advice text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    /// Classification line ("Your symptoms suggest a possible Migraine.").
    Headline(&'static str),
    /// Section heading ("💊 Recommended Medicines (OTC):").
    Section(&'static str),
    /// Plain bullet advice.
    Bullet(&'static str),
    /// Purchasable medicine line with a price marker.
    Medicine(&'static str),
    /// Urgent-care warning; marks the recommendation urgent.
    Warning(&'static str),
    /// Non-urgent caution ("Note: ...").
    Caution(&'static str),
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub id: &'static str,
    when: Condition,
    items: Vec<Item>,
    terminal: bool,
}

impl Rule {
    pub fn new(id: &'static str, when: Condition, items: Vec<Item>) -> Self {
        Self {
            id,
            when,
            items,
            terminal: false,
        }
    }

    /// Fallback rule that always holds; closes every `FirstMatch` stage.
    pub fn otherwise(id: &'static str, items: Vec<Item>) -> Self {
        Self::new(id, always, items)
    }

    /// Stop evaluating later stages once this rule fires.
    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    pub fn matches(&self, answers: Answers<'_>) -> bool {
        (self.when)(answers)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

#[derive(Debug, Clone)]
pub enum Stage {
    Always(Vec<Item>),
    FirstMatch(Vec<Rule>),
    Every(Vec<Rule>),
}

impl Stage {
    pub fn rules(&self) -> &[Rule] {
        match self {
            Stage::Always(_) => &[],
            Stage::FirstMatch(rules) | Stage::Every(rules) => rules,
        }
    }
}

pub fn always(_: Answers<'_>) -> bool {
    true
}

/// Run `stages` over `answers`, collecting blocks and medicine lines.
pub fn evaluate(
    symptom: SymptomKey,
    title: &str,
    stages: &[Stage],
    answers: &[String],
) -> Recommendation {
    let view = Answers::new(answers);
    let mut out = Collector::default();

    'stages: for stage in stages {
        match stage {
            Stage::Always(items) => out.emit(items),
            Stage::FirstMatch(rules) => {
                if let Some(rule) = rules.iter().find(|r| r.matches(view)) {
                    out.fire(rule);
                    if rule.terminal {
                        break 'stages;
                    }
                }
            }
            Stage::Every(rules) => {
                for rule in rules.iter().filter(|r| r.matches(view)) {
                    out.fire(rule);
                    if rule.terminal {
                        break 'stages;
                    }
                }
            }
        }
    }

    tracing::debug!(%symptom, rules = ?out.matched, urgent = out.urgent, "analysis complete");

    Recommendation {
        symptom,
        title: title.to_string(),
        blocks: out.blocks,
        medicines: out.medicines,
        urgent: out.urgent,
        matched_rules: out.matched,
    }
}

#[derive(Default)]
struct Collector {
    blocks: Vec<Block>,
    medicines: Vec<MedicineRecommendation>,
    urgent: bool,
    matched: Vec<String>,
}

impl Collector {
    fn fire(&mut self, rule: &Rule) {
        self.matched.push(rule.id.to_string());
        self.emit(&rule.items);
    }

    fn emit(&mut self, items: &[Item]) {
        for item in items {
            let block = match *item {
                Item::Headline(t) => Block::Headline(t.to_string()),
                Item::Section(t) => Block::Section(t.to_string()),
                Item::Bullet(t) => Block::Bullet(t.to_string()),
                Item::Medicine(t) => {
                    self.medicines.push(MedicineRecommendation::from_line(t));
                    Block::Medicine(self.medicines.len() - 1)
                }
                Item::Warning(t) => {
                    self.urgent = true;
                    Block::Warning(t.to_string())
                }
                Item::Caution(t) => Block::Caution(t.to_string()),
            };
            self.blocks.push(block);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages() -> Vec<Stage> {
        vec![
            Stage::FirstMatch(vec![
                Rule::new("t.stop", |a| a.has(0, "stop"), vec![Item::Warning("Stop here.")]).terminal(),
                Rule::new("t.red", |a| a.has(0, "red"), vec![Item::Headline("Red.")]),
                Rule::new("t.blue", |a| a.has(0, "blue"), vec![Item::Headline("Blue.")]),
                Rule::otherwise("t.default", vec![Item::Headline("Default.")]),
            ]),
            Stage::Always(vec![Item::Medicine("Paracetamol 500mg - ₹50")]),
            Stage::Every(vec![
                Rule::new("t.one", |a| a.has(1, "one"), vec![Item::Caution("One.")]),
                Rule::new("t.two", |a| a.has(1, "two"), vec![Item::Caution("Two.")]),
            ]),
        ]
    }

    fn run(a: &[&str]) -> Recommendation {
        let owned: Vec<String> = a.iter().map(|s| s.to_string()).collect();
        evaluate(SymptomKey::Headache, "Test Analysis", &stages(), &owned)
    }

    #[test]
    fn test_first_match_wins_in_declaration_order() {
        let r = run(&["red and blue", ""]);
        assert_eq!(r.matched_rules, vec!["t.red"]);
        assert_eq!(r.blocks[0], Block::Headline("Red.".to_string()));
    }

    #[test]
    fn test_every_stage_collects_all_matches() {
        let r = run(&["", "one two"]);
        assert_eq!(r.matched_rules, vec!["t.default", "t.one", "t.two"]);
        assert_eq!(r.medicines.len(), 1);
        assert!(!r.urgent);
    }

    #[test]
    fn test_terminal_rule_skips_later_stages() {
        let r = run(&["please stop", "one"]);
        assert_eq!(r.matched_rules, vec!["t.stop"]);
        assert!(r.medicines.is_empty());
        assert!(r.urgent);
    }

    #[test]
    fn test_empty_answers_fall_through_to_default() {
        let r = run(&[]);
        assert_eq!(r.matched_rules, vec!["t.default"]);
    }
}
