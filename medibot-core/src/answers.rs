//! Best-effort readers over the raw answer list of one protocol walk.
//!
//! Nothing here fails: a missing position reads as the empty string and a
//! number that cannot be found falls back to the caller's default.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit regex"));
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("decimal regex"));

/// Opening words that turn the whole answer into a denial.
const NEGATIONS: &[&str] = &["no", "nope", "none", "not", "never", "nah"];

/// Readings between these bounds are taken as Celsius.
const CELSIUS_RANGE: (f64, f64) = (35.0, 50.0);

/// Borrowed view over answers, indexed by question position.
#[derive(Debug, Clone, Copy)]
pub struct Answers<'a> {
    raw: &'a [String],
}

impl<'a> Answers<'a> {
    pub fn new(raw: &'a [String]) -> Self {
        Self { raw }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Verbatim answer, or "" past the end.
    pub fn raw(&self, i: usize) -> &'a str {
        self.raw.get(i).map(String::as_str).unwrap_or("")
    }

    /// Lowercased answer, or "" past the end.
    pub fn text(&self, i: usize) -> String {
        self.raw(i).to_lowercase()
    }

    pub fn has(&self, i: usize, needle: &str) -> bool {
        self.text(i).contains(needle)
    }

    pub fn has_any(&self, i: usize, needles: &[&str]) -> bool {
        let t = self.text(i);
        needles.iter().any(|n| t.contains(n))
    }

    /// Like [`Answers::has_any`], but denials do not count: an answer that
    /// opens with a negation ("No, no blood") or says "no <needle>" /
    /// "not <needle>" / "without <needle>" ("clear, no blood").
    pub fn affirms_any(&self, i: usize, needles: &[&str]) -> bool {
        let t = self.text(i);
        let first = t.split(|c: char| !c.is_alphanumeric()).find(|w| !w.is_empty());
        if first.is_some_and(|w| NEGATIONS.contains(&w)) {
            return false;
        }
        needles.iter().any(|n| {
            t.contains(n)
                && !["no ", "not ", "without "]
                    .iter()
                    .any(|neg| t.contains(&format!("{neg}{n}")))
        })
    }

    /// First run of digits in the answer ("8/10" -> 8, "about 3 days" -> 3).
    pub fn number(&self, i: usize, default: i64) -> i64 {
        DIGIT_RUN
            .find(self.raw(i))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(default)
    }

    /// Body temperature in Fahrenheit; 0.0 when no reading is present.
    pub fn temperature_f(&self, i: usize) -> f64 {
        let reading = DECIMAL
            .find(self.raw(i))
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0);
        if reading > CELSIUS_RANGE.0 && reading < CELSIUS_RANGE.1 {
            reading * 9.0 / 5.0 + 32.0
        } else {
            reading
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_positions_read_empty() {
        let raw = owned(&["Yes"]);
        let a = Answers::new(&raw);
        assert_eq!(a.text(0), "yes");
        assert_eq!(a.text(7), "");
        assert!(!a.has(7, "yes"));
    }

    #[test]
    fn test_affirms_any_skips_denials() {
        let raw = owned(&["No, no blood", "yes, some blood", "clear, no blood", "none", "Yes", "not bloody", ""]);
        let a = Answers::new(&raw);
        assert!(a.has_any(0, &["yes", "blood"]));
        assert!(!a.affirms_any(0, &["yes", "blood"]));
        assert!(a.affirms_any(1, &["yes", "blood"]));
        assert!(!a.affirms_any(2, &["blood"]));
        assert!(!a.affirms_any(3, &["yes", "blood"]));
        assert!(a.affirms_any(4, &["yes", "blood"]));
        assert!(!a.affirms_any(5, &["blood"]));
        assert!(!a.affirms_any(6, &["blood"]));
    }

    #[test]
    fn test_number_takes_first_digit_run() {
        let raw = owned(&["8/10", "about 3 days", "severe", ""]);
        let a = Answers::new(&raw);
        assert_eq!(a.number(0, 5), 8);
        assert_eq!(a.number(1, 1), 3);
        assert_eq!(a.number(2, 5), 5);
        assert_eq!(a.number(3, 7), 7);
    }

    #[test]
    fn test_temperature_converts_celsius() {
        let raw = owned(&["104", "39 C", "around 102.5F", "hot", "37.0"]);
        let a = Answers::new(&raw);
        assert_eq!(a.temperature_f(0), 104.0);
        assert!((a.temperature_f(1) - 102.2).abs() < 1e-9);
        assert_eq!(a.temperature_f(2), 102.5);
        assert_eq!(a.temperature_f(3), 0.0);
        assert!((a.temperature_f(4) - 98.6).abs() < 1e-9);
    }
}
