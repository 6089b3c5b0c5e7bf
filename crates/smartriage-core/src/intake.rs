//! Request builder: raw intake form text → [`TriageRequest`].

use serde::Deserialize;
use tracing::warn;

use crate::model::TriageRequest;

/// Raw text of the seven intake fields, as typed by the user.
///
/// Optional fields default to empty when absent from a JSON intake file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IntakeForm {
    pub age: String,
    pub gender: String,
    pub complaint: String,
    pub esi: String,
    #[serde(default)]
    pub vitals: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub remarks: String,
}

impl IntakeForm {
    /// Assemble the outgoing request. Text fields are copied verbatim and
    /// the ESI is parsed without any bounds or NaN check.
    pub fn to_request(&self) -> TriageRequest {
        let request = TriageRequest {
            age: self.age.clone(),
            gender: self.gender.clone(),
            complaint: self.complaint.clone(),
            esi: parse_esi(&self.esi),
            vitals: self.vitals.clone(),
            background: self.background.clone(),
            remarks: self.remarks.clone(),
        };
        if !request.esi_is_valid() {
            warn!(esi = %self.esi, "ESI is not numeric, forwarding as null");
        }
        request
    }
}

/// Parse the longest numeric prefix of `text` as a float.
///
/// Mirrors browser `parseFloat`: leading whitespace is skipped, an optional
/// sign, digits with optional fraction and exponent, or `Infinity`. Trailing
/// characters are ignored. Returns `NaN` when no numeric prefix exists.
///
/// ```text
/// "2"      → 2.0
/// " 3.5 "  → 3.5
/// "2abc"   → 2.0
/// ".5e1x"  → 5.0
/// "abc"    → NaN
/// ```
pub fn parse_esi(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // "1." is a number, a lone "." is not.
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_esi("2"), 2.0);
        assert_eq!(parse_esi("5"), 5.0);
    }

    #[test]
    fn whitespace_and_sign() {
        assert_eq!(parse_esi("  3.5 "), 3.5);
        assert_eq!(parse_esi("-1"), -1.0);
        assert_eq!(parse_esi("+4"), 4.0);
    }

    #[test]
    fn trailing_garbage_ignored() {
        assert_eq!(parse_esi("2abc"), 2.0);
        assert_eq!(parse_esi("3."), 3.0);
        assert_eq!(parse_esi("1.5.2"), 1.5);
        assert_eq!(parse_esi("2e"), 2.0);
        assert_eq!(parse_esi("2e+"), 2.0);
    }

    #[test]
    fn fraction_and_exponent() {
        assert_eq!(parse_esi(".5"), 0.5);
        assert_eq!(parse_esi(".5e1x"), 5.0);
        assert_eq!(parse_esi("1E-1"), 0.1);
        assert_eq!(parse_esi("1.e5"), 100000.0);
        assert_eq!(parse_esi("2.E-1"), 0.2);
        assert_eq!(parse_esi("4.e"), 4.0);
    }

    #[test]
    fn infinity() {
        assert_eq!(parse_esi("Infinity"), f64::INFINITY);
        assert_eq!(parse_esi("-Infinityx"), f64::NEG_INFINITY);
    }

    #[test]
    fn non_numeric_is_nan() {
        assert!(parse_esi("").is_nan());
        assert!(parse_esi("abc").is_nan());
        assert!(parse_esi("-").is_nan());
        assert!(parse_esi(".").is_nan());
        assert!(parse_esi("ESI 2").is_nan());
    }

    #[test]
    fn form_to_request_copies_fields() {
        let form = IntakeForm {
            age: "45".into(),
            gender: "F".into(),
            complaint: "chest pain".into(),
            esi: "2".into(),
            vitals: "BP 140/90".into(),
            background: String::new(),
            remarks: String::new(),
        };
        let req = form.to_request();
        assert_eq!(req.age, "45");
        assert_eq!(req.gender, "F");
        assert_eq!(req.complaint, "chest pain");
        assert_eq!(req.esi, 2.0);
        assert_eq!(req.vitals, "BP 140/90");
        assert!(req.background.is_empty());

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["esi"], serde_json::json!(2.0));
    }

    #[test]
    fn malformed_esi_is_forwarded() {
        let form = IntakeForm {
            esi: "urgent".into(),
            ..Default::default()
        };
        let req = form.to_request();
        assert!(req.esi.is_nan());
        assert!(serde_json::to_value(&req).unwrap()["esi"].is_null());
    }

    #[test]
    fn intake_json_optional_fields_default() {
        let json = r#"{"age": "80", "gender": "M", "complaint": "fall", "esi": "3"}"#;
        let form: IntakeForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.esi, "3");
        assert!(form.vitals.is_empty());
        assert!(form.remarks.is_empty());
    }
}
