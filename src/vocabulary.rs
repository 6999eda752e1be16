use chrono::Weekday;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

const VOCABULARY: [(&str, Weekday); 7] = [
    ("lunes", Weekday::Mon),
    ("martes", Weekday::Tue),
    ("miercoles", Weekday::Wed),
    ("jueves", Weekday::Thu),
    ("viernes", Weekday::Fri),
    ("sabado", Weekday::Sat),
    ("domingo", Weekday::Sun),
];

/// A validated day of the week, keyed by its Spanish name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayKey {
    name: &'static str,
    weekday: Weekday,
}

#[derive(Debug, Error)]
#[error("Día no válido. Por favor ingrese un día en español.")]
pub struct InvalidDay {
    pub token: String,
}

/// Lower-cases `token` and looks it up in the vocabulary.
///
/// Only case is normalized; surrounding whitespace makes the token invalid.
pub fn normalize(token: &str) -> Result<DayKey, InvalidDay> {
    let lowered = token.to_lowercase();
    DayKey::all()
        .find(|key| key.name == lowered)
        .ok_or_else(|| InvalidDay {
            token: token.to_string(),
        })
}

impl DayKey {
    /// All seven keys, Monday first.
    pub fn all() -> impl Iterator<Item = DayKey> {
        VOCABULARY
            .into_iter()
            .map(|(name, weekday)| DayKey { name, weekday })
    }

    pub fn as_str(&self) -> &'static str {
        self.name
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Day name as stored in the dataset, e.g. `Monday`.
    pub fn table_name(&self) -> &'static str {
        table_name(self.weekday)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

pub fn table_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Matches a dataset day value case-insensitively against the table names.
pub fn parse_table_day(value: &str) -> Option<Weekday> {
    let lowered = value.to_lowercase();
    DayKey::all()
        .map(|key| key.weekday)
        .find(|&weekday| table_name(weekday).to_lowercase() == lowered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vocabulary_order_is_monday_first() {
        let names: Vec<_> = DayKey::all().map(|key| key.as_str()).collect();
        assert_eq!(
            names,
            ["lunes", "martes", "miercoles", "jueves", "viernes", "sabado", "domingo"]
        );
    }

    #[test]
    fn normalize_accepts_mixed_case() {
        let key = normalize("Martes").unwrap();
        assert_eq!(key.as_str(), "martes");
        assert_eq!(key.table_name(), "Tuesday");
        assert_eq!(normalize("LUNES").unwrap().as_str(), "lunes");
    }

    #[test]
    fn normalize_rejects_unknown_and_empty() {
        let err = normalize("funday").unwrap_err();
        assert_eq!(err.token, "funday");
        assert!(normalize("").is_err());
        assert!(normalize("monday").is_err());
    }

    #[test]
    fn normalize_does_not_trim() {
        assert!(normalize(" lunes").is_err());
        assert!(normalize("lunes\n").is_err());
    }

    #[test]
    fn parse_table_day_ignores_case_only() {
        assert_eq!(parse_table_day("Monday"), Some(Weekday::Mon));
        assert_eq!(parse_table_day("SUNDAY"), Some(Weekday::Sun));
        assert_eq!(parse_table_day(" Monday"), None);
        assert_eq!(parse_table_day(""), None);
        assert_eq!(parse_table_day("lunes"), None);
    }

    proptest! {
        #[test]
        fn any_casing_of_a_known_day_normalizes(
            index in 0usize..7,
            mask in proptest::collection::vec(any::<bool>(), 9),
        ) {
            let (name, _) = VOCABULARY[index];
            let token: String = name
                .chars()
                .zip(mask.iter().cycle())
                .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert_eq!(normalize(&token).unwrap().as_str(), name);
        }

        #[test]
        fn unknown_tokens_are_rejected(token in "\\PC*") {
            let known = DayKey::all().any(|key| key.as_str() == token.to_lowercase());
            prop_assert_eq!(normalize(&token).is_ok(), known);
        }
    }
}
