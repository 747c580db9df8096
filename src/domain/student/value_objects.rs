use serde::{de, Deserialize, Deserializer, Serialize};

/// Lowest score a module can carry
pub const MIN_NOTE: f64 = 0.0;

/// Highest score a module can carry
pub const MAX_NOTE: f64 = 20.0;

/// A named subject and the score obtained in it
///
/// # Invariants
/// - `note` lies in `[MIN_NOTE, MAX_NOTE]` when built through the validator
///
/// # Example
/// ```
/// use students_api::domain::student::value_objects::Module;
///
/// let module = Module::new("Math", 12.5);
/// assert_eq!(module.module, "Math");
/// assert_eq!(module.note, 12.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub module: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub note: f64,
}

impl Module {
    /// Creates a new module entry
    pub fn new(module: impl Into<String>, note: f64) -> Self {
        Self {
            module: module.into(),
            note,
        }
    }
}

/// Reads a score written as text, e.g. `"12.5"`
///
/// Surrounding whitespace is ignored; non-finite values are refused.
pub fn parse_note_text(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Accepts a score stored either as a JSON number or as numeric text
///
/// Files written by earlier versions of the service kept scores exactly as
/// submitted, so `"note": "12"` must still load.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StoredNote {
        Number(f64),
        Text(String),
    }

    match StoredNote::deserialize(deserializer)? {
        StoredNote::Number(note) => Ok(note),
        StoredNote::Text(text) => parse_note_text(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid note: {:?}", text))),
    }
}
