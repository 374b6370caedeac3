use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Highest numbered ingredient/measure slot looked up in a raw record.
///
/// The API schema stops at 20. Keys above that are untrusted input and
/// are never examined.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// One decoded meal record, normalized from the loosely-typed API shape.
///
/// Serializes back to the wire key names, so the scalar fields of a
/// decoded record round-trip exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: String,
    #[serde(rename = "strArea")]
    pub area: String,
    #[serde(rename = "strInstructions")]
    pub instructions: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
    #[serde(rename = "strYoutube")]
    pub youtube_url: String,
    /// Non-empty ingredient slots in ascending slot order.
    #[serde(rename = "strIngredients")]
    pub ingredients: Vec<String>,
    /// Non-empty measure slots in ascending slot order. Compacted
    /// independently of `ingredients`, so the two are not guaranteed to
    /// be index-aligned.
    #[serde(rename = "strMeasures")]
    pub measures: Vec<String>,
}

/// Response envelope around the record list.
///
/// The server reports "no matches" as a `null` list rather than an
/// empty one.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsEnvelope {
    pub meals: Option<Vec<Map<String, Value>>>,
}

impl Meal {
    /// Decodes one raw key/value record into a `Meal`.
    ///
    /// The five descriptive scalars (`idMeal`, `strMeal`, `strCategory`,
    /// `strArea`, `strInstructions`) are hard-required: a missing or
    /// non-string value fails the record. `strMealThumb` and `strYoutube`
    /// tolerate absent or `null` values and fall back to an empty string.
    /// Ingredient and measure slots are looked up independently for
    /// indices 1 through [`MAX_INGREDIENT_SLOTS`]; a slot is included
    /// only if it holds a string that is non-empty after trimming.
    pub fn from_record(record: &Map<String, Value>) -> Result<Self, DecodeError> {
        let id = required_string(record, "idMeal")?;
        let name = required_string(record, "strMeal")?;
        let category = required_string(record, "strCategory")?;
        let area = required_string(record, "strArea")?;
        let instructions = required_string(record, "strInstructions")?;
        let thumbnail_url = lenient_string(record, "strMealThumb");
        let youtube_url = lenient_string(record, "strYoutube");

        let mut ingredients = Vec::new();
        let mut measures = Vec::new();
        for index in 1..=MAX_INGREDIENT_SLOTS {
            if let Some(ingredient) = slot_value(record, "strIngredient", index) {
                ingredients.push(ingredient);
            }
            if let Some(measure) = slot_value(record, "strMeasure", index) {
                measures.push(measure);
            }
        }

        Ok(Meal {
            id,
            name,
            category,
            area,
            instructions,
            thumbnail_url,
            youtube_url,
            ingredients,
            measures,
        })
    }
}

/// Decodes a full response body into a list of meals.
///
/// A `null` record list is normalized to an empty vector. One bad record
/// fails the whole batch; partial results are never returned silently.
pub fn decode_meals(body: &str) -> Result<Vec<Meal>, DecodeError> {
    let envelope: MealsEnvelope = serde_json::from_str(body)?;
    envelope
        .meals
        .unwrap_or_default()
        .iter()
        .map(Meal::from_record)
        .collect()
}

fn required_string(
    record: &Map<String, Value>,
    key: &'static str,
) -> Result<String, DecodeError> {
    match record.get(key) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(DecodeError::InvalidField(key)),
        None => Err(DecodeError::MissingField(key)),
    }
}

/// Optional scalar lookup: absent, `null` or unexpectedly-typed values
/// become an empty string instead of aborting the record.
fn lenient_string(record: &Map<String, Value>, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(text)) => text.clone(),
        _ => String::new(),
    }
}

/// Looks up one numbered slot (`strIngredient3`, `strMeasure7`, ...).
///
/// Returns the trimmed value only when the slot holds a non-empty
/// string. A malformed slot (wrong type) is treated as absent.
fn slot_value(record: &Map<String, Value>, prefix: &str, index: usize) -> Option<String> {
    let text = record.get(&format!("{prefix}{index}"))?.as_str()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
