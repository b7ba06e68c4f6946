//! Cuisine suggestions as stored by the backend and as submitted by the form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Moderation lifecycle of a suggestion.
///
/// Kept separate from [`ContactStatus`](super::ContactStatus); the two
/// lifecycles share nothing but the idea of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SuggestionStatus {
    /// All statuses in moderation order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Wire and display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted cuisine suggestion.
///
/// `key_ingredients` and `popular_dishes` are free text on the client. Some
/// backends store them as string arrays; those are joined with `", "` on the
/// way in so the client shape stays a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineSuggestion {
    #[serde(rename = "_id")]
    pub id: String,
    pub cuisine_name: String,
    pub country: String,
    pub category: String,
    pub description: String,
    #[serde(deserialize_with = "text_or_list")]
    pub key_ingredients: String,
    #[serde(deserialize_with = "text_or_list")]
    pub popular_dishes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_significance: Option<String>,
    pub suggested_by: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub status: SuggestionStatus,
}

/// Body of `POST /suggestions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionPayload {
    pub cuisine_name: String,
    pub country: String,
    pub category: String,
    pub description: String,
    pub key_ingredients: String,
    pub popular_dishes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_significance: Option<String>,
    pub suggested_by: String,
    pub email: String,
}

impl SuggestionPayload {
    /// Builds the payload from validated suggestion form values.
    ///
    /// Keys are the form's camelCase field names. A blank cultural
    /// significance is omitted from the request body.
    #[must_use]
    pub fn from_values(values: &BTreeMap<String, String>) -> Self {
        let field = |name: &str| values.get(name).cloned().unwrap_or_default();
        Self {
            cuisine_name: field("cuisineName"),
            country: field("country"),
            category: field("category"),
            description: field("description"),
            key_ingredients: field("keyIngredients"),
            popular_dishes: field("popularDishes"),
            cultural_significance: values
                .get("culturalSignificance")
                .filter(|v| !v.trim().is_empty())
                .cloned(),
            suggested_by: field("suggestedBy"),
            email: field("email"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

fn text_or_list<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrList::deserialize(deserializer)? {
        TextOrList::Text(text) => text,
        TextOrList::List(items) => items.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion_json(ingredients: &str) -> String {
        format!(
            r#"{{
                "_id": "s1",
                "cuisineName": "Ethiopian",
                "country": "Ethiopia",
                "category": "African",
                "description": "Shared platters on injera",
                "keyIngredients": {ingredients},
                "popularDishes": "Doro Wat",
                "suggestedBy": "Abebe",
                "email": "abebe@example.com",
                "createdAt": "2024-03-01T10:00:00Z",
                "status": "pending"
            }}"#
        )
    }

    #[test]
    fn ingredient_text_is_kept_verbatim() {
        let parsed: CuisineSuggestion =
            serde_json::from_str(&suggestion_json(r#""teff, berbere""#)).unwrap();
        assert_eq!(parsed.key_ingredients, "teff, berbere");
        assert_eq!(parsed.cultural_significance, None);
    }

    #[test]
    fn ingredient_list_is_joined() {
        let parsed: CuisineSuggestion =
            serde_json::from_str(&suggestion_json(r#"["teff", "berbere", "niter kibbeh"]"#))
                .unwrap();
        assert_eq!(parsed.key_ingredients, "teff, berbere, niter kibbeh");
        assert_eq!(parsed.status, SuggestionStatus::Pending);
    }

    #[test]
    fn payload_omits_blank_optional_field() {
        let mut values = BTreeMap::new();
        values.insert("cuisineName".to_string(), "Ethiopian".to_string());
        values.insert("culturalSignificance".to_string(), "   ".to_string());

        let payload = SuggestionPayload::from_values(&values);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["cuisineName"], "Ethiopian");
        assert_eq!(json["keyIngredients"], "");
        assert!(json.get("culturalSignificance").is_none());
    }
}
