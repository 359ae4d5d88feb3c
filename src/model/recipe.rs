//! Recipe catalogue entries (read-only).

use serde::Deserialize;

/// One recipe card from the catalogue endpoint.
///
/// Only the fields the recipe screen shows are kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    /// Catalogue id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Preparation steps in order.
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-form labels (cuisine, course).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image URL; not rendered.
    #[serde(default)]
    pub image: Option<String>,
}

impl Recipe {
    /// Instructions joined into one paragraph, the way the card shows them.
    pub fn instructions_text(&self) -> String {
        self.instructions.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalogue_entry() {
        let json = r#"{
            "id": 1,
            "name": "Classic Margherita Pizza",
            "ingredients": ["Pizza dough", "Tomato sauce"],
            "instructions": ["Preheat the oven.", "Bake."],
            "tags": ["Pizza", "Italian"],
            "image": "https://cdn.dummyjson.com/recipe-images/1.webp",
            "rating": 4.6
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.name, "Classic Margherita Pizza");
        assert_eq!(recipe.tags, vec!["Pizza", "Italian"]);
        assert_eq!(recipe.instructions_text(), "Preheat the oven. Bake.");
    }

    #[test]
    fn missing_optional_fields_default() {
        let recipe: Recipe = serde_json::from_str(r#"{"id": 2, "name": "Toast"}"#).unwrap();
        assert!(recipe.instructions.is_empty());
        assert!(recipe.image.is_none());
        assert_eq!(recipe.instructions_text(), "");
    }
}
