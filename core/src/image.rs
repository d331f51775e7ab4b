use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    #[default]
    Local,
    Web,
}

/// A curated picture, its `name` is the answer players have to guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaImage {
    pub id: String,
    pub url: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub source: ImageSource,
}

impl TriviaImage {
    pub fn new(
        id: impl Into<String>,
        url: impl Into<String>,
        name: impl Into<String>,
        source: ImageSource,
    ) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            name: name.into(),
            category: None,
            source,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Answer as compared for uniqueness: surrounding whitespace removed, lowercased.
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_name_trims_and_lowercases() {
        let image = TriviaImage::new("1", "a.png", "  Eiffel Tower\t", ImageSource::Web);

        assert_eq!(image.normalized_name(), "eiffel tower");
    }

    #[test]
    fn category_is_omitted_when_absent() {
        let image = TriviaImage::new("1", "a.png", "Cat", ImageSource::Local);
        let json = serde_json::to_value(&image).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": "1", "url": "a.png", "name": "Cat", "source": "local"})
        );

        let image = image.with_category("animals");
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["category"], "animals");
    }
}
