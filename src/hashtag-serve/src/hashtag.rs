use serde::{Deserialize, Serialize};

/// A classification tag returned by the label detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,

    /// Confidence in percent
    pub confidence: f32,
}

impl Label {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Label {
            name: name.into(),
            confidence,
        }
    }

    pub fn hashtag(&self) -> String {
        to_hashtag(&self.name)
    }
}

/// `"Golden Retriever"` becomes `"#golden_retriever"`.
pub fn to_hashtag(name: &str) -> String {
    format!("#{}", name.to_lowercase().replace(' ', "_"))
}

pub fn hashtags(labels: &[Label]) -> Vec<String> {
    labels.iter().map(Label::hashtag).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(to_hashtag("Cat"), "#cat");
        assert_eq!(to_hashtag("Golden Retriever"), "#golden_retriever");
        assert_eq!(to_hashtag("Sports Car  Red"), "#sports_car__red");
    }

    #[test]
    fn deterministic() {
        let label = Label::new("Pet Food", 81.5);
        assert_eq!(label.hashtag(), label.hashtag());
        assert_eq!(label.hashtag(), "#pet_food");
    }

    #[test]
    fn keeps_label_order() {
        let labels = vec![
            Label::new("Cat", 99.0),
            Label::new("Animal", 98.2),
            Label::new("Siamese Cat", 80.1),
        ];

        assert_eq!(hashtags(&labels), vec!["#cat", "#animal", "#siamese_cat"]);
    }

    #[test]
    fn no_labels_no_hashtags() {
        assert!(hashtags(&[]).is_empty());
    }
}
