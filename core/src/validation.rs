use hashbrown::HashSet;
use thiserror::Error;

use crate::*;

/// A rule the curated image set violates. Advisory only: a game can still be
/// started while issues are present.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Need {expected} images, but have {actual}.")]
    ImageCount {
        expected: ImageCount,
        actual: ImageCount,
    },
    #[error("Duplicate names found. Each image must have a unique name.")]
    DuplicateNames,
}

pub fn validate(config: &GameConfig, images: &[TriviaImage]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let expected = config.total_images_needed();
    if images.len() != expected {
        issues.push(ValidationIssue::ImageCount {
            expected,
            actual: images.len(),
        });
    }

    if has_duplicate_names(images) {
        issues.push(ValidationIssue::DuplicateNames);
    }

    issues
}

pub fn is_valid_game(config: &GameConfig, images: &[TriviaImage]) -> bool {
    images.len() == config.total_images_needed() && !has_duplicate_names(images)
}

pub fn validation_errors(config: &GameConfig, images: &[TriviaImage]) -> Vec<String> {
    validate(config, images)
        .iter()
        .map(ToString::to_string)
        .collect()
}

pub fn has_duplicate_names(images: &[TriviaImage]) -> bool {
    let mut seen = HashSet::with_capacity(images.len());
    images
        .iter()
        .any(|image| !seen.insert(image.normalized_name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, name: &str) -> TriviaImage {
        TriviaImage::new(id, format!("{id}.png"), name, ImageSource::Local)
    }

    fn images(names: &[&str]) -> Vec<TriviaImage> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| image(&i.to_string(), name))
            .collect()
    }

    #[test]
    fn exact_count_with_unique_names_is_valid() {
        let config = GameConfig::new(2, 2, 30);
        let images = images(&["a", "b", "c", "d"]);

        assert!(is_valid_game(&config, &images));
        assert!(validate(&config, &images).is_empty());
        assert!(validation_errors(&config, &images).is_empty());
    }

    #[test]
    fn count_mismatch_reports_expected_and_actual() {
        let config = GameConfig::new(2, 2, 30);

        for len in [0, 1, 3, 5, 8] {
            let names: Vec<String> = (0..len).map(|i| format!("name {i}")).collect();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let images = images(&names);

            assert!(!is_valid_game(&config, &images));
            assert_eq!(
                validate(&config, &images),
                vec![ValidationIssue::ImageCount {
                    expected: 4,
                    actual: len
                }]
            );
            assert_eq!(
                validation_errors(&config, &images),
                vec![format!("Need 4 images, but have {len}.")]
            );
        }
    }

    #[test]
    fn names_differing_by_case_or_whitespace_are_duplicates() {
        let config = GameConfig::new(1, 3, 30);

        for pair in [("Cat", "cat"), ("dog", "  dog "), ("Big Ben", "\tBIG BEN")] {
            let images = images(&[pair.0, pair.1, "unrelated"]);

            assert!(!is_valid_game(&config, &images), "{pair:?}");
            assert_eq!(
                validation_errors(&config, &images),
                vec!["Duplicate names found. Each image must have a unique name.".to_string()]
            );
        }
    }

    #[test]
    fn inner_whitespace_still_distinguishes_names() {
        let images = images(&["ice cream", "icecream"]);

        assert!(!has_duplicate_names(&images));
    }

    #[test]
    fn both_issues_are_reported_in_order() {
        let config = GameConfig::new(3, 1, 30);
        let images = images(&["Moon", "moon "]);

        assert_eq!(
            validate(&config, &images),
            vec![
                ValidationIssue::ImageCount {
                    expected: 3,
                    actual: 2
                },
                ValidationIssue::DuplicateNames,
            ]
        );
    }
}
