use crate::core::catalog::trigger_words;
use crate::domain::model::ComponentKind;

/// Presence flag for every [`ComponentKind`], indexed by priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectedKinds {
    present: [bool; ComponentKind::ALL.len()],
}

impl DetectedKinds {
    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.present[kind as usize]
    }

    pub fn is_empty(&self) -> bool {
        !self.present.iter().any(|p| *p)
    }

    pub fn count(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }

    /// Present kinds in priority order.
    pub fn iter(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        ComponentKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

/// Case-insensitive substring scan for every kind's trigger words.
pub fn detect(text: &str) -> DetectedKinds {
    let lowered = text.to_lowercase();
    let mut detected = DetectedKinds::default();

    for kind in ComponentKind::ALL {
        detected.present[kind as usize] = trigger_words(kind)
            .iter()
            .any(|word| lowered.contains(word));
    }

    detected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_detects_nothing() {
        assert!(detect("").is_empty());
        assert!(detect("   \n\t").is_empty());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let detected = detect("A NavBar over a Hero-section with IMAGES");
        assert!(detected.contains(ComponentKind::Navbar));
        assert!(detected.contains(ComponentKind::Hero));
        assert!(detected.contains(ComponentKind::Gallery));
        assert_eq!(detected.count(), 3);
    }

    #[test]
    fn test_secondary_triggers() {
        assert!(detect("site navigation").contains(ComponentKind::Navbar));
        assert!(detect("customer reviews").contains(ComponentKind::Testimonial));
        assert!(detect("an image grid").contains(ComponentKind::Gallery));
    }

    #[test]
    fn test_substring_matches_inside_words() {
        // "information" contains "form"
        assert!(detect("some information").contains(ComponentKind::Form));
    }

    #[test]
    fn test_iter_follows_priority_order() {
        let kinds: Vec<_> = detect("testimonial, then a card, then a button").iter().collect();
        assert_eq!(
            kinds,
            vec![ComponentKind::Button, ComponentKind::Card, ComponentKind::Testimonial]
        );
    }
}
