// Built-in sample used to open every session

use super::{Component, Recipe};

impl Recipe {
    /// The pot roast sample recipe
    pub fn sample() -> Self {
        Recipe::new(
            "pot-roast",
            "Pot roast",
            vec![
                Component::new("marinade", "Marinade")
                    .with_ingredients(["2 tbsp soy sauce", "1 tbsp brown sugar"])
                    .with_steps(["Mix the marinade ingredients."]),
                Component::new("main", "Main")
                    .with_ingredients(["Beef chuck", "Onion", "Carrots"])
                    .with_steps([
                        "Sear the beef.",
                        "Add vegetables and simmer until tender.",
                    ]),
            ],
            vec!["Tastes better the next day.".to_string()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_usable_start_state() {
        let sample = Recipe::sample();
        assert_eq!(sample.id, "pot-roast");
        assert!(!sample.components.is_empty());

        let first = &sample.components[0];
        assert!(!first.ingredients.is_empty());
        assert!(!first.steps.is_empty());
        assert_eq!(sample.note_lines(), ["Tastes better the next day."]);
    }
}
