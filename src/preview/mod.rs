// Preview projection
//
// The read-only formatted view of a recipe. `Preview::of` is a pure function
// of the document: nothing is cached, so a preview always matches the state
// it was taken from. The TUI styles each line by kind; `to_plain_text` is the
// unstyled form used for the clipboard and the `preview` command.

use crate::recipe::Recipe;

pub const UNTITLED: &str = "Untitled";
pub const MISSING_ID: &str = "—";
pub const UNTITLED_COMPONENT: &str = "Untitled component";
pub const EMPTY_COMPONENT: &str = "No ingredients or steps yet.";

/// Width of the rule used for dividers in plain text
const DIVIDER_WIDTH: usize = 32;

/// One line of the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewLine {
    /// Recipe title (or placeholder)
    Title(String),
    /// "ID: ..." line
    Id(String),
    /// Horizontal separator
    Divider,
    /// Component title (or placeholder)
    ComponentTitle(String),
    /// "Ingredients", "Steps", "Notes"
    Heading(&'static str),
    /// Unordered list entry
    Bullet(String),
    /// Numbered step, `number` is 1-based
    Step { number: usize, text: String },
    /// Muted hint for empty content
    Placeholder(&'static str),
}

impl PreviewLine {
    /// Unstyled text of the line
    pub fn text(&self) -> String {
        match self {
            PreviewLine::Title(t) | PreviewLine::ComponentTitle(t) => t.clone(),
            PreviewLine::Id(id) => format!("ID: {}", id),
            PreviewLine::Divider => "─".repeat(DIVIDER_WIDTH),
            PreviewLine::Heading(h) => h.to_string(),
            PreviewLine::Bullet(line) => format!("• {}", line),
            PreviewLine::Step { number, text } => format!("{}. {}", number, text),
            PreviewLine::Placeholder(p) => p.to_string(),
        }
    }
}

/// Rendered preview of a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    lines: Vec<PreviewLine>,
}

impl Preview {
    /// Project a recipe into preview lines
    pub fn of(recipe: &Recipe) -> Self {
        let mut lines = vec![
            PreviewLine::Title(or_placeholder(&recipe.title, UNTITLED)),
            PreviewLine::Id(or_placeholder(&recipe.id, MISSING_ID)),
            PreviewLine::Divider,
        ];

        for component in &recipe.components {
            lines.push(PreviewLine::ComponentTitle(or_placeholder(
                &component.title,
                UNTITLED_COMPONENT,
            )));

            if !component.ingredients.is_empty() {
                lines.push(PreviewLine::Heading("Ingredients"));
                lines.extend(
                    component
                        .ingredients
                        .iter()
                        .map(|line| PreviewLine::Bullet(line.clone())),
                );
            }

            if !component.steps.is_empty() {
                lines.push(PreviewLine::Heading("Steps"));
                lines.extend(component.steps.iter().enumerate().map(|(i, line)| {
                    PreviewLine::Step {
                        number: i + 1,
                        text: line.clone(),
                    }
                }));
            }

            if component.is_empty() {
                lines.push(PreviewLine::Placeholder(EMPTY_COMPONENT));
            }

            lines.push(PreviewLine::Divider);
        }

        if let Some(notes) = &recipe.notes {
            lines.push(PreviewLine::Heading("Notes"));
            lines.extend(notes.iter().map(|note| PreviewLine::Bullet(note.clone())));
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[PreviewLine] {
        &self.lines
    }

    /// Lines joined with newlines, no styling
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(PreviewLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Component;

    fn pot_roast() -> Recipe {
        Recipe::new(
            "pot-roast",
            "Pot roast",
            vec![Component::new("marinade", "Marinade")
                .with_ingredients(["2 tbsp soy sauce"])
                .with_steps(["Mix."])],
            vec!["Tastes better the next day.".to_string()],
        )
    }

    fn texts(preview: &Preview) -> Vec<String> {
        preview.lines().iter().map(PreviewLine::text).collect()
    }

    #[test]
    fn test_pot_roast_scenario() {
        let preview = Preview::of(&pot_roast());
        let lines = texts(&preview);

        assert_eq!(lines[0], "Pot roast");
        assert_eq!(lines[1], "ID: pot-roast");
        assert_eq!(
            &lines[3..8],
            ["Marinade", "Ingredients", "• 2 tbsp soy sauce", "Steps", "1. Mix."]
        );
        assert_eq!(
            &lines[lines.len() - 2..],
            ["Notes", "• Tastes better the next day."]
        );
        assert_eq!(lines.iter().filter(|l| l.starts_with("• ")).count(), 2);
    }

    #[test]
    fn test_projection_is_pure() {
        let recipe = pot_roast();
        assert_eq!(Preview::of(&recipe), Preview::of(&recipe));
        assert_eq!(
            Preview::of(&recipe).to_plain_text(),
            Preview::of(&recipe).to_plain_text()
        );
    }

    #[test]
    fn test_placeholders_for_empty_strings() {
        let recipe = Recipe::new("", "", vec![Component::new("c", "")], Vec::new());
        let preview = Preview::of(&recipe);

        assert_eq!(
            preview.lines(),
            [
                PreviewLine::Title("Untitled".to_string()),
                PreviewLine::Id("—".to_string()),
                PreviewLine::Divider,
                PreviewLine::ComponentTitle("Untitled component".to_string()),
                PreviewLine::Placeholder(EMPTY_COMPONENT),
                PreviewLine::Divider,
            ]
        );
        assert_eq!(preview.lines()[1].text(), "ID: —");
    }

    #[test]
    fn test_no_notes_section_when_absent() {
        let recipe = Recipe::new("x", "X", vec![Component::new("c", "C")], Vec::new());
        let preview = Preview::of(&recipe);
        assert!(!preview
            .lines()
            .iter()
            .any(|line| *line == PreviewLine::Heading("Notes")));
    }

    #[test]
    fn test_order_is_stored_order() {
        let recipe = Recipe::new(
            "x",
            "X",
            vec![Component::new("c", "C")
                .with_ingredients(["zucchini", "apple", "miso"])
                .with_steps(["third", "first", "second"])],
            Vec::new(),
        );
        let lines = texts(&Preview::of(&recipe));
        let bullets: Vec<_> = lines.iter().filter(|l| l.starts_with("• ")).collect();
        assert_eq!(bullets, ["• zucchini", "• apple", "• miso"]);
        assert!(lines.contains(&"1. third".to_string()));
        assert!(lines.contains(&"3. second".to_string()));
    }

    #[test]
    fn test_steps_only_component_has_no_ingredients_heading() {
        let recipe = Recipe::new(
            "x",
            "X",
            vec![Component::new("c", "C").with_steps(["Rest."])],
            Vec::new(),
        );
        let lines = texts(&Preview::of(&recipe));
        assert!(!lines.contains(&"Ingredients".to_string()));
        assert!(!lines.contains(&EMPTY_COMPONENT.to_string()));
        assert!(lines.contains(&"1. Rest.".to_string()));
    }

    #[test]
    fn test_plain_text_joins_lines() {
        let text = Preview::of(&pot_roast()).to_plain_text();
        assert!(text.starts_with("Pot roast\nID: pot-roast\n─"));
        assert!(text.ends_with("Notes\n• Tastes better the next day."));
    }
}
