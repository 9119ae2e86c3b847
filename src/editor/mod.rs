//! Editor controller
//!
//! Owns the one recipe document of the session and is the only code that
//! mutates it. The front end reads snapshots through [`Editor::recipe`] and
//! [`Editor::preview`], and changes the document through named operations.
//!
//! Every index-taking operation is total: an index outside the current
//! collection makes the call a no-op, and reads at such an index yield `""`.

mod command;
mod field;

pub use command::Command;
pub use field::Field;

use crate::preview::Preview;
use crate::recipe::{Component, Notes, Recipe};

/// Controller holding the session's recipe
#[derive(Debug, Clone)]
pub struct Editor {
    recipe: Recipe,
}

impl Editor {
    pub fn new(recipe: Recipe) -> Self {
        Self { recipe }
    }

    /// Read-only view of the current document
    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Preview of the document as it is right now
    pub fn preview(&self) -> Preview {
        Preview::of(&self.recipe)
    }

    /// Whether a component may be deleted (never the last one)
    pub fn can_delete_component(&self) -> bool {
        self.recipe.components.len() > 1
    }

    // ─────────────────────────────────────────────────────────────
    // Structural operations
    // ─────────────────────────────────────────────────────────────

    /// Apply a structural command. Returns true if the document changed.
    pub fn apply(&mut self, command: Command) -> bool {
        let changed = match command {
            Command::AddComponent => {
                let n = self.recipe.components.len() + 1;
                self.recipe.components.push(Component::new(
                    format!("component-{}", n),
                    format!("Component {}", n),
                ));
                true
            }
            Command::DeleteComponent(c) => {
                if self.can_delete_component() && c < self.recipe.components.len() {
                    self.recipe.components.remove(c);
                    true
                } else {
                    false
                }
            }
            Command::AddIngredient(c) => match self.recipe.components.get_mut(c) {
                Some(component) => {
                    component.ingredients.push(String::new());
                    true
                }
                None => false,
            },
            Command::DeleteIngredient(c, i) => match self.recipe.components.get_mut(c) {
                Some(component) if i < component.ingredients.len() => {
                    component.ingredients.remove(i);
                    true
                }
                _ => false,
            },
            Command::AddStep(c) => match self.recipe.components.get_mut(c) {
                Some(component) => {
                    component.steps.push(String::new());
                    true
                }
                None => false,
            },
            Command::DeleteStep(c, s) => match self.recipe.components.get_mut(c) {
                Some(component) if s < component.steps.len() => {
                    component.steps.remove(s);
                    true
                }
                _ => false,
            },
            Command::AddNote => {
                match self.recipe.notes.as_mut() {
                    Some(notes) => notes.push(String::new()),
                    None => self.recipe.notes = Some(Notes::one(String::new())),
                }
                true
            }
            Command::DeleteNote(n) => match self.recipe.notes.take() {
                Some(notes) if n < notes.len() => {
                    self.recipe.notes = notes.remove(n);
                    true
                }
                untouched => {
                    self.recipe.notes = untouched;
                    false
                }
            },
        };

        if changed {
            tracing::debug!("{}", command.describe());
        }
        changed
    }

    pub fn add_component(&mut self) {
        self.apply(Command::AddComponent);
    }

    pub fn delete_component(&mut self, index: usize) {
        self.apply(Command::DeleteComponent(index));
    }

    pub fn add_ingredient(&mut self, component: usize) {
        self.apply(Command::AddIngredient(component));
    }

    pub fn delete_ingredient(&mut self, component: usize, ingredient: usize) {
        self.apply(Command::DeleteIngredient(component, ingredient));
    }

    pub fn add_step(&mut self, component: usize) {
        self.apply(Command::AddStep(component));
    }

    pub fn delete_step(&mut self, component: usize, step: usize) {
        self.apply(Command::DeleteStep(component, step));
    }

    pub fn add_note(&mut self) {
        self.apply(Command::AddNote);
    }

    pub fn delete_note(&mut self, index: usize) {
        self.apply(Command::DeleteNote(index));
    }

    // ─────────────────────────────────────────────────────────────
    // Field access
    // ─────────────────────────────────────────────────────────────

    /// Current text of a field, `""` if the position does not exist
    pub fn text(&self, field: Field) -> &str {
        let recipe = &self.recipe;
        let value = match field {
            Field::RecipeId => Some(&recipe.id),
            Field::RecipeTitle => Some(&recipe.title),
            Field::ComponentId(c) => recipe.components.get(c).map(|x| &x.id),
            Field::ComponentTitle(c) => recipe.components.get(c).map(|x| &x.title),
            Field::Ingredient(c, i) => recipe
                .components
                .get(c)
                .and_then(|x| x.ingredients.get(i)),
            Field::Step(c, s) => recipe.components.get(c).and_then(|x| x.steps.get(s)),
            Field::Note(n) => recipe.notes.as_ref().and_then(|notes| notes.get(n)),
        };
        value.map(String::as_str).unwrap_or("")
    }

    /// Replace a field's text in place. Writes to missing positions are dropped.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        if let Some(slot) = self.slot_mut(field) {
            *slot = value.into();
        }
    }

    /// Whether the field currently addresses an existing position
    pub fn has_field(&self, field: Field) -> bool {
        match field {
            Field::RecipeId | Field::RecipeTitle => true,
            Field::ComponentId(c) | Field::ComponentTitle(c) => {
                c < self.recipe.components.len()
            }
            Field::Ingredient(c, i) => self
                .recipe
                .components
                .get(c)
                .is_some_and(|x| i < x.ingredients.len()),
            Field::Step(c, s) => self
                .recipe
                .components
                .get(c)
                .is_some_and(|x| s < x.steps.len()),
            Field::Note(n) => n < self.recipe.note_lines().len(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        let recipe = &mut self.recipe;
        match field {
            Field::RecipeId => Some(&mut recipe.id),
            Field::RecipeTitle => Some(&mut recipe.title),
            Field::ComponentId(c) => recipe.components.get_mut(c).map(|x| &mut x.id),
            Field::ComponentTitle(c) => recipe.components.get_mut(c).map(|x| &mut x.title),
            Field::Ingredient(c, i) => recipe
                .components
                .get_mut(c)
                .and_then(|x| x.ingredients.get_mut(i)),
            Field::Step(c, s) => recipe
                .components
                .get_mut(c)
                .and_then(|x| x.steps.get_mut(s)),
            Field::Note(n) => recipe.notes.as_mut().and_then(|notes| notes.get_mut(n)),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Recipe::sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_component() -> Recipe {
        Recipe::new(
            "solo",
            "Solo",
            vec![Component::new("only", "Only")
                .with_ingredients(["salt"])
                .with_steps(["Season."])],
            Vec::new(),
        )
    }

    /// Every command addressed past the end of its collection
    fn out_of_range_commands(recipe: &Recipe) -> Vec<Command> {
        let components = recipe.components.len();
        let mut commands = vec![
            Command::DeleteComponent(components),
            Command::DeleteComponent(components + 7),
            Command::DeleteComponent(usize::MAX),
            Command::AddIngredient(components),
            Command::AddStep(components),
            Command::DeleteIngredient(components, 0),
            Command::DeleteStep(components, 0),
            Command::DeleteNote(recipe.note_lines().len()),
            Command::DeleteNote(usize::MAX),
        ];
        for (c, component) in recipe.components.iter().enumerate() {
            commands.push(Command::DeleteIngredient(c, component.ingredients.len()));
            commands.push(Command::DeleteStep(c, component.steps.len()));
            commands.push(Command::DeleteIngredient(c, usize::MAX));
        }
        commands
    }

    #[test]
    fn test_add_then_delete_ingredient_restores_sequence() {
        let original = Recipe::sample();
        for c in 0..original.components.len() {
            let mut editor = Editor::new(original.clone());
            editor.add_ingredient(c);
            let appended = editor.recipe().components[c].ingredients.len() - 1;
            assert_eq!(editor.text(Field::Ingredient(c, appended)), "");

            editor.delete_ingredient(c, appended);
            assert_eq!(editor.recipe(), &original);
        }
    }

    #[test]
    fn test_add_then_delete_step_restores_sequence() {
        let original = Recipe::sample();
        for c in 0..original.components.len() {
            let mut editor = Editor::new(original.clone());
            editor.add_step(c);
            let appended = editor.recipe().components[c].steps.len() - 1;
            editor.delete_step(c, appended);
            assert_eq!(editor.recipe(), &original);
        }
    }

    #[test]
    fn test_last_component_cannot_be_deleted() {
        let original = single_component();
        let mut editor = Editor::new(original.clone());
        assert!(!editor.can_delete_component());

        for index in [0, 1, 5, usize::MAX] {
            assert!(!editor.apply(Command::DeleteComponent(index)));
            assert_eq!(editor.recipe(), &original);
        }
    }

    #[test]
    fn test_delete_component_keeps_order() {
        let mut editor = Editor::default();
        editor.add_component();
        editor.delete_component(1);

        let ids: Vec<_> = editor
            .recipe()
            .components
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, ["marinade", "component-3"]);
    }

    #[test]
    fn test_add_component_appends_with_ordinal_name() {
        let original = Recipe::sample();
        let n = original.components.len();
        let mut editor = Editor::new(original.clone());
        editor.add_component();

        let components = &editor.recipe().components;
        assert_eq!(components.len(), n + 1);
        assert_eq!(&components[..n], &original.components[..]);

        let added = &components[n];
        assert_eq!(added.id, format!("component-{}", n + 1));
        assert_eq!(added.title, format!("Component {}", n + 1));
        assert!(added.is_empty());
    }

    #[test]
    fn test_add_note_on_absent_notes() {
        let mut editor = Editor::new(single_component());
        assert!(editor.recipe().notes.is_none());

        editor.add_note();
        assert_eq!(editor.recipe().note_lines(), [""]);
    }

    #[test]
    fn test_add_note_appends_to_present_notes() {
        let mut editor = Editor::default();
        editor.add_note();
        assert_eq!(
            editor.recipe().note_lines(),
            ["Tastes better the next day.", ""]
        );
    }

    #[test]
    fn test_deleting_every_note_leaves_notes_absent() {
        let mut editor = Editor::new(single_component());
        for _ in 0..3 {
            editor.add_note();
        }
        editor.delete_note(1);
        assert_eq!(editor.recipe().note_lines().len(), 2);
        editor.delete_note(0);
        editor.delete_note(0);
        assert!(editor.recipe().notes.is_none());

        // Stays absent through another add/delete cycle
        editor.add_note();
        editor.delete_note(0);
        assert!(editor.recipe().notes.is_none());
    }

    #[test]
    fn test_out_of_range_mutations_are_noops() {
        for recipe in [Recipe::sample(), single_component()] {
            for command in out_of_range_commands(&recipe) {
                let mut editor = Editor::new(recipe.clone());
                assert!(!editor.apply(command), "{:?} reported a change", command);
                assert_eq!(editor.recipe(), &recipe, "{:?} changed the document", command);
            }
        }
    }

    #[test]
    fn test_delete_ingredient_checks_component_index_first() {
        // Ingredient 0 exists in component 0, but component 9 does not exist
        let recipe = Recipe::sample();
        let mut editor = Editor::new(recipe.clone());
        editor.delete_ingredient(9, 0);
        assert_eq!(editor.recipe(), &recipe);
    }

    #[test]
    fn test_text_reads_and_writes() {
        let mut editor = Editor::default();
        assert_eq!(editor.text(Field::RecipeId), "pot-roast");
        assert_eq!(editor.text(Field::Step(1, 1)), "Add vegetables and simmer until tender.");
        assert_eq!(editor.text(Field::Note(0)), "Tastes better the next day.");

        editor.set_text(Field::RecipeTitle, "Sunday roast");
        editor.set_text(Field::Ingredient(1, 2), "Parsnips");
        editor.set_text(Field::ComponentTitle(0), "");
        assert_eq!(editor.recipe().title, "Sunday roast");
        assert_eq!(editor.recipe().components[1].ingredients[2], "Parsnips");
        assert_eq!(editor.recipe().components[0].title, "");
    }

    #[test]
    fn test_invalid_field_reads_empty_and_drops_writes() {
        let recipe = single_component();
        let mut editor = Editor::new(recipe.clone());
        let missing = [
            Field::ComponentId(1),
            Field::ComponentTitle(3),
            Field::Ingredient(0, 1),
            Field::Ingredient(2, 0),
            Field::Step(0, 4),
            Field::Note(0),
        ];
        for field in missing {
            assert!(!editor.has_field(field));
            assert_eq!(editor.text(field), "");
            editor.set_text(field, "ghost");
        }
        assert_eq!(editor.recipe(), &recipe);
        assert!(editor.recipe().notes.is_none());
    }

    #[test]
    fn test_preview_tracks_edits() {
        let mut editor = Editor::default();
        let before = editor.preview();
        assert_eq!(before, editor.preview());

        editor.set_text(Field::RecipeTitle, "");
        let after = editor.preview();
        assert_ne!(before, after);
        assert_eq!(after.lines()[0].text(), "Untitled");
    }
}
