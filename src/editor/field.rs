//! Addresses of editable text fields
//!
//! A `Field` is a tuple of indices into the document. It is only an address:
//! reading or writing through one is bounds-checked by `Editor`.

use super::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RecipeId,
    RecipeTitle,
    ComponentId(usize),
    ComponentTitle(usize),
    /// (component, ingredient)
    Ingredient(usize, usize),
    /// (component, step)
    Step(usize, usize),
    Note(usize),
}

impl Field {
    /// Placeholder shown when the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::RecipeId => "Recipe ID (slug, e.g. pot-roast)",
            Field::RecipeTitle => "Title",
            Field::ComponentId(_) => "Component ID (e.g. marinade)",
            Field::ComponentTitle(_) => "Component title",
            Field::Ingredient(..) => "Ingredient (plain text)",
            Field::Step(..) => "Step (plain text)",
            Field::Note(_) => "Note (plain text)",
        }
    }

    /// Command that removes the line this field belongs to.
    ///
    /// Only list lines can be removed; ids and titles return `None`.
    pub fn delete_command(&self) -> Option<Command> {
        match *self {
            Field::Ingredient(c, i) => Some(Command::DeleteIngredient(c, i)),
            Field::Step(c, s) => Some(Command::DeleteStep(c, s)),
            Field::Note(n) => Some(Command::DeleteNote(n)),
            _ => None,
        }
    }
}
