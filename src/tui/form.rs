// Edit pane row model
//
// The edit pane is a flat list of rows derived from the document on every
// frame, mirroring the recipe form: recipe fields, components with their
// ingredient and step lines, then notes. Rows carry only addresses (Field,
// Command); text is always read from the editor at render time.

use crate::editor::{Command, Field};
use crate::recipe::Recipe;

/// One line of the edit pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Top-level section title
    Section(&'static str),
    /// "Component N" header; deletable unless it is the last component
    ComponentHeader(usize),
    /// "Ingredients" / "Steps" inside a component
    SubHeading(&'static str),
    /// Editable text field
    Field(Field),
    /// Button-like row that applies a command
    Action(Command),
    /// Muted hint for an empty list
    Hint(&'static str),
}

impl Row {
    /// Whether the cursor can rest on this row
    pub fn is_selectable(&self) -> bool {
        matches!(
            self,
            Row::ComponentHeader(_) | Row::Field(_) | Row::Action(_)
        )
    }

    /// Command that deletes what this row stands for, if anything
    pub fn delete_command(&self) -> Option<Command> {
        match self {
            Row::ComponentHeader(c) => Some(Command::DeleteComponent(*c)),
            Row::Field(field) => field.delete_command(),
            _ => None,
        }
    }

    /// Command for "add" in the context of this row.
    ///
    /// Ingredient rows add an ingredient, step rows a step, note rows a note;
    /// anything else adds a component.
    pub fn add_command(&self) -> Command {
        match self {
            Row::Action(command) => *command,
            Row::Field(Field::Ingredient(c, _)) => Command::AddIngredient(*c),
            Row::Field(Field::Step(c, _)) => Command::AddStep(*c),
            Row::Field(Field::Note(_)) => Command::AddNote,
            _ => Command::AddComponent,
        }
    }
}

/// Label of an action row
pub fn action_label(command: Command) -> &'static str {
    match command {
        Command::AddComponent => "Add component",
        Command::AddIngredient(_) => "Add ingredient",
        Command::AddStep(_) => "Add step",
        Command::AddNote => "Add note",
        Command::DeleteComponent(_) => "Delete component",
        Command::DeleteIngredient(..) => "Delete ingredient",
        Command::DeleteStep(..) => "Delete step",
        Command::DeleteNote(_) => "Delete note",
    }
}

/// Build the edit pane rows for a document
pub fn rows(recipe: &Recipe) -> Vec<Row> {
    let mut rows = vec![
        Row::Section("Recipe"),
        Row::Field(Field::RecipeId),
        Row::Field(Field::RecipeTitle),
        Row::Section("Components"),
        Row::Action(Command::AddComponent),
    ];

    for (c, component) in recipe.components.iter().enumerate() {
        rows.push(Row::ComponentHeader(c));
        rows.push(Row::Field(Field::ComponentId(c)));
        rows.push(Row::Field(Field::ComponentTitle(c)));

        rows.push(Row::SubHeading("Ingredients"));
        rows.push(Row::Action(Command::AddIngredient(c)));
        if component.ingredients.is_empty() {
            rows.push(Row::Hint("No ingredients yet."));
        }
        rows.extend((0..component.ingredients.len()).map(|i| Row::Field(Field::Ingredient(c, i))));

        rows.push(Row::SubHeading("Steps"));
        rows.push(Row::Action(Command::AddStep(c)));
        if component.steps.is_empty() {
            rows.push(Row::Hint("No steps yet."));
        }
        rows.extend((0..component.steps.len()).map(|s| Row::Field(Field::Step(c, s))));
    }

    rows.push(Row::Section("Notes (optional)"));
    rows.push(Row::Action(Command::AddNote));
    let notes = recipe.note_lines();
    if notes.is_empty() {
        rows.push(Row::Hint("No notes."));
    }
    rows.extend((0..notes.len()).map(|n| Row::Field(Field::Note(n))));

    rows
}

/// Index of the row showing `field`
pub fn position_of(rows: &[Row], field: Field) -> Option<usize> {
    rows.iter().position(|row| *row == Row::Field(field))
}

/// Nearest selectable row at or after `index`, else at or before it
pub fn nearest_selectable(rows: &[Row], index: usize) -> Option<usize> {
    let start = index.min(rows.len().checked_sub(1)?);
    (start..rows.len())
        .find(|&i| rows[i].is_selectable())
        .or_else(|| (0..start).rev().find(|&i| rows[i].is_selectable()))
}

/// Next selectable row after `index`
pub fn next_selectable(rows: &[Row], index: usize) -> Option<usize> {
    (index + 1..rows.len()).find(|&i| rows[i].is_selectable())
}

/// Previous selectable row before `index`
pub fn prev_selectable(rows: &[Row], index: usize) -> Option<usize> {
    (0..index.min(rows.len())).rev().find(|&i| rows[i].is_selectable())
}
