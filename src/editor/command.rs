//! Structural edit commands
//!
//! Every add/remove the front end can trigger is one `Command` value.
//! `Editor::apply` is the only place they touch the document.

/// A structural change to the recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a new component at the end
    AddComponent,
    /// Remove a component (refused for the last one)
    DeleteComponent(usize),
    /// Append an empty ingredient line to a component
    AddIngredient(usize),
    /// Remove one ingredient: (component, ingredient)
    DeleteIngredient(usize, usize),
    /// Append an empty step to a component
    AddStep(usize),
    /// Remove one step: (component, step)
    DeleteStep(usize, usize),
    /// Append an empty note, creating the notes section if absent
    AddNote,
    /// Remove a note, dropping the notes section when it empties
    DeleteNote(usize),
}

impl Command {
    /// Short label for toasts and logs
    pub fn describe(&self) -> String {
        match self {
            Command::AddComponent => "component added".to_string(),
            Command::DeleteComponent(c) => format!("component {} deleted", c + 1),
            Command::AddIngredient(c) => format!("ingredient added to component {}", c + 1),
            Command::DeleteIngredient(c, i) => {
                format!("ingredient {} of component {} deleted", i + 1, c + 1)
            }
            Command::AddStep(c) => format!("step added to component {}", c + 1),
            Command::DeleteStep(c, s) => {
                format!("step {} of component {} deleted", s + 1, c + 1)
            }
            Command::AddNote => "note added".to_string(),
            Command::DeleteNote(n) => format!("note {} deleted", n + 1),
        }
    }
}
