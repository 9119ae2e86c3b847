// Recipe document model
//
// The entity graph edited for the lifetime of one session:
// Recipe -> ordered Components -> ingredient and step lines, plus optional notes.
// Shape and equality only; all mutation goes through `crate::editor::Editor`.

mod notes;
mod sample;

pub use notes::Notes;

use serde::{Deserialize, Deserializer, Serialize};

/// A recipe document (one per session)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier, usually a lowercase slug like "pot-roast"
    pub id: String,

    /// Human-readable name
    pub title: String,

    /// Ordered components; order is meaningful and never re-sorted
    pub components: Vec<Component>,

    /// Recipe-level notes. `None` is the only "no notes" state.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_notes"
    )]
    pub notes: Option<Notes>,
}

/// A named sub-section of a recipe ("Marinade", "Main")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub title: String,

    /// Plain text lines, no quantity parsing
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Plain text lines, numbered from 1 when shown
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Recipe {
    /// Build a recipe. An empty `notes` vector means "no notes".
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        components: Vec<Component>,
        notes: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            components,
            notes: Notes::new(notes),
        }
    }

    /// Notes as a slice, empty when absent
    pub fn note_lines(&self) -> &[String] {
        self.notes.as_ref().map(Notes::as_slice).unwrap_or(&[])
    }
}

impl Component {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    /// True when there is nothing to show besides the title
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.steps.is_empty()
    }
}

/// `null`, `[]` and a missing key all come back as absent notes
fn deserialize_notes<'de, D>(deserializer: D) -> Result<Option<Notes>, D::Error>
where
    D: Deserializer<'de>,
{
    let lines: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(lines.and_then(Notes::new))
}
