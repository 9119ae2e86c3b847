// Status bar component
//
// Mode and focus on the left, keybind hint, then document counts.

use crate::recipe::Recipe;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Wide terminals get the keybind hint for the focused panel; narrow ones
/// only the mode and counts.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let recipe = app.editor.recipe();

    let (mode, mode_color) = if app.is_editing() {
        ("EDIT", app.theme.warning)
    } else {
        ("NAV", app.theme.action)
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(mode_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("│ {} ", app.focus.label())),
    ];

    if bp.at_least(Breakpoint::Normal) {
        spans.push(Span::raw(format!("│ {} ", app.focus_hint())));
    }

    let counts = if bp.at_least(Breakpoint::Wide) {
        document_counts(recipe)
    } else {
        compact_counts(recipe)
    };
    spans.push(Span::raw(format!("│ {}", counts)));

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

/// "2 components · 5 ingredients · 3 steps · 1 note"
pub fn document_counts(recipe: &Recipe) -> String {
    let (ingredients, steps) = totals(recipe);
    format!(
        "{} · {} · {} · {}",
        plural(recipe.components.len(), "component"),
        plural(ingredients, "ingredient"),
        plural(steps, "step"),
        plural(recipe.note_lines().len(), "note"),
    )
}

fn compact_counts(recipe: &Recipe) -> String {
    let (ingredients, steps) = totals(recipe);
    format!(
        "🧩 {} 🥕 {} 📝 {}",
        recipe.components.len(),
        ingredients,
        steps
    )
}

fn totals(recipe: &Recipe) -> (usize, usize) {
    recipe.components.iter().fold((0, 0), |(i, s), c| {
        (i + c.ingredients.len(), s + c.steps.len())
    })
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}
