// Bundled themes compiled into the binary

/// A theme shipped with the editor
pub struct BundledTheme {
    pub name: &'static str,
    pub content: &'static str,
}

pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        name: "Pantry Dark",
        content: PANTRY_DARK,
    },
    BundledTheme {
        name: "Pantry Light",
        content: PANTRY_LIGHT,
    },
    BundledTheme {
        name: "Terminal",
        content: TERMINAL,
    },
];

const PANTRY_DARK: &str = r##"
[meta]
name = "Pantry Dark"
version = 1

[ui]
background = "#1d1f21"
foreground = "#d8d4cc"
border = "#4a4d52"
border_focused = "#e5a55d"
title = "#e5a55d"
status_bar = "#9a968e"
selection_bg = "#3b3f45"
selection_fg = "#f2eee6"
muted = "#7c7a75"
border_type = "rounded"

[content]
heading = "#e5a55d"
label = "#b5cea8"
action = "#8fbcbb"
danger = "#e06c75"
warning = "#e5c07b"
accent = "#d19a66"
"##;

const PANTRY_LIGHT: &str = r##"
[meta]
name = "Pantry Light"
version = 1

[ui]
background = "#fbf8f1"
foreground = "#3a3632"
border = "#c9c2b5"
border_focused = "#b5651d"
title = "#b5651d"
status_bar = "#6b655c"
selection_bg = "#eadfca"
selection_fg = "#2a2622"
muted = "#9a9286"
border_type = "rounded"

[content]
heading = "#b5651d"
label = "#4f7942"
action = "#2f6f73"
danger = "#b3261e"
warning = "#a86f00"
accent = "#8a4b08"
"##;

const TERMINAL: &str = r##"
[meta]
name = "Terminal"
version = 1

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:8"
border_focused = "ansi:3"
title = "ansi:3"
status_bar = "ansi:8"
selection_bg = "ansi:8"
selection_fg = "ansi:15"
muted = "ansi:8"

[content]
heading = "ansi:11"
label = "ansi:2"
action = "ansi:6"
danger = "ansi:1"
warning = "ansi:3"
accent = "ansi:5"
"##;
