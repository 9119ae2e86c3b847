// Components module - reusable UI building blocks
//
// Shell components rendered around the panes:
// - Title bar: app name, recipe title, help hint
// - Status bar: mode, focus hint, document counts
// - Toast: transient feedback overlay
//
// Panels (implement the traits in `tui::traits`):
// - Form panel: the edit pane
// - Preview panel: the live preview
// - Logs panel: captured tracing events

pub mod form_panel;
pub mod logs_panel;
pub mod preview_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use form_panel::FormPanel;
pub use logs_panel::LogsPanel;
pub use preview_panel::PreviewPanel;
pub use toast::Toast;
