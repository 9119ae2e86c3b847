// Scroll state for TUI panels
//
// Each panel owns its scroll state; App only routes input to the focused
// panel. The logs panel auto-follows new entries, the edit and preview
// panes scroll manually and keep the cursor row in view.

/// Scroll position, content size and viewport size for one panel
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Line/item index at the top of the viewport
    offset: usize,

    /// Total number of items/lines in content
    total: usize,

    /// Number of items/lines visible in viewport
    viewport: usize,

    /// Keep the view pinned to the bottom as content grows.
    /// Scrolling up disables it; reaching the bottom re-enables it.
    pub auto_follow: bool,
}

impl ScrollState {
    /// Scroll state with auto-follow enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Scroll state with auto-follow disabled
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            ..Self::new()
        }
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// Scroll just enough that `index` is inside the viewport
    pub fn ensure_visible(&mut self, index: usize) {
        if self.viewport == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Scroll up by one unit (disables auto-follow)
    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    /// Scroll down by one unit
    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
        if self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());

        if self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    /// Jump to bottom (and enable auto-follow)
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = true;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}
