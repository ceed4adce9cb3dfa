/// Selection and scroll state for one vertical list.
///
/// Stores only indices so the core can be unit-tested without rendering.
/// Both the sidebar and the demo list use one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    /// Number of rows in the list.
    pub len: usize,
    /// Index of the currently selected row.
    pub selected: usize,
    /// Scroll offset (index of the top-most visible row).
    pub offset: usize,
}

impl Panel {
    pub fn new(len: usize) -> Self {
        Panel {
            len,
            selected: 0,
            offset: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move selection down by one, clamping at the last row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    /// Move selection up by one, clamping at zero.
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }

    pub fn page_down(&mut self, height: usize) {
        self.selected = std::cmp::min(
            self.selected.saturating_add(height.max(1)),
            self.len.saturating_sub(1),
        );
    }

    pub fn page_up(&mut self, height: usize) {
        self.selected = self.selected.saturating_sub(height.max(1));
    }

    /// Adjust `offset` so the selected row is visible within a viewport of
    /// `height` rows.
    pub fn ensure_selected_visible(&mut self, height: usize) {
        if height == 0 || self.len == 0 {
            self.offset = 0;
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
            return;
        }
        let max_offset = self.len.saturating_sub(height);
        if self.selected >= self.offset + height {
            self.offset = std::cmp::min(self.selected + 1 - height, max_offset);
        } else if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}
