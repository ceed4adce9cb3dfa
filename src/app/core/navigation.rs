use super::*;

impl App {
    /// Move the focused list (or the result scroll) down by one.
    pub fn next(&mut self, list_height: usize) {
        match self.focus {
            Focus::Sidebar => self.nav.select_next(),
            Focus::Demos => self.select_demo_with(|p| p.select_next()),
            Focus::Result => self.scroll_result(1),
        }
        self.ensure_selection_visible(list_height);
    }

    pub fn previous(&mut self, list_height: usize) {
        match self.focus {
            Focus::Sidebar => self.nav.select_prev(),
            Focus::Demos => self.select_demo_with(|p| p.select_prev()),
            Focus::Result => self.scroll_result(-1),
        }
        self.ensure_selection_visible(list_height);
    }

    pub fn page_down(&mut self, list_height: usize) {
        match self.focus {
            Focus::Sidebar => self.nav.page_down(list_height),
            Focus::Demos => self.select_demo_with(|p| p.page_down(list_height)),
            Focus::Result => self.scroll_result(list_height as i32),
        }
        self.ensure_selection_visible(list_height);
    }

    pub fn page_up(&mut self, list_height: usize) {
        match self.focus {
            Focus::Sidebar => self.nav.page_up(list_height),
            Focus::Demos => self.select_demo_with(|p| p.page_up(list_height)),
            Focus::Result => self.scroll_result(-(list_height as i32)),
        }
        self.ensure_selection_visible(list_height);
    }

    pub fn home(&mut self, list_height: usize) {
        match self.focus {
            Focus::Sidebar => self.nav.select_first(),
            Focus::Demos => self.select_demo_with(Panel::select_first),
            Focus::Result => self.result_scroll = (0, 0),
        }
        self.ensure_selection_visible(list_height);
    }

    pub fn end(&mut self, list_height: usize) {
        match self.focus {
            Focus::Sidebar => self.nav.select_last(),
            Focus::Demos => self.select_demo_with(Panel::select_last),
            Focus::Result => {}
        }
        self.ensure_selection_visible(list_height);
    }

    /// Horizontal scroll of the result pane, for wide tables.
    pub fn scroll_result_x(&mut self, delta: i32) {
        self.result_scroll.1 = shift(self.result_scroll.1, delta);
    }

    /// Mount the page under the sidebar cursor and move focus to its demos.
    pub fn open_selected_page(&mut self) {
        if let Some(c) = catalog::pages().get(self.nav.selected) {
            if c.path() != self.route {
                self.mount(c.path());
            }
            self.focus = Focus::Demos;
        }
    }

    fn ensure_selection_visible(&mut self, list_height: usize) {
        match self.focus {
            Focus::Sidebar => self.nav.ensure_selected_visible(list_height),
            Focus::Demos => self.demos.ensure_selected_visible(list_height),
            Focus::Result => {}
        }
    }

    // Changing the selected demo resets the result scroll.
    fn select_demo_with(&mut self, f: impl FnOnce(&mut Panel)) {
        let before = self.demos.selected;
        f(&mut self.demos);
        if self.demos.selected != before {
            self.result_scroll = (0, 0);
        }
    }

    fn scroll_result(&mut self, delta: i32) {
        self.result_scroll.0 = shift(self.result_scroll.0, delta);
    }
}

fn shift(v: u16, delta: i32) -> u16 {
    (v as i32 + delta).clamp(0, u16::MAX as i32) as u16
}
