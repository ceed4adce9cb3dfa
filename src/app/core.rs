use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use self::panel::Panel;
use super::settings::{load_settings_from, save_settings_to, Settings};
use super::types::{Focus, Mode};
use crate::api::DemoApi;
use crate::catalog::{self, Catalog, EndpointDemo};
use crate::runner::demo_runner::{Completion, DemoRunner, MountId};

pub mod panel;
mod navigation;

pub struct App {
    /// Current route, after the root redirect. May name no page.
    pub route: String,
    /// Runner of the mounted page; `None` when `route` matches nothing.
    pub runner: Option<DemoRunner>,
    /// Sidebar cursor.
    pub nav: Panel,
    /// Demo list selection of the mounted page.
    pub demos: Panel,
    pub focus: Focus,
    pub mode: Mode,
    pub settings: Settings,
    /// Vertical and horizontal scroll of the result pane.
    pub result_scroll: (u16, u16),
    /// One-line message shown in the footer until the next key press.
    pub status: Option<String>,
    /// Where a theme toggle is persisted. Unset means "don't persist".
    pub settings_path: Option<PathBuf>,
    api: Arc<dyn DemoApi>,
    tx: UnboundedSender<Completion>,
    mounts: MountId,
}

impl App {
    pub fn new(
        settings: Settings,
        api: Arc<dyn DemoApi>,
        tx: UnboundedSender<Completion>,
        route: &str,
    ) -> Self {
        let mut app = App {
            route: String::new(),
            runner: None,
            nav: Panel::new(catalog::pages().len()),
            demos: Panel::default(),
            focus: Focus::default(),
            mode: Mode::Normal,
            settings,
            result_scroll: (0, 0),
            status: None,
            settings_path: None,
            api,
            tx,
            mounts: 0,
        };
        app.mount(route);
        app
    }

    /// Route to `path`, dropping the current page's runner and everything it
    /// holds. Completions still in flight for it are discarded on arrival.
    pub fn mount(&mut self, path: &str) {
        self.route = catalog::resolve_route(path).to_string();
        self.mounts += 1;
        self.runner = catalog::by_path(&self.route).map(|c| {
            DemoRunner::new(c, self.mounts, Arc::clone(&self.api), self.tx.clone())
        });
        self.demos = Panel::new(self.catalog().map(|c| c.demos.len()).unwrap_or(0));
        self.result_scroll = (0, 0);
        if let Some(i) = catalog::index_of(&self.route) {
            self.nav.selected = i;
        }
        match self.catalog() {
            Some(c) => info!(route = %self.route, demos = c.demos.len(), mount = self.mounts, "page mounted"),
            None => warn!(route = %self.route, "no page at route"),
        }
    }

    pub fn catalog(&self) -> Option<&'static Catalog> {
        self.runner.as_ref().map(DemoRunner::catalog)
    }

    pub fn selected_demo(&self) -> Option<&'static EndpointDemo> {
        self.catalog().and_then(|c| c.demos.get(self.demos.selected))
    }

    /// Start the selected demo. Needs a running tokio runtime.
    pub fn run_selected(&mut self) {
        if let (Some(demo), Some(runner)) = (self.selected_demo(), self.runner.as_mut()) {
            runner.run(demo);
            self.result_scroll = (0, 0);
        }
    }

    pub fn run_all(&mut self) {
        if let Some(runner) = self.runner.as_mut() {
            let n = runner.run_all().len();
            self.status = Some(format!("Running {} demos", n));
        }
    }

    /// Hand a finished run to the mounted page. Returns `false` if it was
    /// dropped because it belongs to a page no longer mounted.
    pub fn apply_completion(&mut self, completion: Completion) -> bool {
        match self.runner.as_mut() {
            Some(runner) => runner.settle(completion),
            None => false,
        }
    }

    pub fn toggle_code(&mut self) {
        self.settings.show_code = !self.settings.show_code;
    }

    /// Switch between the dark and light theme and persist the choice.
    /// Only `theme` is written; the rest of the file is left as it was, so
    /// command-line overrides never leak into it.
    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        crate::ui::apply_theme(&self.settings);
        if let Some(path) = &self.settings_path {
            let theme = self.settings.theme;
            let saved = load_settings_from(path).and_then(|mut on_disk| {
                on_disk.theme = theme;
                save_settings_to(path, &on_disk)
            });
            if let Err(e) = saved {
                warn!(error = %e, "failed to persist theme");
                self.status = Some(format!("Failed to save settings: {}", e));
            }
        }
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        self.focus = if forward {
            self.focus.next()
        } else {
            self.focus.prev()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RequestError;
    use async_trait::async_trait;
    use serde_json::Value;
    use tokio::sync::mpsc;

    struct Never;

    #[async_trait]
    impl DemoApi for Never {
        async fn request(&self, _: &str, _: &str, _: Option<&Value>) -> Result<Value, RequestError> {
            Err(RequestError::Transport("offline".into()))
        }
    }

    fn app(route: &str) -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(Settings::default(), Arc::new(Never), tx, route)
    }

    #[test]
    fn root_mounts_basic_queries() {
        let a = app("/");
        assert_eq!(a.route, "/basic-queries");
        assert_eq!(a.nav.selected, 0);
        assert_eq!(a.demos.len, a.catalog().unwrap().demos.len());
    }

    #[test]
    fn unknown_route_mounts_nothing() {
        let a = app("/nowhere");
        assert!(a.runner.is_none());
        assert!(a.selected_demo().is_none());
        assert!(a.demos.is_empty());
    }

    #[test]
    fn remount_bumps_mount_id() {
        let mut a = app("/tracking");
        let first = a.runner.as_ref().unwrap().mount();
        a.mount("/pagination");
        a.mount("/tracking");
        assert!(a.runner.as_ref().unwrap().mount() > first);
        assert_eq!(a.nav.selected, 3);
    }

    #[test]
    fn theme_toggle_persists_only_the_theme() {
        use crate::ui::themes::ThemeName;
        use assert_fs::prelude::*;

        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("settings.toml");
        f.write_str("base_url = \"http://file:1\"\nshow_code = false\n").unwrap();

        let mut a = app("/");
        a.settings.base_url = "http://one-off-flag:9".into();
        a.settings_path = Some(f.path().to_path_buf());
        a.toggle_theme();

        let on_disk = load_settings_from(f.path()).unwrap();
        assert_eq!(on_disk.theme, ThemeName::Light);
        assert_eq!(on_disk.base_url, "http://file:1");
        assert!(!on_disk.show_code);
        assert_eq!(a.settings.base_url, "http://one-off-flag:9");
        assert!(a.status.is_none());
    }

    #[test]
    fn toggling_code_flips_setting() {
        let mut a = app("/");
        assert!(a.settings.show_code);
        a.toggle_code();
        assert!(!a.settings.show_code);
    }
}
