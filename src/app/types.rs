use std::fmt;

/// Which pane receives movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Demos,
    Result,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Demos,
            Focus::Demos => Focus::Result,
            Focus::Result => Focus::Sidebar,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Result,
            Focus::Demos => Focus::Sidebar,
            Focus::Result => Focus::Demos,
        }
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Focus::Sidebar => "Pages",
            Focus::Demos => "Demos",
            Focus::Result => "Result",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
}
