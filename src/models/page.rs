/// In-memory model of the rendered page. Every builder mutates this, and
/// `render::render_page` turns it into HTML.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub body_classes: Vec<String>,
    pub root_style: RootStyle,
    pub hero: Hero,
    pub scope_rule: String,
    pub dock: Vec<DockButton>,
    pub core_grid: Grid,
    pub package_grid: Grid,
    pub lab_grid: Grid,
    pub service_select: ServiceSelect,
    pub contact: ContactForm,
    pub notice: Option<Notice>,
    /// Set when the content document failed to load; only the hero is shown.
    pub degraded: bool,
}

/// Visual variables applied to the page root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootStyle {
    pub accent: String,
    pub font: String,
    pub radius: String,
    pub hero_img: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hero {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DockButton {
    pub theme_id: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub id: &'static str,
    pub cards: Vec<Card>,
}

impl Default for Grid {
    fn default() -> Self {
        Grid { id: "", cards: Vec::new() }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    pub img: Option<CardImage>,
    pub price: Option<String>,
    pub title: String,
    pub desc: String,
    pub badges: Vec<String>,
    pub action: CardAction,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardAction {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceSelect {
    pub placeholder: String,
    pub groups: Vec<OptionGroup>,
    /// Currently selected option value; `None` means the placeholder.
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl ServiceSelect {
    pub fn options(&self) -> impl Iterator<Item = &SelectOption> {
        self.groups.iter().flat_map(|g| g.options.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub timeline: String,
    pub message: String,
    pub submit: SubmitControl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: String,
}

pub const SUBMIT_LABEL: &str = "Send Project Brief";

impl Default for SubmitControl {
    fn default() -> Self {
        SubmitControl {
            disabled: false,
            label: SUBMIT_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice { kind: NoticeKind::Error, message: message.into() }
    }
}

pub const FALLBACK_TITLE: &str = "BAG DIGITAL";
pub const FALLBACK_MESSAGE: &str =
    "Site failed to load content.json. Check file paths and try again.";

impl Page {
    pub fn new() -> Self {
        Page {
            core_grid: Grid { id: "core-grid", cards: Vec::new() },
            package_grid: Grid { id: "package-grid", cards: Vec::new() },
            lab_grid: Grid { id: "lab-grid", cards: Vec::new() },
            ..Default::default()
        }
    }

    /// Minimal page shown when the content document is unavailable.
    pub fn degraded() -> Self {
        Page {
            hero: Hero {
                title: FALLBACK_TITLE.to_string(),
                desc: FALLBACK_MESSAGE.to_string(),
            },
            degraded: true,
            ..Page::new()
        }
    }
}
