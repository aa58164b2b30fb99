use crate::models::content::{LabEntry, Offering};
use crate::models::page::{Card, CardAction, CardImage, Grid};

/// In-page anchor of the contact section.
pub const CONTACT_ANCHOR: &str = "#contact";

pub const PACKAGE_BADGE: &str = "PACKAGE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCategory {
    Services,
    Packages,
    Labs,
}

/// Anything that can be projected onto a card.
pub trait GridItem {
    fn title(&self) -> &str;
    fn price(&self) -> Option<&str>;
    fn desc(&self) -> &str;

    fn link(&self) -> Option<&str> {
        None
    }

    fn img(&self) -> Option<&str> {
        None
    }

    fn badges(&self) -> &[String] {
        &[]
    }
}

impl GridItem for Offering {
    fn title(&self) -> &str {
        &self.title
    }

    fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    fn desc(&self) -> &str {
        &self.desc
    }
}

impl GridItem for LabEntry {
    fn title(&self) -> &str {
        &self.title
    }

    fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    fn desc(&self) -> &str {
        &self.desc
    }

    fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    fn img(&self) -> Option<&str> {
        self.img.as_deref()
    }

    fn badges(&self) -> &[String] {
        &self.badges
    }
}

/// Clear the grid and refill it with one card per item, in order.
pub fn render_grid<T: GridItem>(grid: &mut Grid, items: &[T], category: GridCategory) {
    grid.cards = items.iter().map(|item| build_card(item, category)).collect();
}

pub fn build_card<T: GridItem>(item: &T, category: GridCategory) -> Card {
    let (link, badges, img) = match category {
        GridCategory::Services => (None, Vec::new(), None),
        GridCategory::Packages => (None, vec![PACKAGE_BADGE.to_string()], None),
        GridCategory::Labs => (item.link(), item.badges().to_vec(), item.img()),
    };

    let href = non_empty(link).unwrap_or(CONTACT_ANCHOR).to_string();
    let label = if href.starts_with('#') { "Select" } else { "Open Lab" };

    Card {
        img: non_empty(img).map(|src| CardImage {
            src: src.to_string(),
            alt: item.title().to_string(),
        }),
        price: non_empty(item.price()).map(str::to_string),
        title: item.title().to_string(),
        desc: item.desc().to_string(),
        badges,
        action: CardAction {
            href,
            label: label.to_string(),
        },
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
