use log::debug;

use crate::models::content::{ContentDocument, Offering};
use crate::models::page::{OptionGroup, SelectOption, ServiceSelect};

pub const SELECT_PLACEHOLDER: &str = "Select service or package";

/// Prefix on package option values, so a package and a service sharing a
/// title still submit distinct values.
pub const PACKAGE_PREFIX: &str = "[Package] ";

/// Rebuild the service dropdown: placeholder, then Services, then Packages.
/// Empty groups are left out.
pub fn build_service_select(content: &ContentDocument, select: &mut ServiceSelect) {
    select.placeholder = SELECT_PLACEHOLDER.to_string();
    select.value = None;
    select.groups.clear();

    let sources: [(&str, &[Offering], &str); 2] = [
        ("Services", content.core_services.as_slice(), ""),
        ("Packages", content.packages.as_slice(), PACKAGE_PREFIX),
    ];

    for (label, items, prefix) in sources {
        if items.is_empty() {
            continue;
        }
        select.groups.push(OptionGroup {
            label: label.to_string(),
            options: items
                .iter()
                .map(|item| SelectOption {
                    value: format!("{}{}", prefix, item.title),
                    label: format!("{} ({})", item.title, item.price.as_deref().unwrap_or("")),
                })
                .collect(),
        });
    }
}

/// Card click: pick the first option whose label starts with `"<title> ("`.
///
/// Titles are assumed unique across services and packages; if two share a
/// title, the first one in dropdown order wins.
pub fn select_from_card(select: &mut ServiceSelect, card_title: &str) -> Option<String> {
    let title = card_title.trim();
    if title.is_empty() {
        return None;
    }

    let needle = format!("{} (", title);
    let value = select
        .options()
        .find(|o| o.label.starts_with(&needle))
        .map(|o| o.value.clone())?;

    debug!("Card '{}' selected option '{}'", title, value);
    select.value = Some(value.clone());
    Some(value)
}
