use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// The site's content document (`content.json`). Read-only once loaded.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContentDocument {
    #[serde(default)]
    pub global: Global,
    /// Keyed by theme id, kept in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub themes: IndexMap<String, Theme>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub core_services: Vec<Offering>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<Offering>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub portfolio_labs: Vec<LabEntry>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Global {
    #[serde(default)]
    pub scope_rule: Option<String>,
    #[serde(default)]
    pub gas_url: Option<String>,
    #[serde(default)]
    pub default_theme: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Theme {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub accent: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub font: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub radius: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero_img: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hero_desc: String,
}

/// A service or package entry.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Offering {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
}

/// A portfolio lab: links out, carries its own image and badges.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LabEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub badges: Vec<String>,
}

impl ContentDocument {
    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.themes.get(id)
    }

    pub fn has_theme(&self, id: &str) -> bool {
        self.themes.contains_key(id)
    }

    /// Submission endpoint, if one is configured and non-blank.
    pub fn gas_url(&self) -> Option<&str> {
        self.global
            .gas_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    pub fn scope_rule(&self) -> &str {
        self.global.scope_rule.as_deref().unwrap_or("")
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}
