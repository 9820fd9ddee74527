use serde::Deserialize;
use std::borrow::Borrow;
use std::fmt;

/// Stable key of a product, shared by list rendering, favorites and cart.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable product record.
///
/// `price` is an opaque, already formatted display string. Missing text
/// fields deserialize as empty strings and simply render as absent UI.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    /// Remote image URI. Fetching is left to whatever host can display it.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tag: Option<String>,
}

impl Product {
    /// Host part of the image URI (`images.unsplash.com`), if it has one.
    pub fn image_host(&self) -> Option<&str> {
        let rest = self
            .image
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.image);
        let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Tag text, ignoring blank tags.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref().filter(|tag| !tag.trim().is_empty())
    }
}
