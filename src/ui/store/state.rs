use crate::catalog::ProductId;
use crate::ui::mvi::UiState;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Most recent user action, shown as the feedback line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastAction {
    FavoriteAdded,
    FavoriteRemoved,
    AddedToCart { name: String },
    Viewing { name: String },
}

impl fmt::Display for LastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastAction::FavoriteAdded => f.write_str("Produit ajouté aux favoris"),
            LastAction::FavoriteRemoved => f.write_str("Produit retiré des favoris"),
            LastAction::AddedToCart { name } => write!(f, "\"{}\" ajouté au panier", name),
            LastAction::Viewing { name } => write!(f, "Vous consultez {}", name),
        }
    }
}

/// View state of the catalog screen. Volatile: one instance per mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogState {
    pub(super) favorites: BTreeSet<ProductId>,
    /// Quantities only ever grow; nothing removes an entry.
    pub(super) cart: BTreeMap<ProductId, u32>,
    pub(super) last_action: Option<LastAction>,
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites(&self) -> &BTreeSet<ProductId> {
        &self.favorites
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn cart(&self) -> &BTreeMap<ProductId, u32> {
        &self.cart
    }

    /// Quantity of one product in the cart, 0 when never bought.
    pub fn quantity(&self, id: &str) -> u32 {
        self.cart.get(id).copied().unwrap_or(0)
    }

    /// Total number of units across the cart.
    pub fn cart_count(&self) -> u32 {
        self.cart.values().sum()
    }

    pub fn last_action(&self) -> Option<&LastAction> {
        self.last_action.as_ref()
    }

    /// Feedback text, empty before the first interaction.
    pub fn last_action_text(&self) -> String {
        self.last_action
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}
