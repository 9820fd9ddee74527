use crate::catalog::{Product, ProductId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// Flip favorite membership. Any id is accepted, listed or not.
    ToggleFavorite { product_id: ProductId },
    /// Add one unit of the product to the cart.
    Buy { product: Product },
    /// The card body was tapped.
    Preview { product: Product },
}

impl Intent for CatalogIntent {}
