use crate::ui::mvi::Reducer;
use crate::ui::store::intent::CatalogIntent;
use crate::ui::store::state::{CatalogState, LastAction};

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::ToggleFavorite { product_id } => {
                if state.favorites.remove(&product_id) {
                    state.last_action = Some(LastAction::FavoriteRemoved);
                } else {
                    state.favorites.insert(product_id);
                    state.last_action = Some(LastAction::FavoriteAdded);
                }
            }
            CatalogIntent::Buy { product } => {
                *state.cart.entry(product.id).or_insert(0) += 1;
                state.last_action = Some(LastAction::AddedToCart { name: product.name });
            }
            CatalogIntent::Preview { product } => {
                state.last_action = Some(LastAction::Viewing { name: product.name });
            }
        }
        state
    }
}
