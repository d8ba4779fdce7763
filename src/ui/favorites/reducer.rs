use crate::ui::mvi::Reducer;

use super::intent::FavoritesIntent;
use super::state::FavoritesState;

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Intent = FavoritesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let FavoritesState { mut items } = state;
        match intent {
            FavoritesIntent::Add(product) => {
                if !items.iter().any(|item| item.id == product.id) {
                    items.push(product);
                }
            }
            FavoritesIntent::Remove(product_id) => {
                items.retain(|item| item.id != product_id);
            }
            FavoritesIntent::Toggle(product) => {
                match items.iter().position(|item| item.id == product.id) {
                    Some(index) => {
                        items.remove(index);
                    }
                    None => items.push(product),
                }
            }
        }
        FavoritesState { items }
    }
}
