mod composer;
mod condiment;
mod identity;
mod topping_fn;

pub use composer::Toppings;
pub use condiment::{Cheese, Ham, Topped};
pub use identity::IdentityTopping;
pub use topping_fn::{topping_fn, ToppingFn};

use crate::item::PricedItem;

/// A topping wraps one menu item into another.
///
/// The output is a full [`PricedItem`] again, so toppings apply to base items
/// and to already-topped items alike, nesting to arbitrary depth.
pub trait Topping<I: PricedItem> {
    /// the item this topping produces
    type Out: PricedItem;

    fn apply(&self, item: I) -> Self::Out;
}

pub trait ToppingExt<I: PricedItem>: Topping<I> {
    fn and_then<T>(self, topping: T) -> Toppings<Self, T>
    where
        Self: Sized,
    {
        Toppings::new(self, topping)
    }

    fn compose<T>(self, topping: T) -> Toppings<T, Self>
    where
        Self: Sized,
    {
        Toppings::new(topping, self)
    }
}

impl<T: Topping<I> + ?Sized, I: PricedItem> ToppingExt<I> for T {}
