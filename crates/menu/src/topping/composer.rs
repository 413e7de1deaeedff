use crate::item::PricedItem;
use crate::topping::{IdentityTopping, Topping};

/// Two toppings applied in sequence, itself a [`Topping`] again.
pub struct Toppings<T1, T2> {
    first: T1,
    second: T2,
}

impl<T1, T2> Toppings<T1, T2> {
    pub fn new(first: T1, second: T2) -> Self {
        Self { first, second }
    }
}

impl Default for Toppings<IdentityTopping, IdentityTopping> {
    fn default() -> Self {
        Self::new(IdentityTopping, IdentityTopping)
    }
}

impl<I, T1, T2> Topping<I> for Toppings<T1, T2>
where
    I: PricedItem,
    T1: Topping<I>,
    T2: Topping<T1::Out>,
{
    type Out = T2::Out;

    fn apply(&self, item: I) -> Self::Out {
        let first = self.first.apply(item);
        self.second.apply(first)
    }
}

#[cfg(test)]
mod tests {
    use crate::item::{toast, PricedItem};
    use crate::topping::{Cheese, Ham, IdentityTopping, Topping, Toppings};

    #[test]
    fn applies_first_then_second() {
        let combo = Toppings::new(Cheese, Ham);
        let item = combo.apply(toast());

        assert_eq!(item.name(), "toast add Cheese add Ham");
        assert_eq!(item.cost(), 35);
    }

    #[test]
    fn nested_composition() {
        let combo = Toppings::new(Toppings::new(Cheese, Cheese), Ham);
        let item = combo.apply(toast());

        assert_eq!(item.name(), "toast add Cheese add Cheese add Ham");
        assert_eq!(item.cost(), 45);
    }

    #[test]
    fn default_composer_is_a_no_op() {
        let combo = Toppings::default();
        let item = combo.apply(toast());

        assert_eq!(item.name(), "toast");
        assert_eq!(item.cost(), 10);
    }

    #[test]
    fn identity_leaves_either_side_unchanged() {
        let left = Toppings::new(IdentityTopping, Cheese);
        let right = Toppings::new(Cheese, IdentityTopping);

        assert_eq!(left.apply(toast()).cost(), right.apply(toast()).cost());
        assert_eq!(left.apply(toast()).name(), right.apply(toast()).name());
    }
}
