use tracing::{debug, error};

use crate::catalog::{BoxedItem, Menu};
use crate::error::OrderError;
use crate::receipt::Receipt;

/// One order against a [`Menu`]: a base item plus toppings, applied in the
/// order the caller added them.
pub struct Order<'menu> {
    menu: &'menu Menu,
    base: Option<String>,
    toppings: Vec<String>,
}

impl<'menu> Order<'menu> {
    pub fn from_menu(menu: &'menu Menu) -> Self {
        Self { menu, base: None, toppings: Vec::new() }
    }

    pub fn base(mut self, name: impl Into<String>) -> Self {
        self.base = Some(name.into());
        self
    }

    pub fn add(mut self, topping: impl Into<String>) -> Self {
        self.toppings.push(topping.into());
        self
    }

    /// Resolves all names against the menu and builds the topping chain.
    ///
    /// Every name is checked before the receipt is produced; an order naming
    /// anything that is not on the card is rejected as a whole.
    pub fn place(self) -> Result<Receipt, OrderError> {
        let base_name = self.base.ok_or(OrderError::MissingBase)?;
        let base = match self.menu.base(&base_name) {
            Some(base) => base.clone(),
            None => {
                error!(base = %base_name, "base item is not on the menu");
                return Err(OrderError::unknown_base(&base_name));
            }
        };

        debug!(base = %base_name, cost = base.price(), "order started");

        let mut item: BoxedItem = Box::new(base);
        for name in &self.toppings {
            item = match self.menu.apply_topping(name, item) {
                Some(item) => item,
                None => {
                    error!(topping = %name, "topping is not on the menu");
                    return Err(OrderError::unknown_topping(name));
                }
            };
            debug!(topping = %name, cost = item.cost(), "topping applied");
        }

        Ok(Receipt::of(&item))
    }
}

#[cfg(test)]
mod tests {
    use super::Order;
    use crate::catalog::Menu;
    use crate::error::OrderError;
    use bistro_menu::item::{hamburger, toast};
    use bistro_menu::topping::{Cheese, Ham};

    fn menu() -> Menu {
        Menu::builder()
            .base("toast", toast())
            .base("hamburger", hamburger())
            .topping("cheese", Cheese)
            .topping("ham", Ham)
            .build()
    }

    #[test]
    fn plain_base_order() {
        let menu = menu();
        let receipt = Order::from_menu(&menu).base("toast").place().unwrap();

        assert_eq!(receipt.name(), "toast");
        assert_eq!(receipt.cost(), 10);
    }

    #[test]
    fn toppings_apply_in_added_order() {
        let menu = menu();
        let receipt = Order::from_menu(&menu).base("toast").add("cheese").add("ham").place().unwrap();

        assert_eq!(receipt.name(), "toast add Cheese add Ham");
        assert_eq!(receipt.cost(), 35);
    }

    #[test]
    fn total_cost_does_not_depend_on_topping_order() {
        let menu = menu();

        let cheese_first =
            Order::from_menu(&menu).base("hamburger").add("cheese").add("ham").place().unwrap();
        let ham_first =
            Order::from_menu(&menu).base("hamburger").add("ham").add("cheese").place().unwrap();

        assert_eq!(cheese_first.cost(), ham_first.cost());
        assert_ne!(cheese_first.name(), ham_first.name());
    }

    #[test]
    fn repeated_toppings_are_charged_each_time() {
        let menu = menu();
        let receipt =
            Order::from_menu(&menu).base("toast").add("cheese").add("cheese").place().unwrap();

        assert_eq!(receipt.name(), "toast add Cheese add Cheese");
        assert_eq!(receipt.cost(), 30);
    }

    #[test]
    fn order_without_base_is_rejected() {
        let menu = menu();
        let err = Order::from_menu(&menu).add("cheese").place().unwrap_err();

        assert!(matches!(err, OrderError::MissingBase));
    }

    #[test]
    fn unknown_base_is_rejected() {
        let menu = menu();
        let err = Order::from_menu(&menu).base("bagel").place().unwrap_err();

        assert!(matches!(err, OrderError::UnknownBase { name } if name == "bagel"));
    }

    #[test]
    fn unknown_topping_is_rejected() {
        let menu = menu();
        let err = Order::from_menu(&menu).base("toast").add("bacon").place().unwrap_err();

        assert!(matches!(err, OrderError::UnknownTopping { name } if name == "bacon"));
    }

    #[test]
    fn standard_card_serves_the_full_breakfast() {
        let receipt = Order::from_menu(Menu::standard())
            .base("toast")
            .add("cheese")
            .add("ham")
            .place()
            .unwrap();

        assert_eq!(receipt.cost(), 35);
    }
}
