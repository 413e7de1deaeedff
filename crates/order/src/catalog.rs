//! The menu card: named base items and named toppings.
//!
//! A [`Menu`] maps caller-facing names to the typed values of `bistro-menu`,
//! so orders can be assembled from plain strings. Toppings are stored as
//! boxed apply-functions over `Box<dyn PricedItem>`, which lets one card hold
//! condiments of different concrete types.

use std::collections::HashMap;

use bistro_menu::item::{hamburger, toast, BaseItem, PricedItem};
use bistro_menu::topping::{Cheese, Ham, Topping};
use once_cell::sync::Lazy;

pub(crate) type BoxedItem = Box<dyn PricedItem>;
type BoxedTopping = Box<dyn Fn(BoxedItem) -> BoxedItem + Send + Sync>;

static STANDARD: Lazy<Menu> = Lazy::new(|| {
    Menu::builder()
        .base("toast", toast())
        .base("hamburger", hamburger())
        .topping("cheese", Cheese)
        .topping("ham", Ham)
        .build()
});

pub struct Menu {
    bases: HashMap<String, BaseItem>,
    toppings: HashMap<String, BoxedTopping>,
}

impl Menu {
    pub fn builder() -> MenuBuilder {
        MenuBuilder::new()
    }

    /// The standard breakfast card: toast, hamburger, cheese and ham.
    pub fn standard() -> &'static Menu {
        &STANDARD
    }

    pub fn base(&self, name: &str) -> Option<&BaseItem> {
        self.bases.get(name)
    }

    pub fn has_topping(&self, name: &str) -> bool {
        self.toppings.contains_key(name)
    }

    pub(crate) fn apply_topping(&self, name: &str, item: BoxedItem) -> Option<BoxedItem> {
        self.toppings.get(name).map(|topping| topping(item))
    }
}

pub struct MenuBuilder {
    bases: HashMap<String, BaseItem>,
    toppings: HashMap<String, BoxedTopping>,
}

impl MenuBuilder {
    fn new() -> Self {
        Self { bases: HashMap::new(), toppings: HashMap::new() }
    }

    pub fn base(mut self, name: impl Into<String>, item: BaseItem) -> Self {
        self.bases.insert(name.into(), item);
        self
    }

    pub fn topping<T>(mut self, name: impl Into<String>, topping: T) -> Self
    where
        T: Topping<BoxedItem> + Send + Sync + 'static,
        T::Out: 'static,
    {
        self.toppings.insert(name.into(), Box::new(move |item| Box::new(topping.apply(item))));
        self
    }

    pub fn build(self) -> Menu {
        Menu { bases: self.bases, toppings: self.toppings }
    }
}
