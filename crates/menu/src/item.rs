use crate::error::MenuError;
use std::sync::Arc;

/// The capability every menu item satisfies: a display name and a total price.
///
/// Both operations are pure and total. An item never changes after
/// construction, which is why the trait requires `Send + Sync`: a finished
/// chain can be read concurrently without any locking.
pub trait PricedItem: Send + Sync {
    fn name(&self) -> String;

    /// Total price in whole currency units.
    fn cost(&self) -> u32;
}

impl<T: PricedItem + ?Sized> PricedItem for Box<T> {
    fn name(&self) -> String {
        self.as_ref().name()
    }

    fn cost(&self) -> u32 {
        self.as_ref().cost()
    }
}

impl<T: PricedItem + ?Sized> PricedItem for Arc<T> {
    fn name(&self) -> String {
        self.as_ref().name()
    }

    fn cost(&self) -> u32 {
        self.as_ref().cost()
    }
}

/// A leaf item with a fixed label and price, the end of every topping chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseItem {
    label: String,
    price: u32,
}

impl BaseItem {
    /// Creates a base item, rejecting a blank label at construction time.
    pub fn new(label: impl Into<String>, price: u32) -> Result<Self, MenuError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(MenuError::EmptyLabel);
        }
        Ok(Self { label, price })
    }

    // for catalog entries whose labels are literals, known to be non-empty
    pub(crate) fn known(label: &'static str, price: u32) -> Self {
        Self { label: label.into(), price }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

impl PricedItem for BaseItem {
    fn name(&self) -> String {
        self.label.clone()
    }

    fn cost(&self) -> u32 {
        self.price
    }
}

macro_rules! base_item {
    ($fn_name:ident, $label:literal, $price:literal) => {
        #[inline]
        pub fn $fn_name() -> BaseItem {
            BaseItem::known($label, $price)
        }
    };
}

base_item!(toast, "toast", 10);
base_item!(hamburger, "Hamburger", 20);
