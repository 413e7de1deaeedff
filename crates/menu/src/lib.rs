//! Composable priced menu items
//!
//! This crate provides the core abstraction of a breakfast menu: an item that
//! knows its display name and its total price, and toppings that wrap an
//! existing item to produce a new one with an extended name and an increased
//! price. Items are immutable after construction, so a finished chain can be
//! read from any number of threads without locking.
//!
//! # Example
//!
//! ```
//! use bistro_menu::item::{toast, PricedItem};
//! use bistro_menu::topping::{Cheese, Ham, Topping, Toppings};
//!
//! // wrap step by step
//! let breakfast = Ham.apply(Cheese.apply(toast()));
//! assert_eq!(breakfast.name(), "toast add Cheese add Ham");
//! assert_eq!(breakfast.cost(), 35);
//!
//! // or build the combination first and apply it once
//! let combo = Toppings::new(Cheese, Ham);
//! assert_eq!(combo.apply(toast()).cost(), 35);
//! ```
//!
//! # Core Components
//!
//! - [`item::PricedItem`]: the capability every menu item satisfies
//! - [`item::BaseItem`]: a leaf item with a fixed label and price
//! - [`topping::Topping`]: wraps one item into another
//! - [`topping::Topped`]: the wrapped item a condiment produces
//!
//! Construction is the only place an error can occur: labels must be
//! non-empty, see [`MenuError`]. Once a chain is built, [`item::PricedItem::name`]
//! and [`item::PricedItem::cost`] are total and never fail.

pub mod item;
pub mod topping;

mod error;
pub use error::MenuError;
