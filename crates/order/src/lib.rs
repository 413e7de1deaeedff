mod error;
mod order;
mod receipt;

pub mod catalog;

pub use catalog::Menu;
pub use error::OrderError;
pub use order::Order;
pub use receipt::Receipt;
