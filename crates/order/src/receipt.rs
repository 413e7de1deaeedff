use std::fmt::{self, Display, Formatter};

use bistro_menu::item::PricedItem;
use serde::Serialize;

/// The presentable outcome of a placed order: final name and total cost,
/// read once from the finished topping chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    name: String,
    cost: u32,
}

impl Receipt {
    pub fn of<I>(item: &I) -> Self
    where
        I: PricedItem + ?Sized,
    {
        Self { name: item.name(), cost: item.cost() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Display for Receipt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.cost)
    }
}
