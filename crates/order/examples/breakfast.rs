//! The breakfast card over the typed API: one toast base reused across
//! several topping chains.

use bistro_menu::item::{toast, PricedItem};
use bistro_menu::topping::{Cheese, Ham, Topping};

fn print_item<I: PricedItem>(item: &I) {
    println!("meal: {}", item.name());
    println!("price: {}", item.cost());
}

fn main() {
    let plain = toast();
    print_item(&plain);

    let with_cheese = Cheese.apply(plain.clone());
    print_item(&with_cheese);

    let with_ham = Ham.apply(plain.clone());
    print_item(&with_ham);

    let with_cheese_and_ham = Ham.apply(Cheese.apply(plain));
    print_item(&with_cheese_and_ham);
}
