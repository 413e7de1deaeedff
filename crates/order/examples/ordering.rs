//! Placing orders against the standard card by name, including one order
//! that gets rejected.

use bistro_order::{Menu, Order};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let menu = Menu::standard();

    let orders = [
        Order::from_menu(menu).base("toast"),
        Order::from_menu(menu).base("toast").add("cheese"),
        Order::from_menu(menu).base("toast").add("cheese").add("ham"),
        Order::from_menu(menu).base("hamburger").add("cheese"),
        Order::from_menu(menu).base("toast").add("bacon"),
    ];

    for order in orders {
        match order.place() {
            Ok(receipt) => info!(%receipt, "order placed"),
            Err(e) => error!(cause = %e, "order rejected"),
        }
    }
}
