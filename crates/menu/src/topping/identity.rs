use crate::item::PricedItem;
use crate::topping::Topping;

#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityTopping;

impl<I: PricedItem> Topping<I> for IdentityTopping {
    type Out = I;

    #[inline(always)]
    fn apply(&self, item: I) -> Self::Out {
        item
    }
}
