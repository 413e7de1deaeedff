use crate::error::MenuError;
use crate::item::PricedItem;
use crate::topping::Topping;

/// An item with one topping applied.
///
/// Owns the wrapped item exclusively and derives name and cost from it:
/// the name gets ` add {label}` appended, the cost gets the surcharge added.
/// Evaluation only ever looks one layer down, so a chain of depth `n`
/// evaluates in `O(n)`.
pub struct Topped<I: PricedItem> {
    inner: I,
    label: String,
    surcharge: u32,
}

impl<I: PricedItem> Topped<I> {
    /// Wraps an item, rejecting a blank label at construction time.
    pub fn new(inner: I, label: impl Into<String>, surcharge: u32) -> Result<Self, MenuError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(MenuError::EmptyLabel);
        }
        Ok(Self { inner, label, surcharge })
    }

    // for condiments whose labels are literals, known to be non-empty
    pub(crate) fn known(inner: I, label: &'static str, surcharge: u32) -> Self {
        Self { inner, label: label.into(), surcharge }
    }

    /// Unwraps the item this topping was applied to.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: PricedItem> PricedItem for Topped<I> {
    fn name(&self) -> String {
        format!("{} add {}", self.inner.name(), self.label)
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + self.surcharge
    }
}

macro_rules! condiment {
    ($name:ident, $label:literal, $surcharge:literal) => {
        #[derive(Default, Clone, Copy, Debug)]
        pub struct $name;

        impl $name {
            pub const LABEL: &'static str = $label;
            pub const SURCHARGE: u32 = $surcharge;
        }

        impl<I: PricedItem> Topping<I> for $name {
            type Out = Topped<I>;

            fn apply(&self, item: I) -> Self::Out {
                Topped::known(item, Self::LABEL, Self::SURCHARGE)
            }
        }
    };
}

condiment!(Cheese, "Cheese", 10);
condiment!(Ham, "Ham", 15);
