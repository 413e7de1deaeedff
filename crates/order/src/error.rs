use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order has no base item")]
    MissingBase,

    #[error("base item is not on the menu: {name}")]
    UnknownBase { name: String },

    #[error("topping is not on the menu: {name}")]
    UnknownTopping { name: String },
}

impl OrderError {
    pub fn unknown_base<S: ToString>(name: S) -> Self {
        Self::UnknownBase { name: name.to_string() }
    }

    pub fn unknown_topping<S: ToString>(name: S) -> Self {
        Self::UnknownTopping { name: name.to_string() }
    }
}
