use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("item label must not be empty")]
    EmptyLabel,
}
