use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Cart errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Item is sold out: {0}")]
    SoldOut(String),

    #[error("Cart line not found: {0}")]
    LineNotFound(String),
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::SoldOut(id) => {
                AppError::with_message(ErrorCode::ItemSoldOut, format!("Item is sold out: {id}"))
                    .with_detail("item_id", id)
            }
            CartError::LineNotFound(key) => AppError::with_message(
                ErrorCode::CartLineNotFound,
                format!("Cart line not found: {key}"),
            ),
        }
    }
}

pub type CartResult<T> = Result<T, CartError>;
