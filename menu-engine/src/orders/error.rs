use crate::store::StoreError;
use shared::error::{AppError, ErrorCode};
use shared::order::OrderStatus;
use thiserror::Error;

/// Order errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Cannot place an order from an empty cart")]
    EmptyCart,

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::EmptyCart => AppError::new(ErrorCode::OrderEmpty),
            OrderError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, format!("Order not found: {id}"))
                    .with_detail("order_id", id)
            }
            OrderError::InvalidTransition { id, from, to } => {
                let code = match from {
                    OrderStatus::Completed => ErrorCode::OrderAlreadyCompleted,
                    OrderStatus::Cancelled => ErrorCode::OrderAlreadyCancelled,
                    OrderStatus::Live => ErrorCode::InvalidStatusTransition,
                };
                AppError::with_message(code, format!("Order {id} cannot move from {from} to {to}"))
                    .with_detail("order_id", id)
                    .with_detail("from", from.as_str())
                    .with_detail("to", to.as_str())
            }
            OrderError::Store(e) => e.into(),
        }
    }
}

pub type OrderResult<T> = Result<T, OrderError>;
