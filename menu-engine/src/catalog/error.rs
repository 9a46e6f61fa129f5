use crate::store::StoreError;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Catalog administration errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Draft or input failed validation; nothing was written
    #[error(transparent)]
    Invalid(#[from] AppError),

    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Category already exists: {0}")]
    CategoryExists(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Invalid(e) => e,
            CatalogError::ItemNotFound(id) => {
                AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item not found: {id}"))
                    .with_detail("item_id", id)
            }
            CatalogError::CategoryNotFound(name) => AppError::with_message(
                ErrorCode::CategoryNotFound,
                format!("Category not found: {name}"),
            )
            .with_detail("category", name),
            CatalogError::CategoryExists(name) => AppError::with_message(
                ErrorCode::CategoryNameExists,
                format!("Category already exists: {name}"),
            )
            .with_detail("category", name),
            CatalogError::Store(e) => e.into(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
