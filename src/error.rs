use thiserror::Error;

use crate::check::QueryError;

#[derive(Debug, Error)]
pub enum FlowerCheckError {
    #[error("Flower name is empty")]
    EmptyFlowerName,

    #[error("{}", .0.user_message())]
    Query(#[from] QueryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
