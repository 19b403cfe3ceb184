use thiserror::Error;

use crate::constants::{BUCKET_COUNT, EMPTY_VALUE};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("{} marks an empty slot and cannot be stored", EMPTY_VALUE)]
    ReservedValue,
    #[error("bucket {index} is out of range (bucket count is {})", BUCKET_COUNT)]
    BucketOutOfRange { index: usize },
    #[error("invalid set element: {token:?}")]
    Parse { token: String },
}
