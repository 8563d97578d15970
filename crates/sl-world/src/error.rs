//! World construction errors.

use thiserror::Error;

use crate::ObjectKind;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("{kind} #{index} has an invalid footprint {width}x{height}")]
    InvalidFootprint {
        kind:   ObjectKind,
        index:  usize,
        width:  f64,
        height: f64,
    },

    #[error("{kind} #{index} has a non-finite position")]
    InvalidPosition { kind: ObjectKind, index: usize },

    #[error("{count} objects exceed the object id range")]
    TooManyObjects { count: usize },
}

pub type WorldResult<T> = Result<T, WorldError>;
