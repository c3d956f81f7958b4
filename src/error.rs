use thiserror::Error;

/// Failure modes for building a record.
///
/// There is exactly one today: a name that does not fit the record's
/// fixed capacity is rejected, never truncated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("name is {len} bytes but a record stores at most {max}")]
    TooLong { len: usize, max: usize },
}
