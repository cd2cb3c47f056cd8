use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The failure reported when reading or removing an element from a container that holds no
/// elements. Always recoverable; the container is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Container is empty!")
    }
}

impl Error for EmptyContainer {}

/// The failure reported when a logical index, or the element count of a bulk operation, falls
/// outside the occupied range of a container. The container is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The offending index or requested element count.
    pub index: usize,
    /// The number of elements the container held at the time.
    pub len: usize,
}

impl Display for IndexOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of range for container with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfRange {}

/// Either failure a container operation can produce, for callers who want to propagate both
/// kinds through a single error type.
///
/// # Examples
/// ```
/// use ring_collections::collections::ring::{ContainerError, RingBuffer};
///
/// fn front_plus_nth(ring: &RingBuffer<i32>, n: usize) -> Result<i32, ContainerError> {
///     Ok(ring.front()? + ring.get(n)?)
/// }
///
/// let ring = RingBuffer::from([1, 2, 3]);
/// assert_eq!(front_plus_nth(&ring, 2), Ok(4));
/// assert!(front_plus_nth(&ring, 9).unwrap_err().is_index_out_of_range());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ContainerError {
    /// See [`EmptyContainer`].
    EmptyContainer(EmptyContainer),
    /// See [`IndexOutOfRange`].
    IndexOutOfRange(IndexOutOfRange),
}
