//! A module containing [`RingBuffer`], its storage layer and its iterators.
//!
//! [`Iter`], [`IterMut`] and [`IntoIter`] all yield elements in logical order, front to
//! back, regardless of where the occupied arc sits in physical storage.
//!
//! [`RingBuffer`] is also re-exported under the parent module.

mod iter;
mod ring_buffer;
mod slots;

pub use iter::*;
pub use ring_buffer::*;
pub(crate) use slots::*;
