//! Various general-purpose collection types.
//!
//! # Purpose
//! Everything here shares a single storage strategy: a circular buffer over a raw allocation,
//! with the container vocabularies (FIFO, double-ended) expressed as thin naming layers rather
//! than separate data structures.

pub mod ring;
