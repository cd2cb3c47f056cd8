//! This crate is my take on the classic teaching containers, rebuilt around the one piece of
//! them that is actually interesting: a resizable circular buffer.
//!
//! # Purpose
//! Most of the linear containers that come up in interviews (stacks, queues, deques) are thin
//! exercises in pointer or slice manipulation. The exception is the circular-buffer-backed
//! queue/deque, whose correctness rests on index wraparound arithmetic and a growth/shrink
//! policy with amortized cost guarantees. This crate implements that core once, as
//! [`RingBuffer`](collections::ring::RingBuffer), and layers the FIFO and double-ended
//! vocabularies over it as thin wrappers instead of duplicating the buffer per container.
//!
//! # Method
//! The buffer manages its own allocation rather than delegating to [`Vec`] or
//! [`VecDeque`](std::collections::VecDeque); writing the slot arithmetic and the resize policy
//! by hand is the whole point. I've been careful with the unsafe code involved and every block
//! carries its reasoning, but the safe API is the contract: no operation panics on an empty or
//! too-short container, they all return typed errors instead.
//!
//! # Error Handling
//! Failure here is strongly typed and strictly recoverable. Operations that read or remove
//! from an empty container return [`EmptyContainer`](collections::ring::EmptyContainer), and
//! indexed or bulk operations that reach past the occupied range return
//! [`IndexOutOfRange`](collections::ring::IndexOutOfRange). Both are plain structs
//! implementing [`Error`](std::error::Error), with an enum
//! ([`ContainerError`](collections::ring::ContainerError)) for callers who want to funnel
//! both through one `?`. A failing operation never leaves the container partially modified.
//!
//! The only panics in the crate are the allocation-layer ones that every growable container
//! shares: allocation-size overflow past [`isize::MAX`] and allocator failure.
//!
//! # Dependencies
//! This crate also depends on some derive macros because they're helpful and remove the need
//! for some very repetitive programming.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
