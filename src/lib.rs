//! A double-ended queue (deque) backed by a doubly-linked list, with
//! constant time insertion and removal at both ends and forward
//! iteration.
//!
//! Internally, the nodes of the list live in a `Vec` and refer to
//! their neighbours by index, so no node is ever owned from two
//! directions.
//!
//! As items are removed from the deque, their slots in the `Vec` are
//! put on an internal free list. This free list is used when items
//! are inserted before the internal `Vec` is expanded.
//!
//! # Examples
//!
//! ```
//! use linked_deque::{Deque, Error};
//!
//! let mut d = Deque::new();
//! d.add_last(Some(2)).unwrap();
//! d.add_first(Some(1)).unwrap();
//!
//! assert_eq!(vec![&1, &2], d.iter().collect::<Vec<_>>());
//! assert_eq!(Ok(2), d.remove_last());
//! assert_eq!(Ok(1), d.remove_last());
//! assert_eq!(Err(Error::EmptyCollection), d.remove_first());
//! ```

mod deque;
mod error;
mod iterators;
mod slot;

pub use crate::deque::Deque;
pub use crate::error::{Error, Result};
pub use crate::iterators::{IntoIter, Iter};
