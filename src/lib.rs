//! A fixed capacity vector that stores its elements inline, with no dynamic
//! memory allocation.
//!
//! [`InlineVec<T, N>`] owns an array of `N` uninitialized slots and a count of
//! how many leading slots hold live elements. It never allocates, never
//! reallocates, and never grows past `N`: every insertion checks the capacity
//! first and returns the element back inside a [`CapacityError`] when the
//! vector is full.
//!
//! # Examples
//!
//! ```
//! use inline_vec::InlineVec;
//!
//! let mut xs: InlineVec<u8, 4> = InlineVec::new();
//!
//! assert!(xs.push(0).is_ok());
//! assert!(xs.push(1).is_ok());
//! assert!(xs.push(2).is_ok());
//! assert!(xs.push(3).is_ok());
//! assert!(xs.push(4).is_err()); // full
//!
//! assert_eq!(xs.pop(), Some(3));
//! ```
//!
//! Checked and unchecked access follow the slice conventions: indexing
//! panics on a bad index, [`InlineVec::at`] reports it as an error.
//!
//! ```
//! use inline_vec::{InlineVec, OutOfRange};
//!
//! let xs = InlineVec::<u32, 10>::from_array([1, 2, 3]);
//! assert_eq!(xs[1], 2);
//! assert_eq!(xs.at(3), Err(OutOfRange { index: 3, len: 3 }));
//! ```
//!
//! # `Send`-ness
//!
//! Collections of `Send`-able things are `Send`
//!
//! ```
//! use inline_vec::InlineVec;
//!
//! struct IsSend;
//!
//! unsafe impl Send for IsSend {}
//!
//! fn is_send<T>() where T: Send {}
//!
//! is_send::<InlineVec<IsSend, 4>>();
//! ```
//!
//! Collections of not `Send`-able things are *not* `Send`
//!
//! ``` compile_fail
//! use std::marker::PhantomData;
//! use inline_vec::InlineVec;
//!
//! type NotSend = PhantomData<*const ()>;
//!
//! fn is_send<T>() where T: Send {}
//!
//! is_send::<InlineVec<NotSend, 4>>();
//! ```
//!
//! # Optional features
//!
//! - `serde`: implements `Serialize` and `Deserialize` for [`InlineVec`].
//! - `defmt`: implements `defmt::Format` for [`InlineVec`] and the error types.
//! - `ufmt`: implements `ufmt_write::uWrite` for `InlineVec<u8, N>`.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

#[cfg(test)]
#[macro_use]
mod test_helpers;

pub use error::{CapacityError, Error, OutOfRange};
pub use vec::{InlineVec, IntoIter};

mod error;
pub mod vec;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

#[cfg(feature = "defmt")]
mod defmt;

#[cfg(feature = "ufmt")]
mod ufmt;
