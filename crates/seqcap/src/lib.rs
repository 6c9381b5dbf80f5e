#![doc = include_str!("../README.md")]

#[cfg(feature = "derive")]
pub use seqcap_derive::{ConstIterable, MutIterable, RandomAccess, Sequence, Size};

mod error;
mod list;
mod traits;
mod view;

pub use error::*;
pub use list::*;
pub use traits::*;
pub use view::*;
