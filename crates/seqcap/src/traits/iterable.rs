use crate::{ConstIterable, MutIterable};

/// Trait combining read-only and mutable traversal over the same element type.
///
/// Automatically implemented for every type that has both capabilities. No
/// manual implementation is needed.
pub trait Iterable: ConstIterable + MutIterable<Item = <Self as ConstIterable>::Item> {}

impl<T> Iterable for T where T: ?Sized + ConstIterable + MutIterable<Item = <T as ConstIterable>::Item> {}
