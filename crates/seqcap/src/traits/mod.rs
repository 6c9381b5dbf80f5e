mod clonable;
mod const_iterable;
mod container;
mod iterable;
mod mut_iterable;
mod printable;
mod random_access;
mod sequence;
mod size;

pub use clonable::*;
pub use const_iterable::*;
pub use container::*;
pub use iterable::*;
pub use mut_iterable::*;
pub use printable::*;
pub use random_access::*;
pub use sequence::*;
pub use size::*;
