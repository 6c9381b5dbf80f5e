/// Capability: the type can produce a newly allocated, independently owned copy
/// of itself.
///
/// Automatically implemented for every [`Clone`] type.
pub trait Clonable {
    fn boxed_clone(&self) -> Box<Self>
    where
        Self: Sized;
}

impl<T: Clone> Clonable for T {
    #[inline]
    fn boxed_clone(&self) -> Box<Self> {
        Box::new(self.clone())
    }
}
