//! Address identity for `same()`.
//!
//! Reference-like values expose the address they point at. Plain values
//! have no meaningful address, so `same()` falls back to deep equality for
//! them: two separately built `ByValue(Example { value: 1 })` are the same.

use std::ptr::{self, NonNull};
use std::rc::Rc;
use std::sync::Arc;

pub trait Identity {
    /// The address this value points at, or `None` for plain values.
    fn address(&self) -> Option<usize>;
}

fn addr<T: ?Sized>(ptr: *const T) -> usize {
    ptr.cast::<()>().addr()
}

impl<T: ?Sized> Identity for &T {
    fn address(&self) -> Option<usize> {
        Some(addr(ptr::from_ref::<T>(*self)))
    }
}

impl<T: ?Sized> Identity for &mut T {
    fn address(&self) -> Option<usize> {
        Some(addr(ptr::from_ref::<T>(&**self)))
    }
}

impl<T: ?Sized> Identity for Box<T> {
    fn address(&self) -> Option<usize> {
        Some(addr(ptr::from_ref::<T>(&**self)))
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn address(&self) -> Option<usize> {
        Some(addr(Rc::as_ptr(self)))
    }
}

impl<T: ?Sized> Identity for Arc<T> {
    fn address(&self) -> Option<usize> {
        Some(addr(Arc::as_ptr(self)))
    }
}

impl<T: ?Sized> Identity for *const T {
    fn address(&self) -> Option<usize> {
        Some(addr(*self))
    }
}

impl<T: ?Sized> Identity for *mut T {
    fn address(&self) -> Option<usize> {
        Some(addr(self.cast_const()))
    }
}

impl<T: ?Sized> Identity for NonNull<T> {
    fn address(&self) -> Option<usize> {
        Some(addr(self.as_ptr().cast_const()))
    }
}

/// `None` sits at the null address; `Some` takes the identity of its content.
impl<T: Identity> Identity for Option<T> {
    fn address(&self) -> Option<usize> {
        self.as_ref().map_or(Some(0), Identity::address)
    }
}

/// Wraps a plain value so it can be compared with `same()` by value, or
/// handed to `nil()`, which always finds it present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByValue<T>(pub T);

impl<T> Identity for ByValue<T> {
    fn address(&self) -> Option<usize> {
        None
    }
}

macro_rules! by_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identity for $ty {
                fn address(&self) -> Option<usize> {
                    None
                }
            }
        )+
    };
}

by_value!(
    (), bool, char, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64,
);

impl<T> Identity for Vec<T> {
    fn address(&self) -> Option<usize> {
        None
    }
}
