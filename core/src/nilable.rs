//! Absence detection for `nil()`.

use std::fmt::Debug;
use std::ptr::NonNull;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

use crate::identity::ByValue;

/// A value that can report whether it is absent.
///
/// Smart pointers and references delegate to what they point at, so absence
/// survives type erasure: a `Box<dyn Nilable>` holding `None` is nil.
pub trait Nilable: Debug {
    fn is_nil(&self) -> bool;
}

impl<T: Debug> Nilable for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nilable for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for NonNull<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

/// A weak pointer is nil once its value has been dropped.
impl<T: ?Sized> Nilable for rc::Weak<T> {
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: ?Sized> Nilable for sync::Weak<T> {
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

macro_rules! delegate_nilable {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T: Nilable + ?Sized> Nilable for $ptr {
                fn is_nil(&self) -> bool {
                    (**self).is_nil()
                }
            }
        )+
    };
}

delegate_nilable!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! never_nil {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Nilable for $ty {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )+
    };
}

never_nil!(
    (), bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: Debug> Nilable for [T] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: Debug> Nilable for Vec<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: Debug, const N: usize> Nilable for [T; N] {
    fn is_nil(&self) -> bool {
        false
    }
}

/// A wrapped value is always present, whatever its type.
impl<T: Debug> Nilable for ByValue<T> {
    fn is_nil(&self) -> bool {
        false
    }
}
