//! Utilities functions which do not linked to domain

use std::ops::{Div, Rem};

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Strip the given character from the beginning or the end
pub(crate) trait StripChar {
    /// Strip the character from the beginning
    fn strip_prefix_char(self, ch: char) -> Option<String>;
    /// Strip the character from the end
    fn strip_suffix_char(self, ch: char) -> Option<String>;
    /// Split into the first character and the rest of the string
    fn split_first(self) -> Option<(char, String)>;
    /// Split into the last character and the rest of the string
    fn split_last(self) -> Option<(String, char)>;
}

impl StripChar for &str {
    fn strip_prefix_char(self, ch: char) -> Option<String> {
        self.strip_prefix(ch).map(ToString::to_string)
    }

    fn strip_suffix_char(self, ch: char) -> Option<String> {
        self.strip_suffix(ch).map(ToString::to_string)
    }

    fn split_first(self) -> Option<(char, String)> {
        self.chars().next().and_then(|head| {
            self.strip_prefix_char(head)
                .map(|stripped| (head, stripped))
        })
    }

    fn split_last(self) -> Option<(String, char)> {
        self.chars().last().and_then(|tail| {
            self.strip_suffix_char(tail)
                .map(|stripped| (stripped, tail))
        })
    }
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}
