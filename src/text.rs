//! Value-to-text conversion for attribute values and node values.
//!
//! Everything stored in the tree is a string; these traits define the closed
//! set of input types the builder accepts and how each becomes text.

use std::borrow::Cow;

/// A value that can be written into the tree as XML text.
///
/// String-like inputs pass through unchanged, including the empty string.
/// Booleans become the words `true`/`false`. Integers use plain decimal
/// formatting with no locale grouping. Floats use the shortest
/// round-trippable form, except NaN which is always the literal `nan` —
/// see [`XmlFloat`] for fixed-precision formatting.
pub trait XmlText {
    /// Returns the textual XML representation of the value.
    fn to_xml_text(&self) -> String;
}

impl XmlText for str {
    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}

impl XmlText for &str {
    fn to_xml_text(&self) -> String {
        (*self).to_string()
    }
}

impl XmlText for String {
    fn to_xml_text(&self) -> String {
        self.clone()
    }
}

impl XmlText for Cow<'_, str> {
    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}

impl XmlText for bool {
    fn to_xml_text(&self) -> String {
        if *self { "true".to_string() } else { "false".to_string() }
    }
}

macro_rules! impl_xml_text_for_int {
    ($($ty:ty),+) => {$(
        impl XmlText for $ty {
            fn to_xml_text(&self) -> String {
                self.to_string()
            }
        }
    )+};
}
impl_xml_text_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_xml_text_for_float {
    ($($ty:ty),+) => {$(
        impl XmlText for $ty {
            fn to_xml_text(&self) -> String {
                if self.is_nan() {
                    "nan".to_string()
                } else {
                    self.to_string()
                }
            }
        }
    )+};
}
impl_xml_text_for_float!(f32, f64);

/// A floating-point value that can be written with a fixed number of
/// fractional digits.
///
/// Output uses fixed (non-scientific) notation with exactly `precision`
/// digits after the decimal point. NaN formats as the literal `nan` at any
/// precision.
///
/// Precision is a `usize`, so the negative-precision failure mode of some
/// formatting APIs cannot occur here.
pub trait XmlFloat: XmlText {
    /// Returns the value formatted with exactly `precision` fractional digits.
    fn to_xml_text_fixed(&self, precision: usize) -> String;
}

macro_rules! impl_xml_float {
    ($($ty:ty),+) => {$(
        impl XmlFloat for $ty {
            fn to_xml_text_fixed(&self, precision: usize) -> String {
                if self.is_nan() {
                    "nan".to_string()
                } else {
                    format!("{self:.precision$}")
                }
            }
        }
    )+};
}
impl_xml_float!(f32, f64);
