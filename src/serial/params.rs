//! Numeric tokenizer and positional argument assembly.
//!
//! [`Parameter`] pulls one decimal literal off the front of a byte range.
//! [`ParameterSet`] chains that over a tuple, one delimiter byte between
//! values, and fails the whole tuple as soon as any element fails.
//!
//! Used by both serial dispatchers to turn raw parameter bytes into typed
//! handler arguments.
use core::str;

/// One typed value decoded from the front of a byte range.
///
/// Returns the value and the number of bytes its literal occupied, or `None`
/// when the range does not start with a literal of this type.
pub trait Parameter: Sized {
    fn parse(bytes: &[u8]) -> Option<(Self, usize)>;
}

fn int_literal_end(bytes: &[u8]) -> usize {
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return 0;
    }
    end + digits
}

fn float_literal_end(bytes: &[u8]) -> usize {
    let mut end = 0;
    let mut digits = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
        digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return 0;
    }
    end
}

macro_rules! impl_parameter_int {
    ($($int:ty),*) => {
        $(
            impl Parameter for $int {
                fn parse(bytes: &[u8]) -> Option<(Self, usize)> {
                    let end = int_literal_end(bytes);
                    let literal = str::from_utf8(&bytes[..end]).ok()?;
                    let value = literal.parse().ok()?;
                    Some((value, end))
                }
            }
        )*
    };
}

macro_rules! impl_parameter_float {
    ($($float:ty),*) => {
        $(
            impl Parameter for $float {
                fn parse(bytes: &[u8]) -> Option<(Self, usize)> {
                    let end = float_literal_end(bytes);
                    let literal = str::from_utf8(&bytes[..end]).ok()?;
                    let value: $float = literal.parse().ok()?;
                    // Out-of-range literals saturate to infinity in the
                    // conversion; they fail here like integer overflow does.
                    if !value.is_finite() {
                        return None;
                    }
                    Some((value, end))
                }
            }
        )*
    };
}

impl_parameter_int!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);
impl_parameter_float!(f32, f64);

/// An ordered set of parameters assembled from a delimited byte range.
///
/// Implemented for tuples of [`Parameter`] types up to arity 8. The empty
/// tuple always assembles, whatever bytes remain.
pub trait ParameterSet: Sized {
    fn parse_all(bytes: &[u8]) -> Option<Self>;
}

impl ParameterSet for () {
    fn parse_all(_bytes: &[u8]) -> Option<Self> {
        Some(())
    }
}

macro_rules! impl_parameter_set {
    ($(($ty:ident, $val:ident)),+) => {
        impl<$($ty: Parameter),+> ParameterSet for ($($ty,)+) {
            fn parse_all(bytes: &[u8]) -> Option<Self> {
                let mut offset = 0;
                $(
                    // Shortest possible element is one literal byte plus its
                    // delimiter.
                    if bytes.len().saturating_sub(offset) < 2 {
                        return None;
                    }
                    let ($val, used) = <$ty as Parameter>::parse(&bytes[offset..])?;
                    offset += used + 1;
                )+
                let _ = offset;
                Some(($($val,)+))
            }
        }
    };
}

impl_parameter_set!((P1, p1));
impl_parameter_set!((P1, p1), (P2, p2));
impl_parameter_set!((P1, p1), (P2, p2), (P3, p3));
impl_parameter_set!((P1, p1), (P2, p2), (P3, p3), (P4, p4));
impl_parameter_set!((P1, p1), (P2, p2), (P3, p3), (P4, p4), (P5, p5));
impl_parameter_set!((P1, p1), (P2, p2), (P3, p3), (P4, p4), (P5, p5), (P6, p6));
impl_parameter_set!(
    (P1, p1),
    (P2, p2),
    (P3, p3),
    (P4, p4),
    (P5, p5),
    (P6, p6),
    (P7, p7)
);
impl_parameter_set!(
    (P1, p1),
    (P2, p2),
    (P3, p3),
    (P4, p4),
    (P5, p5),
    (P6, p6),
    (P7, p7),
    (P8, p8)
);
