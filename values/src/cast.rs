//! Numeric and logical casts between storage types.
//!
//! Missing values propagate: NA in gives NA out. A double or wide integer
//! that does not fit a 32-bit integer becomes NA, and a warning is logged.
//! `i32::MIN` is reserved as the host's integer NA and is treated as out of
//! range.

/// Cast `self` into the storage type `Target`.
pub trait CastTo<Target> {
    fn cast_to(self) -> Target;
}

/// Free-function form of [`CastTo::cast_to`].
pub fn cast<S: CastTo<T>, T>(source: S) -> T {
    source.cast_to()
}

const INT_RANGE: core::ops::RangeInclusive<f64> = (i32::MIN as f64 + 1.0)..=(i32::MAX as f64);

fn double_to_integer(x: f64) -> Option<i32> {
    if x.is_nan() {
        return None;
    }
    let truncated = x.trunc();
    if INT_RANGE.contains(&truncated) {
        Some(truncated as i32)
    } else {
        tracing::warn!(value = x, "NAs introduced by coercion to integer range");
        None
    }
}

fn wide_to_integer(x: i64) -> Option<i32> {
    match i32::try_from(x) {
        Ok(v) if v != i32::MIN => Some(v),
        _ => {
            tracing::warn!(value = x, "NAs introduced by coercion to integer range");
            None
        }
    }
}

fn double_to_logical(x: f64) -> Option<bool> {
    if x.is_nan() { None } else { Some(x != 0.0) }
}

fn integer_to_double(x: Option<i32>) -> f64 {
    x.map_or(f64::NAN, f64::from)
}

fn logical_to_double(x: Option<bool>) -> f64 {
    x.map_or(f64::NAN, |b| if b { 1.0 } else { 0.0 })
}

macro_rules! cast_impls {
    ($($src:ty => |$x:ident| {
        logical: $logical:expr,
        integer: $integer:expr,
        double: $double:expr $(,)?
    })*) => {
        $(
            impl CastTo<Option<bool>> for $src {
                fn cast_to(self) -> Option<bool> {
                    let $x = self;
                    $logical
                }
            }

            impl CastTo<Option<i32>> for $src {
                fn cast_to(self) -> Option<i32> {
                    let $x = self;
                    $integer
                }
            }

            impl CastTo<f64> for $src {
                fn cast_to(self) -> f64 {
                    let $x = self;
                    $double
                }
            }
        )*
    };
}

cast_impls! {
    bool => |x| {
        logical: Some(x),
        integer: Some(i32::from(x)),
        double: logical_to_double(Some(x)),
    }
    Option<bool> => |x| {
        logical: x,
        integer: x.map(i32::from),
        double: logical_to_double(x),
    }
    i32 => |x| {
        logical: Some(x != 0),
        integer: wide_to_integer(i64::from(x)),
        double: f64::from(x),
    }
    Option<i32> => |x| {
        logical: x.map(|v| v != 0),
        integer: x,
        double: integer_to_double(x),
    }
    i64 => |x| {
        logical: Some(x != 0),
        integer: wide_to_integer(x),
        double: x as f64,
    }
    usize => |x| {
        logical: Some(x != 0),
        integer: wide_to_integer(i64::try_from(x).unwrap_or(i64::MAX)),
        double: x as f64,
    }
    f64 => |x| {
        logical: double_to_logical(x),
        integer: double_to_integer(x),
        double: x,
    }
    f32 => |x| {
        logical: double_to_logical(f64::from(x)),
        integer: double_to_integer(f64::from(x)),
        double: f64::from(x),
    }
}
