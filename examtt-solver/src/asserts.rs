//! Leveled assertion macros; the moderate and extreme levels are only compiled
//! in when running tests or when the `debug-checks` feature is enabled.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const EXAMTT_ASSERT_LEVEL_DEFINITION: u8 = EXAMTT_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const EXAMTT_ASSERT_LEVEL_DEFINITION: u8 = EXAMTT_ASSERT_EXTREME;

pub const EXAMTT_ASSERT_SIMPLE: u8 = 1;
pub const EXAMTT_ASSERT_MODERATE: u8 = 2;
pub const EXAMTT_ASSERT_EXTREME: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! examtt_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::EXAMTT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::EXAMTT_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! examtt_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::EXAMTT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::EXAMTT_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! examtt_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::EXAMTT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::EXAMTT_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! examtt_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::EXAMTT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::EXAMTT_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
