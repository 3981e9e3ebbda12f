#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const MAPCOLOR_ASSERT_LEVEL_DEFINITION: u8 = MAPCOLOR_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const MAPCOLOR_ASSERT_LEVEL_DEFINITION: u8 = MAPCOLOR_ASSERT_EXTREME;

pub const MAPCOLOR_ASSERT_SIMPLE: u8 = 1;
pub const MAPCOLOR_ASSERT_MODERATE: u8 = 2;
pub const MAPCOLOR_ASSERT_EXTREME: u8 = 3;

/// Returns whether assertions of the provided level are checked in this build.
pub const fn assertions_enabled(level: u8) -> bool {
    MAPCOLOR_ASSERT_LEVEL_DEFINITION >= level
}

#[macro_export]
#[doc(hidden)]
macro_rules! mapcolor_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::MAPCOLOR_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAPCOLOR_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! mapcolor_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::MAPCOLOR_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAPCOLOR_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! mapcolor_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::MAPCOLOR_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAPCOLOR_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! mapcolor_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::MAPCOLOR_ASSERT_LEVEL_DEFINITION >= $crate::asserts::MAPCOLOR_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
