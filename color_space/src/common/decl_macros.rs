// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Same as [`assert_eq!`] but with a colored diff of `left` and `right` on failure.
#[cfg(test)]
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}
