// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types shared by every constructor and conversion in this crate. See
//! [`ColorError`] for details.

/// Type alias for results produced by this crate. A [`ColorError`] converts into a
/// [`miette::Report`] with `?`, so callers working in [`miette::Result`] can use it
/// directly.
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors from constructing or converting color values.
///
/// | Variant             | Cause                                                      | Caller's fault? |
/// | :------------------ | :--------------------------------------------------------- | :-------------- |
/// | [`InvalidArgument`] | Out of range component, malformed hex, short sequence      | Yes             |
/// | [`Internal`]        | A branch assumed to be exhaustive was not (a bug)          | No              |
///
/// No partially valid value is ever returned alongside an error.
///
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`Internal`]: Self::Internal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColorError {
    /// Caller supplied a value outside the documented domain.
    #[error("Invalid argument `{field}`: {message}")]
    #[diagnostic(
        code(r3bl_color_space::invalid_argument),
        help("RGB channels are 0..=255, hue is 0..=360, saturation and value are 0..=100, hex is `#RRGGBB`")
    )]
    InvalidArgument {
        /// Which component or check failed, eg: `"red"`, `"hue"`, `"hex.prefix"`.
        field: &'static str,
        message: String,
    },

    /// An internal invariant was violated. Valid input never produces this.
    #[error("Internal error: {message}")]
    #[diagnostic(
        code(r3bl_color_space::internal),
        help("This is a bug in r3bl_color_space, please report it")
    )]
    Internal { message: String },
}

/// The kind of a [`ColorError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorErrorType {
    InvalidArgument,
    Internal,
}

impl ColorError {
    /// Creates a [`ColorError::InvalidArgument`] and logs it at `debug` level.
    pub fn invalid_argument(field: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(field, reason = %message, "rejected color input");
        Self::InvalidArgument { field, message }
    }

    /// Creates a [`ColorError::Internal`] and logs it at `error` level.
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!(reason = %message, "color invariant violated");
        Self::Internal { message }
    }

    /// [`Self::invalid_argument`] wrapped in `Err`, for use in `return` position.
    pub fn new_invalid_argument_result<T>(
        field: &'static str,
        message: impl Into<String>,
    ) -> ColorResult<T> {
        Err(Self::invalid_argument(field, message))
    }

    pub fn new_internal_result<T>(message: impl Into<String>) -> ColorResult<T> {
        Err(Self::internal(message))
    }

    #[must_use]
    pub fn error_type(&self) -> ColorErrorType {
        match self {
            ColorError::InvalidArgument { .. } => ColorErrorType::InvalidArgument,
            ColorError::Internal { .. } => ColorErrorType::Internal,
        }
    }

    /// The field or check that failed, for [`ColorError::InvalidArgument`] only.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ColorError::InvalidArgument { field, .. } => Some(*field),
            ColorError::Internal { .. } => None,
        }
    }
}

/// Checks that `value` is in `0..=max`, naming `field` in the error otherwise.
pub(crate) fn check_range(field: &'static str, value: i64, max: u16) -> ColorResult<u16> {
    match u16::try_from(value) {
        Ok(it) if it <= max => Ok(it),
        _ => ColorError::new_invalid_argument_result(
            field,
            format!("{value} is out of range 0..={max}"),
        ),
    }
}
