//! Domain errors raised while evaluating a function.

/// A value fell outside the domain of a function node.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// `ln` of zero or a negative number.
    #[error("ln({arg}) is undefined")]
    NonPositiveLog { arg: f64 },

    /// `log_N` of zero or a negative number.
    #[error("log_{base}({arg}) is undefined")]
    NonPositiveLogBase { base: u32, arg: f64 },

    /// `log_0` has no meaning for any argument.
    #[error("log_0 is undefined: the base of a logarithm must be positive")]
    ZeroBase,

    /// A node produced infinity or NaN.
    #[error("`{function}` has no finite value at {x}")]
    NonFinite { function: &'static str, x: f64 },
}
