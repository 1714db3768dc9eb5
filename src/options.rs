/// Settings that change how expressions are read.
///
/// The default is permissive: numeral runs are read however they are
/// written, even when they are not canonical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Reject numeral runs that are not in canonical form, such as `IIX`,
    /// `VX` or `XZ`.
    pub strict_numerals: bool,
}

impl Options {
    /// Options with canonical-numeral checking turned on.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict_numerals: true }
    }
}
