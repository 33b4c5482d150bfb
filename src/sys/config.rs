use const_default::ConstDefault;

/// Highest number of Taylor terms (after the linear one) that [`super::float::sin_with`] will evaluate.
pub const MAX_SIN_TERMS: usize = 7;

/// Which literal table the sine series draws its reciprocal factorials from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coefficients {
    /// Reciprocal factorials rounded through `f32` before widening.
    ///
    /// This is what existing callers were tuned against.
    #[default]
    Single,
    /// Reciprocal factorials at full `f64` precision.
    Double,
}

/// How far an angle is folded before the sine series is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeReduction {
    /// `fmod(angle, 2π)`. Leaves the argument in `(-2π, 2π)`, where the
    /// series loses accuracy toward the ends.
    #[default]
    FullPeriod,
    /// `fmod(angle, 2π)` followed by a fold into `[-π, π]`.
    HalfPeriod,
}

/// Tuning knobs for the floating point routines.
///
/// Every field only changes a fixed iteration or term count; nothing here
/// makes the run time depend on the input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathConfig {
    sin_terms: usize,
    coefficients: Coefficients,
    reduction: RangeReduction,
    sqrt_iterations: u32,
}

impl ConstDefault for MathConfig {
    const DEFAULT: Self = Self {
        sin_terms: MAX_SIN_TERMS,
        coefficients: Coefficients::Single,
        reduction: RangeReduction::FullPeriod,
        sqrt_iterations: 10,
    };
}

impl Default for MathConfig {
    fn default() -> Self {
        <Self as ConstDefault>::DEFAULT
    }
}

impl MathConfig {
    /// Same as [`ConstDefault::DEFAULT`], reachable without importing the trait.
    pub const DEFAULT: Self = <Self as ConstDefault>::DEFAULT;

    /// The default tables and reduction with double precision coefficients and
    /// half period folding.
    pub const PRECISE: Self = Self::DEFAULT
        .with_coefficients(Coefficients::Double)
        .with_reduction(RangeReduction::HalfPeriod);

    #[inline]
    pub const fn sin_terms(&self) -> usize {
        self.sin_terms
    }

    #[inline]
    pub const fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    #[inline]
    pub const fn reduction(&self) -> RangeReduction {
        self.reduction
    }

    #[inline]
    pub const fn sqrt_iterations(&self) -> u32 {
        self.sqrt_iterations
    }

    /// Values above [`MAX_SIN_TERMS`] are clamped.
    #[inline]
    pub const fn with_sin_terms(mut self, terms: usize) -> Self {
        self.sin_terms = if terms > MAX_SIN_TERMS { MAX_SIN_TERMS } else { terms };
        self
    }

    #[inline]
    pub const fn with_coefficients(mut self, coefficients: Coefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    #[inline]
    pub const fn with_reduction(mut self, reduction: RangeReduction) -> Self {
        self.reduction = reduction;
        self
    }

    #[inline]
    pub const fn with_sqrt_iterations(mut self, iterations: u32) -> Self {
        self.sqrt_iterations = iterations;
        self
    }
}
