/// Clamp a generic value between two other values.
#[inline(always)]
pub fn clamp_generic<T: PartialOrd>(x: T, lo: T, hi: T) -> T {
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

/// Float helpers shared by the conversion and presentation code.
/// Everything in the color model runs on f64, so this is only
/// implemented there.
pub trait Float: Copy + PartialOrd {
    const ZERO: Self;

    fn is_nan(self) -> bool;

    /// Clamp into `[lo, hi]`, mapping NaN to zero first.
    ///
    /// `f64::clamp` would hand NaN straight back, and a NaN channel
    /// must never reach the stored color.
    fn clamp_domain(self, lo: Self, hi: Self) -> Self {
        let x = if self.is_nan() { Self::ZERO } else { self };
        clamp_generic(x, lo, hi)
    }

    /// Round half up into a u8, saturating at both ends.
    fn round_u8(self) -> u8;
}

impl Float for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn round_u8(self) -> u8 {
        // inputs are already clamped, `as` saturates anyway
        (self + 0.5).floor().clamp_domain(0.0, 255.0) as u8
    }
}
