use crate::f;

/// Extends float primitives with formatting helpers
pub trait ValueExt {
    /// Consistent scientific number formatting
    ///
    /// The exponent is always signed and zero padded to `exp_pad` digits.
    ///
    /// ```rust
    /// # use tritium_utils::ValueExt;
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(3.5e8_f64.sci(2, 2), "3.50e+08".to_string());
    /// assert_eq!(4.9e-7_f64.sci(1, 3), "4.9e-007".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl ValueExt for f64 {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", self, precision = precision);
        match formatted.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                f!("{mantissa}e{sign}{digits:0>exp_pad$}")
            }
            // NaN and infinities have no exponent
            None => formatted,
        }
    }
}
