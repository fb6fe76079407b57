// vof-core/src/units.rs

use uom::si::f64::Length as UomLength;

// Public canonical unit types (SI, f64)
pub type Length = UomLength;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metres_are_stored_in_si() {
        assert_eq!(m(2.0).value, 2.0);
        assert_eq!((m(0.5) + m(0.25)).value, 0.75);
    }
}
