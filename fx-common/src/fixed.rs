//! 24.8 signed fixed-point conversion
//!
//! The renderer's `FIXED` type is an `i32` with 8 fractional bits, leaving
//! 23 bits of integer magnitude plus sign.

/// Largest integer magnitude representable in 24.8 fixed point (2^23 - 1).
pub const FX8_MAX_MAGNITUDE: f64 = ((1i32 << 23) - 1) as f64;

/// Convert a decimal value to its 24.8 fixed-point encoding.
///
/// Returns `None` when `ceil(|value|)` exceeds the 23-bit integer
/// magnitude. The bound is checked against the ceiling of the magnitude,
/// not the true encodable range, so a narrow band of values that would
/// still fit is rejected.
///
/// The encoding truncates toward zero, so `to_fx8(-0.3)` is `-76`, not
/// `-77`.
#[inline]
pub fn to_fx8(value: f64) -> Option<i32> {
    if value.abs().ceil() > FX8_MAX_MAGNITUDE {
        return None;
    }
    Some((value * 256.0) as i32)
}

/// Three 24.8 fixed-point components.
///
/// Mirrors the renderer's `Vec3`; used for both vertex positions and
/// vertex normals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FxVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl FxVec3 {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_values() {
        assert_eq!(to_fx8(1.0), Some(256));
        assert_eq!(to_fx8(2.0), Some(512));
        assert_eq!(to_fx8(3.0), Some(768));
        assert_eq!(to_fx8(0.0), Some(0));
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 0.3 * 256 = 76.8
        assert_eq!(to_fx8(0.3), Some(76));
        assert_eq!(to_fx8(-0.3), Some(-76));
        assert_eq!(to_fx8(-1.5), Some(-384));
    }

    #[test]
    fn test_magnitude_boundary() {
        // ceil(8388607.0) == 2^23 - 1 is still in range
        assert_eq!(to_fx8(8388607.0), Some(8388607 << 8));
        assert_eq!(to_fx8(-8388607.0), Some(-(8388607 << 8)));

        // One past the ceiling overflows
        assert_eq!(to_fx8(8388608.0), None);
        assert_eq!(to_fx8(-8388608.0), None);
        assert_eq!(to_fx8(9000000.0), None);
    }

    #[test]
    fn test_fractional_value_near_boundary() {
        // ceil(8388606.5) == 8388607, so the conservative check passes
        assert_eq!(to_fx8(8388606.5), Some((8388606.5 * 256.0) as i32));
        // ceil(8388607.5) == 8388608 is rejected even though the encoded
        // value would still fit in an i32
        assert_eq!(to_fx8(8388607.5), None);
    }
}
