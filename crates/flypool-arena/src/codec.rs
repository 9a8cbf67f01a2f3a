//! Primitive codec over byte-addressed record storage.
//!
//! All multi-byte values are stored little-endian and need no alignment.
//! Both backing strategies are read through this module: byte arrays
//! directly, double arrays through a byte view of their `f64` buffer.
//!
//! Offsets are absolute byte positions in the slice. An offset whose value
//! would run past the end of the slice panics.

/// Copy `N` bytes starting at `offset` into an array.
#[inline]
fn read<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut buf = [0u8; N];
    buf.copy_from_slice(&data[offset..offset + N]);
    buf
}

#[inline]
fn write<const N: usize>(data: &mut [u8], offset: usize, bytes: [u8; N]) {
    data[offset..offset + N].copy_from_slice(&bytes);
}

/// Read one byte.
#[inline]
pub fn get_byte(data: &[u8], offset: usize) -> u8 {
    data[offset]
}

/// Write one byte.
#[inline]
pub fn put_byte(data: &mut [u8], offset: usize, value: u8) {
    data[offset] = value;
}

/// Read a boolean stored as one byte.
#[inline]
pub fn get_bool(data: &[u8], offset: usize) -> bool {
    data[offset] != 0
}

/// Write a boolean as one byte (`1` or `0`).
#[inline]
pub fn put_bool(data: &mut [u8], offset: usize, value: bool) {
    data[offset] = u8::from(value);
}

/// Read an `i32`.
#[inline]
pub fn get_int(data: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(read(data, offset))
}

/// Write an `i32`.
#[inline]
pub fn put_int(data: &mut [u8], offset: usize, value: i32) {
    write(data, offset, value.to_le_bytes());
}

/// Read an `i64`.
#[inline]
pub fn get_long(data: &[u8], offset: usize) -> i64 {
    i64::from_le_bytes(read(data, offset))
}

/// Write an `i64`.
#[inline]
pub fn put_long(data: &mut [u8], offset: usize, value: i64) {
    write(data, offset, value.to_le_bytes());
}

/// Read an `f32`.
#[inline]
pub fn get_float(data: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes(read(data, offset))
}

/// Write an `f32`.
#[inline]
pub fn put_float(data: &mut [u8], offset: usize, value: f32) {
    write(data, offset, value.to_le_bytes());
}

/// Read an `f64`.
#[inline]
pub fn get_double(data: &[u8], offset: usize) -> f64 {
    f64::from_le_bytes(read(data, offset))
}

/// Write an `f64`.
#[inline]
pub fn put_double(data: &mut [u8], offset: usize, value: f64) {
    write(data, offset, value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_is_little_endian() {
        let mut buf = [0u8; 8];
        put_int(&mut buf, 2, 0x0403_0201);
        assert_eq!(buf, [0, 0, 1, 2, 3, 4, 0, 0]);
        assert_eq!(get_int(&buf, 2), 0x0403_0201);
    }

    #[test]
    fn unaligned_long_and_double() {
        let mut buf = [0u8; 24];
        put_long(&mut buf, 3, -7_000_000_000);
        put_double(&mut buf, 13, std::f64::consts::E);
        assert_eq!(get_long(&buf, 3), -7_000_000_000);
        assert_eq!(get_double(&buf, 13), std::f64::consts::E);
    }

    #[test]
    fn float_preserves_bits() {
        let mut buf = [0u8; 4];
        put_float(&mut buf, 0, -0.0);
        assert_eq!(get_float(&buf, 0).to_bits(), (-0.0f32).to_bits());
        put_float(&mut buf, 0, f32::NAN);
        assert!(get_float(&buf, 0).is_nan());
    }

    #[test]
    fn bool_reads_any_non_zero_as_true() {
        let mut buf = [0u8; 2];
        put_bool(&mut buf, 0, true);
        assert_eq!(buf[0], 1);
        put_byte(&mut buf, 1, 0x80);
        assert!(get_bool(&buf, 1));
        put_bool(&mut buf, 1, false);
        assert!(!get_bool(&buf, 1));
        assert_eq!(get_byte(&buf, 0), 1);
    }

    #[test]
    fn codec_over_double_buffer_view() {
        let mut doubles = vec![0.0f64; 2];
        {
            let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut doubles);
            // Straddles the boundary between the two doubles.
            put_int(bytes, 6, 77);
        }
        let bytes: &[u8] = bytemuck::cast_slice(&doubles);
        assert_eq!(get_int(bytes, 6), 77);
        assert_eq!(&bytes[6..10], &[77, 0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn read_past_end_panics() {
        let buf = [0u8; 4];
        get_int(&buf, 1);
    }
}
