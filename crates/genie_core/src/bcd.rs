use crate::buffer::SaveBuffer;
use crate::core_api::{CoreError, CoreResult};

pub const BCD3_MAX: u32 = 999_999;
pub const BCD2_MAX: u16 = 9_999;

pub fn read_bcd3(buf: &SaveBuffer, offset: usize) -> CoreResult<u32> {
    read_packed(buf, offset, 3)
}

pub fn write_bcd3(buf: &mut SaveBuffer, offset: usize, value: u32) -> CoreResult<()> {
    if value > BCD3_MAX {
        return Err(CoreError::domain_range(format!(
            "BCD3 value must be 0..{BCD3_MAX}, got {value}"
        )));
    }
    write_packed(buf, offset, &pack::<3>(value))
}

pub fn read_bcd2(buf: &SaveBuffer, offset: usize) -> CoreResult<u16> {
    // Four digits never exceed 9999.
    read_packed(buf, offset, 2).map(|v| v as u16)
}

pub fn write_bcd2(buf: &mut SaveBuffer, offset: usize, value: u16) -> CoreResult<()> {
    if value > BCD2_MAX {
        return Err(CoreError::domain_range(format!(
            "BCD2 value must be 0..{BCD2_MAX}, got {value}"
        )));
    }
    write_packed(buf, offset, &pack::<2>(u32::from(value)))
}

/// Nibbles above 9 read as digit 0.
fn digit(nibble: u8) -> u32 {
    if nibble <= 9 { u32::from(nibble) } else { 0 }
}

fn read_packed(buf: &SaveBuffer, offset: usize, width: usize) -> CoreResult<u32> {
    let bytes = buf.view(offset, width)?;
    Ok(bytes
        .iter()
        .fold(0u32, |acc, &b| acc * 100 + digit(b >> 4) * 10 + digit(b & 0x0F)))
}

fn pack<const N: usize>(value: u32) -> [u8; N] {
    let mut out = [0u8; N];
    let mut rest = value;
    for byte in out.iter_mut().rev() {
        let lo = (rest % 10) as u8;
        let hi = ((rest / 10) % 10) as u8;
        *byte = (hi << 4) | lo;
        rest /= 100;
    }
    out
}

fn write_packed(buf: &mut SaveBuffer, offset: usize, bytes: &[u8]) -> CoreResult<()> {
    buf.write_slice(offset, bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_api::CoreErrorCode;

    #[test]
    fn bcd3_reads_most_significant_nibble_first() {
        let buf = SaveBuffer::new(vec![0x12, 0x34, 0x56]);
        assert_eq!(read_bcd3(&buf, 0).unwrap(), 123_456);
    }

    #[test]
    fn invalid_nibbles_read_as_zero() {
        let buf = SaveBuffer::new(vec![0xFA, 0x3B, 0x9C]);
        assert_eq!(read_bcd3(&buf, 0).unwrap(), 3_090);
        assert_eq!(read_bcd2(&buf, 1).unwrap(), 3_090);
    }

    #[test]
    fn bcd3_round_trips_boundaries() {
        let mut buf = SaveBuffer::new(vec![0u8; 3]);
        for value in [0, 1, 9, 10, 99, 100, 3_000, 65_535, 500_001, BCD3_MAX] {
            write_bcd3(&mut buf, 0, value).unwrap();
            assert_eq!(read_bcd3(&buf, 0).unwrap(), value);
        }
        write_bcd3(&mut buf, 0, 999_999).unwrap();
        assert_eq!(buf.as_bytes(), &[0x99, 0x99, 0x99]);
    }

    #[test]
    fn bcd2_round_trips_boundaries() {
        let mut buf = SaveBuffer::new(vec![0u8; 2]);
        for value in [0, 7, 50, 1_234, BCD2_MAX] {
            write_bcd2(&mut buf, 0, value).unwrap();
            assert_eq!(read_bcd2(&buf, 0).unwrap(), value);
        }
        write_bcd2(&mut buf, 0, 1_234).unwrap();
        assert_eq!(buf.as_bytes(), &[0x12, 0x34]);
    }

    #[test]
    fn writes_above_maximum_fail_without_touching_bytes() {
        let mut buf = SaveBuffer::new(vec![0x11, 0x22, 0x33]);
        let err = write_bcd3(&mut buf, 0, 1_000_000).unwrap_err();
        assert_eq!(err.code, CoreErrorCode::DomainRange);
        let err = write_bcd2(&mut buf, 0, 10_000).unwrap_err();
        assert_eq!(err.code, CoreErrorCode::DomainRange);
        assert_eq!(buf.as_bytes(), &[0x11, 0x22, 0x33]);
    }

    #[test]
    fn truncated_field_is_out_of_range() {
        let mut buf = SaveBuffer::new(vec![0u8; 2]);
        assert_eq!(
            read_bcd3(&buf, 0).unwrap_err().code,
            CoreErrorCode::OutOfRange
        );
        assert!(write_bcd3(&mut buf, 0, 5).is_err());
        assert_eq!(buf.as_bytes(), &[0, 0]);
    }
}
