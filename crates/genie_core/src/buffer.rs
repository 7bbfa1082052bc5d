use crate::core_api::{CoreError, CoreResult};

/// Owned save bytes with bounds-checked, offset-addressed access.
///
/// Every accessor validates its whole byte range before touching the data, so a
/// failing call never leaves the buffer half written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveBuffer {
    bytes: Vec<u8>,
}

impl SaveBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Fails unless `[offset, offset + len)` lies inside the buffer.
    /// A zero-length range is always accepted.
    pub fn require_range(&self, offset: usize, len: usize) -> CoreResult<()> {
        if len == 0 {
            return Ok(());
        }
        if offset > self.bytes.len() {
            return Err(CoreError::out_of_range(format!(
                "offset {offset:#06x} is past the end of a {:#06x}-byte buffer",
                self.bytes.len()
            )));
        }
        match offset.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(()),
            _ => Err(CoreError::out_of_range(format!(
                "range {offset:#06x}+{len:#x} exceeds a {:#06x}-byte buffer",
                self.bytes.len()
            ))),
        }
    }

    pub fn read_u8(&self, offset: usize) -> CoreResult<u8> {
        self.require_range(offset, 1)?;
        Ok(self.bytes[offset])
    }

    pub fn read_u16_le(&self, offset: usize) -> CoreResult<u16> {
        self.require_range(offset, 2)?;
        Ok(u16::from_le_bytes([self.bytes[offset], self.bytes[offset + 1]]))
    }

    /// Three bytes, high byte first.
    pub fn read_u24_be(&self, offset: usize) -> CoreResult<u32> {
        self.require_range(offset, 3)?;
        Ok(u32::from_be_bytes([
            0,
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
        ]))
    }

    pub fn write_u8(&mut self, offset: usize, value: u8) -> CoreResult<()> {
        self.require_range(offset, 1)?;
        self.bytes[offset] = value;
        Ok(())
    }

    pub fn write_u16_le(&mut self, offset: usize, value: u16) -> CoreResult<()> {
        self.write_slice(offset, &value.to_le_bytes())
    }

    /// Stores the low 24 bits of `value`, high byte first.
    pub fn write_u24_be(&mut self, offset: usize, value: u32) -> CoreResult<()> {
        let [_, hi, mid, lo] = value.to_be_bytes();
        self.write_slice(offset, &[hi, mid, lo])
    }

    pub fn bit(&self, offset: usize, bit: u8) -> CoreResult<bool> {
        let mask = bit_mask(bit)?;
        Ok((self.read_u8(offset)? & mask) != 0)
    }

    pub fn set_bit(&mut self, offset: usize, bit: u8, value: bool) -> CoreResult<()> {
        let mask = bit_mask(bit)?;
        let current = self.read_u8(offset)?;
        let updated = if value { current | mask } else { current & !mask };
        self.write_u8(offset, updated)
    }

    /// Owned copy of `len` bytes starting at `offset`.
    pub fn slice(&self, offset: usize, len: usize) -> CoreResult<Vec<u8>> {
        Ok(self.view(offset, len)?.to_vec())
    }

    /// Borrowed view of `len` bytes starting at `offset`.
    pub fn view(&self, offset: usize, len: usize) -> CoreResult<&[u8]> {
        self.require_range(offset, len)?;
        if len == 0 {
            return Ok(&[]);
        }
        Ok(&self.bytes[offset..offset + len])
    }

    pub fn write_slice(&mut self, offset: usize, src: &[u8]) -> CoreResult<()> {
        self.require_range(offset, src.len())?;
        if src.is_empty() {
            return Ok(());
        }
        self.bytes[offset..offset + src.len()].copy_from_slice(src);
        Ok(())
    }
}

impl From<Vec<u8>> for SaveBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

fn bit_mask(bit: u8) -> CoreResult<u8> {
    if bit >= 8 {
        return Err(CoreError::out_of_range(format!(
            "bit index {bit} is outside 0..7"
        )));
    }
    Ok(1u8 << bit)
}
