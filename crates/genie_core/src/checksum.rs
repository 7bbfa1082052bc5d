use std::fmt;

use serde::{Deserialize, Serialize};

use crate::buffer::SaveBuffer;
use crate::core_api::{CoreError, CoreResult};
use crate::layout::{
    self, BOX_BLOCK_SIZE, BOX_COUNT, BoxBank, ByteRange, MAIN_CHECKSUM_END, MAIN_CHECKSUM_OFFSET,
    MAIN_CHECKSUM_START,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecksumId {
    Main,
    BankAll(BoxBank),
    /// 1-based box index.
    Box(usize),
}

impl fmt::Display for ChecksumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::BankAll(bank) => write!(f, "bank{}_all", bank.number()),
            Self::Box(index) => write!(f, "box{index}"),
        }
    }
}

/// A checksummed byte range and the byte that stores its checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumRegion {
    pub id: ChecksumId,
    /// Never empty.
    pub covered: ByteRange,
    pub stored_at: usize,
}

impl ChecksumRegion {
    pub fn main() -> Self {
        Self {
            id: ChecksumId::Main,
            covered: ByteRange {
                start: MAIN_CHECKSUM_START,
                end: MAIN_CHECKSUM_END + 1,
            },
            stored_at: MAIN_CHECKSUM_OFFSET,
        }
    }

    pub fn bank_all(bank: BoxBank) -> Self {
        let stored_at = bank.all_checksum_offset();
        Self {
            id: ChecksumId::BankAll(bank),
            covered: ByteRange {
                start: bank.base(),
                end: stored_at,
            },
            stored_at,
        }
    }

    pub fn for_box(box_index: usize) -> CoreResult<Self> {
        let slot = layout::locate_box(box_index)?;
        let base = layout::box_base_offset(box_index)?;
        Ok(Self {
            id: ChecksumId::Box(box_index),
            covered: ByteRange::new(base, BOX_BLOCK_SIZE),
            stored_at: slot.bank.box_checksums_offset() + slot.index_in_bank,
        })
    }

    /// Every region in repair order: boxes, then bank totals, then main.
    pub fn all() -> Vec<Self> {
        let boxes = (1..=BOX_COUNT).filter_map(|index| Self::for_box(index).ok());
        let banks = BoxBank::ALL.into_iter().map(Self::bank_all);
        boxes
            .chain(banks)
            .chain(std::iter::once(Self::main()))
            .collect()
    }

    pub fn compute(&self, buf: &SaveBuffer) -> CoreResult<u8> {
        let last = self.covered.end.checked_sub(1).ok_or_else(|| {
            CoreError::malformed_range(format!("checksum region {} covers no bytes", self.id))
        })?;
        sum_and_invert(buf, self.covered.start, last)
    }

    /// Fails unless both the covered bytes and the stored byte are inside `buf`.
    pub fn require_in(&self, buf: &SaveBuffer) -> CoreResult<()> {
        buf.require_range(self.covered.start, self.covered.len())?;
        buf.require_range(self.stored_at, 1)
    }

    pub fn stored(&self, buf: &SaveBuffer) -> CoreResult<u8> {
        buf.read_u8(self.stored_at)
    }

    pub fn validate(&self, buf: &SaveBuffer) -> CoreResult<bool> {
        Ok(self.stored(buf)? == self.compute(buf)?)
    }

    pub fn fix(&self, buf: &mut SaveBuffer) -> CoreResult<()> {
        let value = self.compute(buf)?;
        buf.write_u8(self.stored_at, value)
    }

    pub fn status(&self, buf: &SaveBuffer) -> CoreResult<ChecksumStatus> {
        let stored = self.stored(buf)?;
        let computed = self.compute(buf)?;
        Ok(ChecksumStatus {
            id: self.id,
            stored,
            computed,
            valid: stored == computed,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumStatus {
    pub id: ChecksumId,
    pub stored: u8,
    pub computed: u8,
    pub valid: bool,
}

/// `!(sum & 0xFF)` over `start..=end`.
pub fn sum_and_invert(buf: &SaveBuffer, start: usize, end: usize) -> CoreResult<u8> {
    if end < start {
        return Err(CoreError::malformed_range(format!(
            "checksum range end {end:#06x} precedes start {start:#06x}"
        )));
    }
    let bytes = buf.view(start, end - start + 1)?;
    let sum = bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    Ok(!sum)
}

pub fn compute_main(buf: &SaveBuffer) -> CoreResult<u8> {
    ChecksumRegion::main().compute(buf)
}

pub fn validate_main(buf: &SaveBuffer) -> CoreResult<bool> {
    ChecksumRegion::main().validate(buf)
}

pub fn fix_main(buf: &mut SaveBuffer) -> CoreResult<()> {
    ChecksumRegion::main().fix(buf)
}

pub fn compute_bank_all(buf: &SaveBuffer, bank: u8) -> CoreResult<u8> {
    ChecksumRegion::bank_all(BoxBank::from_number(bank)?).compute(buf)
}

pub fn validate_bank_all(buf: &SaveBuffer, bank: u8) -> CoreResult<bool> {
    ChecksumRegion::bank_all(BoxBank::from_number(bank)?).validate(buf)
}

pub fn fix_bank_all(buf: &mut SaveBuffer, bank: u8) -> CoreResult<()> {
    ChecksumRegion::bank_all(BoxBank::from_number(bank)?).fix(buf)
}

pub fn compute_box(buf: &SaveBuffer, box_index: usize) -> CoreResult<u8> {
    ChecksumRegion::for_box(box_index)?.compute(buf)
}

pub fn validate_box(buf: &SaveBuffer, box_index: usize) -> CoreResult<bool> {
    ChecksumRegion::for_box(box_index)?.validate(buf)
}

pub fn fix_box(buf: &mut SaveBuffer, box_index: usize) -> CoreResult<()> {
    ChecksumRegion::for_box(box_index)?.fix(buf)
}

/// Rewrites all fifteen stored checksums. Leaves `buf` untouched when any region
/// falls outside it.
pub fn fix_all(buf: &mut SaveBuffer) -> CoreResult<()> {
    let regions = ChecksumRegion::all();
    for region in &regions {
        region.require_in(buf)?;
    }
    for region in regions {
        region.fix(buf)?;
        tracing::trace!(checksum = %region.id, offset = region.stored_at, "checksum rewritten");
    }
    Ok(())
}

pub fn report(buf: &SaveBuffer) -> CoreResult<Vec<ChecksumStatus>> {
    ChecksumRegion::all()
        .iter()
        .map(|region| region.status(buf))
        .collect()
}
