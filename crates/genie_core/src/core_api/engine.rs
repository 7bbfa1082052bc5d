use crate::buffer::SaveBuffer;
use crate::checksum::{self, ChecksumRegion, ChecksumStatus};
use crate::gen1::sections;
use crate::validate;

use super::error::CoreResult;
use super::types::{
    BoxStats, FlagSummary, HallOfFameEntry, Integrity, IntegrityIssue, PokedexSummary,
    TrainerSummary,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine {
    strict_size: bool,
}

/// An opened save. Every query reads straight from the owned bytes, so edits
/// through [`Session::buffer_mut`] are visible to the next call.
#[derive(Debug, Clone)]
pub struct Session {
    buffer: SaveBuffer,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject inputs that are not exactly 32 KiB.
    pub fn with_strict_size(mut self, strict: bool) -> Self {
        self.strict_size = strict;
        self
    }

    pub fn open_bytes<B: Into<Vec<u8>>>(&self, bytes: B) -> CoreResult<Session> {
        let buffer = SaveBuffer::new(bytes.into());
        if self.strict_size {
            validate::require_expected_size(&buffer)?;
        } else if !validate::has_expected_size(&buffer) {
            tracing::debug!(len = buffer.len(), "opening save with unexpected size");
        }
        Ok(Session { buffer })
    }
}

impl Session {
    pub fn buffer(&self) -> &SaveBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut SaveBuffer {
        &mut self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer.into_bytes()
    }

    pub fn trainer(&self) -> CoreResult<TrainerSummary> {
        sections::read_trainer(&self.buffer)
    }

    pub fn box_stats(&self, box_index: usize) -> CoreResult<BoxStats> {
        sections::read_box_stats(&self.buffer, box_index)
    }

    pub fn all_box_stats(&self) -> CoreResult<Vec<BoxStats>> {
        sections::read_all_box_stats(&self.buffer)
    }

    pub fn event_flags(&self) -> CoreResult<FlagSummary> {
        sections::read_event_flags(&self.buffer)
    }

    pub fn pokedex(&self, include_names: bool) -> CoreResult<PokedexSummary> {
        sections::read_pokedex(&self.buffer, include_names)
    }

    pub fn hall_of_fame(&self) -> CoreResult<Vec<HallOfFameEntry>> {
        sections::read_hall_of_fame(&self.buffer)
    }

    pub fn checksums(&self) -> CoreResult<Vec<ChecksumStatus>> {
        checksum::report(&self.buffer)
    }

    pub fn has_valid_main_checksum(&self) -> bool {
        validate::has_valid_main_checksum(&self.buffer)
    }

    /// Size and checksum problems. A checksum that cannot be evaluated counts as a mismatch.
    pub fn integrity(&self) -> Integrity {
        let mut issues = Vec::new();

        let expected_size = validate::has_expected_size(&self.buffer);
        if !expected_size {
            issues.push(IntegrityIssue::UnexpectedSize {
                actual: self.buffer.len(),
            });
        }

        for region in ChecksumRegion::all() {
            let valid = match region.validate(&self.buffer) {
                Ok(valid) => valid,
                Err(err) => {
                    tracing::debug!(checksum = %region.id, error = %err, "checksum not evaluated");
                    false
                }
            };
            if !valid {
                issues.push(IntegrityIssue::ChecksumMismatch(region.id));
            }
        }

        Integrity {
            expected_size,
            main_checksum_valid: self.has_valid_main_checksum(),
            issues,
        }
    }

    pub fn fix_checksums(&mut self) -> CoreResult<()> {
        checksum::fix_all(&mut self.buffer)
    }
}
