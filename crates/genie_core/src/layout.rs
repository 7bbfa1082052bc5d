use serde::{Deserialize, Serialize};

use crate::core_api::{CoreError, CoreResult};

pub const EXPECTED_SIZE: usize = 0x8000;

pub const BANK_SIZE: usize = 0x2000;
pub const BANK0_BASE: usize = 0x0000;
pub const BANK1_BASE: usize = 0x2000;
pub const BANK2_BASE: usize = 0x4000;
pub const BANK3_BASE: usize = 0x6000;

// --- Names and identity (bank 1) ---

/// Name fields hold 10 visible glyphs plus a terminator.
pub const NAME_LEN: usize = 11;
pub const TRAINER_NAME_OFFSET: usize = 0x2598;
pub const RIVAL_NAME_OFFSET: usize = 0x25F6;
/// Big-endian, unlike the buffer's native little-endian u16.
pub const TRAINER_ID_OFFSET: usize = 0x2605;

// --- Pokedex ---

pub const POKEDEX_OWNED_OFFSET: usize = 0x25A3;
pub const POKEDEX_SEEN_OFFSET: usize = 0x25B6;
pub const POKEDEX_BITS_LEN: usize = 0x13;
pub const POKEDEX_SIZE: usize = 151;

// --- Inventory counters ---

pub const MONEY_OFFSET: usize = 0x25F3;
pub const MONEY_LEN: usize = 3;
pub const COINS_OFFSET: usize = 0x2850;
pub const COINS_LEN: usize = 2;

pub const BADGES_OFFSET: usize = 0x2602;

// --- Location ---

pub const MAP_ID_OFFSET: usize = 0x260A;
// Some references list these two swapped.
pub const Y_COORD_OFFSET: usize = 0x260D;
pub const X_COORD_OFFSET: usize = 0x260E;

// --- Playtime ---

pub const PLAY_HOURS_OFFSET: usize = 0x2CED;
pub const PLAY_MAXED_OFFSET: usize = 0x2CEE;
pub const PLAY_MINUTES_OFFSET: usize = 0x2CEF;
pub const PLAY_SECONDS_OFFSET: usize = 0x2CF0;
pub const PLAY_FRAMES_OFFSET: usize = 0x2CF1;

// --- Event flags ---

pub const EVENT_FLAGS_OFFSET: usize = 0x29F3;
pub const EVENT_FLAGS_LEN: usize = 0x140;

// --- Main checksum ---

pub const MAIN_CHECKSUM_START: usize = 0x2598;
/// Inclusive.
pub const MAIN_CHECKSUM_END: usize = 0x3522;
pub const MAIN_CHECKSUM_OFFSET: usize = 0x3523;

// --- Hall of Fame (bank 0, unprotected) ---

pub const HALL_OF_FAME_OFFSET: usize = 0x0598;
pub const HALL_OF_FAME_MAX_RECORDS: usize = 50;
pub const HALL_OF_FAME_MONS_PER_RECORD: usize = 6;
pub const HALL_OF_FAME_MON_SIZE: usize = 0x10;
pub const HALL_OF_FAME_RECORD_SIZE: usize = HALL_OF_FAME_MONS_PER_RECORD * HALL_OF_FAME_MON_SIZE;
pub const HALL_OF_FAME_LEN: usize = HALL_OF_FAME_MAX_RECORDS * HALL_OF_FAME_RECORD_SIZE;
pub const HALL_OF_FAME_SPECIES_OFFSET: usize = 0x00;
pub const HALL_OF_FAME_LEVEL_OFFSET: usize = 0x01;
pub const HALL_OF_FAME_NICKNAME_OFFSET: usize = 0x02;
pub const HALL_OF_FAME_COUNT_OFFSET: usize = 0x284E;

// --- PC boxes (banks 2 and 3) ---

pub const BOX_COUNT: usize = 12;
pub const BOXES_PER_BANK: usize = 6;
pub const BOX_BLOCK_SIZE: usize = 0x462;
pub const BOX_CAPACITY: usize = 20;
/// Count byte + 20-byte species list + 1 padding byte.
pub const BOX_MONS_OFFSET: usize = 1 + BOX_CAPACITY + 1;
pub const BOX_MON_SIZE: usize = 0x21;
// Unverified against a reference dump; every level read goes through this constant.
pub const BOX_MON_LEVEL_OFFSET: usize = 0x03;

pub const BANK2_ALL_CHECKSUM_OFFSET: usize = 0x5A4C;
pub const BANK2_BOX_CHECKSUMS_OFFSET: usize = 0x5A4D;
pub const BANK3_ALL_CHECKSUM_OFFSET: usize = 0x7A4C;
pub const BANK3_BOX_CHECKSUMS_OFFSET: usize = 0x7A4D;

/// Half-open byte range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub fn new(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// One of the two SRAM banks that hold PC boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxBank {
    Bank2,
    Bank3,
}

impl BoxBank {
    pub const ALL: [BoxBank; 2] = [BoxBank::Bank2, BoxBank::Bank3];

    pub fn from_number(number: u8) -> CoreResult<Self> {
        match number {
            2 => Ok(Self::Bank2),
            3 => Ok(Self::Bank3),
            other => Err(CoreError::out_of_range(format!(
                "box bank must be 2 or 3, got {other}"
            ))),
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Self::Bank2 => 2,
            Self::Bank3 => 3,
        }
    }

    pub fn base(self) -> usize {
        match self {
            Self::Bank2 => BANK2_BASE,
            Self::Bank3 => BANK3_BASE,
        }
    }

    pub fn all_checksum_offset(self) -> usize {
        match self {
            Self::Bank2 => BANK2_ALL_CHECKSUM_OFFSET,
            Self::Bank3 => BANK3_ALL_CHECKSUM_OFFSET,
        }
    }

    pub fn box_checksums_offset(self) -> usize {
        match self {
            Self::Bank2 => BANK2_BOX_CHECKSUMS_OFFSET,
            Self::Bank3 => BANK3_BOX_CHECKSUMS_OFFSET,
        }
    }

    /// 1-based number of the first box stored in this bank.
    pub fn first_box(self) -> usize {
        match self {
            Self::Bank2 => 1,
            Self::Bank3 => 1 + BOXES_PER_BANK,
        }
    }
}

/// Where a 1-based box index lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSlot {
    pub bank: BoxBank,
    /// 0-based position inside its bank.
    pub index_in_bank: usize,
}

/// Resolves a box index (1..=12). Boxes 1-6 live in bank 2, 7-12 in bank 3.
pub fn locate_box(box_index: usize) -> CoreResult<BoxSlot> {
    if !(1..=BOX_COUNT).contains(&box_index) {
        return Err(CoreError::out_of_range(format!(
            "box index must be 1..{BOX_COUNT}, got {box_index}"
        )));
    }
    let bank = if box_index <= BOXES_PER_BANK {
        BoxBank::Bank2
    } else {
        BoxBank::Bank3
    };
    Ok(BoxSlot {
        bank,
        index_in_bank: box_index - bank.first_box(),
    })
}

pub fn box_base_offset(box_index: usize) -> CoreResult<usize> {
    let slot = locate_box(box_index)?;
    Ok(slot.bank.base() + slot.index_in_bank * BOX_BLOCK_SIZE)
}

pub fn bank_all_checksum_offset(box_index: usize) -> CoreResult<usize> {
    Ok(locate_box(box_index)?.bank.all_checksum_offset())
}

pub fn bank_box_checksums_base(box_index: usize) -> CoreResult<usize> {
    Ok(locate_box(box_index)?.bank.box_checksums_offset())
}
