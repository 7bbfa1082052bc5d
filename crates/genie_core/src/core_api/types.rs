use serde::{Deserialize, Serialize};

use crate::checksum::ChecksumId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerSummary {
    pub trainer_name: String,
    pub rival_name: String,
    pub trainer_id: u16,
    pub money: u32,
    pub coins: u16,
    pub badges: u8,
    pub badge_names: Vec<String>,
    pub map_id: u8,
    pub map_name: String,
    pub x: u8,
    pub y: u8,
    pub play_hours: u8,
    pub play_minutes: u8,
    pub play_seconds: u8,
    /// Set by the game once the clock stops at 255:59:59.
    pub play_time_maxed: bool,
}

impl TrainerSummary {
    pub fn has_badge(&self, bit: u8) -> bool {
        bit < 8 && self.badges & (1 << bit) != 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxStats {
    /// 1-based.
    pub box_index: usize,
    pub pokemon_count: u8,
    /// Mean over entries whose level byte is 1..=100; 0.0 when none qualify.
    pub average_level: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSummary {
    pub flags_checked: usize,
    pub flags_set: usize,
    /// `byte * 8 + bit`, ascending.
    pub set_indices: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexSummary {
    pub owned_count: usize,
    pub seen_count: usize,
    pub owned_dex: Vec<usize>,
    pub seen_dex: Vec<usize>,
    /// Empty unless names were requested.
    pub owned_names: Vec<String>,
    pub seen_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallOfFamePokemon {
    pub species_id: u8,
    pub species_name: String,
    pub level: u8,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallOfFameEntry {
    /// 1-based display number, assigned after filtering.
    pub entry_index: usize,
    pub team: Vec<HallOfFamePokemon>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrityIssue {
    UnexpectedSize { actual: usize },
    ChecksumMismatch(ChecksumId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integrity {
    pub expected_size: bool,
    pub main_checksum_valid: bool,
    pub issues: Vec<IntegrityIssue>,
}

impl Integrity {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
