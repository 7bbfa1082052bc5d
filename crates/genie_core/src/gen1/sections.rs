use crate::bcd;
use crate::buffer::SaveBuffer;
use crate::core_api::{
    BoxStats, CoreResult, FlagSummary, HallOfFameEntry, HallOfFamePokemon, PokedexSummary,
    TrainerSummary,
};
use crate::layout::{self, *};
use crate::text;

use super::types as names;

const MAX_SPECIES_ID: u8 = 151;
const MAX_LEVEL: u8 = 100;

// --- Trainer, location and playtime ---

pub fn read_trainer(buf: &SaveBuffer) -> CoreResult<TrainerSummary> {
    let trainer_name = text::decode_name(buf, TRAINER_NAME_OFFSET, NAME_LEN)?;
    let rival_name = text::decode_name(buf, RIVAL_NAME_OFFSET, NAME_LEN)?;

    // Stored high byte first.
    let hi = buf.read_u8(TRAINER_ID_OFFSET)?;
    let lo = buf.read_u8(TRAINER_ID_OFFSET + 1)?;

    let badges = buf.read_u8(BADGES_OFFSET)?;
    let map_id = buf.read_u8(MAP_ID_OFFSET)?;

    Ok(TrainerSummary {
        trainer_name,
        rival_name,
        trainer_id: u16::from_be_bytes([hi, lo]),
        money: bcd::read_bcd3(buf, MONEY_OFFSET)?,
        coins: bcd::read_bcd2(buf, COINS_OFFSET)?,
        badges,
        badge_names: names::badge_names(badges)
            .into_iter()
            .map(str::to_string)
            .collect(),
        map_id,
        map_name: names::map_name(map_id).to_string(),
        x: buf.read_u8(X_COORD_OFFSET)?,
        y: buf.read_u8(Y_COORD_OFFSET)?,
        play_hours: buf.read_u8(PLAY_HOURS_OFFSET)?,
        play_minutes: buf.read_u8(PLAY_MINUTES_OFFSET)?,
        play_seconds: buf.read_u8(PLAY_SECONDS_OFFSET)?,
        play_time_maxed: buf.read_u8(PLAY_MAXED_OFFSET)? != 0,
    })
}

// --- PC boxes ---

pub fn read_box_stats(buf: &SaveBuffer, box_index: usize) -> CoreResult<BoxStats> {
    let base = layout::box_base_offset(box_index)?;
    let count = buf.read_u8(base)?.min(BOX_CAPACITY as u8);

    let mut sum = 0u32;
    let mut counted = 0u32;
    for slot in 0..usize::from(count) {
        let level_at = base + BOX_MONS_OFFSET + slot * BOX_MON_SIZE + BOX_MON_LEVEL_OFFSET;
        let level = buf.read_u8(level_at)?;
        if is_plausible_level(level) {
            sum += u32::from(level);
            counted += 1;
        }
    }

    let average_level = if counted == 0 {
        0.0
    } else {
        f64::from(sum) / f64::from(counted)
    };

    Ok(BoxStats {
        box_index,
        pokemon_count: count,
        average_level,
    })
}

pub fn read_all_box_stats(buf: &SaveBuffer) -> CoreResult<Vec<BoxStats>> {
    (1..=BOX_COUNT)
        .map(|index| read_box_stats(buf, index))
        .collect()
}

// --- Event flags ---

pub fn read_event_flags(buf: &SaveBuffer) -> CoreResult<FlagSummary> {
    let bytes = buf.view(EVENT_FLAGS_OFFSET, EVENT_FLAGS_LEN)?;
    let set_indices: Vec<usize> = set_bits(bytes).collect();

    Ok(FlagSummary {
        flags_checked: EVENT_FLAGS_LEN * 8,
        flags_set: set_indices.len(),
        set_indices,
    })
}

/// Indices of set bits, LSB first within each byte, bytes ascending.
fn set_bits(bytes: &[u8]) -> impl Iterator<Item = usize> + '_ {
    bytes.iter().enumerate().flat_map(|(i, &b)| {
        (0..8usize)
            .filter(move |bit| b & (1u8 << bit) != 0)
            .map(move |bit| i * 8 + bit)
    })
}

// --- Pokedex ---

pub fn read_pokedex(buf: &SaveBuffer, include_names: bool) -> CoreResult<PokedexSummary> {
    let owned_bits = buf.view(POKEDEX_OWNED_OFFSET, POKEDEX_BITS_LEN)?;
    let seen_bits = buf.view(POKEDEX_SEEN_OFFSET, POKEDEX_BITS_LEN)?;

    let dex_numbers = |bits: &[u8]| -> Vec<usize> {
        set_bits(bits)
            .map(|bit| bit + 1)
            .take_while(|&dex| dex <= POKEDEX_SIZE)
            .collect()
    };
    let owned_dex = dex_numbers(owned_bits);
    let seen_dex = dex_numbers(seen_bits);

    let to_names = |dex: &[usize]| -> Vec<String> {
        if !include_names {
            return Vec::new();
        }
        dex.iter().map(|&d| names::dex_name(d).to_string()).collect()
    };

    Ok(PokedexSummary {
        owned_count: owned_dex.len(),
        seen_count: seen_dex.len(),
        owned_names: to_names(&owned_dex),
        seen_names: to_names(&seen_dex),
        owned_dex,
        seen_dex,
    })
}

// --- Hall of Fame ---

pub fn is_plausible_species(species: u8) -> bool {
    (1..=MAX_SPECIES_ID).contains(&species)
}

pub fn is_plausible_level(level: u8) -> bool {
    (1..=MAX_LEVEL).contains(&level)
}

/// Non-empty, not all spaces, and fewer than half of the glyphs are unknown.
pub fn is_plausible_nickname(name: &str) -> bool {
    let total = name.chars().count();
    if total == 0 || name.chars().all(|c| c == ' ') {
        return false;
    }
    let unknown = name.chars().filter(|&c| c == text::UNKNOWN_GLYPH).count();
    unknown * 2 < total
}

fn is_empty_species(species: u8) -> bool {
    species == 0x00 || species == 0xFF
}

/// Scans every record slot and keeps the teams that look real.
///
/// Bank 0 carries no checksum, so each slot is filtered heuristically. The
/// record-count byte in bank 1 then decides how many of the survivors are shown:
/// zero hides everything, otherwise the newest `hint` survive and are renumbered.
pub fn read_hall_of_fame(buf: &SaveBuffer) -> CoreResult<Vec<HallOfFameEntry>> {
    let hint = usize::from(buf.read_u8(HALL_OF_FAME_COUNT_OFFSET)?).min(HALL_OF_FAME_MAX_RECORDS);
    buf.require_range(HALL_OF_FAME_OFFSET, HALL_OF_FAME_LEN)?;

    let mut survivors = Vec::new();
    for slot in 0..HALL_OF_FAME_MAX_RECORDS {
        let team = read_hall_of_fame_slot(buf, slot)?;
        if !team.is_empty() {
            survivors.push(team);
        }
    }
    tracing::debug!(hint, survivors = survivors.len(), "hall of fame scanned");

    if hint == 0 {
        return Ok(Vec::new());
    }

    let skip = survivors.len().saturating_sub(hint);
    Ok(survivors
        .into_iter()
        .skip(skip)
        .enumerate()
        .map(|(i, team)| HallOfFameEntry {
            entry_index: i + 1,
            team,
        })
        .collect())
}

fn read_hall_of_fame_slot(buf: &SaveBuffer, slot: usize) -> CoreResult<Vec<HallOfFamePokemon>> {
    let record = HALL_OF_FAME_OFFSET + slot * HALL_OF_FAME_RECORD_SIZE;
    let mut team = Vec::with_capacity(HALL_OF_FAME_MONS_PER_RECORD);

    for position in 0..HALL_OF_FAME_MONS_PER_RECORD {
        let at = record + position * HALL_OF_FAME_MON_SIZE;
        let species = buf.read_u8(at + HALL_OF_FAME_SPECIES_OFFSET)?;
        if is_empty_species(species) {
            break;
        }

        let level = buf.read_u8(at + HALL_OF_FAME_LEVEL_OFFSET)?;
        let nickname = text::decode_name(buf, at + HALL_OF_FAME_NICKNAME_OFFSET, NAME_LEN)?;

        let plausible = is_plausible_species(species)
            && is_plausible_level(level)
            && is_plausible_nickname(&nickname);
        if !plausible {
            if position == 0 {
                tracing::debug!(slot, species, level, "hall of fame slot discarded");
                return Ok(Vec::new());
            }
            tracing::trace!(slot, position, species, level, "hall of fame entry skipped");
            continue;
        }

        team.push(HallOfFamePokemon {
            species_id: species,
            species_name: names::species_name(species).to_string(),
            level,
            nickname,
        });
    }

    Ok(team)
}
