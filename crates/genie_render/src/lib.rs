use std::fmt::Write as _;

use genie_core::checksum::{self, ChecksumStatus};
use genie_core::core_api::{
    BoxStats, CoreResult, FlagSummary, HallOfFameEntry, HallOfFamePokemon, IntegrityIssue,
    PokedexSummary, Session, TrainerSummary,
};
use genie_core::gen1::types::BADGE_NAMES;
use genie_core::layout::POKEDEX_SIZE;
use serde_json::{Map as JsonMap, Value as JsonValue};

const SECTION_RULE: &str = "======================================";
const FLAG_PREVIEW_LIMIT: usize = 10;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub name: bool,
    pub rival: bool,
    pub id: bool,
    pub money: bool,
    pub coins: bool,
    pub badges: bool,
    pub location: bool,
    pub playtime: bool,
    pub pokedex: bool,
    pub hall_of_fame: bool,
    pub boxes: bool,
    pub flags: bool,
    pub checksums: bool,
}

impl FieldSelection {
    pub fn all() -> Self {
        Self {
            name: true,
            rival: true,
            id: true,
            money: true,
            coins: true,
            badges: true,
            location: true,
            playtime: true,
            pokedex: true,
            hall_of_fame: true,
            boxes: true,
            flags: true,
            checksums: true,
        }
    }

    pub fn is_any_selected(&self) -> bool {
        self.name
            || self.rival
            || self.id
            || self.money
            || self.coins
            || self.badges
            || self.location
            || self.playtime
            || self.pokedex
            || self.hall_of_fame
            || self.boxes
            || self.flags
            || self.checksums
    }

    fn needs_trainer(&self) -> bool {
        self.name
            || self.rival
            || self.id
            || self.money
            || self.coins
            || self.badges
            || self.location
            || self.playtime
    }
}

// ---------------------------------------------------------------------------
// key=value output
// ---------------------------------------------------------------------------

/// `key=value` pairs for the selected fields, in a fixed order.
pub fn render_selected_pairs(
    session: &Session,
    fields: &FieldSelection,
) -> CoreResult<Vec<(String, String)>> {
    let mut out = Vec::new();

    if fields.needs_trainer() {
        let t = session.trainer()?;
        if fields.name {
            out.push(("name".to_string(), t.trainer_name.clone()));
        }
        if fields.rival {
            out.push(("rival".to_string(), t.rival_name.clone()));
        }
        if fields.id {
            out.push(("id".to_string(), t.trainer_id.to_string()));
        }
        if fields.money {
            out.push(("money".to_string(), t.money.to_string()));
        }
        if fields.coins {
            out.push(("coins".to_string(), t.coins.to_string()));
        }
        if fields.badges {
            out.push(("badges".to_string(), t.badge_names.join(", ")));
        }
        if fields.location {
            out.push((
                "location".to_string(),
                format!(
                    "{} (0x{:02X}) X={} Y={}",
                    t.map_name, t.map_id, t.x, t.y
                ),
            ));
        }
        if fields.playtime {
            out.push(("playtime".to_string(), format_playtime(&t)));
        }
    }
    if fields.pokedex {
        let dex = session.pokedex(false)?;
        out.push((
            "pokedex".to_string(),
            format!(
                "owned {}/{POKEDEX_SIZE} seen {}/{POKEDEX_SIZE}",
                dex.owned_count, dex.seen_count
            ),
        ));
    }
    if fields.hall_of_fame {
        out.push((
            "hall_of_fame".to_string(),
            session.hall_of_fame()?.len().to_string(),
        ));
    }
    if fields.boxes {
        for stats in session.all_box_stats()? {
            out.push((
                format!("box{}", stats.box_index),
                format!(
                    "{} avg_lv={:.2}",
                    stats.pokemon_count, stats.average_level
                ),
            ));
        }
    }
    if fields.flags {
        let flags = session.event_flags()?;
        out.push((
            "flags".to_string(),
            format!("{}/{}", flags.flags_set, flags.flags_checked),
        ));
    }
    if fields.checksums {
        for status in session.checksums()? {
            out.push((
                format!("checksum.{}", status.id),
                verdict(status.valid).to_string(),
            ));
        }
    }

    Ok(out)
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

pub fn render_json_full(session: &Session) -> CoreResult<JsonValue> {
    let mut out = JsonMap::new();
    out.insert("size".to_string(), JsonValue::from(session.len()));
    out.extend(selected_json(session, &FieldSelection::all())?);

    let integrity = session.integrity();
    out.insert(
        "main_checksum_valid".to_string(),
        JsonValue::Bool(integrity.main_checksum_valid),
    );
    out.insert(
        "issues".to_string(),
        JsonValue::Array(integrity.issues.iter().map(issue_to_json).collect()),
    );

    Ok(JsonValue::Object(out))
}

pub fn render_json_selected(session: &Session, fields: &FieldSelection) -> CoreResult<JsonValue> {
    Ok(JsonValue::Object(selected_json(session, fields)?))
}

fn selected_json(
    session: &Session,
    fields: &FieldSelection,
) -> CoreResult<JsonMap<String, JsonValue>> {
    let mut out = JsonMap::new();

    if fields.needs_trainer() {
        let t = session.trainer()?;
        if fields.name {
            out.insert(
                "name".to_string(),
                JsonValue::String(t.trainer_name.clone()),
            );
        }
        if fields.rival {
            out.insert("rival".to_string(), JsonValue::String(t.rival_name.clone()));
        }
        if fields.id {
            out.insert("id".to_string(), JsonValue::from(t.trainer_id));
        }
        if fields.money {
            out.insert("money".to_string(), JsonValue::from(t.money));
        }
        if fields.coins {
            out.insert("coins".to_string(), JsonValue::from(t.coins));
        }
        if fields.badges {
            out.insert("badges".to_string(), badges_to_json(&t));
        }
        if fields.location {
            out.insert("location".to_string(), location_to_json(&t));
        }
        if fields.playtime {
            out.insert("playtime".to_string(), playtime_to_json(&t));
        }
    }
    if fields.pokedex {
        out.insert(
            "pokedex".to_string(),
            pokedex_to_json(&session.pokedex(true)?),
        );
    }
    if fields.hall_of_fame {
        out.insert(
            "hall_of_fame".to_string(),
            JsonValue::Array(
                session
                    .hall_of_fame()?
                    .iter()
                    .map(hall_of_fame_entry_to_json)
                    .collect(),
            ),
        );
    }
    if fields.boxes {
        out.insert(
            "boxes".to_string(),
            JsonValue::Array(
                session
                    .all_box_stats()?
                    .iter()
                    .map(box_stats_to_json)
                    .collect(),
            ),
        );
    }
    if fields.flags {
        out.insert(
            "event_flags".to_string(),
            flags_to_json(&session.event_flags()?),
        );
    }
    if fields.checksums {
        out.insert(
            "checksums".to_string(),
            JsonValue::Array(
                session
                    .checksums()?
                    .iter()
                    .map(checksum_to_json)
                    .collect(),
            ),
        );
    }

    Ok(out)
}

fn badges_to_json(t: &TrainerSummary) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("mask".to_string(), JsonValue::from(t.badges));
    m.insert(
        "earned".to_string(),
        JsonValue::Array(
            t.badge_names
                .iter()
                .map(|name| JsonValue::String(name.clone()))
                .collect(),
        ),
    );
    JsonValue::Object(m)
}

fn location_to_json(t: &TrainerSummary) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("map_id".to_string(), JsonValue::from(t.map_id));
    m.insert("map_name".to_string(), JsonValue::String(t.map_name.clone()));
    m.insert("x".to_string(), JsonValue::from(t.x));
    m.insert("y".to_string(), JsonValue::from(t.y));
    JsonValue::Object(m)
}

fn playtime_to_json(t: &TrainerSummary) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("hours".to_string(), JsonValue::from(t.play_hours));
    m.insert("minutes".to_string(), JsonValue::from(t.play_minutes));
    m.insert("seconds".to_string(), JsonValue::from(t.play_seconds));
    m.insert("maxed".to_string(), JsonValue::Bool(t.play_time_maxed));
    JsonValue::Object(m)
}

fn pokedex_to_json(dex: &PokedexSummary) -> JsonValue {
    let numbers = |list: &[usize]| JsonValue::Array(list.iter().map(|&d| JsonValue::from(d)).collect());
    let names = |list: &[String]| {
        JsonValue::Array(list.iter().map(|n| JsonValue::String(n.clone())).collect())
    };

    let mut m = JsonMap::new();
    m.insert("owned_count".to_string(), JsonValue::from(dex.owned_count));
    m.insert("seen_count".to_string(), JsonValue::from(dex.seen_count));
    m.insert("owned".to_string(), numbers(&dex.owned_dex));
    m.insert("seen".to_string(), numbers(&dex.seen_dex));
    m.insert("owned_names".to_string(), names(&dex.owned_names));
    m.insert("seen_names".to_string(), names(&dex.seen_names));
    JsonValue::Object(m)
}

fn hall_of_fame_entry_to_json(entry: &HallOfFameEntry) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("entry".to_string(), JsonValue::from(entry.entry_index));
    m.insert(
        "team".to_string(),
        JsonValue::Array(entry.team.iter().map(hall_of_fame_mon_to_json).collect()),
    );
    JsonValue::Object(m)
}

fn hall_of_fame_mon_to_json(mon: &HallOfFamePokemon) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("species_id".to_string(), JsonValue::from(mon.species_id));
    m.insert(
        "species".to_string(),
        JsonValue::String(mon.species_name.clone()),
    );
    m.insert("level".to_string(), JsonValue::from(mon.level));
    m.insert("nickname".to_string(), JsonValue::String(mon.nickname.clone()));
    JsonValue::Object(m)
}

fn box_stats_to_json(stats: &BoxStats) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("box".to_string(), JsonValue::from(stats.box_index));
    m.insert("count".to_string(), JsonValue::from(stats.pokemon_count));
    m.insert(
        "average_level".to_string(),
        JsonValue::from(stats.average_level),
    );
    JsonValue::Object(m)
}

fn flags_to_json(flags: &FlagSummary) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("checked".to_string(), JsonValue::from(flags.flags_checked));
    m.insert("set".to_string(), JsonValue::from(flags.flags_set));
    m.insert(
        "set_indices".to_string(),
        JsonValue::Array(
            flags
                .set_indices
                .iter()
                .map(|&i| JsonValue::from(i))
                .collect(),
        ),
    );
    JsonValue::Object(m)
}

fn checksum_to_json(status: &ChecksumStatus) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("id".to_string(), JsonValue::String(status.id.to_string()));
    m.insert("stored".to_string(), JsonValue::from(status.stored));
    m.insert("computed".to_string(), JsonValue::from(status.computed));
    m.insert("valid".to_string(), JsonValue::Bool(status.valid));
    JsonValue::Object(m)
}

fn issue_to_json(issue: &IntegrityIssue) -> JsonValue {
    match issue {
        IntegrityIssue::UnexpectedSize { actual } => {
            JsonValue::String(format!("unexpected size {actual:#x}"))
        }
        IntegrityIssue::ChecksumMismatch(id) => {
            JsonValue::String(format!("checksum mismatch: {id}"))
        }
    }
}

// ---------------------------------------------------------------------------
// Text summary
// ---------------------------------------------------------------------------

pub fn render_summary(session: &Session) -> CoreResult<String> {
    let mut out = String::new();

    writeln!(&mut out, "=== Save Genie Summary ===").expect("writing to String cannot fail");
    writeln!(&mut out).expect("writing to String cannot fail");

    write_trainer(&mut out, &session.trainer()?);
    writeln!(&mut out).expect("writing to String cannot fail");

    let buf = session.buffer();
    writeln!(
        &mut out,
        "Main Checksum: {}",
        verdict(checksum::validate_main(buf)?)
    )
    .expect("writing to String cannot fail");
    for bank in [2u8, 3] {
        writeln!(
            &mut out,
            "Bank{bank} All Checksum: {}",
            verdict(checksum::validate_bank_all(buf, bank)?)
        )
        .expect("writing to String cannot fail");
    }

    writeln!(&mut out, "--- Pokédex ---").expect("writing to String cannot fail");
    write_pokedex(&mut out, &session.pokedex(true)?);
    writeln!(&mut out).expect("writing to String cannot fail");

    let hall_of_fame = session.hall_of_fame()?;
    if !hall_of_fame.is_empty() {
        writeln!(&mut out, "--- Hall of Fame ---").expect("writing to String cannot fail");
        for entry in &hall_of_fame {
            write_hall_of_fame_entry(&mut out, entry);
        }
        writeln!(&mut out).expect("writing to String cannot fail");
    }

    writeln!(&mut out, "--- PC Boxes (Stats) ---").expect("writing to String cannot fail");
    for stats in session.all_box_stats()? {
        writeln!(&mut out, "{}", format_box_stats(&stats)).expect("writing to String cannot fail");
    }
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, "--- Event Flags (Summary) ---").expect("writing to String cannot fail");
    write_flags(&mut out, &session.event_flags()?);

    Ok(out)
}

fn write_trainer(out: &mut String, t: &TrainerSummary) {
    writeln!(out, "Trainer Name: {}", t.trainer_name).expect("writing to String cannot fail");
    writeln!(out, "Rival Name:   {}", t.rival_name).expect("writing to String cannot fail");
    writeln!(out, "Trainer ID:   {}", t.trainer_id).expect("writing to String cannot fail");
    writeln!(out, "Money:        ₽{}", t.money).expect("writing to String cannot fail");
    writeln!(out, "Coins:        {}", t.coins).expect("writing to String cannot fail");

    writeln!(out, "Badges List:").expect("writing to String cannot fail");
    for (bit, name) in BADGE_NAMES.iter().enumerate() {
        let earned = if t.has_badge(bit as u8) { "Yes" } else { "No" };
        writeln!(out, "{}.{name} ->{earned}", bit + 1).expect("writing to String cannot fail");
    }
    writeln!(out).expect("writing to String cannot fail");

    writeln!(
        out,
        "Location:     MapID={}, Hex= (0x{:02X}) {} X={} Y={}",
        t.map_id, t.map_id, t.map_name, t.x, t.y
    )
    .expect("writing to String cannot fail");
    writeln!(out, "Playtime:     {}", format_playtime(t)).expect("writing to String cannot fail");
}

fn write_pokedex(out: &mut String, dex: &PokedexSummary) {
    writeln!(out, "Owned: {} / {POKEDEX_SIZE}", dex.owned_count)
        .expect("writing to String cannot fail");
    writeln!(out, "Seen:  {} / {POKEDEX_SIZE}", dex.seen_count)
        .expect("writing to String cannot fail");
    writeln!(out, "{SECTION_RULE}").expect("writing to String cannot fail");
    if !dex.owned_names.is_empty() {
        writeln!(out, "Owned List: {}", dex.owned_names.join(", "))
            .expect("writing to String cannot fail");
    }
    writeln!(out, "{SECTION_RULE}").expect("writing to String cannot fail");
    if !dex.seen_names.is_empty() {
        writeln!(out, "Seen List:  {}", dex.seen_names.join(", "))
            .expect("writing to String cannot fail");
    }
    writeln!(out, "{SECTION_RULE}").expect("writing to String cannot fail");
}

fn write_hall_of_fame_entry(out: &mut String, entry: &HallOfFameEntry) {
    writeln!(out, "Entry #{}:", entry.entry_index).expect("writing to String cannot fail");
    for (i, mon) in entry.team.iter().enumerate() {
        write!(
            out,
            "  {}) Species ID={} Species Name: {} Lv {}",
            i + 1,
            mon.species_id,
            mon.species_name,
            mon.level
        )
        .expect("writing to String cannot fail");
        if !mon.nickname.is_empty() {
            write!(out, " \"{}\"", mon.nickname).expect("writing to String cannot fail");
        }
        writeln!(out).expect("writing to String cannot fail");
    }
}

fn write_flags(out: &mut String, flags: &FlagSummary) {
    writeln!(out, "Flags Checked: {}", flags.flags_checked).expect("writing to String cannot fail");
    writeln!(out, "Flags Set:     {}", flags.flags_set).expect("writing to String cannot fail");
    if flags.set_indices.is_empty() {
        return;
    }

    let preview: Vec<String> = flags
        .set_indices
        .iter()
        .take(FLAG_PREVIEW_LIMIT)
        .map(|i| i.to_string())
        .collect();
    let more = if flags.set_indices.len() > FLAG_PREVIEW_LIMIT {
        " ..."
    } else {
        ""
    };
    writeln!(
        out,
        "Set Flag Indices (first {FLAG_PREVIEW_LIMIT}): {}{more}",
        preview.join(", ")
    )
    .expect("writing to String cannot fail");
}

fn format_box_stats(stats: &BoxStats) -> String {
    let mut line = format!("Box {}: {} Pokémon", stats.box_index, stats.pokemon_count);
    if stats.pokemon_count > 0 {
        write!(line, ", Avg Lv {:.2}", stats.average_level).expect("writing to String cannot fail");
    }
    line
}

fn format_playtime(t: &TrainerSummary) -> String {
    let mut text = format!("{}h {}m {}s", t.play_hours, t.play_minutes, t.play_seconds);
    if t.play_time_maxed {
        text.push_str(" (maxed)");
    }
    text
}

fn verdict(valid: bool) -> &'static str {
    if valid { "VALID" } else { "INVALID" }
}
