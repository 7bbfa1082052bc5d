use genie_core::core_api::{Engine, Session};
use genie_core::layout::*;
use genie_core::{SaveBuffer, bcd, checksum, text};
use genie_render::{
    FieldSelection, render_json_full, render_json_selected, render_selected_pairs, render_summary,
};
use serde_json::Value;

fn sample_save() -> SaveBuffer {
    let mut buf = SaveBuffer::new(vec![0u8; EXPECTED_SIZE]);
    text::encode_name(&mut buf, TRAINER_NAME_OFFSET, NAME_LEN, "RED").unwrap();
    text::encode_name(&mut buf, RIVAL_NAME_OFFSET, NAME_LEN, "BLUE").unwrap();
    buf.write_u8(TRAINER_ID_OFFSET, 0x30).unwrap();
    buf.write_u8(TRAINER_ID_OFFSET + 1, 0x39).unwrap();
    bcd::write_bcd3(&mut buf, MONEY_OFFSET, 3_000).unwrap();
    bcd::write_bcd2(&mut buf, COINS_OFFSET, 45).unwrap();
    buf.write_u8(BADGES_OFFSET, 0b0000_0001).unwrap();
    buf.write_u8(MAP_ID_OFFSET, 0x01).unwrap();
    buf.write_u8(X_COORD_OFFSET, 7).unwrap();
    buf.write_u8(Y_COORD_OFFSET, 9).unwrap();
    buf.write_u8(PLAY_HOURS_OFFSET, 1).unwrap();
    buf.write_u8(PLAY_MINUTES_OFFSET, 2).unwrap();
    buf.write_u8(PLAY_SECONDS_OFFSET, 3).unwrap();
    buf.write_u8(POKEDEX_OWNED_OFFSET, 0x01).unwrap();
    buf.write_u8(POKEDEX_SEEN_OFFSET, 0x03).unwrap();
    buf.write_u8(EVENT_FLAGS_OFFSET, 0x02).unwrap();

    let first_box = box_base_offset(1).unwrap();
    buf.write_u8(first_box, 1).unwrap();
    buf.write_u8(first_box + BOX_MONS_OFFSET + BOX_MON_LEVEL_OFFSET, 12)
        .unwrap();

    let mon = HALL_OF_FAME_OFFSET;
    buf.write_u8(mon + HALL_OF_FAME_SPECIES_OFFSET, 84).unwrap();
    buf.write_u8(mon + HALL_OF_FAME_LEVEL_OFFSET, 55).unwrap();
    text::encode_name(&mut buf, mon + HALL_OF_FAME_NICKNAME_OFFSET, NAME_LEN, "SPARKY").unwrap();
    buf.write_u8(HALL_OF_FAME_COUNT_OFFSET, 1).unwrap();

    checksum::fix_all(&mut buf).unwrap();
    buf
}

fn sample_session() -> Session {
    Engine::new()
        .open_bytes(sample_save().into_bytes())
        .expect("sample save should open")
}

#[test]
fn full_json_uses_canonical_top_level_order() {
    let value = render_json_full(&sample_session()).unwrap();
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec![
            "size",
            "name",
            "rival",
            "id",
            "money",
            "coins",
            "badges",
            "location",
            "playtime",
            "pokedex",
            "hall_of_fame",
            "boxes",
            "event_flags",
            "checksums",
            "main_checksum_valid",
            "issues",
        ]
    );
}

#[test]
fn full_json_carries_decoded_values() {
    let value: Value = render_json_full(&sample_session()).unwrap();
    assert_eq!(value["size"], 0x8000);
    assert_eq!(value["name"], "RED");
    assert_eq!(value["id"], 0x3039);
    assert_eq!(value["money"], 3000);
    assert_eq!(value["badges"]["earned"][0], "Boulder (Brock)");
    assert_eq!(value["location"]["map_name"], "Viridian City");
    assert_eq!(value["pokedex"]["seen"], serde_json::json!([1, 2]));
    assert_eq!(value["hall_of_fame"][0]["team"][0]["species"], "PIKACHU");
    assert_eq!(value["boxes"][0]["average_level"], 12.0);
    assert_eq!(value["event_flags"]["set_indices"], serde_json::json!([1]));
    assert_eq!(value["checksums"].as_array().map(Vec::len), Some(15));
    assert_eq!(value["main_checksum_valid"], true);
    assert_eq!(value["issues"], serde_json::json!([]));
}

#[test]
fn selected_json_only_contains_requested_fields() {
    let fields = FieldSelection {
        money: true,
        coins: true,
        ..FieldSelection::default()
    };
    let value = render_json_selected(&sample_session(), &fields).unwrap();
    assert_eq!(value, serde_json::json!({ "money": 3000, "coins": 45 }));
}

#[test]
fn selected_pairs_follow_fixed_order() {
    let fields = FieldSelection {
        playtime: true,
        name: true,
        location: true,
        flags: true,
        ..FieldSelection::default()
    };
    let pairs = render_selected_pairs(&sample_session(), &fields).unwrap();
    let lines: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
    assert_eq!(
        lines,
        vec![
            "name=RED",
            "location=Viridian City (0x01) X=7 Y=9",
            "playtime=1h 2m 3s",
            "flags=1/2560",
        ]
    );
}

#[test]
fn selected_checksums_expand_per_region() {
    let fields = FieldSelection {
        checksums: true,
        ..FieldSelection::default()
    };
    let pairs = render_selected_pairs(&sample_session(), &fields).unwrap();
    assert_eq!(pairs.len(), 15);
    assert_eq!(pairs[0], ("checksum.box1".to_string(), "VALID".to_string()));
    assert_eq!(
        pairs.last(),
        Some(&("checksum.main".to_string(), "VALID".to_string()))
    );
}

#[test]
fn summary_contains_every_section() {
    let summary = render_summary(&sample_session()).unwrap();

    for expected in [
        "=== Save Genie Summary ===",
        "Trainer Name: RED",
        "Rival Name:   BLUE",
        "Trainer ID:   12345",
        "Money:        ₽3000",
        "1.Boulder (Brock) ->Yes",
        "2.Cascade (Misty) ->No",
        "Location:     MapID=1, Hex= (0x01) Viridian City X=7 Y=9",
        "Playtime:     1h 2m 3s",
        "Main Checksum: VALID",
        "Bank2 All Checksum: VALID",
        "Bank3 All Checksum: VALID",
        "Owned: 1 / 151",
        "Seen:  2 / 151",
        "Owned List: BULBASAUR",
        "Seen List:  BULBASAUR, IVYSAUR",
        "--- Hall of Fame ---",
        "Entry #1:",
        "  1) Species ID=84 Species Name: PIKACHU Lv 55 \"SPARKY\"",
        "Box 1: 1 Pokémon, Avg Lv 12.00",
        "Box 12: 0 Pokémon",
        "Flags Checked: 2560",
        "Flags Set:     1",
        "Set Flag Indices (first 10): 1",
    ] {
        assert!(
            summary.lines().any(|line| line == expected),
            "missing line {expected:?} in:\n{summary}"
        );
    }
}

#[test]
fn summary_skips_hall_of_fame_when_hint_is_zero() {
    let mut session = sample_session();
    session
        .buffer_mut()
        .write_u8(HALL_OF_FAME_COUNT_OFFSET, 0)
        .unwrap();
    let summary = render_summary(&session).unwrap();
    assert!(!summary.contains("--- Hall of Fame ---"));
    assert!(summary.contains("Main Checksum: INVALID"));
}

#[test]
fn summary_on_truncated_save_is_an_error() {
    let session = Engine::new().open_bytes(vec![0u8; 0x3000]).unwrap();
    assert!(render_summary(&session).is_err());
}
