use genie_core::SaveBuffer;
use genie_core::bcd;
use genie_core::gen1::{self, types};
use genie_core::layout::*;
use genie_core::text;

fn blank_save() -> SaveBuffer {
    SaveBuffer::new(vec![0u8; EXPECTED_SIZE])
}

fn put_box(buf: &mut SaveBuffer, box_index: usize, count: u8, levels: &[u8]) {
    let base = box_base_offset(box_index).expect("valid box");
    buf.write_u8(base, count).unwrap();
    for (slot, &level) in levels.iter().enumerate() {
        let at = base + BOX_MONS_OFFSET + slot * BOX_MON_SIZE + BOX_MON_LEVEL_OFFSET;
        buf.write_u8(at, level).unwrap();
    }
}

fn put_hof_mon(buf: &mut SaveBuffer, slot: usize, position: usize, species: u8, level: u8, nick: &str) {
    let at = HALL_OF_FAME_OFFSET + slot * HALL_OF_FAME_RECORD_SIZE + position * HALL_OF_FAME_MON_SIZE;
    buf.write_u8(at + HALL_OF_FAME_SPECIES_OFFSET, species).unwrap();
    buf.write_u8(at + HALL_OF_FAME_LEVEL_OFFSET, level).unwrap();
    text::encode_name(buf, at + HALL_OF_FAME_NICKNAME_OFFSET, NAME_LEN, nick).unwrap();
}

fn set_hof_hint(buf: &mut SaveBuffer, hint: u8) {
    buf.write_u8(HALL_OF_FAME_COUNT_OFFSET, hint).unwrap();
}

#[test]
fn trainer_summary_reads_every_field() {
    let mut buf = blank_save();
    text::encode_name(&mut buf, TRAINER_NAME_OFFSET, NAME_LEN, "Red").unwrap();
    text::encode_name(&mut buf, RIVAL_NAME_OFFSET, NAME_LEN, "BLUE").unwrap();
    buf.write_u8(TRAINER_ID_OFFSET, 0x12).unwrap();
    buf.write_u8(TRAINER_ID_OFFSET + 1, 0x34).unwrap();
    bcd::write_bcd3(&mut buf, MONEY_OFFSET, 3_175).unwrap();
    bcd::write_bcd2(&mut buf, COINS_OFFSET, 120).unwrap();
    buf.write_u8(BADGES_OFFSET, 0b0000_0011).unwrap();
    buf.write_u8(MAP_ID_OFFSET, 0x00).unwrap();
    buf.write_u8(X_COORD_OFFSET, 5).unwrap();
    buf.write_u8(Y_COORD_OFFSET, 6).unwrap();
    buf.write_u8(PLAY_HOURS_OFFSET, 12).unwrap();
    buf.write_u8(PLAY_MINUTES_OFFSET, 34).unwrap();
    buf.write_u8(PLAY_SECONDS_OFFSET, 56).unwrap();

    let trainer = gen1::read_trainer(&buf).unwrap();
    assert_eq!(trainer.trainer_name, "RED");
    assert_eq!(trainer.rival_name, "BLUE");
    assert_eq!(trainer.trainer_id, 0x1234);
    assert_eq!(trainer.money, 3_175);
    assert_eq!(trainer.coins, 120);
    assert_eq!(trainer.badges, 0b11);
    assert_eq!(trainer.badge_names, vec!["Boulder (Brock)", "Cascade (Misty)"]);
    assert!(trainer.has_badge(1));
    assert!(!trainer.has_badge(2));
    assert_eq!(trainer.map_name, "Pallet Town");
    assert_eq!((trainer.x, trainer.y), (5, 6));
    assert_eq!(
        (trainer.play_hours, trainer.play_minutes, trainer.play_seconds),
        (12, 34, 56)
    );
    assert!(!trainer.play_time_maxed);
}

#[test]
fn trainer_summary_follows_buffer_edits() {
    let mut buf = blank_save();
    bcd::write_bcd3(&mut buf, MONEY_OFFSET, 10).unwrap();
    assert_eq!(gen1::read_trainer(&buf).unwrap().money, 10);
    bcd::write_bcd3(&mut buf, MONEY_OFFSET, 999_999).unwrap();
    assert_eq!(gen1::read_trainer(&buf).unwrap().money, 999_999);
}

#[test]
fn trainer_summary_on_truncated_save_is_out_of_range() {
    let buf = SaveBuffer::new(vec![0u8; 0x2600]);
    assert!(gen1::read_trainer(&buf).is_err());
}

#[test]
fn empty_box_averages_zero() {
    let buf = blank_save();
    let stats = gen1::read_box_stats(&buf, 4).unwrap();
    assert_eq!(stats.box_index, 4);
    assert_eq!(stats.pokemon_count, 0);
    assert_eq!(stats.average_level, 0.0);
}

#[test]
fn box_average_ignores_out_of_range_levels() {
    let mut buf = blank_save();
    put_box(&mut buf, 1, 5, &[10, 200, 50, 0, 99]);
    put_box(&mut buf, 9, 5, &[10, 200, 50, 0, 99]);

    for index in [1, 9] {
        let stats = gen1::read_box_stats(&buf, index).unwrap();
        assert_eq!(stats.pokemon_count, 5);
        assert!((stats.average_level - 53.0).abs() < 1e-9);
    }
}

#[test]
fn box_count_is_clamped_to_capacity() {
    let mut buf = blank_save();
    put_box(&mut buf, 12, 0xFF, &[40; BOX_CAPACITY]);
    let stats = gen1::read_box_stats(&buf, 12).unwrap();
    assert_eq!(usize::from(stats.pokemon_count), BOX_CAPACITY);
    assert_eq!(stats.average_level, 40.0);
}

#[test]
fn all_box_stats_covers_twelve_boxes() {
    let stats = gen1::read_all_box_stats(&blank_save()).unwrap();
    let indices: Vec<usize> = stats.iter().map(|s| s.box_index).collect();
    assert_eq!(indices, (1..=12).collect::<Vec<_>>());
    assert!(gen1::read_box_stats(&blank_save(), 13).is_err());
}

#[test]
fn event_flags_list_set_bits_in_order() {
    let mut buf = blank_save();
    buf.write_u8(EVENT_FLAGS_OFFSET, 0b1000_0001).unwrap();
    buf.write_u8(EVENT_FLAGS_OFFSET + 2, 0b0000_0100).unwrap();
    buf.write_u8(EVENT_FLAGS_OFFSET + EVENT_FLAGS_LEN - 1, 0b1000_0000).unwrap();

    let flags = gen1::read_event_flags(&buf).unwrap();
    assert_eq!(flags.flags_checked, 0x140 * 8);
    assert_eq!(flags.flags_set, 4);
    assert_eq!(flags.set_indices, vec![0, 7, 18, 0x140 * 8 - 1]);
}

#[test]
fn single_owned_and_seen_bit_is_bulbasaur() {
    let mut buf = blank_save();
    buf.write_u8(POKEDEX_OWNED_OFFSET, 0x01).unwrap();
    buf.write_u8(POKEDEX_SEEN_OFFSET, 0x01).unwrap();

    let dex = gen1::read_pokedex(&buf, true).unwrap();
    assert_eq!(dex.owned_count, 1);
    assert_eq!(dex.owned_dex, vec![1]);
    assert_eq!(dex.owned_names, vec!["BULBASAUR"]);
    assert_eq!(dex.seen_count, 1);
    assert_eq!(dex.seen_dex, vec![1]);
    assert_eq!(dex.seen_names, vec!["BULBASAUR"]);
}

#[test]
fn pokedex_ignores_bit_past_mew_and_skips_names_when_not_asked() {
    let mut buf = blank_save();
    // Last byte: bit 6 is dex 151, bit 7 would be dex 152.
    buf.write_u8(POKEDEX_SEEN_OFFSET + POKEDEX_BITS_LEN - 1, 0b1100_0000).unwrap();

    let dex = gen1::read_pokedex(&buf, false).unwrap();
    assert_eq!(dex.seen_dex, vec![151]);
    assert_eq!(dex.owned_count, 0);
    assert!(dex.seen_names.is_empty());

    let named = gen1::read_pokedex(&buf, true).unwrap();
    assert_eq!(named.seen_names, vec![types::dex_name(151)]);
}

#[test]
fn hall_of_fame_hint_zero_hides_everything() {
    let mut buf = blank_save();
    put_hof_mon(&mut buf, 0, 0, 25, 50, "PIKA");
    set_hof_hint(&mut buf, 0);
    assert!(gen1::read_hall_of_fame(&buf).unwrap().is_empty());
}

#[test]
fn hall_of_fame_slot_with_empty_first_entry_is_dropped() {
    let mut buf = blank_save();
    // Slot 0 starts with the 0x00 sentinel but has data behind it.
    put_hof_mon(&mut buf, 0, 0, 0x00, 50, "GHOST");
    put_hof_mon(&mut buf, 0, 1, 25, 50, "PIKA");
    put_hof_mon(&mut buf, 1, 0, 84, 30, "SPARKY");
    set_hof_hint(&mut buf, 5);

    let entries = gen1::read_hall_of_fame(&buf).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].entry_index, 1);
    assert_eq!(entries[0].team.len(), 1);
    assert_eq!(entries[0].team[0].nickname, "SPARKY");
    assert_eq!(entries[0].team[0].species_name, "PIKACHU");
}

#[test]
fn hall_of_fame_stops_at_ff_sentinel() {
    let mut buf = blank_save();
    put_hof_mon(&mut buf, 0, 0, 25, 50, "PIKA");
    put_hof_mon(&mut buf, 0, 1, 0xFF, 50, "JUNK");
    put_hof_mon(&mut buf, 0, 2, 84, 30, "AFTER");
    set_hof_hint(&mut buf, 1);

    let entries = gen1::read_hall_of_fame(&buf).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].team.len(), 1);
    assert_eq!(entries[0].team[0].species_id, 25);
    assert_eq!(entries[0].team[0].level, 50);
}

#[test]
fn hall_of_fame_garbage_first_entry_discards_slot_but_later_garbage_is_skipped() {
    let mut buf = blank_save();
    put_hof_mon(&mut buf, 0, 0, 200, 50, "JUNK");
    put_hof_mon(&mut buf, 0, 1, 25, 50, "PIKA");

    put_hof_mon(&mut buf, 1, 0, 25, 50, "PIKA");
    put_hof_mon(&mut buf, 1, 1, 84, 0, "ZERO");
    put_hof_mon(&mut buf, 1, 2, 84, 30, "");
    put_hof_mon(&mut buf, 1, 3, 84, 30, "DODO");
    set_hof_hint(&mut buf, 50);

    let entries = gen1::read_hall_of_fame(&buf).unwrap();
    assert_eq!(entries.len(), 1);
    let nicknames: Vec<&str> = entries[0].team.iter().map(|m| m.nickname.as_str()).collect();
    assert_eq!(nicknames, vec!["PIKA", "DODO"]);
}

#[test]
fn hall_of_fame_keeps_newest_survivors_when_hint_is_smaller() {
    let mut buf = blank_save();
    put_hof_mon(&mut buf, 0, 0, 1, 40, "FIRST");
    put_hof_mon(&mut buf, 3, 0, 2, 41, "SECOND");
    put_hof_mon(&mut buf, 7, 0, 3, 42, "THIRD");
    set_hof_hint(&mut buf, 2);

    let entries = gen1::read_hall_of_fame(&buf).unwrap();
    let summary: Vec<(usize, &str)> = entries
        .iter()
        .map(|e| (e.entry_index, e.team[0].nickname.as_str()))
        .collect();
    assert_eq!(summary, vec![(1, "SECOND"), (2, "THIRD")]);
}

#[test]
fn hall_of_fame_hint_above_survivors_renumbers_all() {
    let mut buf = blank_save();
    put_hof_mon(&mut buf, 10, 0, 1, 40, "ONE");
    put_hof_mon(&mut buf, 20, 0, 2, 41, "TWO");
    set_hof_hint(&mut buf, 0xFF);

    let entries = gen1::read_hall_of_fame(&buf).unwrap();
    let indices: Vec<usize> = entries.iter().map(|e| e.entry_index).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn hall_of_fame_on_blank_save_is_empty() {
    let mut buf = blank_save();
    set_hof_hint(&mut buf, 3);
    assert!(gen1::read_hall_of_fame(&buf).unwrap().is_empty());
}
