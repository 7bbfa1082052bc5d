pub mod sections;
pub mod types;

pub use sections::{
    is_plausible_level, is_plausible_nickname, is_plausible_species, read_all_box_stats,
    read_box_stats, read_event_flags, read_hall_of_fame, read_pokedex, read_trainer,
};
