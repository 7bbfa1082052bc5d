mod engine;
mod error;
mod types;

pub use engine::{Engine, Session};
pub use error::{CoreError, CoreErrorCode, CoreResult};
pub use types::{
    BoxStats, FlagSummary, HallOfFameEntry, HallOfFamePokemon, Integrity, IntegrityIssue,
    PokedexSummary, TrainerSummary,
};
