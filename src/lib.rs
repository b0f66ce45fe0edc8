//! Scorekeeping for Sâm Lốc sessions.
//!
//! The heart of the crate is the [`settlement`] engine: pure functions that
//! turn a reported round outcome into zero-sum balance deltas. Everything
//! around it ([`roster`], [`history`], [`session`], [`save`], and the
//! terminal front-end in `cli`) is thin plumbing.
pub mod config;
pub mod error;
pub mod history;
pub mod id;
pub mod roster;
pub mod save;
pub mod session;
pub mod settlement;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::*;
pub use error::*;
pub use id::*;
pub use session::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Money in thousands of đồng ("k"). Balances are unbounded below.
pub type Chips = i64;
/// Cards left in a loser's hand at the end of a normal round.
pub type Leaves = u8;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for randomised tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE LIMITS
// ============================================================================
/// Fewest players a round can be settled with.
pub const MIN_PLAYERS: usize = 2;
/// Most players that fit at a Sâm Lốc table.
pub const MAX_PLAYERS: usize = 5;
/// Fewest leaves a non-congealed loser can be left holding.
pub const MIN_LEAVES: Leaves = 1;
/// Most leaves a non-congealed loser can be left holding.
pub const MAX_LEAVES: Leaves = 10;

// ============================================================================
// BASE AMOUNTS
// All amounts are in leaves and scaled by the session bet unit.
// ============================================================================
/// Fixed penalty for a congealed ("Cóng") loser.
pub const CONG_PENALTY_BASE: Chips = 15;
/// Paid per opponent on a Báo Sâm, in either direction.
pub const DECLARE_BASE: Chips = 20;
/// Paid by the victim of a Chặt Heo.
pub const SLAM_BASE: Chips = 20;
/// Bet unit used when none has been configured.
pub const DEFAULT_BET: Chips = 1;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `<home>/logs/` and writes DEBUG level to file, WARN (or DEBUG
/// when verbose) to terminal.
#[cfg(feature = "cli")]
pub fn log(config: &Config) -> anyhow::Result<()> {
    let dir = config.home().join("logs");
    std::fs::create_dir_all(&dir)?;
    let settings = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        settings.clone(),
        std::fs::File::create(dir.join(format!("{}.log", time)))?,
    );
    let term = simplelog::TermLogger::new(
        config.level(),
        settings.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
