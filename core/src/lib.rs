//! Game state engine for minesweeper-style grid deduction games.
//!
//! A [`GameEngine`] owns one game: the bomb layout, per-tile state and the win/loss state machine. Front ends call
//! [`GameEngine::reveal`] and [`GameEngine::toggle_flag`] and render the returned deltas, polling
//! [`GameEngine::state`] after each move.
//!
//! ```
//! use minegrid_core::*;
//!
//! let layout = BombLayout::from_bomb_coords((3, 3), &[(1, 1)])?;
//! let mut engine = GameEngine::from_layout(layout);
//!
//! let changed = engine.reveal((0, 0))?;
//! assert_eq!(changed[0].bombs_in_neighbor, 1);
//!
//! engine.toggle_flag((1, 1))?;
//! assert_eq!(engine.state(), GameState::Win);
//! # Ok::<(), GameError>(())
//! ```
#![no_std]

extern crate alloc;

pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use layout::*;
pub use tile::*;
pub use types::*;

mod difficulty;
mod engine;
mod error;
mod generator;
mod layout;
mod tile;
mod types;
