//! Game rules for freestyle Gomoku
//!
//! Five or more stones in a row win (overlines count). A full board with
//! no five ends the game as a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{has_five_in_row, is_game_over, is_winning_move, winner};
