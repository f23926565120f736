pub mod bitboard;
pub mod board;
pub mod config;
pub mod constants;
pub mod disc;
pub mod error;
pub mod eval;
mod flip;
pub mod game;
pub mod move_list;
pub mod perft;
pub mod ply_cache;
pub mod search;
pub mod square;
pub mod strategy;
pub mod types;
