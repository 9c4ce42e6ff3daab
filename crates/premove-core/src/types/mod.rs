//! 基本型
//!
//! - `Key` / `Pos`: 升目識別子と 0 始まり座標
//! - `Geometry`: 盤の形状と全升目の列挙
//! - `Color` / `Role` / `Piece`: 駒
//! - `Variant`: バリアントと駒種一覧

mod color;
mod geometry;
pub mod json;
mod key;
mod piece;
mod role;
mod variant;

pub use color::Color;
pub use geometry::{BoardDimensions, Geometry};
pub use key::{FILE_CHARS, Key, MAX_FILES, MAX_RANKS, Pos, RANK_CHARS};
pub use piece::{Piece, Pieces};
pub use role::Role;
pub use variant::Variant;
