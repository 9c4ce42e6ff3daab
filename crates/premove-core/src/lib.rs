//! premove-core: 変則チェス・将棋・シャンチー系の候補手（premove）計算ライブラリ
//!
//! 盤上の駒配置と移動元の升、盤の形状とバリアントから、駒の移動形状だけで
//! 到達できる升を列挙する。王手・ピン・手番・経路の遮りは考慮しない。
//!
//! ```
//! use premove_core::{premove, Color, Geometry, Key, Piece, Pieces, Role};
//!
//! let b1: Key = "b1".parse().unwrap();
//! let pieces = Pieces::from([(b1, Piece::new(Role::Knight, Color::White))]);
//! let dests = premove(&pieces, b1, false, Geometry::Dim8x8, None).unwrap();
//! let names: Vec<String> = dests.iter().map(|k| k.to_string()).collect();
//! assert_eq!(names, ["a3", "c3", "d2"]);
//! ```

pub mod dispatch;
pub mod error;
pub mod mobility;
mod premove;
pub mod types;

pub use error::{PremoveError, PremoveResult};
pub use premove::{Dests, mobility_of, premove, premove_dests};
pub use types::{Color, Geometry, Key, Piece, Pieces, Pos, Role, Variant};
