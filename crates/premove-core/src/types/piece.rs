//! 駒（Piece）と盤上の駒配置

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Color, Key, Role};

/// 駒（駒種 + 手番）
///
/// `promoted` は呼び出し側向けの情報で、移動規則は駒種だけで決まる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub promoted: bool,
}

impl Piece {
    #[inline]
    pub const fn new(role: Role, color: Color) -> Piece {
        Piece {
            role,
            color,
            promoted: false,
        }
    }
}

/// 盤上の駒配置（升目 → 駒）
pub type Pieces = HashMap<Key, Piece>;
