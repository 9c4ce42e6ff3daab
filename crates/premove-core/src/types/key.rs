//! 升目識別子（Key）と座標（Pos）
//!
//! 升目は筋の文字（`a`〜`j`）と段の文字（`1`〜`9`, 10段目は `0`）で表す。
//! 持ち駒を打つ文脈のための番兵 `z0` も同じ型で扱う。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PremoveError;

/// 筋の文字
pub const FILE_CHARS: [char; 10] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

/// 段の文字（10段目は '0'）
pub const RANK_CHARS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

/// 筋・段の最大数
pub const MAX_FILES: u8 = 10;
pub const MAX_RANKS: u8 = 10;

/// 0始まりの座標（x: 筋, y: 段）
///
/// 範囲チェックは行わない。盤外かどうかは盤の形状側で判定する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Pos {
        Pos { x, y }
    }
}

/// 升目識別子
///
/// 内部は (筋, 段) の組。順序は筋優先（a1 < a2 < … < b1）で、
/// `Geometry::all_keys` の列挙順と一致する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    file: u8,
    rank: u8,
}

impl Key {
    /// 駒打ち用の番兵（"z0"）。筋 25 は盤上の升と衝突しない。
    pub const DROP: Key = Key { file: 25, rank: 9 };

    /// 筋・段から生成（範囲チェックあり）
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Key> {
        if file < MAX_FILES && rank < MAX_RANKS {
            Some(Key { file, rank })
        } else {
            None
        }
    }

    /// 座標から生成
    ///
    /// 10x10 の文字集合で表せない座標は `None`。
    #[inline]
    pub fn from_pos(pos: Pos) -> Option<Key> {
        let file = u8::try_from(pos.x).ok()?;
        let rank = u8::try_from(pos.y).ok()?;
        Key::new(file, rank)
    }

    /// 座標に変換
    #[inline]
    pub const fn pos(self) -> Pos {
        Pos::new(self.file as i32, self.rank as i32)
    }

    /// 筋（0始まり）
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// 段（0始まり）
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// 駒打ち番兵かどうか
    #[inline]
    pub const fn is_drop(self) -> bool {
        self.file == Key::DROP.file && self.rank == Key::DROP.rank
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_drop() {
            return f.write_str("z0");
        }
        write!(
            f,
            "{}{}",
            FILE_CHARS[self.file as usize],
            RANK_CHARS[self.rank as usize]
        )
    }
}

impl FromStr for Key {
    type Err = PremoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || PremoveError::MalformedKey(s.to_string());
        let mut chars = s.chars();
        let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(malformed());
        };
        if f == 'z' && r == '0' {
            return Ok(Key::DROP);
        }
        let file = FILE_CHARS.iter().position(|&c| c == f).ok_or_else(malformed)?;
        let rank = RANK_CHARS.iter().position(|&c| c == r).ok_or_else(malformed)?;
        Ok(Key {
            file: file as u8,
            rank: rank as u8,
        })
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
