//! 盤の形状（Geometry）
//!
//! 形状ごとの全升目リストはプロセス内で一度だけ構築し、以後は読み取り専用で共有する。

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::Key;
use crate::error::PremoveError;

/// 盤の形状（幅x高さ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Geometry {
    #[serde(rename = "8x8")]
    Dim8x8 = 0,
    #[serde(rename = "9x9")]
    Dim9x9 = 1,
    #[serde(rename = "10x8")]
    Dim10x8 = 2,
    #[serde(rename = "9x10")]
    Dim9x10 = 3,
    #[serde(rename = "10x10")]
    Dim10x10 = 4,
    #[serde(rename = "5x5")]
    Dim5x5 = 5,
    #[serde(rename = "7x7")]
    Dim7x7 = 6,
    #[serde(rename = "3x4")]
    Dim3x4 = 7,
    #[serde(rename = "5x6")]
    Dim5x6 = 8,
}

/// 盤の寸法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDimensions {
    pub width: u8,
    pub height: u8,
}

const DIMENSIONS: [BoardDimensions; Geometry::NUM] = [
    BoardDimensions { width: 8, height: 8 },
    BoardDimensions { width: 9, height: 9 },
    BoardDimensions { width: 10, height: 8 },
    BoardDimensions { width: 9, height: 10 },
    BoardDimensions { width: 10, height: 10 },
    BoardDimensions { width: 5, height: 5 },
    BoardDimensions { width: 7, height: 7 },
    BoardDimensions { width: 3, height: 4 },
    BoardDimensions { width: 5, height: 6 },
];

/// 形状ごとの全升目（筋優先: a1, a2, …, b1, …）
static ALL_KEYS: LazyLock<[Vec<Key>; Geometry::NUM]> =
    LazyLock::new(|| Geometry::ALL.map(build_keys));

fn build_keys(geom: Geometry) -> Vec<Key> {
    let BoardDimensions { width, height } = geom.dimensions();
    (0..width)
        .flat_map(|file| (0..height).filter_map(move |rank| Key::new(file, rank)))
        .collect()
}

impl Geometry {
    /// 形状の数
    pub const NUM: usize = 9;

    /// 全ての形状
    pub const ALL: [Geometry; Geometry::NUM] = [
        Geometry::Dim8x8,
        Geometry::Dim9x9,
        Geometry::Dim10x8,
        Geometry::Dim9x10,
        Geometry::Dim10x10,
        Geometry::Dim5x5,
        Geometry::Dim7x7,
        Geometry::Dim3x4,
        Geometry::Dim5x6,
    ];

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn dimensions(self) -> BoardDimensions {
        DIMENSIONS[self.index()]
    }

    #[inline]
    pub const fn width(self) -> u8 {
        self.dimensions().width
    }

    #[inline]
    pub const fn height(self) -> u8 {
        self.dimensions().height
    }

    /// 全升目を筋優先の固定順で返す
    #[inline]
    pub fn all_keys(self) -> &'static [Key] {
        &ALL_KEYS[self.index()]
    }

    /// 升目がこの盤に含まれるか（駒打ち番兵は常に含まれない）
    #[inline]
    pub const fn contains(self, key: Key) -> bool {
        !key.is_drop() && key.file() < self.width() && key.rank() < self.height()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Geometry::Dim8x8 => "8x8",
            Geometry::Dim9x9 => "9x9",
            Geometry::Dim10x8 => "10x8",
            Geometry::Dim9x10 => "9x10",
            Geometry::Dim10x10 => "10x10",
            Geometry::Dim5x5 => "5x5",
            Geometry::Dim7x7 => "7x7",
            Geometry::Dim3x4 => "3x4",
            Geometry::Dim5x6 => "5x6",
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Geometry {
    type Err = PremoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Geometry::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| PremoveError::UnknownName {
                kind: "geometry",
                name: s.to_string(),
            })
    }
}
