//! 駒種（Role）
//!
//! 西洋チェス・将棋・シャンチー系・フェアリー駒をひとつの閉じた列挙にまとめる。
//! 成駒は別の駒種として表す（例: `PPawn` はと金）。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PremoveError;

/// 駒種（先後の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
    Chancellor,
    PChancellor,
    Archbishop,
    Ferz,
    Met,
    Gold,
    Silver,
    Lance,
    // 成駒
    PPawn,
    PKnight,
    PBishop,
    PRook,
    PSilver,
    PLance,
    // シャンチー・チャンギ
    Advisor,
    Cannon,
    // フェアリー
    Hawk,
    Elephant,
    PFerz,
    Yurt,
    Lancer,
    Banner,
    Unicorn,
    Dragon,
}

impl Role {
    /// 駒種の数
    pub const NUM: usize = 30;

    /// 全ての駒種
    pub const ALL: [Role; Role::NUM] = [
        Role::King,
        Role::Queen,
        Role::Rook,
        Role::Bishop,
        Role::Knight,
        Role::Pawn,
        Role::Chancellor,
        Role::PChancellor,
        Role::Archbishop,
        Role::Ferz,
        Role::Met,
        Role::Gold,
        Role::Silver,
        Role::Lance,
        Role::PPawn,
        Role::PKnight,
        Role::PBishop,
        Role::PRook,
        Role::PSilver,
        Role::PLance,
        Role::Advisor,
        Role::Cannon,
        Role::Hawk,
        Role::Elephant,
        Role::PFerz,
        Role::Yurt,
        Role::Lancer,
        Role::Banner,
        Role::Unicorn,
        Role::Dragon,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::King => "king",
            Role::Queen => "queen",
            Role::Rook => "rook",
            Role::Bishop => "bishop",
            Role::Knight => "knight",
            Role::Pawn => "pawn",
            Role::Chancellor => "chancellor",
            Role::PChancellor => "pchancellor",
            Role::Archbishop => "archbishop",
            Role::Ferz => "ferz",
            Role::Met => "met",
            Role::Gold => "gold",
            Role::Silver => "silver",
            Role::Lance => "lance",
            Role::PPawn => "ppawn",
            Role::PKnight => "pknight",
            Role::PBishop => "pbishop",
            Role::PRook => "prook",
            Role::PSilver => "psilver",
            Role::PLance => "plance",
            Role::Advisor => "advisor",
            Role::Cannon => "cannon",
            Role::Hawk => "hawk",
            Role::Elephant => "elephant",
            Role::PFerz => "pferz",
            Role::Yurt => "yurt",
            Role::Lancer => "lancer",
            Role::Banner => "banner",
            Role::Unicorn => "unicorn",
            Role::Dragon => "dragon",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PremoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| PremoveError::UnknownName {
                kind: "role",
                name: s.to_string(),
            })
    }
}
