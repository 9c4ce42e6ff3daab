//! ゲームのバリアント（Variant）
//!
//! 各バリアントは盤の形状と、盤上に現れ得る駒種の一覧を宣言する。
//! 一覧はルール表の網羅性チェックに使う。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Geometry, Role};
use crate::error::PremoveError;

/// バリアント
///
/// 未指定（オーソドックス）は `Option<Variant>` の `None` で表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Chess,
    Makruk,
    Cambodian,
    Sittuyin,
    Shogi,
    Minishogi,
    Kyotoshogi,
    Xiangqi,
    Minixiangqi,
    Capablanca,
    Seirawan,
    Capahouse,
    Shouse,
    Grand,
    Grandhouse,
    Gothic,
    Gothhouse,
    Shako,
    Shogun,
    Janggi,
    Makpong,
    Orda,
    Synochess,
    Manchu,
    Musketeer,
    Dobutsu,
}

use Role::*;

const ORTHODOX: &[Role] = &[King, Queen, Rook, Bishop, Knight, Pawn];
const MAKRUK: &[Role] = &[King, Met, Silver, Knight, Rook, Pawn, Ferz];
const SITTUYIN: &[Role] = &[King, Ferz, Silver, Knight, Rook, Pawn];
const SHOGI: &[Role] = &[
    King, Rook, Bishop, Gold, Silver, Knight, Lance, Pawn, PPawn, PLance, PKnight, PSilver,
    PBishop, PRook,
];
const MINISHOGI: &[Role] = &[
    King, Rook, Bishop, Gold, Silver, Pawn, PPawn, PSilver, PBishop, PRook,
];
// 京都将棋は全ての駒が表裏で入れ替わり、裏面は成駒の駒種で表す
const KYOTOSHOGI: &[Role] = &[
    King, Pawn, Lance, Knight, Silver, PPawn, PLance, PKnight, PSilver,
];
const XIANGQI: &[Role] = &[King, Advisor, Bishop, Knight, Rook, Cannon, Pawn];
const MINIXIANGQI: &[Role] = &[King, Knight, Rook, Cannon, Pawn];
const MANCHU: &[Role] = &[King, Advisor, Bishop, Knight, Rook, Cannon, Pawn, Banner];
const CAPABLANCA: &[Role] = &[
    King, Queen, Rook, Bishop, Knight, Pawn, Archbishop, Chancellor,
];
const SEIRAWAN: &[Role] = &[King, Queen, Rook, Bishop, Knight, Pawn, Hawk, Elephant];
const SHAKO: &[Role] = &[King, Queen, Rook, Bishop, Knight, Pawn, Elephant, Chancellor];
const SHOGUN: &[Role] = &[
    King, Rook, Bishop, Knight, Pawn, Ferz, PPawn, PKnight, PBishop, PRook, PFerz,
];
const ORDA: &[Role] = &[
    King, Queen, Rook, Bishop, Knight, Pawn, Lancer, Archbishop, Hawk, Yurt,
];
const SYNOCHESS: &[Role] = &[
    King, Queen, Rook, Bishop, Knight, Pawn, Archbishop, Elephant, Chancellor, Silver,
];
const MUSKETEER: &[Role] = &[
    King, Queen, Rook, Bishop, Knight, Pawn, Lancer, Hawk, Elephant, Cannon, Unicorn, Dragon,
    Ferz, Silver,
];
// ひよこ=chancellor, にわとり=pchancellor, ぞう=elephant, きりん=gold, らいおん=king
const DOBUTSU: &[Role] = &[King, Chancellor, PChancellor, Elephant, Gold];

impl Variant {
    /// バリアントの数
    pub const NUM: usize = 26;

    /// 全てのバリアント
    pub const ALL: [Variant; Variant::NUM] = [
        Variant::Chess,
        Variant::Makruk,
        Variant::Cambodian,
        Variant::Sittuyin,
        Variant::Shogi,
        Variant::Minishogi,
        Variant::Kyotoshogi,
        Variant::Xiangqi,
        Variant::Minixiangqi,
        Variant::Capablanca,
        Variant::Seirawan,
        Variant::Capahouse,
        Variant::Shouse,
        Variant::Grand,
        Variant::Grandhouse,
        Variant::Gothic,
        Variant::Gothhouse,
        Variant::Shako,
        Variant::Shogun,
        Variant::Janggi,
        Variant::Makpong,
        Variant::Orda,
        Variant::Synochess,
        Variant::Manchu,
        Variant::Musketeer,
        Variant::Dobutsu,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Chess => "chess",
            Variant::Makruk => "makruk",
            Variant::Cambodian => "cambodian",
            Variant::Sittuyin => "sittuyin",
            Variant::Shogi => "shogi",
            Variant::Minishogi => "minishogi",
            Variant::Kyotoshogi => "kyotoshogi",
            Variant::Xiangqi => "xiangqi",
            Variant::Minixiangqi => "minixiangqi",
            Variant::Capablanca => "capablanca",
            Variant::Seirawan => "seirawan",
            Variant::Capahouse => "capahouse",
            Variant::Shouse => "shouse",
            Variant::Grand => "grand",
            Variant::Grandhouse => "grandhouse",
            Variant::Gothic => "gothic",
            Variant::Gothhouse => "gothhouse",
            Variant::Shako => "shako",
            Variant::Shogun => "shogun",
            Variant::Janggi => "janggi",
            Variant::Makpong => "makpong",
            Variant::Orda => "orda",
            Variant::Synochess => "synochess",
            Variant::Manchu => "manchu",
            Variant::Musketeer => "musketeer",
            Variant::Dobutsu => "dobutsu",
        }
    }

    /// 盤の形状
    pub const fn geometry(self) -> Geometry {
        match self {
            Variant::Shogi => Geometry::Dim9x9,
            Variant::Minishogi | Variant::Kyotoshogi => Geometry::Dim5x5,
            Variant::Xiangqi | Variant::Janggi | Variant::Manchu => Geometry::Dim9x10,
            Variant::Minixiangqi => Geometry::Dim7x7,
            Variant::Capablanca
            | Variant::Capahouse
            | Variant::Gothic
            | Variant::Gothhouse => Geometry::Dim10x8,
            Variant::Grand | Variant::Grandhouse | Variant::Shako => Geometry::Dim10x10,
            Variant::Dobutsu => Geometry::Dim3x4,
            Variant::Chess
            | Variant::Makruk
            | Variant::Cambodian
            | Variant::Sittuyin
            | Variant::Seirawan
            | Variant::Shouse
            | Variant::Shogun
            | Variant::Makpong
            | Variant::Orda
            | Variant::Synochess
            | Variant::Musketeer => Geometry::Dim8x8,
        }
    }

    /// 盤上に現れ得る駒種（成駒を含む、両手番の和集合）
    pub const fn roles(self) -> &'static [Role] {
        match self {
            Variant::Chess => ORTHODOX,
            Variant::Makruk | Variant::Cambodian | Variant::Makpong => MAKRUK,
            Variant::Sittuyin => SITTUYIN,
            Variant::Shogi => SHOGI,
            Variant::Minishogi => MINISHOGI,
            Variant::Kyotoshogi => KYOTOSHOGI,
            Variant::Xiangqi | Variant::Janggi => XIANGQI,
            Variant::Minixiangqi => MINIXIANGQI,
            Variant::Manchu => MANCHU,
            Variant::Capablanca
            | Variant::Capahouse
            | Variant::Gothic
            | Variant::Gothhouse
            | Variant::Grand
            | Variant::Grandhouse => CAPABLANCA,
            Variant::Seirawan | Variant::Shouse => SEIRAWAN,
            Variant::Shako => SHAKO,
            Variant::Shogun => SHOGUN,
            Variant::Orda => ORDA,
            Variant::Synochess => SYNOCHESS,
            Variant::Musketeer => MUSKETEER,
            Variant::Dobutsu => DOBUTSU,
        }
    }

    /// 未指定（オーソドックス）時の駒種
    pub const fn orthodox_roles() -> &'static [Role] {
        ORTHODOX
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = PremoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| PremoveError::UnknownName {
                kind: "variant",
                name: s.to_string(),
            })
    }
}
