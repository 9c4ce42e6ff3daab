//! 移動形状（Mobility）
//!
//! 駒の移動パターンごとに1つの純粋な述語を持つ。手番・宮・キャスリング条件に
//! 依存するパターンはパラメータを値として保持し、クロージャは使わない。
//!
//! - `rules`: 述語の本体
//! - `Palace`: 九宮の座標集合
//! - `Castling` / `rook_files_of`: キャスリング先の判定

mod castling;
mod palace;
pub mod rules;

pub use castling::{Castling, RookFiles, home_rank, rook_files_of};
pub use palace::{BLACK_PALACE, BLACK_PALACE_7X7, Palace, WHITE_PALACE, WHITE_PALACE_7X7};

use crate::types::{Color, Geometry, Pos};

/// パラメータ込みの移動形状
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mobility {
    // チェス
    Pawn(Color),
    Knight,
    Bishop,
    Rook,
    Queen,
    King(Castling),
    // 複合駒
    Archbishop,
    Chancellor,
    Kniroo,
    Knibis,
    Centaur,
    Dragon,
    Unicorn,
    // 将棋
    ShogiPawn(Color),
    ShogiKnight(Color),
    Lance(Color),
    Silver(Color),
    Gold(Color),
    ProRook,
    ProBishop,
    ShogiKing,
    // シャンチー・チャンギ
    XiangqiPawn(Color),
    XiangqiElephant(Color),
    XiangqiAdvisor(&'static Palace),
    XiangqiKing(&'static Palace),
    JanggiPawn(Color),
    JanggiElephant,
    JanggiKing(&'static Palace),
    // その他
    Met,
    Wazir,
    ShakoElephant,
    Leopard,
    MusketeerHawk,
    MusketeerElephant,
    MusketeerCannon,
    Fortress,
    Spider,
}

impl Mobility {
    /// シャンチーの士（宮は手番と盤の形状で決まる）
    pub fn xiangqi_advisor(color: Color, geom: Geometry) -> Mobility {
        Mobility::XiangqiAdvisor(Palace::of(color, geom))
    }

    /// シャンチーの将
    pub fn xiangqi_king(color: Color, geom: Geometry) -> Mobility {
        Mobility::XiangqiKing(Palace::of(color, geom))
    }

    /// チャンギの将・士
    pub fn janggi_king(color: Color) -> Mobility {
        Mobility::JanggiKing(Palace::janggi(color))
    }

    /// from から to への移動が形状として可能か
    ///
    /// 盤上の駒や経路の遮りは見ない。from == to の扱いは呼び出し側で除外する。
    pub fn allows(&self, from: Pos, to: Pos) -> bool {
        use rules::*;
        match *self {
            Mobility::Pawn(color) => pawn(color, from, to),
            Mobility::Knight => knight(from, to),
            Mobility::Bishop => bishop(from, to),
            Mobility::Rook => rook(from, to),
            Mobility::Queen => queen(from, to),
            Mobility::King(ref castling) => king(castling, from, to),
            Mobility::Archbishop => archbishop(from, to),
            Mobility::Chancellor => chancellor(from, to),
            Mobility::Kniroo => kniroo(from, to),
            Mobility::Knibis => knibis(from, to),
            Mobility::Centaur => centaur(from, to),
            Mobility::Dragon => dragon(from, to),
            Mobility::Unicorn => unicorn(from, to),
            Mobility::ShogiPawn(color) => shogi_pawn(color, from, to),
            Mobility::ShogiKnight(color) => shogi_knight(color, from, to),
            Mobility::Lance(color) => lance(color, from, to),
            Mobility::Silver(color) => silver(color, from, to),
            Mobility::Gold(color) => gold(color, from, to),
            Mobility::ProRook => pro_rook(from, to),
            Mobility::ProBishop => pro_bishop(from, to),
            Mobility::ShogiKing => king_step(from, to),
            Mobility::XiangqiPawn(color) => xiangqi_pawn(color, from, to),
            Mobility::XiangqiElephant(color) => xiangqi_elephant(color, from, to),
            Mobility::XiangqiAdvisor(palace) => xiangqi_advisor(palace, from, to),
            Mobility::XiangqiKing(palace) => xiangqi_king(palace, from, to),
            Mobility::JanggiPawn(color) => janggi_pawn(color, from, to),
            Mobility::JanggiElephant => janggi_elephant(from, to),
            Mobility::JanggiKing(palace) => janggi_king(palace, from, to),
            Mobility::Met => met(from, to),
            Mobility::Wazir => wazir(from, to),
            Mobility::ShakoElephant => shako_elephant(from, to),
            Mobility::Leopard => leopard(from, to),
            Mobility::MusketeerHawk => musketeer_hawk(from, to),
            Mobility::MusketeerElephant => musketeer_elephant(from, to),
            Mobility::MusketeerCannon => musketeer_cannon(from, to),
            Mobility::Fortress => fortress(from, to),
            Mobility::Spider => spider(from, to),
        }
    }
}
