//! 移動形状の述語
//!
//! いずれも (移動元, 移動先) の座標だけを見る純粋関数で、盤上の駒や
//! 経路の遮りは考慮しない。dx, dy は筋・段の差の絶対値。

use super::{Castling, Palace};
use crate::types::{Color, Pos};

/// 筋・段の差の絶対値
#[inline]
fn delta(from: Pos, to: Pos) -> (i32, i32) {
    ((from.x - to.x).abs(), (from.y - to.y).abs())
}

/// 前方向（白は段が増える方向）
#[inline]
const fn forward(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

#[inline]
fn step_forward(color: Color, from: Pos, to: Pos) -> bool {
    to.x == from.x && to.y == from.y + forward(color)
}

// ============================================================================
// 基本形
// ============================================================================

#[inline]
pub fn knight(from: Pos, to: Pos) -> bool {
    matches!(delta(from, to), (1, 2) | (2, 1))
}

#[inline]
pub fn wazir(from: Pos, to: Pos) -> bool {
    matches!(delta(from, to), (1, 0) | (0, 1))
}

#[inline]
pub fn bishop(from: Pos, to: Pos) -> bool {
    let (dx, dy) = delta(from, to);
    dx == dy
}

#[inline]
pub fn rook(from: Pos, to: Pos) -> bool {
    from.x == to.x || from.y == to.y
}

#[inline]
pub fn queen(from: Pos, to: Pos) -> bool {
    bishop(from, to) || rook(from, to)
}

/// 8近傍への1歩（将棋の玉）
#[inline]
pub fn king_step(from: Pos, to: Pos) -> bool {
    let (dx, dy) = delta(from, to);
    dx < 2 && dy < 2
}

/// 斜め1歩（マークルックの Met）
#[inline]
pub fn met(from: Pos, to: Pos) -> bool {
    delta(from, to) == (1, 1)
}

// ============================================================================
// チェス
// ============================================================================

/// ポーン
///
/// 2歩前進は各陣の手前2段から許可する（初期配置の広いバリアント向けに緩めてある）。
pub fn pawn(color: Color, from: Pos, to: Pos) -> bool {
    let (dx, _) = delta(from, to);
    dx < 2
        && match color {
            Color::White => {
                to.y == from.y + 1 || (from.y <= 1 && to.y == from.y + 2 && from.x == to.x)
            }
            Color::Black => {
                to.y == from.y - 1 || (from.y >= 6 && to.y == from.y - 2 && from.x == to.x)
            }
        }
}

/// キング（キャスリング先を含む）
#[inline]
pub fn king(castling: &Castling, from: Pos, to: Pos) -> bool {
    king_step(from, to) || castling.allows(from, to)
}

// ============================================================================
// 複合駒
// ============================================================================

#[inline]
pub fn archbishop(from: Pos, to: Pos) -> bool {
    bishop(from, to) || knight(from, to)
}

#[inline]
pub fn chancellor(from: Pos, to: Pos) -> bool {
    rook(from, to) || knight(from, to)
}

/// オルダの Lancer
#[inline]
pub fn kniroo(from: Pos, to: Pos) -> bool {
    knight(from, to) || rook(from, to)
}

/// オルダの Archer
#[inline]
pub fn knibis(from: Pos, to: Pos) -> bool {
    knight(from, to) || bishop(from, to)
}

/// Shogun の General、オルダの Kheshig
#[inline]
pub fn centaur(from: Pos, to: Pos) -> bool {
    king_step(from, to) || knight(from, to)
}

// ============================================================================
// 将棋
// ============================================================================

pub fn shogi_pawn(color: Color, from: Pos, to: Pos) -> bool {
    step_forward(color, from, to)
}

pub fn shogi_knight(color: Color, from: Pos, to: Pos) -> bool {
    let (dx, _) = delta(from, to);
    dx == 1 && to.y == from.y + 2 * forward(color)
}

pub fn lance(color: Color, from: Pos, to: Pos) -> bool {
    to.x == from.x && (to.y - from.y) * forward(color) > 0
}

/// 銀（マークルック・シットゥインの象も同じ）
pub fn silver(color: Color, from: Pos, to: Pos) -> bool {
    met(from, to) || step_forward(color, from, to)
}

/// 金（と金・成香・成桂・成銀も同じ）: 玉の動きから後ろ斜め2方向を除く
pub fn gold(color: Color, from: Pos, to: Pos) -> bool {
    let (dx, _) = delta(from, to);
    king_step(from, to) && !(dx == 1 && to.y == from.y - forward(color))
}

/// 龍
#[inline]
pub fn pro_rook(from: Pos, to: Pos) -> bool {
    rook(from, to) || king_step(from, to)
}

/// 馬
#[inline]
pub fn pro_bishop(from: Pos, to: Pos) -> bool {
    bishop(from, to) || king_step(from, to)
}

// ============================================================================
// シャンチー・チャンギ
// ============================================================================

/// 川を越えているか（9x10 盤: 白陣は 0..=4 段、黒陣は 5..=9 段）
#[inline]
const fn across_river(color: Color, y: i32) -> bool {
    match color {
        Color::White => y >= 5,
        Color::Black => y <= 4,
    }
}

/// 兵・卒: 前へ1歩、川を越えたら横へも1歩
pub fn xiangqi_pawn(color: Color, from: Pos, to: Pos) -> bool {
    let (dx, _) = delta(from, to);
    step_forward(color, from, to)
        || (to.y == from.y && dx == 1 && across_river(color, from.y))
}

/// 相・象: 斜め2歩、自陣から出ない
pub fn xiangqi_elephant(color: Color, from: Pos, to: Pos) -> bool {
    delta(from, to) == (2, 2) && !across_river(color, to.y)
}

/// 士: 九宮内の斜め1歩
pub fn xiangqi_advisor(palace: &Palace, from: Pos, to: Pos) -> bool {
    met(from, to) && palace.contains(to)
}

/// 将・帥: 九宮内の縦横1歩
pub fn xiangqi_king(palace: &Palace, from: Pos, to: Pos) -> bool {
    wazir(from, to) && palace.contains(to)
}

/// チャンギの卒・兵: 前と横へ1歩（宮内の斜めは扱わない）
pub fn janggi_pawn(color: Color, from: Pos, to: Pos) -> bool {
    let (dx, _) = delta(from, to);
    step_forward(color, from, to) || (to.y == from.y && dx == 1)
}

/// チャンギの将・士: 宮内の8近傍1歩
pub fn janggi_king(palace: &Palace, from: Pos, to: Pos) -> bool {
    king_step(from, to) && palace.contains(to)
}

/// チャンギの象: (2,3) 跳び
#[inline]
pub fn janggi_elephant(from: Pos, to: Pos) -> bool {
    matches!(delta(from, to), (2, 3) | (3, 2))
}

// ============================================================================
// その他のバリアント
// ============================================================================

/// 将棋チェス(Shako)の象: 斜め1〜2歩
#[inline]
pub fn shako_elephant(from: Pos, to: Pos) -> bool {
    matches!(delta(from, to), (1, 1) | (2, 2))
}

/// マスケティアの Leopard
pub fn leopard(from: Pos, to: Pos) -> bool {
    let (dx, dy) = delta(from, to);
    (dx == 1 || dx == 2) && (dy == 1 || dy == 2)
}

/// マスケティアの Hawk: 8方向へ2または3升の跳び
pub fn musketeer_hawk(from: Pos, to: Pos) -> bool {
    let (dx, dy) = delta(from, to);
    (dx == 0 && (dy == 2 || dy == 3))
        || (dy == 0 && (dx == 2 || dx == 3))
        || (dx == dy && (dx == 2 || dx == 3))
}

/// マスケティアの Elephant
pub fn musketeer_elephant(from: Pos, to: Pos) -> bool {
    let (dx, dy) = delta(from, to);
    dx == 1 || dy == 1 || (dx == 2 && (dy == 0 || dy == 2)) || (dx == 0 && dy == 2)
}

/// マスケティアの Cannon
pub fn musketeer_cannon(from: Pos, to: Pos) -> bool {
    let (dx, dy) = delta(from, to);
    dx < 3 && (dy < 2 || (dy == 2 && dx == 0))
}

/// マスケティアの Unicorn: 桂馬跳び + (1,3) 跳び
pub fn unicorn(from: Pos, to: Pos) -> bool {
    knight(from, to) || matches!(delta(from, to), (1, 3) | (3, 1))
}

/// マスケティアの Dragon
#[inline]
pub fn dragon(from: Pos, to: Pos) -> bool {
    knight(from, to) || queen(from, to)
}

/// マスケティアの Fortress
pub fn fortress(from: Pos, to: Pos) -> bool {
    let (dx, dy) = delta(from, to);
    (dx == dy && dx < 4) || (dy == 0 && dx == 2) || (dy == 2 && dx < 2)
}

/// マスケティアの Spider: 5x5 範囲から縦横1歩を除く
pub fn spider(from: Pos, to: Pos) -> bool {
    let (dx, dy) = delta(from, to);
    dx < 3 && dy < 3 && (dx, dy) != (1, 0) && (dx, dy) != (0, 1)
}
