//! ルール表
//!
//! (バケット, 駒種) ごとに (条件, 規則) を並べる。同じキーの中では後に書いた
//! エントリほど具体的で、条件に合う最後のエントリが採用される。

use super::{Bucket, Condition, Rule};
use crate::types::{Color, Geometry, Role, Variant};

use Bucket::{Animal, Palace, Shogi, Standard};
use Condition::Always;

const JANGGI: Condition = Condition::Variants(&[Variant::Janggi]);
const ORDA: Condition = Condition::Variants(&[Variant::Orda]);
const MUSKETEER: Condition = Condition::Variants(&[Variant::Musketeer]);
const SYNOCHESS: Condition = Condition::Variants(&[Variant::Synochess]);
const SHAKO_OR_SYNOCHESS: Condition = Condition::Variants(&[Variant::Shako, Variant::Synochess]);

pub(super) type Entry = (Bucket, Role, Condition, Rule);

pub(super) const CATALOGUE: &[Entry] = &[
    // ------------------------------------------------------------------------
    // シャンチー・チャンギ系（7x7, 9x10）
    // ------------------------------------------------------------------------
    // TODO: チャンギの宮内では卒も斜め前に進める
    (Palace, Role::Pawn, Always, Rule::XiangqiPawn),
    (Palace, Role::Pawn, JANGGI, Rule::JanggiPawn),
    // ミニシャンチーには川がない
    (Palace, Role::Pawn, Condition::Geometry(Geometry::Dim7x7), Rule::JanggiPawn),
    (Palace, Role::Banner, Always, Rule::Kniroo),
    // TODO: チャンギの宮内では車・包も対角線上を動ける
    (Palace, Role::Cannon, Always, Rule::Rook),
    (Palace, Role::Rook, Always, Rule::Rook),
    (Palace, Role::Knight, Always, Rule::Knight),
    (Palace, Role::Bishop, Always, Rule::XiangqiElephant),
    (Palace, Role::Bishop, JANGGI, Rule::JanggiElephant),
    (Palace, Role::Advisor, Always, Rule::XiangqiAdvisor),
    (Palace, Role::Advisor, JANGGI, Rule::JanggiKing),
    (Palace, Role::King, Always, Rule::XiangqiKing),
    (Palace, Role::King, JANGGI, Rule::JanggiKing),
    // ------------------------------------------------------------------------
    // 将棋系（5x5, 9x9）
    // ------------------------------------------------------------------------
    (Shogi, Role::Pawn, Always, Rule::ShogiPawn),
    (Shogi, Role::Knight, Always, Rule::ShogiKnight),
    (Shogi, Role::Bishop, Always, Rule::Bishop),
    (Shogi, Role::Rook, Always, Rule::Rook),
    (Shogi, Role::King, Always, Rule::ShogiKing),
    (Shogi, Role::Silver, Always, Rule::Silver),
    (Shogi, Role::PPawn, Always, Rule::Gold),
    (Shogi, Role::PLance, Always, Rule::Gold),
    (Shogi, Role::PKnight, Always, Rule::Gold),
    (Shogi, Role::PSilver, Always, Rule::Gold),
    (Shogi, Role::Gold, Always, Rule::Gold),
    (Shogi, Role::Lance, Always, Rule::Lance),
    (Shogi, Role::PRook, Always, Rule::ProRook),
    (Shogi, Role::PBishop, Always, Rule::ProBishop),
    // ------------------------------------------------------------------------
    // どうぶつしょうぎ（3x4）
    // ------------------------------------------------------------------------
    // ひよこ
    (Animal, Role::Chancellor, Always, Rule::ShogiPawn),
    // ぞう
    (Animal, Role::Elephant, Always, Rule::Met),
    // きりん
    (Animal, Role::Gold, Always, Rule::Wazir),
    // らいおん
    (Animal, Role::King, Always, Rule::ShogiKing),
    // にわとり
    (Animal, Role::PChancellor, Always, Rule::Gold),
    // ------------------------------------------------------------------------
    // チェス・フェアリー系（その他の形状）
    // ------------------------------------------------------------------------
    (Standard, Role::Pawn, Always, Rule::Pawn),
    (Standard, Role::Knight, Always, Rule::Knight),
    // Shogun
    (Standard, Role::PKnight, Always, Rule::Centaur),
    (Standard, Role::Bishop, Always, Rule::Bishop),
    (Standard, Role::Rook, Always, Rule::Rook),
    // Shogun
    (Standard, Role::PFerz, Always, Rule::Queen),
    (Standard, Role::Queen, Always, Rule::Queen),
    // Shogun
    (Standard, Role::PPawn, Always, Rule::ShogiKing),
    (Standard, Role::King, Always, Rule::King),
    (
        Standard,
        Role::King,
        Condition::VariantColor(Variant::Synochess, Color::Black),
        Rule::ShogiKing,
    ),
    // Seirawan
    (Standard, Role::Hawk, Always, Rule::Archbishop),
    (Standard, Role::Hawk, ORDA, Rule::Centaur),
    (Standard, Role::Hawk, MUSKETEER, Rule::MusketeerHawk),
    // Shogun
    (Standard, Role::PBishop, Always, Rule::Archbishop),
    (Standard, Role::PBishop, ORDA, Rule::Knibis),
    (Standard, Role::PBishop, SYNOCHESS, Rule::ShogiKing),
    (Standard, Role::Archbishop, Always, Rule::Archbishop),
    (Standard, Role::Archbishop, ORDA, Rule::Knibis),
    (Standard, Role::Archbishop, SYNOCHESS, Rule::ShogiKing),
    // Orda
    (Standard, Role::Lancer, Always, Rule::Kniroo),
    (Standard, Role::Lancer, MUSKETEER, Rule::Leopard),
    // Seirawan
    (Standard, Role::Elephant, Always, Rule::Chancellor),
    (Standard, Role::Elephant, SHAKO_OR_SYNOCHESS, Rule::ShakoElephant),
    (Standard, Role::Elephant, MUSKETEER, Rule::MusketeerElephant),
    // Shogun
    (Standard, Role::PRook, Always, Rule::Chancellor),
    // Shako・Synochess の大砲
    (Standard, Role::PRook, SHAKO_OR_SYNOCHESS, Rule::Rook),
    (Standard, Role::Chancellor, Always, Rule::Chancellor),
    (Standard, Role::Chancellor, SHAKO_OR_SYNOCHESS, Rule::Rook),
    (Standard, Role::Met, Always, Rule::Met),
    (Standard, Role::Met, MUSKETEER, Rule::Fortress),
    (Standard, Role::Ferz, Always, Rule::Met),
    (Standard, Role::Ferz, MUSKETEER, Rule::Fortress),
    // Orda
    (Standard, Role::Yurt, Always, Rule::Silver),
    (Standard, Role::Yurt, SYNOCHESS, Rule::JanggiPawn),
    (Standard, Role::Yurt, MUSKETEER, Rule::Spider),
    (Standard, Role::Silver, Always, Rule::Silver),
    (Standard, Role::Silver, SYNOCHESS, Rule::JanggiPawn),
    (Standard, Role::Silver, MUSKETEER, Rule::Spider),
    // Musketeer
    (Standard, Role::Cannon, Always, Rule::MusketeerCannon),
    (Standard, Role::Unicorn, Always, Rule::Unicorn),
    (Standard, Role::Dragon, Always, Rule::Dragon),
];
