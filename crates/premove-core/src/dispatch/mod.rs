//! 移動形状の選択
//!
//! 盤の形状からバケットを決め、(バケット, 駒種) のルール表から条件に合う規則を引く。
//! 規則を手番・盤の形状・キャスリング条件に束縛すると `Mobility` になる。
//!
//! ルール表にない組み合わせは「動けない」ではなく `PremoveError::UnresolvedRule`
//! として返し、表の欠落を検出できるようにする。

mod table;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{PremoveError, PremoveResult};
use crate::mobility::{Castling, Mobility};
use crate::types::{Color, Geometry, Role, Variant};

/// 盤の形状による大分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// シャンチー・チャンギ系（7x7, 9x10）
    Palace,
    /// 将棋系（5x5, 9x9）
    Shogi,
    /// どうぶつしょうぎ（3x4）
    Animal,
    /// チェス・フェアリー系（その他）
    Standard,
}

impl Bucket {
    pub const fn of(geom: Geometry) -> Bucket {
        match geom {
            Geometry::Dim7x7 | Geometry::Dim9x10 => Bucket::Palace,
            Geometry::Dim5x5 | Geometry::Dim9x9 => Bucket::Shogi,
            Geometry::Dim3x4 => Bucket::Animal,
            Geometry::Dim8x8 | Geometry::Dim10x8 | Geometry::Dim10x10 | Geometry::Dim5x6 => {
                Bucket::Standard
            }
        }
    }
}

/// ルール表のエントリが適用される条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// バケットの既定
    Always,
    /// いずれかのバリアント
    Variants(&'static [Variant]),
    /// バリアントかつ手番
    VariantColor(Variant, Color),
    /// 盤の形状
    Geometry(Geometry),
}

impl Condition {
    fn matches(&self, variant: Option<Variant>, color: Color, geom: Geometry) -> bool {
        match *self {
            Condition::Always => true,
            Condition::Variants(variants) => variant.is_some_and(|v| variants.contains(&v)),
            Condition::VariantColor(v, c) => variant == Some(v) && color == c,
            Condition::Geometry(g) => geom == g,
        }
    }
}

/// 手番・形状に束縛する前の規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Archbishop,
    Chancellor,
    Kniroo,
    Knibis,
    Centaur,
    Dragon,
    Unicorn,
    ShogiPawn,
    ShogiKnight,
    Lance,
    Silver,
    Gold,
    ProRook,
    ProBishop,
    ShogiKing,
    XiangqiPawn,
    XiangqiElephant,
    XiangqiAdvisor,
    XiangqiKing,
    JanggiPawn,
    JanggiElephant,
    JanggiKing,
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

impl Rule {
    /// 手番と盤の形状、キャスリング条件に束縛する
    ///
    /// `castling` は `Rule::King` のときだけ使われる。
    pub fn bind(self, color: Color, geom: Geometry, castling: Castling) -> Mobility {
        match self {
            Rule::Pawn => Mobility::Pawn(color),
            Rule::Knight => Mobility::Knight,
            Rule::Bishop => Mobility::Bishop,
            Rule::Rook => Mobility::Rook,
            Rule::Queen => Mobility::Queen,
            Rule::King => Mobility::King(castling),
            Rule::Archbishop => Mobility::Archbishop,
            Rule::Chancellor => Mobility::Chancellor,
            Rule::Kniroo => Mobility::Kniroo,
            Rule::Knibis => Mobility::Knibis,
            Rule::Centaur => Mobility::Centaur,
            Rule::Dragon => Mobility::Dragon,
            Rule::Unicorn => Mobility::Unicorn,
            Rule::ShogiPawn => Mobility::ShogiPawn(color),
            Rule::ShogiKnight => Mobility::ShogiKnight(color),
            Rule::Lance => Mobility::Lance(color),
            Rule::Silver => Mobility::Silver(color),
            Rule::Gold => Mobility::Gold(color),
            Rule::ProRook => Mobility::ProRook,
            Rule::ProBishop => Mobility::ProBishop,
            Rule::ShogiKing => Mobility::ShogiKing,
            Rule::XiangqiPawn => Mobility::XiangqiPawn(color),
            Rule::XiangqiElephant => Mobility::XiangqiElephant(color),
            Rule::XiangqiAdvisor => Mobility::xiangqi_advisor(color, geom),
            Rule::XiangqiKing => Mobility::xiangqi_king(color, geom),
            Rule::JanggiPawn => Mobility::JanggiPawn(color),
            Rule::JanggiElephant => Mobility::JanggiElephant,
            Rule::JanggiKing => Mobility::janggi_king(color),
            Rule::Met => Mobility::Met,
            Rule::Wazir => Mobility::Wazir,
            Rule::ShakoElephant => Mobility::ShakoElephant,
            Rule::Leopard => Mobility::Leopard,
            Rule::MusketeerHawk => Mobility::MusketeerHawk,
            Rule::MusketeerElephant => Mobility::MusketeerElephant,
            Rule::MusketeerCannon => Mobility::MusketeerCannon,
            Rule::Fortress => Mobility::Fortress,
            Rule::Spider => Mobility::Spider,
        }
    }
}

type RuleTable = HashMap<(Bucket, Role), Vec<(Condition, Rule)>>;

/// (バケット, 駒種) → 条件付き規則の列（表の記述順）
static RULE_TABLE: LazyLock<RuleTable> = LazyLock::new(|| {
    let mut map = RuleTable::new();
    for &(bucket, role, condition, rule) in table::CATALOGUE {
        map.entry((bucket, role)).or_default().push((condition, rule));
    }
    log::debug!("rule table built: {} keys, {} entries", map.len(), table::CATALOGUE.len());
    map
});

/// 駒種・手番・バリアント・盤の形状から規則を選ぶ
pub fn resolve(
    role: Role,
    color: Color,
    variant: Option<Variant>,
    geom: Geometry,
) -> PremoveResult<Rule> {
    let bucket = Bucket::of(geom);
    let rule = RULE_TABLE
        .get(&(bucket, role))
        .and_then(|entries| {
            entries
                .iter()
                .rev()
                .find(|(condition, _)| condition.matches(variant, color, geom))
                .map(|&(_, rule)| rule)
        })
        .ok_or(PremoveError::UnresolvedRule {
            role,
            bucket,
            variant,
        })?;
    log::debug!("resolved {color} {role} on {geom} ({variant:?}) -> {rule:?}");
    Ok(rule)
}

/// 宣言された全バリアントについて、盤上に現れ得る駒種が全て解決できるか確認する
///
/// 成功時は確認した組み合わせの数を返す。最初に見つかった欠落をエラーとして返す。
pub fn self_check() -> PremoveResult<usize> {
    let declared = Variant::ALL
        .into_iter()
        .map(|v| (Some(v), v.geometry(), v.roles()))
        .chain(std::iter::once((
            None,
            Geometry::Dim8x8,
            Variant::orthodox_roles(),
        )));

    let mut checked = 0;
    for (variant, geom, roles) in declared {
        for &role in roles {
            for color in Color::ALL {
                resolve(role, color, variant, geom)?;
                checked += 1;
            }
        }
    }
    log::info!("rule table self-check passed: {checked} combinations");
    Ok(checked)
}
