//! エラー型
//!
//! 候補手計算で発生し得る失敗をまとめる。いずれも同期的・局所的な失敗で、
//! リトライの概念はない。

use crate::dispatch::Bucket;
use crate::types::{Geometry, Key, Role, Variant};

/// 候補手計算のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PremoveError {
    /// 升目識別子として解釈できない文字列
    #[error("malformed square key: {0:?}")]
    MalformedKey(String),

    /// 移動元の升に駒がない（呼び出し側の誤り）
    #[error("no piece on {0}")]
    EmptySquare(Key),

    /// 盤の形状に含まれない升
    #[error("square {key} is not on a {geometry} board")]
    OffBoard { key: Key, geometry: Geometry },

    /// ルール表に対応する規則がない（ルール表の欠陥）
    #[error("no mobility rule for {role} in {bucket:?} bucket (variant: {})", variant_name(.variant))]
    UnresolvedRule {
        role: Role,
        bucket: Bucket,
        variant: Option<Variant>,
    },

    /// 名前から列挙値への変換失敗
    #[error("unknown {kind} name: {name:?}")]
    UnknownName { kind: &'static str, name: String },
}

fn variant_name(variant: &Option<Variant>) -> &'static str {
    variant.map_or("unset", Variant::as_str)
}

/// 候補手計算の結果型
pub type PremoveResult<T> = Result<T, PremoveError>;
