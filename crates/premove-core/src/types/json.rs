use serde::{Deserialize, Serialize};

use super::{Color, Geometry, Key, Pieces, Variant};

/// フロントエンド側から渡される候補手計算リクエスト
///
/// ```json
/// {
///   "pieces": { "e1": { "role": "king", "color": "white" } },
///   "key": "e1",
///   "canCastle": true,
///   "geometry": "8x8",
///   "variant": "chess"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PremoveRequestJson {
    /// 盤上の駒配置
    pub pieces: Pieces,
    /// 移動元（`--all-for` 指定時は省略可）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Key>,
    /// キャスリング権が残っているか
    #[serde(default)]
    pub can_castle: bool,
    /// 省略時は variant から決める（variant も無ければ 8x8）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    /// 省略時はオーソドックス
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,
}

impl PremoveRequestJson {
    /// 実際に使う盤の形状
    pub fn resolved_geometry(&self) -> Geometry {
        self.geometry
            .or_else(|| self.variant.map(Variant::geometry))
            .unwrap_or(Geometry::Dim8x8)
    }
}

/// 1駒分の候補手
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PremoveResponseJson {
    pub key: Key,
    pub dests: Vec<Key>,
}

/// 手番全体の候補手
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DestsJson {
    pub color: Color,
    pub dests: Vec<PremoveResponseJson>,
}
