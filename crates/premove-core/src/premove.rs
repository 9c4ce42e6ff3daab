//! 候補手（premove）の計算
//!
//! 王手・ピン・手番は考慮せず、駒の移動形状だけで到達できる升を列挙する。
//! 結果は `Geometry::all_keys` の列挙順（筋優先）に並ぶ。

use std::collections::BTreeMap;

use crate::dispatch::{self, Rule};
use crate::error::{PremoveError, PremoveResult};
use crate::mobility::{Castling, Mobility, rook_files_of};
use crate::types::{Color, Geometry, Key, Piece, Pieces, Variant};

/// 手番全体の候補手（移動元 → 移動先の列）
pub type Dests = BTreeMap<Key, Vec<Key>>;

/// 駒に対応する移動形状を選び、手番・盤の形状・キャスリング条件に束縛する
pub fn mobility_of(
    pieces: &Pieces,
    piece: Piece,
    can_castle: bool,
    geom: Geometry,
    variant: Option<Variant>,
) -> PremoveResult<Mobility> {
    let rule = dispatch::resolve(piece.role, piece.color, variant, geom)?;
    // ルークの筋を調べるのはキャスリングがあり得るキングだけ
    let castling = if rule == Rule::King {
        Castling::new(piece.color, rook_files_of(pieces, piece.color), can_castle)
    } else {
        Castling::NONE
    };
    Ok(rule.bind(piece.color, geom, castling))
}

/// `key` にある駒の候補手を返す
///
/// `key` に駒がなければ `PremoveError::EmptySquare`、盤外なら `PremoveError::OffBoard`。
/// 駒があって動ける升がない場合は空の列を返す。
pub fn premove(
    pieces: &Pieces,
    key: Key,
    can_castle: bool,
    geom: Geometry,
    variant: Option<Variant>,
) -> PremoveResult<Vec<Key>> {
    if !geom.contains(key) {
        return Err(PremoveError::OffBoard { key, geometry: geom });
    }
    let piece = *pieces.get(&key).ok_or(PremoveError::EmptySquare(key))?;
    let mobility = mobility_of(pieces, piece, can_castle, geom, variant)?;

    let from = key.pos();
    Ok(geom
        .all_keys()
        .iter()
        .copied()
        .filter(|&to| to != key && mobility.allows(from, to.pos()))
        .collect())
}

/// `color` の全ての駒について候補手を計算する
///
/// 駒打ち番兵の升は無視する。
pub fn premove_dests(
    pieces: &Pieces,
    color: Color,
    can_castle: bool,
    geom: Geometry,
    variant: Option<Variant>,
) -> PremoveResult<Dests> {
    pieces
        .iter()
        .filter(|(key, piece)| piece.color == color && !key.is_drop())
        .map(|(&key, _)| Ok((key, premove(pieces, key, can_castle, geom, variant)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn key(s: &str) -> Key {
        s.parse().unwrap()
    }

    fn keys(list: &[&str]) -> Vec<Key> {
        list.iter().map(|s| key(s)).collect()
    }

    fn single(square: &str, role: Role, color: Color) -> Pieces {
        Pieces::from([(key(square), Piece::new(role, color))])
    }

    #[test]
    fn test_knight_in_corner() {
        let pieces = single("a1", Role::Knight, Color::White);
        let dests = premove(&pieces, key("a1"), false, Geometry::Dim8x8, None).unwrap();
        assert_eq!(dests, keys(&["b3", "c2"]));
    }

    #[test]
    fn test_empty_square() {
        let pieces = single("a1", Role::Knight, Color::White);
        assert_eq!(
            premove(&pieces, key("a2"), false, Geometry::Dim8x8, None),
            Err(PremoveError::EmptySquare(key("a2")))
        );
    }

    #[test]
    fn test_off_board_source() {
        let pieces = single("i9", Role::Rook, Color::White);
        assert_eq!(
            premove(&pieces, key("i9"), false, Geometry::Dim8x8, None),
            Err(PremoveError::OffBoard {
                key: key("i9"),
                geometry: Geometry::Dim8x8
            })
        );
        assert!(matches!(
            premove(&pieces, Key::DROP, false, Geometry::Dim8x8, None),
            Err(PremoveError::OffBoard { .. })
        ));
    }

    #[test]
    fn test_boxed_in_piece_has_no_dests() {
        // 最終段の歩は動ける升がない
        let pieces = single("c5", Role::Pawn, Color::White);
        let dests = premove(&pieces, key("c5"), false, Geometry::Dim5x5, Some(Variant::Minishogi))
            .unwrap();
        assert!(dests.is_empty());
    }

    #[test]
    fn test_unresolved_surfaces_as_error() {
        let pieces = single("d4", Role::Gold, Color::White);
        assert!(matches!(
            premove(&pieces, key("d4"), false, Geometry::Dim8x8, Some(Variant::Chess)),
            Err(PremoveError::UnresolvedRule { .. })
        ));
    }

    #[test]
    fn test_mobility_of_scans_rooks_for_king_only() {
        let mut pieces = single("e1", Role::King, Color::White);
        pieces.insert(key("h1"), Piece::new(Role::Rook, Color::White));

        let king = mobility_of(&pieces, pieces[&key("e1")], true, Geometry::Dim8x8, None).unwrap();
        let Mobility::King(castling) = king else {
            panic!("expected castling king, got {king:?}");
        };
        assert!(castling.enabled);
        assert_eq!(castling.rook_files.files().collect::<Vec<_>>(), [7]);

        let rook = mobility_of(&pieces, pieces[&key("h1")], true, Geometry::Dim8x8, None).unwrap();
        assert_eq!(rook, Mobility::Rook);
    }

    #[test]
    fn test_premove_dests_filters_by_color() {
        let mut pieces = single("a1", Role::Rook, Color::White);
        pieces.insert(key("b1"), Piece::new(Role::Knight, Color::White));
        pieces.insert(key("h8"), Piece::new(Role::Rook, Color::Black));

        let dests = premove_dests(&pieces, Color::White, false, Geometry::Dim8x8, None).unwrap();
        assert_eq!(dests.keys().copied().collect::<Vec<_>>(), keys(&["a1", "b1"]));
        assert_eq!(dests[&key("b1")], keys(&["a3", "c3", "d2"]));
        assert_eq!(dests[&key("a1")].len(), 14);
    }
}
