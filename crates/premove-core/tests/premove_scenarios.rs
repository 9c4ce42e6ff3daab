//! 代表的な局面での候補手

use premove_core::types::json::PremoveRequestJson;
use premove_core::{Color, Geometry, Key, Piece, Pieces, PremoveError, Role, Variant, premove};

fn key(s: &str) -> Key {
    s.parse().unwrap()
}

fn keys(list: &[&str]) -> Vec<Key> {
    list.iter().map(|s| key(s)).collect()
}

fn place(list: &[(&str, Role, Color)]) -> Pieces {
    list.iter().map(|&(sq, role, color)| (key(sq), Piece::new(role, color))).collect()
}

fn dests_of(
    pieces: &Pieces,
    sq: &str,
    can_castle: bool,
    geom: Geometry,
    variant: Option<Variant>,
) -> Vec<Key> {
    premove(pieces, key(sq), can_castle, geom, variant).unwrap()
}

// ============================================================================
// チェス
// ============================================================================

#[test]
fn rook_on_d4_covers_file_and_rank() {
    let pieces = place(&[("d4", Role::Rook, Color::White)]);
    let dests = dests_of(&pieces, "d4", false, Geometry::Dim8x8, None);
    assert_eq!(
        dests,
        keys(&[
            "a4", "b4", "c4", "d1", "d2", "d3", "d5", "d6", "d7", "d8", "e4", "f4", "g4", "h4"
        ])
    );
}

#[test]
fn rook_ignores_blockers() {
    let pieces = place(&[
        ("d4", Role::Rook, Color::White),
        ("d5", Role::Pawn, Color::White),
        ("b4", Role::Knight, Color::Black),
    ]);
    let dests = dests_of(&pieces, "d4", false, Geometry::Dim8x8, Some(Variant::Chess));
    assert_eq!(dests.len(), 14);
    assert!(dests.contains(&key("d8")));
    assert!(dests.contains(&key("a4")));
}

#[test]
fn knight_on_b1() {
    let pieces = place(&[("b1", Role::Knight, Color::White)]);
    assert_eq!(dests_of(&pieces, "b1", false, Geometry::Dim8x8, None), keys(&["a3", "c3", "d2"]));
}

#[test]
fn king_castles_towards_both_rooks() {
    let pieces = place(&[
        ("e1", Role::King, Color::White),
        ("a1", Role::Rook, Color::White),
        ("h1", Role::Rook, Color::White),
    ]);
    assert_eq!(
        dests_of(&pieces, "e1", true, Geometry::Dim8x8, Some(Variant::Chess)),
        keys(&["c1", "d1", "d2", "e2", "f1", "f2", "g1"])
    );
    assert_eq!(
        dests_of(&pieces, "e1", false, Geometry::Dim8x8, Some(Variant::Chess)),
        keys(&["d1", "d2", "e2", "f1", "f2"])
    );
}

#[test]
fn black_king_castles_on_rank_8() {
    let pieces = place(&[("e8", Role::King, Color::Black), ("h8", Role::Rook, Color::Black)]);
    let dests = dests_of(&pieces, "e8", true, Geometry::Dim8x8, None);
    assert!(dests.contains(&key("g8")));
    assert!(!dests.contains(&key("c8")));
}

#[test]
fn enemy_rook_does_not_enable_castling() {
    let pieces = place(&[("e1", Role::King, Color::White), ("h1", Role::Rook, Color::Black)]);
    let dests = dests_of(&pieces, "e1", true, Geometry::Dim8x8, None);
    assert!(!dests.contains(&key("g1")));
}

#[test]
fn pawn_double_step_from_home() {
    let pieces = place(&[("e2", Role::Pawn, Color::White), ("e7", Role::Pawn, Color::Black)]);
    assert_eq!(
        dests_of(&pieces, "e2", false, Geometry::Dim8x8, None),
        keys(&["d3", "e3", "e4", "f3"])
    );
    assert_eq!(
        dests_of(&pieces, "e7", false, Geometry::Dim8x8, None),
        keys(&["d6", "e5", "e6", "f6"])
    );
}

#[test]
fn seirawan_and_musketeer_hawk_differ() {
    let pieces = place(&[("a1", Role::Hawk, Color::White)]);
    let seirawan = dests_of(&pieces, "a1", false, Geometry::Dim8x8, Some(Variant::Seirawan));
    // 斜め7升 + 桂馬跳び2升
    assert_eq!(seirawan.len(), 9);

    let musketeer = dests_of(&pieces, "a1", false, Geometry::Dim8x8, Some(Variant::Musketeer));
    assert_ne!(seirawan, musketeer);
}

#[test]
fn musketeer_cannon_on_d4() {
    let pieces = place(&[("d4", Role::Cannon, Color::White)]);
    let dests = dests_of(&pieces, "d4", false, Geometry::Dim8x8, Some(Variant::Musketeer));
    // 5x3 の範囲（自分を除く）+ 縦2升
    assert_eq!(dests.len(), 16);
    assert!(dests.contains(&key("d2")));
    assert!(dests.contains(&key("d6")));
    assert!(!dests.contains(&key("c2")));
}

#[test]
fn capablanca_uses_10x8() {
    let pieces = place(&[("j1", Role::Chancellor, Color::White)]);
    let dests = dests_of(&pieces, "j1", false, Geometry::Dim10x8, Some(Variant::Capablanca));
    assert!(dests.contains(&key("a1")));
    assert!(dests.contains(&key("j8")));
    assert!(dests.contains(&key("h2")));
    assert!(dests.contains(&key("i3")));
}

// ============================================================================
// シャンチー・チャンギ
// ============================================================================

#[test]
fn xiangqi_advisor_stays_in_palace() {
    let advisor = |sq| place(&[(sq, Role::Advisor, Color::White)]);
    let dests = |sq| dests_of(&advisor(sq), sq, false, Geometry::Dim9x10, Some(Variant::Xiangqi));

    // 宮の隅
    assert_eq!(dests("d1"), keys(&["e2"]));
    assert_eq!(dests("f3"), keys(&["e2"]));
    // 宮の中心
    assert_eq!(dests("e2"), keys(&["d1", "d3", "f1", "f3"]));
    // 宮から離れた升
    assert!(dests("a5").is_empty());
    assert!(dests("e5").is_empty());
}

#[test]
fn black_xiangqi_king_uses_upper_palace() {
    let pieces = place(&[("e9", Role::King, Color::Black)]);
    assert_eq!(
        dests_of(&pieces, "e9", false, Geometry::Dim9x10, Some(Variant::Xiangqi)),
        keys(&["d9", "e8", "e0", "f9"])
    );
}

#[test]
fn xiangqi_pawn_gains_sideways_after_river() {
    let pieces = place(&[("e4", Role::Pawn, Color::White), ("e6", Role::Pawn, Color::White)]);
    let xq = |sq| dests_of(&pieces, sq, false, Geometry::Dim9x10, Some(Variant::Xiangqi));
    assert_eq!(xq("e4"), keys(&["e5"]));
    assert_eq!(xq("e6"), keys(&["d6", "e7", "f6"]));
}

#[test]
fn xiangqi_elephant_does_not_cross_river() {
    let pieces = place(&[("c5", Role::Bishop, Color::White)]);
    assert_eq!(
        dests_of(&pieces, "c5", false, Geometry::Dim9x10, Some(Variant::Xiangqi)),
        keys(&["a3", "e3"])
    );
}

#[test]
fn janggi_pieces() {
    let pieces = place(&[
        ("e2", Role::King, Color::White),
        ("b1", Role::Bishop, Color::White),
        ("e4", Role::Pawn, Color::White),
    ]);
    let janggi = |sq| dests_of(&pieces, sq, false, Geometry::Dim9x10, Some(Variant::Janggi));

    assert_eq!(janggi("e2"), keys(&["d1", "d2", "d3", "e1", "e3", "f1", "f2", "f3"]));
    assert_eq!(janggi("b1"), keys(&["d4", "e3"]));
    assert_eq!(janggi("e4"), keys(&["d4", "e5", "f4"]));
}

#[test]
fn minixiangqi_palace_on_7x7() {
    let pieces = place(&[("d1", Role::King, Color::White), ("d6", Role::King, Color::Black)]);
    let mini = |sq| dests_of(&pieces, sq, false, Geometry::Dim7x7, Some(Variant::Minixiangqi));
    assert_eq!(mini("d1"), keys(&["c1", "d2", "e1"]));
    assert_eq!(mini("d6"), keys(&["c6", "d5", "d7", "e6"]));
}

// ============================================================================
// 将棋系
// ============================================================================

#[test]
fn shogi_pieces() {
    let pieces = place(&[
        ("b1", Role::Knight, Color::White),
        ("e9", Role::Lance, Color::Black),
        ("e5", Role::Gold, Color::White),
    ]);
    let shogi = |sq| dests_of(&pieces, sq, false, Geometry::Dim9x9, Some(Variant::Shogi));

    assert_eq!(shogi("b1"), keys(&["a3", "c3"]));
    assert_eq!(shogi("e9"), keys(&["e1", "e2", "e3", "e4", "e5", "e6", "e7", "e8"]));
    assert_eq!(shogi("e5"), keys(&["d5", "d6", "e4", "e6", "f5", "f6"]));
}

#[test]
fn promoted_shogi_pieces_move_like_gold() {
    let pieces = place(&[("c3", Role::PSilver, Color::Black), ("c2", Role::Gold, Color::Black)]);
    let mini = |sq| dests_of(&pieces, sq, false, Geometry::Dim5x5, Some(Variant::Minishogi));
    let offsets = |sq: &str, dests: Vec<Key>| -> Vec<(i32, i32)> {
        let from = key(sq).pos();
        dests.iter().map(|k| (k.pos().x - from.x, k.pos().y - from.y)).collect()
    };
    assert_eq!(offsets("c3", mini("c3")), offsets("c2", mini("c2")));
}

#[test]
fn dobutsu_pieces() {
    let pieces = place(&[
        ("b2", Role::Chancellor, Color::White),
        ("b1", Role::King, Color::White),
        ("a4", Role::Gold, Color::Black),
    ]);
    let animal = |sq| dests_of(&pieces, sq, false, Geometry::Dim3x4, Some(Variant::Dobutsu));

    assert_eq!(animal("b2"), keys(&["b3"]));
    assert_eq!(animal("b1"), keys(&["a1", "a2", "b2", "c1", "c2"]));
    assert_eq!(animal("a4"), keys(&["a3", "b4"]));
}

// ============================================================================
// 網羅性・一貫性
// ============================================================================

/// 全バリアントの全駒種・両手番・全升で規則が解決できる
#[test]
fn every_declared_role_resolves_everywhere() {
    let declared = Variant::ALL
        .into_iter()
        .map(|v| (Some(v), v.geometry(), v.roles()))
        .chain(std::iter::once((None, Geometry::Dim8x8, Variant::orthodox_roles())));

    for (variant, geom, roles) in declared {
        for &role in roles {
            for color in Color::ALL {
                for &sq in geom.all_keys() {
                    let pieces = Pieces::from([(sq, Piece::new(role, color))]);
                    let result = premove(&pieces, sq, true, geom, variant);
                    assert!(
                        result.is_ok(),
                        "{color} {role} on {sq} ({geom}, {variant:?}): {result:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn repeated_calls_are_identical() {
    let pieces = place(&[
        ("e1", Role::King, Color::White),
        ("a1", Role::Rook, Color::White),
        ("h1", Role::Rook, Color::White),
        ("d4", Role::Queen, Color::White),
    ]);
    for sq in ["e1", "a1", "d4"] {
        let first = dests_of(&pieces, sq, true, Geometry::Dim8x8, None);
        let second = dests_of(&pieces, sq, true, Geometry::Dim8x8, None);
        assert_eq!(first, second);
    }
}

#[test]
fn gold_on_chess_board_is_unresolved() {
    let pieces = place(&[("d4", Role::Gold, Color::White)]);
    assert!(matches!(
        premove(&pieces, key("d4"), false, Geometry::Dim8x8, None),
        Err(PremoveError::UnresolvedRule { role: Role::Gold, .. })
    ));
}

#[test]
fn request_json_drives_premove() {
    let req: PremoveRequestJson = serde_json::from_str(
        r#"{
            "pieces": { "e2": { "role": "king", "color": "white" } },
            "key": "e2",
            "variant": "janggi"
        }"#,
    )
    .unwrap();
    let geom = req.resolved_geometry();
    assert_eq!(geom, Geometry::Dim9x10);

    let dests = premove(&req.pieces, req.key.unwrap(), req.can_castle, geom, req.variant).unwrap();
    assert_eq!(dests.len(), 8);
}
