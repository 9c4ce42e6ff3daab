//! 九宮（Palace）
//!
//! 手番と盤の形状ごとに固定の 3x3 座標集合を持つ。

use crate::types::{Color, Geometry, Pos};

/// 3x3 の宮の座標集合
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palace {
    cells: [Pos; 9],
}

impl Palace {
    /// 左下隅 (left, bottom) から 3x3 の宮を作る
    const fn square(left: i32, bottom: i32) -> Palace {
        let mut cells = [Pos::new(0, 0); 9];
        let mut i = 0;
        while i < 9 {
            cells[i] = Pos::new(left + (i % 3) as i32, bottom + (i / 3) as i32);
            i += 1;
        }
        Palace { cells }
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    #[inline]
    pub fn cells(&self) -> &[Pos; 9] {
        &self.cells
    }

    /// シャンチー系の宮（7x7 盤は専用の位置、それ以外は 9x10 の位置）
    pub fn of(color: Color, geom: Geometry) -> &'static Palace {
        match (color, geom) {
            (Color::White, Geometry::Dim7x7) => &WHITE_PALACE_7X7,
            (Color::Black, Geometry::Dim7x7) => &BLACK_PALACE_7X7,
            (Color::White, _) => &WHITE_PALACE,
            (Color::Black, _) => &BLACK_PALACE,
        }
    }

    /// チャンギの宮（盤の形状によらず 9x10 の位置）
    pub fn janggi(color: Color) -> &'static Palace {
        match color {
            Color::White => &WHITE_PALACE,
            Color::Black => &BLACK_PALACE,
        }
    }
}

/// 9x10: d1-f3
pub static WHITE_PALACE: Palace = Palace::square(3, 0);
/// 9x10: d8-f10
pub static BLACK_PALACE: Palace = Palace::square(3, 7);
/// 7x7: c1-e3
pub static WHITE_PALACE_7X7: Palace = Palace::square(2, 0);
/// 7x7: c5-e7
pub static BLACK_PALACE_7X7: Palace = Palace::square(2, 4);
