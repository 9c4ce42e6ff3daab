//! キャスリング先の判定
//!
//! キャスリング権の管理は呼び出し側の責務。ここでは自陣1段目（白: 1段, 黒: 8段）に
//! ある同色のルークの筋を調べ、その筋からキャスリング先を導く。

use crate::types::{Color, Pieces, Pos, Role};

/// 自陣1段目にあるルークの筋の集合（bit i = 筋 i）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RookFiles(u16);

impl RookFiles {
    pub const EMPTY: RookFiles = RookFiles(0);

    #[inline]
    pub const fn contains(self, file: i32) -> bool {
        0 <= file && file < 16 && self.0 & (1 << file) != 0
    }

    #[inline]
    pub fn insert(&mut self, file: u8) {
        self.0 |= 1 << file;
    }

    /// 筋の一覧（昇順）
    pub fn files(self) -> impl Iterator<Item = i32> {
        (0..16).filter(move |&f| self.contains(f))
    }
}

impl FromIterator<u8> for RookFiles {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut files = RookFiles::EMPTY;
        for file in iter {
            files.insert(file);
        }
        files
    }
}

/// 自陣1段目の段（0始まり）
#[inline]
pub const fn home_rank(color: Color) -> i32 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// 自陣1段目にある同色ルークの筋を集める
pub fn rook_files_of(pieces: &Pieces, color: Color) -> RookFiles {
    let files: RookFiles = pieces
        .iter()
        .filter(|(key, piece)| {
            !key.is_drop()
                && key.pos().y == home_rank(color)
                && piece.color == color
                && piece.role == Role::Rook
        })
        .map(|(key, _)| key.file())
        .collect();
    log::trace!("rook files for {color}: {:?}", files.files().collect::<Vec<_>>());
    files
}

/// キングのキャスリング条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Castling {
    /// キャスリング権が残っているか
    pub enabled: bool,
    /// 自陣1段目
    pub home_rank: i32,
    /// 自陣1段目のルークの筋
    pub rook_files: RookFiles,
}

impl Castling {
    /// キャスリングを考慮しない
    pub const NONE: Castling = Castling {
        enabled: false,
        home_rank: 0,
        rook_files: RookFiles::EMPTY,
    };

    pub fn new(color: Color, rook_files: RookFiles, enabled: bool) -> Castling {
        Castling {
            enabled,
            home_rank: home_rank(color),
            rook_files,
        }
    }

    /// キャスリングによる移動先かどうか（通常の1歩は含まない）
    ///
    /// e筋のキングは a/h 筋のルークに対して c/g 筋へ移動する。それ以外の筋にある
    /// ルーク（変則配置）はその筋自体を移動先として受け付ける。
    pub fn allows(&self, from: Pos, to: Pos) -> bool {
        if !self.enabled || from.y != to.y || from.y != self.home_rank {
            return false;
        }
        let standard_king = from.x == 4;
        if standard_king {
            match to.x {
                2 if self.rook_files.contains(0) => return true,
                6 if self.rook_files.contains(7) => return true,
                0 | 7 => return false,
                _ => {}
            }
        }
        self.rook_files.contains(to.x)
    }
}
