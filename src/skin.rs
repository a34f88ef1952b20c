use crate::piece::{Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};

/// One sprite per piece kind for a single color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    pub king: String,
    pub queen: String,
    pub rook: String,
    pub bishop: String,
    pub knight: String,
    pub pawn: String,
}

impl SpriteSet {
    pub fn get(&self, kind: PieceKind) -> &str {
        match kind {
            PieceKind::King => &self.king,
            PieceKind::Queen => &self.queen,
            PieceKind::Rook => &self.rook,
            PieceKind::Bishop => &self.bishop,
            PieceKind::Knight => &self.knight,
            PieceKind::Pawn => &self.pawn,
        }
    }

    fn from_fn<F: Fn(PieceKind) -> String>(f: F) -> SpriteSet {
        SpriteSet {
            king: f(PieceKind::King),
            queen: f(PieceKind::Queen),
            rook: f(PieceKind::Rook),
            bishop: f(PieceKind::Bishop),
            knight: f(PieceKind::Knight),
            pawn: f(PieceKind::Pawn),
        }
    }
}

/// A cosmetic theme mapping each of the 12 (color, kind) pairs to a sprite.
/// The engine never looks at it, only renderers do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skin {
    pub name: String,
    pub white: SpriteSet,
    pub black: SpriteSet,
}

impl Default for Skin {
    fn default() -> Self {
        Skin::pokemon()
    }
}

impl Skin {
    pub const BUILTIN: [&'static str; 2] = ["pokemon", "classic"];

    pub fn pokemon() -> Skin {
        let image = |name: &str| format!("images/{}.png", name);
        Skin {
            name: String::from("pokemon"),
            white: SpriteSet {
                king: image("dragonite"),
                queen: image("venusaur"),
                rook: image("onix"),
                bishop: image("raichu"),
                knight: image("arcanine"),
                pawn: image("bulbasaur"),
            },
            black: SpriteSet {
                king: image("umbreon"),
                queen: image("gardevoir"),
                rook: image("golem"),
                bishop: image("vaporeon"),
                knight: image("scyther"),
                pawn: image("zubat"),
            },
        }
    }

    /// Unicode chess glyphs
    pub fn classic() -> Skin {
        let glyphs = |color| SpriteSet::from_fn(|kind| Piece::new(kind, color).glyph().to_string());
        Skin {
            name: String::from("classic"),
            white: glyphs(Color::White),
            black: glyphs(Color::Black),
        }
    }

    pub fn builtin(name: &str) -> Option<Skin> {
        match name {
            "pokemon" => Some(Skin::pokemon()),
            "classic" => Some(Skin::classic()),
            _ => None,
        }
    }

    pub fn sprite(&self, color: Color, kind: PieceKind) -> &str {
        match color {
            Color::White => self.white.get(kind),
            Color::Black => self.black.get(kind),
        }
    }

    pub fn sprite_for(&self, piece: Piece) -> &str {
        self.sprite(piece.color, piece.kind)
    }

    /// `color kind -> sprite` lines, white first
    pub fn table(&self) -> Vec<String> {
        [Color::White, Color::Black]
            .iter()
            .flat_map(|&color| {
                PieceKind::ALL
                    .iter()
                    .rev()
                    .map(move |&kind| format!("{} {} -> {}", color, kind, self.sprite(color, kind)))
            })
            .collect()
    }
}
