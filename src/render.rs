use crate::{
    config::PieceStyle,
    game::{GameState, Status},
    piece::{Color, Piece},
    skin::Skin,
    square::Square,
};
use std::io::{self, Write};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Highlight {
    Selected,
    /// Legal target on an empty square
    Move,
    /// Legal target holding an enemy piece
    Capture,
    /// King of the side to move, currently attacked
    Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub shade: Shade,
    pub piece: Option<Piece>,
    pub sprite: Option<String>,
    pub highlight: Option<Highlight>,
}

/// Everything a renderer needs, captured once the game has settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub squares: Vec<SquareView>,
    pub current_player: Color,
    pub status: Status,
    pub history: Vec<String>,
    pub banner: Option<String>,
}

impl Snapshot {
    pub fn capture(game: &GameState, skin: &Skin) -> Snapshot {
        let board = game.board();
        let checked_king = if game.in_check() { board.find_king(game.current_player()) } else { None };

        let squares = Square::all()
            .map(|square| {
                let piece = board.get(square);
                let highlight = if game.selection() == Some(square) {
                    Some(Highlight::Selected)
                } else if game.legal_targets().contains(square) {
                    Some(if piece.is_some() { Highlight::Capture } else { Highlight::Move })
                } else if checked_king == Some(square) {
                    Some(Highlight::Check)
                } else {
                    None
                };
                SquareView {
                    square,
                    shade: if square.is_light() { Shade::Light } else { Shade::Dark },
                    piece,
                    sprite: piece.map(|p| skin.sprite_for(p).to_string()),
                    highlight,
                }
            })
            .collect();

        Snapshot {
            squares,
            current_player: game.current_player(),
            status: game.status(),
            history: game.history().lines(),
            banner: game.outcome().map(|o| o.banner()),
        }
    }

    pub fn at(&self, square: Square) -> &SquareView {
        &self.squares[square.index()]
    }
}

/// Anything that can draw a settled game
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()>;
}

/// Draws the board as text, rank 8 on top
pub struct TextRenderer<W: Write> {
    out: W,
    style: PieceStyle,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, style: PieceStyle) -> Self {
        TextRenderer { out, style }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn piece_char(&self, piece: Piece) -> char {
        match self.style {
            PieceStyle::Letters => piece.to_char(),
            PieceStyle::Glyphs => piece.glyph(),
        }
    }

    fn cell(&self, view: &SquareView) -> String {
        let inner = match view.piece {
            Some(p) => self.piece_char(p),
            None if view.shade == Shade::Dark => ':',
            None => '.',
        };
        match view.highlight {
            Some(Highlight::Selected) => format!("[{}]", inner),
            Some(Highlight::Move) => String::from(" * "),
            Some(Highlight::Capture) => format!("x{} ", inner),
            Some(Highlight::Check) => format!("!{}!", inner),
            None => format!(" {} ", inner),
        }
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        for row in 0..8 {
            let mut line = format!("{} ", 8 - row);
            for col in 0..8 {
                line.push_str(&self.cell(snapshot.at(Square::new(row, col))));
            }
            writeln!(self.out, "{}", line.trim_end())?;
        }
        writeln!(self.out, "   a  b  c  d  e  f  g  h")?;
        writeln!(self.out, "{} to move. {}", snapshot.current_player, snapshot.status)?;
        if let Some(last) = snapshot.history.last() {
            writeln!(self.out, "{}", last)?;
        }
        if let Some(banner) = &snapshot.banner {
            writeln!(self.out, "*** {} *** (type `new` to play again)", banner)?;
        }
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#move::Move;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn snapshot_of_a_fresh_game() {
        let snap = Snapshot::capture(&GameState::new(), &Skin::pokemon());
        assert_eq!(snap.squares.len(), 64);
        assert_eq!(snap.at(sq("a8")).shade, Shade::Light);
        assert_eq!(snap.at(sq("a1")).shade, Shade::Dark);
        assert_eq!(snap.at(sq("e1")).sprite.as_deref(), Some("images/dragonite.png"));
        assert_eq!(snap.at(sq("e4")).sprite, None);
        assert!(snap.squares.iter().all(|s| s.highlight.is_none()));
        assert_eq!(snap.banner, None);
        assert!(snap.history.is_empty());
    }

    #[test]
    fn highlights_follow_the_selection() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/3p4/4P3/4K3 w").unwrap();
        game.handle_square_click(sq("e2"));
        let snap = Snapshot::capture(&game, &Skin::classic());
        assert_eq!(snap.at(sq("e2")).highlight, Some(Highlight::Selected));
        assert_eq!(snap.at(sq("e3")).highlight, Some(Highlight::Move));
        assert_eq!(snap.at(sq("e4")).highlight, Some(Highlight::Move));
        assert_eq!(snap.at(sq("d3")).highlight, Some(Highlight::Capture));
        assert_eq!(snap.at(sq("f3")).highlight, None);
    }

    #[test]
    fn checked_king_is_marked() {
        let mut game = GameState::new();
        for mv in ["e2e4", "f7f6", "d1h5"] {
            game.play(Move::parse(mv).unwrap()).unwrap();
        }
        let snap = Snapshot::capture(&game, &Skin::default());
        assert_eq!(snap.at(sq("e8")).highlight, Some(Highlight::Check));
        assert_eq!(snap.status, Status::Check);
        assert_eq!(snap.history, vec!["1. Pe2 → Pe4   Pf7 → Pf6", "2. Qd1 → Qh5"]);
    }

    #[test]
    fn text_output() {
        let mut game = GameState::new();
        game.handle_square_click(sq("g1"));
        let snap = Snapshot::capture(&game, &Skin::default());
        let mut renderer = TextRenderer::new(Vec::new(), PieceStyle::Letters);
        renderer.render(&snap).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8  r  n  b  q  k  b  n  r");
        assert_eq!(lines[5], "3  :  .  :  .  :  *  :  *");
        assert_eq!(lines[7], "1  R  N  B  Q  K  B [N] R");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h");
        assert_eq!(lines[9], "White to move. Game in progress");
    }

    #[test]
    fn banner_at_the_end() {
        let game = GameState::from_fen("k7/2Q5/8/8/8/8/8/7K b").unwrap();
        let snap = Snapshot::capture(&game, &Skin::default());
        let mut renderer = TextRenderer::new(Vec::new(), PieceStyle::Glyphs);
        renderer.render(&snap).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("Black to move. Stalemate — draw."));
        assert!(text.contains("*** It's a draw by stalemate! ***"));
        assert!(text.starts_with("8  ♚"));
    }
}
