use crate::{
    board::Board,
    error::EngineError,
    history::{MoveHistory, MoveRecord},
    legality::{has_legal_move, legal_moves},
    move_generator::is_square_attacked,
    movelist::SquareList,
    piece::Color,
    r#move::Move,
    square::Square,
};
use log::{debug, info, warn};
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    /// The side to move has no king left. Rule enforcement should never get
    /// there, the game is simply credited to the other side.
    MissingKing { winner: Color },
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::MissingKing { winner } => Some(*winner),
            Outcome::Stalemate => None,
        }
    }

    /// Text for the end of game announcement
    pub fn banner(&self) -> String {
        match self {
            Outcome::Checkmate { winner } => format!("{} wins by checkmate!", winner),
            Outcome::Stalemate => String::from("It's a draw by stalemate!"),
            Outcome::MissingKing { winner } => format!("{} wins!", winner),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Check,
    Over(Outcome),
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::InProgress => write!(f, "Game in progress"),
            Status::Check => write!(f, "Check!"),
            Status::Over(Outcome::Checkmate { winner }) => write!(f, "Checkmate! {} wins!", winner),
            Status::Over(Outcome::Stalemate) => write!(f, "Stalemate — draw."),
            Status::Over(Outcome::MissingKing { winner }) => write!(f, "{} wins, no king left to play.", winner),
        }
    }
}

/// What a click did to the game, so whoever draws the board knows to redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Nothing changed
    Ignored,
    Selected { square: Square, targets: SquareList },
    Deselected,
    Moved { record: MoveRecord, outcome: Option<Outcome> },
}

impl GameEvent {
    pub fn changed_state(&self) -> bool {
        !matches!(self, GameEvent::Ignored)
    }
}

/// A game between two local players: the board, whose turn it is, the
/// current selection and the terminal flags.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Color,
    selection: Option<Square>,
    legal_targets: SquareList,
    history: MoveHistory,
    in_check: bool,
    checkmate: bool,
    game_over: bool,
    outcome: Option<Outcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> GameState {
        GameState {
            board: Board::starting_position(),
            current_player: Color::White,
            selection: None,
            legal_targets: SquareList::default(),
            history: MoveHistory::new(),
            in_check: false,
            checkmate: false,
            game_over: false,
            outcome: None,
        }
    }

    /// Starts from an arbitrary board with `to_move` on turn. Check and
    /// terminal flags are worked out right away.
    pub fn from_position(board: Board, to_move: Color) -> GameState {
        let mut game = GameState {
            board,
            current_player: to_move,
            ..GameState::new()
        };
        game.evaluate_position();
        game
    }

    /// Parses `<placement> [w|b]`, the first two fields of a FEN string
    pub fn from_fen(fen: &str) -> Result<GameState, EngineError> {
        let mut fields = fen.split_whitespace();
        let placement = fields
            .next()
            .ok_or_else(|| EngineError::InvalidPosition(String::from("empty position")))?;
        let to_move = match fields.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => return Err(EngineError::InvalidPosition(format!("bad side to move: {}", other))),
        };
        Ok(GameState::from_position(Board::from_placement(placement)?, to_move))
    }

    pub fn new_game(&mut self) {
        *self = GameState::new();
        debug!("new game");
    }

    pub fn reset_game(&mut self) {
        self.new_game()
    }

    /*
    GETTERS
     */
    pub fn board(&self) -> &Board { &self.board }
    pub fn current_player(&self) -> Color { self.current_player }
    pub fn selection(&self) -> Option<Square> { self.selection }
    pub fn legal_targets(&self) -> &SquareList { &self.legal_targets }
    pub fn history(&self) -> &MoveHistory { &self.history }
    pub fn in_check(&self) -> bool { self.in_check }
    pub fn is_checkmate(&self) -> bool { self.checkmate }
    pub fn is_game_over(&self) -> bool { self.game_over }
    pub fn outcome(&self) -> Option<Outcome> { self.outcome }

    pub fn status(&self) -> Status {
        match self.outcome {
            Some(o) => Status::Over(o),
            None if self.in_check => Status::Check,
            None => Status::InProgress,
        }
    }

    /// Legal destinations of any piece, without touching the selection
    pub fn legal_moves_from(&mut self, origin: Square) -> SquareList {
        legal_moves(&mut self.board, origin)
    }

    /// Entry point for the input side: one click on one square.
    /// Refusals are not errors here, they just come back as `Ignored`.
    pub fn handle_square_click(&mut self, square: Square) -> GameEvent {
        if self.game_over {
            return GameEvent::Ignored;
        }
        let result = match self.selection {
            None => self.select(square).map(|targets| GameEvent::Selected { square, targets: targets.clone() }),
            Some(_) => self.attempt_move(square),
        };
        result.unwrap_or_else(|e| {
            debug!("click on {} ignored: {}", square, e);
            GameEvent::Ignored
        })
    }

    /// Selects the piece on `square`, which has to belong to the side to move
    pub fn select(&mut self, square: Square) -> Result<&SquareList, EngineError> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        if self.board.color_on(square) != Some(self.current_player) {
            return Err(EngineError::InvalidSelection(square));
        }
        self.selection = Some(square);
        self.legal_targets = legal_moves(&mut self.board, square);
        debug!("selected {}, legal targets: {}", square, self.legal_targets);
        Ok(&self.legal_targets)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.legal_targets.clear();
    }

    /// Second click while a piece is selected: plays the move when `square` is
    /// a legal target, switches to another own piece, or drops the selection.
    pub fn attempt_move(&mut self, square: Square) -> Result<GameEvent, EngineError> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        let from = self.selection.ok_or(EngineError::NoSelection)?;

        if self.legal_targets.contains(square) {
            let (record, outcome) = self.apply_move(Move::new(from, square))?;
            return Ok(GameEvent::Moved { record, outcome });
        }
        if self.board.color_on(square) == Some(self.current_player) {
            let targets = self.select(square)?.clone();
            return Ok(GameEvent::Selected { square, targets });
        }
        self.clear_selection();
        Ok(GameEvent::Deselected)
    }

    /// Selects `mv.from` and plays `mv.to` in one go
    pub fn play(&mut self, mv: Move) -> Result<MoveRecord, EngineError> {
        self.select(mv.from)?;
        if !self.legal_targets.contains(mv.to) {
            self.clear_selection();
            return Err(EngineError::IllegalDestination(mv.to));
        }
        Ok(self.apply_move(mv)?.0)
    }

    /// Plays a move that has already been validated against the legal targets
    fn apply_move(&mut self, mv: Move) -> Result<(MoveRecord, Option<Outcome>), EngineError> {
        let mover = self.current_player;
        if self.board.color_on(mv.from) != Some(mover) {
            return Err(EngineError::InvalidSelection(mv.from));
        }
        // Board::make promotes, flags the piece and drags the castling rook.
        // The previous occupant of the destination comes back before it is lost.
        let captured = self.board.make(mv);
        let moved = self.board.kind_on(mv.to).ok_or(EngineError::InvalidSelection(mv.from))?;

        let record = self
            .history
            .record(mv.from, mv.to, moved, mover, captured.map(|p| p.kind));
        debug!("{} played {} ({})", mover, mv, record);

        self.current_player = mover.opposite();
        self.evaluate_position();
        self.clear_selection();
        Ok((record, self.outcome))
    }

    /// Updates the check and terminal flags for the side to move
    fn evaluate_position(&mut self) {
        let side = self.current_player;
        let king = match self.board.find_king(side) {
            Some(k) => k,
            None => {
                warn!("{} has no king on the board, ending the game", side);
                self.in_check = false;
                self.game_over = true;
                self.outcome = Some(Outcome::MissingKing { winner: side.opposite() });
                return;
            }
        };

        self.in_check = is_square_attacked(&self.board, king, side.opposite());
        if has_legal_move(&mut self.board, side) {
            return;
        }
        self.game_over = true;
        if self.in_check {
            self.checkmate = true;
            self.outcome = Some(Outcome::Checkmate { winner: side.opposite() });
        } else {
            self.outcome = Some(Outcome::Stalemate);
        }
        info!("game over: {}", self.status());
    }
}
