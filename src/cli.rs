use crate::config::{Config, PieceStyle};
use crate::error::ConfigError;
use crate::game::{GameEvent, GameState};
use crate::r#move::Move;
use crate::render::{Renderer, Snapshot, TextRenderer};
use crate::skin::Skin;
use crate::square::{parse_square, Square};

use log::debug;
use regex::Regex;
use rustyline::config::Configurer;
use rustyline::Editor;
use std::io::{self, Write};

const HELP: &str = "\
commands:
  <square> | click <square>   click a square (e2 or row,col)
  <from><to>                  play a move in one go (e2e4)
  moves [square]              legal targets of a square or of the selection
  show                        draw the board
  history                     list the moves played so far
  new | reset                 start over
  skin                        list the sprites of the current skin
  quit";

/// The input side of the game: turns typed commands into square clicks and
/// redraws the board whenever a click changed something.
pub struct Session<W: Write> {
    game: GameState,
    skin: Skin,
    style: PieceStyle,
    out: W,
    args_regex: Regex,
    move_regex: Regex,
}

pub enum CommandOk {
    Ok,
    ShouldQuit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("no command")]
    NoCommand,
    #[error("unknown or badly formed command: {0}")]
    BadCommand(String),
    #[error("not a square: {0}")]
    BadSquare(String),
    #[error("missing argument {0}")]
    MissingArg(&'static str),
    #[error("the game is over, type `new` to start another one")]
    GameIsOver,
    #[error("{0} is not a legal move")]
    IllegalMove(Move),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl<W: Write> Session<W> {
    pub fn new(skin: Skin, style: PieceStyle, out: W) -> Self {
        Session {
            game: GameState::new(),
            skin,
            style,
            out,
            args_regex: Regex::new(r#"(".*?"|[^"\s]+)"#).expect("static regex"),
            move_regex: Regex::new(r"^([a-h][1-8])([a-h][1-8])$").expect("static regex"),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn handle_command(&mut self, line: &str) -> Result<CommandOk, CommandError> {
        let args: Vec<String> = self
            .args_regex
            .find_iter(line)
            .map(|m| m.as_str().replace('"', ""))
            .collect();
        let mut args = args.iter().map(String::as_str);
        let cmd = args.next().ok_or(CommandError::NoCommand)?;

        match cmd {
            "quit" | "exit" => return Ok(CommandOk::ShouldQuit),
            "help" => writeln!(self.out, "{}", HELP)?,
            "show" => self.render()?,
            "new" => {
                self.game.new_game();
                self.render()?
            }
            "reset" => {
                self.game.reset_game();
                self.render()?
            }
            "history" => {
                for line in self.game.history().lines() {
                    writeln!(self.out, "{}", line)?
                }
            }
            "skin" => {
                writeln!(self.out, "skin: {}", self.skin.name)?;
                for line in self.skin.table() {
                    writeln!(self.out, "  {}", line)?
                }
            }
            "moves" => {
                let targets = match args.next() {
                    Some(s) => {
                        let sq = Self::square_arg(s)?;
                        self.game.legal_moves_from(sq)
                    }
                    None if self.game.selection().is_some() => self.game.legal_targets().clone(),
                    None => return Err(CommandError::MissingArg("<square>")),
                };
                writeln!(self.out, "{}", targets)?
            }
            "click" => {
                let sq = Self::square_arg(args.next().ok_or(CommandError::MissingArg("<square>"))?)?;
                self.click(sq)?;
            }
            other => {
                if let Some(caps) = self.move_regex.captures(other) {
                    let mv = Move::new(Self::square_arg(&caps[1])?, Self::square_arg(&caps[2])?);
                    self.play(mv)?;
                } else if let Some(sq) = parse_square(other) {
                    self.click(sq)?;
                } else {
                    return Err(CommandError::BadCommand(String::from(other)));
                }
            }
        }
        Ok(CommandOk::Ok)
    }

    fn square_arg(s: &str) -> Result<Square, CommandError> {
        parse_square(s).ok_or_else(|| CommandError::BadSquare(String::from(s)))
    }

    /// Forwards a click to the game, never while it is over
    fn click(&mut self, sq: Square) -> Result<GameEvent, CommandError> {
        if self.game.is_game_over() {
            return Err(CommandError::GameIsOver);
        }
        let event = self.game.handle_square_click(sq);
        debug!("click {} -> {:?}", sq, event);
        if event.changed_state() {
            self.render()?
        }
        Ok(event)
    }

    fn play(&mut self, mv: Move) -> Result<(), CommandError> {
        if self.game.selection().is_some() {
            self.game.clear_selection();
        }
        if !matches!(self.click(mv.from)?, GameEvent::Selected { .. }) {
            return Err(CommandError::IllegalMove(mv));
        }
        match self.click(mv.to)? {
            GameEvent::Moved { .. } => Ok(()),
            _ => {
                self.game.clear_selection();
                Err(CommandError::IllegalMove(mv))
            }
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let snapshot = Snapshot::capture(&self.game, &self.skin);
        TextRenderer::new(&mut self.out, self.style).render(&snapshot)
    }
}

/// Interactive loop on stdin/stdout
pub fn run(config: &Config) -> Result<(), ConfigError> {
    let skin = config.skin.resolve()?;
    let mut session = Session::new(skin, config.piece_style, io::stdout());
    let mut editor = Editor::<()>::new();
    editor.set_auto_add_history(true);
    editor.set_check_cursor_position(true);

    if let Err(e) = session.render() {
        eprintln!("{}", e);
    }
    while let Ok(line) = editor.readline(&config.prompt) {
        match session.handle_command(&line) {
            Ok(CommandOk::ShouldQuit) => break,
            Ok(CommandOk::Ok) | Err(CommandError::NoCommand) => (),
            Err(e) => eprintln!("{}", e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<Vec<u8>> {
        Session::new(Skin::default(), PieceStyle::Letters, Vec::new())
    }

    fn output(session: Session<Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn clicks_and_long_moves() {
        let mut s = session();
        s.handle_command("e2").unwrap();
        assert_eq!(s.game().selection(), Some(Square::new(6, 4)));
        s.handle_command("click e4").unwrap();
        assert_eq!(s.game().history().len(), 1);
        s.handle_command("1,4").unwrap();
        s.handle_command("3,4").unwrap();
        s.handle_command("g1f3").unwrap();
        assert_eq!(s.game().history().len(), 3);
        assert!(matches!(s.handle_command("f3f5"), Err(CommandError::IllegalMove(_))));
        assert_eq!(s.game().selection(), None);
        assert!(matches!(s.handle_command("e2e4"), Err(CommandError::IllegalMove(_))));
    }

    #[test]
    fn bad_input() {
        let mut s = session();
        assert!(matches!(s.handle_command(""), Err(CommandError::NoCommand)));
        assert!(matches!(s.handle_command("castle"), Err(CommandError::BadCommand(_))));
        assert!(matches!(s.handle_command("click z9"), Err(CommandError::BadSquare(_))));
        assert!(matches!(s.handle_command("click"), Err(CommandError::MissingArg(_))));
        assert!(matches!(s.handle_command("moves"), Err(CommandError::MissingArg(_))));
        assert!(matches!(s.handle_command("quit"), Ok(CommandOk::ShouldQuit)));
    }

    #[test]
    fn game_over_blocks_clicks_until_new() {
        let mut s = session();
        for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            s.handle_command(mv).unwrap();
        }
        assert!(s.game().is_checkmate());
        assert!(matches!(s.handle_command("e1"), Err(CommandError::GameIsOver)));
        s.handle_command("new").unwrap();
        assert!(!s.game().is_game_over());
        s.handle_command("e2").unwrap();
        let text = output(s);
        assert!(text.contains("Checkmate! Black wins!"));
        assert!(text.contains("*** Black wins by checkmate! ***"));
    }

    #[test]
    fn listing_commands() {
        let mut s = session();
        s.handle_command("moves b1").unwrap();
        s.handle_command("e2e4").unwrap();
        s.handle_command("history").unwrap();
        s.handle_command("skin").unwrap();
        let text = output(s);
        assert!(text.contains("a3 c3\n"));
        assert!(text.contains("1. Pe2 → Pe4\n"));
        assert!(text.contains("skin: pokemon"));
        assert!(text.contains("  Black pawn -> images/zubat.png"));
    }
}
