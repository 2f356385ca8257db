//! Turn loop for one game between any mix of engine and human players.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use chessai_core::{
    game_status, parse_fen, possible_move_count, Board, Color, Engine, FenError, GameStatus,
    SearchLimits,
};
use tracing::{info, warn};

use crate::config::PlayConfig;
use crate::input::{
    classify, parse_move, parse_promotion, resolve_move, MoveKind, MOVE_PROMPT, PROMOTION_PROMPT,
};
use crate::render::render_board;

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won(Color),
    Draw,
    /// The turn cap was reached first
    TurnLimit,
    /// Input ran out during a human turn
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: GameOutcome,
    /// Moves played by both sides together
    pub plies: u32,
    pub final_board: Board,
}

/// Plays games according to a `PlayConfig`
pub struct GameRunner {
    config: PlayConfig,
    start: Board,
    first: Color,
}

impl GameRunner {
    pub fn new(config: PlayConfig) -> Result<Self, FenError> {
        let (start, first) = match &config.fen {
            Some(fen) => {
                let setup = parse_fen(fen)?;
                (setup.board, setup.side_to_move)
            }
            None => (Board::initial(config.reduced_board), Color::White),
        };
        Ok(Self {
            config,
            start,
            first,
        })
    }

    /// Plays one game, reading human moves from `input` and writing the
    /// board and prompts to `output`.
    pub fn play<R: BufRead, W: Write>(
        &self,
        engine: &mut dyn Engine,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<GameReport> {
        let mut board = self.start;
        let mut color = self.first;
        let mut plies: u32 = 0;
        engine.new_game();

        draw_turn(output, &board, color)?;

        let outcome = loop {
            if let Some(outcome) = finished(&board, color) {
                break outcome;
            }
            let turn = plies / 2;
            if turn >= self.config.max_turns {
                info!(turn, "turn limit reached");
                break GameOutcome::TurnLimit;
            }
            if plies % 2 == 0 {
                writeln!(output, "Turn: {turn}")?;
            }

            if self.config.players.is_computer(color) {
                let started = Instant::now();
                let result = engine.search(&board, color, SearchLimits::depth(self.config.depth));
                let elapsed = started.elapsed();
                let Some(next) = result.best_board else {
                    break finished(&board, color).unwrap_or(GameOutcome::Draw);
                };
                writeln!(output, "Best score found {}", result.score)?;
                writeln!(output, "Time spent by computer {elapsed:.3?}")?;
                info!(
                    %color,
                    score = result.score,
                    nodes = result.nodes,
                    ?elapsed,
                    "computer moved"
                );
                board = next;
            } else {
                match human_turn(&board, color, input, output)? {
                    Some(next) => board = next,
                    None => break GameOutcome::Abandoned,
                }
            }

            draw_turn(output, &board, color)?;
            color = color.other();
            plies += 1;
        };

        match outcome {
            GameOutcome::Won(winner) => writeln!(output, "Game over, result: {winner} wins")?,
            GameOutcome::Draw => writeln!(output, "Game over, result: draw")?,
            GameOutcome::TurnLimit => writeln!(output, "Game stopped after {plies} moves")?,
            GameOutcome::Abandoned => writeln!(output, "Game abandoned")?,
        }
        info!(?outcome, plies, "game finished");

        Ok(GameReport {
            outcome,
            plies,
            final_board: board,
        })
    }
}

/// Result of the game if `color`, about to move, cannot.
fn finished(board: &Board, color: Color) -> Option<GameOutcome> {
    let available = possible_move_count(board, color, true);
    match game_status(board, color, available) {
        GameStatus::InProgress => None,
        GameStatus::Draw => Some(GameOutcome::Draw),
        GameStatus::Won(winner) => Some(GameOutcome::Won(winner)),
    }
}

fn draw_turn<W: Write>(output: &mut W, board: &Board, color: Color) -> io::Result<()> {
    writeln!(output, "Color {color} turn:")?;
    write!(output, "{}", render_board(board))?;
    writeln!(output, "===========================")
}

/// Reads one line; None at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prompts until the human enters a legal move. Returns None if input ends.
fn human_turn<R: BufRead, W: Write>(
    board: &Board,
    color: Color,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Board>> {
    loop {
        writeln!(output, "{MOVE_PROMPT}")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };

        let attempt =
            parse_move(&line).and_then(|mv| classify(board, color, mv).map(|kind| (mv, kind)));
        let (mv, kind) = match attempt {
            Ok(parsed) => parsed,
            Err(err) => {
                warn!(%color, input = line.trim(), %err, "rejected move");
                writeln!(output, "{err}")?;
                continue;
            }
        };

        let promotion = if kind == MoveKind::Promotion {
            writeln!(output, "{PROMOTION_PROMPT}")?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(None);
            };
            match parse_promotion(&line) {
                Ok(choice) => Some(choice),
                Err(err) => {
                    warn!(%color, %err, "rejected promotion");
                    writeln!(output, "{err}")?;
                    continue;
                }
            }
        } else {
            None
        };

        match resolve_move(board, mv, kind, promotion) {
            Ok(next) => return Ok(Some(next)),
            Err(err) => {
                warn!(%color, %mv, %err, "rejected move");
                writeln!(output, "{err}")?;
            }
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
