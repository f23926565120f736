//! Terminal frontend: coloured board rendering and line-based move input.

use colored::Colorize;
use othello_core::disc::Disc;
use othello_core::game::{Frontend, Game, GameResult, Outcome};
use othello_core::move_list::MoveList;
use othello_core::square::Square;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Renders to stdout and reads human moves with a line editor.
#[derive(Default)]
pub struct TerminalFrontend {
    editor: Option<DefaultEditor>,
}

impl TerminalFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    fn editor(&mut self) -> Option<&mut DefaultEditor> {
        if self.editor.is_none() {
            match DefaultEditor::new() {
                Ok(editor) => self.editor = Some(editor),
                Err(err) => {
                    log::error!("cannot open line editor: {err}");
                    return None;
                }
            }
        }
        self.editor.as_mut()
    }
}

impl Frontend for TerminalFrontend {
    fn render(&mut self, game: &Game) {
        print_board(game);
    }

    fn choose_move(&mut self, game: &Game, moves: &MoveList) -> Option<Square> {
        let size = game.board().size;
        let side = game.side_to_move();
        let prompt = format!("{} ({})> ", side.name(), side.to_char());
        let editor = self.editor()?;

        loop {
            let line = match editor.readline(&prompt) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return None,
                Err(err) => {
                    log::error!("readline failed: {err}");
                    return None;
                }
            };
            if let Err(err) = editor.add_history_entry(&line) {
                log::debug!("cannot record history entry: {err}");
            }

            let input = line.trim();
            match input {
                "" => continue,
                "quit" | "q" => return None,
                "moves" | "m" => {
                    let labels: Vec<String> = moves.iter().map(|mv| size.label(mv.sq)).collect();
                    println!("Legal moves: {}", labels.join(" "));
                }
                _ => match size.parse_square(input) {
                    Some(sq) if moves.find(sq).is_some() => return Some(sq),
                    Some(_) => println!("Illegal move: {input}"),
                    None => println!(
                        "Unknown command: {input} (enter a square such as {}, 'moves' or 'quit')",
                        size.label(moves.first().map_or(Square::new(0), |mv| mv.sq))
                    ),
                },
            }
        }
    }

    fn game_over(&mut self, game: &Game, result: &GameResult) {
        print_board(game);
        println!("{}", format_result(result));
    }
}

/// Formats a result line coloured by winner.
pub fn format_result(result: &GameResult) -> String {
    let text = result.to_string();
    match result.outcome {
        Outcome::BlackWins => text.bright_green().to_string(),
        Outcome::WhiteWins => text.bright_yellow().to_string(),
        Outcome::Draw => text.bright_cyan().to_string(),
    }
}

/// Prints a coloured representation of the board to the terminal.
///
/// Legal moves of the side to move are dotted, the last move is highlighted
/// and the disc counts are shown beside the board.
pub fn print_board(game: &Game) {
    let board = game.board();
    let size = board.size;
    let n = size.get();
    let side_to_move = game.side_to_move();
    let legal = game.legal_moves();
    let (black_count, white_count) = game.score();

    let horizontal = |left: &str, mid: &str, right: &str| {
        format!("    {left}{}───{right}", format!("───{mid}").repeat(n - 1))
    };

    let header: String = (0..n)
        .map(|y| format!("   {}", (b'a' + y as u8) as char))
        .collect();
    println!("   {header}");
    println!("{}", horizontal("┌", "┬", "┐"));

    for x in 0..n {
        print!("{:>3} │", x + 1);
        for y in 0..n {
            let sq = size.square(x, y);
            let is_last_move = game.last_move() == Some(sq);
            let symbol = match board.get_disc_at(sq, side_to_move) {
                Disc::Black if is_last_move => " X ".on_bright_black().bright_green(),
                Disc::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                Disc::Black => " X ".bright_green(),
                Disc::White => " O ".bright_yellow(),
                Disc::Empty if legal.contains(sq) => " · ".bright_cyan(),
                Disc::Empty => "   ".normal(),
            };
            print!("{symbol}│");
        }

        match x {
            0 => {
                let turn = match side_to_move {
                    Disc::Black => "Black's turn (X)".bright_green(),
                    _ => "White's turn (O)".bright_yellow(),
                };
                println!("   {turn}");
            }
            1 => println!("   Black: {}", format!("{black_count:3}").bright_green()),
            2 => println!("   White: {}", format!("{white_count:3}").bright_yellow()),
            3 => match game.last_move() {
                Some(sq) => println!("   Last:  {}", size.label(sq)),
                None => println!(),
            },
            _ => println!(),
        }

        if x + 1 < n {
            println!("{}", horizontal("├", "┼", "┤"));
        }
    }
    println!("{}", horizontal("└", "┴", "┘"));
}
