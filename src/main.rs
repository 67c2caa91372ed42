use clap::{crate_version, Arg, ArgMatches, Command};
use fourboard::benchmark::Benchmark;
use fourboard::Board;
use std::fmt;
use std::io;

/// User input representing a board. The purpose of this is to be able to report errors using
/// the same string that the user gave.
enum BoardInput {
    Variation(String),
    Code(String),
}

impl BoardInput {
    fn from_matches(matches: &ArgMatches) -> BoardInput {
        let input = matches.value_of("variation").unwrap_or("").to_string();
        if matches.is_present("code") {
            BoardInput::Code(input)
        } else {
            BoardInput::Variation(input)
        }
    }

    fn parse(&self) -> Result<Board, String> {
        match self {
            Self::Variation(str) => Board::from_variation(str).map_err(|err| err.to_string()),
            Self::Code(str) => Board::from_code_string(str).map_err(|err| err.to_string()),
        }
    }
}

impl fmt::Display for BoardInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Variation(str) => write!(f, "{}", str),
            Self::Code(str) => write!(f, "{}", str),
        }
    }
}

fn print_board(board: &Board) {
    println!("{}", board);
    match board.last_move() {
        Some(last_move) => println!("Last move: column {}", last_move.column + 1),
        None => println!("Last move: unknown"),
    }
    println!("Moves played: {}", board.ply());
    let status = board.status();
    if status.is_terminal() {
        println!("Status: {:?}", status);
    } else {
        println!("Player {} moves next", board.current_disc().to_char());
    }
}

fn print_status(board: &Board) {
    let status = board.status();
    println!("{} {:?}", status.code(), status);
}

fn print_children(board: &Board) {
    for (column, child) in board.children() {
        println!(
            "{} {} {}",
            column + 1,
            child.status().to_char(),
            child.to_code()
        );
    }
}

fn play() -> Result<(), String> {
    let variation = {
        let mut str = String::new();
        println!("Input variation:");
        io::stdin()
            .read_line(&mut str)
            .map_err(|err| err.to_string())?;
        str
    };

    let board = BoardInput::Variation(variation).parse()?;
    print_board(&board);
    Ok(())
}

fn run_perft(input: &BoardInput, depth: u32) -> Result<(), String> {
    let board = input.parse()?;
    println!("Counting nodes below {} to depth {}...", input, depth);
    let benchmark = Benchmark::run(&board, depth);
    println!();
    benchmark.print();
    Ok(())
}

fn board_args() -> [Arg<'static>; 2] {
    [
        Arg::new("variation").required(false).index(1),
        Arg::new("code")
            .long("code")
            .help("Interpret the input as a decimal board code instead of a variation"),
    ]
}

fn main() {
    let matches = Command::new("Fourboard")
        .version(crate_version!())
        .about("Connect-4 board state tool")
        .subcommand(
            Command::new("print")
                .about("Prints a board as ASCII text")
                .alias("draw")
                .args(board_args()),
        )
        .subcommand(
            Command::new("status")
                .about("Prints the status code of a board (-1 ongoing, 0 draw, 1 or 2 winner)")
                .args(board_args()),
        )
        .subcommand(
            Command::new("encode")
                .about("Prints the board code of a variation")
                .args(board_args()),
        )
        .subcommand(
            Command::new("decode")
                .about("Prints the board stored in a board code")
                .arg(Arg::new("board-code").required(true).index(1)),
        )
        .subcommand(
            Command::new("children")
                .about("Lists the legal moves with the code and status of the resulting boards")
                .args(board_args()),
        )
        .subcommand(
            Command::new("perft")
                .about("Counts the nodes of the game tree to a fixed depth")
                .args(board_args())
                .arg(
                    Arg::new("depth")
                        .long("depth")
                        .takes_value(true)
                        .default_value("6"),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("print", sub_matches)) => BoardInput::from_matches(sub_matches)
            .parse()
            .map(|board| print_board(&board)),
        Some(("status", sub_matches)) => BoardInput::from_matches(sub_matches)
            .parse()
            .map(|board| print_status(&board)),
        Some(("encode", sub_matches)) => BoardInput::from_matches(sub_matches)
            .parse()
            .map(|board| println!("{}", board.to_code())),
        Some(("decode", sub_matches)) => {
            let code = sub_matches.value_of("board-code").unwrap_or("");
            BoardInput::Code(String::from(code))
                .parse()
                .map(|board| print_board(&board))
        }
        Some(("children", sub_matches)) => BoardInput::from_matches(sub_matches)
            .parse()
            .map(|board| print_children(&board)),
        Some(("perft", sub_matches)) => sub_matches
            .value_of("depth")
            .unwrap_or("6")
            .parse::<u32>()
            .map_err(|err| format!("Invalid depth: {}", err))
            .and_then(|depth| run_perft(&BoardInput::from_matches(sub_matches), depth)),
        _ => play(),
    };

    if let Err(str) = result {
        eprintln!("{}", str);
        std::process::exit(1);
    }
}
