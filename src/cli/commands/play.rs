//! Play command - interactive game loop at the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    board::Player,
    cli::output,
    game::{Game, GameOutcome},
    players::{Participant, PlayerKind},
    Error,
};

#[derive(Parser, Debug)]
#[command(about = "Play a game at the terminal")]
pub struct PlayArgs {
    /// Who controls X (X moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    pub x: PlayerKind,

    /// Who controls O
    #[arg(long, value_enum, default_value_t = PlayerKind::Cpu)]
    pub o: PlayerKind,

    /// Display name for the X seat
    #[arg(long)]
    pub name_x: Option<String>,

    /// Display name for the O seat
    #[arg(long)]
    pub name_o: Option<String>,

    /// Play a single game instead of prompting for replays
    #[arg(long)]
    pub once: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let seats = [
        Participant::new(seat_name(&args.name_x, args.x, Player::X), Player::X, args.x),
        Participant::new(seat_name(&args.name_o, args.o, Player::O), Player::O, args.o),
    ];

    println!("Welcome to Tic Tac Toe");
    loop {
        play_one_game(&seats, &mut input)?;
        if args.once || !ask_to_play_again(&mut input)? {
            break;
        }
    }
    println!("Exiting Tic Tac Toe. Thanks for playing!");
    Ok(())
}

fn seat_name(explicit: &Option<String>, kind: PlayerKind, mark: Player) -> String {
    match explicit {
        Some(name) => name.clone(),
        None => match kind {
            PlayerKind::Cpu => format!("cpu ({mark})"),
            PlayerKind::Human => format!("player {mark}"),
        },
    }
}

fn seat_for<'a>(seats: &'a [Participant; 2], mark: Player) -> &'a Participant {
    match mark {
        Player::X => &seats[0],
        Player::O => &seats[1],
    }
}

fn play_one_game(seats: &[Participant; 2], input: &mut impl BufRead) -> Result<()> {
    let mut game = Game::new();
    println!("Beginning new game.");

    while !game.is_over() {
        let seat = seat_for(seats, game.to_move());
        println!("\n{}", output::render_board(game.board()));
        println!("{}'s turn ({}).", seat.name, seat.mark);
        take_turn(&mut game, seat, input)?;
    }

    match game.outcome() {
        Some(GameOutcome::Win(winner)) => {
            println!("\n{} has won the game.", seat_for(seats, winner).name);
        }
        _ => println!("\nThe game ended in a draw."),
    }
    println!("The final configuration of the board is:");
    println!("{}", output::render_board(game.board()));
    Ok(())
}

fn take_turn(game: &mut Game, seat: &Participant, input: &mut impl BufRead) -> Result<()> {
    loop {
        let mv = seat.next_move(game.board(), input)?;
        if !seat.is_human() {
            println!("{} plays {}.", seat.name, mv);
        }
        match game.play(mv) {
            Ok(()) => return Ok(()),
            Err(Error::CellOccupied { .. }) => {
                println!(
                    "That location has already been played. Please enter an unoccupied location."
                );
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn ask_to_play_again(input: &mut impl BufRead) -> Result<bool> {
    loop {
        print!("\nWould you like to play again? Enter yes or no: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => println!("Response not recognized. You must enter yes or no."),
        }
    }
}
