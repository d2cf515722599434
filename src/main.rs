use std::io;
use std::process::ExitCode;
use wordle_game::cli::{parse_cli, run};
use wordle_game::logging;
use wordle_game::stats::Players;

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let mut players = Players::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut players, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
