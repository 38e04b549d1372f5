use std::io::{BufRead, Write};

use walker::{GameConfig, Move, Tick};

/// A trait to simplify writing bots.
pub trait Bot {
    /// Called at most once, when the first well-formed message carries a
    /// board configuration.
    fn new_game(&mut self, config: &GameConfig);

    /// Produce the move for the current tick.
    fn play_turn(&mut self) -> Move;

    fn run(&mut self) -> anyhow::Result<()>
    where
        Self: Sized,
    {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        play(self, stdin, stdout)
    }
}

/// Drives a bot over a line-oriented channel until the input is exhausted.
///
/// Every input line is answered with exactly one move line, even when it is
/// not valid JSON. The harness expects a move each tick, so a decode failure
/// falls through to move emission instead of ending the loop.
pub fn play<B: Bot>(
    bot: &mut B,
    mut input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()> {
    let mut buf = String::new();
    let mut awaiting_first_tick = true;

    loop {
        // Read the next line into buf
        buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = input.read_line(&mut buf)?;
        if num_bytes_read == 0 {
            // 0 bytes read means EOF - the harness has exited.
            break Ok(());
        }

        if let Ok(tick) = serde_json::from_str::<Tick>(buf.trim_end()) {
            // Only the first decodable tick may announce the config. Lines
            // that fail to decode do not count as the first tick.
            if awaiting_first_tick {
                if let Some(config) = tick.config() {
                    bot.new_game(&config);
                }
                awaiting_first_tick = false;
            }
        }

        writeln!(output, "{}", bot.play_turn())?;
        output.flush()?;
    }
}
