// Headless demo player
// Loads a score file and runs the playback clock on a fixed-period tick,
// printing the transport line the way the editor toolbar would show it

use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use log::{LevelFilter, error, info};
use simple_logger::SimpleLogger;

use pianoroll::{PlaybackClock, SessionCommand, create_command_channel, load_score, timecode};

/// Time steps per playback tick
const TICK_STEP: i64 = 20;

/// Wall-clock period of one tick
const TICK_PERIOD: Duration = Duration::from_millis(20);

/// Plenty for one driver ticking at 50 Hz against a 1 kHz consumer
const COMMAND_CHANNEL_CAPACITY: usize = 256;

fn main() -> ExitCode {
    let _ = SimpleLogger::new().with_level(LevelFilter::Info).init();

    let Some(path) = std::env::args().nth(1) else {
        error!("usage: pianoroll <score-file>");
        return ExitCode::FAILURE;
    };

    let load = match load_score(&path) {
        Ok(load) => load,
        Err(err) => {
            error!("cannot load {path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    if !load.skipped.is_empty() {
        info!("{} line(s) skipped while loading {path}", load.skipped.len());
    }
    info!("{} note(s) loaded from {path}", load.store.note_count());

    let Some(end_of_score) = load.store.notes().iter().map(|n| n.end).max() else {
        info!("nothing to play");
        return ExitCode::SUCCESS;
    };

    let (mut command_tx, mut command_rx) = create_command_channel(COMMAND_CHANNEL_CAPACITY);

    // Tick driver: the "play" half of the transport. Stopping playback is
    // just this thread running out of ticks.
    let ticks = end_of_score / TICK_STEP + 1;
    let driver = thread::spawn(move || {
        let sleeper = spin_sleep::SpinSleeper::default();
        for _ in 0..ticks {
            let _ = ringbuf::traits::Producer::try_push(
                &mut command_tx,
                SessionCommand::Advance(TICK_STEP),
            );
            sleeper.sleep(TICK_PERIOD);
        }
    });

    // Session loop: single owner of the store and clock, applying commands
    // in arrival order and redisplaying after every mutation
    let mut store = load.store;
    let mut clock = PlaybackClock::new(&store);
    render(&clock);

    while clock.current_time() < end_of_score {
        while let Some(command) = ringbuf::traits::Consumer::try_pop(&mut command_rx) {
            match command {
                SessionCommand::Seek(t) => clock.seek(&store, t),
                SessionCommand::Advance(dt) => clock.advance(&store, dt),
                SessionCommand::AddNote(note) => {
                    if let Err(err) = store.add(note) {
                        error!("note rejected: {err}");
                        continue;
                    }
                }
            }
            render(&clock);
        }
        thread::sleep(Duration::from_millis(1));
    }

    let _ = driver.join();
    ExitCode::SUCCESS
}

fn render(clock: &PlaybackClock) {
    let active: Vec<String> = clock
        .active_notes()
        .iter()
        .map(|n| format!("ch{} vel{}", n.channel, n.velocity))
        .collect();
    println!(
        "{}  |  {}",
        timecode::format(clock.current_time()),
        active.join("  ")
    );
}
