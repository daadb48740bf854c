use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use progrock::ProgressState;

mod cli;
mod init;
mod level;

use cli::Cli;

fn main() -> ExitCode {
    let start = Instant::now();
    let args = Cli::parse();
    init::init_log(args.print_level());
    let result = run(&args);
    handle_result(start, result)
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let options = args.render_options()?;
    log::debug!("render options: {options:?}");
    let interval = Duration::from_millis(args.interval_ms);
    let state = drive(ProgressState::new(args.total), args.step, |state| {
        state.print_with(&options)?;
        std::thread::sleep(interval);
        Ok(())
    })?;
    if !args.no_done {
        state.mark_done().print_with(&options)?;
    }
    Ok(())
}

/// Tick the bar by `step` until it reaches the total, calling `on_tick` with the initial
/// state and after every tick. A non-positive step only shows the initial state.
///
/// Returns the last state
fn drive<F>(mut state: ProgressState, step: i64, mut on_tick: F) -> anyhow::Result<ProgressState>
where
    F: FnMut(&ProgressState) -> anyhow::Result<()>,
{
    on_tick(&state)?;
    if step <= 0 {
        log::warn!("step is {step}, the bar will not advance");
        return Ok(state);
    }
    while state.progress() < state.total() {
        state = state.tick_by(step);
        on_tick(&state)?;
    }
    Ok(state)
}

fn handle_result(start: Instant, result: anyhow::Result<()>) -> ExitCode {
    let elapsed = start.elapsed().as_secs_f32();
    match result {
        Err(e) => {
            log::debug!("finished in {elapsed:.2}s");
            log::error!("fatal: {e:?}");
            ExitCode::FAILURE
        }
        Ok(()) => {
            log::info!("finished in {elapsed:.2}s");
            ExitCode::SUCCESS
        }
    }
}
