//! Scenario replay entry point.

use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: drager-replay <scenario.json>");
        return ExitCode::from(2);
    };
    log::info!("Replaying {}", path);

    let result = drager_replay::load_scenario(&path).and_then(|scenario| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        drager_replay::replay(&scenario, &mut out)?;
        out.flush()?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Replay failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
