use std::env;
use std::process::ExitCode;

use reminders::{Database, Moment};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<_> = env::args_os().skip(1).collect();

    let [path] = args.as_slice() else {
        println!("Usage: reminders <DATABASE>");
        return ExitCode::SUCCESS;
    };

    let db = match Database::load(path) {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let moment = Moment::now();
    #[cfg(feature = "log")]
    log::debug!("Looking for reminders active on {moment}");

    for entry in db.what_to_do(moment) {
        println!("{}", entry.label());
    }

    ExitCode::SUCCESS
}
