use std::process::ExitCode;

use tortoise::{check_balanced_definitions, FileSource, InteractiveSource, Session};

/// Recursion nests one stack frame per pending argument collection and
/// procedure application; a user-recursive definition like a naive
/// factorial or fibonacci can get deep quickly on the default thread stack.
const SESSION_STACK_SIZE: usize = 64 * 1024 * 1024;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let handle = std::thread::Builder::new()
        .name("tortoise-session".to_string())
        .stack_size(SESSION_STACK_SIZE)
        .spawn(move || run(&args))
        .expect("failed to spawn the session thread");

    handle.join().unwrap_or(ExitCode::FAILURE)
}

fn run(args: &[String]) -> ExitCode {
    if args.len() > 1 {
        return run_file(&args[1]);
    }

    let mut session = Session::new(Box::new(InteractiveSource::stdin()));
    session.run();
    ExitCode::SUCCESS
}

fn run_file(path: &str) -> ExitCode {
    let contents = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let lines: Vec<String> = contents.lines().map(str::to_string).collect();
    if let Err(err) = check_balanced_definitions(&lines) {
        eprintln!("{path}: {err}");
        return ExitCode::FAILURE;
    }

    let mut session = Session::new(Box::new(FileSource::from_lines(lines)));
    session.run();
    ExitCode::SUCCESS
}
