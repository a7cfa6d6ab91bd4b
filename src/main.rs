use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use text_adventure::world::{World, validate_world};
use text_adventure::{Session, default_world, load_world_from_file};

#[derive(Parser, Debug)]
#[command(name = "text_adventure", version, about = "A small text adventure")]
struct Args {
    /// World file to play; the bundled Kaer Morhen world is used if omitted
    world: Option<PathBuf>,

    /// Refuse to start if the world has authoring problems
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load(args: &Args) -> Result<World, String> {
    let world = match &args.world {
        Some(path) => load_world_from_file(path)
            .map_err(|e| format!("Failed to load world file '{}': {e}", path.display()))?,
        None => default_world().map_err(|e| format!("Failed to load bundled world: {e}"))?,
    };

    let issues = validate_world(&world);
    for issue in &issues {
        tracing::warn!("{}", issue);
    }
    if args.strict && !issues.is_empty() {
        return Err(text_adventure::WorldError::Validation(issues).to_string());
    }

    Ok(world)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let world = match load(&args) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(Session::new(world)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(mut session: Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", session.intro());

    let mut lines = stdin.lock().lines();
    loop {
        print!("\n> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!("\nGoodbye.");
            break;
        };
        let line = line?;

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (msg, quit) = session.step(input);
        println!("{}", msg);

        if quit {
            break;
        }
    }

    Ok(())
}
