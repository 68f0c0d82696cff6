use std::{
    env::args,
    error::Error,
    io::{stdin, stdout},
};
use tinylife::{play, Life};
use tinylife_term::Args;

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse_packed(args().skip(1))?;
    let world = args.load_packed()?;
    eprintln!("Bits: {:#018x}\tPop: {}", world.bits(), world.population());

    let summary = play(world, stdin().lock(), stdout().lock(), &args.config)?;
    eprintln!(
        "Stopped: {:?}\tGen: {}\tPop: {}",
        summary.reason,
        summary.generations,
        summary.world.population(),
    );
    Ok(())
}
