// crates.io
use clap::Parser;
// self
use cinerank::Args;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = Args::parse();
	cinerank::run(args)
}
