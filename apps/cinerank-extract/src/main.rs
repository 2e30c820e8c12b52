// crates.io
use clap::Parser;
// self
use cinerank_extract::Args;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = Args::parse();
	cinerank_extract::run(args)
}
