use clap::builder::{
	Styles,
	styling::{AnsiColor, Effects},
};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Red.on_default() | Effects::BOLD)
		.usage(AnsiColor::Red.on_default() | Effects::BOLD)
		.literal(AnsiColor::Blue.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}

/// Logs go to stderr; stdout carries the listings and JSON exports.
pub fn init_tracing(log_level: &str) {
	let filter = EnvFilter::new(log_level);
	let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

pub fn current_year() -> i32 {
	OffsetDateTime::now_utc().year()
}
