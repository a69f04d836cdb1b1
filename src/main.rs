use {
  anyhow::Context,
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  std::{fs, io, path::PathBuf, process},
  tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
  },
  wp_content::{ContentOptions, Post, ProcessedPost, Processor},
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn init_tracing() {
  tracing_subscriber::registry()
    .with(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();
}

fn main() {
  init_tracing();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
