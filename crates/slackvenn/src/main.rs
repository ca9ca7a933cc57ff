use std::io;

use slackvenn::{config::TOKEN_VAR, Cli, Config, Error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let token = std::env::var(TOKEN_VAR).ok();

    let result = match Cli::try_parse_with_token(std::env::args_os(), token.as_deref()) {
        Ok(cli) => slackvenn::compare(cli, token, Config::http, &mut io::stdout()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {}
        Err(Error::Usage(e)) => e.exit(),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
