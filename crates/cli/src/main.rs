use std::io;

use anyhow::Context;
use clap::Parser;

use stockwatch_cli::{config::Config, menu::Session};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    stockwatch_observability::init(config.log_format);

    let session = Session::from_config(&config, io::stdin().lock(), io::stdout().lock())
        .context("failed to seed the organization")?;

    session.run().context("menu loop failed")
}
