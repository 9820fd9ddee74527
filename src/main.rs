use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use vitrine::args::Cli;
use vitrine::catalog::Catalog;
use vitrine::config::Config;
use vitrine::shutdown::ShutdownHandle;
use vitrine::ui::app::App;
use vitrine::ui::render::render_snapshot;
use vitrine::ui::runtime;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    vitrine::logging::init_tracing(&config.logging)?;

    let catalog = match &config.catalog.path {
        Some(path) => Catalog::load_from(path)?,
        None => Catalog::builtin(),
    };
    let mut app = App::new(catalog, &config.ui);

    if cli.snapshot {
        print!("{}", render_snapshot(&mut app, cli.width, cli.height));
        return Ok(());
    }

    let shutdown = ShutdownHandle::install().context("Failed to install signal handlers")?;
    runtime::run(&mut app, &config.ui, shutdown).context("Terminal UI failed")?;
    Ok(())
}
