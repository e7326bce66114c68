mod config;
mod detail;
mod error;
mod replay;
mod store;
mod tree;

use canvas::doc::WorldModel;
use canvas::engine::{EngineCore, LayoutReport};
use canvas::layout::Layout;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Command};
use crate::error::AppError;

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (mut core, layout, report) = open(&cli)?;

    match cli.command {
        Command::Tree => print!("{}", tree::render(&tree::build(core.world()))),
        Command::Show { id } => {
            let item = core.world().item(&id).ok_or_else(|| AppError::NotFound(id.clone()))?;
            print!("{}", detail::render(&detail::detail_lines(item)));
        }
        Command::Replay { script, save } => {
            let steps = replay::load(&script)?;
            for line in replay::run(&mut core, &script, steps)? {
                println!("{line}");
            }
            if save {
                store::save_layout(&cli.layout, &core.layout_snapshot(layout.panes, layout.window))?;
            }
        }
        Command::Check => {
            let world = core.world();
            println!("inventory: {} records, {} modules", world.len(), world.modules().len());
            println!("layout: {} kept, {} dropped", report.kept, report.dropped);
        }
    }
    Ok(())
}

/// Load inventory and layout into a fresh engine sized to the configured viewport.
fn open(cli: &Cli) -> Result<(EngineCore, Layout, LayoutReport), AppError> {
    let items = store::load_inventory(&cli.inventory)?;
    let mut core = EngineCore::new(WorldModel::from_inventory(items));
    core.set_viewport(cli.viewport_width, cli.viewport_height);

    let layout = store::load_layout(&cli.layout)?;
    let report = core.apply_layout(&layout);
    info!(kept = report.kept, dropped = report.dropped, "layout applied");
    Ok((core, layout, report))
}
