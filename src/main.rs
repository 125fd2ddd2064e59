use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use codexmonitor_layout::cli::CliArgs;
use codexmonitor_layout::config::LayoutConfig;

mod runtime;
mod view;

use runtime::App;

fn main() -> Result<()> {
    codexmonitor_layout::tracing::init();

    let startup_config = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;
    let config = LayoutConfig::load();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(startup_config, config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
