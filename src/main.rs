/*
 *  main.rs
 *
 *  UMPix - matrix pixels over the air
 *  (c) 2020-26 Stuart Hunter
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::path::Path;
use std::sync::Arc;

use umpix::config::{self, Cli, Command, Config};
use umpix::display::renderer::now_secs;
use umpix::display::scene::{PreparedScene, SceneRequest};
use umpix::display::{render, RenderContext};
use umpix::icons::IconSet;
use umpix::media::{ImageSource, MediaLoader};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli)?;

    if cli.dump_config {
        println!("{}", config::dump_config(&cfg)?);
        return Ok(());
    }

    env_logger::Builder::from_env(Env::default().default_filter_or(cfg.log_level()))
        .format_timestamp_secs()
        .init();

    info!("{} matrix pixels over the air", env!("CARGO_PKG_NAME"));
    info!("v.{} built {}", env!("CARGO_PKG_VERSION"), BUILD_DATE);

    let Some(command) = cli.command.clone() else {
        bail!("no command given, try --help");
    };

    let icons = Arc::new(IconSet::load_or_disabled(&cfg.icon_font(), &cfg.icon_meta()));
    let ctx = RenderContext::new(cfg.width(), cfg.height()).with_icons(icons);
    let images: Arc<dyn ImageSource> = Arc::new(MediaLoader::new(&cfg.allowlist(), cfg.fetch_timeout())?);

    match command {
        Command::Preview { scene, output } => preview(&ctx, images.as_ref(), &scene, &output).await,
        other => device::run(&cfg, ctx, images, other).await,
    }
}

async fn read_scene(path: &Path) -> anyhow::Result<SceneRequest> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading scene {}", path.display()))?;
    SceneRequest::from_json(&json).with_context(|| format!("parsing scene {}", path.display()))
}

/// Render once, offline, and write the PNG the panel would have received.
async fn preview(ctx: &RenderContext, images: &dyn ImageSource, scene: &Path, output: &Path) -> anyhow::Result<()> {
    let request = read_scene(scene).await?;
    let prepared = PreparedScene::prepare(request, ctx, images).await;
    let png = render(ctx, &prepared, now_secs()).to_png()?;
    tokio::fs::write(output, &png)
        .await
        .with_context(|| format!("writing {}", output.display()))?;
    info!("wrote {}x{} preview to {}", ctx.width, ctx.height, output.display());
    Ok(())
}

#[cfg(feature = "ble")]
mod device {
    use super::*;
    use log::warn;
    use umpix::display::{AnimationState, DisplayManager};
    use tokio::signal::unix::{signal, SignalKind}; // Import specific Unix signals
    use umpix::transport::{BtleplugBackend, UmpClient};

    pub async fn run(cfg: &Config, ctx: RenderContext, images: Arc<dyn ImageSource>, command: Command) -> anyhow::Result<()> {
        let address = cfg.address()?;
        let name = cfg.device_name().unwrap_or_else(|| address.default_title());
        info!("using {} at {}", name, address);

        let backend = Arc::new(BtleplugBackend::new().await?);
        let client = UmpClient::new(address, cfg.width(), cfg.height(), backend, cfg.connect_timeout());
        let manager = DisplayManager::new(Arc::new(client), ctx, images);

        let result = match command {
            Command::Draw { scene } => {
                let request = read_scene(&scene).await?;
                match manager.draw_visuals(request).await {
                    Ok(AnimationState::Animating) => {
                        info!("animating {}, interrupt to stop", name);
                        signal_handler().await?;
                        Ok(())
                    }
                    Ok(_) => Ok(()),
                    Err(e) => Err(e),
                }
            }
            Command::Clear => manager.clear_display().await,
            Command::SyncTime => manager.sync_time().await,
            Command::On => manager.turn_on().await,
            Command::Off => manager.turn_off().await,
            Command::Preview { .. } => Ok(()),
        };

        if let Err(e) = &result {
            warn!("{} unavailable: {}", name, e);
        }
        manager.shutdown().await;
        Ok(result?)
    }

    /// Asynchronously waits for a SIGINT, SIGTERM, or SIGHUP signal.
    async fn signal_handler() -> anyhow::Result<()> {
        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sighup = signal(SignalKind::hangup())?;

        tokio::select! {
            _ = sigint.recv() => {
                info!("SIGINT received. Initiating graceful shutdown.");
            }
            _ = sigterm.recv() => {
                info!("SIGTERM received. Initiating graceful shutdown.");
            }
            _ = sighup.recv() => {
                info!("SIGHUP received. Initiating graceful shutdown.");
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "ble"))]
mod device {
    use super::*;

    pub async fn run(_cfg: &Config, _ctx: RenderContext, _images: Arc<dyn ImageSource>, command: Command) -> anyhow::Result<()> {
        bail!(
            "{:?} needs a panel, but {} was built without BLE support (rebuild with --features ble)",
            command,
            env!("CARGO_PKG_NAME")
        );
    }
}
