use anyhow::{Context, Result, anyhow, bail};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;
use touchpad_controls::draw::{Color, Rgb565Surface};
use touchpad_controls::input::{
    EventQueue, HostEvent, KeyEvent, PointerEvent, TouchControls, TouchResponse,
};
use touchpad_controls::layout::ZoneRegistry;
use touchpad_controls::{Config, Mode};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TOUCHPAD_CONTROLS_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "touchpad-controls")]
#[command(version = VERSION, about = "On-screen touch controls for console frontends")]
struct Cli {
    /// Print the zones of the selected layout
    #[arg(long, action = ArgAction::SetTrue)]
    list_zones: bool,

    /// Layout to use (game or menu)
    #[arg(long, short = 'm', value_name = "MODE", default_value = "game")]
    mode: String,

    /// Replay a tap at physical coordinates (repeatable)
    #[arg(long, value_name = "X,Y")]
    tap: Vec<String>,

    /// Physical framebuffer size
    #[arg(long, value_name = "WxH", default_value = "1024x768")]
    size: String,

    /// Render the overlay to a PNG file
    #[arg(long, value_name = "OUT.png")]
    render: Option<PathBuf>,

    /// Hold a finger at physical coordinates while rendering (repeatable)
    #[arg(long, value_name = "X,Y")]
    press: Vec<String>,

    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mode: Mode = cli
        .mode
        .parse()
        .map_err(|_| anyhow!("Unknown mode '{}' (expected game or menu)", cli.mode))?;

    if !cli.list_zones && cli.tap.is_empty() && cli.render.is_none() {
        print_usage();
        return Ok(());
    }

    if cli.list_zones {
        list_zones(mode);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let (width, height) = parse_size(&cli.size)?;

    if !cli.tap.is_empty() {
        let taps = cli
            .tap
            .iter()
            .map(|s| parse_point(s))
            .collect::<Result<Vec<_>>>()?;
        replay_taps(&config, mode, (width, height), &taps);
    }

    if let Some(path) = &cli.render {
        let presses = cli
            .press
            .iter()
            .map(|s| parse_point(s))
            .collect::<Result<Vec<_>>>()?;
        render_preview(&config, mode, (width, height), &presses, path)?;
    }

    Ok(())
}

fn print_usage() {
    println!("touchpad-controls: On-screen touch controls for console frontends");
    println!();
    println!("Usage:");
    println!("  touchpad-controls --list-zones [--mode menu]");
    println!("  touchpad-controls --tap X,Y [--tap X,Y ...] [--size WxH] [--mode menu]");
    println!("  touchpad-controls --render OUT.png [--press X,Y ...] [--size WxH]");
    println!("  touchpad-controls --help      Show help");
    println!();
    println!("Configuration is read from ~/.config/touchpad-controls/config.toml");
}

fn parse_point(s: &str) -> Result<(i32, i32)> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("Expected X,Y but got '{s}'"))?;
    let x = x.trim().parse().with_context(|| format!("Bad X in '{s}'"))?;
    let y = y.trim().parse().with_context(|| format!("Bad Y in '{s}'"))?;
    Ok((x, y))
}

fn parse_size(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("Expected WxH but got '{s}'"))?;
    let w: u32 = w.trim().parse().with_context(|| format!("Bad width in '{s}'"))?;
    let h: u32 = h.trim().parse().with_context(|| format!("Bad height in '{s}'"))?;
    if w == 0 || h == 0 {
        bail!("Size must be non-zero, got {w}x{h}");
    }
    Ok((w, h))
}

fn list_zones(mode: Mode) {
    let registry = ZoneRegistry::default();
    println!("{mode} layout:");
    for (index, zone) in registry.zones(mode).iter().enumerate() {
        let r = zone.rect;
        println!(
            "{index:>3}  {:>4},{:<4} {:>3}x{:<3}  code {:>3}  {}",
            r.x,
            r.y,
            r.width,
            r.height,
            zone.control.code(),
            zone.label.unwrap_or("-")
        );
    }
}

fn replay_taps(config: &Config, mode: Mode, size: (u32, u32), taps: &[(i32, i32)]) {
    let mut host = EventQueue::new();
    let mut controls = TouchControls::new(config);
    controls.update_screen_dimensions(size.0, size.1);
    controls.set_mode(mode, &mut host);

    for &(x, y) in taps {
        let now = Instant::now();
        let down = HostEvent::Pointer(PointerEvent::down(0, x, y));
        let response = controls.handle_event(&down, &mut host, now);
        let pad = controls.game_buttons();
        controls.handle_event(&HostEvent::Pointer(PointerEvent::up(0, x, y)), &mut host, now);

        match (response, controls.mode()) {
            (TouchResponse::OpenMenu, _) => {
                println!("tap {x},{y}: open menu");
                controls.set_mode(Mode::Menu, &mut host);
            }
            (_, Mode::Game) => {
                let names: Vec<String> = pad.buttons().map(|b| format!("{b:?}")).collect();
                println!("tap {x},{y}: pad {:#06x} [{}]", pad.bits(), names.join(" "));
            }
            (_, Mode::Menu) => {
                let keys = host.take_keys();
                if keys.is_empty() {
                    println!("tap {x},{y}: no action");
                } else {
                    println!("tap {x},{y}: {}", describe_keys(&keys));
                }
            }
        }
    }
    controls.finish();
}

fn describe_keys(keys: &[KeyEvent]) -> String {
    keys.iter()
        .map(|k| {
            let phase = if k.pressed { "press" } else { "release" };
            format!("{:?} {phase}", k.key)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_preview(
    config: &Config,
    mode: Mode,
    size: (u32, u32),
    presses: &[(i32, i32)],
    path: &Path,
) -> Result<()> {
    let (width, height) = size;
    let mut host = EventQueue::new();
    let mut controls = TouchControls::init(config, &mut host);
    controls.set_overlay_visible(true);
    controls.update_screen_dimensions(width, height);
    controls.set_mode(mode, &mut host);

    for (contact, &(x, y)) in presses.iter().enumerate() {
        let down = HostEvent::Pointer(PointerEvent::down(contact as u32, x, y));
        if controls.handle_event(&down, &mut host, Instant::now()) == TouchResponse::OpenMenu {
            log::info!("Press at {x},{y} hit the open-menu zone");
        }
    }
    let injected = host.take_keys();
    if !injected.is_empty() {
        log::debug!("Preview presses injected: {}", describe_keys(&injected));
    }

    let mut pixels = vec![0u16; width as usize * height as usize];
    let drawn = {
        let mut surface = Rgb565Surface::packed(&mut pixels, width, height)?;
        controls.draw_overlay(&mut surface)
    };
    controls.finish();

    let mut image = image::RgbImage::new(width, height);
    for (pixel, value) in image.pixels_mut().zip(&pixels) {
        let c = Color::from_rgb565(*value);
        *pixel = image::Rgb([c.r, c.g, c.b]);
    }
    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Rendered {drawn} zones to {}", path.display());
    Ok(())
}
