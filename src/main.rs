//! bmtext - render bitmap text into a PNG
//!
//! Places the text on an in-memory window twice: once as a standalone
//! image, once tinted and composited one line below. The window frame is
//! then written out as PNG.

use anyhow::{anyhow, Context, Result};
use bmtext::config::Config;
use bmtext::utils::color::parse_hex_rgba;
use bmtext::{Canvas, FontAtlas, PixelBuffer, TextRenderer};
use log::info;
use std::path::{Path, PathBuf};

/// Command line options
#[derive(Debug, Default)]
struct Options {
    text: String,
    out: Option<PathBuf>,
    tint: Option<u32>,
    at: (i32, i32),
    config: Option<PathBuf>,
    print_config: bool,
}

fn print_help() {
    println!(
        r#"bmtext {} - fixed-width bitmap text renderer

USAGE:
    bmtext [OPTIONS] TEXT...

OPTIONS:
    -h, --help              Print this help message
    -V, --version           Print version information
    --out=PATH              Output PNG (default: <dir>/bmtext_<timestamp>.png)
    --tint=RRGGBBAA         Tint for the composited copy
    --at=X,Y                Position of the text (default: 4,4)
    --config=PATH           Read settings from PATH
    --print-config          Print the effective config as TOML and exit

EXAMPLES:
    bmtext Hello                        Render "Hello" with defaults
    bmtext --tint=ff0000ff --at=10,10 Hi
    RUST_LOG=debug bmtext Hello         Show rendering logs

CONFIG FILE:
    ~/.config/bmtext/config.toml (or $BMTEXT_CONFIG)
"#,
        env!("CARGO_PKG_VERSION")
    );
}

fn parse_position(s: &str) -> Option<(i32, i32)> {
    let (x, y) = s.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut opts = Options {
        at: (4, 4),
        ..Default::default()
    };
    let mut words = Vec::new();

    for arg in args {
        if let Some(v) = arg.strip_prefix("--out=") {
            opts.out = Some(PathBuf::from(v));
        } else if let Some(v) = arg.strip_prefix("--tint=") {
            opts.tint = Some(parse_hex_rgba(v).ok_or_else(|| anyhow!("Invalid tint: {}", v))?);
        } else if let Some(v) = arg.strip_prefix("--at=") {
            opts.at = parse_position(v).ok_or_else(|| anyhow!("Invalid position: {}", v))?;
        } else if let Some(v) = arg.strip_prefix("--config=") {
            opts.config = Some(PathBuf::from(v));
        } else if arg == "--print-config" {
            opts.print_config = true;
        } else if arg.starts_with("--") {
            return Err(anyhow!("Unknown option: {}", arg));
        } else {
            words.push(arg.as_str());
        }
    }

    opts.text = words.join(" ");
    Ok(opts)
}

/// Write an RGBA image as PNG
fn save_png(image: &PixelBuffer, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let (width, height) = (image.width(), image.height());
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.pixels())?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // --help
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    // --version
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("bmtext {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let opts = parse_args(&args)?;

    let config = match &opts.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load(),
    };

    if opts.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if opts.text.is_empty() {
        print_help();
        return Err(anyhow!("No text given"));
    }

    let renderer = TextRenderer::from_config(FontAtlas::builtin(), &config.text);
    let mut canvas = Canvas::new(
        config.output.width,
        config.output.height,
        config.output.background_rgba(),
    )
    .context("Failed to create window")?;

    let (x, y) = opts.at;
    let image = renderer
        .put_string(&mut canvas, &opts.text, x, y)
        .context("Failed to place text")?;

    let tint = opts.tint.unwrap_or_else(|| config.output.tint_rgba());
    let line_y = y.saturating_add(image.height() as i32);
    renderer
        .put_string_onto(canvas.frame_mut(), &opts.text, x, line_y, tint)
        .context("Failed to composite text")?;

    let path = match opts.out {
        Some(path) => path,
        None => {
            let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            Path::new(&config.output.dir).join(format!("bmtext_{}.png", timestamp))
        }
    };
    save_png(canvas.frame(), &path)?;

    info!("Rendered {} bytes to {}", opts.text.len(), path.display());
    println!("{}", path.display());
    Ok(())
}
