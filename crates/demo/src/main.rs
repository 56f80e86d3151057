// File: crates/demo/src/main.rs
// Summary: Demo loads a per-city weather CSV, draws the selected cities and writes SVG (and optionally PNG),
//          printing the tooltip for an optional probe position.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use weather_core::loader::{self, LoadOptions};
use weather_core::{theme, Chart, RenderOptions, TooltipState};

#[derive(Parser, Debug)]
#[command(name = "weather-demo")]
#[command(about = "Render mean temperature per city as a multi-line chart")]
struct Args {
    /// Input table (a .csv/.cvs extension swap is tried when missing)
    #[arg(default_value = "weather.csv")]
    input: String,

    /// City to draw; repeat for several (default: all)
    #[arg(short, long = "city")]
    cities: Vec<String>,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset (light, dark)
    #[arg(long, default_value = "light")]
    theme: String,

    #[arg(long, default_value_t = weather_core::types::WIDTH)]
    width: i32,

    #[arg(long, default_value_t = weather_core::types::HEIGHT)]
    height: i32,

    /// Plot-local pointer position "X,Y"; the tooltip is printed and drawn
    #[arg(long, value_parser = parse_probe)]
    probe: Option<(f32, f32)>,

    /// Also rasterize to PNG
    #[arg(long)]
    png: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let path = resolve_path(&args.input);
    if path.as_os_str() != args.input.as_str() {
        println!("  (extension swapped between .csv/.cvs)");
    }
    println!("Using input file: {}", path.display());

    // a failed load leaves an empty chart
    let dataset = loader::load_or_empty(&path, &LoadOptions::default());
    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        theme: theme::find(&args.theme),
        ..RenderOptions::default()
    };
    let mut chart = Chart::new(dataset, opts);
    println!("Loaded {} rows, cities: {:?}", chart.dataset().len(), chart.known_cities());

    if !args.cities.is_empty() {
        chart.select(args.cities.as_slice());
    }
    println!("Drawing {} series ({} points)", chart.scene().series.len(), chart.scene().point_count());

    if let Some((x, y)) = args.probe {
        match chart.pointer_move(x, y) {
            TooltipState::Visible(t) => {
                println!("{}", t.header);
                for row in &t.rows {
                    println!("  {}", row.label);
                }
            }
            TooltipState::Hidden => println!("No tooltip at ({x}, {y})"),
        }
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("weather");
    let out_svg = args.out_dir.join(format!("chart_{stem}.svg"));
    chart.write_svg(&out_svg)?;
    println!("Wrote {}", out_svg.display());

    if args.png {
        let out_png = out_svg.with_extension("png");
        weather_render_skia::render_to_png(chart.scene(), chart.tooltip().tooltip(), chart.options(), &out_png)?;
        println!("Wrote {}", out_png.display());
    }
    Ok(())
}

/// Use `raw` if it exists, else its .csv/.cvs twin if that exists, else `raw` unchanged.
fn resolve_path(raw: &str) -> PathBuf {
    let p = Path::new(raw);
    if p.exists() {
        return p.to_path_buf();
    }
    match swap_ext(p) {
        Some(alt) if alt.exists() => alt,
        _ => p.to_path_buf(),
    }
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_str()?.to_ascii_lowercase();
    let alt = match ext.as_str() {
        "csv" => "cvs",
        "cvs" => "csv",
        _ => return None,
    };
    Some(p.with_extension(alt))
}

fn parse_probe(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<f32>().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse::<f32>().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((x, y))
}
