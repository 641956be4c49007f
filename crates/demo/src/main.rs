// File: crates/demo/src/main.rs
// Summary: Demo loads a usage CSV, renders the streamgraph to PNG/SVG and, when asked,
// simulates a hover to render the drill-down overlay.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use stream_core::{theme, RawRecord, RenderOptions, Series, StreamChart};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: streamgraph-demo [CSV] [--out DIR] [--theme NAME] [--no-labels] \
                     [--hover SERIES | --hover-at X,Y]";

#[derive(Clone, Copy)]
enum Hover {
    Series(Series),
    At(f32, f32),
}

struct Args {
    input: String,
    out_dir: PathBuf,
    theme: String,
    draw_labels: bool,
    hover: Option<Hover>,
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = parse_args(std::env::args().skip(1))?;

    let (path, used_alt) = resolve_path(&args.input)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let rows = load_rows(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(rows = rows.len(), "loaded rows");

    let opts = RenderOptions { draw_labels: args.draw_labels, ..RenderOptions::default() };
    let mut chart = StreamChart::new(opts, theme::find(&args.theme));
    if !chart.load_dataset(&rows) {
        warn!("no rows in input; nothing to draw");
        return Ok(());
    }

    let stem = out_stem(&path);
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let out_png = args.out_dir.join(format!("{stem}.png"));
    chart.render_to_png(&out_png)?;
    let out_svg = out_png.with_extension("svg");
    chart.render_to_svg(&out_svg)?;
    info!(png = %out_png.display(), svg = %out_svg.display(), "wrote main chart");

    for b in &chart.state().buckets {
        let totals = Series::ALL
            .iter()
            .map(|&s| format!("{}={}", s, b.totals[s]))
            .collect::<Vec<_>>()
            .join(" ");
        info!(month = b.label(), %totals, "bucket");
    }

    let hovered = match args.hover {
        Some(Hover::Series(s)) => chart.hover_series(s).then_some(s),
        Some(Hover::At(x, y)) => chart.pointer_enter_at(x, y),
        None => None,
    };
    match (hovered, chart.overlay_png_bytes()?) {
        (Some(series), Some(bytes)) => {
            let out = args.out_dir.join(format!("{stem}_{}.png", slug(series)));
            std::fs::write(&out, bytes).with_context(|| format!("writing {}", out.display()))?;
            if let Some(o) = chart.overlay() {
                info!(%series, x = o.position.x, y = o.position.y, path = %out.display(), "wrote overlay");
            }
        }
        (None, _) if args.hover.is_some() => warn!("hover did not land on a drawn band"),
        _ => {}
    }
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        input: "crates/demo/data/llm_usage.csv".to_string(),
        out_dir: PathBuf::from("target/out"),
        theme: "light".to_string(),
        draw_labels: true,
        hover: None,
    };
    while let Some(a) = it.next() {
        match a.as_str() {
            "--out" => args.out_dir = PathBuf::from(it.next().context(USAGE)?),
            "--theme" => args.theme = it.next().context(USAGE)?,
            "--no-labels" => args.draw_labels = false,
            "--hover" => {
                let name = it.next().context(USAGE)?;
                let s = Series::from_display_name(&name)
                    .with_context(|| format!("unknown series '{name}'"))?;
                args.hover = Some(Hover::Series(s));
            }
            "--hover-at" => {
                let xy = it.next().context(USAGE)?;
                let (x, y) = xy.split_once(',').context("--hover-at expects X,Y")?;
                args.hover = Some(Hover::At(x.trim().parse()?, y.trim().parse()?));
            }
            "-h" | "--help" => anyhow::bail!(USAGE),
            _ if a.starts_with("--") => anyhow::bail!("unknown flag '{a}'\n{USAGE}"),
            _ => args.input = a,
        }
    }
    Ok(args)
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => alt.set_extension("csv"),
        "csv" => alt.set_extension("cvs"),
        _ => return None,
    };
    Some(alt)
}

/// Read every row as header -> cell text. Cells are passed through untouched; typing
/// happens in the chart.
fn load_rows(path: &Path) -> Result<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    tracing::debug!(?headers, "csv headers");

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        out.push(
            headers
                .iter()
                .zip(rec.iter())
                .map(|(h, v)| (h.clone(), v.to_string()))
                .collect(),
        );
    }
    Ok(out)
}

fn out_stem(input: &Path) -> String {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    format!("streamgraph_{stem}")
}

fn slug(series: Series) -> String {
    series.display_name().to_lowercase().replace(['.', '-'], "")
}
