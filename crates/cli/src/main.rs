use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planar::api::{
    check_intersection_coords_with, compute_convex_hull_with, draw_points, draw_segment_pair,
    CloudCfg, PointCount, ReplayToken,
};
use planar::geom2::{check_intersection_with, convex_hull_with};
use planar::{GeomCfg, Hull, Intersection};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;
mod render;

use render::{Format, HullJson, IntersectionJson, Lang};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Segment intersection and convex hull calculator")]
struct Cmd {
    /// Message language for text output
    #[arg(long, value_enum, default_value_t = Lang::En, global = true)]
    lang: Lang,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Absolute tolerance for orientation and line-determinant checks (default 1e-9)
    #[arg(long, global = true, allow_negative_numbers = true)]
    eps: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Intersect segments (X1,Y1)-(X2,Y2) and (X3,Y3)-(X4,Y4)
    Intersect {
        #[arg(
            num_args = 8,
            required = true,
            allow_negative_numbers = true,
            value_name = "COORD"
        )]
        coords: Vec<f64>,
    },
    /// Convex hull of the points X1 Y1 X2 Y2 ...
    Hull {
        #[arg(allow_negative_numbers = true, value_name = "COORD")]
        coords: Vec<f64>,
    },
    /// Run a reproducible random input through the core
    Sample {
        #[arg(value_enum)]
        kind: SampleKind,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Number of points (hull only)
        #[arg(long, default_value_t = 8)]
        count: usize,
        /// Half side length of the sampling square
        #[arg(long, default_value_t = 10.0)]
        extent: f64,
        /// Snap coordinates to multiples of this step
        #[arg(long)]
        grid: Option<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SampleKind {
    Hull,
    Intersect,
}

/// Largest accepted `--extent`; keeps products in the orientation test finite.
const MAX_EXTENT: f64 = 1e150;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = execute(cmd)?;
    println!("{out}");
    Ok(())
}

fn execute(cmd: Cmd) -> Result<String> {
    let cfg = geom_cfg(cmd.eps)?;
    match cmd.action {
        Action::Intersect { coords } => intersect(cfg, cmd.lang, cmd.format, &coords),
        Action::Hull { coords } => hull(cfg, cmd.lang, cmd.format, &coords),
        Action::Sample {
            kind,
            seed,
            index,
            count,
            extent,
            grid,
        } => {
            let cloud = CloudCfg {
                count: PointCount::Fixed(count),
                half_extent: extent,
                grid,
            };
            sample(cfg, cmd.lang, cmd.format, kind, cloud, ReplayToken::new(seed, index))
        }
        Action::Report => Ok(serde_json::to_string_pretty(&provenance::report_json())?),
    }
}

fn geom_cfg(eps: Option<f64>) -> Result<GeomCfg> {
    match eps {
        None => Ok(GeomCfg::default()),
        Some(e) if e.is_finite() && e >= 0.0 => Ok(GeomCfg::uniform(e)),
        Some(e) => bail!("--eps must be a finite, non-negative number (got {e})"),
    }
}

fn ensure_finite(coords: &[f64]) -> Result<()> {
    if let Some((i, c)) = coords.iter().enumerate().find(|(_, c)| !c.is_finite()) {
        bail!("coordinate #{} is not finite: {c}", i + 1);
    }
    Ok(())
}

fn intersect(cfg: GeomCfg, lang: Lang, format: Format, coords: &[f64]) -> Result<String> {
    ensure_finite(coords)?;
    let [x1, y1, x2, y2, x3, y3, x4, y4]: [f64; 8] = coords
        .try_into()
        .context("intersect takes exactly 8 coordinates")?;
    tracing::info!(?coords, "intersect");
    let r = check_intersection_coords_with(cfg, x1, y1, x2, y2, x3, y3, x4, y4);
    render_intersection(lang, format, &r)
}

fn hull(cfg: GeomCfg, lang: Lang, format: Format, coords: &[f64]) -> Result<String> {
    ensure_finite(coords)?;
    if coords.len() % 2 != 0 {
        bail!(
            "hull takes pairs of coordinates; got {} values",
            coords.len()
        );
    }
    tracing::info!(points = coords.len() / 2, "hull");
    let h = compute_convex_hull_with(cfg, coords);
    render_hull(lang, format, &h)
}

fn sample(
    cfg: GeomCfg,
    lang: Lang,
    format: Format,
    kind: SampleKind,
    cloud: CloudCfg,
    tok: ReplayToken,
) -> Result<String> {
    if !(cloud.half_extent.is_finite() && cloud.half_extent > 0.0) {
        bail!("--extent must be a positive number");
    }
    if cloud.half_extent > MAX_EXTENT {
        bail!(
            "--extent must not exceed {MAX_EXTENT:e} (got {:e})",
            cloud.half_extent
        );
    }
    if let Some(g) = cloud.grid {
        if !(g.is_finite() && g > 0.0) {
            bail!("--grid must be a finite, positive number (got {g})");
        }
    }
    tracing::info!(?kind, seed = tok.seed, index = tok.index, "sample");
    match kind {
        SampleKind::Hull => {
            let pts = draw_points(cloud, tok);
            for (i, p) in pts.iter().enumerate() {
                tracing::debug!(label = i + 1, x = p.x, y = p.y, "sampled point");
            }
            render_hull(lang, format, &convex_hull_with(cfg, &pts))
        }
        SampleKind::Intersect => {
            let (s1, s2) = draw_segment_pair(cloud, tok);
            tracing::debug!(?s1, ?s2, "sampled segments");
            render_intersection(lang, format, &check_intersection_with(cfg, s1, s2))
        }
    }
}

fn render_intersection(lang: Lang, format: Format, r: &Intersection) -> Result<String> {
    if matches!(r, Intersection::IntersectsButUnresolved) {
        tracing::warn!("intersection detected but line solve was degenerate; check --eps");
    }
    tracing::info!(result = r.tag(), "intersect_done");
    Ok(match format {
        Format::Text => render::intersection_text(lang, r),
        Format::Json => serde_json::to_string_pretty(&IntersectionJson::from(r))?,
    })
}

fn render_hull(lang: Lang, format: Format, h: &Hull) -> Result<String> {
    tracing::info!(kind = h.kind.tag(), vertices = h.len(), "hull_done");
    Ok(match format {
        Format::Text => render::hull_text(lang, h),
        Format::Json => serde_json::to_string_pretty(&HullJson::from(h))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let mut argv = vec!["cli"];
        argv.extend_from_slice(args);
        execute(Cmd::try_parse_from(argv)?)
    }

    #[test]
    fn intersect_accepts_negative_coordinates() {
        let out = run(&["intersect", "-1", "-1", "1", "1", "-1", "1", "1", "-1"]).unwrap();
        assert_eq!(out, "Segments intersect at point: (0.00, 0.00)");
    }

    #[test]
    fn intersect_requires_eight_numbers() {
        assert!(Cmd::try_parse_from(["cli", "intersect", "0", "0", "1", "1"]).is_err());
    }

    #[test]
    fn hull_rejects_odd_count_and_non_finite() {
        assert!(run(&["hull", "0", "0", "1"]).is_err());
        assert!(run(&["hull", "0", "0", "inf", "1"]).is_err());
    }

    #[test]
    fn hull_polish_json_and_text() {
        let out = run(&["--lang", "pl", "hull", "0", "0", "0", "0", "0", "0"]).unwrap();
        assert_eq!(out, "Otoczka wypukła to punkt: P1 (0.00, 0.00)");
        let out = run(&["hull", "--format", "json", "0", "0", "1", "0", "2", "0"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["kind"], "segment");
        assert_eq!(v["vertices"][1]["label"], "P3");
    }

    #[test]
    fn eps_flag_is_validated() {
        assert!(run(&["--eps", "-1", "hull"]).is_err());
        let out = run(&["--eps", "0.01", "hull", "0", "0", "1", "0.001", "2", "0"]).unwrap();
        assert!(out.starts_with("The convex hull is a segment"));
    }

    #[test]
    fn sample_is_reproducible() {
        let args = ["sample", "hull", "--seed", "3", "--index", "1", "--grid", "1"];
        let a = run(&args).unwrap();
        let b = run(&args).unwrap();
        assert_eq!(a, b);
        assert!(run(&["sample", "intersect", "--extent", "0"]).is_err());
    }

    #[test]
    fn sample_rejects_out_of_range_extent_and_grid() {
        assert!(run(&["sample", "hull", "--extent", "1e308"]).is_err());
        assert!(run(&["sample", "intersect", "--extent", "inf"]).is_err());
        assert!(run(&["sample", "hull", "--grid", "inf"]).is_err());
        assert!(run(&["sample", "hull", "--grid", "0"]).is_err());
        assert!(run(&["sample", "intersect", "--grid", "-1"]).is_err());
        let out = run(&["sample", "hull", "--extent", "1e150", "--format", "json"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(v["vertices"]
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["x"].is_f64() && p["y"].is_f64()));
    }

    #[test]
    fn intersect_json_through_execute() {
        let out = run(&["--format", "json", "intersect", "0", "0", "4", "4", "0", "4", "4", "0"])
            .unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["kind"], "point");
        assert_eq!(v["point"][0], 2.0);
        assert_eq!(v["point"][1], 2.0);
        assert!(v.get("overlap").is_none());
    }

    #[test]
    fn report_through_execute() {
        let out = run(&["report"]).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["version"], planar::VERSION);
        assert!(v.get("crate").is_some());
    }
}
