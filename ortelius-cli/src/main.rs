//! Command line front end for the viewer engine: loads a vector file,
//! projects it around a map center and prints what the canvas would show.

use anyhow::{bail, Context, Result};
use clap::Parser;
use ortelius::formats::reader_for_path;
use ortelius::measure::Trajectory;
use ortelius::{FeatureReader, TransformingReader};
use ortelius_types::{CoordinateConverter, GeocentricConverter, PlanePoint, Rect};

#[derive(Parser)]
#[command(name = "ortelius-cli", about = "Project and inspect vector map files")]
struct Args {
    /// Vector file to load (.shp or .mif).
    path: String,

    /// Map center as `lon,lat` in degrees.
    #[arg(long)]
    center: String,

    /// Clip rectangle as `left,bottom,right,top` in projected meters.
    #[arg(long)]
    clip: Option<String>,

    /// Measure `x1,y1,x2,y2` in projected meters.
    #[arg(long)]
    measure: Option<String>,

    /// Project a sample of points back and report the worst residual.
    #[arg(long)]
    verify: bool,

    /// Number of feature attribute rows to print.
    #[arg(long, default_value_t = 10)]
    rows: usize,
}

fn parse_numbers(text: &str, expected: usize) -> Result<Vec<f64>> {
    let values = text
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("cannot parse `{text}` as numbers"))?;
    if values.len() != expected {
        bail!("expected {expected} comma separated numbers, got {}", values.len());
    }
    Ok(values)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let center = parse_numbers(&args.center, 2)?;
    let converter = GeocentricConverter::new(center[0], center[1]);

    let mut map = TransformingReader::new();
    map.set_reader(reader_for_path(&args.path)?);
    map.set_converter(Box::new(converter));
    map.set_path(&args.path);
    map.read()
        .with_context(|| format!("failed to load {}", args.path))?;

    println!(
        "{} features, {} points",
        map.features().len(),
        map.point_count()
    );
    if let Some(bbox) = map.bounding_box() {
        println!(
            "bounds: ({:.1}, {:.1}) .. ({:.1}, {:.1}) m",
            bbox.x_min, bbox.y_min, bbox.x_max, bbox.y_max
        );
    }

    if args.verify {
        let mut worst = 0.0_f64;
        let originals = map.inner().map(|inner| inner.features()).unwrap_or(&[]);
        for (converted, original) in map.features().iter().zip(originals) {
            for (after, before) in converted.points().iter().zip(original.points()) {
                let back = converter
                    .transform_back(after)
                    .unwrap_or(PlanePoint::default());
                worst = worst.max(back.distance_to(before));
            }
        }
        println!("worst round-trip residual: {worst:.6}°");
    }

    if let Some(text) = &args.clip {
        let v = parse_numbers(text, 4)?;
        map.clip(Rect::new(v[0], v[1], v[2], v[3]));
        println!("clipped: {} features remain", map.features().len());
    }

    if let Some(text) = &args.measure {
        let v = parse_numbers(text, 4)?;
        let leg = Trajectory::new(PlanePoint::new(v[0], v[1]), PlanePoint::new(v[2], v[3]));
        println!(
            "distance {:.1} m, heading {:.1}°",
            leg.length(),
            leg.heading()
        );
    }

    for record in map.features().iter().take(args.rows) {
        if !record.is_fields_empty() {
            println!("  {}", record.fields_to_string());
        }
    }

    Ok(())
}
