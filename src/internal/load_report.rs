#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use plotters::prelude::*;
use primehash::{
    ChainingHashMap, HashFunction, HashMapExtensions, LoadStats, ProbingHashMap, hash_function_1,
    hash_function_2,
};
use rand::{Rng, SeedableRng, distr::Alphanumeric, rngs::StdRng};

// Strategies compared in every chart
const METHODS: [&str; 2] = ["Quadratic Probing", "Separate Chaining"];
const KEY_LENGTH: usize = 8;

/// Fills both maps with random keys and charts how their load and empty buckets evolve
#[derive(Debug, Parser)]
#[command(name = "load_report", version, about)]
struct Args {
    /// Total number of keys inserted into each map
    #[arg(long, default_value_t = 1_000)]
    keys: usize,

    /// Number of sample points between zero and `--keys`
    #[arg(long, default_value_t = 10)]
    steps: usize,

    /// Initial capacity requested for both maps (rounded up to a prime)
    #[arg(long, default_value_t = primehash::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Hash function to use, 1 (character sum) or 2 (position weighted sum)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    hash: u8,

    /// Seed for the key generator; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the PNG charts are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

/// One sample row for a strategy
#[derive(Debug, Clone, Copy)]
struct Sample {
    keys: usize,
    stats: LoadStats,
}

fn random_keys(rng: &mut StdRng, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| (0..KEY_LENGTH).map(|_| char::from(rng.sample(Alphanumeric))).collect())
        .collect()
}

// Key counts at which the maps are sampled
fn checkpoints(keys: usize, steps: usize) -> Vec<usize> {
    (1..=steps).map(|step| keys * step / steps).collect()
}

fn sample<M>(
    map: &mut M,
    keys: &[String],
    checkpoints: &[usize],
    mut put: impl FnMut(&mut M, &str, usize),
) -> Vec<Sample>
where
    M: HashMapExtensions<usize>,
{
    let mut samples = Vec::with_capacity(checkpoints.len());
    let mut inserted = 0;

    for &checkpoint in checkpoints {
        for (index, key) in keys.iter().enumerate().take(checkpoint).skip(inserted) {
            put(map, key, index);
        }
        inserted = checkpoint;
        samples.push(Sample { keys: checkpoint, stats: map.load_stats() });
    }

    samples
}

fn draw_chart(
    path: &Path,
    caption: &str,
    y_desc: &str,
    x_labels: &[String],
    series: &[Vec<f64>],
) -> Result<(), Box<dyn Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
    ];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = series.iter().flat_map(|v| v.iter()).fold(0.0_f64, |max, &x| max.max(x)) * 1.1; // Add 10% margin
    let last_index = x_labels.len().saturating_sub(1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(10)
        .build_cartesian_2d(0..last_index, 0.0..max_y.max(f64::EPSILON))?;

    chart
        .configure_mesh()
        .x_labels(x_labels.len())
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (method_idx, (&method, values)) in METHODS.iter().zip(series).enumerate() {
        let color = colors.get(method_idx).copied().unwrap_or(BLACK);
        let line_style = ShapeStyle::from(&color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(i, &value)| (i, value)),
                line_style,
            ))?
            .label(method)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            values
                .iter()
                .enumerate()
                .map(|(i, &value)| Circle::new((i, value), marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    log::info!("wrote {}", path.display());

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_default_env().init();

    let args = Args::parse();
    if args.steps == 0 || args.keys < args.steps {
        return Err("--steps must be between 1 and --keys".into());
    }

    let hash_function: HashFunction = if args.hash == 1 { hash_function_1 } else { hash_function_2 };
    let mut rng = args.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Generate the keys once so both strategies see the same input
    let keys = random_keys(&mut rng, args.keys);
    let checkpoints = checkpoints(args.keys, args.steps);
    log::debug!("sampling at {checkpoints:?}");

    let mut probing = ProbingHashMap::new(args.capacity, hash_function);
    let mut chaining = ChainingHashMap::new(args.capacity, hash_function);

    let results = [
        sample(&mut probing, &keys, &checkpoints, |map, key, value| {
            map.put(key, value);
        }),
        sample(&mut chaining, &keys, &checkpoints, |map, key, value| {
            map.put(key, value);
        }),
    ];

    for (method, samples) in METHODS.iter().zip(&results) {
        println!("{method}");
        for Sample { keys, stats } in samples {
            println!(
                "  {keys:>8} keys: size = {}, capacity = {}, load = {:.2}, empty buckets = {}",
                stats.size, stats.capacity, stats.load, stats.empty_buckets
            );
        }
    }

    fs::create_dir_all(&args.out_dir)?;
    let x_labels: Vec<String> = checkpoints.iter().map(ToString::to_string).collect();

    let load: Vec<Vec<f64>> =
        results.iter().map(|samples| samples.iter().map(|s| s.stats.load).collect()).collect();
    draw_chart(
        &args.out_dir.join("table_load.png"),
        "Load Factor as Keys Are Inserted",
        "Load Factor (size / capacity)",
        &x_labels,
        &load,
    )?;

    let empty_ratio: Vec<Vec<f64>> = results
        .iter()
        .map(|samples| {
            samples
                .iter()
                .map(|s| s.stats.empty_buckets as f64 / s.stats.capacity as f64)
                .collect()
        })
        .collect();
    draw_chart(
        &args.out_dir.join("empty_buckets.png"),
        "Share of Empty Buckets",
        "Empty Buckets / Capacity",
        &x_labels,
        &empty_ratio,
    )?;

    println!("Generated plot images: table_load.png, empty_buckets.png");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoints() {
        assert_eq!(checkpoints(1_000, 4), vec![250, 500, 750, 1_000]);
        assert_eq!(checkpoints(10, 3), vec![3, 6, 10]);
    }

    #[test]
    fn test_random_keys_are_reproducible() {
        let first = random_keys(&mut StdRng::seed_from_u64(7), 5);
        let second = random_keys(&mut StdRng::seed_from_u64(7), 5);

        assert_eq!(first, second);
        assert!(first.iter().all(|key| key.len() == KEY_LENGTH));
    }

    #[test]
    fn test_sample_counts_every_key() {
        let keys: Vec<String> = (0..100).map(|i| format!("key{i}")).collect();
        let mut map = ChainingHashMap::new(11, hash_function_1);
        let samples = sample(&mut map, &keys, &checkpoints(100, 4), |map, key, value| {
            map.put(key, value);
        });

        let sizes: Vec<usize> = samples.iter().map(|s| s.stats.size).collect();
        assert_eq!(sizes, vec![25, 50, 75, 100]);
        assert_eq!(samples.last().map(|s| s.keys), Some(100));
    }
}
