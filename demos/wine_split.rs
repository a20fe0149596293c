use lambdata::data::{Column, DataFrame};
use lambdata::utils::enlarge;
use lambdata::{DatasetSplitter, SplitOptions};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Synthetic stand-in for the UCI wine data: three classes with shifted
/// `ash` and `hue` means.
fn generate_wine_data(size: usize, seed: u64) -> Result<DataFrame, Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let ash_means = [2.46, 2.24, 2.44];
    let hue_means = [1.06, 1.06, 0.68];

    let mut ash = Vec::with_capacity(size);
    let mut hue = Vec::with_capacity(size);
    let mut target = Vec::with_capacity(size);
    for _ in 0..size {
        let class = rng.gen_range(0..3usize);
        ash.push(Normal::new(ash_means[class], 0.25)?.sample(&mut rng));
        hue.push(Normal::new(hue_means[class], 0.2)?.sample(&mut rng));
        target.push(class as f64);
    }

    Ok(DataFrame::new(vec![
        ("ash", Column::numeric(ash)),
        ("hue", Column::numeric(hue)),
        ("target", Column::numeric(target)),
    ])?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("enlarge(3) = {}", enlarge(3));

    let df = generate_wine_data(178, 21354)?;
    info!("Generated {} rows", df.n_rows());

    let splitter = DatasetSplitter::new(df, &["ash", "hue"], "target")?;
    let (x_train, x_val, x_test, _y_train, _y_val, _y_test) = splitter
        .split_three_way(SplitOptions::default())?
        .into_tuple();
    splitter.print_split_summary(&x_train, &x_val, &x_test)?;

    Ok(())
}
