use std::path::PathBuf;

use ndarray::Array3;
use rand::prelude::*;
use tracing_subscriber::EnvFilter;

use tensorboard_logger as tl;

fn main() -> tl::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let logdir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            eprintln!("fatal: specify LOGDIR as first argument");
            std::process::exit(1);
        });

    let mut logger = tl::Logger::with_config(
        &logdir,
        tl::LoggerConfig::new().default_bins(30),
        None,
    )?;

    const STEPS: i64 = 50;
    for step in 0..STEPS {
        // get your values from somewhere... here, we just make them up
        let loss = 10.0 / (step + 1) as f32;
        let weights_layer1 = normal(10_000, step as f64, 10.0 / (step as f64 + 1.0).sqrt());
        let weights_final = normal(10_000, 3.0, 10.0);

        logger.log_scalar("loss", loss, step)?;
        logger.log_histogram("weights/layer1", &weights_layer1, step)?;
        logger.log_histogram("weights/final", &weights_final, step)?;

        if step % 10 == 0 {
            let fade = step as f32 / STEPS as f32;
            let frames: Vec<Array3<f32>> = (0..2)
                .map(|i| {
                    Array3::from_shape_fn((32, 32, 3), |(y, x, c)| match c {
                        0 => x as f32 / 31.0,
                        1 => y as f32 / 31.0,
                        _ => (fade + i as f32 * 0.5) % 1.0,
                    })
                })
                .collect();
            logger.log_images("frames", &frames, step)?;
        }
    }
    logger.flush()?;

    println!("wrote {} steps to {}", STEPS, logger.path().display());

    Ok(())
}

fn normal(n: usize, mu: f64, sigma: f64) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let dist = rand_distr::Normal::new(mu, sigma).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}
