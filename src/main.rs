use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wave_view::{try_decode, Result};

fn run(path: &str) -> Result<()> {
    let bytes = std::fs::read(path)?;
    let info = try_decode(&bytes)?;

    println!("channels:    {}", info.num_channels);
    println!("frames:      {}", info.num_samples);
    println!("rate:        {} Hz", info.sampling_rate);
    println!("format:      {:?}", info.sample_format);
    println!("frame bytes: {}", info.frame_len());
    println!("data bytes:  {}", info.data.len());
    println!("duration:    {:.3} s", info.duration().as_secs_f64());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wave_view=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: wave-view <file.wav>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{path}: {err}");
            ExitCode::FAILURE
        }
    }
}
