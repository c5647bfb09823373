//! compare - score two WAV recordings against each other.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sonosim_similarity::{Backend, SimilarityCalculator, Waveform, MAX_DISTANCE};

/// Score two WAV recordings against each other.
#[derive(Parser, Debug)]
#[command(name = "compare")]
#[command(about = "Score two WAV recordings against each other")]
struct Args {
    /// Reference recording
    reference: PathBuf,

    /// Candidate recording
    candidate: PathBuf,

    /// Force the native-rate STFT fallback backend
    #[arg(long)]
    fallback: bool,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(false)
            .init();
    }

    let reference = load_wav(&args.reference)?;
    let candidate = load_wav(&args.candidate)?;

    let calc = if args.fallback {
        SimilarityCalculator::with_backend(Backend::Stft)
    } else {
        SimilarityCalculator::new()
    };
    tracing::debug!(backend = %calc.backend(), "comparing recordings");

    let cosine = calc.spectral_cosine(&reference, &candidate);
    let dtw = calc.cepstral_dtw(&reference, &candidate);
    let raw = calc.raw_segment_distance(&reference, &candidate);

    println!("spectral cosine similarity: {cosine:.4}");
    println!("cepstral dtw similarity:    {dtw:.4}");
    if raw == MAX_DISTANCE {
        println!("raw segment distance:       inf (no meaningful comparison)");
    } else {
        println!("raw segment distance:       {raw:.4}");
    }

    Ok(())
}

fn load_wav(path: &PathBuf) -> Result<Waveform> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let wave = sonosim_audio::wav::decode(std::io::BufReader::new(file))
        .with_context(|| format!("decoding {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        sample_rate = wave.sample_rate(),
        samples = wave.len(),
        "loaded recording"
    );
    Ok(wave)
}
