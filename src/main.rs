use std::path::{Path, PathBuf};

use clinttools_engine::{
    audio::{BufferSource, ResamplerLinear, StereoPair},
    common::{self, AnyResult},
    configs::Config,
    project::{self, ProjectHooks},
};
use tracing::{error, info, warn};

/// Hooks for running the engine without the editors attached.
struct HeadlessHooks;

impl ProjectHooks for HeadlessHooks {
    fn load_audio_pool(&mut self, pool_file: &Path, audio_folder: &Path) -> AnyResult<()> {
        info!(
            "Audio pool index at {} (audio folder {})",
            pool_file.display(),
            audio_folder.display()
        );
        Ok(())
    }

    fn open_wave_editor(&mut self) -> AnyResult<()> {
        Ok(())
    }

    fn open_daw(&mut self, first_load: bool) -> AnyResult<()> {
        info!(first_load, "DAW project ready");
        Ok(())
    }
}

/// One second of a 440 Hz sine at `rate`.
fn test_tone(rate: u32) -> Vec<StereoPair> {
    (0..rate)
        .map(|i| {
            let t = i as f32 / rate as f32;
            StereoPair::mono((t * 440.0 * std::f32::consts::TAU).sin() * 0.5)
        })
        .collect()
}

fn main() -> AnyResult<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}, using defaults", e);
            Config::default()
        }
    };

    common::logger::init(&config);
    info!(
        commit = option_env!("GIT_COMMIT").unwrap_or("unknown"),
        "Starting clinttools-engine"
    );

    let engine = &config.engine;
    engine.validate()?;

    let folder: Option<PathBuf> = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.project.folder.clone());

    match folder {
        Some(folder) => {
            if let Err(e) =
                project::open_project(&folder, config.project.first_load, &mut HeadlessHooks)
            {
                error!("{}", e);
                std::process::exit(e.exit_code());
            }
        }
        None => warn!("No project folder configured, rendering test tone only"),
    }

    let tone = test_tone(engine.internal_rate);
    let mut source = BufferSource::new(&tone, engine.end_of_stream);
    let mut resampler =
        ResamplerLinear::new(engine.internal_rate, engine.target_rate, &mut source)?;

    let mut block = vec![0.0f32; 2 * 512];
    let frames = resampler.process_interleaved(&mut (), &mut block)?;
    info!(
        frames,
        internal_rate = resampler.internal_rate(),
        target_rate = resampler.target_rate(),
        step = resampler.step(),
        "Rendered test block"
    );

    Ok(())
}
