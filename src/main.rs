use solarsim::{render_ascii, Scenario, ScenarioConfig, Stopwatch, Viewport};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::{Path, PathBuf};

/// Headless driver: runs a scenario for a number of frames
#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, relative paths are looked up under `scenarios/`
    #[arg(short, long, default_value = "solar_system.yaml")]
    file_name: PathBuf,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 3650)]
    frames: usize,

    /// Real frames per second the stopwatch is fed with
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Multiplier on the scenario's time scale
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Write the final state to this file
    #[arg(long)]
    dump: Option<PathBuf>,

    /// Print an ASCII frame of the final state
    #[arg(long)]
    ascii: bool,

    /// Frame size for --ascii, in character cells
    #[arg(long, default_value_t = 60)]
    width: u32,

    #[arg(long, default_value_t = 30)]
    height: u32,
}

fn scenario_path(file_name: &Path) -> PathBuf {
    if file_name.is_absolute() || file_name.exists() {
        file_name.to_path_buf()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let path = scenario_path(&args.file_name);
    let cfg = ScenarioConfig::from_file(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let mut scenario = Scenario::build_scenario(&cfg)?;

    let mut stopwatch = Stopwatch::new(scenario.time_scale * args.speed)?;
    stopwatch.play();

    anyhow::ensure!(args.fps > 0.0, "--fps must be positive");
    let frame_dt = 1.0 / args.fps;

    for frame in 0..args.frames {
        stopwatch.update(frame_dt);
        scenario
            .simulation
            .step(stopwatch.tick())
            .with_context(|| format!("step failed at frame {frame}"))?;

        if frame % 100 == 0 {
            info!("{}", stopwatch.model_time_label());
        }
    }
    info!(
        "finished {} frames, {}, max separation {:e} m",
        args.frames,
        stopwatch.model_time_label(),
        scenario.simulation.max_pairwise_distance()
    );

    if args.ascii {
        let viewport = Viewport::new(f64::from(args.width), f64::from(args.height));
        let scale = viewport.fit_scale(scenario.simulation.max_pairwise_distance());
        print!("{}", render_ascii(scenario.simulation.bodies(), &viewport, scale));
        println!("{}", stopwatch.model_time_label());
    }

    if let Some(out) = &args.dump {
        scenario
            .to_config()
            .save_to_file(out)
            .with_context(|| format!("failed to dump state to {}", out.display()))?;
    }

    Ok(())
}
