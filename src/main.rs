//! Demo binary: a sphere rolling over flat ground under scripted input.

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use glam::{Vec2, Vec3};
use log::info;
use sphere_controller::{
    init_logging, ControllerConfig, FlatGroundBody, InputSample, InputSource, MoveDeltaMode,
    ScriptedInput, SphereController, SteeringMode, TickOutcome, DEFAULT_TICK_HZ,
};

/// Rolls a sphere over flat ground with scripted stick input
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// TOML file with controller tunables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of fixed steps to simulate
    #[arg(short, long, default_value_t = 200)]
    ticks: usize,

    /// Fixed steps per second
    #[arg(long, default_value_t = DEFAULT_TICK_HZ)]
    hz: f32,

    /// Steering policy, overriding the config file
    #[arg(long, value_enum)]
    steering: Option<SteeringArg>,

    /// Hand the displacement to the body without subtracting its position
    #[arg(long)]
    displacement_only: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SteeringArg {
    World,
    Facing,
}

impl From<SteeringArg> for SteeringMode {
    fn from(arg: SteeringArg) -> Self {
        match arg {
            SteeringArg::World => Self::WorldRelative,
            SteeringArg::Facing => Self::FacingRelative,
        }
    }
}

fn load_config(args: &Args) -> Result<ControllerConfig> {
    let mut config = match &args.config {
        Some(path) => ControllerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ControllerConfig::default(),
    };
    if let Some(steering) = args.steering {
        config = config.with_steering(steering.into());
    }
    if args.displacement_only {
        config = config.with_move_delta(MoveDeltaMode::Displacement);
    }
    Ok(config)
}

/// Push forward, hop, curve right, then drop the device for a while.
fn demo_script(ticks: usize) -> ScriptedInput {
    let quarter = ticks / 4;
    let forward = InputSample::moving(Vec2::Y);
    let mut script = ScriptedInput::default();
    script.push_repeated(Some(forward), quarter);
    script.push_repeated(Some(forward.with_jump(true)), 1);
    script.push_repeated(
        Some(InputSample::moving(Vec2::new(0.7, 0.7)).with_steering(Vec2::X)),
        quarter,
    );
    script.push_repeated(None, quarter);
    let rest = ticks.saturating_sub(script.remaining());
    script.push_repeated(Some(InputSample::default()), rest);
    script
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    ensure!(args.hz > 0.0, "--hz must be positive");

    let config = load_config(&args)?;
    let dt = 1.0 / args.hz;
    let mut controller = SphereController::new(config);
    let mut body = FlatGroundBody::new(Vec3::new(0.0, 0.5, 0.0), 0.5, 0.0, dt);
    let mut input = demo_script(args.ticks);
    let mut skipped = 0_usize;

    info!("simulating {} ticks at {} Hz with {config:?}", args.ticks, args.hz);
    for tick in 0..args.ticks {
        if let Some(normal) = body.take_contact() {
            controller.record_contact(normal);
        }
        let sample = input.sample();
        match controller.tick(&mut body, sample.as_ref(), dt) {
            TickOutcome::Skipped => skipped += 1,
            TickOutcome::Applied(report) => info!(
                "tick {tick}: position {:?} velocity {:?} accel {:?} yaw {:.1}",
                body.world_position(),
                report.integration.next_velocity,
                report.acceleration,
                body.yaw_degrees(),
            ),
        }
    }
    info!(
        "finished at {:?} after {skipped} skipped ticks",
        body.world_position()
    );
    Ok(())
}
