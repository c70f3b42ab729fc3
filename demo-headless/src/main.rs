use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rhai::Dynamic;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vehicle_control_core::{
    MapLookupConfig, OpenDrive, Rendered, Vector2D, Vector3D, VehicleControl,
    VehiclePhysicsControl, WalkerControl, WheelPhysicsControl,
};
use vehicle_control_script::{create_engine_with, BindingError, EngineConfig};

/// Script run when neither `--script` nor `--eval` is given.
const DEMO_SCRIPT: &str = r"
let physics = VehiclePhysicsControl(#{
    torque_curve: [[0, 400], Vector2D(1890, 500), [5730, 400]],
    max_rpm: 5730,
    mass: 1845,
    steering_curve: [[0, 1], [20, 0.9], [60, 0.8], [120, 0.7]]
});

let wheels = [];
for i in 0..4 {
    let wheel = WheelPhysicsControl(#{ tire_friction: 3.5 });
    if i >= 2 {
        wheel.steer_angle = 0;
        wheel.disable_steering = true;
    }
    wheels.push(wheel);
}
physics.wheels = wheels;
print(physics);

print(VehicleControl(#{ throttle: 0.5, gear: 1 }));
print(WalkerControl([Vector3D(0, 1, 0), 1.4]));

physics == VehiclePhysicsControl()
";

/// Headless runner for vehicle control scripts
#[derive(Parser, Debug)]
#[command(name = "vehicle-control-demo")]
#[command(about = "Evaluate vehicle control scripts and resolve OpenDrive maps", long_about = None)]
struct Args {
    /// Script file to evaluate
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Inline script to evaluate (after --script, if both are given)
    #[arg(short, long)]
    eval: Option<String>,

    /// Resolve and load the OpenDrive file of this map
    #[arg(short, long)]
    map: Option<String>,

    /// Directory searched for OpenDrive files
    #[arg(long, default_value = "Content")]
    content_dir: PathBuf,

    /// Maximum script operations per evaluation (0 = unlimited)
    #[arg(long, default_value_t = EngineConfig::default().max_operations)]
    max_operations: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let engine = create_engine_with(&EngineConfig {
        max_operations: args.max_operations,
        ..Default::default()
    });

    let mut scripts: Vec<(String, String)> = Vec::new();
    if let Some(path) = &args.script {
        match fs::read_to_string(path) {
            Ok(source) => scripts.push((path.display().to_string(), source)),
            Err(err) => {
                error!("Cannot read script {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        }
    }
    if let Some(source) = &args.eval {
        scripts.push(("--eval".to_owned(), source.clone()));
    }
    if scripts.is_empty() && args.map.is_none() {
        scripts.push(("demo".to_owned(), DEMO_SCRIPT.to_owned()));
    }

    let mut status = ExitCode::SUCCESS;
    for (name, source) in &scripts {
        info!("Evaluating {}", name);
        match engine.eval::<Dynamic>(source) {
            Ok(value) if value.is_unit() => {}
            Ok(value) => println!("=> {}", render_value(value)),
            Err(err) => {
                match BindingError::from_eval_error(&err) {
                    Some(binding) => error!("{}: {} ({})", name, binding, err.position()),
                    None => error!("{}: {}", name, err),
                }
                status = ExitCode::FAILURE;
            }
        }
    }

    if let Some(map) = &args.map {
        let lookup = OpenDrive::new(MapLookupConfig {
            content_dir: args.content_dir.clone(),
            ..Default::default()
        });
        match lookup.find_path_to_xodr(map) {
            Some(path) => {
                let xml = lookup.load(map);
                println!("{} -> {} ({} bytes)", map, path.display(), xml.len());
            }
            None => {
                println!("{} -> no OpenDrive file below {}", map, args.content_dir.display());
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}

/// Canonical text of a script result, falling back to the script's own formatting.
fn render_value(value: Dynamic) -> String {
    if let Some(physics) = value.clone().try_cast::<VehiclePhysicsControl>() {
        return physics.to_string();
    }
    if let Some(wheel) = value.clone().try_cast::<WheelPhysicsControl>() {
        return wheel.to_string();
    }
    if let Some(control) = value.clone().try_cast::<VehicleControl>() {
        return control.to_string();
    }
    if let Some(walker) = value.clone().try_cast::<WalkerControl>() {
        return walker.to_string();
    }
    if let Some(v) = value.clone().try_cast::<Vector2D>() {
        return Rendered(&v).to_string();
    }
    if let Some(v) = value.clone().try_cast::<Vector3D>() {
        return Rendered(&v).to_string();
    }
    value.to_string()
}
