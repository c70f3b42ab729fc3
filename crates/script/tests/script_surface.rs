//! Properties, operators and rendering as seen from scripts.
use approx::assert_relative_eq;
use rhai::{Dynamic, FLOAT, INT};
use tracing_subscriber::EnvFilter;
use vehicle_control_core::{VehiclePhysicsControl, WheelPhysicsControl, WheelPosition};
use vehicle_control_script::{create_engine, create_engine_with, BindingError, EngineConfig};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_float_properties_widen_exactly() {
    let engine = create_engine();
    let damping: FLOAT = engine
        .eval("VehiclePhysicsControl().damping_rate_full_throttle")
        .unwrap();
    assert_relative_eq!(damping, 0.15, epsilon = 1e-6);

    let drag: FLOAT = engine
        .eval("let p = VehiclePhysicsControl(); p.drag_coefficient = 0.31; p.drag_coefficient")
        .unwrap();
    assert_relative_eq!(drag, 0.31, epsilon = 1e-6);
    assert_eq!(drag, FLOAT::from(0.31_f32));
}

#[test]
fn test_wheel_equality() {
    let engine = create_engine();
    assert!(engine
        .eval::<bool>("WheelPhysicsControl() == WheelPhysicsControl()")
        .unwrap());
    assert!(engine
        .eval::<bool>("WheelPhysicsControl(#{ tire_friction: 2.5 }) != WheelPhysicsControl()")
        .unwrap());
    assert!(!engine
        .eval::<bool>(
            "let w = WheelPhysicsControl(); w.disable_steering = true; w == WheelPhysicsControl()"
        )
        .unwrap());
}

#[test]
fn test_rendering_in_scripts() {
    let engine = create_engine();
    let wheel: String = engine.eval("`${WheelPhysicsControl()}`").unwrap();
    assert_eq!(
        wheel,
        "WheelPhysicsControl(tire_friction=2, damping_rate=0.25, steer_angle=70, disable_steering=False)"
    );

    let walker: String = engine.eval("WalkerControl().to_string()").unwrap();
    assert_eq!(
        walker,
        "WalkerControl(direction=Vector3D(x=1, y=0, z=0), speed=0, jump=False)"
    );

    let point: String = engine.eval("Vector2D(1, 2.5).to_debug()").unwrap();
    assert_eq!(point, "Vector2D(x=1, y=2.5)");
}

#[test]
fn test_wheel_order_preserved() {
    let engine = create_engine();
    let physics: VehiclePhysicsControl = engine
        .eval(
            r"
            let wheels = [];
            for friction in [1.0, 2.0, 3.0, 4.0] {
                wheels.push(WheelPhysicsControl(#{ tire_friction: friction }));
            }
            let p = VehiclePhysicsControl();
            p.wheels = wheels;
            p
            ",
        )
        .unwrap();

    let frictions: Vec<f32> = physics.wheels.iter().map(|w| w.tire_friction).collect();
    assert_eq!(frictions, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(
        physics.wheel(WheelPosition::RearRight),
        Some(&WheelPhysicsControl::new(4.0, 0.25, 70.0, false))
    );

    let rear_left: FLOAT = engine
        .eval("let p = VehiclePhysicsControl(); p.wheels = [WheelPhysicsControl(), WheelPhysicsControl(), WheelPhysicsControl([9])]; p.wheels[2].tire_friction")
        .unwrap();
    assert_eq!(rear_left, 9.0);
}

#[test]
fn test_collection_getters_copy_out() {
    let engine = create_engine();
    let len: INT = engine
        .eval(
            r"
            let p = VehiclePhysicsControl();
            let wheels = p.wheels;
            wheels.push(WheelPhysicsControl());
            let curve = p.torque_curve;
            curve.clear();
            p.wheels.len() + p.torque_curve.len()
            ",
        )
        .unwrap();
    assert_eq!(len, 2);

    let rpm: FLOAT = engine
        .eval("VehiclePhysicsControl().torque_curve[1].x")
        .unwrap();
    assert_eq!(rpm, 5000.0);
}

#[test]
fn test_vector_properties() {
    let engine = create_engine();
    let z: FLOAT = engine
        .eval("let v = Vector3D(1, 2, 3); v.z = 4; v.z + v.x")
        .unwrap();
    assert_eq!(z, 5.0);

    let err = engine
        .eval::<Dynamic>(r#"let v = Vector2D(); v.y = "up";"#)
        .unwrap_err();
    assert!(BindingError::from_eval_error(&err).is_some());
}

#[test]
fn test_operation_limit() {
    let engine = create_engine_with(&EngineConfig {
        max_operations: 1_000,
        ..Default::default()
    });
    let err = engine.eval::<Dynamic>("loop { VehicleControl(); }").unwrap_err();
    assert!(BindingError::from_eval_error(&err).is_none());
}
