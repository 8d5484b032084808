use delta_v_telemetry::*;
use log::{error, info};
use rand::Rng;

fn engine(stage: i32, thrust: f64, vacuum_thrust: f64, isp: f64, vacuum_isp: f64) -> EngineReading {
    EngineReading {
        stage,
        max_thrust: thrust,
        max_vacuum_thrust: vacuum_thrust,
        specific_impulse_at: isp,
        vacuum_specific_impulse: vacuum_isp,
        propellants: vec![
            PropellantReading {
                name: "LiquidFuel".to_string(),
                total_resource_available: 0.0,
            },
            PropellantReading {
                name: "Oxidizer".to_string(),
                total_resource_available: 0.0,
            },
        ],
    }
}

fn part(tag: &str, mass: f64) -> PartReading {
    PartReading {
        tag: tag.to_string(),
        mass,
    }
}

fn fill(reading: &mut EngineReading, propellant_mass: f64) {
    reading.propellants[0].total_resource_available = propellant_mass * 0.45;
    reading.propellants[1].total_resource_available = propellant_mass * 0.55;
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => TelemetryConfig::default(),
    };
    info!("Using reference gravity {} m/s²", config.reference_gravity);

    let mut first_stage_propellant: f64 = 120_000.0;
    let second_stage_propellant: f64 = 28_000.0;
    let first_stage_burn_rate = 500.0; // kg/s

    let mut rng = rand::thread_rng();
    let mut telemetry = Telemetry::new();
    let mut last_report = DeltaVReport::default();

    for poll in 0..POLL_COUNT {
        let mut first_engine = engine(1, 2_200_000.0, 2_450_000.0, 282.0, 311.0);
        let mut second_engine = engine(0, 150_000.0, 180_000.0, 310.0, 345.0);
        fill(&mut first_engine, first_stage_propellant);
        fill(&mut second_engine, second_stage_propellant);

        let frame = TelemetryFrame {
            parts: vec![
                part(PAYLOAD_GROUP, 2_000.0),
                part(FIRST_STAGE_GROUP, 15_000.0 + first_stage_propellant),
                part(SECOND_STAGE_GROUP, 4_500.0 + second_stage_propellant),
                part("launch_clamp", 1_800.0),
            ],
            engines: vec![first_engine, second_engine],
        };

        match delta_v_status(&frame, &config) {
            Ok(report) => {
                telemetry.collect_data(&report, POLL_INTERVAL);
                last_report = report;
            }
            Err(e) => {
                error!("Poll {} failed: {}", poll, e);
                break;
            }
        }

        let jitter = rng.gen_range(0.9..1.1);
        let burned = first_stage_burn_rate * POLL_INTERVAL * jitter;
        first_stage_propellant = (first_stage_propellant - burned).max(0.0);
    }

    telemetry.display_data();
    println!("\n--- Last Report ---\n{}", last_report.to_json()?);

    Ok(())
}
