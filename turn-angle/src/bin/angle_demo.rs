//! Angle demonstration binary
//!
//! Prints the degree and radian readings of a half turn.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin angle_demo --features demo
//! RUST_LOG=debug cargo run --bin angle_demo --features demo
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use turn_angle::Angle;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let half = Angle::try_from_degrees(180.0)?;
    info!(raw = half.raw(), "built half turn");

    println!("180.0 deg is: {} deg", half.to_degrees::<f64>());
    println!("180.0 deg is: {} rad", half.to_radians::<f64>());

    // The modulus contract, shown through the fallible form.
    let a = Angle::try_from_degrees(120.0)?;
    println!("120 deg % 90 deg = {}", a.try_rem(Angle::QUARTER_TURN)?);
    if let Err(err) = a.try_rem(Angle::try_from_degrees(50.0)?) {
        info!("120 deg % 50 deg rejected: {}", err);
    }

    Ok(())
}
