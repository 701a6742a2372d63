//! Headless Triangberg demo: grows the default drawing and logs its shapes.
//!
//! Usage:
//! ```text
//! cargo run --example grow
//! RUST_LOG=triangberg=trace cargo run --example grow
//! ```

use triangberg::{Drawing, DrawingParams, LastCandidate};

const MAX_STEPS: usize = 1_000;

fn main() -> triangberg::Result<()> {
    // Default: WARN for everything, INFO for triangberg and this demo.
    // Override with RUST_LOG env var (e.g. RUST_LOG=triangberg=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("grow=info".parse().unwrap_or_default())
        .add_directive("triangberg=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut drawing = Drawing::new(DrawingParams::default())?;
    let steps = drawing.grow_to_completion(&mut LastCandidate, MAX_STEPS)?;
    tracing::info!(steps, complete = drawing.is_complete(), "growth stopped");

    for (serial, [a, b, c]) in drawing.shapes()?.triangles.iter().enumerate() {
        tracing::info!(
            serial,
            "({:.2}, {:.2}) ({:.2}, {:.2}) ({:.2}, {:.2})",
            a.x,
            a.y,
            b.x,
            b.y,
            c.x,
            c.y
        );
    }
    Ok(())
}
