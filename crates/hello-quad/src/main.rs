use anyhow::Result;
use hello_engine::geometry::Primitive;
use hello_engine::logging::{init_logging, LoggingConfig};
use hello_engine::sample::{run_sample, SampleConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("starting hello-quad");

    run_sample("Hello Quad", SampleConfig::new(Primitive::Quad))
}
