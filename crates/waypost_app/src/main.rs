mod app;
mod effects;
mod render;

use waypost_logging::LogDestination;

fn main() -> anyhow::Result<()> {
    waypost_logging::initialize(LogDestination::File);
    app::run()
}
