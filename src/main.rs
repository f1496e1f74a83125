mod cmd;
mod pkg;
mod prelude;

use pkg::conf::Settings;
use prelude::{Result, coded};

#[tokio::main]
async fn main() -> Result<()> {
    let loaded = Settings::load();
    let telemetry = pkg::telemetry::init_tracing(loaded.as_ref().ok())?;
    let settings = loaded.map_err(coded("ERR-SETTINGS"))?;
    let res = cmd::run(settings).await;
    telemetry.shutdown();
    res
}
