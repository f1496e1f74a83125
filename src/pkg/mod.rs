pub mod conf;
pub mod ids;
pub mod server;
pub mod telemetry;
