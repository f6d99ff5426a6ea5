// CLI subcommands, one module per API resource

pub mod business;
pub mod knowledge;
pub mod models;
pub mod presets;
pub mod relations;
pub mod routes;
pub mod sessions;
