pub mod cli;
pub mod config;
pub mod ctx;
pub mod io;
pub mod model;
pub mod pipeline;
pub mod schema;
pub mod scores;
pub mod symptoms;
pub mod upload;
