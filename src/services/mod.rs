pub mod console;
pub mod pipeline;
pub mod server;
