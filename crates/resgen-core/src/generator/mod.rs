pub mod emit;
pub mod manifest;
pub mod partition;
pub mod pipeline;
pub mod writer;
