// Domain layer: livery records and ports (interfaces). No knowledge of the
// simulator SDK, the filesystem, or the CLI.

pub mod model;
pub mod ports;
