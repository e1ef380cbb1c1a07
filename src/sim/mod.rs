// Simulator-facing adapters. The real SDK connection lives behind the
// `LiverySource` port; these implementations cover the non-GUI workflows:
// a built-in sample set, a JSON dump of an enumeration, and a process
// presence poller.

pub mod json_file;
#[cfg(feature = "cli")]
pub mod poller;
pub mod sample;

pub use json_file::JsonFileSource;
pub use sample::SampleSource;
