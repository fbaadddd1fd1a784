//! Music library access: resolving configured entries and finding tracks

pub mod collector;
pub mod extensions;
pub mod resolver;

pub use collector::Collector;
pub use extensions::Extensions;
pub use resolver::resolve;
