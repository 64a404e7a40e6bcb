//! Default logger family: a scope-aware factory and the line-oriented
//! loggers it produces

pub mod factory;
pub mod logger;

pub use factory::{DefaultLoggerFactory, DefaultLoggerFactoryBuilder};
pub use logger::ScopedLogger;
