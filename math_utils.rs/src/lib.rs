pub mod discrete_interval;
pub mod parity;
pub mod quadrature;
pub mod range;
pub mod stats;
