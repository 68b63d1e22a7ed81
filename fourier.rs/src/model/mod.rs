mod discrete;
pub use discrete::*;

mod wave_packet;
pub use wave_packet::*;
