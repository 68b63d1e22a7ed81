//! Data sets consumed by the renderers.
//!
//! Charts never decide when to recompute: the owning model calls `update` once per
//! batch of input changes, and every update increments the chart's `revision`.

mod harmonics_chart;
pub use harmonics_chart::*;

mod sum_chart;
pub use sum_chart::*;

mod components_chart;
pub use components_chart::*;

mod wave_packet_sum_chart;
pub use wave_packet_sum_chart::*;

mod amplitudes_chart;
pub use amplitudes_chart::*;
