// Domain layer: the swim capability and the two swimmers. No I/O beyond the Write handle.

pub mod model;
pub mod ports;
