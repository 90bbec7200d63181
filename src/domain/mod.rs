pub mod boundary;
pub mod region;

pub use boundary::PointSequence;
pub use region::Region;
