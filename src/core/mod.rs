pub mod clip;
pub mod primitives;
pub mod range;
pub mod scale;
pub mod ticks;
pub mod types;

pub use clip::{ClipRun, SegmentClipper};
pub use primitives::format_tic_label;
pub use range::{bounding_range, column_extent, reframe_axis};
pub use scale::CoordinateMapper;
pub use ticks::{Tic, TicLayout, generate_tics};
pub use types::{AxisOrientation, AxisSide, DataPoint, DataRange, OutputPoint, Viewport};
