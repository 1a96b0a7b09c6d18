pub mod domain;
pub mod legend;
pub mod primitives;
pub mod scale;
pub mod scale_set;
pub mod series_store;
pub mod time_labels;
pub mod types;
pub mod view_window;
pub mod windowing;

pub use domain::{Domain, DomainTracker, Domains};
pub use legend::{AxisSide, ChartType, Legend, LegendParameters};
pub use scale::LinearScale;
pub use scale_set::{Orientation, ScaleSet};
pub use series_store::RawSeriesStore;
pub use time_labels::{Edge, TimeLabelTrack};
pub use types::{ChartGeometry, DataPoint, Layer, Margins};
pub use view_window::{ViewWindow, WindowContext, WindowUpdate};
pub use windowing::{WindowMove, WindowPositioner};
