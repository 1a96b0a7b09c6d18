use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("layer count mismatch: expected {expected}, got {actual}")]
    LayerCountMismatch { expected: usize, actual: usize },

    #[error("legend count mismatch: {legends} legends for {layers} layers")]
    LegendCountMismatch { legends: usize, layers: usize },

    #[error("ragged layers: layer {layer} has {actual} points, expected {expected}")]
    RaggedLayers {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    #[error("operation `{operation}` is not available in {mode} playback mode")]
    ModeMismatch {
        operation: &'static str,
        mode: &'static str,
    },

    #[error("unknown legend id `{0}`")]
    UnknownLegend(String),
}
