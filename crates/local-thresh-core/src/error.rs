/// Errors surfaced by the thresholding engine.
///
/// Every variant except [`ThresholdError::Cancelled`] reports a programmer
/// or configuration error; none of them is retryable. A failed call never
/// produces a partial output raster.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    #[error("invalid raster: width={width}, height={height}, buffer length {len}")]
    InvalidInput {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("unsupported thresholding method `{0}`")]
    UnsupportedMethod(String),

    #[error("thresholding cancelled by caller")]
    Cancelled,
}
