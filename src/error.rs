use thiserror::Error;

/// Failure of a single render call. Other contexts in the same frame are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("render target {idx} does not exist ({count} live targets)")]
    InvalidTarget { idx: u32, count: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config declares no render targets")]
    NoTargets,

    #[error("render target '{label}' has zero width or height")]
    ZeroSizedTarget { label: String },

    #[error("render target '{label}' is {width}x{height}, above the {max} pixel limit", max = crate::config::MAX_TARGET_DIMENSION)]
    TargetTooLarge { label: String, width: u32, height: u32 },
}
