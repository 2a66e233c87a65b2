use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("empty document: no snippets to evaluate for {dimension}")]
    EmptyDocument { dimension: String },

    #[error("invalid field: {0}")]
    InvalidField(String),

    #[error("weight for {metric} must be a finite non-negative number (found {weight})")]
    InvalidWeight { metric: String, weight: f64 },

    #[error("weights must sum to 1 (found {sum:.6})")]
    WeightSum { sum: f64 },

    #[error("scores and weights have different metrics (missing weights: [{}], unexpected weights: [{}])", missing.join(", "), unexpected.join(", "))]
    KeyMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("libraries do not share a product: {}", .0.join(", "))]
    ProductMismatch(Vec<String>),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvalError>;
