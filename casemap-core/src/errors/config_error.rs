/// Configuration errors, raised at load time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A threshold was configured outside its documented scale.
    #[error("{name} = {value} is outside its scale [{min}, {max}]")]
    ThresholdOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
