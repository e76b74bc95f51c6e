/// Answer assembly errors.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("no template bundle for framework '{framework}'")]
    UnknownFramework { framework: String },
}
