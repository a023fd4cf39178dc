/// Checks a config value after it has been parsed and before it is saved.
/// The error message ends up inside [`super::ConfigError::Invalid`].
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
