use crate::types::err::ConfigError;

/// A named configuration value, bounded by a minimum and a maximum.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if within bounds.
    ///
    /// `raw` is the value as given, for error reports.
    pub fn set(&mut self, value: T, raw: &str) -> Result<(), ConfigError> {
        if value < self.min || value > self.max {
            return Err(ConfigError::InvalidValue {
                option: self.name,
                value: raw.to_string(),
            });
        }
        self.value = value;
        Ok(())
    }
}
