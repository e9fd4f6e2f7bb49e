/*!
Reading a configuration from options.

Options take the form `--name=value`, and may be given as separate arguments or as whitespace separated options within a single argument.
For boolean options, `--name` is read as `--name=true` and `--no-name` as `--name=false`.

Each option may be given at most once, and values outside the bounds of an option are rejected.
Durations are read in (possibly fractional) seconds.
*/

use std::{collections::HashSet, str::FromStr};

use crate::{
    config::{Config, ConfigOption},
    types::err::ConfigError,
};

/// Reads `raw` to a value of `option`, within bounds, and returns the name of the option.
fn read_to<T: FromStr + Clone + PartialOrd>(
    option: &mut ConfigOption<T>,
    raw: &str,
) -> Result<&'static str, ConfigError> {
    match raw.parse::<T>() {
        Ok(value) => option.set(value, raw).map(|_| option.name),
        Err(_) => Err(ConfigError::InvalidValue {
            option: option.name,
            value: raw.to_string(),
        }),
    }
}

fn read_duration(
    option: &mut ConfigOption<std::time::Duration>,
    raw: &str,
) -> Result<&'static str, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        option: option.name,
        value: raw.to_string(),
    };
    let seconds = raw.parse::<f64>().map_err(|_| invalid())?;
    let duration = std::time::Duration::try_from_secs_f64(seconds).map_err(|_| invalid())?;
    option.set(duration, raw).map(|_| option.name)
}

impl Config {
    /// A configuration from defaults revised by the given options.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        let mut seen: HashSet<&'static str> = HashSet::default();

        for arg in args {
            for option in arg.as_ref().split_whitespace() {
                let name = config.apply_option(option)?;
                if !seen.insert(name) {
                    return Err(ConfigError::ConflictingOption(name));
                }
            }
        }

        Ok(config)
    }

    /// Applies a single option, returning the name of the option applied.
    fn apply_option(&mut self, option: &str) -> Result<&'static str, ConfigError> {
        let Some(body) = option.strip_prefix("--") else {
            return Err(ConfigError::UnknownOption(option.to_string()));
        };

        let (name, raw) = match body.split_once('=') {
            Some((name, raw)) => (name, raw),
            None => match body.strip_prefix("no-") {
                Some(name) => (name, "false"),
                None => (body, "true"),
            },
        };

        let applied = match name {
            "atom_bump" => read_to(&mut self.atom_db.bump, raw)?,
            "atom_decay" => read_to(&mut self.atom_db.decay, raw)?,
            "clause_bump" => read_to(&mut self.clause_db.bump, raw)?,
            "clause_decay" => read_to(&mut self.clause_db.decay, raw)?,
            "lbd_bound" => read_to(&mut self.clause_db.lbd_bound, raw)?,

            "amo_encoding" => read_to(&mut self.amo_encoding, raw)?,
            "amo_pairwise_limit" => read_to(&mut self.amo_pairwise_limit, raw)?,
            "conflict_limit" => read_to(&mut self.conflict_limit, raw)?,
            "luby_u" => read_to(&mut self.luby_u, raw)?,
            "minimization" => read_to(&mut self.minimization, raw)?,
            "phase_saving" => read_to(&mut self.phase_saving, raw)?,
            "polarity_lean" => read_to(&mut self.polarity_lean, raw)?,
            "random_decision_bias" => read_to(&mut self.random_decision_bias, raw)?,
            "reduction" => read_to(&mut self.reduction, raw)?,
            "reduction_interval" => read_to(&mut self.reduction_interval, raw)?,
            "restart" => read_to(&mut self.restart, raw)?,
            "seed" => read_to(&mut self.seed, raw)?,
            "time_limit" => read_duration(&mut self.time_limit, raw)?,
            "vsids" => read_to(&mut self.vsids_variant, raw)?,

            _ => return Err(ConfigError::UnknownOption(name.to_string())),
        };

        Ok(applied)
    }
}
