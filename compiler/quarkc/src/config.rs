//! Options for `quark run`.

use std::time::Duration;

use quark_eval::ExecLimits;

use crate::CliError;

/// Parsed `run` arguments: the file plus execution limits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub path: String,
    pub limits: ExecLimits,
}

impl RunConfig {
    /// Parse the arguments following `run`.
    ///
    /// Flags may appear before or after the path. Unknown flags are errors.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut path = None;
        let mut limits = ExecLimits::default();

        for arg in args {
            if let Some(value) = arg.strip_prefix("--max-steps=") {
                limits.max_steps = Some(parse_number("--max-steps", value)?);
            } else if let Some(value) = arg.strip_prefix("--timeout-ms=") {
                let millis = parse_number("--timeout-ms", value)?;
                limits.timeout = Some(Duration::from_millis(millis));
            } else if let Some(value) = arg.strip_prefix("--heap-limit=") {
                let slots = parse_number("--heap-limit", value)?;
                limits.heap_limit = usize::try_from(slots).map_err(|_| CliError::InvalidFlag {
                    flag: "--heap-limit".into(),
                    value: value.into(),
                })?;
            } else if arg.starts_with('-') {
                return Err(CliError::Usage(format!("unknown option '{arg}'")));
            } else if path.is_none() {
                path = Some(arg.clone());
            } else {
                return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
            }
        }

        let Some(path) = path else {
            return Err(CliError::Usage("missing file path".into()));
        };
        Ok(RunConfig { path, limits })
    }
}

fn parse_number(flag: &str, value: &str) -> Result<u64, CliError> {
    value.parse().map_err(|_| CliError::InvalidFlag {
        flag: flag.into(),
        value: value.into(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap for brevity")]
mod tests {
    use super::*;
    use quark_eval::DEFAULT_HEAP_LIMIT;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn path_only_uses_default_limits() {
        let config = RunConfig::parse(&args(&["prog.qk"])).unwrap();
        assert_eq!(config.path, "prog.qk");
        assert_eq!(config.limits, ExecLimits::default());
    }

    #[test]
    fn flags_in_any_position() {
        let config = RunConfig::parse(&args(&[
            "--max-steps=10",
            "prog.qk",
            "--timeout-ms=250",
            "--heap-limit=64",
        ]))
        .unwrap();
        assert_eq!(config.limits.max_steps, Some(10));
        assert_eq!(config.limits.timeout, Some(Duration::from_millis(250)));
        assert_eq!(config.limits.heap_limit, 64);
    }

    #[test]
    fn bad_number_names_the_flag() {
        let err = RunConfig::parse(&args(&["a.qk", "--max-steps=lots"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value 'lots' for --max-steps");
    }

    #[test]
    fn missing_path_is_usage_error() {
        let err = RunConfig::parse(&args(&["--timeout-ms=5"])).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(RunConfig::parse(&args(&["a.qk", "--fast"])).is_err());
    }

    #[test]
    fn default_heap_limit_is_kept_without_flag() {
        let config = RunConfig::parse(&args(&["a.qk", "--max-steps=1"])).unwrap();
        assert_eq!(config.limits.heap_limit, DEFAULT_HEAP_LIMIT);
    }
}
