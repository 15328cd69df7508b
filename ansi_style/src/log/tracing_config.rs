// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where log output goes. Styled output is written to stdout, so the binary logs to a
/// file by default to keep the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

/// Anything that converts [`Into<TracingConfig>`] can be passed to
/// [`crate::log::try_initialize_logging_global()`], and configs compose with `+`:
///
/// ```no_run
/// use r3bl_ansi_style::log::{DisplayPreference, TracingConfig, WriterConfig,
///                            try_initialize_logging_global};
///
/// let level: TracingConfig = tracing_core::LevelFilter::DEBUG.into();
/// let display: TracingConfig = DisplayPreference::Stderr.into();
/// try_initialize_logging_global(level + display).ok();
/// ```
mod tracing_config_options {
    use super::{Add, DEFAULT_LOG_FILE_NAME, DisplayPreference, LevelFilter,
                TracingConfig, WriterConfig};

    impl TracingConfig {
        #[must_use]
        pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

        #[must_use]
        pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
    }

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// The more verbose level wins, writers are merged.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// `rhs` clobbers `self` where both are set, since it has higher specificity.
    /// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
    /// - `{a: None } + {a: "bar"} = {a: "bar"}`.
    /// - `{a: "foo"} + {a: None } = {a: "foo"}`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,
                (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

                // Collision.
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
                (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (
                    Display(_) | File(_) | DisplayAndFile(_, _),
                    DisplayAndFile(dp_rhs, f_rhs),
                ) => DisplayAndFile(dp_rhs, f_rhs),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_core::LevelFilter;

    use super::{DEFAULT_LOG_FILE_NAME, DisplayPreference, TracingConfig, WriterConfig};

    #[test]
    fn test_add_writer_configs() {
        let file = WriterConfig::File("a.txt".to_string());
        let other_file = WriterConfig::File("b.txt".to_string());
        let stdout = WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = WriterConfig::Display(DisplayPreference::Stderr);

        assert_eq!(WriterConfig::None + WriterConfig::None, WriterConfig::None);
        assert_eq!(stdout.clone() + WriterConfig::None, stdout);
        assert_eq!(WriterConfig::None + file.clone(), file);
        assert_eq!(stdout.clone() + stderr.clone(), stderr);
        assert_eq!(file.clone() + other_file.clone(), other_file);
        assert_eq!(
            stdout.clone() + file.clone(),
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "a.txt".to_string())
        );
        assert_eq!(
            file.clone() + stderr.clone(),
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "a.txt".to_string())
        );
        assert_eq!(
            (stdout + file) + other_file,
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "b.txt".to_string())
        );
    }

    #[test]
    fn test_conversions() {
        let config: TracingConfig = tracing::Level::INFO.into();
        assert_eq!(config.get_level_filter(), LevelFilter::INFO);
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let config: TracingConfig = DisplayPreference::Stderr.into();
        assert_eq!(
            config.writer_config,
            WriterConfig::Display(DisplayPreference::Stderr)
        );
    }

    #[test]
    fn test_add_tracing_configs() {
        let level: TracingConfig = LevelFilter::TRACE.into();
        let display: TracingConfig = DisplayPreference::Stdout.into();
        let merged = level + display;
        assert_eq!(merged.level_filter, LevelFilter::TRACE);
        assert_eq!(
            merged.writer_config,
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stdout,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
    }
}
