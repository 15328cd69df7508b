// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Installs the global subscriber. Logging is disabled (and this is a no-op) when the
/// writer config is [`WriterConfig::None`] or the level is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the log file can't be opened, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(
    tracing_config: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let tracing_config: TracingConfig = tracing_config.into();
    let Some(layers) = try_create_layers(&tracing_config)? else {
        return Ok(());
    };
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Returns the layers without installing them. `None` means logging is disabled.
///
/// # Errors
///
/// Returns an error if the log file can't be opened.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    if level_filter == LevelFilter::OFF || writer_config == WriterConfig::None {
        return Ok(None);
    }

    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![];

    if let Some(layer) = try_create_display_layer(level_filter, &writer_config) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let display_pref = match writer_config {
        WriterConfig::Display(display_pref)
        | WriterConfig::DisplayAndFile(display_pref, _) => *display_pref,
        WriterConfig::None | WriterConfig::File(_) => return None,
    };

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    let layer: Box<DynLayer<S>> = match display_pref {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    };
    Some(layer)
}

fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file_path = match writer_config {
        WriterConfig::File(file_path) | WriterConfig::DisplayAndFile(_, file_path) => {
            file_path
        }
        WriterConfig::None | WriterConfig::Display(_) => return Ok(None),
    };

    let file_appender = rolling_file_appender_impl::try_create(file_path)?;

    Ok(Some(Box::new(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(level_filter),
    )))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_core::LevelFilter;

    use super::try_create_layers;
    use crate::log::{DisplayPreference, TracingConfig, WriterConfig};

    #[test]
    fn disabled_configs_create_no_layers() {
        let config = TracingConfig {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
        };
        assert!(try_create_layers(&config).unwrap().is_none());

        let config: TracingConfig = WriterConfig::None.into();
        assert!(try_create_layers(&config).unwrap().is_none());
    }

    #[test]
    fn display_config_creates_one_layer() {
        let config: TracingConfig = DisplayPreference::Stderr.into();
        let layers = try_create_layers(&config).unwrap().unwrap();
        assert_eq!(layers.len(), 1);
    }
}
