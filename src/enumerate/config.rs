//! Enumeration limits.

/// Configuration for [`EnumRunner`](super::EnumRunner).
///
/// The defaults run the walk to completion. Output grows as `(m!)^D`, so
/// callers facing untrusted input should set a budget or a time limit.
///
/// Parallelism is not a setting: call
/// [`EnumRunner::run_parallel`](super::EnumRunner) (feature `parallel`)
/// to split the walk across rayon workers.
///
/// # Examples
///
/// ```
/// use u_logigrid::enumerate::EnumConfig;
///
/// let config = EnumConfig::default()
///     .with_max_combinations(1_000)
///     .with_time_limit_ms(500);
/// assert_eq!(config.max_combinations, Some(1_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumConfig {
    /// Stop after this many combinations. `None` = no limit.
    pub max_combinations: Option<u64>,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked every 1024 search nodes, so the walk may overrun slightly.
    pub time_limit_ms: Option<u64>,

    /// Largest accepted recursion depth (`m * D`).
    pub max_depth: usize,
}

impl Default for EnumConfig {
    fn default() -> Self {
        Self {
            max_combinations: None,
            time_limit_ms: None,
            max_depth: 4096,
        }
    }
}

impl EnumConfig {
    pub fn with_max_combinations(mut self, n: u64) -> Self {
        self.max_combinations = Some(n);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnumConfig::default();
        assert_eq!(config.max_combinations, None);
        assert_eq!(config.time_limit_ms, None);
        assert_eq!(config.max_depth, 4096);
    }

    #[test]
    fn test_builder() {
        let config = EnumConfig::default()
            .with_max_combinations(10)
            .with_time_limit_ms(0)
            .with_max_depth(8);
        assert_eq!(config.max_combinations, Some(10));
        assert_eq!(config.time_limit_ms, Some(0));
        assert_eq!(config.max_depth, 8);
    }
}
