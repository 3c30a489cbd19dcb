//! Layering of configuration sources.

use crate::config::schema::Config;

/// Folds configuration layers together, later layers winning.
///
/// Each field is replaced as a whole when the higher layer sets it; search
/// path lists are not concatenated.
///
/// # Examples
///
/// ```
/// use fspath::config::{Config, ConfigMerger};
///
/// let mut base = Config { search_paths: Some(vec!["/low".into()]), ..Default::default() };
/// let top = Config { include_cwd: Some(false), ..Default::default() };
/// ConfigMerger::merge_into(&mut base, &top);
/// assert_eq!(base.search_paths(), ["/low"]);
/// assert!(!base.include_cwd());
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge layers given lowest precedence first.
    #[must_use]
    pub fn merge<'a>(layers: impl IntoIterator<Item = &'a Config>) -> Config {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Overwrite `target` with every field `source` sets.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.search_paths.is_some() {
            target.search_paths.clone_from(&source.search_paths);
        }
        if source.include_cwd.is_some() {
            target.include_cwd = source.include_cwd;
        }
        if source.cwd_position.is_some() {
            target.cwd_position = source.cwd_position;
        }
    }
}
