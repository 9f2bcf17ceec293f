//! Configuration client type and constructors.

use std::fmt;
use std::path::PathBuf;

use crate::client::paths;

/// Client for one configuration file under the user's home directory.
///
/// `T` is the caller-defined settings type. The optional factory produces a
/// fresh `T` with default values for the `*_default` operations; clients
/// built without one must pass the settings value explicitly.
pub struct ConfigClient<T> {
    /// Resolved home directory. Immutable after construction.
    pub(crate) home: PathBuf,
    /// Relative subdirectory under home holding the config file.
    pub(crate) fragment: PathBuf,
    /// Optional zero-argument factory producing default settings.
    pub(crate) factory: Option<Box<dyn Fn() -> T + Send + Sync>>,
}

impl<T> ConfigClient<T> {
    /// Create a client rooted at the home directory resolved from the
    /// environment.
    ///
    /// `fragment` is the relative subdirectory for this application,
    /// e.g. `.myapp` for `~/.myapp/config.toml`.
    pub fn new(fragment: impl Into<PathBuf>) -> Self {
        Self::with_home(paths::resolve_home(), fragment)
    }

    /// Create a client rooted at an explicit home directory.
    ///
    /// Used by tests and by hosts that resolve home themselves; no
    /// environment access happens on this path.
    pub fn with_home(home: impl Into<PathBuf>, fragment: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            fragment: fragment.into(),
            factory: None,
        }
    }

    /// Attach a default-factory used by [`init_default`](Self::init_default)
    /// and [`reset_default`](Self::reset_default).
    #[must_use]
    pub fn with_factory(mut self, factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    /// Whether this client carries a default-factory.
    pub fn has_factory(&self) -> bool {
        self.factory.is_some()
    }
}

impl<T> fmt::Debug for ConfigClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigClient")
            .field("home", &self.home)
            .field("fragment", &self.fragment)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_home_stores_components() {
        let client: ConfigClient<()> = ConfigClient::with_home("/home/tester", ".myapp");
        assert_eq!(client.home, PathBuf::from("/home/tester"));
        assert_eq!(client.fragment, PathBuf::from(".myapp"));
        assert!(!client.has_factory());
    }

    #[test]
    fn test_with_factory_is_recorded() {
        let client: ConfigClient<u32> =
            ConfigClient::with_home("/home/tester", ".myapp").with_factory(|| 7);
        assert!(client.has_factory());
    }

    #[test]
    fn test_debug_does_not_require_debug_payload() {
        struct Opaque;
        let client: ConfigClient<Opaque> = ConfigClient::with_home("/home/tester", ".myapp");
        let rendered = format!("{:?}", client);
        assert!(rendered.contains(".myapp"));
        assert!(rendered.contains("has_factory: false"));
    }
}
