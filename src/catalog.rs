use crate::constants::{
    ADOBE_MEDIA_CACHE, ADOBE_MEDIA_CACHE_FILES, ADOBE_MEDIA_CACHE_TARGET, ADOBE_PEAK_FILES,
    LIBRARY_CACHES, SYSTEM_CACHE_TARGET,
};
use anyhow::{Result, bail};
use std::path::{Path, PathBuf};

/// A named group of cache locations considered disposable. Templates are
/// paths relative to the home directory and are joined at resolve time, so
/// the catalog stays independent of which user (or test tree) it runs
/// against.
#[derive(Debug, Clone)]
pub struct CacheTarget {
    pub name: String,
    pub path_templates: Vec<String>,
}

impl CacheTarget {
    pub fn new(name: &str, path_templates: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            path_templates: path_templates.iter().map(ToString::to_string).collect(),
        }
    }

    /// Joins every template onto `home`, preserving declaration order.
    pub fn resolve(&self, home: &Path) -> Vec<PathBuf> {
        self.path_templates.iter().map(|t| home.join(t)).collect()
    }
}

/// The fixed table of reclaimable targets. Immutable after construction.
pub struct Catalog {
    targets: Vec<CacheTarget>,
}

impl Catalog {
    /// A target without templates would silently reclaim nothing, so it is
    /// rejected here rather than at reclaim time.
    pub fn new(targets: Vec<CacheTarget>) -> Result<Self> {
        for target in &targets {
            if target.path_templates.is_empty() {
                bail!("cache target {:?} has no path templates", target.name);
            }
        }
        Ok(Self { targets })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(vec![
            CacheTarget::new(SYSTEM_CACHE_TARGET, &[LIBRARY_CACHES]),
            CacheTarget::new(
                ADOBE_MEDIA_CACHE_TARGET,
                &[ADOBE_MEDIA_CACHE, ADOBE_MEDIA_CACHE_FILES, ADOBE_PEAK_FILES],
            ),
        ])
    }

    pub fn find(&self, name: &str) -> Option<&CacheTarget> {
        self.targets.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(|t| t.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_targets() -> Result<()> {
        let catalog = Catalog::builtin()?;
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec![SYSTEM_CACHE_TARGET, ADOBE_MEDIA_CACHE_TARGET]);

        let adobe = catalog
            .find(ADOBE_MEDIA_CACHE_TARGET)
            .expect("Adobe target should exist");
        assert_eq!(adobe.path_templates.len(), 3);
        Ok(())
    }

    #[test]
    fn resolve_joins_home() -> Result<()> {
        let catalog = Catalog::builtin()?;
        let system = catalog
            .find(SYSTEM_CACHE_TARGET)
            .expect("System target should exist");

        let resolved = system.resolve(Path::new("/tmp/testhome"));
        assert_eq!(resolved, vec![PathBuf::from("/tmp/testhome/Library/Caches")]);
        Ok(())
    }

    #[test]
    fn resolve_preserves_template_order() -> Result<()> {
        let catalog = Catalog::builtin()?;
        let adobe = catalog
            .find(ADOBE_MEDIA_CACHE_TARGET)
            .expect("Adobe target should exist");

        let resolved = adobe.resolve(Path::new("/home/u"));
        assert_eq!(resolved.len(), 3);
        assert!(resolved[0].ends_with("Adobe/Media Cache"));
        assert!(resolved[1].ends_with("Adobe/Media Cache Files"));
        assert!(resolved[2].ends_with("Adobe/Peak Files"));
        Ok(())
    }

    #[test]
    fn empty_templates_rejected() {
        let result = Catalog::new(vec![CacheTarget::new("Broken", &[])]);
        assert!(result.is_err());
    }

    #[test]
    fn find_unknown_name() -> Result<()> {
        let catalog = Catalog::builtin()?;
        assert!(catalog.find("Nonexistent Target").is_none());
        Ok(())
    }
}
