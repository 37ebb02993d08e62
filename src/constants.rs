pub const SYSTEM_CACHE_TARGET: &str = "System Cache";
pub const ADOBE_MEDIA_CACHE_TARGET: &str = "Adobe Media Cache";

pub const LIBRARY_CACHES: &str = "Library/Caches";

pub const ADOBE_MEDIA_CACHE: &str = "Library/Application Support/Adobe/Media Cache";
pub const ADOBE_MEDIA_CACHE_FILES: &str = "Library/Application Support/Adobe/Media Cache Files";
pub const ADOBE_PEAK_FILES: &str = "Library/Application Support/Adobe/Peak Files";
