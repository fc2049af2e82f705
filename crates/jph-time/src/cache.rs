//! Per-year memoization of resolved holiday tables.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use jph_core::Settings;

use crate::derived::resolve_year;
use crate::table::HolidayTable;

/// Cache of fully resolved [`HolidayTable`]s, one per year.
///
/// Tables are built on first request and never evicted; the holidays of a
/// past year do not change.  The lock is held while a missing year is built,
/// so concurrent first requests for the same year build it exactly once.
#[derive(Debug, Default)]
pub struct YearTableCache {
    settings: Settings,
    tables: Mutex<HashMap<u16, Arc<HolidayTable>>>,
}

impl YearTableCache {
    /// Create an empty cache with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            tables: Mutex::new(HashMap::new()),
        }
    }

    /// The settings this cache builds tables with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Return the resolved table for `year`, building it if necessary.
    pub fn table(&self, year: u16) -> Arc<HolidayTable> {
        let mut tables = self.lock();
        if let Some(t) = tables.get(&year) {
            return Arc::clone(t);
        }
        if self.settings.warn_outside_supported() && !self.settings.is_supported(year) {
            tracing::warn!(
                year,
                supported = ?self.settings.supported_years(),
                "building holidays outside the supported year range; equinox days are approximate"
            );
        }
        let table = Arc::new(resolve_year(year));
        tracing::debug!(year, holidays = table.len(), "built holiday table");
        tables.insert(year, Arc::clone(&table));
        table
    }

    /// Whether `year` has already been built.
    pub fn is_cached(&self, year: u16) -> bool {
        self.lock().contains_key(&year)
    }

    /// Number of cached years.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no year has been built yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached table.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Entries are inserted fully built, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<u16, Arc<HolidayTable>>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn builds_lazily_and_reuses() {
        let cache = YearTableCache::new();
        assert!(cache.is_empty());
        let a = cache.table(2024);
        assert!(cache.is_cached(2024));
        let b = cache.table(2024);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn rebuild_after_clear_is_identical() {
        let cache = YearTableCache::new();
        let before = cache.table(2015);
        cache.clear();
        assert!(!cache.is_cached(2015));
        let after = cache.table(2015);
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
    }

    #[test]
    fn concurrent_first_access_builds_once() {
        let cache = Arc::new(YearTableCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.table(2021))
            })
            .collect();
        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for t in &tables[1..] {
            assert!(Arc::ptr_eq(&tables[0], t));
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn out_of_range_year_still_resolves() {
        let cache = YearTableCache::with_settings(Settings::new().with_warn_outside_supported(false));
        let t = cache.table(2150);
        assert!(t.contains(crate::DayKey::from_parts(2150, 1, 1)));
    }

    #[test]
    fn years_past_date_range_are_empty() {
        let cache = YearTableCache::new();
        assert!(cache.table(2200).is_empty());
        assert!(cache.table(u16::MAX).is_empty());
        // the lock is still usable afterwards
        assert!(!cache.table(2024).is_empty());
        assert_eq!(cache.len(), 3);
    }
}
