use std::cell::Cell;

/// Token proving a synchronization pass is in progress.
///
/// Acquired at the start of a pass and released on drop, so every exit path
/// (early return, unparsable input, unwinding) clears the flag.
#[derive(Debug)]
pub struct SyncGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> SyncGuard<'a> {
    /// Returns `None` when a pass already holds the flag
    pub fn try_acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for SyncGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_fails_while_held() {
        let flag = Cell::new(false);
        let guard = SyncGuard::try_acquire(&flag);
        assert!(guard.is_some());
        assert!(flag.get());
        assert!(SyncGuard::try_acquire(&flag).is_none());

        drop(guard);
        assert!(!flag.get());
        assert!(SyncGuard::try_acquire(&flag).is_some());
    }

    #[test]
    fn test_failed_acquire_does_not_release() {
        let flag = Cell::new(false);
        let _held = SyncGuard::try_acquire(&flag).unwrap();
        {
            let nested = SyncGuard::try_acquire(&flag);
            assert!(nested.is_none());
        }
        assert!(flag.get());
    }

    #[test]
    fn test_released_on_unwind() {
        let flag = Cell::new(false);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = SyncGuard::try_acquire(&flag).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!flag.get());
    }
}
