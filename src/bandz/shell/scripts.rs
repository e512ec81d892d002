use crate::error::{BandzError, Result};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

/// Canonical paths of the scripts currently running, outermost first.
#[derive(Debug, Default)]
pub struct ScriptStack {
    open: Vec<PathBuf>,
}

impl ScriptStack {
    /// Marks `path` as running until the returned guard is dropped.
    ///
    /// `path` must already be canonical; two spellings of the same file are
    /// only recognized as the same script if they canonicalize identically.
    pub fn enter(&mut self, path: PathBuf) -> Result<ScriptGuard<'_>> {
        if self.contains(&path) {
            return Err(BandzError::ScriptCycle(path));
        }
        tracing::debug!(path = %path.display(), depth = self.open.len() + 1, "entering script");
        self.open.push(path);
        Ok(ScriptGuard { stack: self })
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.open.iter().any(|p| p == path)
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.open
    }
}

/// Keeps a script on the stack; pops it on drop, whichever way the nested
/// loop ends. Derefs to the stack so the nested loop can keep using it.
pub struct ScriptGuard<'a> {
    stack: &'a mut ScriptStack,
}

impl Deref for ScriptGuard<'_> {
    type Target = ScriptStack;

    fn deref(&self) -> &ScriptStack {
        self.stack
    }
}

impl DerefMut for ScriptGuard<'_> {
    fn deref_mut(&mut self) -> &mut ScriptStack {
        self.stack
    }
}

impl Drop for ScriptGuard<'_> {
    fn drop(&mut self) {
        if let Some(path) = self.stack.open.pop() {
            tracing::debug!(path = %path.display(), "leaving script");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_pops_on_drop() {
        let mut stack = ScriptStack::default();
        {
            let guard = stack.enter(PathBuf::from("/a.txt")).unwrap();
            assert_eq!(guard.depth(), 1);
        }
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn nested_entries_unwind_in_order() {
        let mut stack = ScriptStack::default();
        let mut outer = stack.enter(PathBuf::from("/a.txt")).unwrap();
        {
            let inner = outer.enter(PathBuf::from("/b.txt")).unwrap();
            assert_eq!(inner.paths(), &[PathBuf::from("/a.txt"), PathBuf::from("/b.txt")]);
        }
        assert_eq!(outer.paths(), &[PathBuf::from("/a.txt")]);
        drop(outer);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn reentering_an_open_script_is_a_cycle() {
        let mut stack = ScriptStack::default();
        let mut outer = stack.enter(PathBuf::from("/a.txt")).unwrap();
        let mut inner = outer.enter(PathBuf::from("/b.txt")).unwrap();

        let err = inner.enter(PathBuf::from("/a.txt")).err().unwrap();
        assert!(matches!(err, BandzError::ScriptCycle(p) if p == Path::new("/a.txt")));
        assert_eq!(inner.depth(), 2);
    }

    #[test]
    fn guard_pops_when_nested_work_fails() {
        fn failing(stack: &mut ScriptStack) -> Result<()> {
            let _guard = stack.enter(PathBuf::from("/a.txt"))?;
            Err(BandzError::value("boom"))
        }

        let mut stack = ScriptStack::default();
        assert!(failing(&mut stack).is_err());
        assert_eq!(stack.depth(), 0);
    }
}
