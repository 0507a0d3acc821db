/// Detects route transitions so the drawer stack can be cleared on navigation.
///
/// The first observed path is only recorded; every later path that differs
/// from the previous one counts as a transition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    last: Option<String>,
}

impl RouteGuard {
    /// Record `path`, returning true when it is a change from the last one.
    pub fn observe(&mut self, path: &str) -> bool {
        match &self.last {
            Some(last) if last == path => false,
            Some(_) => {
                self.last = Some(path.to_string());
                true
            }
            None => {
                self.last = Some(path.to_string());
                false
            }
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_path_is_not_a_change() {
        let mut guard = RouteGuard::default();
        assert!(!guard.observe("/"));
        assert_eq!(guard.current(), Some("/"));
    }

    #[test]
    fn test_fires_once_per_transition() {
        let mut guard = RouteGuard::default();
        guard.observe("/notes");
        assert!(guard.observe("/settings"));
        assert!(!guard.observe("/settings"));
        assert!(guard.observe("/notes"));
    }
}
