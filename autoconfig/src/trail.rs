//! Field path bookkeeping shared by both traversal passes.

use crate::{AutoconfigError, AutoconfigResult};

/// Stack of field names from the root struct to the current position.
#[derive(Debug)]
pub(crate) struct Trail {
    segments: Vec<&'static str>,
    max_depth: usize,
}

impl Trail {
    pub(crate) const fn new(max_depth: usize) -> Self {
        Self {
            segments: Vec::new(),
            max_depth,
        }
    }

    /// Dotted path of `field` relative to the root struct.
    pub(crate) fn path_to(&self, field: &str) -> String {
        let mut path = self.segments.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(field);
        path
    }

    /// Enters the nested struct stored in `field`.
    ///
    /// Fails without entering when the nesting limit would be exceeded.
    pub(crate) fn descend(&mut self, field: &'static str) -> AutoconfigResult<()> {
        if self.segments.len() >= self.max_depth {
            return Err(AutoconfigError::DepthExceeded {
                path: self.path_to(field),
                limit: self.max_depth,
            });
        }
        self.segments.push(field);
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.segments.pop();
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests panic to surface configuration mistakes"
    )]
    use super::Trail;
    use crate::AutoconfigError;

    #[test]
    fn builds_dotted_paths() {
        let mut trail = Trail::new(4);
        assert_eq!(trail.path_to("name"), "name");
        assert!(trail.descend("server").is_ok());
        assert!(trail.descend("tls").is_ok());
        assert_eq!(trail.path_to("cert"), "server.tls.cert");
        trail.ascend();
        assert_eq!(trail.path_to("port"), "server.port");
    }

    #[test]
    fn refuses_to_exceed_limit() {
        let mut trail = Trail::new(1);
        assert!(trail.descend("a").is_ok());
        let err = trail.descend("b").expect_err("limit reached");
        assert!(matches!(
            err,
            AutoconfigError::DepthExceeded { ref path, limit: 1 } if path == "a.b"
        ));
    }
}
