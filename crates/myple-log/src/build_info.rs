//! Build provenance captured by `build.rs`.

/// Static build metadata attached to every log record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub git_revision: String,
    pub rust_version: String,
}

impl BuildInfo {
    /// Reads the values `build.rs` recorded. Missing values are empty strings.
    pub fn current() -> Self {
        Self {
            git_revision: option_env!("MYPLE_GIT_REVISION")
                .unwrap_or_default()
                .to_string(),
            rust_version: option_env!("MYPLE_RUSTC_VERSION")
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// The build fields as `(name, value)` pairs.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("git_revision", self.git_revision.clone()),
            ("rust_version", self.rust_version.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_always_present() {
        let info = BuildInfo::default();
        let names: Vec<_> = info.fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["git_revision", "rust_version"]);
    }

    #[test]
    fn test_current_never_panics() {
        let info = BuildInfo::current();
        assert_eq!(info.fields().len(), 2);
    }
}
