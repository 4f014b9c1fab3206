use std::fmt;

/// A generated post that could not be accepted as a [`crate::CandidatePost`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    /// The value was shaped like a post but broke one or more field rules.
    #[error("generated post failed schema validation:\n{violations}")]
    Invalid { violations: Violations },

    /// The raw input could not be decoded as JSON at all.
    #[error("generated post is not valid JSON: {reason}")]
    MalformedJson { reason: String },
}

impl SchemaError {
    /// Field violations, empty for [`SchemaError::MalformedJson`].
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Invalid { violations } => violations.as_slice(),
            Self::MalformedJson { .. } => &[],
        }
    }
}

/// One broken field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path to the field, e.g. `tags[2]`. Empty for the root value.
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.path, self.message)
        }
    }
}

/// Every violation found in a single parse, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.violations
    }

    /// Whether any violation was recorded against `path`.
    pub fn touches(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
