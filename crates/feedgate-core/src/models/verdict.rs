use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Outcome of validating one candidate post.
///
/// `ok` is true iff `errors` is empty. Callers treat a failed verdict as
/// "regenerate or discard".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Verdict {
    ok: bool,
    errors: Vec<String>,
}

impl Verdict {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
        }
    }

    pub fn ok(&self) -> bool {
        self.ok
    }

    /// Human-readable diagnostics in the order the checks ran.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether any diagnostic contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.errors.iter().any(|e| e.contains(needle))
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl<'de> Deserialize<'de> for Verdict {
    /// Rebuilds through [`Verdict::from_errors`]; a payload whose `ok` flag
    /// disagrees with its errors is rejected.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            ok: bool,
            errors: Vec<String>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let verdict = Self::from_errors(raw.errors);
        if verdict.ok != raw.ok {
            return Err(serde::de::Error::custom(format!(
                "verdict has ok={} but {} error(s)",
                raw.ok,
                verdict.errors.len()
            )));
        }
        Ok(verdict)
    }
}

/// Per-call validation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ValidationOptions {
    /// Run stylistic and narrative checks. When false only structural
    /// checks run.
    pub strict: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::strict()
    }
}
