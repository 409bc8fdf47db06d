use std::borrow::Cow;

/// Cleans formatting noise off a single trimmed line before it is decoded.
pub trait LineSanitizer {
    fn sanitize<'a>(&self, line: &'a str) -> Cow<'a, str>;
}

impl<T: LineSanitizer + ?Sized> LineSanitizer for Box<T> {
    fn sanitize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        (**self).sanitize(line)
    }
}

/// Leaves lines untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSanitizer;

impl LineSanitizer for NoopSanitizer {
    fn sanitize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(line)
    }
}

/// Strips markdown code-fence markers and trailing commas.
#[derive(Debug, Clone, Copy, Default)]
pub struct FenceSanitizer;

impl LineSanitizer for FenceSanitizer {
    fn sanitize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut s = line.trim();
        if let Some(rest) = s.strip_prefix("```json") {
            s = rest;
        } else if let Some(rest) = s.strip_prefix("```") {
            s = rest;
        }
        if let Some(rest) = s.strip_suffix("```") {
            s = rest;
        }
        let s = s.trim().trim_end_matches(',').trim_end();
        Cow::Borrowed(s)
    }
}

/// Strips the opening `[` and closing `]` of an array the backend was told not to send.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayWrapperSanitizer;

impl LineSanitizer for ArrayWrapperSanitizer {
    fn sanitize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut s = line.trim();
        if let Some(rest) = s.strip_prefix('[') {
            s = rest.trim_start();
        }
        if let Some(rest) = s.strip_suffix(']') {
            s = rest.trim_end();
        }
        Cow::Borrowed(s)
    }
}

/// Runs sanitizers in order, each one seeing the previous output.
#[derive(Default)]
pub struct SanitizerChain {
    steps: Vec<Box<dyn LineSanitizer + Send + Sync>>,
}

impl SanitizerChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain used for content plans: array brackets first, then fences and commas.
    #[must_use]
    pub fn plan_default() -> Self {
        Self::new()
            .with(ArrayWrapperSanitizer)
            .with(FenceSanitizer)
    }

    #[must_use]
    pub fn with(mut self, step: impl LineSanitizer + Send + Sync + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Debug for SanitizerChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SanitizerChain")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl LineSanitizer for SanitizerChain {
    fn sanitize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(line);
        for step in &self.steps {
            current = match current {
                Cow::Borrowed(borrowed) => step.sanitize(borrowed),
                Cow::Owned(owned) => Cow::Owned(step.sanitize(&owned).into_owned()),
            };
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fence_markers_are_stripped() {
        let s = FenceSanitizer;
        assert_eq!(s.sanitize("```json"), "");
        assert_eq!(s.sanitize("```"), "");
        assert_eq!(s.sanitize(r#"```json{"a":1}"#), r#"{"a":1}"#);
        assert_eq!(s.sanitize(r#"{"a":1}```"#), r#"{"a":1}"#);
    }

    #[test]
    fn trailing_commas_are_stripped() {
        assert_eq!(FenceSanitizer.sanitize(r#"{"a":1},"#), r#"{"a":1}"#);
        assert_eq!(FenceSanitizer.sanitize(r#"{"a":1},, "#), r#"{"a":1}"#);
    }

    #[test]
    fn array_brackets_are_stripped() {
        let s = ArrayWrapperSanitizer;
        assert_eq!(s.sanitize(r#"[{"a":1},"#), r#"{"a":1},"#);
        assert_eq!(s.sanitize(r#"{"a":1}]"#), r#"{"a":1}"#);
        assert_eq!(s.sanitize("]"), "");
    }

    #[test]
    fn plan_chain_handles_array_and_commas_together() {
        let chain = SanitizerChain::plan_default();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.sanitize(r#"[{"a":1},"#), r#"{"a":1}"#);
        assert_eq!(chain.sanitize(r#"{"b":2}]"#), r#"{"b":2}"#);
    }

    #[test]
    fn empty_chain_is_identity() {
        let chain = SanitizerChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.sanitize("```json"), "```json");
        assert_eq!(NoopSanitizer.sanitize("x,"), "x,");
    }
}
