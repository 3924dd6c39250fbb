/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Fills both placeholders, then points root-relative `src`/`href`
    /// attributes at `basepath`.
    pub fn render(&self, title: &str, content: &str, basepath: &str) -> String {
        self.source
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content)
            .replace(r#"src="/"#, &format!(r#"src="{basepath}"#))
            .replace(r#"href="/"#, &format!(r#"href="{basepath}"#))
    }
}
