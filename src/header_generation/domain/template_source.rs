/// Where the rendered header text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Copyright line plus the selected license body inside a block comment
    Standard,
    /// A caller-supplied body, emitted verbatim
    Explicit(String),
}

impl TemplateSource {
    pub fn is_explicit(&self) -> bool {
        matches!(self, TemplateSource::Explicit(_))
    }
}
