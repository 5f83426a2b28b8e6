use thiserror::Error;

use palette_model::SectionId;

#[derive(Debug, Error)]
pub enum AssemblyError {
    /// A required section has neither an override nor a library template.
    ///
    /// Orderings and libraries are fixed at construction, so this is an
    /// integration bug rather than a runtime condition.
    #[error("required section {id:?} has no template and no override")]
    UnresolvedSection { id: SectionId },
    #[error("failed to serialize {context}: {message}")]
    Xml { context: String, message: String },
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
