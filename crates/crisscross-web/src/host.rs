//! Host document abstraction.
//!
//! The attachment step only needs a handful of DOM operations. Keeping them
//! behind [`HostDocument`] lets the same code drive the browser DOM and the
//! in-memory [`MemoryDocument`](crate::MemoryDocument).

/// The DOM operations needed to build and attach cell elements.
pub trait HostDocument {
    /// Handle to an element owned by the host.
    type Element;

    /// Looks up an element attached to the document by its id.
    fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Creates a detached element with the given tag name.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the host refuses to create the element.
    fn create_element(&mut self, tag: &str) -> Result<Self::Element, HostError>;

    /// Adds `class` to the element's class list.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the class name is rejected.
    fn add_class(&mut self, element: &Self::Element, class: &str) -> Result<(), HostError>;

    /// Sets an attribute on the element.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the attribute name is rejected.
    fn set_attribute(
        &mut self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), HostError>;

    /// Appends `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the insertion would break the tree.
    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element)
    -> Result<(), HostError>;
}

/// A failed host operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{operation} failed: {message}")]
pub struct HostError {
    operation: &'static str,
    message: String,
}

impl HostError {
    /// Creates an error for the named host operation.
    #[must_use]
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }

    /// Returns the name of the failed operation.
    #[must_use]
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Returns the host's description of the failure.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
