//! Property editors for concept dictionary objects
//!
//! An editor holds at most one value and converts it to and from the text
//! form used in request parameters: the object's integer id, or its uuid.
//!
//! - Blank text clears the value.
//! - Text that parses as an integer is looked up by id, anything else by uuid.
//! - Text that resolves to nothing is an [`EditorError::IllegalArgument`] and
//!   leaves the current value untouched.

mod concept;
mod concept_map_type;
mod editor;
mod error;

pub use concept::ConceptEditor;
pub use concept_map_type::ConceptMapTypeEditor;
pub use editor::PropertyEditor;
pub use error::{EditorError, Result};
