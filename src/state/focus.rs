//! Focus-related state types.

/// Specifying the different foci within a form.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Field(usize),
    Submit,
    Reset,
}

impl Focus {
    /// Return the field index when a field holds the focus.
    ///
    pub fn field_index(&self) -> Option<usize> {
        match self {
            Focus::Field(index) => Some(*index),
            _ => None,
        }
    }
}
