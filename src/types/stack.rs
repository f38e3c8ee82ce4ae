use std::fmt::Display;

/// The runtime representation a primitive type reduces to on the VM's
/// operand stacks. Types with no stack representation cannot be held in a
/// local variable at all.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum StackType {
    Int,
    String,
    Long,
}

impl Display for StackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
