//! Comparator commands applied to a resolved value and a configured operand.

mod command_trait;
mod equals;
mod includes;
mod ordering;
mod registry;

pub use command_trait::Command;
pub use equals::EqualsCommand;
pub use includes::IncludesCommand;
pub use ordering::{Comparison, OrderingCommand};
pub use registry::CommandRegistry;
