pub mod check;
pub mod describe;

pub use check::validate;
pub use describe::describe_declaration;
