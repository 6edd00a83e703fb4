pub mod codegen;
pub mod resolve;
pub mod versions;
