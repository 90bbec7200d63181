pub mod parser;
pub mod token;

pub use parser::parse_boundary;
pub use token::{Command, Token, Tokens, lex};
