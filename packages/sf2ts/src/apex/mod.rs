/**
 * Apex front end: lexer, recursive-descent parser, warm-up service, and the
 * TypeScript declaration compiler that consumes the parsed tree.
 */
pub mod ast;
pub mod declaration;
pub mod lexer;
pub mod parser;
pub mod service;
pub mod types;
