//! Core decoding services

pub mod groups;
pub mod recognizer;
pub mod report_parser;
pub mod tokenizer;
pub mod visitor;
