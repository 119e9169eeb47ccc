//! Gherkin step definitions.

mod login;
mod objects;
