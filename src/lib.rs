// weat: Word Embedding Association Test and response-accuracy evaluator.
//
// This is the library root. `association` and `accuracy` are the two
// independent computations; the remaining modules feed them input and
// render their output for the CLI.

pub mod accuracy;
pub mod association;
pub mod config;
pub mod loader;
pub mod output;
pub mod sample;
