// Crate root library declaration and module exports.
//
// The engine (color_utils, model, synth, contrast, harmony, fonts) is pure
// and performs no I/O. config, context, export and storage touch the
// filesystem and return anyhow::Result.
pub mod cli;
pub mod color_utils;
pub mod config;
pub mod context;
pub mod contrast;
pub mod export;
pub mod fonts;
pub mod harmony;
pub mod model;
pub mod storage;
pub mod synth;
