//! Input handling: file detection, text extraction, caching
//!
//! Upstream collaborator of the parser. Turns an uploaded document into
//! the plain UTF-8 text the heuristics run over; extraction fidelity is
//! an implicit precondition for header detection and chunking.

pub mod file_detector;
pub mod manager;
pub mod text_extractor;
