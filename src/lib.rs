//! DM screenshot transcription tools for the mmemory fan archive.
//!
//! The archive's admin panel imports DM threads from screenshots: an OCR engine
//! transcribes the image, and this crate segments the transcription into chat
//! messages that a curator reviews and corrects before saving.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`dm`] — The transcript parser: line segmentation, classification, and bubble grouping
//! - [`ocr`] — Text recognition seam and the Tesseract CLI backend
//! - [`server`] — HTTP endpoints used by the admin panel

pub mod config;
pub mod dm;
pub mod ocr;
pub mod server;
