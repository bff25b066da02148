// OSMU ("One Source Multi Use") content transform engine.
// Pure, deterministic conversions between platform shapes. No I/O here
// except in handlers.

pub mod converter;
pub mod handlers;
pub mod source;
pub mod templates;
pub mod threads;
