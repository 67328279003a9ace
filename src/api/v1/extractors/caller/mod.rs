/*!
 * Caller identity extractor
 *
 * Responsibility:
 * - Hand the identity headers written by middleware::oauth to handlers as a typed value
 * - axum plumbing lives in core, the value type in types
 */

mod core;
mod types;

pub use self::core::AuthenticatedCaller;
pub use self::types::Caller;
