/*
 * Responsibility
 * - Public interface of the middleware layer
 * - http: cross-cutting transport concerns, oauth: identity header injection
 */
pub mod http;
pub mod oauth;
