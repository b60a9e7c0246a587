// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into the services and the HTTP router.
// - Seed development data when asked to.

pub mod config;
pub mod http;
pub mod seed;
pub mod state;
