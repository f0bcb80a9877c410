// Server module entry point
// Provides listener creation and connection handling

pub mod connection;
pub mod listener;

pub use connection::accept_loop;
pub use listener::create_listener;
