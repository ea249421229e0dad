// Server module entry
// Listener setup, connection handling, accept loop and shutdown signals

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the file is mounted under another name
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::create_listener;
pub use server_loop::run_server;
pub use signal::{start_signal_handler, SignalHandler};
