// ABOUTME: Shell environment snapshot types for terminal command completion
// ABOUTME: Foundation-layer data shared between shell introspection and completion

pub mod shell_env;


// Re-export the snapshot type for easy access
pub use shell_env::ShellEnvironment;
