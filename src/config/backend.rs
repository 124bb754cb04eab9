//! Backend-specific configuration constants and types.

/// Launch table for the supervised backend process.
///
/// Development mode runs the interpreter invocation against the live sources;
/// packaged mode runs the bundled executable. Both expect the backend root as
/// their working directory.
pub struct ProcessDefaults {
    /// Development-mode program (an interpreter invocation).
    pub dev_program: &'static str,
    pub dev_args: &'static [&'static str],
    /// Packaged-mode executable, relative to the working directory.
    pub packaged_program: &'static str,
    /// Working directory the backend expects to be launched from.
    pub working_dir: &'static str,
}

/// Defaults for the HTTP client that talks to the backend.
pub struct HttpDefaults {
    /// Base URL of the locally running backend service.
    pub base_url: &'static str,
}

/// The Master Backend Configuration Struct
pub struct BackendConfig {
    pub process: ProcessDefaults,
    pub http: HttpDefaults,
}

pub const BACKEND: BackendConfig = BackendConfig {
    process: ProcessDefaults {
        dev_program: "uvicorn",
        dev_args: &["GPTScreen:app", "--reload"],
        packaged_program: "./GPTScreen",
        working_dir: "../PyBackend",
    },
    http: HttpDefaults {
        base_url: "http://127.0.0.1:8000",
    },
};
