//! Host platform classification.

use std::fmt;

/// Operating system family, deciding which probes and ping flags apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Linux, BSD, macOS, HP-UX and other Unix-like systems.
    Unix,
}

impl Platform {
    /// Returns the platform this binary was built for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::Unix => write!(f, "Unix"),
        }
    }
}
