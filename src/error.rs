/// Exit code for rejected parameters (zero-sized grid, strict-mode failures).
pub const EXIT_INVALID_PARAMETER: u8 = 2;
/// Exit code for file create/read/write failures.
pub const EXIT_IO: u8 = 3;
/// Exit code for runtime setup failures (e.g. worker pool construction).
pub const EXIT_RUNTIME: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(EXIT_IO, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Parameter problems detected by pre-flight validation.
///
/// These are raised before any grid work or file I/O is scheduled.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// Width or height is zero; there is no grid to fill.
    #[error("Invalid dimensions: width={width}, height={height} (both must be > 0).")]
    InvalidDimensions { width: usize, height: usize },

    /// A real-valued parameter is outside its usable domain.
    #[error("Invalid parameter {name}={value}: {reason}.")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// The Gaussian envelope width derived from beta and lambda is unusable.
    #[error("Degenerate sigma={sigma} derived from beta={beta}, lambda={lambda} (beta=1 divides by zero).")]
    DegenerateSigma { beta: f32, lambda: f32, sigma: f32 },
}

impl From<ParamError> for AppError {
    fn from(err: ParamError) -> Self {
        AppError::new(EXIT_INVALID_PARAMETER, err.to_string())
    }
}
