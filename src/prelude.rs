use standard_error::StandardError;

pub type Result<T> = core::result::Result<T, standard_error::StandardError>;

/// Logs `err` and turns it into a coded [`StandardError`].
pub fn coded<E: ToString>(code: &'static str) -> impl FnOnce(E) -> StandardError {
    move |err| {
        tracing::error!(code = code, "err: {}", err.to_string());
        StandardError::new(code)
    }
}

pub fn binderr<E: ToString>(err: E) -> StandardError {
    coded("ERR-BIND")(err)
}

pub fn serveerr<E: ToString>(err: E) -> StandardError {
    coded("ERR-SERVE")(err)
}
