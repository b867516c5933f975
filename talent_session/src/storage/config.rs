use std::path::PathBuf;
use std::sync::LazyLock;

/// Well-known location of the persisted token.
///
/// Default: ".talent_session_token" in the working directory.
pub static TOKEN_STORE_PATH: LazyLock<PathBuf> = LazyLock::new(|| {
    std::env::var("TOKEN_STORE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".talent_session_token"))
});

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;
    use std::path::PathBuf;

    // The LazyLock is already initialized by the time tests run, so exercise
    // the same resolution logic it uses.
    fn resolve() -> PathBuf {
        env::var("TOKEN_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".talent_session_token"))
    }

    #[test]
    #[serial]
    fn test_token_store_path_default() {
        let original = env::var("TOKEN_STORE_PATH").ok();
        unsafe {
            env::remove_var("TOKEN_STORE_PATH");
        }

        assert_eq!(resolve(), PathBuf::from(".talent_session_token"));

        if let Some(value) = original {
            unsafe {
                env::set_var("TOKEN_STORE_PATH", value);
            }
        }
    }

    #[test]
    #[serial]
    fn test_token_store_path_custom() {
        let original = env::var("TOKEN_STORE_PATH").ok();
        unsafe {
            env::set_var("TOKEN_STORE_PATH", "/tmp/custom_token");
        }

        assert_eq!(resolve(), PathBuf::from("/tmp/custom_token"));

        unsafe {
            match original {
                Some(value) => env::set_var("TOKEN_STORE_PATH", value),
                None => env::remove_var("TOKEN_STORE_PATH"),
            }
        }
    }
}
