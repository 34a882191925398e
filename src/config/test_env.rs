//! Isolated configuration environment for unit tests

use std::ffi::OsString;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes environment access across unit tests in this crate
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Variables that steer config discovery, captured for restore
struct EnvState {
    vars: Vec<(OsString, Option<OsString>)>,
}

impl EnvState {
    fn capture() -> Self {
        let mut keys: Vec<OsString> = vec!["HOME".into(), "XDG_CONFIG_HOME".into()];
        keys.extend(
            std::env::vars_os()
                .map(|(key, _)| key)
                .filter(|key| key.to_string_lossy().starts_with("REPOHASH_")),
        );
        let vars = keys
            .into_iter()
            .map(|key| {
                let value = std::env::var_os(&key);
                (key, value)
            })
            .collect();
        Self { vars }
    }

    fn restore(self) {
        let added: Vec<OsString> = std::env::vars_os()
            .map(|(key, _)| key)
            .filter(|key| key.to_string_lossy().starts_with("REPOHASH_"))
            .collect();
        for key in added {
            std::env::remove_var(key);
        }
        for (key, value) in self.vars {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME in a fresh temp dir and no REPOHASH_* variables
pub(crate) fn with_isolated_config<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let state = EnvState::capture();
    let home = TempDir::new().unwrap();

    for (key, _) in &state.vars {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home.path());
    std::env::set_var("XDG_CONFIG_HOME", home.path().join("config"));

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    state.restore();

    match result {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
