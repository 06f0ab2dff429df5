//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the token in a single file on desktop so a
//! session survives app restarts.
//!
//! ```text
//! <base_dir>/
//! └── token              # the raw credential token, nothing else
//! ```
//!
//! The desktop app joins `dirs::data_dir()` with `lessons` to get a platform-appropriate
//! base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/lessons/` |
//! | Linux | `~/.local/share/lessons/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\lessons\` |

use std::path::PathBuf;

use crate::tokens::{TokenStore, TOKEN_KEY};

#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn save(&self, token: &str) {
        let path = self.token_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, token) {
            tracing::warn!("Failed to persist token to {}: {}", path.display(), e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove stored token: {}", e),
        }
    }
}
