//! Tolk screen reader backend.
//!
//! Tolk multiplexes NVDA, JAWS, and the other common Windows screen readers
//! behind one C API and can fall back to SAPI when none is running. The
//! library is optional, so it is bound at runtime rather than linked.

use std::path::PathBuf;

use libloading::Library;
use tracing::{debug, info, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::provider::{ProviderLoader, ScreenReaderProvider};

type LoadFn = unsafe extern "system" fn();
type UnloadFn = unsafe extern "system" fn();
type OutputFn = unsafe extern "system" fn(text: *const u16, interrupt: bool) -> bool;
type DetectScreenReaderFn = unsafe extern "system" fn() -> *const u16;
type TrySapiFn = unsafe extern "system" fn(try_sapi: bool);

/// Binds `Tolk.dll` from a configured path.
#[derive(Clone, Debug)]
pub struct TolkLoader {
    library_path: PathBuf,
}

impl TolkLoader {
    pub fn from_config(config: &SpeechConfig) -> Self {
        Self {
            library_path: config.library_path.clone(),
        }
    }
}

impl ProviderLoader for TolkLoader {
    type Provider = TolkLibrary;

    fn open(&self) -> Result<Option<TolkLibrary>, SpeechError> {
        // SAFETY: Tolk's DllMain performs no initialization; Tolk_Load does.
        let library = match unsafe { Library::new(&self.library_path) } {
            Ok(library) => library,
            Err(err) => {
                info!(
                    path = %self.library_path.display(),
                    error = %err,
                    "Tolk not found, screen reader support disabled"
                );
                return Ok(None);
            }
        };

        // Dropping `library` on an early return unloads the DLL.
        let load = required::<LoadFn>(&library, "Tolk_Load")?;
        let unload = required::<UnloadFn>(&library, "Tolk_Unload")?;
        let output = required::<OutputFn>(&library, "Tolk_Output")?;
        let detect_screen_reader =
            optional::<DetectScreenReaderFn>(&library, "Tolk_DetectScreenReader");
        let try_sapi = optional::<TrySapiFn>(&library, "Tolk_TrySAPI");

        Ok(Some(TolkLibrary {
            load,
            unload,
            output,
            detect_screen_reader,
            try_sapi,
            loaded: false,
            _library: library,
        }))
    }
}

fn required<T: Copy>(library: &Library, symbol: &'static str) -> Result<T, SpeechError> {
    optional(library, symbol).ok_or_else(|| {
        warn!(symbol, "Tolk is missing a required entry point");
        SpeechError::MissingEntryPoint { symbol }
    })
}

fn optional<T: Copy>(library: &Library, symbol: &'static str) -> Option<T> {
    let mut name = Vec::with_capacity(symbol.len() + 1);
    name.extend_from_slice(symbol.as_bytes());
    name.push(0);

    // SAFETY: `T` is one of the function pointer aliases above, matching the
    // declarations in Tolk.h. The pointer is only called while `_library` is
    // held by the returned `TolkLibrary`.
    match unsafe { library.get::<T>(&name) } {
        Ok(symbol) => Some(*symbol),
        Err(err) => {
            debug!(symbol, error = %err, "Tolk entry point unavailable");
            None
        }
    }
}

/// A bound Tolk library.
pub struct TolkLibrary {
    load: LoadFn,
    unload: UnloadFn,
    output: OutputFn,
    detect_screen_reader: Option<DetectScreenReaderFn>,
    try_sapi: Option<TrySapiFn>,
    loaded: bool,
    // Declared last so the entry points above are never dangling.
    _library: Library,
}

impl ScreenReaderProvider for TolkLibrary {
    fn load(&mut self) {
        if !self.loaded {
            // SAFETY: bound from the live library held in `_library`.
            unsafe { (self.load)() };
            self.loaded = true;
        }
    }

    fn unload(&mut self) {
        if self.loaded {
            // SAFETY: bound from the live library held in `_library`.
            unsafe { (self.unload)() };
            self.loaded = false;
        }
    }

    fn output(&mut self, text: &[u16], interrupt: bool) -> bool {
        if !self.loaded || text.last() != Some(&0) {
            return false;
        }
        // SAFETY: `text` is NUL-terminated and outlives the call.
        unsafe { (self.output)(text.as_ptr(), interrupt) }
    }

    fn detect_screen_reader(&self) -> Option<String> {
        let detect = self.detect_screen_reader?;
        // SAFETY: bound from the live library held in `_library`.
        let name = unsafe { detect() };
        if name.is_null() {
            return None;
        }

        // SAFETY: Tolk returns a NUL-terminated static string.
        let len = unsafe {
            let mut len = 0;
            while *name.add(len) != 0 {
                len += 1;
            }
            len
        };
        // SAFETY: `name` is non-null and the `len` units before its NUL were
        // just read above.
        let wide = unsafe { std::slice::from_raw_parts(name, len) };
        Some(String::from_utf16_lossy(wide))
    }

    fn enable_fallback(&mut self, enable: bool) -> bool {
        match self.try_sapi {
            Some(try_sapi) => {
                // SAFETY: bound from the live library held in `_library`.
                unsafe { try_sapi(enable) };
                true
            }
            None => false,
        }
    }
}

impl Drop for TolkLibrary {
    fn drop(&mut self) {
        self.unload();
    }
}
