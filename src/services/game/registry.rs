//! Registry access. The host owns the real registry bindings; this module only
//! names the values the plugin needs and the shape of a reader.

use crate::types::errors::PluginResult;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hive {
    #[serde(rename = "HKEY_LOCAL_MACHINE")]
    LocalMachine,
    #[serde(rename = "HKEY_CURRENT_USER")]
    CurrentUser,
}

impl Hive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hive::LocalMachine => "HKEY_LOCAL_MACHINE",
            Hive::CurrentUser => "HKEY_CURRENT_USER",
        }
    }
}

/// Reads string values from the OS registry.
///
/// `Ok(None)` means the value does not exist. Errors are reserved for reads
/// that failed for another reason (access denied, wrong value type).
pub trait RegistryReader: Send + Sync {
    fn read_string(&self, hive: Hive, key: &str, value: &str) -> PluginResult<Option<String>>;
}

/// Registry with no values. Used on platforms without a registry so every
/// lookup takes its fallback.
pub struct EmptyRegistry;

impl RegistryReader for EmptyRegistry {
    fn read_string(
        &self,
        _hive: Hive,
        _key: &str,
        _value: &str,
    ) -> PluginResult<Option<String>> {
        Ok(None)
    }
}

#[cfg(windows)]
pub use windows_impl::WindowsRegistry;

#[cfg(windows)]
mod windows_impl {
    use super::{Hive, RegistryReader};
    use crate::types::errors::{PluginError, PluginResult};
    use std::ptr;
    use windows_sys::Win32::Foundation::{ERROR_FILE_NOT_FOUND, ERROR_SUCCESS};
    use windows_sys::Win32::System::Registry::{
        RegGetValueW, HKEY, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, RRF_RT_REG_SZ,
    };

    /// `RegistryReader` over `RegGetValueW`.
    pub struct WindowsRegistry;

    fn to_wide(s: &str) -> Vec<u16> {
        s.encode_utf16().chain(std::iter::once(0)).collect()
    }

    fn root_key(hive: Hive) -> HKEY {
        match hive {
            Hive::LocalMachine => HKEY_LOCAL_MACHINE,
            Hive::CurrentUser => HKEY_CURRENT_USER,
        }
    }

    impl RegistryReader for WindowsRegistry {
        fn read_string(&self, hive: Hive, key: &str, value: &str) -> PluginResult<Option<String>> {
            let root = root_key(hive);
            let key_w = to_wide(key);
            let value_w = to_wide(value);

            // First call sizes the buffer, second call fills it.
            let mut size: u32 = 0;
            let status = unsafe {
                RegGetValueW(
                    root,
                    key_w.as_ptr(),
                    value_w.as_ptr(),
                    RRF_RT_REG_SZ,
                    ptr::null_mut(),
                    ptr::null_mut(),
                    &mut size,
                )
            };
            if status == ERROR_FILE_NOT_FOUND {
                return Ok(None);
            }
            if status != ERROR_SUCCESS {
                return Err(PluginError::RegistryKeyMissing(format!(
                    "{}\\{key}\\{value} (error {status})",
                    hive.as_str()
                )));
            }

            let mut buffer: Vec<u16> = vec![0; (size as usize).div_ceil(2)];
            let status = unsafe {
                RegGetValueW(
                    root,
                    key_w.as_ptr(),
                    value_w.as_ptr(),
                    RRF_RT_REG_SZ,
                    ptr::null_mut(),
                    buffer.as_mut_ptr().cast(),
                    &mut size,
                )
            };
            if status != ERROR_SUCCESS {
                return Err(PluginError::RegistryKeyMissing(format!(
                    "{}\\{key}\\{value} (error {status})",
                    hive.as_str()
                )));
            }

            let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
            Ok(Some(String::from_utf16_lossy(&buffer[..len])))
        }
    }
}

/// The reader this platform ships with.
pub fn system_registry() -> std::sync::Arc<dyn RegistryReader> {
    #[cfg(windows)]
    {
        std::sync::Arc::new(WindowsRegistry)
    }
    #[cfg(not(windows))]
    {
        std::sync::Arc::new(EmptyRegistry)
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
