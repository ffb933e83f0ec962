//! Byte-addressed non-volatile parameter store.
//!
//! The firmware sees a tiny byte-addressed array, like the EEPROM this
//! layout was designed around. Writes are silent best effort: the store
//! offers no failure signal to callers, the RAM image stays authoritative
//! until the next power cycle either way.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: the array is mirrored to an NVS blob, written through on
//! every byte change.
//! On host/test: RAM only, initialised to the erased-flash pattern.

use crate::app::ports::StoragePort;

/// Size of the parameter area. Only the first few bytes are laid out
/// today, the rest is headroom for future parameters.
pub const PARAM_AREA_SIZE: usize = 64;

#[cfg(target_os = "espidf")]
const NVS_NAMESPACE: &[u8] = b"boilerctl\0";
#[cfg(target_os = "espidf")]
const NVS_BLOB_KEY: &[u8] = b"params\0";

pub struct ParamStore {
    image: [u8; PARAM_AREA_SIZE],
    /// 0 when running without persistence (NVS unavailable).
    #[cfg(target_os = "espidf")]
    nvs: esp_idf_svc::sys::nvs_handle_t,
}

#[cfg(target_os = "espidf")]
impl ParamStore {
    /// Initialise NVS and load the parameter blob. A missing blob leaves
    /// the erased-flash pattern so first boot takes the built-in defaults.
    pub fn new() -> crate::error::Result<Self> {
        use crate::error::StorageError;
        use esp_idf_svc::sys::*;

        // SAFETY: called once from main() before the control loop.
        unsafe {
            let mut rc = nvs_flash_init();
            if rc == ESP_ERR_NVS_NO_FREE_PAGES as i32 || rc == ESP_ERR_NVS_NEW_VERSION_FOUND as i32
            {
                nvs_flash_erase();
                rc = nvs_flash_init();
            }
            if rc != ESP_OK as i32 {
                return Err(StorageError::FlashInit(rc).into());
            }

            let mut handle: nvs_handle_t = 0;
            let rc = nvs_open(
                NVS_NAMESPACE.as_ptr() as *const core::ffi::c_char,
                nvs_open_mode_t_NVS_READWRITE,
                &mut handle,
            );
            if rc != ESP_OK as i32 {
                return Err(StorageError::FlashInit(rc).into());
            }

            let mut image = [0xFFu8; PARAM_AREA_SIZE];
            let mut len = PARAM_AREA_SIZE;
            nvs_get_blob(
                handle,
                NVS_BLOB_KEY.as_ptr() as *const core::ffi::c_char,
                image.as_mut_ptr() as *mut core::ffi::c_void,
                &mut len,
            );

            Ok(Self { image, nvs: handle })
        }
    }

    /// RAM-only store for degraded boots where NVS is unusable. Reads
    /// the erased-flash pattern, forgets every write at power-off.
    pub fn volatile() -> Self {
        Self {
            image: [0xFF; PARAM_AREA_SIZE],
            nvs: 0,
        }
    }

    fn commit(&mut self) {
        use esp_idf_svc::sys::*;

        if self.nvs == 0 {
            return;
        }
        // SAFETY: handle opened in new(); main-loop access only.
        unsafe {
            let rc = nvs_set_blob(
                self.nvs,
                NVS_BLOB_KEY.as_ptr() as *const core::ffi::c_char,
                self.image.as_ptr() as *const core::ffi::c_void,
                PARAM_AREA_SIZE,
            );
            if rc == ESP_OK as i32 {
                nvs_commit(self.nvs);
            } else {
                // Best effort: the RAM image keeps the new value.
                log::warn!("param_store: blob write failed (rc={rc})");
            }
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl ParamStore {
    pub fn new() -> crate::error::Result<Self> {
        Ok(Self::volatile())
    }

    pub fn volatile() -> Self {
        Self {
            image: [0xFF; PARAM_AREA_SIZE],
        }
    }

    fn commit(&mut self) {}
}

impl StoragePort for ParamStore {
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.image
            .get(addr as usize)
            .copied()
            .unwrap_or(0xFF)
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        let Some(slot) = self.image.get_mut(addr as usize) else {
            return;
        };
        if *slot == value {
            return;
        }
        *slot = value;
        self.commit();
    }
}
