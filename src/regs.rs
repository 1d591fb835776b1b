//! SLCR register map.
//!
//! Byte offsets into the block at [`SLCR_BASE`], per the Zynq-7000 TRM
//! (ug585). Only the registers this crate touches are listed; all of them
//! are 32 bits wide.

/// Physical base address of the SLCR block.
pub const SLCR_BASE: usize = 0xF800_0000;

pub(crate) const SLCR_LOCK: usize = 0x004;
pub(crate) const SLCR_UNLOCK: usize = 0x008;

pub(crate) const GEM0_RCLK_CTRL: usize = 0x138;
pub(crate) const GEM1_RCLK_CTRL: usize = 0x13C;
pub(crate) const GEM0_CLK_CTRL: usize = 0x140;
pub(crate) const GEM1_CLK_CTRL: usize = 0x144;

/// PS software reset control.
pub(crate) const PSS_RST_CTRL: usize = 0x200;
/// PL AXI interface reset control.
pub(crate) const FPGA_RST_CTRL: usize = 0x240;

pub(crate) const REBOOT_STATUS: usize = 0x258;
pub(crate) const BOOT_MODE: usize = 0x25C;

pub(crate) const PSS_IDCODE: usize = 0x530;

/// First MIO pin control register; one register per pin, stride 4.
pub(crate) const MIO_PIN_00: usize = 0x700;
pub(crate) const MIO_PIN_COUNT: usize = 54;

/// PS-PL level shifter enable.
pub(crate) const LVL_SHFTR_EN: usize = 0x900;

static mut SLCR_TAKEN: bool = false;

/// Ownership token for the SLCR block.
///
/// Holding the token is the permission to construct the
/// [`Slcr`](crate::Slcr) driver; there is at most one live token unless
/// [`steal`](SLCR::steal) is used.
pub struct SLCR {
    _private: (),
}

impl SLCR {
    /// Returns the token the first time it is called, `None` afterwards.
    pub fn take() -> Option<SLCR> {
        critical_section::with(|_| unsafe {
            if SLCR_TAKEN {
                None
            } else {
                SLCR_TAKEN = true;
                Some(SLCR { _private: () })
            }
        })
    }

    /// Unconditionally creates a new token.
    ///
    /// # Safety
    ///
    /// The caller must ensure no other token, and no driver built from
    /// one, is in use at the same time.
    pub unsafe fn steal() -> SLCR {
        SLCR { _private: () }
    }
}
