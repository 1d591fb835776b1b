//! The SLCR register gateway.

use core::ptr;

use crate::{mio, regs};

const SLCR_LOCK_KEY: u32 = 0x767B;
const SLCR_UNLOCK_KEY: u32 = 0xDF0D;

const IDCODE_MASK: u32 = 0x1F000;
const IDCODE_SHIFT: u32 = 12;

/// `REBOOT_STATUS` bits the FSBL inspects on a soft reboot; while any of
/// them is set it skips loading the bitstream.
const REBOOT_STATE_MASK: u32 = 0x0F00_0000;

/// Level shifter enable patterns: PS-to-PL only, and all four directions.
const LVL_SHFTR_PS_TO_PL: u32 = 0xA;
const LVL_SHFTR_ALL: u32 = 0xF;

/// Driver for the SLCR block.
///
/// Tracks the write-protection state so that the lock and unlock keys are
/// only written on an actual state change. All methods that touch
/// protected registers unlock the block first and re-lock it before
/// returning, with the single exception of [`reset_cpu`](Slcr::reset_cpu).
pub struct Slcr {
    base: *mut u32,
    locked: bool,
}

impl Slcr {
    /// Creates the driver. The block starts out write-protected, which is
    /// the state hardware and boot ROM leave it in.
    pub fn new(_slcr: regs::SLCR) -> Self {
        Slcr {
            base: regs::SLCR_BASE as *mut u32,
            locked: true,
        }
    }

    /// Driver over an alternate mapping of the register block.
    #[cfg(test)]
    pub(crate) fn with_base(base: *mut u32) -> Self {
        Slcr { base, locked: true }
    }

    fn read_reg(&self, offset: usize) -> u32 {
        unsafe { ptr::read_volatile((self.base as usize + offset) as *const u32) }
    }

    fn write_reg(&mut self, offset: usize, value: u32) {
        unsafe { ptr::write_volatile((self.base as usize + offset) as *mut u32, value) }
    }

    /// Re-arms SLCR write protection. No-op when already locked.
    pub fn lock(&mut self) {
        if !self.locked {
            self.write_reg(regs::SLCR_LOCK, SLCR_LOCK_KEY);
            self.locked = true;
        }
    }

    /// Lifts SLCR write protection. No-op when already unlocked.
    pub fn unlock(&mut self) {
        if self.locked {
            self.write_reg(regs::SLCR_UNLOCK, SLCR_UNLOCK_KEY);
            self.locked = false;
        }
    }

    /// Soft-resets the whole PS.
    ///
    /// The SLCR is left unlocked; the reset takes effect before that could
    /// matter to anyone. Callers should not expect this to return.
    pub fn reset_cpu(&mut self) {
        self.unlock();

        // The FSBL refuses to reload the bitstream after a soft reboot
        // while these bits are set.
        let status = self.read_reg(regs::REBOOT_STATUS);
        self.write_reg(regs::REBOOT_STATUS, status & !REBOOT_STATE_MASK);

        self.write_reg(regs::PSS_RST_CTRL, 1);
    }

    /// Programs the clocks of one of the two gigabit Ethernet MACs.
    ///
    /// `clk` goes to the GEMx reference clock control (source select and
    /// divisors), `rclk` to the GEMx rx clock control. Ids other than 0
    /// and 1 are diagnosed and otherwise ignored.
    pub fn gem_clk_setup(&mut self, gem_id: u32, rclk: u32, clk: u32) {
        self.unlock();

        match gem_id {
            0 => {
                self.write_reg(regs::GEM0_CLK_CTRL, clk);
                self.write_reg(regs::GEM0_RCLK_CTRL, rclk);
            }
            1 => {
                self.write_reg(regs::GEM1_CLK_CTRL, clk);
                self.write_reg(regs::GEM1_RCLK_CTRL, rclk);
            }
            _ => warn!("Non-existent GEM id {}", gem_id),
        }

        self.lock();
    }

    /// Shuts the PS-PL configuration path down: holds every PL AXI
    /// interface in reset and drops the level shifters back to the
    /// PS-to-PL pair.
    pub fn devcfg_disable(&mut self) {
        self.unlock();

        self.write_reg(regs::FPGA_RST_CTRL, 0xFFFF_FFFF);
        self.write_reg(regs::LVL_SHFTR_EN, LVL_SHFTR_PS_TO_PL);

        self.lock();
    }

    /// Brings the PS-PL configuration path up. The level shifters must be
    /// enabled before the AXI interface resets are released; keep this
    /// order.
    pub fn devcfg_enable(&mut self) {
        self.unlock();

        self.write_reg(regs::LVL_SHFTR_EN, LVL_SHFTR_ALL);
        self.write_reg(regs::FPGA_RST_CTRL, 0);

        self.lock();
    }

    /// Raw value of the boot-mode strapping register.
    pub fn boot_mode(&self) -> u32 {
        self.read_reg(regs::BOOT_MODE)
    }

    /// Device field of the PS IDCODE.
    pub fn idcode(&self) -> u32 {
        (self.read_reg(regs::PSS_IDCODE) & IDCODE_MASK) >> IDCODE_SHIFT
    }

    /// Counts how many of `periph`'s MIO pins are currently routed to it.
    ///
    /// Returns 0 for names missing from the descriptor table, without
    /// reading any pin register.
    pub fn mio_pin_status(&self, periph: &str) -> usize {
        let desc = match mio::find(periph) {
            Some(desc) => desc,
            None => return 0,
        };

        let mut routed = 0;
        for &pin in desc.pins {
            debug_assert!(pin < regs::MIO_PIN_COUNT);
            let val = self.read_reg(regs::MIO_PIN_00 + 4 * pin);
            if val & desc.mask == desc.check_val {
                routed += 1;
            }
        }
        routed
    }
}
