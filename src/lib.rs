//! Low-level System Level Control Registers (SLCR) driver for the Xilinx
//! Zynq-7000 SoC.
//!
//! The SLCR block controls SoC-wide clocking, reset and pin multiplexing,
//! and sits behind a write-protection key: a magic value has to be written
//! to the unlock register before any protected register accepts a write,
//! and the matching lock value re-arms the protection. The [`Slcr`] driver
//! owns that protocol: it tracks the lock state, lifts the protection
//! around each register sequence and restores it on the way out.
//!
//! This crate targets the early-boot environment (first-stage loaders and
//! similar), where the SLCR is touched from a single core with nothing
//! else running. The driver is deliberately `!Send`/`!Sync`.
//!
//! ```no_run
//! use zynq_slcr::{Slcr, SLCR};
//!
//! let mut slcr = Slcr::new(SLCR::take().unwrap());
//! slcr.devcfg_enable();
//! let mode = slcr.boot_mode();
//! ```
//!
//! ## Feature Flags
#![doc = document_features::document_features!()]
#![no_std]

// MUST be the first module
mod fmt;

mod mio;
mod regs;
mod slcr;

pub use self::regs::{SLCR, SLCR_BASE};
pub use self::slcr::Slcr;
