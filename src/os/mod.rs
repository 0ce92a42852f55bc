//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system entropy source used for key generation.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same
//! `sys_random(&mut [u8]) -> Result<()>` function.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
