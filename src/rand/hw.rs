//! Cycle-counter entropy.

#[cfg(target_arch = "x86_64")]
pub const SOURCE_NAME: &str = "rdtsc";

#[cfg(target_arch = "aarch64")]
pub const SOURCE_NAME: &str = "cntvct_el0";

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub const SOURCE_NAME: &str = "system clock";

/// Raw counter reading. Low bits jitter between calls; the caller mixes.
#[inline(always)]
pub fn entropy() -> u64 {
    #[cfg(target_arch = "x86_64")]
    {
        unsafe { core::arch::x86_64::_rdtsc() }
    }

    #[cfg(target_arch = "aarch64")]
    {
        let cnt: u64;
        unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
        cnt
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}
