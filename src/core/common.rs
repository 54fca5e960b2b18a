//! Identifiers and resource vectors shared by applications and VMs.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

pub type AppId = u64;
pub type VmId = u64;

#[derive(Clone, Copy, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RuntimeResources {
    pub cpu: u64,
    pub ram: u64,
}

impl RuntimeResources {
    pub fn new(cpu: u64, ram: u64) -> Self {
        Self { cpu, ram }
    }

    /// True if `self + extra` stays within `limit` in both dimensions.
    pub fn fits_with(&self, extra: &RuntimeResources, limit: &RuntimeResources) -> bool {
        fits_dimension(self.cpu, extra.cpu, limit.cpu)
            && fits_dimension(self.ram, extra.ram, limit.ram)
    }

    pub fn has_zero_dimension(&self) -> bool {
        self.cpu == 0 || self.ram == 0
    }
}

// Overflowing sum never fits.
fn fits_dimension(used: u64, extra: u64, limit: u64) -> bool {
    used.checked_add(extra).map_or(false, |total| total <= limit)
}

impl AddAssign<&RuntimeResources> for RuntimeResources {
    fn add_assign(&mut self, other: &RuntimeResources) {
        self.cpu += other.cpu;
        self.ram += other.ram;
    }
}

#[cfg(test)]
mod tests {
    use super::RuntimeResources;

    #[test]
    fn test_fits_requires_both_dimensions() {
        let limit = RuntimeResources::new(10, 20);
        let used = RuntimeResources::new(3, 4);

        assert!(used.fits_with(&RuntimeResources::new(7, 16), &limit));
        // spare cpu, not enough ram
        assert!(!used.fits_with(&RuntimeResources::new(1, 17), &limit));
        // spare ram, not enough cpu
        assert!(!used.fits_with(&RuntimeResources::new(8, 1), &limit));
    }

    #[test]
    fn test_fits_does_not_overflow() {
        let limit = RuntimeResources::new(u64::MAX, u64::MAX);
        let used = RuntimeResources::new(u64::MAX / 2 + 10, 1);
        assert!(!used.fits_with(&RuntimeResources::new(u64::MAX / 2 + 10, 1), &limit));
        assert!(!used.fits_with(&RuntimeResources::new(1, u64::MAX), &limit));
        assert!(used.fits_with(&RuntimeResources::new(u64::MAX / 2 - 10, 1), &limit));
    }

    #[test]
    fn test_add_assign() {
        let mut usage = RuntimeResources::default();
        usage += &RuntimeResources::new(2, 5);
        usage += &RuntimeResources::new(1, 1);
        assert_eq!(RuntimeResources::new(3, 6), usage);
    }
}
