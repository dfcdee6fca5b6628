use thiserror::Error;

use crate::shared::types::DeviceRecord;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("device index {index} out of range ({len} devices)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The dashboard's whole mutable state: one theme flag plus the device
/// list. `name` and `usage_kwh` never change after seeding; `status` only
/// changes through [`DashboardState::toggle_device`].
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    dark_mode: bool,
    devices: Vec<DeviceRecord>,
}

impl DashboardState {
    /// Fresh state as mounted by the host: light theme, four devices.
    pub fn seed() -> Self {
        Self {
            dark_mode: false,
            devices: vec![
                DeviceRecord::new("Air Conditioner", true, 4.5),
                DeviceRecord::new("Heater", false, 2.1),
                DeviceRecord::new("Refrigerator", true, 1.8),
                DeviceRecord::new("LED Lights", false, 0.9),
            ],
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn devices(&self) -> &[DeviceRecord] {
        &self.devices
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Flips the on/off status of the device at `index`. The check runs
    /// before any write, so a rejected toggle leaves the list untouched.
    pub fn toggle_device(&mut self, index: usize) -> Result<(), DashboardError> {
        let len = self.devices.len();
        let device = self
            .devices
            .get_mut(index)
            .ok_or(DashboardError::IndexOutOfRange { index, len })?;
        device.status = !device.status;
        Ok(())
    }

    /// Number of devices currently on.
    pub fn active_count(&self) -> usize {
        self.devices.iter().filter(|d| d.status).count()
    }

    /// Combined draw of the devices currently on.
    pub fn active_usage_kwh(&self) -> f32 {
        self.devices
            .iter()
            .filter(|d| d.status)
            .map(|d| d.usage_kwh)
            .sum()
    }

    /// Combined draw if every device were on. Upper bound for the gauge.
    pub fn total_usage_kwh(&self) -> f32 {
        self.devices.iter().map(|d| d.usage_kwh).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_matches_fixture() {
        let state = DashboardState::seed();
        assert!(!state.dark_mode());
        let devices = state.devices();
        assert_eq!(devices.len(), 4);
        let expected = [
            ("Air Conditioner", true, 4.5f32),
            ("Heater", false, 2.1),
            ("Refrigerator", true, 1.8),
            ("LED Lights", false, 0.9),
        ];
        for (d, (name, status, usage)) in devices.iter().zip(expected) {
            assert_eq!(d.name, name);
            assert_eq!(d.status, status);
            assert_eq!(d.usage_kwh, usage);
        }
    }

    #[test]
    fn toggle_theme_is_an_involution() {
        let mut state = DashboardState::seed();
        state.toggle_theme();
        assert!(state.dark_mode());
        state.toggle_theme();
        assert!(!state.dark_mode());
        assert_eq!(state, DashboardState::seed());
    }

    #[test]
    fn toggle_theme_leaves_devices_alone() {
        let mut state = DashboardState::seed();
        state.toggle_theme();
        assert_eq!(state.devices(), DashboardState::seed().devices());
    }

    #[test]
    fn toggle_device_flips_only_the_target() {
        let mut state = DashboardState::seed();
        state.toggle_device(1).unwrap();
        let devices = state.devices();
        assert!(devices[1].status, "Heater should now be on");
        let seed = DashboardState::seed();
        for i in [0, 2, 3] {
            assert_eq!(devices[i], seed.devices()[i]);
        }
        assert_eq!(devices[1].name, "Heater");
        assert_eq!(devices[1].usage_kwh, 2.1);
    }

    #[test]
    fn toggle_device_twice_restores_the_record() {
        let mut state = DashboardState::seed();
        state.toggle_device(2).unwrap();
        state.toggle_device(2).unwrap();
        assert_eq!(state, DashboardState::seed());
    }

    #[test]
    fn toggle_device_out_of_range_is_rejected() {
        let mut state = DashboardState::seed();
        for index in [4usize, 5, usize::MAX] {
            let err = state.toggle_device(index).unwrap_err();
            assert_eq!(err, DashboardError::IndexOutOfRange { index, len: 4 });
        }
        assert_eq!(state, DashboardState::seed());
    }

    #[test]
    fn summary_accessors_over_seed() {
        let state = DashboardState::seed();
        assert_eq!(state.active_count(), 2);
        assert!((state.active_usage_kwh() - 6.3).abs() < 1e-5);
        assert!((state.total_usage_kwh() - 9.3).abs() < 1e-5);
    }
}
