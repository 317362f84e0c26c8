//! Device registration view controller
//!
//! A pure state machine: every operation mutates the controller and returns
//! the [`RenderInstruction`]s a front end must apply to its surface. Nothing
//! here touches a terminal, so the whole workflow is testable without one.

use crate::error::FormError;
use crate::types::{AccessLevel, AccessLogEntry, DeviceEntry, GateAction};

/// Visibility of the add-device dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    Visible,
}

/// One step the dashboard surface must perform
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInstruction {
    /// Start the dialog entrance transition
    ShowDialog,
    /// Start the dialog exit transition
    HideDialog,
    /// Clear form inputs and any shown error
    ResetForm,
    /// Insert a device card at the top of the device list
    PrependDevice(DeviceEntry),
    /// Insert a row at the top of the access log
    PrependAccessLog(AccessLogEntry),
    /// Replace the counter text
    SetDeviceCount(String),
    /// Swap icon placeholders for rendered glyphs
    ReplaceIcons,
    /// Show a validation message inside the dialog
    ShowFormError(FormError),
}

/// In-progress dialog input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceForm {
    pub name: String,
    pub mac_address: String,
    pub access_level: Option<AccessLevel>,
}

impl DeviceForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.mac_address.is_empty() && self.access_level.is_none()
    }
}

/// A validated registration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSubmission {
    name: String,
    mac_address: String,
    access_level: AccessLevel,
}

impl DeviceSubmission {
    /// Validate raw input the way a browser `required` form does: both text
    /// fields must be non-blank and one access level must be chosen.
    /// Input is trimmed; the MAC format is not checked.
    pub fn new(
        name: &str,
        mac_address: &str,
        access_level: Option<AccessLevel>,
    ) -> Result<Self, FormError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::NameRequired);
        }
        let mac_address = mac_address.trim();
        if mac_address.is_empty() {
            return Err(FormError::MacAddressRequired);
        }
        let access_level = access_level.ok_or(FormError::AccessLevelRequired)?;

        Ok(Self {
            name: name.to_string(),
            mac_address: mac_address.to_string(),
            access_level,
        })
    }

    pub fn from_form(form: &DeviceForm) -> Result<Self, FormError> {
        Self::new(&form.name, &form.mac_address, form.access_level)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mac_address(&self) -> &str {
        &self.mac_address
    }

    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }
}

/// Owns the dialog state, the form and the active-device counter
#[derive(Debug, Clone)]
pub struct ViewController {
    dialog: DialogState,
    active_devices: u32,
    form: DeviceForm,
}

impl ViewController {
    /// Create a controller whose counter starts at `seed`
    pub fn new(seed: u32) -> Self {
        Self {
            dialog: DialogState::Hidden,
            active_devices: seed,
            form: DeviceForm::default(),
        }
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog == DialogState::Visible
    }

    pub fn active_devices(&self) -> u32 {
        self.active_devices
    }

    pub fn form(&self) -> &DeviceForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut DeviceForm {
        &mut self.form
    }

    /// "{count} Active"
    pub fn device_count_label(&self) -> String {
        format!("{} Active", self.active_devices)
    }

    pub fn open_dialog(&mut self) -> Vec<RenderInstruction> {
        self.dialog = DialogState::Visible;
        vec![RenderInstruction::ShowDialog]
    }

    /// Hide the dialog and clear the form. Safe to call when already hidden.
    pub fn close_dialog(&mut self) -> Vec<RenderInstruction> {
        self.dialog = DialogState::Hidden;
        self.form.clear();
        vec![RenderInstruction::HideDialog, RenderInstruction::ResetForm]
    }

    /// Register a device from raw input.
    ///
    /// On a validation failure only [`RenderInstruction::ShowFormError`] is
    /// returned and no state changes, so the dialog stays open with its input.
    pub fn submit_device(
        &mut self,
        name: &str,
        mac_address: &str,
        access_level: Option<AccessLevel>,
    ) -> Vec<RenderInstruction> {
        match DeviceSubmission::new(name, mac_address, access_level) {
            Ok(submission) => self.register(submission),
            Err(e) => vec![RenderInstruction::ShowFormError(e)],
        }
    }

    /// Register a device from the dialog's own form
    pub fn submit_form(&mut self) -> Vec<RenderInstruction> {
        match DeviceSubmission::from_form(&self.form) {
            Ok(submission) => self.register(submission),
            Err(e) => vec![RenderInstruction::ShowFormError(e)],
        }
    }

    /// Register an already validated device.
    ///
    /// Card, log row and counter always change together.
    pub fn register(&mut self, submission: DeviceSubmission) -> Vec<RenderInstruction> {
        let device = DeviceEntry::pending(
            submission.name,
            submission.mac_address,
            submission.access_level,
        );
        let log = AccessLogEntry::device_added(&device);
        self.active_devices = self.active_devices.saturating_add(1);

        let mut instructions = vec![
            RenderInstruction::PrependDevice(device),
            RenderInstruction::PrependAccessLog(log),
            RenderInstruction::SetDeviceCount(self.device_count_label()),
        ];
        instructions.extend(self.close_dialog());
        instructions.push(RenderInstruction::ReplaceIcons);
        instructions
    }

    /// Log an operator gate command. The counter is untouched.
    pub fn record_gate_action(&mut self, action: GateAction) -> Vec<RenderInstruction> {
        vec![
            RenderInstruction::PrependAccessLog(AccessLogEntry::gate(action)),
            RenderInstruction::ReplaceIcons,
        ]
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccessLogKind, DeviceStatus};

    fn living_room(controller: &mut ViewController) -> Vec<RenderInstruction> {
        controller.submit_device(
            "Living Room Hub",
            "AA:BB:CC:11:22:33",
            Some(AccessLevel::Guest),
        )
    }

    #[test]
    fn test_initial_state() {
        let controller = ViewController::new(3);
        assert_eq!(controller.dialog(), DialogState::Hidden);
        assert_eq!(controller.device_count_label(), "3 Active");
        assert!(controller.form().is_empty());
    }

    #[test]
    fn test_open_dialog_shows() {
        let mut controller = ViewController::new(3);
        let instructions = controller.open_dialog();
        assert_eq!(instructions, vec![RenderInstruction::ShowDialog]);
        assert!(controller.is_dialog_visible());
    }

    #[test]
    fn test_close_dialog_clears_form() {
        let mut controller = ViewController::new(3);
        controller.open_dialog();
        controller.form_mut().name = "Porch Camera".into();
        controller.form_mut().access_level = Some(AccessLevel::Admin);

        let instructions = controller.close_dialog();
        assert_eq!(
            instructions,
            vec![RenderInstruction::HideDialog, RenderInstruction::ResetForm]
        );
        assert!(!controller.is_dialog_visible());
        assert!(controller.form().is_empty());
    }

    #[test]
    fn test_close_dialog_twice_matches_once() {
        let mut once = ViewController::new(3);
        once.open_dialog();
        let first = once.close_dialog();

        let mut twice = ViewController::new(3);
        twice.open_dialog();
        twice.close_dialog();
        let second = twice.close_dialog();

        assert_eq!(first, second);
        assert_eq!(once.dialog(), twice.dialog());
        assert_eq!(once.form(), twice.form());
        assert_eq!(once.active_devices(), twice.active_devices());
    }

    #[test]
    fn test_open_then_close_leaves_counter() {
        let mut controller = ViewController::new(3);
        let mut all = controller.open_dialog();
        all.extend(controller.close_dialog());

        assert_eq!(controller.active_devices(), 3);
        assert!(!all.iter().any(|i| matches!(
            i,
            RenderInstruction::PrependDevice(_)
                | RenderInstruction::PrependAccessLog(_)
                | RenderInstruction::SetDeviceCount(_)
        )));
    }

    #[test]
    fn test_submit_living_room_hub() {
        let mut controller = ViewController::new(3);
        controller.open_dialog();
        let instructions = living_room(&mut controller);

        assert_eq!(instructions.len(), 6);
        match &instructions[0] {
            RenderInstruction::PrependDevice(device) => {
                assert_eq!(device.name, "Living Room Hub");
                assert_eq!(device.mac_line(), "MAC: AA:BB:CC:11:22:33");
                assert_eq!(device.status, DeviceStatus::Pending);
                assert_eq!(device.access_level, AccessLevel::Guest);
            }
            other => panic!("expected PrependDevice, got {:?}", other),
        }
        match &instructions[1] {
            RenderInstruction::PrependAccessLog(entry) => {
                assert_eq!(entry.message, "New device added: Living Room Hub");
                assert!(entry.detail.contains("AA:BB:CC:11:22:33"));
                assert_eq!(entry.kind, AccessLogKind::DeviceAdded);
            }
            other => panic!("expected PrependAccessLog, got {:?}", other),
        }
        assert_eq!(
            instructions[2],
            RenderInstruction::SetDeviceCount("4 Active".to_string())
        );
        assert_eq!(instructions[3], RenderInstruction::HideDialog);
        assert_eq!(instructions[4], RenderInstruction::ResetForm);
        assert_eq!(instructions[5], RenderInstruction::ReplaceIcons);
        assert!(!controller.is_dialog_visible());
    }

    #[test]
    fn test_counter_tracks_successful_submissions() {
        let mut controller = ViewController::new(3);
        for n in 1..=5u32 {
            living_room(&mut controller);
            assert_eq!(controller.active_devices(), 3 + n);
        }
        controller.submit_device("", "AA", Some(AccessLevel::Admin));
        assert_eq!(controller.active_devices(), 8);
    }

    #[test]
    fn test_submit_trims_input() {
        let mut controller = ViewController::new(0);
        let instructions =
            controller.submit_device("  Garage Remote ", " 01:02 ", Some(AccessLevel::Resident));
        match &instructions[0] {
            RenderInstruction::PrependDevice(device) => {
                assert_eq!(device.name, "Garage Remote");
                assert_eq!(device.mac_address, "01:02");
            }
            other => panic!("expected PrependDevice, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_access_level_is_rejected() {
        let mut controller = ViewController::new(3);
        controller.open_dialog();
        controller.form_mut().name = "Living Room Hub".into();
        controller.form_mut().mac_address = "AA:BB:CC:11:22:33".into();

        let instructions = controller.submit_form();
        assert_eq!(
            instructions,
            vec![RenderInstruction::ShowFormError(FormError::AccessLevelRequired)]
        );
        assert!(controller.is_dialog_visible());
        assert_eq!(controller.active_devices(), 3);
        assert_eq!(controller.form().name, "Living Room Hub");
    }

    #[test]
    fn test_blank_fields_are_rejected_in_order() {
        assert_eq!(
            DeviceSubmission::new("   ", "", None),
            Err(FormError::NameRequired)
        );
        assert_eq!(
            DeviceSubmission::new("Hub", " ", None),
            Err(FormError::MacAddressRequired)
        );
        assert_eq!(
            DeviceSubmission::new("Hub", "AA", None),
            Err(FormError::AccessLevelRequired)
        );
    }

    #[test]
    fn test_submit_form_uses_typed_input() {
        let mut controller = ViewController::new(1);
        controller.open_dialog();
        {
            let form = controller.form_mut();
            form.name = "Gate Keypad".into();
            form.mac_address = "DE:AD:BE:EF:00:01".into();
            form.access_level = Some(AccessLevel::Admin);
        }
        let instructions = controller.submit_form();

        assert!(matches!(
            &instructions[0],
            RenderInstruction::PrependDevice(d) if d.name == "Gate Keypad"
        ));
        assert!(controller.form().is_empty());
        assert_eq!(controller.device_count_label(), "2 Active");
    }

    #[test]
    fn test_gate_action_logs_without_counting() {
        let mut controller = ViewController::new(3);
        let instructions = controller.record_gate_action(GateAction::Close);

        assert_eq!(instructions.len(), 2);
        assert!(matches!(
            &instructions[0],
            RenderInstruction::PrependAccessLog(entry) if entry.message == "Gate closes!"
        ));
        assert_eq!(instructions[1], RenderInstruction::ReplaceIcons);
        assert_eq!(controller.active_devices(), 3);
    }
}
