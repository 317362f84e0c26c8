//! Named UI surfaces the dashboard binds to at startup

use crate::types::AccessLevel;

/// A named region of the dashboard that the controller expects to exist.
///
/// Each id mirrors the element id of the original web page so log lines
/// stay greppable across both front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    Dialog,
    AddDeviceButton,
    CloseDialogButton,
    CancelButton,
    DeviceForm,
    DeviceNameField,
    MacAddressField,
    AccessLevelGroup,
    SubmitButton,
    DeviceList,
    DeviceCount,
    AccessLogs,
}

impl SurfaceId {
    /// Every surface that must be present before the dashboard is wired up
    pub const REQUIRED: [SurfaceId; 12] = [
        SurfaceId::Dialog,
        SurfaceId::AddDeviceButton,
        SurfaceId::CloseDialogButton,
        SurfaceId::CancelButton,
        SurfaceId::DeviceForm,
        SurfaceId::DeviceNameField,
        SurfaceId::MacAddressField,
        SurfaceId::AccessLevelGroup,
        SurfaceId::SubmitButton,
        SurfaceId::DeviceList,
        SurfaceId::DeviceCount,
        SurfaceId::AccessLogs,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            SurfaceId::Dialog => "addDeviceModal",
            SurfaceId::AddDeviceButton => "addDeviceBtn",
            SurfaceId::CloseDialogButton => "closeModalBtn",
            SurfaceId::CancelButton => "cancelBtn",
            SurfaceId::DeviceForm => "deviceForm",
            SurfaceId::DeviceNameField => "deviceName",
            SurfaceId::MacAddressField => "macAddress",
            SurfaceId::AccessLevelGroup => "accessLevel",
            SurfaceId::SubmitButton => "submitBtn",
            SurfaceId::DeviceList => "devicesList",
            SurfaceId::DeviceCount => "deviceCount",
            SurfaceId::AccessLogs => "accessLogs",
        }
    }

    /// True for surfaces that live inside the dialog's content region
    pub fn is_dialog_content(&self) -> bool {
        matches!(
            self,
            SurfaceId::Dialog
                | SurfaceId::CloseDialogButton
                | SurfaceId::CancelButton
                | SurfaceId::DeviceForm
                | SurfaceId::DeviceNameField
                | SurfaceId::MacAddressField
                | SurfaceId::AccessLevelGroup
                | SurfaceId::SubmitButton
        )
    }
}

impl std::fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.element_id())
    }
}

/// What a pointer press landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A named surface
    Surface(SurfaceId),
    /// One option of the access level choice group
    AccessOption(AccessLevel),
    /// The dimmed area around a visible dialog
    Backdrop,
    /// Nothing interactive
    Elsewhere,
}
