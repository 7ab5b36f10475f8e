//! Static screen content: awareness tips, scanner notes and the demo profile.

pub(crate) struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

pub(crate) const TIPS: [Tip; 4] = [
    Tip {
        title: "Why E-Waste is Dangerous",
        body: "Electronic waste contains toxic materials like lead, mercury, and cadmium that can contaminate soil and water.",
    },
    Tip {
        title: "Data Security First",
        body: "Always wipe your personal data from devices before recycling. Use factory reset or professional data destruction services.",
    },
    Tip {
        title: "Battery Disposal",
        body: "Never throw batteries in regular trash. They can cause fires in garbage trucks and landfills.",
    },
    Tip {
        title: "Global E-Waste Crisis",
        body: "The world generates 50 million tons of e-waste annually, but only 20% is properly recycled.",
    },
];

pub(crate) const SCANNER_PROMPT: &str = "Point camera at QR code or barcode";

pub(crate) const SCANNER_NOTICE: &str = "Camera permission required. This would open the camera to scan QR codes and barcodes for e-waste disposal information.";

pub(crate) const SCANNER_STEPS: [&str; 3] = [
    "Scan product QR codes or barcodes",
    "Get disposal instructions",
    "Find nearest recycling centers",
];

pub(crate) struct Profile {
    pub name: &'static str,
    pub email: &'static str,
    pub stats: [(&'static str, &'static str); 3],
}

pub(crate) const PROFILE: Profile = Profile {
    name: "John Doe",
    email: "john.doe@example.com",
    stats: [("1,250", "Points"), ("8", "Contributions"), ("3", "Badges")],
};

pub(crate) const HELP_NOTICE: &str = "Help & Support is not available in this demo.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingKind {
    Switch(bool),
    Link,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Setting {
    pub label: &'static str,
    pub kind: SettingKind,
}

impl Setting {
    pub(crate) fn value_label(&self) -> &'static str {
        match self.kind {
            SettingKind::Switch(true) => "ON",
            SettingKind::Switch(false) => "OFF",
            SettingKind::Link => "›",
        }
    }
}

pub(crate) fn default_settings() -> Vec<Setting> {
    vec![
        Setting {
            label: "Push Notifications",
            kind: SettingKind::Switch(true),
        },
        Setting {
            label: "Location Sharing",
            kind: SettingKind::Switch(true),
        },
        Setting {
            label: "Help & Support",
            kind: SettingKind::Link,
        },
    ]
}
