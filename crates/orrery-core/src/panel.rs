//! Info-panel model. The DOM panel itself lives on the JS side; this module
//! owns its visibility and the fields it renders.

use serde::Serialize;

use crate::catalog::BodyDescriptor;

/// The fields the info panel displays for one body.
/// Field names match the JSON keys the host page template expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelFields {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub diameter: &'static str,
    pub distance: &'static str,
    #[serde(rename = "dayLength")]
    pub day_length: &'static str,
    #[serde(rename = "yearLength")]
    pub year_length: &'static str,
    pub description: &'static str,
}

impl PanelFields {
    pub fn for_body(descriptor: &BodyDescriptor) -> Self {
        Self {
            name: descriptor.info.name,
            kind: descriptor.kind.label(),
            diameter: descriptor.info.diameter,
            distance: descriptor.info.distance,
            day_length: descriptor.info.day_length,
            year_length: descriptor.info.year_length,
            description: descriptor.info.description,
        }
    }
}

/// Visibility and content state for the info panel.
#[derive(Debug, Default)]
pub struct PanelState {
    visible: bool,
    fields: Option<PanelFields>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate and show the panel. Replaces any previous content.
    pub fn show(&mut self, fields: PanelFields) {
        self.fields = Some(fields);
        self.visible = true;
    }

    /// Hide the panel and drop its content. Idempotent.
    pub fn hide(&mut self) {
        self.visible = false;
        self.fields = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn fields(&self) -> Option<&PanelFields> {
        self.fields.as_ref()
    }

    /// Serialize the visible fields for the DOM panel; `null` when hidden.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.fields.filter(|_| self.visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CATALOG, EARTH};

    #[test]
    fn earth_fields_come_from_the_catalog() {
        let fields = PanelFields::for_body(&CATALOG[EARTH]);
        assert_eq!(fields.name, "Earth");
        assert_eq!(fields.kind, "Terrestrial Planet");
        assert_eq!(fields.diameter, "12,756 km");
        assert_eq!(fields.distance, "1 AU from Sun");
        assert_eq!(fields.day_length, "24 hours");
        assert_eq!(fields.year_length, "365.25 days");
    }

    #[test]
    fn show_then_hide_round_trips() {
        let mut panel = PanelState::new();
        assert!(!panel.is_visible());

        panel.show(PanelFields::for_body(&CATALOG[EARTH]));
        assert!(panel.is_visible());
        assert_eq!(panel.fields().unwrap().name, "Earth");

        panel.hide();
        assert!(!panel.is_visible());
        assert!(panel.fields().is_none());

        // Hiding again changes nothing.
        panel.hide();
        assert!(!panel.is_visible());
    }

    #[test]
    fn json_uses_host_page_keys() {
        let mut panel = PanelState::new();
        panel.show(PanelFields::for_body(&CATALOG[EARTH]));
        let json = panel.to_json().unwrap();
        assert!(json.contains("\"type\":\"Terrestrial Planet\""));
        assert!(json.contains("\"dayLength\":\"24 hours\""));
        assert!(json.contains("\"yearLength\":\"365.25 days\""));
    }

    #[test]
    fn json_is_null_when_hidden() {
        let panel = PanelState::new();
        assert_eq!(panel.to_json().unwrap(), "null");
    }
}
