//! Host configuration object, grouped the way the host's property pane groups it.
//!
//! Values arrive unvalidated; run them through [`crate::validate::validate_settings`]
//! before use.

use serde::{Deserialize, Deserializer, Serialize};

/// Default text size (points) for header and chiclet labels.
pub const DEFAULT_TEXT_SIZE: f64 = 10.0;

/// Grid fill direction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
    /// Passed through unchanged; the renderer picks its own fallback
    Unrecognized(String),
}

impl From<String> for Orientation {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Horizontal" => Self::Horizontal,
            "Vertical" => Self::Vertical,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<Orientation> for String {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Horizontal => "Horizontal".to_string(),
            Orientation::Vertical => "Vertical".to_string(),
            Orientation::Unrecognized(s) => s,
        }
    }
}

/// Placement of items that are not selectable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShowDisabled {
    /// Keep host order
    #[default]
    Inplace,
    /// Move to the end, preserving relative order
    Bottom,
    /// Drop from the item list
    Hide,
    Unrecognized(String),
}

impl From<String> for ShowDisabled {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Inplace" => Self::Inplace,
            "Bottom" => Self::Bottom,
            "Hide" => Self::Hide,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<ShowDisabled> for String {
    fn from(s: ShowDisabled) -> Self {
        match s {
            ShowDisabled::Inplace => "Inplace".to_string(),
            ShowDisabled::Bottom => "Bottom".to_string(),
            ShowDisabled::Hide => "Hide".to_string(),
            ShowDisabled::Unrecognized(other) => other,
        }
    }
}

/// Full settings object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub system: SystemSettings,
    pub header: HeaderSettings,
    pub header_text: HeaderTextSettings,
    pub slicer_text: SlicerTextSettings,
    pub slicer_item_container: ItemContainerSettings,
    pub images: ImageSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSettings {
    pub orientation: Orientation,
    /// 0 = auto
    pub columns: f64,
    /// 0 = auto
    pub rows: f64,
    pub multiselect: bool,
    /// Never let the selection become empty
    pub forced_selection: bool,
    pub show_disabled: ShowDisabled,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            columns: 3.0,
            rows: 0.0,
            multiselect: true,
            forced_selection: false,
            show_disabled: ShowDisabled::Inplace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSettings {
    /// Persisted selection blob (JSON array of identities)
    pub selection: Option<String>,
    /// Shows the search box and enables search filtering
    pub self_filter_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderSettings {
    pub show: bool,
    pub title: String,
    pub font_color: String,
    pub background: Option<String>,
    #[serde(deserialize_with = "text_size")]
    pub text_size: f64,
    pub outline: String,
    pub outline_color: String,
    pub outline_weight: f64,
    pub border_bottom_width: f64,
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            show: true,
            title: String::new(),
            font_color: "#a6a6a6".to_string(),
            background: None,
            text_size: DEFAULT_TEXT_SIZE,
            outline: "BottomOnly".to_string(),
            outline_color: "#a6a6a6".to_string(),
            outline_weight: 1.0,
            border_bottom_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderTextSettings {
    pub margin_left: f64,
    pub margin_top: f64,
}

impl Default for HeaderTextSettings {
    fn default() -> Self {
        Self {
            margin_left: 5.0,
            margin_top: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlicerTextSettings {
    #[serde(deserialize_with = "text_size")]
    pub text_size: f64,
    /// Cell height, 0 = auto from text metrics
    pub height: f64,
    /// Cell width, 0 = auto from the grid viewport
    pub width: f64,
    pub selected_color: String,
    pub hover_color: String,
    pub unselected_color: String,
    pub disabled_color: String,
    pub background: Option<String>,
    /// Background transparency in percent
    pub transparency: f64,
    pub font_color: String,
    pub outline: String,
    pub outline_color: String,
    pub outline_weight: f64,
    pub padding: f64,
    pub border_style: String,
}

impl Default for SlicerTextSettings {
    fn default() -> Self {
        Self {
            text_size: DEFAULT_TEXT_SIZE,
            height: 0.0,
            width: 0.0,
            selected_color: "#BDD7EE".to_string(),
            hover_color: "#212121".to_string(),
            unselected_color: "#FFFFFF".to_string(),
            disabled_color: "#808080".to_string(),
            background: None,
            transparency: 0.0,
            font_color: "#666666".to_string(),
            outline: "Frame".to_string(),
            outline_color: "#000000".to_string(),
            outline_weight: 1.0,
            padding: 3.0,
            border_style: "Cut".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemContainerSettings {
    pub margin_left: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSettings {
    pub clickable_image: bool,
    /// Share of the cell height given to the image, in percent
    pub image_split: f64,
    pub stretch_image: bool,
    pub bottom_image: bool,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            clickable_image: false,
            image_split: 50.0,
            stretch_image: false,
            bottom_image: false,
        }
    }
}

/// Hosts send text sizes as numbers or numeric strings ("10").
fn text_size<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    let size = match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(NumberOrString::Number(n)) => Some(n),
        Some(NumberOrString::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    };
    Ok(size
        .filter(|n| n.is_finite())
        .unwrap_or(DEFAULT_TEXT_SIZE))
}
