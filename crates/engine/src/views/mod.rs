//! Server-rendered page, built from Dioxus components.
//!
//! Every region renders from one [`LocationSnapshot`]; the page never reads
//! the store itself. `dioxus-ssr` escapes all text and attribute values.

mod cards;
mod plot;
mod style;

use dioxus::prelude::*;
use friendmap_domain::{COORDINATE_STEP, DEFAULT_COORDINATE, PLANE_MAX, PLANE_MIN};

use crate::use_cases::locations::LocationSnapshot;

use cards::CardList;
use plot::Plot;

pub use cards::delete_action;

pub const MAP_EMPTY_MESSAGE: &str =
    "No friend houses added yet. Add some locations to see them on the map!";
pub const LIST_EMPTY_MESSAGE: &str =
    "No friend houses yet. Add your first location using the sidebar!";

/// Render the full HTML document for one render cycle.
pub fn render_page(
    snapshot: LocationSnapshot,
    notice: Option<String>,
    error: Option<String>,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        Page,
        PageProps {
            snapshot,
            notice,
            error,
        },
    );
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    )
}

/// Props for the Page component
#[derive(Props, Clone, PartialEq)]
pub struct PageProps {
    /// The one store read this render cycle draws from
    pub snapshot: LocationSnapshot,
    /// Confirmation left by the previous mutation
    pub notice: Option<String>,
    /// Failure left by the previous mutation
    pub error: Option<String>,
}

/// The whole page: sidebar with the add form, main panel with map and list.
#[component]
pub fn Page(props: PageProps) -> Element {
    rsx! {
        head {
            meta { charset: "UTF-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
            title { "Friend Houses Map" }
            style { dangerous_inner_html: style::STYLESHEET }
        }
        body {
            aside { class: "sidebar",
                h2 { "Add New Friend House" }
                if let Some(notice) = props.notice.as_deref() {
                    StatusMessage { tone: Tone::Success, message: notice.to_string() }
                }
                if let Some(error) = props.error.as_deref() {
                    StatusMessage { tone: Tone::Error, message: error.to_string() }
                }
                AddForm {}
            }
            main {
                h1 { "🏠 Friend Houses Map" }
                div { class: "main-columns",
                    section { class: "map-region",
                        MapRegion { snapshot: props.snapshot.clone() }
                    }
                    section { class: "list-region",
                        h2 { "Current Locations" }
                        ListRegion { snapshot: props.snapshot.clone() }
                    }
                }
            }
        }
    }
}

/// Add-location form. Posts back to the server, which redirects to `/`.
#[component]
fn AddForm() -> Element {
    rsx! {
        form { class: "add-form", method: "post", action: "/locations",
            label {
                "Name"
                input {
                    r#type: "text",
                    name: "name",
                    placeholder: "Enter friend's name",
                    autocomplete: "off",
                }
            }
            div { class: "columns",
                CoordinateInput { name: "x".to_string(), label: "X coordinate".to_string() }
                CoordinateInput { name: "y".to_string(), label: "Y coordinate".to_string() }
            }
            button { r#type: "submit", "➕ Add Location" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CoordinateInputProps {
    name: String,
    label: String,
}

/// Bounded numeric input for one axis.
#[component]
fn CoordinateInput(props: CoordinateInputProps) -> Element {
    rsx! {
        div {
            label {
                "{props.label}"
                input {
                    r#type: "number",
                    name: "{props.name}",
                    min: "{PLANE_MIN}",
                    max: "{PLANE_MAX}",
                    step: "{COORDINATE_STEP}",
                    value: "{DEFAULT_COORDINATE}",
                    required: true,
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct RegionProps {
    snapshot: LocationSnapshot,
}

#[component]
fn MapRegion(props: RegionProps) -> Element {
    match props.snapshot {
        LocationSnapshot::Empty => rsx! {
            StatusMessage { tone: Tone::Info, message: MAP_EMPTY_MESSAGE.to_string() }
        },
        LocationSnapshot::Loaded(records) => rsx! {
            Plot { records }
        },
        LocationSnapshot::Unavailable { message } => rsx! {
            StatusMessage { tone: Tone::Unavailable, message }
        },
    }
}

#[component]
fn ListRegion(props: RegionProps) -> Element {
    match props.snapshot {
        LocationSnapshot::Empty => rsx! {
            StatusMessage { tone: Tone::Info, message: LIST_EMPTY_MESSAGE.to_string() }
        },
        LocationSnapshot::Loaded(records) => rsx! {
            CardList { records }
        },
        LocationSnapshot::Unavailable { message } => rsx! {
            StatusMessage { tone: Tone::Unavailable, message }
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Error,
    Info,
    Unavailable,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Success => "notice success",
            Tone::Error => "notice error",
            Tone::Info => "notice info",
            Tone::Unavailable => "notice unavailable",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatusMessageProps {
    tone: Tone,
    message: String,
}

#[component]
fn StatusMessage(props: StatusMessageProps) -> Element {
    let role = match props.tone {
        Tone::Error | Tone::Unavailable => "alert",
        Tone::Success | Tone::Info => "status",
    };
    rsx! {
        div { class: props.tone.class(), role: role, "{props.message}" }
    }
}
