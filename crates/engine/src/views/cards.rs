//! Card list of stored locations, one delete control per card.

use dioxus::prelude::*;
use friendmap_domain::{LocationRecord, RecordId};

/// Form action that deletes `id`.
///
/// The id is percent-encoded as a single path segment.
pub fn delete_action(id: &RecordId) -> String {
    let segment: String = url::form_urlencoded::byte_serialize(id.as_str().as_bytes()).collect();
    // byte_serialize writes spaces as '+', which a path segment would keep literally.
    format!("/locations/{}/delete", segment.replace('+', "%20"))
}

/// Props for the CardList component
#[derive(Props, Clone, PartialEq)]
pub struct CardListProps {
    /// Records in store order
    pub records: Vec<LocationRecord>,
}

#[component]
pub fn CardList(props: CardListProps) -> Element {
    rsx! {
        div { class: "cards",
            for record in props.records.iter() {
                LocationCard { key: "{record.id}", record: record.clone() }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LocationCardProps {
    record: LocationRecord,
}

#[component]
fn LocationCard(props: LocationCardProps) -> Element {
    let name = props.record.name.as_str();
    let point = props.record.point;
    let action = delete_action(&props.record.id);
    let delete_label = format!("Delete {name}'s location");

    rsx! {
        div { class: "card",
            div { class: "card-body",
                strong { "{name}" }
                br {}
                "Coordinates: {point}"
            }
            form { method: "post", action: "{action}",
                button {
                    r#type: "submit",
                    class: "delete",
                    title: "{delete_label}",
                    aria_label: "{delete_label}",
                    "🗑️"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use friendmap_domain::{LocationName, NewLocation, PlanePoint};

    fn record(key: &str, name: &str, x: i64, y: i64) -> LocationRecord {
        NewLocation::new(LocationName::new(name).unwrap(), PlanePoint::clamped(x, y))
            .into_record(RecordId::new(key).unwrap())
    }

    fn render(records: Vec<LocationRecord>) -> String {
        let mut dom = VirtualDom::new_with_props(CardList, CardListProps { records });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn one_card_per_record() {
        let html = render(vec![
            record("-Na", "Alice", 100, 200),
            record("-Nb", "Bob", 300, 400),
        ]);
        assert_eq!(html.matches(r#"class="card""#).count(), 2);
        assert!(html.contains("<strong>Alice</strong>"));
        assert!(html.contains("Coordinates: (100, 200)"));
        assert!(html.contains("<strong>Bob</strong>"));
        assert!(html.contains("Coordinates: (300, 400)"));
        assert!(html.contains(r#"action="/locations/-Na/delete""#));
        assert!(html.contains(r#"action="/locations/-Nb/delete""#));
    }

    #[test]
    fn cards_keep_store_order() {
        let html = render(vec![
            record("-Nb", "Bob", 300, 400),
            record("-Na", "Alice", 100, 200),
        ]);
        let bob = html.find("<strong>Bob</strong>").unwrap();
        let alice = html.find("<strong>Alice</strong>").unwrap();
        assert!(bob < alice);
    }

    #[test]
    fn delete_action_encodes_unusual_keys() {
        let id = RecordId::new("a b+c%").unwrap();
        assert_eq!(delete_action(&id), "/locations/a%20b%2Bc%25/delete");
    }

    #[test]
    fn names_are_escaped() {
        let html = render(vec![record("-Na", "O'Neil <script>", 1, 1)]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
