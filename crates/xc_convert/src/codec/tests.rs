use alloc::borrow::Cow;
use alloc::collections::{BTreeMap, VecDeque};
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use xc_tree::Element;

use crate::derive::XmlConvert;
use crate::info::{TypePath, Typed};
use crate::ops::{DynamicMapping, DynamicSequence, Mapping, Sequence, XmlIdentity};
use crate::registry::TypeRegistry;
use crate::{ConvertOptions, XmlConverter, XmlError, XmlValue};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(XmlConvert, Default, Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(XmlConvert, Default, Debug, PartialEq)]
struct Line {
    sku: String,
    qty: u16,
}

#[derive(XmlConvert, Default, Debug, PartialEq)]
#[xml(name = "PurchaseOrder")]
struct Order {
    id: u32,
    #[xml(name = "Customer")]
    customer: String,
    placed: NaiveDateTime,
    total: Decimal,
    rush: bool,
    grade: char,
    #[xml(element_name = "Line")]
    lines: Vec<Line>,
    #[xml(element_name = "Tag")]
    tags: VecDeque<String>,
    #[xml(element_name = "Price", key_name = "Sku", value_name = "Amount")]
    prices: BTreeMap<String, f64>,
    note: Option<String>,
    #[xml(ignore)]
    cached: u64,
}

#[derive(XmlConvert, Default, Debug, PartialEq)]
struct Basket {
    items: Vec<u8>,
}

#[derive(XmlConvert, Default, Debug, PartialEq)]
struct Table {
    cells: BTreeMap<u8, String>,
}

#[derive(XmlConvert, Default, Debug)]
struct Bag {
    things: DynamicSequence,
    extras: DynamicMapping,
}

#[derive(XmlConvert, Default, Debug, PartialEq)]
#[xml(identity, name = "Shape")]
struct Shape {
    sides: u8,
}

impl XmlIdentity for Shape {
    fn xml_identifier(&self) -> Cow<'_, str> {
        match self.sides {
            0 => Cow::Borrowed("Circle"),
            n => Cow::Owned(format!("Polygon{n}")),
        }
    }
}

#[derive(XmlConvert, Default, Debug, PartialEq)]
struct Drawing {
    shape: Shape,
}

#[derive(XmlConvert, Default, Debug, PartialEq)]
struct Pair<T> {
    left: T,
    right: T,
}

#[derive(XmlConvert, Debug, PartialEq)]
struct Server {
    port: u16,
    label: Option<u32>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            port: 8080,
            label: None,
        }
    }
}

// `PathBuf` is not a `Member`.
#[derive(XmlConvert, Default, Debug, PartialEq)]
struct Workspace {
    id: u32,
    #[xml(ignore)]
    scratch: PathBuf,
}

#[derive(XmlConvert, Default, Debug, PartialEq)]
struct Sourced<T> {
    value: T,
    #[xml(ignore)]
    origin: PathBuf,
}

fn timestamp() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-05-01T09:30:00.5", "%Y-%m-%dT%H:%M:%S%.f").unwrap()
}

fn order() -> Order {
    Order {
        id: 17,
        customer: String::from("Ada & Co <ltd>"),
        placed: timestamp(),
        total: Decimal::new(1999, 2),
        rush: true,
        grade: 'A',
        lines: vec![
            Line {
                sku: String::from("A-1"),
                qty: 2,
            },
            Line {
                sku: String::from("B-2"),
                qty: 1,
            },
        ],
        tags: VecDeque::from([String::from("gift"), String::from("fragile")]),
        prices: BTreeMap::from([(String::from("A-1"), 4.5), (String::from("B-2"), 10.99)]),
        note: Some(String::from("leave at the door")),
        cached: 0,
    }
}

const EXCLUDE: ConvertOptions = ConvertOptions::EXCLUDE_TYPE_ANNOTATIONS;

// -----------------------------------------------------------------------------
// Round trips

#[test]
fn round_trip_with_type_annotations() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let text = converter.serialize_to_text(&order()).unwrap();
    let back: Order = converter.deserialize_from_text(&text).unwrap();
    assert_eq!(back, order());
}

#[test]
fn round_trip_without_type_annotations() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);

    let text = converter.serialize_to_text(&order()).unwrap();
    assert!(!text.contains("Type="));

    let back: Order = converter.deserialize_from_text(&text).unwrap();
    assert_eq!(back, order());
}

#[test]
fn round_trip_generic_composite() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);
    let pair = Pair {
        left: String::from("l"),
        right: String::from("r"),
    };

    let tree = converter.serialize_to_tree(&pair).unwrap();
    assert_eq!(tree.name(), "Pair");

    let back: Pair<String> = converter.deserialize_from_tree(&tree).unwrap();
    assert_eq!(back, pair);
    assert_eq!(<Pair<u8>>::type_name(), "Pair<u8>");
    assert!(<Pair<u8>>::type_path().ends_with("::Pair<u8>"));
}

#[test]
fn free_functions_match_converter() {
    let registry = TypeRegistry::new();
    let point = Point { x: 3, y: 4 };

    let text = crate::serialize_to_text(&point, EXCLUDE).unwrap();
    assert_eq!(text, "<Point><x>3</x><y>4</y></Point>");

    let tree = crate::serialize_to_tree(&point, EXCLUDE).unwrap();
    let from_tree: Point = crate::deserialize_from_tree(&tree, &registry, EXCLUDE).unwrap();
    let from_text: Point = crate::deserialize_from_text(&text, &registry, EXCLUDE).unwrap();
    assert_eq!(from_tree, point);
    assert_eq!(from_text, point);
}

// -----------------------------------------------------------------------------
// Written form

#[test]
fn members_are_tagged_but_not_the_root() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let text = converter.serialize_to_text(&Point { x: 1, y: -2 }).unwrap();
    assert_eq!(text, r#"<Point><x Type="i32">1</x><y Type="i32">-2</y></Point>"#);

    let text = converter.serialize_to_text(&Basket { items: vec![1] }).unwrap();
    assert_eq!(
        text,
        r#"<Basket><items Type="alloc::vec::Vec&lt;u8&gt;"><Element Type="u8">1</Element></items></Basket>"#
    );
}

#[test]
fn mapping_pairs_are_not_tagged() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);
    let table = Table {
        cells: BTreeMap::from([(1, String::from("one"))]),
    };

    let tree = converter.serialize_to_tree(&table).unwrap();
    let pair = &tree.child("cells").unwrap().children()[0];
    assert_eq!(pair.name(), "Element");
    assert_eq!(pair.attribute("Type"), None);
    assert_eq!(pair.children()[0].attribute("Type"), Some("u8"));
    assert_eq!(pair.children()[1].attribute("Type"), Some("alloc::string::String"));
}

#[test]
fn custom_collection_names() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);

    let tree = converter.serialize_to_tree(&order()).unwrap();
    assert_eq!(tree.name(), "PurchaseOrder");
    assert_eq!(tree.child("Customer").unwrap().text(), Some("Ada & Co <ltd>"));
    assert!(tree.child("customer").is_none());

    let lines = tree.child("lines").unwrap();
    assert!(lines.children().iter().all(|line| line.name() == "Line"));
    assert_eq!(lines.children()[0].child("sku").unwrap().text(), Some("A-1"));

    let tags = tree.child("tags").unwrap();
    assert_eq!(tags.children()[1].name(), "Tag");
    assert_eq!(tags.children()[1].text(), Some("fragile"));

    let price = &tree.child("prices").unwrap().children()[0];
    assert_eq!(price.name(), "Price");
    assert_eq!(price.children()[0].name(), "Sku");
    assert_eq!(price.children()[0].text(), Some("A-1"));
    assert_eq!(price.children()[1].name(), "Amount");
    assert_eq!(price.children()[1].text(), Some("4.5"));
}

#[test]
fn scalar_text_forms() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);

    let tree = converter.serialize_to_tree(&order()).unwrap();
    assert_eq!(tree.child("placed").unwrap().text(), Some("2024-05-01T09:30:00.500"));
    assert_eq!(tree.child("total").unwrap().text(), Some("19.99"));
    assert_eq!(tree.child("rush").unwrap().text(), Some("true"));
    assert_eq!(tree.child("grade").unwrap().text(), Some("A"));
}

#[test]
fn pretty_output_parses_back() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);
    let point = Point { x: 1, y: -2 };

    let text = converter.serialize_to_text_pretty(&point).unwrap();
    assert_eq!(text, "<Point>\n  <x>1</x>\n  <y>-2</y>\n</Point>");

    let back: Point = converter.deserialize_from_text(&text).unwrap();
    assert_eq!(back, point);
}

// -----------------------------------------------------------------------------
// Element names

#[test]
fn identity_outranks_static_name() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);

    let text = converter.serialize_to_text(&Shape { sides: 4 }).unwrap();
    assert_eq!(text, "<Polygon4><sides>4</sides></Polygon4>");

    let text = converter.serialize_to_text(&Shape { sides: 0 }).unwrap();
    assert_eq!(text, "<Circle><sides>0</sides></Circle>");

    // The root name is not checked on input.
    let back: Shape = converter.deserialize_from_text(&text).unwrap();
    assert_eq!(back, Shape { sides: 0 });
}

#[test]
fn nested_composite_takes_member_name() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);
    let drawing = Drawing {
        shape: Shape { sides: 3 },
    };

    let text = converter.serialize_to_text(&drawing).unwrap();
    assert_eq!(text, "<Drawing><shape><sides>3</sides></shape></Drawing>");

    let back: Drawing = converter.deserialize_from_text(&text).unwrap();
    assert_eq!(back, drawing);
}

// -----------------------------------------------------------------------------
// Member presence

#[test]
fn ignored_member_is_neither_written_nor_read() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);

    let mut value = order();
    value.cached = 9;
    let mut tree = converter.serialize_to_tree(&value).unwrap();
    assert!(tree.child("cached").is_none());

    tree.push_child(Element::new("cached").with_text("5"));
    let back: Order = converter.deserialize_from_tree(&tree).unwrap();
    assert_eq!(back.cached, 0);
}

#[test]
fn ignored_member_needs_no_conversion() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);

    let info = Workspace::type_info().as_composite().unwrap();
    assert_eq!(info.field_len(), 1);
    assert!(info.field("scratch").is_none());

    let value = Workspace {
        id: 4,
        scratch: PathBuf::from("/tmp/build"),
    };
    let text = converter.serialize_to_text(&value).unwrap();
    assert_eq!(text, "<Workspace><id>4</id></Workspace>");

    let back: Workspace = converter
        .deserialize_from_text("<Workspace><id>4</id><scratch>/etc</scratch></Workspace>")
        .unwrap();
    assert_eq!(back, Workspace { id: 4, scratch: PathBuf::new() });

    let value = Sourced {
        value: 2.5_f64,
        origin: PathBuf::from("a.xml"),
    };
    let text = converter.serialize_to_text(&value).unwrap();
    let back: Sourced<f64> = converter.deserialize_from_text(&text).unwrap();
    assert_eq!(back, Sourced { value: 2.5, origin: PathBuf::new() });
}

#[test]
fn absent_option_is_omitted() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let value = Order {
        note: None,
        ..order()
    };
    let tree = converter.serialize_to_tree(&value).unwrap();
    assert!(tree.child("note").is_none());

    let back: Order = converter.deserialize_from_tree(&tree).unwrap();
    assert_eq!(back.note, None);
}

#[test]
fn missing_element_keeps_default() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let back: Point = converter.deserialize_from_text("<Point><y>3</y></Point>").unwrap();
    assert_eq!(back, Point { x: 0, y: 3 });

    let back: Order = converter.deserialize_from_text("<PurchaseOrder/>").unwrap();
    assert_eq!(back, Order::default());
}

#[test]
fn unknown_elements_are_ignored() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let back: Point = converter
        .deserialize_from_text("<Point><z>9</z><x>1</x><y>2</y></Point>")
        .unwrap();
    assert_eq!(back, Point { x: 1, y: 2 });
}

// -----------------------------------------------------------------------------
// Leniency

#[test]
fn unparseable_scalar_keeps_default() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let back: Point = converter
        .deserialize_from_text("<Point><x>abc</x><y> 2 </y></Point>")
        .unwrap();
    assert_eq!(back, Point { x: 0, y: 2 });

    let text = "<PurchaseOrder><rush>TRUE</rush><grade>AB</grade><id>-1</id></PurchaseOrder>";
    let back: Order = converter.deserialize_from_text(text).unwrap();
    assert!(back.rush);
    assert_eq!(back.grade, char::default());
    assert_eq!(back.id, 0);
}

#[test]
fn unparseable_scalar_leaves_member_untouched() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let back: Server = converter
        .deserialize_from_text("<Server><port>abc</port><label>xyz</label></Server>")
        .unwrap();
    assert_eq!(back, Server::default());

    let back: Server = converter
        .deserialize_from_text("<Server><port>99999</port><label>7</label></Server>")
        .unwrap();
    assert_eq!(back, Server { port: 8080, label: Some(7) });
}

#[test]
fn unparseable_items_and_pairs_are_skipped() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);

    let text = "<Basket><items>\
                <Element>1</Element><Element>x</Element><Element>300</Element><Element>3</Element>\
                </items></Basket>";
    let back: Basket = converter.deserialize_from_text(text).unwrap();
    assert_eq!(back.items, vec![1, 3]);

    let text = "<Table><cells>\
                <Element><Key>1</Key><Value>one</Value></Element>\
                <Element><Key>z</Key><Value>zed</Value></Element>\
                <Element><Key>2</Key><Value>two</Value></Element>\
                </cells></Table>";
    let back: Table = converter.deserialize_from_text(text).unwrap();
    assert_eq!(
        back.cells,
        BTreeMap::from([(1, String::from("one")), (2, String::from("two"))])
    );
}

#[test]
fn empty_containers() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);

    let text = converter.serialize_to_text(&Basket::default()).unwrap();
    assert_eq!(text, "<Basket><items/></Basket>");

    let back: Basket = converter.deserialize_from_text(&text).unwrap();
    assert!(back.items.is_empty());

    let back: Table = converter
        .deserialize_from_text("<Table><cells></cells></Table>")
        .unwrap();
    assert!(back.cells.is_empty());
}

#[test]
fn item_names_are_not_matched_on_input() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let back: Basket = converter
        .deserialize_from_text("<Basket><items><A>1</A><B>2</B></items></Basket>")
        .unwrap();
    assert_eq!(back.items, [1, 2]);

    let back: Table = converter
        .deserialize_from_text("<Table><cells><P><V>7</V><K>seven</K></P></cells></Table>")
        .unwrap();
    assert_eq!(back.cells, BTreeMap::from([(7, String::from("seven"))]));
}

#[test]
fn malformed_pair_stops_mapping() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let text = "<Table><cells>\
        <Element><Key>1</Key><Value>one</Value></Element>\
        <Element><Key>2</Key></Element>\
        <Element></Element>\
        <Element><Key>4</Key></Element>\
        <Element><Key>5</Key><Value>five</Value></Element>\
        </cells></Table>";

    let back: Table = converter.deserialize_from_text(text).unwrap();
    assert_eq!(back.cells, BTreeMap::from([(1, String::from("one"))]));
}

// -----------------------------------------------------------------------------
// Type tags

#[test]
fn unknown_tag_falls_back_to_declared_type() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let text = r#"<Basket><items><Element Type="System.Byte">4</Element></items></Basket>"#;
    let back: Basket = converter.deserialize_from_text(text).unwrap();
    assert_eq!(back.items, [4]);
}

#[test]
fn registered_tag_overrides_declared_type() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    // Read as `u16`, then rejected by the `Vec<u8>`.
    let text = r#"<Basket><items><Element Type="u16">4</Element><Element>5</Element></items></Basket>"#;
    let back: Basket = converter.deserialize_from_text(text).unwrap();
    assert_eq!(back.items, [5]);
}

fn bag() -> Bag {
    let mut things = DynamicSequence::new();
    things.extend(1_u8);
    things.extend(String::from("two"));
    things.extend(Line {
        sku: String::from("C-3"),
        qty: 3,
    });

    let mut extras = DynamicMapping::new();
    extras.insert_value(String::from("pi"), 3.25_f64);
    extras.insert_value(7_i64, true);

    Bag { things, extras }
}

#[test]
fn erased_containers_need_registered_tags() {
    let mut registry = TypeRegistry::new();
    registry.register::<Line>();
    let converter = XmlConverter::new(&registry);

    let text = converter.serialize_to_text(&bag()).unwrap();
    let back: Bag = converter.deserialize_from_text(&text).unwrap();
    assert!(back.xml_partial_eq(&bag()));

    // `Line` is not registered here, so that item is dropped.
    let scalars_only = TypeRegistry::new();
    let back: Bag = XmlConverter::new(&scalars_only)
        .deserialize_from_text(&text)
        .unwrap();
    assert_eq!(back.things.len(), 2);
    assert_eq!(back.extras.len(), 2);

    let back: Bag = XmlConverter::new(&TypeRegistry::empty())
        .deserialize_from_text(&text)
        .unwrap();
    assert!(back.things.is_empty());
    assert!(back.extras.is_empty());
}

#[test]
fn erased_containers_without_annotations_read_empty() {
    let mut registry = TypeRegistry::new();
    registry.register::<Line>();
    let converter = XmlConverter::new(&registry).with_options(EXCLUDE);

    let tree = converter.serialize_to_tree(&bag()).unwrap();
    assert_eq!(tree.child("things").unwrap().children().len(), 3);
    assert_eq!(tree.child("extras").unwrap().children().len(), 2);

    let back: Bag = converter.deserialize_from_tree(&tree).unwrap();
    assert!(back.things.is_empty());
    assert!(back.extras.is_empty());
}

// -----------------------------------------------------------------------------
// Boundary errors

#[test]
fn scalar_root_is_rejected() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let err = converter.serialize_to_text(&5_u8).unwrap_err();
    assert!(matches!(err, XmlError::NotComposite { type_path: "u8" }));

    let err = converter
        .deserialize_from_tree_by_info(u8::type_info(), &Element::new("u8"))
        .unwrap_err();
    assert!(matches!(err, XmlError::NotComposite { .. }));
}

#[test]
fn malformed_markup_is_an_error() {
    let registry = TypeRegistry::new();
    let converter = XmlConverter::new(&registry);

    let err = converter.deserialize_from_text::<Point>("<Point><x>1</y></Point>").unwrap_err();
    assert!(matches!(err, XmlError::Tree(_)));
}

#[test]
fn deserialize_by_type_path() {
    let mut registry = TypeRegistry::new();
    registry.register::<Point>();
    let converter = XmlConverter::new(&registry);

    let value = converter
        .deserialize_from_text_by_path(Point::type_path(), "<Point><x>5</x></Point>")
        .unwrap();
    assert_eq!(value.take::<Point>().unwrap(), Point { x: 5, y: 0 });

    let err = converter
        .deserialize_from_text_by_path("shop::Missing", "<Missing/>")
        .unwrap_err();
    assert!(matches!(err, XmlError::UnknownType { type_path } if type_path == "shop::Missing"));
}
