#![cfg(target_arch = "wasm32")]

use nodetools::bindings;
use scopeguard::defer;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;
use wasm_bindgen_test::wasm_bindgen_test_configure;
use web_sys::Element;
use web_sys::js_sys::Array;
use web_sys::js_sys::JSON;
use web_sys::js_sys::Reflect;

wasm_bindgen_test_configure!(run_in_browser);

fn root(id: &str, html: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    root.set_id(id);
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn js(json: &str) -> JsValue {
    JSON::parse(json).unwrap()
}

#[wasm_bindgen_test]
fn append_node() {
    let root = root("js-node", "");
    defer!(root.remove());

    let created = bindings::append_node(js(
        r#"{ "parent": "js-node", "e": "a", "text": "link", "params": { "href": "/", "tabindex": 2 } }"#,
    ));
    assert_eq!(None, created);
    assert_eq!(r#"<a href="/" tabindex="2">link</a>"#, root.inner_html());
}

#[wasm_bindgen_test]
fn append_node_with_number_text() {
    let root = root("js-number", "");
    defer!(root.remove());

    bindings::append_node(js(r#"{ "parent": "js-number", "e": "p", "text": 5 }"#));
    assert_eq!("<p>5</p>", root.inner_html());
}

#[wasm_bindgen_test]
fn append_node_to_live_parent() {
    let root = root("js-live", "");
    defer!(root.remove());

    let description = js(r#"{ "e": "input", "params": { "id": "js-live-input", "disabled": null } }"#);
    Reflect::set(&description, &"parent".into(), &root).unwrap();
    let created = bindings::append_node(description).unwrap();
    assert_eq!("js-live-input", created.id());
    assert_eq!(r#"<input id="js-live-input" disabled="">"#, root.inner_html());
}

#[wasm_bindgen_test]
fn append_component() {
    let root = root("js-component", "");
    defer!(root.remove());

    bindings::append_component(js(r#"{
        "z": { "parent": "js-component", "e": "h1" },
        "a": [
            { "parent": "js-component", "e": "p", "text": "1" },
            { "parent": "js-component", "e": "p", "text": "2" }
        ]
    }"#));
    assert_eq!("<h1></h1><p>1</p><p>2</p>", root.inner_html());
}

#[wasm_bindgen_test]
fn remove_group_children() {
    let root = root(
        "js-group",
        r#"<p id="js-group-a">1</p><p id="js-group-b">2</p>"#,
    );
    defer!(root.remove());

    let group = Array::new();
    group.push(&"js-group-a".into());
    group.push(&JsValue::from(3));
    group.push(&root.last_element_child().unwrap());
    bindings::remove_group_children(group.into());
    assert_eq!(
        r#"<p id="js-group-a"></p><p id="js-group-b"></p>"#,
        root.inner_html()
    );
}

#[wasm_bindgen_test]
fn select_accessors() {
    let root = root(
        "js-select",
        r#"<select id="js-select-s"><option value="10">A</option><option value="20">B</option></select>"#,
    );
    defer!(root.remove());

    bindings::set_select_index("js-select-s".into(), "1".into());
    let indexes = bindings::get_select_index("js-select-s".into());
    assert_eq!(1, indexes.length());
    assert_eq!(Some(1.), indexes.get(0).as_f64());

    let values = bindings::get_select_value("js-select-s".into(), Some("int".into()));
    assert_eq!(Some(20.), values.get(0).as_f64());
    let values = bindings::get_select_value("js-select-s".into(), None);
    assert_eq!(Some("20".to_owned()), values.get(0).as_string());

    bindings::set_select_index("js-select-s".into(), JsValue::UNDEFINED);
    let values = bindings::get_select_value("js-select-s".into(), None);
    assert!(values.get(0).is_null());
}

#[wasm_bindgen_test]
fn select_index_normalization() {
    let root = root(
        "js-index",
        r#"<select id="js-index-s"><option>A</option><option>B</option><option>C</option></select>"#,
    );
    defer!(root.remove());

    let index_after = |index: JsValue| {
        bindings::set_select_index("js-index-s".into(), JsValue::from(1));
        bindings::set_select_index("js-index-s".into(), index);
        bindings::get_select_index("js-index-s".into()).get(0).as_f64()
    };
    assert_eq!(Some(2.), index_after(JsValue::from(2.7)));
    assert_eq!(Some(0.), index_after(JsValue::from(-0.5)));
    assert_eq!(Some(2.), index_after("0x2".into()));
    assert_eq!(Some(2.), index_after(" 2nd".into()));
    assert_eq!(Some(-1.), index_after(JsValue::from(f64::NAN)));
    assert_eq!(Some(-1.), index_after(JsValue::from(f64::INFINITY)));
    assert_eq!(Some(-1.), index_after(JsValue::TRUE));
    assert_eq!(Some(-1.), index_after(JsValue::NULL));
    assert_eq!(Some(-1.), index_after(JsValue::UNDEFINED));
    assert_eq!(Some(-1.), index_after("two".into()));
}
