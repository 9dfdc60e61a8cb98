use dequal_dom::{DomTree, MemoryDom, NodeId};

/// Page with `body > [div, script, span]`; returns `(dom, body, script)`
#[allow(dead_code)]
pub fn page_with_script() -> (MemoryDom, NodeId, NodeId) {
    let mut dom = MemoryDom::new();
    let root = dom.root();
    let body = dom.append_new(root, "body").unwrap();
    dom.append_new(body, "div").unwrap();
    let script = dom.append_new(body, "script").unwrap();
    dom.set_attribute(script, "type", "module").unwrap();
    dom.set_attribute(script, "data-app", "main").unwrap();
    dom.set_text_content(script, "console.log('app')").unwrap();
    dom.append_new(body, "span").unwrap();
    (dom, body, script)
}

/// Last child of `parent`
#[allow(dead_code)]
pub fn last_child(dom: &MemoryDom, parent: NodeId) -> NodeId {
    *dom.children(parent).unwrap().last().unwrap()
}
