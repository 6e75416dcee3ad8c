// File: crates/quadrant-core/src/dom.rs
// Summary: Minimal retained-mode element tree with bubbling event dispatch.
//
// Any surface supporting element creation, attributes, classes and bubbling
// events can host the chart; this arena-backed tree is the headless default.

use serde_json::Value;

/// Handle into the document arena. Stable for the lifetime of the element,
/// which is what keeps hover state attached to surviving nodes across renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Handle to a registered event listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListenerId(usize);

/// A dispatched event. `detail` carries the structured payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub name: String,
    pub detail: Value,
}

impl Event {
    pub fn new(name: impl Into<String>, detail: Value) -> Self {
        Self { name: name.into(), detail }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Leave,
}

/// Raw pointer input aimed at an element, fed to the chart controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: NodeId,
    /// Pointer position in client coordinates.
    pub client: (f64, f64),
}

#[derive(Debug, Default)]
struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    class: String,
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    alive: bool,
}

#[derive(Debug)]
struct Listener {
    node: NodeId,
    name: String,
    queue: Vec<Event>,
}

/// Retained element tree. Ids index an arena; removed elements stay allocated
/// but dead, so stale handles degrade to no-ops instead of aliasing.
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Element>,
    listeners: Vec<Listener>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element {
            tag: tag.to_string(),
            alive: true,
            ..Element::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Append `child` under `parent`, detaching it from any previous parent.
    /// Re-appending an existing child moves it to the end of the sibling list.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `child` as the first child of `parent`.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(0, child);
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    /// Detach the subtree rooted at `node` and mark it dead.
    pub fn remove(&mut self, node: NodeId) {
        self.detach(node);
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            self.nodes[n.0].alive = false;
            stack.extend(self.nodes[n.0].children.iter().copied());
        }
    }

    /// Remove every child of `node`.
    pub fn clear_children(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
            let mut stack = vec![child];
            while let Some(n) = stack.pop() {
                self.nodes[n.0].alive = false;
                stack.extend(self.nodes[n.0].children.iter().copied());
            }
        }
    }

    pub fn set_attr(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let attrs = &mut self.nodes[node.0].attrs;
        if let Some(slot) = attrs.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            attrs.push((name.to_string(), value));
        }
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attrs(&self, node: NodeId) -> &[(String, String)] {
        &self.nodes[node.0].attrs
    }

    pub fn set_class(&mut self, node: NodeId, class: impl Into<String>) {
        self.nodes[node.0].class = class.into();
    }

    pub fn class(&self, node: NodeId) -> &str {
        &self.nodes[node.0].class
    }

    /// Whether the element's class list contains `name` as a whole token.
    pub fn class_contains(&self, node: NodeId, name: &str) -> bool {
        self.nodes[node.0].class.split_whitespace().any(|c| c == name)
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        self.nodes[node.0].text = text.into();
    }

    pub fn text(&self, node: NodeId) -> &str {
        &self.nodes[node.0].text
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Direct children whose class list contains `class`, in document order.
    pub fn children_by_class(&self, parent: NodeId, class: &str) -> Vec<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .filter(|&c| self.class_contains(c, class))
            .collect()
    }

    /// All elements in the subtree of `root` (inclusive) whose class list
    /// contains `class`, depth-first.
    pub fn descendants_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(n) = stack.pop() {
            if self.class_contains(n, class) {
                out.push(n);
            }
            for &c in self.nodes[n.0].children.iter().rev() {
                stack.push(c);
            }
        }
        out
    }

    /// Register interest in `name` events reaching `node` (directly or by
    /// bubbling from a descendant).
    pub fn add_listener(&mut self, node: NodeId, name: &str) -> ListenerId {
        self.listeners.push(Listener {
            node,
            name: name.to_string(),
            queue: Vec::new(),
        });
        ListenerId(self.listeners.len() - 1)
    }

    /// Dispatch an event at `target`, bubbling through every ancestor up to
    /// the root. Each listener registered for the event name on a node along
    /// the path receives a copy.
    pub fn dispatch(&mut self, target: NodeId, event: Event) {
        let mut path = vec![target];
        let mut cursor = target;
        while let Some(parent) = self.nodes[cursor.0].parent {
            path.push(parent);
            cursor = parent;
        }
        for listener in &mut self.listeners {
            if listener.name == event.name && path.contains(&listener.node) {
                listener.queue.push(event.clone());
            }
        }
    }

    /// Take every event delivered to `listener` since the last drain.
    pub fn drain(&mut self, listener: ListenerId) -> Vec<Event> {
        std::mem::take(&mut self.listeners[listener.0].queue)
    }
}
