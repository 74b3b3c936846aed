//! A document with hand-filled style, layout and paint state.
//!
//! Each test sets up exactly the computed values, layout nodes and stacking
//! context matrices it needs; the engine traits only hand them back and count
//! how often each refresh was requested.

#![allow(dead_code)]

use std::collections::HashMap;
use std::rc::Rc;

use koala_cssom::values::{AffineTransform, Length, Percentage};
use koala_cssom::{
    ComputedValues, Document, LayoutEngine, LayoutNode, PaintEngine, StyleComputeError,
    StyleComputer, StyleProperties, StyleValue,
};
use koala_dom::{DomTree, ElementData, NodeId, NodeType};

/// Route `koala` diagnostics to the test output. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
pub struct TestDocument {
    pub dom: DomTree,
    /// What the cascade produced on the last style update.
    pub computed: HashMap<NodeId, StyleProperties>,
    /// Layout nodes; elements missing here have no box.
    pub layout: HashMap<NodeId, LayoutNode>,
    /// Stacking context matrices, only visible once the tree is built.
    pub stacking_matrices: HashMap<NodeId, AffineTransform>,
    /// What `compute_style` returns for elements without a box.
    pub on_demand: HashMap<NodeId, Result<StyleProperties, StyleComputeError>>,
    pub style_updates: usize,
    pub layout_updates: usize,
    pub stacking_builds: usize,
    stacking_tree_built: bool,
}

impl TestDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with one `<div>` under the root.
    pub fn with_div() -> (Self, NodeId) {
        let mut document = Self::new();
        let div = document.append_element(NodeId::ROOT, "div");
        (document, div)
    }

    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.dom.alloc(NodeType::Element(ElementData::new(tag)));
        self.dom.append_child(parent, id);
        id
    }

    /// An element allocated but never inserted into the tree.
    pub fn detached_element(&mut self, tag: &str) -> NodeId {
        self.dom.alloc(NodeType::Element(ElementData::new(tag)))
    }

    /// Give `element` a box with the given used values and a 20px line height.
    pub fn lay_out(&mut self, element: NodeId, values: ComputedValues) {
        let _ = self.layout.insert(element, LayoutNode::new(values, 20.0));
    }

    pub fn set_computed(&mut self, element: NodeId, style: StyleProperties) {
        let _ = self.computed.insert(element, style);
    }

    pub fn set_on_demand(
        &mut self,
        element: NodeId,
        style: Result<StyleProperties, StyleComputeError>,
    ) {
        let _ = self.on_demand.insert(element, style);
    }

    pub fn set_stacking_matrix(&mut self, element: NodeId, matrix: AffineTransform) {
        let _ = self.stacking_matrices.insert(element, matrix);
    }
}

impl StyleComputer for TestDocument {
    fn compute_style(&self, element: NodeId) -> Result<StyleProperties, StyleComputeError> {
        self.on_demand
            .get(&element)
            .cloned()
            .unwrap_or_else(|| Err(StyleComputeError::new("no style for element")))
    }
}

impl LayoutEngine for TestDocument {
    fn update_style(&mut self) {
        self.style_updates += 1;
    }

    fn update_layout(&mut self) {
        self.layout_updates += 1;
    }

    fn layout_node(&self, element: NodeId) -> Option<&LayoutNode> {
        self.layout.get(&element)
    }
}

impl PaintEngine for TestDocument {
    fn build_stacking_context_tree_if_needed(&mut self) {
        if !self.stacking_tree_built {
            self.stacking_builds += 1;
            self.stacking_tree_built = true;
        }
    }

    fn affine_transform_matrix(&self, element: NodeId) -> Option<AffineTransform> {
        if !self.stacking_tree_built {
            return None;
        }
        self.stacking_matrices.get(&element).copied()
    }
}

impl Document for TestDocument {
    fn dom(&self) -> &DomTree {
        &self.dom
    }

    fn computed_style(&self, element: NodeId) -> Option<&StyleProperties> {
        self.computed.get(&element)
    }
}

pub fn px(value: f64) -> Rc<StyleValue> {
    StyleValue::length(Length::make_px(value))
}

pub fn percent(value: f64) -> Rc<StyleValue> {
    StyleValue::percentage(Percentage(value))
}

/// The entries of a list value, or the value alone if it is not a list.
pub fn entries(value: &Rc<StyleValue>) -> Vec<Rc<StyleValue>> {
    value
        .as_list()
        .map_or_else(|| vec![Rc::clone(value)], |list| list.values().to_vec())
}
