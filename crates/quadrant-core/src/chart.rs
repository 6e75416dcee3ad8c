// File: crates/quadrant-core/src/chart.rs
// Summary: QuadrantChart controller: render/update pipeline and hover events.

use serde_json::{json, Value};
use tracing::{debug, trace};

use crate::axis::{build_ticks, Orient};
use crate::dom::{Document, Event, NodeId, PointerEvent, PointerKind};
use crate::error::{QuadrantError, QuadrantResult};
use crate::layout::ArtboardLayout;
use crate::reconcile::{keyed_join, single_join, KEY_ATTR};
use crate::scale::LinearScale;
use crate::svg::fmt_number;
use crate::types::{ChartConfig, DataPoint, Labels};

/// Event name raised when the pointer enters a node.
pub const NODE_MOUSEOVER: &str = "nodemouseover";
/// Event name raised when the pointer leaves a node.
pub const NODE_MOUSEOUT: &str = "nodemouseout";

const NODE_CLASS: &str = "qc-node";
const NODE_CLASS_ACTIVE: &str = "qc-node active";

/// An xy scatterplot stylized as a business matrix. Owns its data and
/// configuration; visual elements belong to the document passed at render
/// time and are reconciled against it on every call.
pub struct QuadrantChart {
    data: Vec<DataPoint>,
    width: f64,
    height: f64,
    min: f64,
    max: f64,
    labels: Labels,
    name: String,
    unit: f64,
    host: Option<NodeId>,
    artboard: Option<NodeId>,
}

impl QuadrantChart {
    pub fn new(data: Vec<DataPoint>, config: ChartConfig) -> QuadrantResult<Self> {
        if !(config.min < config.max) {
            return Err(QuadrantError::InvalidDomain { min: config.min, max: config.max });
        }
        if !(config.width > 0.0) || !(config.height > 0.0) {
            return Err(QuadrantError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        Ok(Self {
            data,
            width: config.width,
            height: config.height,
            min: config.min,
            max: config.max,
            labels: config.labels,
            name: config.name,
            unit: config.unit,
            host: None,
            artboard: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// Root svg element once rendered.
    pub fn artboard(&self) -> Option<NodeId> {
        self.artboard
    }

    fn x_scale(&self) -> QuadrantResult<LinearScale> {
        LinearScale::x(self.min, self.max, self.width)
    }

    fn y_scale(&self) -> QuadrantResult<LinearScale> {
        LinearScale::y(self.min, self.max, self.height)
    }

    /// Bind to `host` and run the full generation pipeline. The host's
    /// subtree contains the rendered chart afterwards.
    pub fn render(&mut self, doc: &mut Document, host: NodeId) -> QuadrantResult<()> {
        self.host = Some(host);
        self.generate(doc)
    }

    /// Replace data and dimensions wholesale, then re-run the pipeline.
    /// Prior elements are reconciled, not torn down. Requires a prior render.
    pub fn update(
        &mut self,
        doc: &mut Document,
        data: Vec<DataPoint>,
        width: f64,
        height: f64,
    ) -> QuadrantResult<()> {
        if self.host.is_none() {
            return Err(QuadrantError::NotRendered);
        }
        if !(width > 0.0) || !(height > 0.0) {
            return Err(QuadrantError::InvalidDimensions { width, height });
        }
        self.data = data;
        self.width = width;
        self.height = height;
        self.generate(doc)
    }

    /// The fixed pipeline: artboard, container, grid, nodes, axes,
    /// annotations. Later steps depend on geometry set by earlier ones, so
    /// the order is load-bearing.
    fn generate(&mut self, doc: &mut Document) -> QuadrantResult<()> {
        let host = self.host.ok_or(QuadrantError::NotRendered)?;
        let layout = ArtboardLayout::compute(self.unit, self.width, self.height, &self.labels);
        let xs = self.x_scale()?;
        let ys = self.y_scale()?;
        debug!(
            width = self.width,
            height = self.height,
            points = self.data.len(),
            "generating quadrant chart"
        );

        // svg artboard
        let artboard = single_join(doc, host, "svg", &self.name);
        doc.set_attr(artboard, "xmlns", "http://www.w3.org/2000/svg");
        doc.set_attr(
            artboard,
            "viewBox",
            format!(
                "0 0 {} {}",
                fmt_number(layout.viewbox[2]),
                fmt_number(layout.viewbox[3])
            ),
        );

        // wrap content so nothing renders outside the artboard
        let container = single_join(doc, artboard, "g", "qc-container");
        doc.set_attr(
            container,
            "transform",
            format!(
                "translate({},{})",
                fmt_number(layout.offset.0),
                fmt_number(layout.offset.1)
            ),
        );

        // background grid
        let grid = single_join(doc, container, "rect", "qc-grid");
        doc.set_attr(grid, "x", "0");
        doc.set_attr(grid, "y", "0");
        doc.set_attr(grid, "width", fmt_number(self.width));
        doc.set_attr(grid, "height", fmt_number(self.height));

        // data-bound nodes
        let keys: Vec<&str> = self.data.iter().map(|d| d.id.as_str()).collect();
        let join = keyed_join(doc, container, "circle", NODE_CLASS, &keys);
        for (point, &node) in self.data.iter().zip(&join.nodes) {
            doc.set_attr(node, "r", fmt_number(self.unit));
            doc.set_attr(node, "cx", fmt_number(xs.to_px(point.x)));
            doc.set_attr(node, "cy", fmt_number(ys.to_px(point.y)));
        }
        trace!(
            entered = join.entered.len(),
            removed = join.removed,
            "reconciled nodes"
        );

        // axes cross at the grid midlines
        self.generate_axis(
            doc,
            container,
            Orient::Left,
            &ys,
            format!("translate({},0)", fmt_number(xs.range[1] / 2.0)),
        );
        self.generate_axis(
            doc,
            container,
            Orient::Bottom,
            &xs,
            format!("translate(0,{})", fmt_number(ys.range[0] / 2.0)),
        );

        // corner annotations sit on the artboard, outside the container
        let corners = ["tl", "bl", "br", "tr"];
        let annotation_join = keyed_join(doc, artboard, "text", "qc-annotation", &corners);
        for (annotation, &node) in layout.annotations.iter().zip(&annotation_join.nodes) {
            doc.set_attr(
                node,
                "transform",
                format!(
                    "translate({},{})",
                    fmt_number(annotation.position.0),
                    fmt_number(annotation.position.1)
                ),
            );
            doc.set_attr(node, "text-anchor", annotation.anchor.as_str());
            doc.set_text(node, annotation.text.join("/"));
        }

        self.artboard = Some(artboard);
        Ok(())
    }

    /// Rebuild one axis group: domain line plus tick marks with inner size
    /// `unit / 2`. Tick children are regenerated wholesale each pass; only
    /// the group element itself is reconciled.
    fn generate_axis(
        &self,
        doc: &mut Document,
        parent: NodeId,
        orient: Orient,
        scale: &LinearScale,
        transform: String,
    ) {
        let class = match orient {
            Orient::Bottom => "qc-x-axis",
            Orient::Left => "qc-y-axis",
        };
        let group = single_join(doc, parent, "g", class);
        doc.set_attr(group, "transform", transform);
        doc.clear_children(group);

        let inner = self.unit / 2.0;
        let [r0, r1] = scale.range;

        let domain = doc.create_element("path");
        doc.set_class(domain, "qc-domain");
        let d = match orient {
            Orient::Bottom => format!("M{},0H{}", fmt_number(r0), fmt_number(r1)),
            Orient::Left => format!("M0,{}V{}", fmt_number(r0), fmt_number(r1)),
        };
        doc.set_attr(domain, "d", d);
        doc.append_child(group, domain);

        // tick density follows the domain max, as a hint only
        let hint = self.max.max(1.0).round() as usize;
        for tick in build_ticks(scale, hint) {
            let g = doc.create_element("g");
            doc.set_class(g, "qc-tick");
            let line = doc.create_element("line");
            let text = doc.create_element("text");
            match orient {
                Orient::Bottom => {
                    doc.set_attr(g, "transform", format!("translate({},0)", fmt_number(tick.px)));
                    doc.set_attr(line, "y2", fmt_number(inner));
                    doc.set_attr(text, "y", fmt_number(inner + 3.0));
                    doc.set_attr(text, "dy", "0.71em");
                    doc.set_attr(text, "text-anchor", "middle");
                }
                Orient::Left => {
                    doc.set_attr(g, "transform", format!("translate(0,{})", fmt_number(tick.px)));
                    doc.set_attr(line, "x2", fmt_number(-inner));
                    doc.set_attr(text, "x", fmt_number(-(inner + 3.0)));
                    doc.set_attr(text, "dy", "0.32em");
                    doc.set_attr(text, "text-anchor", "end");
                }
            }
            doc.set_text(text, tick.label);
            doc.append_child(g, line);
            doc.append_child(g, text);
            doc.append_child(group, g);
        }
    }

    /// Route a raw pointer event aimed at a node element: toggle the active
    /// class and raise the corresponding bubbling event from the artboard.
    pub fn pointer(&mut self, doc: &mut Document, event: PointerEvent) -> QuadrantResult<()> {
        let artboard = self.artboard.ok_or(QuadrantError::NotRendered)?;
        if !doc.class_contains(event.target, NODE_CLASS) {
            return Ok(());
        }
        match event.kind {
            PointerKind::Enter => {
                let key = match doc.attr(event.target, KEY_ATTR) {
                    Some(key) => key.to_string(),
                    None => return Ok(()),
                };
                // duplicate ids collapse onto one element; last write wins
                let point = match self.data.iter().rev().find(|d| d.id == key) {
                    Some(point) => point.clone(),
                    None => return Ok(()),
                };
                doc.set_class(event.target, NODE_CLASS_ACTIVE);
                let detail = self.hover_detail(&point, event.client);
                doc.dispatch(artboard, Event::new(NODE_MOUSEOVER, detail));
            }
            PointerKind::Leave => {
                doc.set_class(event.target, NODE_CLASS);
                doc.dispatch(artboard, Event::new(NODE_MOUSEOUT, Value::Null));
            }
        }
        Ok(())
    }

    /// Hover payload: id/label/description, the coordinate values keyed by
    /// the axis labels, and the pointer position nudged by half a unit so an
    /// external tooltip clears the cursor.
    fn hover_detail(&self, point: &DataPoint, client: (f64, f64)) -> Value {
        let mut detail = json!({
            "id": point.id,
            "label": point.label,
            "description": point.description,
            "xy": [client.0 + self.unit / 2.0, client.1 + self.unit / 2.0],
        });
        if let Some(map) = detail.as_object_mut() {
            map.insert(self.labels.x.clone(), json!(point.x));
            map.insert(self.labels.y.clone(), json!(point.y));
        }
        detail
    }
}
