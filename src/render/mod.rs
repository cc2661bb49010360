//! Raster figures of the antenna graph.
//!
//! Two PNG files per run, both drawn with the same [`Layout`]:
//! - the original graph,
//! - the solution: the subgraph induced by the selected antennas, then the
//!   subgraph induced by the rest, drawn as two layers on one canvas. Edges
//!   between the two sides belong to neither induced subgraph and are not drawn.

pub mod canvas;
pub mod theme;

pub use canvas::Canvas;
pub use theme::Style;

use std::path::PathBuf;

use log::{info, warn};

use crate::config::Params;
use crate::error::Result;
use crate::graph::AntennaGraph;
use crate::layout::Layout;
use crate::solution::IndependentSet;

/// Paths of the figures written by [`Visualizer::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedFigures {
    pub original: PathBuf,
    pub solution: PathBuf,
}

/// Draws one layer: edges first, then nodes, then labels.
///
/// Nodes missing from `layout` are skipped along with their edges.
pub fn draw_graph(
    canvas: &mut Canvas,
    graph: &AntennaGraph,
    layout: &Layout,
    style: &Style,
    margin: u32,
) {
    let (w, h) = (canvas.width(), canvas.height());
    let at = |id| layout.to_pixels(id, w, h, margin);

    for (u, v) in graph.edges() {
        if let (Some(a), Some(b)) = (at(u), at(v)) {
            canvas.line(a, b, style.edge);
        }
    }

    let nodes = graph.nodes();
    for &id in &nodes {
        match at(id) {
            Some(p) => canvas.node(p, style.node, style.outline),
            None => warn!("node {} has no layout position, skipping", id),
        }
    }
    for &id in &nodes {
        if let Some(p) = at(id) {
            canvas.label(p, &id.to_string(), style.label);
        }
    }
}

#[derive(Clone, Debug)]
pub struct Visualizer {
    pub width: u32,
    pub height: u32,
    /// Free border in pixels; keeps discs and labels inside the canvas.
    pub margin: u32,
    pub original_path: PathBuf,
    pub solution_path: PathBuf,
}

impl Visualizer {
    pub fn from_params(params: &Params) -> Self {
        Visualizer {
            width: params.width,
            height: params.height,
            margin: 2 * theme::NODE_RADIUS as u32,
            original_path: params.original_path(),
            solution_path: params.solution_path(),
        }
    }

    /// Renders the original figure.
    pub fn draw_original(&self, graph: &AntennaGraph, layout: &Layout) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height);
        draw_graph(&mut canvas, graph, layout, &Style::original(), self.margin);
        canvas
    }

    /// Renders the solution figure: selected layer, then unselected layer, one canvas.
    pub fn draw_solution(
        &self,
        graph: &AntennaGraph,
        set: &IndependentSet,
        layout: &Layout,
    ) -> Canvas {
        let selected = graph.induced_subgraph(set.members());
        let unselected = graph.induced_subgraph(&graph.complement_of(set));

        let mut canvas = Canvas::new(self.width, self.height);
        draw_graph(&mut canvas, &selected, layout, &Style::selected(), self.margin);
        draw_graph(&mut canvas, &unselected, layout, &Style::unselected(), self.margin);
        canvas
    }

    /// Renders both figures and writes them, overwriting existing files.
    pub fn render(
        &self,
        graph: &AntennaGraph,
        set: &IndependentSet,
        layout: &Layout,
    ) -> Result<SavedFigures> {
        self.draw_original(graph, layout)
            .save_png(&self.original_path)?;
        self.draw_solution(graph, set, layout)
            .save_png(&self.solution_path)?;

        info!(
            "saved {} and {}",
            self.original_path.display(),
            self.solution_path.display()
        );
        Ok(SavedFigures {
            original: self.original_path.clone(),
            solution: self.solution_path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutParams, spring_layout};
    use crate::render::theme::{BACKGROUND, EDGE, SELECTED_NODE, UNSELECTED_NODE};

    fn visualizer() -> Visualizer {
        Visualizer::from_params(&Params::default())
    }

    fn pixel_of(v: &Visualizer, layout: &Layout, id: u32) -> (u32, u32) {
        let (x, y) = layout.to_pixels(id, v.width, v.height, v.margin).unwrap();
        (x.round() as u32, y.round() as u32)
    }

    #[test]
    fn test_solution_colors_follow_partition() {
        let g = AntennaGraph::from_edges(&[(1, 2), (2, 3), (3, 4)]).unwrap();
        let set = IndependentSet::new(vec![1, 3]);
        let layout = spring_layout(&g, &LayoutParams::default());
        let v = visualizer();
        let canvas = v.draw_solution(&g, &set, &layout);

        // sample just inside the top of each disc, clear of the label
        let probe = |id| {
            let (x, y) = pixel_of(&v, &layout, id);
            *canvas.image().get_pixel(x, y - theme::NODE_RADIUS as u32 + 3)
        };
        assert_eq!(probe(1), SELECTED_NODE);
        assert_eq!(probe(3), SELECTED_NODE);
        assert_eq!(probe(2), UNSELECTED_NODE);
        assert_eq!(probe(4), UNSELECTED_NODE);
    }

    #[test]
    fn test_crossing_edges_are_not_drawn() {
        // 1 and 2 far apart horizontally: the only edge crosses the partition
        let g = AntennaGraph::from_edges(&[(1, 2)]).unwrap();
        let set = IndependentSet::new(vec![1]);
        let layout = spring_layout(&g, &LayoutParams::default());
        let v = visualizer();

        let (ax, ay) = pixel_of(&v, &layout, 1);
        let (bx, by) = pixel_of(&v, &layout, 2);
        let mid = ((ax + bx) / 2, (ay + by) / 2);

        let original = v.draw_original(&g, &layout);
        assert_eq!(*original.image().get_pixel(mid.0, mid.1), EDGE);

        let solution = v.draw_solution(&g, &set, &layout);
        assert_eq!(*solution.image().get_pixel(mid.0, mid.1), BACKGROUND);
    }
}
