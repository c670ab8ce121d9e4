use log::{debug, warn};

use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Checks that every arc points at a usable vertex.
    ///
    /// An arc is dangling when its target is out of range, or when it targets
    /// id 0 while slot 0 is only a gap-filled placeholder. Negative weights
    /// are rejected here as well, since the search cannot handle them.
    /// Runs in O(total arcs) and reports the first violation found.
    pub fn validate(&self) -> Result<()> {
        for vertex in self.vertices() {
            debug_assert_eq!(self.vertices()[vertex.id()].id(), vertex.id());
            for (target, weight) in vertex.arcs() {
                let dangling = match self.vertices().get(target) {
                    None => true,
                    Some(t) => target == 0 && !t.is_declared(),
                };
                if dangling {
                    warn!("vertex {} has dangling arc to {}", vertex.id(), target);
                    return Err(Error::Validation {
                        vertex: vertex.id(),
                        target,
                    });
                }
                if weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: vertex.id(),
                        to: target,
                        weight: weight.to_string(),
                    });
                }
            }
        }
        debug!(
            "validated graph with {} vertices and {} arcs",
            self.vertex_count(),
            self.arc_count()
        );
        Ok(())
    }
}
