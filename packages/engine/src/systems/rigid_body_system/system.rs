#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::rigid_body::{Body, BodyId};

use super::resolve::{resolve_collisions_with_epsilon, ResolveReport};

/// Manages all bodies in the simulation
pub struct BodySystem {
    bodies: Vec<Body>,
    next_id: BodyId,
}

impl BodySystem {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a body and return its freshly assigned ID.
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        body.refresh_geometry();
        self.bodies.push(body);
        id
    }

    /// Remove a body by ID. Keeps the remaining bodies in insertion order
    /// so pair resolution order stays stable.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.bodies.iter().position(|b| b.id == id)?;
        Some(self.bodies.remove(idx))
    }

    /// Remove all bodies (used by WorldCore::clear()).
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.next_id = 1;
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn active_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.active).count()
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Movement and cached geometry for every active body.
    ///
    /// Bodies do not read each other here, so with the `parallel` feature
    /// and `parallel` set the work is spread over the rayon pool.
    pub fn update(&mut self, parallel: bool) {
        #[cfg(feature = "parallel")]
        {
            if parallel {
                self.bodies
                    .par_iter_mut()
                    .filter(|b| b.active)
                    .for_each(|b| b.update());
                return;
            }
        }
        #[cfg(not(feature = "parallel"))]
        let _ = parallel;

        for body in self.bodies.iter_mut().filter(|b| b.active) {
            body.update();
        }
    }

    /// Pairwise collision resolution over the active bodies.
    pub fn resolve(&mut self, epsilon: f64) -> ResolveReport {
        resolve_collisions_with_epsilon(&mut self.bodies, epsilon)
    }
}

impl Default for BodySystem {
    fn default() -> Self {
        Self::new()
    }
}
